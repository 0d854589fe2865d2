//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Validates command-specific arguments
//! 2. Calls the library to do the work
//! 3. Formats and displays output
//!
//! Handlers are read-only; nothing on disk is ever modified.

mod compare;
mod get;
mod show;

// Re-export command functions for testing and direct invocation
pub use compare::compare;
pub use get::get;
pub use show::show;

use anyhow::Result;

use crate::cli::args::Command;

/// Dispatch a parsed command to its handler.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Show { manifest, json } => show(&manifest, json),
        Command::Get { manifest, key } => get(&manifest, &key),
        Command::Compare { lhs, rhs } => compare(&lhs, &rhs),
    }
}
