//! cli
//!
//! Command-line interface layer for the `mft` manifest inspector.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Delegate to command handlers
//! - Never mutates anything: every command is a read-only view over a
//!   manifest file or a pair of version strings

pub mod args;
pub mod commands;

pub use args::Cli;

use anyhow::Result;
use tracing::Level;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let level = if cli.debug { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    commands::dispatch(cli.command)
}
