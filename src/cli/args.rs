//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--debug`: Enable debug logging

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// mft - Inspect application manifest bundles
#[derive(Parser, Debug)]
#[command(name = "mft")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the well-known fields of a manifest
    #[command(
        long_about = "Print the well-known fields of a manifest.\n\n\
            Reads a .json or .toml manifest file and prints the derived bundle \
            summary: names, version and build strings, identifier, URL schemes, \
            capability declarations, and privacy usage descriptions."
    )]
    Show {
        /// Path to the manifest file (.json or .toml)
        manifest: PathBuf,

        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the raw value for a single key
    #[command(
        long_about = "Print the raw value for a single key.\n\n\
            An absent key is not an error: the command prints nothing and \
            exits successfully."
    )]
    Get {
        /// Path to the manifest file (.json or .toml)
        manifest: PathBuf,

        /// The key to look up
        key: String,
    },

    /// Compare two version strings numerically
    #[command(
        long_about = "Compare two version strings numerically.\n\n\
            Prints '<', '=', or '>'. Components are compared as integers, \
            with shorter versions padded with zeros (1.0 equals 1.0.0). \
            Non-numeric components are rejected."
    )]
    Compare {
        /// Left-hand version string
        lhs: String,

        /// Right-hand version string
        rhs: String,
    },
}
