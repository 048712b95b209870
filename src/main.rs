//! # Local Repositories CLI
//!
//! This is the binary entry point for the `local-repos` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Setting up logging.
//! - Executing the appropriate command based on the parsed arguments.
//!
//! The repository model lives in the `local_repos` library crate; the binary
//! is a thin wrapper that reads a repositories file and prints what the
//! library derives from it.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
