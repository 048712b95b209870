//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands;

/// Local Repositories - Inspect the local repositories you work with
#[derive(Parser, Debug)]
#[command(name = "local-repos")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Path to the repositories file.
    ///
    /// Defaults to `repositories.yaml` in the platform configuration
    /// directory (`~/.config/local-repos` on Linux).
    #[arg(short, long, global = true, value_name = "FILE", env = "LOCAL_REPOS_FILE")]
    file: Option<PathBuf>,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(
        long,
        global = true,
        value_name = "LEVEL",
        default_value = "warn",
        value_parser = ["error", "warn", "info", "debug", "trace"]
    )]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List known repositories
    Ls(commands::ls::LsArgs),

    /// Show everything known about one repository
    Info(commands::info::InfoArgs),

    /// Print the web page of a repository's upstream
    Url(commands::url::UrlArgs),

    /// Validate the repositories file
    Validate(commands::validate::ValidateArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);

        let file = self
            .file
            .unwrap_or_else(local_repos::defaults::default_repositories_file);
        log::debug!("Using repositories file {}", file.display());

        match self.command {
            Commands::Ls(args) => commands::ls::execute(args, &file, &self.color),
            Commands::Info(args) => commands::info::execute(args, &file, &self.color),
            Commands::Url(args) => commands::url::execute(args, &file),
            Commands::Validate(args) => commands::validate::execute(args, &file, &self.color),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}

/// Logs to stderr at `level`; `RUST_LOG` takes precedence when set.
fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    // a logger may already be installed when embedded in tests
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}
