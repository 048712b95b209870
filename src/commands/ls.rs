//! # Ls Command Implementation
//!
//! This module implements the `ls` subcommand, which lists the repositories
//! in the repositories file.
//!
//! - **Text Output**: One line per repository with its id, display name, path
//!   and status markers, followed by a count.
//! - **JSON Output**: An array of repository summaries.
//! - **Filtering and Sorting**: Show only missing repositories, and sort by id,
//!   name, or path.
//!
//! This command is read-only.

use anyhow::Result;
use clap::{Args, ValueEnum};
use std::path::Path;

use local_repos::output::OutputConfig;
use local_repos::summary::{self, RepositorySummary};

/// List known repositories
#[derive(Args, Debug)]
pub struct LsArgs {
    /// Output format.
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Show only repositories whose working directory is missing.
    #[arg(long)]
    pub missing: bool,

    /// Sort order for the listing.
    #[arg(short, long, value_enum, default_value = "id")]
    pub sort: SortOrder,

    /// Reverse the sort order.
    #[arg(short, long)]
    pub reverse: bool,

    /// Show only the total count of repositories.
    #[arg(long)]
    pub count: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Sort order options for the listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum SortOrder {
    /// Sort by repository id
    #[default]
    Id,
    /// Sort alphabetically by display name
    Name,
    /// Sort by working directory
    Path,
}

/// Execute the `ls` command.
pub fn execute(args: LsArgs, file: &Path, color_flag: &str) -> Result<()> {
    let entries = super::load_entries(file)?;

    let mut summaries: Vec<RepositorySummary> = entries
        .iter()
        .map(RepositorySummary::from_entry)
        .filter(|summary| !args.missing || summary.missing)
        .collect();

    sort_summaries(&mut summaries, args.sort);
    if args.reverse {
        summaries.reverse();
    }

    if args.count {
        println!("{}", summaries.len());
        return Ok(());
    }

    match args.format {
        OutputFormat::Json => println!("{}", summary::to_json(&summaries)?),
        OutputFormat::Text => {
            let out = OutputConfig::from_env_and_flag(color_flag);
            print!("{}", format_listing(&summaries, &out));
        }
    }

    Ok(())
}

fn sort_summaries(summaries: &mut [RepositorySummary], order: SortOrder) {
    match order {
        SortOrder::Id => summaries.sort_by_key(|s| s.id),
        SortOrder::Name => summaries.sort_by(|a, b| {
            a.display_name
                .to_lowercase()
                .cmp(&b.display_name.to_lowercase())
        }),
        SortOrder::Path => summaries.sort_by(|a, b| a.path.cmp(&b.path)),
    }
}

/// Formats the text listing, aligned on the id and display name columns.
fn format_listing(summaries: &[RepositorySummary], out: &OutputConfig) -> String {
    if summaries.is_empty() {
        return "No repositories.\n".to_string();
    }

    let id_width = summaries
        .iter()
        .map(|s| s.id.to_string().len())
        .max()
        .unwrap_or(1);
    let name_width = summaries
        .iter()
        .map(|s| s.display_name.chars().count())
        .max()
        .unwrap_or(1);

    let mut listing = String::new();
    for summary in summaries {
        let mut line = format!(
            "{:>id_width$}  {:<name_width$}  {}",
            summary.id,
            summary.display_name,
            out.dim(&summary.path),
        );
        for marker in summary.markers() {
            line.push(' ');
            line.push_str(&out.marker(marker));
        }
        listing.push_str(&line);
        listing.push('\n');
    }

    let noun = if summaries.len() == 1 {
        "repository"
    } else {
        "repositories"
    };
    listing.push_str(&format!("\n{} {}\n", summaries.len(), noun));
    listing
}
