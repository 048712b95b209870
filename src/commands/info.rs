//! # Info Command Implementation
//!
//! This module implements the `info` subcommand, which displays everything
//! known about a single repository: its identity, its hosting reference and
//! upstream, its workflow preferences, the recorded local state, linked
//! worktrees, and its fingerprint.
//!
//! This command is read-only.

use anyhow::Result;
use clap::Args;
use std::path::Path;

use local_repos::config::RepositoryEntry;
use local_repos::output::OutputConfig;
use local_repos::summary::RepositorySummary;

/// Show everything known about one repository
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Repository id, display name (`owner/name`), or local name.
    #[arg(value_name = "REPO")]
    pub repo: String,
}

/// Execute the `info` command.
pub fn execute(args: InfoArgs, file: &Path, color_flag: &str) -> Result<()> {
    let entries = super::load_entries(file)?;
    let entry = super::find_entry(&entries, &args.repo)?;
    let out = OutputConfig::from_env_and_flag(color_flag);

    print!("{}", format_info(entry, &out));
    Ok(())
}

const LABEL_WIDTH: usize = 16;

fn field(out: &OutputConfig, label: &str, value: &str) -> String {
    let label = format!("{:<width$}", format!("{}:", label), width = LABEL_WIDTH);
    format!("  {}{}\n", out.heading(&label), value)
}

/// Formats the details of one repository.
fn format_info(entry: &RepositoryEntry, out: &OutputConfig) -> String {
    let repository = &entry.repository;
    let summary = RepositorySummary::from_entry(entry);

    let mut info = format!("{}\n", out.heading(&summary.display_name));
    info.push_str(&field(out, "id", &summary.id.to_string()));
    info.push_str(&field(out, "name", &summary.name));
    info.push_str(&field(out, "path", &summary.path));
    info.push_str(&field(out, "missing", &summary.missing.to_string()));
    info.push_str(&field(out, "tutorial", &summary.tutorial.to_string()));

    match repository.github_repository() {
        Some(github) => {
            info.push_str(&field(out, "hosted as", &github.full_name()));
            info.push_str(&field(out, "endpoint", github.endpoint()));
            if let Some(parent) = github.parent() {
                info.push_str(&field(out, "fork of", &parent.full_name()));
            }
        }
        None => info.push_str(&field(out, "hosted as", "(not hosted)")),
    }

    if let Some(html_url) = &summary.html_url {
        info.push_str(&field(out, "web page", html_url));
    }

    if let Some(target) = summary.fork_contribution_target {
        info.push_str(&field(out, "contributes to", &target.to_string()));
    }

    if let Some(state) = &entry.state {
        let divergence = match state.ahead_behind {
            Some(ahead_behind) => ahead_behind.to_string(),
            None => "no upstream".to_string(),
        };
        let value = format!("{}, {} changed files", divergence, state.changed_files_count);
        info.push_str(&field(out, "local state", &value));
    }

    for worktree in &entry.worktrees {
        let value = format!("{} @ {}", worktree.path().display(), worktree.head);
        info.push_str(&field(out, "worktree", &value));
    }

    info.push_str(&field(out, "hash", &out.dim(&summary.hash)));
    info
}
