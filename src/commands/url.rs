//! # Url Command Implementation
//!
//! Prints the web page of a repository's upstream: the parent for a fork, the
//! hosted repository itself otherwise. Fails for repositories that are not
//! hosted, so the output can be passed straight to a browser.

use anyhow::Result;
use clap::Args;
use std::path::Path;

use local_repos::repository::{get_github_html_url, name_of};

/// Print the web page of a repository's upstream
#[derive(Args, Debug)]
pub struct UrlArgs {
    /// Repository id, display name (`owner/name`), or local name.
    #[arg(value_name = "REPO")]
    pub repo: String,

    /// Print the fork's own page instead of its parent's.
    #[arg(long)]
    pub fork: bool,
}

/// Execute the `url` command.
pub fn execute(args: UrlArgs, file: &Path) -> Result<()> {
    let entries = super::load_entries(file)?;
    let repository = &super::find_entry(&entries, &args.repo)?.repository;

    let html_url = if args.fork {
        repository.github_repository().and_then(|gh| gh.html_url())
    } else {
        get_github_html_url(repository)
    };

    match html_url {
        Some(html_url) => {
            println!("{}", html_url);
            Ok(())
        }
        None => Err(local_repos::suggestions::no_html_url(&name_of(repository))),
    }
}
