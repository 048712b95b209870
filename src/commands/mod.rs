//! # CLI Command Implementations
//!
//! Each subcommand of `local-repos` lives in its own file, with an `Args`
//! struct derived using `clap` and an `execute` function that performs the
//! command by calling into the `local_repos` library.

pub mod completions;
pub mod info;
pub mod ls;
pub mod url;
pub mod validate;

use anyhow::Result;
use std::path::Path;

use local_repos::config::{self, RepositoryEntry};
use local_repos::error::Error;

/// Loads the repositories file, turning a missing file into an error with
/// hints.
pub fn load_entries(file: &Path) -> Result<Vec<RepositoryEntry>> {
    if !file.exists() {
        return Err(local_repos::suggestions::repositories_file_not_found(file));
    }

    config::from_file(file)
        .map_err(|e| anyhow::anyhow!("Failed to load repositories from {}: {}", file.display(), e))
}

/// Finds the entry for `query`, suggesting similar names when none matches.
pub fn find_entry<'a>(entries: &'a [RepositoryEntry], query: &str) -> Result<&'a RepositoryEntry> {
    match config::find(entries, query) {
        Ok(entry) => Ok(entry),
        Err(Error::RepositoryNotFound { query }) => {
            Err(local_repos::suggestions::repository_not_found(&query, entries))
        }
        Err(e) => Err(e.into()),
    }
}
