//! # Error Suggestions
//!
//! Helpers that build user-facing errors with hints. Errors should say what
//! went wrong and how to fix it.
//!
//! ```rust,ignore
//! return Err(suggestions::repositories_file_not_found(path));
//! ```

use std::path::Path;

use crate::config::RepositoryEntry;
use crate::repository::name_of;

/// Error for a repositories file that does not exist.
pub fn repositories_file_not_found(path: &Path) -> anyhow::Error {
    anyhow::anyhow!(
        "Repositories file not found: {path}\n\n\
         hint: Use -f/--file to specify a different path\n\
         hint: Set LOCAL_REPOS_FILE environment variable",
        path = path.display()
    )
}

/// Error for a query that matched no repository.
///
/// Lists up to five names that contain the query, ignoring case.
pub fn repository_not_found(query: &str, entries: &[RepositoryEntry]) -> anyhow::Error {
    let needle = query.to_lowercase();
    let similar: Vec<String> = entries
        .iter()
        .map(|entry| name_of(&entry.repository))
        .filter(|name| name.to_lowercase().contains(&needle))
        .take(5)
        .collect();

    let hint = if similar.is_empty() {
        "hint: Run 'local-repos ls' to see known repositories".to_string()
    } else {
        format!("hint: Did you mean: {}", similar.join(", "))
    };

    anyhow::anyhow!("Repository not found: {query}\n\n{hint}")
}

/// Error for a repository with no hosted web page.
pub fn no_html_url(display_name: &str) -> anyhow::Error {
    anyhow::anyhow!(
        "Repository {display_name} has no hosted web page\n\n\
         hint: Add a 'github' section with an 'html_url' to its entry"
    )
}
