//! Flattened, serializable views of repositories for display and JSON output.

use serde::Serialize;

use crate::config::RepositoryEntry;
use crate::error::Result;
use crate::repository::{get_github_html_url, is_repository_with_forked_github_repository, name_of};
use crate::status::LocalRepositoryState;
use crate::workflow::{get_fork_contribution_target, ForkContributionTarget};

/// Everything a listing needs to know about one repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositorySummary {
    pub id: i64,
    pub name: String,
    pub display_name: String,
    pub path: String,
    pub missing: bool,
    pub tutorial: bool,
    pub fork: bool,
    pub html_url: Option<String>,
    pub fork_contribution_target: Option<ForkContributionTarget>,
    pub state: Option<LocalRepositoryState>,
    pub hash: String,
}

impl RepositorySummary {
    pub fn from_entry(entry: &RepositoryEntry) -> Self {
        let repository = &entry.repository;
        let fork = is_repository_with_forked_github_repository(repository);

        Self {
            id: repository.id(),
            name: repository.name().to_string(),
            display_name: name_of(repository),
            path: repository.path().display().to_string(),
            missing: repository.missing(),
            tutorial: repository.is_tutorial_repository(),
            fork,
            html_url: get_github_html_url(repository).map(str::to_string),
            // only meaningful for forks
            fork_contribution_target: fork.then(|| get_fork_contribution_target(repository)),
            state: entry.state,
            hash: repository.hash(),
        }
    }

    /// Status markers shown after the path in text listings.
    pub fn markers(&self) -> Vec<&'static str> {
        let mut markers = Vec::new();
        if self.missing {
            markers.push("[missing]");
        }
        if self.tutorial {
            markers.push("[tutorial]");
        }
        if self.fork {
            markers.push("[fork]");
        }
        markers
    }
}

/// Serializes summaries as a pretty-printed JSON array.
pub fn to_json(summaries: &[RepositorySummary]) -> Result<String> {
    Ok(serde_json::to_string_pretty(summaries)?)
}
