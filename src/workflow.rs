//! Per-repository workflow preferences.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::repository::{is_repository_with_forked_github_repository, Repository};

/// Where contributions from a forked repository are directed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForkContributionTarget {
    /// Contribute to the repository the fork was created from.
    #[default]
    Parent,
    /// Contribute to the fork itself.
    #[serde(rename = "self")]
    Fork,
}

impl fmt::Display for ForkContributionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForkContributionTarget::Parent => write!(f, "parent"),
            ForkContributionTarget::Fork => write!(f, "self"),
        }
    }
}

/// Preferences that change how a repository participates in collaboration
/// workflows. Empty by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WorkflowPreferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fork_contribution_target: Option<ForkContributionTarget>,
}

impl WorkflowPreferences {
    pub fn with_fork_contribution_target(target: ForkContributionTarget) -> Self {
        Self {
            fork_contribution_target: Some(target),
        }
    }
}

/// Returns the repository's fork contribution target, `Parent` if unset.
pub fn get_fork_contribution_target(repository: &Repository) -> ForkContributionTarget {
    repository
        .workflow_preferences()
        .fork_contribution_target
        .unwrap_or_default()
}

/// Returns `true` if the repository is a fork whose contributions go to its
/// parent.
pub fn is_forked_repository_contributing_to_parent(repository: &Repository) -> bool {
    is_repository_with_forked_github_repository(repository)
        && get_fork_contribution_target(repository) == ForkContributionTarget::Parent
}
