//! Local repository state snapshots.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How far a local branch has diverged from its remote tracking branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AheadBehind {
    /// Commits on the local branch that are not on the remote.
    pub ahead: usize,
    /// Commits on the remote that are not on the local branch.
    pub behind: usize,
}

impl AheadBehind {
    pub fn new(ahead: usize, behind: usize) -> Self {
        Self { ahead, behind }
    }

    /// Returns `true` if the local and remote branches point at the same history.
    pub fn is_in_sync(&self) -> bool {
        self.ahead == 0 && self.behind == 0
    }
}

impl fmt::Display for AheadBehind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ahead, {} behind", self.ahead, self.behind)
    }
}

/// A snapshot of a repository's branch divergence and uncommitted changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LocalRepositoryState {
    /// `None` when the current branch has no upstream.
    #[serde(default)]
    pub ahead_behind: Option<AheadBehind>,
    #[serde(default)]
    pub changed_files_count: usize,
}

impl LocalRepositoryState {
    pub fn new(ahead_behind: Option<AheadBehind>, changed_files_count: usize) -> Self {
        Self {
            ahead_behind,
            changed_files_count,
        }
    }

    /// Returns `true` if there is nothing to commit, push, or pull.
    pub fn is_clean(&self) -> bool {
        self.changed_files_count == 0 && self.ahead_behind.map_or(true, |ab| ab.is_in_sync())
    }
}
