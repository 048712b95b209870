//! Working tree shapes.
//!
//! A repository has one primary working tree (its `path`) and may have any
//! number of linked working trees created with `git worktree add`. Listing
//! them is a git operation and out of scope here; these types only carry the
//! results.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A directory containing a checked-out copy of a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingTree {
    pub path: PathBuf,
}

impl WorkingTree {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// A secondary checkout linked to a main repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedWorkTree {
    #[serde(flatten)]
    pub tree: WorkingTree,
    /// The commit checked out in this worktree.
    pub head: String,
}

impl LinkedWorkTree {
    pub fn new(path: impl Into<PathBuf>, head: impl Into<String>) -> Self {
        Self {
            tree: WorkingTree::new(path),
            head: head.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.tree.path
    }
}

impl AsRef<WorkingTree> for LinkedWorkTree {
    fn as_ref(&self) -> &WorkingTree {
        &self.tree
    }
}
