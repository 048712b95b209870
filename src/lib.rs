//! # Local Repositories Library
//!
//! This library models the local repositories an application knows about: a
//! working directory on disk, the id it was registered under, and optionally
//! the hosted repository it is linked to. It derives what a user interface
//! needs from those values (a display name, the web page to link to, a
//! fingerprint for change detection) without running git or talking to the
//! network. It backs the `local-repos` command-line tool but has no
//! dependency on it.
//!
//! ## Quick Example
//!
//! ```
//! use std::sync::Arc;
//! use local_repos::github::{GitHubRepository, Owner};
//! use local_repos::repository::{get_github_html_url, name_of, Repository};
//!
//! let local = Repository::new("/Users/a/code/my-repo", 1, None, false);
//! assert_eq!(local.name(), "my-repo");
//! assert_eq!(get_github_html_url(&local), None);
//!
//! let upstream = GitHubRepository::new(Owner::new("octocat"), "Hello-World")
//!     .with_html_url("https://github.com/octocat/Hello-World");
//! let hosted = Repository::new("/Users/a/code/checkout", 2, Some(Arc::new(upstream)), false);
//! assert_eq!(hosted.name(), "Hello-World");
//! assert_eq!(name_of(&hosted), "octocat/Hello-World");
//! assert_eq!(
//!     get_github_html_url(&hosted),
//!     Some("https://github.com/octocat/Hello-World")
//! );
//! ```
//!
//! ## Core Concepts
//!
//! - **Repositories (`repository`)**: The immutable `Repository` value and the
//!   free functions that derive display names and URLs from it.
//! - **Hosting references (`github`)**: The hosted counterpart of a
//!   repository, including the parent of a fork.
//! - **Workflow preferences (`workflow`)**: Where a fork's contributions go.
//! - **Snapshots (`status`, `worktree`)**: Ahead/behind counts, uncommitted
//!   changes, and linked worktrees, as reported by git tooling elsewhere.
//! - **Repositories file (`config`)**: The YAML file the CLI reads
//!   repositories from, with validation that the model itself does not do.

pub mod config;
pub mod defaults;
pub mod error;
pub mod github;
pub mod output;
pub mod path;
pub mod repository;
pub mod status;
pub mod suggestions;
pub mod summary;
pub mod workflow;
pub mod worktree;

#[cfg(test)]
mod repository_proptest;
