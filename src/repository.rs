//! # Local Repository References
//!
//! This module provides `Repository`, the value object that pairs a working
//! directory on disk with an identity and, optionally, the hosted repository
//! it is linked to. Everything here is a pure computation over values that
//! are already in memory: no git commands run and no network requests are
//! made.
//!
//! ## Design
//!
//! A `Repository` never changes after it is built. A caller that learns a
//! repository has gone missing, or that its hosting metadata has been
//! refreshed, builds a new value with one of the `with_*` methods. Derived
//! fields are computed once, in the constructor, so those methods go through
//! the constructor too.
//!
//! Code that needs the hosting reference to be present asks for a
//! `RepositoryWithGitHubRepository`. It can only be obtained through a
//! checked conversion, so functions that take one never have to handle the
//! `None` case.
//!
//! ## Free Functions
//!
//! - **`name_of`**: the label to show for a repository.
//! - **`get_non_fork_github_repository`**: the upstream of a fork, or the
//!   repository itself.
//! - **`get_github_html_url`**: the web page to link to, if any.

use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::github::{GitHubRepository, ABSENT, HASH_DELIMITER};
use crate::path::last_path_segment;
use crate::workflow::WorkflowPreferences;

/// A local repository known to the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    path: PathBuf,
    id: i64,
    github_repository: Option<Arc<GitHubRepository>>,
    missing: bool,
    workflow_preferences: WorkflowPreferences,
    is_tutorial_repository: Option<bool>,
    name: String,
}

impl Repository {
    /// Creates a repository with empty workflow preferences and no tutorial
    /// flag.
    ///
    /// No input is validated: any path and any id are accepted as given.
    pub fn new(
        path: impl Into<PathBuf>,
        id: i64,
        github_repository: Option<Arc<GitHubRepository>>,
        missing: bool,
    ) -> Self {
        Self::from_parts(
            path,
            id,
            github_repository,
            missing,
            WorkflowPreferences::default(),
            None,
        )
    }

    /// Creates a repository from every constituent field.
    ///
    /// The repository is a tutorial repository only if
    /// `is_tutorial_repository` is `Some(true)`.
    pub fn from_parts(
        path: impl Into<PathBuf>,
        id: i64,
        github_repository: Option<Arc<GitHubRepository>>,
        missing: bool,
        workflow_preferences: WorkflowPreferences,
        is_tutorial_repository: Option<bool>,
    ) -> Self {
        let path = path.into();
        let name = derive_name(&path, github_repository.as_deref());

        Self {
            path,
            id,
            github_repository,
            missing,
            workflow_preferences,
            is_tutorial_repository,
            name,
        }
    }

    /// The primary working directory.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    /// The hosted repository's short name, or the last segment of the path.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn github_repository(&self) -> Option<&GitHubRepository> {
        self.github_repository.as_deref()
    }

    /// Returns `true` if the working directory was absent on the last check.
    pub fn missing(&self) -> bool {
        self.missing
    }

    pub fn workflow_preferences(&self) -> &WorkflowPreferences {
        &self.workflow_preferences
    }

    pub fn is_tutorial_repository(&self) -> bool {
        self.is_tutorial_repository == Some(true)
    }

    /// A fingerprint of every constituent field, for change detection.
    ///
    /// Equal fields give equal fingerprints. The format is not stable across
    /// releases and must not be persisted.
    pub fn hash(&self) -> String {
        [
            self.id.to_string(),
            self.github_repository
                .as_ref()
                .map_or_else(|| ABSENT.to_string(), |gh| gh.hash()),
            path_part(&self.path),
            self.missing.to_string(),
            self.name.clone(),
            self.is_tutorial_repository().to_string(),
        ]
        .join(HASH_DELIMITER)
    }

    /// Narrows this repository to one that is known to have a hosting
    /// reference.
    pub fn as_with_github_repository(&self) -> Option<RepositoryWithGitHubRepository<'_>> {
        RepositoryWithGitHubRepository::new(self)
    }

    /// Returns a copy of this repository with a different missing flag.
    pub fn with_missing(&self, missing: bool) -> Self {
        Self::from_parts(
            self.path.clone(),
            self.id,
            self.github_repository.clone(),
            missing,
            self.workflow_preferences,
            self.is_tutorial_repository,
        )
    }

    /// Returns a copy of this repository linked to a different hosted
    /// repository. The name is derived again.
    pub fn with_github_repository(&self, github_repository: Option<Arc<GitHubRepository>>) -> Self {
        Self::from_parts(
            self.path.clone(),
            self.id,
            github_repository,
            self.missing,
            self.workflow_preferences,
            self.is_tutorial_repository,
        )
    }

    /// Returns a copy of this repository with different workflow preferences.
    pub fn with_workflow_preferences(&self, workflow_preferences: WorkflowPreferences) -> Self {
        Self::from_parts(
            self.path.clone(),
            self.id,
            self.github_repository.clone(),
            self.missing,
            workflow_preferences,
            self.is_tutorial_repository,
        )
    }
}

/// The path as recorded, with non-UTF-8 bytes escaped rather than replaced,
/// so distinct paths never share a fingerprint.
fn path_part(path: &Path) -> String {
    match path.to_str() {
        Some(path) => path.to_string(),
        None => format!("{:?}", path.as_os_str()),
    }
}

fn derive_name(path: &Path, github_repository: Option<&GitHubRepository>) -> String {
    if let Some(github_repository) = github_repository {
        return github_repository.name.clone();
    }

    let path = path.to_string_lossy();
    let segment = last_path_segment(&path);
    if segment.is_empty() {
        path.to_string()
    } else {
        segment.to_string()
    }
}

/// A repository whose hosting reference is known to be present.
#[derive(Debug, Clone, Copy)]
pub struct RepositoryWithGitHubRepository<'a> {
    repository: &'a Repository,
    github_repository: &'a GitHubRepository,
}

impl<'a> RepositoryWithGitHubRepository<'a> {
    /// Returns `None` if the repository has no hosting reference.
    pub fn new(repository: &'a Repository) -> Option<Self> {
        let github_repository = repository.github_repository.as_deref()?;
        Some(Self {
            repository,
            github_repository,
        })
    }

    pub fn repository(&self) -> &'a Repository {
        self.repository
    }

    pub fn github_repository(&self) -> &'a GitHubRepository {
        self.github_repository
    }
}

impl Deref for RepositoryWithGitHubRepository<'_> {
    type Target = Repository;

    fn deref(&self) -> &Repository {
        self.repository
    }
}

/// Returns `true` if the repository is linked to a hosted repository.
pub fn is_repository_with_github_repository(repository: &Repository) -> bool {
    repository.github_repository.is_some()
}

/// Returns `true` if the repository is linked to a hosted repository that is
/// a fork.
pub fn is_repository_with_forked_github_repository(repository: &Repository) -> bool {
    repository
        .github_repository()
        .is_some_and(GitHubRepository::is_fork)
}

/// The label for a repository: `owner/name` when hosted, the local name
/// otherwise.
pub fn name_of(repository: &Repository) -> String {
    match repository.github_repository() {
        Some(github_repository) => github_repository.full_name(),
        None => repository.name().to_string(),
    }
}

/// Returns the parent of a forked hosted repository, or the hosted repository
/// itself when it is not a fork.
pub fn get_non_fork_github_repository<'a>(
    repository: &RepositoryWithGitHubRepository<'a>,
) -> &'a GitHubRepository {
    let github_repository = repository.github_repository();
    github_repository.parent().unwrap_or(github_repository)
}

/// The web page of the repository's upstream, or `None` for a repository that
/// is not hosted.
pub fn get_github_html_url(repository: &Repository) -> Option<&str> {
    let repository = RepositoryWithGitHubRepository::new(repository)?;
    get_non_fork_github_repository(&repository).html_url()
}
