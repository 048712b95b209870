//! # Repositories File
//!
//! This module defines the on-disk format of the repositories file and the
//! logic for reading it. The file is a YAML sequence with one entry per
//! repository:
//!
//! ```yaml
//! - id: 1
//!   path: /home/me/code/desktop
//!   github:
//!     name: desktop
//!     owner: { login: me }
//!     html_url: https://github.com/me/desktop
//!   state:
//!     ahead_behind: { ahead: 2, behind: 1 }
//!     changed_files_count: 3
//! ```
//!
//! ## Validation
//!
//! `Repository` accepts any input, so checks happen here, before values
//! reach the model: paths must not be empty, and web and API URLs must be
//! absolute. Duplicate ids or paths are reported as warnings and kept; the
//! caller decides whether they matter.

use crate::error::{Error, Result};
use crate::github::GitHubRepository;
use crate::repository::{name_of, Repository};
use crate::status::LocalRepositoryState;
use crate::workflow::WorkflowPreferences;
use crate::worktree::LinkedWorkTree;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use url::Url;

/// One entry of the repositories file, as written on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryRecord {
    pub id: i64,
    pub path: PathBuf,
    #[serde(default)]
    pub missing: bool,
    /// Omitted means unset, which is not a tutorial repository.
    #[serde(default)]
    pub tutorial: Option<bool>,
    #[serde(default)]
    pub workflow: WorkflowPreferences,
    #[serde(default)]
    pub github: Option<GitHubRepository>,
    #[serde(default)]
    pub state: Option<LocalRepositoryState>,
    #[serde(default)]
    pub worktrees: Vec<LinkedWorkTree>,
}

/// A repository together with the snapshots recorded alongside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryEntry {
    pub repository: Repository,
    pub state: Option<LocalRepositoryState>,
    pub worktrees: Vec<LinkedWorkTree>,
}

impl From<RepositoryRecord> for RepositoryEntry {
    fn from(record: RepositoryRecord) -> Self {
        let repository = Repository::from_parts(
            record.path,
            record.id,
            record.github.map(Arc::new),
            record.missing,
            record.workflow,
            record.tutorial,
        );

        Self {
            repository,
            state: record.state,
            worktrees: record.worktrees,
        }
    }
}

/// Parses the contents of a repositories file.
///
/// A file containing only whitespace holds no repositories.
pub fn parse(yaml_content: &str) -> Result<Vec<RepositoryEntry>> {
    if yaml_content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let records: Vec<RepositoryRecord> = serde_yaml::from_str(yaml_content)?;
    for (idx, record) in records.iter().enumerate() {
        validate_record(idx + 1, record)?;
    }

    let entries: Vec<RepositoryEntry> = records.into_iter().map(RepositoryEntry::from).collect();
    for warning in duplicate_warnings(&entries) {
        warn!("{}", warning);
    }

    debug!("Parsed {} repositories", entries.len());
    Ok(entries)
}

/// Reads and parses a repositories file.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Vec<RepositoryEntry>> {
    let path = path.as_ref();
    debug!("Loading repositories from {}", path.display());
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

fn validate_record(position: usize, record: &RepositoryRecord) -> Result<()> {
    if record.path.as_os_str().is_empty() {
        return Err(Error::ConfigParse {
            message: format!("entry {} (id {}): path is empty", position, record.id),
            hint: Some("Set 'path' to the repository's working directory".to_string()),
        });
    }

    if let Some(github) = &record.github {
        validate_github(position, github)?;
    }

    for worktree in &record.worktrees {
        if worktree.path().as_os_str().is_empty() {
            return Err(Error::ConfigParse {
                message: format!("entry {} (id {}): worktree path is empty", position, record.id),
                hint: None,
            });
        }
    }

    Ok(())
}

fn validate_github(position: usize, github: &GitHubRepository) -> Result<()> {
    check_absolute_url(position, "github.owner.endpoint", github.endpoint())?;
    if let Some(html_url) = github.html_url() {
        check_absolute_url(position, "github.html_url", html_url)?;
    }
    // clone URLs may be scp-style (git@host:owner/name.git) and are not checked
    match github.parent() {
        Some(parent) => validate_github(position, parent),
        None => Ok(()),
    }
}

fn check_absolute_url(position: usize, field: &str, value: &str) -> Result<()> {
    match Url::parse(value) {
        Ok(url) if url.has_host() => Ok(()),
        Ok(_) => Err(Error::ConfigParse {
            message: format!("entry {}: {} has no host: {}", position, field, value),
            hint: Some("Use an absolute URL such as https://github.com/owner/name".to_string()),
        }),
        Err(e) => Err(Error::ConfigParse {
            message: format!("entry {}: invalid {} '{}': {}", position, field, value, e),
            hint: Some("Use an absolute URL such as https://github.com/owner/name".to_string()),
        }),
    }
}

/// Describes every id and every path that appears in more than one entry.
pub fn duplicate_warnings(entries: &[RepositoryEntry]) -> Vec<String> {
    let mut ids: HashMap<i64, usize> = HashMap::new();
    let mut paths: HashMap<&Path, usize> = HashMap::new();
    for entry in entries {
        *ids.entry(entry.repository.id()).or_default() += 1;
        *paths.entry(entry.repository.path()).or_default() += 1;
    }

    let mut warnings = Vec::new();
    let mut reported_ids = Vec::new();
    let mut reported_paths = Vec::new();
    for entry in entries {
        let id = entry.repository.id();
        if ids[&id] > 1 && !reported_ids.contains(&id) {
            warnings.push(format!("Repository id {} is used by {} entries", id, ids[&id]));
            reported_ids.push(id);
        }

        let path = entry.repository.path();
        if paths[path] > 1 && !reported_paths.contains(&path) {
            warnings.push(format!(
                "Repository path {} is listed {} times",
                path.display(),
                paths[path]
            ));
            reported_paths.push(path);
        }
    }

    warnings
}

/// Finds the entry matching `query`.
///
/// The query is tried as a numeric id first, then as a display name
/// (`owner/name` for hosted repositories), then as a local name.
pub fn find<'a>(entries: &'a [RepositoryEntry], query: &str) -> Result<&'a RepositoryEntry> {
    let by_id = query
        .parse::<i64>()
        .ok()
        .and_then(|id| entries.iter().find(|e| e.repository.id() == id));

    by_id
        .or_else(|| entries.iter().find(|e| name_of(&e.repository) == query))
        .or_else(|| entries.iter().find(|e| e.repository.name() == query))
        .ok_or_else(|| Error::RepositoryNotFound {
            query: query.to_string(),
        })
}
