//! # Hosting Reference
//!
//! A `GitHubRepository` describes the remote-hosted counterpart of a local
//! repository: its owner, name, web and clone URLs, and, when the repository
//! is a fork, the hosted repository it was forked from.
//!
//! Values of this type are produced by whatever talks to the hosting API. This
//! crate never fetches them; it only reads them. They are shared between
//! repositories through `Arc`, so a parent descriptor is stored once no matter
//! how many forks point at it.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::sync::Arc;

/// The API endpoint used for repositories hosted on github.com.
pub const DOTCOM_API_ENDPOINT: &str = "https://api.github.com";

fn default_endpoint() -> String {
    DOTCOM_API_ENDPOINT.to_string()
}

/// The account that owns a hosted repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    /// Database id of the account, when known.
    #[serde(default)]
    pub id: Option<i64>,
    /// Login of the user or organization.
    pub login: String,
    /// API endpoint of the host the account lives on.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Owner {
    /// Creates an owner on github.com.
    pub fn new(login: impl Into<String>) -> Self {
        Self {
            id: None,
            login: login.into(),
            endpoint: default_endpoint(),
        }
    }

    /// Sets the account's database id.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Moves the account to another host.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Fingerprint of the login, endpoint and id.
    pub fn hash(&self) -> String {
        [
            self.login.clone(),
            self.endpoint.clone(),
            opt_part(self.id),
        ]
        .join(HASH_DELIMITER)
    }
}

/// A repository on a hosting service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubRepository {
    /// Database id of the hosted repository, when known.
    #[serde(default)]
    pub db_id: Option<i64>,
    /// Short name, without the owner.
    pub name: String,
    pub owner: Owner,
    #[serde(default)]
    pub private: Option<bool>,
    /// Web page of the repository.
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub clone_url: Option<String>,
    #[serde(default)]
    pub default_branch: Option<String>,
    /// The repository this one was forked from.
    #[serde(default)]
    pub parent: Option<Arc<GitHubRepository>>,
}

impl GitHubRepository {
    /// Creates a hosted repository with only an owner and a name.
    ///
    /// The optional metadata can be filled in with the `with_*` methods.
    pub fn new(owner: Owner, name: impl Into<String>) -> Self {
        Self {
            db_id: None,
            name: name.into(),
            owner,
            private: None,
            html_url: None,
            clone_url: None,
            default_branch: None,
            parent: None,
        }
    }

    pub fn with_db_id(mut self, db_id: i64) -> Self {
        self.db_id = Some(db_id);
        self
    }

    pub fn with_private(mut self, private: bool) -> Self {
        self.private = Some(private);
        self
    }

    pub fn with_html_url(mut self, html_url: impl Into<String>) -> Self {
        self.html_url = Some(html_url.into());
        self
    }

    pub fn with_clone_url(mut self, clone_url: impl Into<String>) -> Self {
        self.clone_url = Some(clone_url.into());
        self
    }

    pub fn with_default_branch(mut self, default_branch: impl Into<String>) -> Self {
        self.default_branch = Some(default_branch.into());
        self
    }

    pub fn with_parent(mut self, parent: Arc<GitHubRepository>) -> Self {
        self.parent = Some(parent);
        self
    }

    /// The `owner/name` form of the repository name.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner.login, self.name)
    }

    /// The API endpoint of the host this repository lives on.
    pub fn endpoint(&self) -> &str {
        &self.owner.endpoint
    }

    /// A repository is a fork when it records the repository it came from.
    pub fn is_fork(&self) -> bool {
        self.parent.is_some()
    }

    pub fn html_url(&self) -> Option<&str> {
        self.html_url.as_deref()
    }

    pub fn parent(&self) -> Option<&GitHubRepository> {
        self.parent.as_deref()
    }

    /// A fingerprint of every field, including the parent's fingerprint.
    ///
    /// Used for cheap change detection. It is not a stable serialization
    /// format.
    pub fn hash(&self) -> String {
        [
            opt_part(self.db_id),
            self.name.clone(),
            self.owner.hash(),
            opt_part(self.private),
            opt_part(self.html_url.as_deref()),
            opt_part(self.clone_url.as_deref()),
            opt_part(self.default_branch.as_deref()),
            self.parent
                .as_ref()
                .map_or_else(|| ABSENT.to_string(), |parent| parent.hash()),
        ]
        .join(HASH_DELIMITER)
    }
}

/// Separator between fingerprint components.
pub(crate) const HASH_DELIMITER: &str = "+";

/// Fingerprint component recorded for an absent value.
pub(crate) const ABSENT: &str = "null";

fn opt_part<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| ABSENT.to_string(), |v| v.to_string())
}
