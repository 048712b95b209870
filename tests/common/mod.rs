//! Shared test utilities for integration and E2E tests.
//!
//! This module provides common fixtures and helper functions to reduce
//! duplication across test files.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_repositories(files::MIXED);
//!     fixture.command().arg("ls").assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::Path;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::files;
    pub use super::TestFixture;
}

/// Common repositories file snippets for testing.
#[allow(dead_code)]
pub mod files {
    /// A fork, a plain local repository, a missing one, and a tutorial.
    pub const MIXED: &str = r#"
- id: 1
  path: /code/desktop
  github:
    db_id: 42
    name: desktop
    owner: { login: me }
    html_url: https://github.com/me/desktop
    parent:
      name: desktop
      owner: { login: desktop }
      html_url: https://github.com/desktop/desktop
  state:
    ahead_behind: { ahead: 2, behind: 1 }
    changed_files_count: 3
  worktrees:
    - { path: /code/desktop-review, head: 1a2b3c }
- id: 2
  path: /code/scratch
- id: 3
  path: /code/old-project
  missing: true
- id: 4
  path: /code/tutorial-repository
  tutorial: true
  github:
    name: tutorial-repository
    owner: { login: me }
    html_url: https://github.com/me/tutorial-repository
"#;

    /// Two entries sharing an id.
    pub const DUPLICATE_IDS: &str = r#"
- { id: 1, path: /code/a, missing: true }
- { id: 1, path: /code/b, missing: true }
"#;

    /// Invalid YAML for error testing.
    pub const INVALID_YAML: &str = "- id: [unclosed";

    /// A relative web URL, which fails validation.
    pub const RELATIVE_URL: &str = r#"
- id: 1
  path: /code/repo
  github:
    name: repo
    owner: { login: me }
    html_url: github.com/me/repo
"#;

    /// No repositories.
    pub const EMPTY: &str = "[]\n";
}

/// A test fixture that provides a temporary directory with an optional
/// repositories file.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add a `repositories.yaml` file with the given content.
    pub fn with_repositories(self, content: &str) -> Self {
        self.temp_dir
            .child("repositories.yaml")
            .write_str(content)
            .expect("Failed to write repositories file");
        self
    }

    /// Create an empty directory inside the fixture.
    #[allow(dead_code)]
    pub fn with_dir(self, path: &str) -> Self {
        self.temp_dir
            .child(path)
            .create_dir_all()
            .expect("Failed to create directory");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Get the path to the repositories file.
    pub fn repositories_path(&self) -> std::path::PathBuf {
        self.temp_dir.path().join("repositories.yaml")
    }

    /// Create a command running in this fixture's directory, pointed at its
    /// repositories file, with colors off.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("local-repos");
        cmd.current_dir(self.path())
            .env_remove("LOCAL_REPOS_FILE")
            .arg("--color")
            .arg("never")
            .arg("--file")
            .arg(self.repositories_path());
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_creates_temp_dir() {
        let fixture = TestFixture::new();
        assert!(fixture.path().exists());
    }

    #[test]
    fn test_fixture_with_repositories() {
        let fixture = TestFixture::new().with_repositories(files::EMPTY);
        assert!(fixture.repositories_path().exists());
    }

    #[test]
    fn test_files_are_valid_yaml() {
        for content in [
            files::MIXED,
            files::DUPLICATE_IDS,
            files::RELATIVE_URL,
            files::EMPTY,
        ] {
            serde_yaml::from_str::<serde_yaml::Value>(content).expect("File should be valid YAML");
        }
    }

    #[test]
    fn test_invalid_yaml_is_actually_invalid() {
        let result = serde_yaml::from_str::<serde_yaml::Value>(files::INVALID_YAML);
        assert!(result.is_err(), "INVALID_YAML should not parse");
    }
}
