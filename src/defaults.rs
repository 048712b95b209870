//! Default values for local-repos configuration.

use std::path::PathBuf;

/// File name of the repositories file inside the configuration directory.
pub const REPOSITORIES_FILENAME: &str = "repositories.yaml";

/// Returns the default location of the repositories file.
///
/// Uses the platform-appropriate configuration directory:
/// - Linux: `~/.config/local-repos/repositories.yaml` (XDG Base Directory)
/// - macOS: `~/Library/Application Support/local-repos/repositories.yaml`
/// - Windows: `{FOLDERID_RoamingAppData}\local-repos\repositories.yaml`
///
/// Falls back to `.local-repos/repositories.yaml` in the current directory if
/// the platform configuration directory cannot be determined.
///
/// This can be overridden by the `--file` CLI flag or the `LOCAL_REPOS_FILE`
/// environment variable.
pub fn default_repositories_file() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("local-repos"))
        .unwrap_or_else(|| PathBuf::from(".local-repos"))
        .join(REPOSITORIES_FILENAME)
}
