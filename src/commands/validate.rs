//! # Validate Command Implementation
//!
//! This module implements the `validate` subcommand, which checks the
//! repositories file without printing its contents.
//!
//! - **Parsing**: The file must be valid YAML with the expected fields, and
//!   its paths and URLs must be well formed.
//! - **Duplicates**: Ids or paths listed more than once are reported.
//! - **Working Directories**: Repositories that are not marked missing but
//!   whose directory does not exist are reported.
//!
//! Problems other than parse failures are warnings; `--strict` turns them
//! into a failure.

use anyhow::Result;
use clap::Args;
use std::path::Path;

use local_repos::config::{self, RepositoryEntry};
use local_repos::error::Error;
use local_repos::output::OutputConfig;

/// Validate the repositories file
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Use strict validation (fail on warnings).
    #[arg(long)]
    pub strict: bool,

    /// Skip checking that working directories exist on disk.
    #[arg(long)]
    pub skip_disk_check: bool,
}

/// Execute the `validate` command.
pub fn execute(args: ValidateArgs, file: &Path, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    println!("Validating repositories file: {}", file.display());

    let entries = match super::load_entries(file) {
        Ok(entries) => {
            println!(
                "{} Parsed {} repositories",
                out.marker("[OK]"),
                entries.len()
            );
            entries
        }
        Err(e) => {
            println!("{} {}", out.marker("[ERR]"), e);
            return Err(e);
        }
    };

    let mut warnings = config::duplicate_warnings(&entries);
    if !args.skip_disk_check {
        warnings.extend(missing_directory_warnings(&entries));
    }

    if warnings.is_empty() {
        println!("{} No problems found", out.marker("[OK]"));
        return Ok(());
    }

    for warning in &warnings {
        println!("{} {}", out.marker("[WARN]"), warning);
    }

    if args.strict {
        return Err(Error::Validation {
            message: format!("{} warning(s) in strict mode", warnings.len()),
        }
        .into());
    }

    Ok(())
}

/// Warns about repositories whose working directory is gone but which are
/// not marked missing.
fn missing_directory_warnings(entries: &[RepositoryEntry]) -> Vec<String> {
    entries
        .iter()
        .map(|entry| &entry.repository)
        .filter(|repository| !repository.missing() && !repository.path().is_dir())
        .map(|repository| {
            format!(
                "Repository {} at {} does not exist but is not marked missing",
                repository.id(),
                repository.path().display()
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_directory_warnings() {
        let temp_dir = tempfile::tempdir().unwrap();
        let present = temp_dir.path().join("present");
        std::fs::create_dir(&present).unwrap();

        let yaml = format!(
            "- {{ id: 1, path: '{}' }}\n- {{ id: 2, path: /no/such/dir }}\n- {{ id: 3, path: /no/such/other, missing: true }}",
            present.display()
        );
        let entries = config::parse(&yaml).unwrap();

        let warnings = missing_directory_warnings(&entries);
        assert_eq!(
            warnings,
            vec!["Repository 2 at /no/such/dir does not exist but is not marked missing".to_string()]
        );
    }
}
