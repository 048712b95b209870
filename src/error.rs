//! # Error Handling
//!
//! This module defines the error type for the parts of `local-repos` that can
//! fail: reading and validating a repositories file, and looking up entries
//! in it. The repository model itself never fails; absence there is modeled
//! with `Option`.
//!
//! ## Key Components
//!
//! - **`Error`**: The enum of all failure modes, built with `thiserror`. Each
//!   variant carries enough context to produce a useful message on its own.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.

use thiserror::Error;

/// Main error type for local-repos operations
#[derive(Error, Debug)]
pub enum Error {
    /// The repositories file could not be parsed or failed validation.
    ///
    /// Includes an optional hint about how to fix the file.
    #[error("Repositories file error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the file
        hint: Option<String>,
    },

    /// The repositories file parsed, but `--strict` validation found problems.
    #[error("Validation failed: {message}")]
    Validation { message: String },

    /// No repository matched the given id or name.
    #[error("Repository not found: {query}")]
    RepositoryNotFound { query: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A JSON serialization error, wrapped from `serde_json::Error`.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
