//! Error types for the I/O and configuration layers.
//!
//! Scheduling itself never fails; these errors come from reading input,
//! loading configuration, and writing results.

use std::path::PathBuf;

use crate::validation::ValidationError;

/// Errors raised outside the scheduling core.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("invalid releases: {}", summarize(.0))]
    Validation(Vec<ValidationError>),

    #[error("configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for fallible crate operations.
pub type Result<T> = std::result::Result<T, Error>;

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
