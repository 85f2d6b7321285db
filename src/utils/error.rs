//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.
//!
//! The aggregator has no error type: it is total over well-formed input.

use thiserror::Error;

/// Errors that can occur while loading a profiling database
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to read profile: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid profile format: {0}")]
    InvalidFormat(String),

    #[error("Rule {rule} depends on rule {dependency}, which does not come before it")]
    DependencyOrder { rule: usize, dependency: usize },
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
