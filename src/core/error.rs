//! Error types for data loading.

use thiserror::Error;

/// Errors that can occur when loading tuning or arena data.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// File could not be found.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    ReadError { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    ParseError { path: String, details: String },

    /// Values parsed but make no sense together.
    #[error("Invalid tuning: {0}")]
    InvalidTuning(String),
}
