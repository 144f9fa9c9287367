//! Error types for the scorebook.
//!
//! Match operations never fail (ignored calls are reported through their
//! `bool` return). Errors only come from export and configuration helpers.

use thiserror::Error;

/// Main error type for fallible scorebook helpers.
#[derive(Debug, Error)]
pub enum ScorebookError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(String),

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

impl From<serde_json::Error> for ScorebookError {
    fn from(e: serde_json::Error) -> Self {
        ScorebookError::Config(e.to_string())
    }
}

impl From<csv::Error> for ScorebookError {
    fn from(e: csv::Error) -> Self {
        ScorebookError::Csv(e.to_string())
    }
}

impl From<csv::IntoInnerError<csv::Writer<Vec<u8>>>> for ScorebookError {
    fn from(e: csv::IntoInnerError<csv::Writer<Vec<u8>>>) -> Self {
        ScorebookError::Csv(e.to_string())
    }
}

/// Result type for scorebook helpers.
pub type Result<T> = std::result::Result<T, ScorebookError>;
