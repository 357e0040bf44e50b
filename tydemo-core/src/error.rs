//! Error types for the demo domain.

use thiserror::Error;

/// Errors that can occur in demo operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DemoError {
    #[error("{0}")]
    Validation(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for demo operations.
pub type DemoResult<T> = Result<T, DemoError>;
