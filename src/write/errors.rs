//! Output serialization errors

use thiserror::Error;

/// Result type for output writers
pub type WriteResult<T> = Result<T, WriteError>;

/// A result file could not be written
#[derive(Debug, Error)]
pub enum WriteError {
    /// File could not be created or written
    #[error("failed to write output file: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization failed
    #[error("failed to serialize CSV output: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization failed
    #[error("failed to serialize JSON output: {0}")]
    Json(#[from] serde_json::Error),
}
