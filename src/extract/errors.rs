//! Data loading errors

use thiserror::Error;

/// Result type for data loading
pub type ExtractResult<T> = Result<T, ExtractError>;

/// A data file could not be loaded
#[derive(Debug, Error)]
pub enum ExtractError {
    /// File could not be opened or read
    #[error("failed to read data file: {0}")]
    Io(#[from] std::io::Error),

    /// CSV file is structurally malformed
    #[error("failed to parse CSV data: {0}")]
    Csv(#[from] csv::Error),

    /// JSON file is structurally malformed
    #[error("failed to parse JSON data: {0}")]
    Json(#[from] serde_json::Error),

    /// JSON envelope is missing the `data` array
    #[error("close approach file has no 'data' array")]
    MissingData,

    /// Timestamp does not match the CAD calendar format
    #[error("invalid calendar date format: {0}")]
    InvalidTimestamp(String),

    /// Numeric field does not parse as a real number
    #[error("invalid numeric field: {0}")]
    InvalidNumber(String),
}
