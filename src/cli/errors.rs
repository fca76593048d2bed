//! CLI errors

use std::path::PathBuf;

use thiserror::Error;

use crate::database::DatabaseError;
use crate::extract::ExtractError;
use crate::write::WriteError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors surfaced to the terminal user
#[derive(Debug, Error)]
pub enum CliError {
    /// Data files could not be loaded
    #[error(transparent)]
    Extract(#[from] ExtractError),

    /// Loaded data violates a database invariant
    #[error(transparent)]
    Database(#[from] DatabaseError),

    /// Results could not be written
    #[error(transparent)]
    Write(#[from] WriteError),

    /// Terminal input could not be read
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// `inspect` called without a lookup key
    #[error("inspect requires --pdes or --name")]
    MissingInspectTarget,

    /// Output path has an extension no writer handles
    #[error("unsupported output format: {} (expected .csv or .json)", .0.display())]
    UnsupportedFormat(PathBuf),
}
