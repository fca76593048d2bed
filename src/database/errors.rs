//! Database construction errors
//!
//! Structural invariant violations detected while indexing the input
//! collections. Fatal to the construction call; queries themselves never
//! return errors.

use thiserror::Error;

/// Result type for database construction
pub type DatabaseResult<T> = Result<T, DatabaseError>;

/// The input data set violates a structural invariant
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatabaseError {
    /// Two objects share a primary designation
    #[error("duplicate designation in object set: {0}")]
    DuplicateDesignation(String),
}
