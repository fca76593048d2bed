//! Entity validation errors
//!
//! Raised synchronously by entity constructors, never mid-query.

use thiserror::Error;

/// Result type for entity construction
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Field-level invariant failures at entity construction
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Designation is empty or whitespace-only
    #[error("designation must not be empty")]
    MissingDesignation,

    /// Diameter is negative or not a finite number
    #[error("diameter must be a non-negative finite number of kilometers, got {0}")]
    InvalidDiameter(f64),

    /// Distance is negative or not a finite number
    #[error("distance must be a non-negative finite number of astronomical units, got {0}")]
    InvalidDistance(f64),

    /// Velocity is negative or not a finite number
    #[error("velocity must be a non-negative finite number of km/s, got {0}")]
    InvalidVelocity(f64),
}
