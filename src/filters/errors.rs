//! Filter construction errors

use thiserror::Error;

use super::ops::ComparisonOp;

/// Result type for filter construction
pub type FilterResult<T> = Result<T, FilterError>;

/// A filter was configured with an operator its attribute cannot support.
///
/// Raised at filter construction time, never during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// Ordering comparison requested for a boolean attribute
    #[error("the hazardous flag supports only equality comparison, got {0}")]
    BooleanOrdering(ComparisonOp),
}
