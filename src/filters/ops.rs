//! Binary comparison operators for attribute filters

use std::fmt;

/// Comparison operator applied between an extracted attribute and a
/// reference value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOp {
    /// Equal: attribute == value
    Eq,
    /// Not equal: attribute != value
    Ne,
    /// Less than: attribute < value
    Lt,
    /// Less than or equal: attribute <= value
    Le,
    /// Greater than: attribute > value
    Gt,
    /// Greater than or equal: attribute >= value
    Ge,
}

impl ComparisonOp {
    /// Applies the operator between an extracted value and a reference
    /// value, per the standard ordering of the value's type.
    pub fn evaluate<T: PartialOrd>(self, attribute: &T, reference: &T) -> bool {
        match self {
            ComparisonOp::Eq => attribute == reference,
            ComparisonOp::Ne => attribute != reference,
            ComparisonOp::Lt => attribute < reference,
            ComparisonOp::Le => attribute <= reference,
            ComparisonOp::Gt => attribute > reference,
            ComparisonOp::Ge => attribute >= reference,
        }
    }

    /// Returns true for the operators meaningful on booleans
    pub fn is_equality(self) -> bool {
        matches!(self, ComparisonOp::Eq | ComparisonOp::Ne)
    }

    /// Returns the operator name
    pub fn name(self) -> &'static str {
        match self {
            ComparisonOp::Eq => "eq",
            ComparisonOp::Ne => "ne",
            ComparisonOp::Lt => "lt",
            ComparisonOp::Le => "le",
            ComparisonOp::Gt => "gt",
            ComparisonOp::Ge => "ge",
        }
    }
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
