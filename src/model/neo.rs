//! Near-Earth object entity

use std::fmt;

use super::errors::{ValidationError, ValidationResult};
use super::ids::ApproachId;

/// A catalogued near-Earth object.
///
/// Carries the object's primary designation (required, unique), IAU name
/// (optional), diameter in kilometers (optional), and whether it is marked
/// as potentially hazardous. The `approaches` collection is empty at
/// construction and populated exclusively by the database linking pass.
#[derive(Debug, Clone, PartialEq)]
pub struct NearEarthObject {
    designation: String,
    name: Option<String>,
    diameter: Option<f64>,
    hazardous: bool,
    approaches: Vec<ApproachId>,
}

impl NearEarthObject {
    /// Creates a new near-Earth object, normalizing and validating fields.
    ///
    /// The designation is trimmed and upper-cased; an empty result fails
    /// with [`ValidationError::MissingDesignation`]. A name that is empty
    /// after trimming is stored as absent. A NaN diameter is treated as
    /// missing data; a negative or infinite diameter fails construction.
    pub fn new(
        designation: impl Into<String>,
        name: Option<String>,
        diameter: Option<f64>,
        hazardous: bool,
    ) -> ValidationResult<Self> {
        let designation = designation.into().trim().to_uppercase();
        if designation.is_empty() {
            return Err(ValidationError::MissingDesignation);
        }

        let name = name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        let diameter = match diameter {
            Some(d) if d.is_nan() => None,
            Some(d) if !d.is_finite() || d < 0.0 => {
                return Err(ValidationError::InvalidDiameter(d));
            }
            other => other,
        };

        Ok(Self {
            designation,
            name,
            diameter,
            hazardous,
            approaches: Vec::new(),
        })
    }

    /// Returns the primary designation (normalized, unique)
    pub fn designation(&self) -> &str {
        &self.designation
    }

    /// Returns the IAU name, if any
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the diameter in kilometers, if known
    pub fn diameter(&self) -> Option<f64> {
        self.diameter
    }

    /// Returns whether the object is marked as potentially hazardous
    pub fn hazardous(&self) -> bool {
        self.hazardous
    }

    /// Returns the linked close approaches in input order
    pub fn approaches(&self) -> &[ApproachId] {
        &self.approaches
    }

    /// Returns the full name: `"DESIGNATION (Name)"`, or the bare
    /// designation for unnamed objects.
    pub fn fullname(&self) -> String {
        match &self.name {
            Some(name) => format!("{} ({})", self.designation, name),
            None => self.designation.clone(),
        }
    }

    /// Records a linked approach. Called only by the database linking pass.
    pub(crate) fn record_approach(&mut self, id: ApproachId) {
        self.approaches.push(id);
    }
}

impl fmt::Display for NearEarthObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hazard = if self.hazardous { "is" } else { "is not" };
        match self.diameter {
            Some(d) => write!(
                f,
                "NEO {} has a diameter of {:.3} km and {} potentially hazardous.",
                self.fullname(),
                d,
                hazard
            ),
            None => write!(f, "NEO {} {} potentially hazardous.", self.fullname(), hazard),
        }
    }
}
