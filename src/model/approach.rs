//! Close approach entity

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};

use super::errors::{ValidationError, ValidationResult};
use super::ids::NeoId;

/// A single recorded flyby of a near-Earth object past Earth.
///
/// Carries the time of closest approach (UTC), the nominal approach
/// distance in astronomical units, and the relative velocity in km/s.
/// The `neo` handle is absent until the database linking pass resolves the
/// designation, and stays absent permanently if no object matches.
#[derive(Debug, Clone, PartialEq)]
pub struct CloseApproach {
    designation: String,
    time: NaiveDateTime,
    distance: f64,
    velocity: f64,
    neo: Option<NeoId>,
}

impl CloseApproach {
    /// Creates a new close approach, normalizing and validating fields.
    ///
    /// The designation is trimmed and upper-cased to match the object key
    /// it references; an empty result fails with
    /// [`ValidationError::MissingDesignation`]. Distance and velocity must
    /// be finite and non-negative; NaN is rejected, unlike the object
    /// diameter, because both quantities are required.
    pub fn new(
        designation: impl Into<String>,
        time: NaiveDateTime,
        distance: f64,
        velocity: f64,
    ) -> ValidationResult<Self> {
        let designation = designation.into().trim().to_uppercase();
        if designation.is_empty() {
            return Err(ValidationError::MissingDesignation);
        }

        if !distance.is_finite() || distance < 0.0 {
            return Err(ValidationError::InvalidDistance(distance));
        }

        if !velocity.is_finite() || velocity < 0.0 {
            return Err(ValidationError::InvalidVelocity(velocity));
        }

        Ok(Self {
            designation,
            time,
            distance,
            velocity,
            neo: None,
        })
    }

    /// Returns the designation of the referenced object (normalized)
    pub fn designation(&self) -> &str {
        &self.designation
    }

    /// Returns the date and time of closest approach (UTC)
    pub fn time(&self) -> NaiveDateTime {
        self.time
    }

    /// Returns the calendar date of the approach
    pub fn date(&self) -> NaiveDate {
        self.time.date()
    }

    /// Returns the approach distance in astronomical units
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Returns the relative velocity in km/s
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Returns the handle of the linked object, if linking matched one
    pub fn neo(&self) -> Option<NeoId> {
        self.neo
    }

    /// Returns the approach time formatted as `YYYY-MM-DD HH:MM`
    pub fn time_str(&self) -> String {
        self.time.format("%Y-%m-%d %H:%M").to_string()
    }

    /// Sets the back-reference to the linked object. Called only by the
    /// database linking pass; the reference is set at most once.
    pub(crate) fn link(&mut self, id: NeoId) {
        debug_assert!(self.neo.is_none(), "approach linked twice");
        self.neo = Some(id);
    }
}

impl fmt::Display for CloseApproach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "On {}, '{}' approaches Earth at a distance of {:.2} au and a velocity of {:.2} km/s.",
            self.time_str(),
            self.designation,
            self.distance,
            self.velocity
        )
    }
}
