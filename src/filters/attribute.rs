//! Single-attribute filters over close approaches
//!
//! One variant per attribute kind, each carrying its operator and reference
//! value. Object-derived attributes (diameter, hazardous flag) evaluate to
//! "absent" when the approach has no linked object; an absent attribute
//! never matches and never errors.

use chrono::NaiveDate;

use crate::model::{CloseApproach, NearEarthObject};

use super::errors::{FilterError, FilterResult};
use super::ops::ComparisonOp;

/// A comparison against one derived attribute of a close approach
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeFilter {
    /// Calendar date of the approach
    Date { op: ComparisonOp, value: NaiveDate },
    /// Approach distance in astronomical units
    Distance { op: ComparisonOp, value: f64 },
    /// Relative velocity in km/s
    Velocity { op: ComparisonOp, value: f64 },
    /// Diameter of the linked object in kilometers
    Diameter { op: ComparisonOp, value: f64 },
    /// Hazardous flag of the linked object (equality only)
    Hazardous { op: ComparisonOp, value: bool },
}

impl AttributeFilter {
    /// Filter on the approach date
    pub fn date(op: ComparisonOp, value: NaiveDate) -> Self {
        AttributeFilter::Date { op, value }
    }

    /// Filter on the approach distance
    pub fn distance(op: ComparisonOp, value: f64) -> Self {
        AttributeFilter::Distance { op, value }
    }

    /// Filter on the approach velocity
    pub fn velocity(op: ComparisonOp, value: f64) -> Self {
        AttributeFilter::Velocity { op, value }
    }

    /// Filter on the linked object's diameter
    pub fn diameter(op: ComparisonOp, value: f64) -> Self {
        AttributeFilter::Diameter { op, value }
    }

    /// Filter on the linked object's hazardous flag.
    ///
    /// Booleans compare by equality only; an ordering operator fails with
    /// [`FilterError::BooleanOrdering`] at construction time.
    pub fn hazardous(op: ComparisonOp, value: bool) -> FilterResult<Self> {
        if !op.is_equality() {
            return Err(FilterError::BooleanOrdering(op));
        }
        Ok(AttributeFilter::Hazardous { op, value })
    }

    /// Equality filter on the hazardous flag, the shape the factory emits
    pub fn hazardous_eq(value: bool) -> Self {
        AttributeFilter::Hazardous {
            op: ComparisonOp::Eq,
            value,
        }
    }

    /// Evaluates the filter on an approach and its linked object, if any.
    ///
    /// Extraction yields "absent" when the attribute is object-derived and
    /// `neo` is `None`, or when the object has no diameter; absent does not
    /// match.
    pub fn matches(&self, approach: &CloseApproach, neo: Option<&NearEarthObject>) -> bool {
        match self {
            AttributeFilter::Date { op, value } => op.evaluate(&approach.date(), value),
            AttributeFilter::Distance { op, value } => op.evaluate(&approach.distance(), value),
            AttributeFilter::Velocity { op, value } => op.evaluate(&approach.velocity(), value),
            AttributeFilter::Diameter { op, value } => match neo.and_then(|n| n.diameter()) {
                Some(diameter) => op.evaluate(&diameter, value),
                None => false,
            },
            AttributeFilter::Hazardous { op, value } => match neo {
                Some(neo) => op.evaluate(&neo.hazardous(), value),
                None => false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn approach() -> CloseApproach {
        let time: NaiveDateTime = "2020-03-02T12:00:00".parse().unwrap();
        CloseApproach::new("2101", time, 0.3, 15.0).unwrap()
    }

    fn neo() -> NearEarthObject {
        NearEarthObject::new("2101", Some("Adonis".to_string()), Some(0.6), true).unwrap()
    }

    #[test]
    fn test_date_filter() {
        let date = NaiveDate::from_ymd_opt(2020, 3, 2).unwrap();
        let filter = AttributeFilter::date(ComparisonOp::Eq, date);
        assert!(filter.matches(&approach(), None));

        let filter = AttributeFilter::date(ComparisonOp::Gt, date);
        assert!(!filter.matches(&approach(), None));
    }

    #[test]
    fn test_distance_filter() {
        let filter = AttributeFilter::distance(ComparisonOp::Le, 0.4);
        assert!(filter.matches(&approach(), None));

        let filter = AttributeFilter::distance(ComparisonOp::Le, 0.1);
        assert!(!filter.matches(&approach(), None));
    }

    #[test]
    fn test_velocity_filter() {
        let filter = AttributeFilter::velocity(ComparisonOp::Ge, 10.0);
        assert!(filter.matches(&approach(), None));

        let filter = AttributeFilter::velocity(ComparisonOp::Gt, 15.0);
        assert!(!filter.matches(&approach(), None));
    }

    #[test]
    fn test_diameter_filter_requires_linked_object() {
        let filter = AttributeFilter::diameter(ComparisonOp::Ge, 0.5);

        // Absent attribute never matches, regardless of operator direction.
        assert!(!filter.matches(&approach(), None));
        assert!(filter.matches(&approach(), Some(&neo())));

        let unsized_neo = NearEarthObject::new("2101", None, None, true).unwrap();
        assert!(!filter.matches(&approach(), Some(&unsized_neo)));
    }

    #[test]
    fn test_hazardous_filter_requires_linked_object() {
        let filter = AttributeFilter::hazardous_eq(true);
        assert!(filter.matches(&approach(), Some(&neo())));
        assert!(!filter.matches(&approach(), None));

        // Even hazardous=false does not match an unlinked approach.
        let filter = AttributeFilter::hazardous_eq(false);
        assert!(!filter.matches(&approach(), None));
    }

    #[test]
    fn test_hazardous_rejects_ordering_operators() {
        for op in [
            ComparisonOp::Lt,
            ComparisonOp::Le,
            ComparisonOp::Gt,
            ComparisonOp::Ge,
        ] {
            let err = AttributeFilter::hazardous(op, true).unwrap_err();
            assert_eq!(err, FilterError::BooleanOrdering(op));
        }

        assert!(AttributeFilter::hazardous(ComparisonOp::Eq, true).is_ok());
        assert!(AttributeFilter::hazardous(ComparisonOp::Ne, true).is_ok());
    }
}
