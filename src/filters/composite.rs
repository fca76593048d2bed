//! Composite AND filter and the criteria factory

use chrono::NaiveDate;

use crate::model::{CloseApproach, NearEarthObject};

use super::attribute::AttributeFilter;
use super::ops::ComparisonOp;

/// User-supplied query criteria, one optional field per recognized
/// criterion. Absent fields contribute no filter at all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Exact approach date
    pub date: Option<NaiveDate>,
    /// Inclusive lower bound on the approach date
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper bound on the approach date
    pub end_date: Option<NaiveDate>,
    /// Inclusive lower bound on the distance in au
    pub distance_min: Option<f64>,
    /// Inclusive upper bound on the distance in au
    pub distance_max: Option<f64>,
    /// Inclusive lower bound on the velocity in km/s
    pub velocity_min: Option<f64>,
    /// Inclusive upper bound on the velocity in km/s
    pub velocity_max: Option<f64>,
    /// Inclusive lower bound on the linked object's diameter in km
    pub diameter_min: Option<f64>,
    /// Inclusive upper bound on the linked object's diameter in km
    pub diameter_max: Option<f64>,
    /// Required hazardous flag of the linked object
    pub hazardous: Option<bool>,
}

impl FilterCriteria {
    /// Creates criteria with every field unset (matches everything)
    pub fn new() -> Self {
        Self::default()
    }
}

/// An AND-combination of attribute filters.
///
/// Matches an approach iff every contained filter matches it; the empty
/// combination matches everything. Date, start-date, and end-date criteria
/// may coexist and may be self-contradictory, which legitimately yields
/// zero results rather than an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompositeFilter {
    filters: Vec<AttributeFilter>,
}

impl CompositeFilter {
    /// Creates a composite filter from the given attribute filters
    pub fn new(filters: Vec<AttributeFilter>) -> Self {
        Self { filters }
    }

    /// Builds exactly one attribute filter per present criterion.
    ///
    /// Bounds become inclusive `Ge`/`Le` comparisons; the hazardous flag
    /// becomes an equality comparison.
    pub fn from_criteria(criteria: &FilterCriteria) -> Self {
        let mut filters = Vec::new();

        if let Some(date) = criteria.date {
            filters.push(AttributeFilter::date(ComparisonOp::Eq, date));
        }
        if let Some(start) = criteria.start_date {
            filters.push(AttributeFilter::date(ComparisonOp::Ge, start));
        }
        if let Some(end) = criteria.end_date {
            filters.push(AttributeFilter::date(ComparisonOp::Le, end));
        }

        if let Some(min) = criteria.distance_min {
            filters.push(AttributeFilter::distance(ComparisonOp::Ge, min));
        }
        if let Some(max) = criteria.distance_max {
            filters.push(AttributeFilter::distance(ComparisonOp::Le, max));
        }

        if let Some(min) = criteria.velocity_min {
            filters.push(AttributeFilter::velocity(ComparisonOp::Ge, min));
        }
        if let Some(max) = criteria.velocity_max {
            filters.push(AttributeFilter::velocity(ComparisonOp::Le, max));
        }

        if let Some(min) = criteria.diameter_min {
            filters.push(AttributeFilter::diameter(ComparisonOp::Ge, min));
        }
        if let Some(max) = criteria.diameter_max {
            filters.push(AttributeFilter::diameter(ComparisonOp::Le, max));
        }

        if let Some(hazardous) = criteria.hazardous {
            filters.push(AttributeFilter::hazardous_eq(hazardous));
        }

        Self { filters }
    }

    /// Returns the contained attribute filters in order
    pub fn filters(&self) -> &[AttributeFilter] {
        &self.filters
    }

    /// Returns true if no filters are present
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Evaluates all filters against an approach and its linked object
    /// (AND semantics)
    pub fn matches(&self, approach: &CloseApproach, neo: Option<&NearEarthObject>) -> bool {
        self.filters.iter().all(|f| f.matches(approach, neo))
    }
}
