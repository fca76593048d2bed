//! Query and Filter Tests
//!
//! Exercises the composite filter criteria in isolation, in pairs, and in
//! combination, plus the result-cap combinator:
//! - No filter is the identity over the approach collection
//! - Every returned approach satisfies the filter; every satisfying
//!   approach is returned exactly once, in input order
//! - Self-contradictory ranges yield empty results, never errors

use chrono::{NaiveDate, NaiveDateTime};
use neo_explorer::database::NeoDatabase;
use neo_explorer::filters::{limit, CompositeFilter, FilterCriteria};
use neo_explorer::model::{CloseApproach, NearEarthObject};

// =============================================================================
// Helper Functions
// =============================================================================

fn neo(
    designation: &str,
    name: Option<&str>,
    diameter: Option<f64>,
    hazardous: bool,
) -> NearEarthObject {
    NearEarthObject::new(designation, name.map(str::to_string), diameter, hazardous).unwrap()
}

fn approach(designation: &str, time: &str, distance: f64, velocity: f64) -> CloseApproach {
    let time: NaiveDateTime = time.parse().unwrap();
    CloseApproach::new(designation, time, distance, velocity).unwrap()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn sample_db() -> NeoDatabase {
    let neos = vec![
        neo("433", Some("Eros"), Some(16.84), false),
        neo("2101", Some("Adonis"), Some(0.6), true),
        neo("2102", Some("Tantalus"), Some(1.649), true),
        neo("2020 FK", None, None, false),
    ];
    let approaches = vec![
        approach("2101", "2020-03-02T12:00:00", 0.3, 15.0),
        approach("433", "2020-01-15T06:30:00", 0.15, 5.2),
        approach("99999", "2020-03-02T00:00:00", 0.8, 30.0),
        approach("2102", "2020-04-10T09:00:00", 0.05, 25.0),
        approach("2020 FK", "2020-06-01T18:00:00", 0.02, 22.5),
        approach("2101", "2021-01-01T00:00:00", 0.45, 10.0),
    ];
    NeoDatabase::new(neos, approaches).unwrap()
}

/// Runs a query and returns the positions (in input order) of the results.
fn query_positions(db: &NeoDatabase, criteria: &FilterCriteria) -> Vec<usize> {
    let filter = CompositeFilter::from_criteria(criteria);
    db.query(Some(&filter))
        .map(|hit| {
            db.approaches()
                .iter()
                .position(|a| std::ptr::eq(a, hit))
                .unwrap()
        })
        .collect()
}

// =============================================================================
// Identity and Ordering Tests
// =============================================================================

/// No filter yields every approach, in input order, exactly once.
#[test]
fn test_query_without_filter_is_identity() {
    let db = sample_db();

    let positions = query_positions(&db, &FilterCriteria::new());
    assert_eq!(positions, vec![0, 1, 2, 3, 4, 5]);

    let unfiltered: Vec<_> = db.query(None).collect();
    assert_eq!(unfiltered.len(), 6);
}

/// Returned approaches all satisfy the filter, and every satisfying
/// approach is returned.
#[test]
fn test_query_soundness_and_completeness() {
    let db = sample_db();
    let criteria = FilterCriteria {
        distance_max: Some(0.4),
        ..FilterCriteria::new()
    };
    let filter = CompositeFilter::from_criteria(&criteria);

    let returned: Vec<_> = db.query(Some(&filter)).collect();
    for hit in &returned {
        assert!(filter.matches(hit, db.neo_for(hit)));
    }

    let satisfying = db
        .approaches()
        .iter()
        .filter(|a| filter.matches(a, db.neo_for(a)))
        .count();
    assert_eq!(returned.len(), satisfying);
}

// =============================================================================
// Single Criterion Tests
// =============================================================================

#[test]
fn test_query_exact_date() {
    let db = sample_db();
    let criteria = FilterCriteria {
        date: Some(date(2020, 3, 2)),
        ..FilterCriteria::new()
    };
    // Date filters apply to unlinked approaches too.
    assert_eq!(query_positions(&db, &criteria), vec![0, 2]);
}

#[test]
fn test_query_start_date() {
    let db = sample_db();
    let criteria = FilterCriteria {
        start_date: Some(date(2020, 4, 1)),
        ..FilterCriteria::new()
    };
    assert_eq!(query_positions(&db, &criteria), vec![3, 4, 5]);
}

#[test]
fn test_query_end_date() {
    let db = sample_db();
    let criteria = FilterCriteria {
        end_date: Some(date(2020, 3, 2)),
        ..FilterCriteria::new()
    };
    assert_eq!(query_positions(&db, &criteria), vec![0, 1, 2]);
}

#[test]
fn test_query_date_range() {
    let db = sample_db();
    let criteria = FilterCriteria {
        start_date: Some(date(2020, 3, 1)),
        end_date: Some(date(2020, 3, 31)),
        ..FilterCriteria::new()
    };
    assert_eq!(query_positions(&db, &criteria), vec![0, 2]);
}

#[test]
fn test_query_distance_bounds() {
    let db = sample_db();

    let max = FilterCriteria {
        distance_max: Some(0.1),
        ..FilterCriteria::new()
    };
    assert_eq!(query_positions(&db, &max), vec![3, 4]);

    let min = FilterCriteria {
        distance_min: Some(0.4),
        ..FilterCriteria::new()
    };
    assert_eq!(query_positions(&db, &min), vec![2, 5]);

    let band = FilterCriteria {
        distance_min: Some(0.1),
        distance_max: Some(0.4),
        ..FilterCriteria::new()
    };
    assert_eq!(query_positions(&db, &band), vec![0, 1]);
}

#[test]
fn test_query_velocity_bounds() {
    let db = sample_db();

    let min = FilterCriteria {
        velocity_min: Some(20.0),
        ..FilterCriteria::new()
    };
    assert_eq!(query_positions(&db, &min), vec![2, 3, 4]);

    let max = FilterCriteria {
        velocity_max: Some(10.0),
        ..FilterCriteria::new()
    };
    assert_eq!(query_positions(&db, &max), vec![1, 5]);
}

#[test]
fn test_query_diameter_bounds_exclude_unsized() {
    let db = sample_db();

    let min = FilterCriteria {
        diameter_min: Some(1.0),
        ..FilterCriteria::new()
    };
    // The unlinked approach (2) and the diameterless object (4) never
    // satisfy a diameter bound.
    assert_eq!(query_positions(&db, &min), vec![1, 3]);

    let max = FilterCriteria {
        diameter_max: Some(1.0),
        ..FilterCriteria::new()
    };
    assert_eq!(query_positions(&db, &max), vec![0, 5]);
}

#[test]
fn test_query_hazardous_flag() {
    let db = sample_db();

    let hazardous = FilterCriteria {
        hazardous: Some(true),
        ..FilterCriteria::new()
    };
    assert_eq!(query_positions(&db, &hazardous), vec![0, 3, 5]);

    // hazardous=false excludes the unlinked approach as well.
    let safe = FilterCriteria {
        hazardous: Some(false),
        ..FilterCriteria::new()
    };
    assert_eq!(query_positions(&db, &safe), vec![1, 4]);
}

// =============================================================================
// Combined Criteria Tests
// =============================================================================

#[test]
fn test_query_combined_criteria() {
    let db = sample_db();
    let criteria = FilterCriteria {
        hazardous: Some(true),
        distance_max: Some(0.4),
        ..FilterCriteria::new()
    };
    assert_eq!(query_positions(&db, &criteria), vec![0, 3]);
}

#[test]
fn test_query_all_three_date_criteria_together() {
    let db = sample_db();
    let criteria = FilterCriteria {
        date: Some(date(2020, 3, 2)),
        start_date: Some(date(2020, 2, 1)),
        end_date: Some(date(2020, 12, 31)),
        ..FilterCriteria::new()
    };
    assert_eq!(query_positions(&db, &criteria), vec![0, 2]);
}

#[test]
fn test_query_kitchen_sink() {
    let db = sample_db();
    let criteria = FilterCriteria {
        start_date: Some(date(2020, 1, 1)),
        end_date: Some(date(2020, 12, 31)),
        distance_max: Some(0.5),
        velocity_min: Some(10.0),
        diameter_max: Some(2.0),
        hazardous: Some(true),
        ..FilterCriteria::new()
    };
    assert_eq!(query_positions(&db, &criteria), vec![0, 3]);
}

// =============================================================================
// Contradictory Range Tests
// =============================================================================

/// Inverted bounds are legitimate queries with empty results.
#[test]
fn test_contradictory_ranges_yield_empty_not_error() {
    let db = sample_db();

    let dates = FilterCriteria {
        start_date: Some(date(2021, 1, 1)),
        end_date: Some(date(2020, 1, 1)),
        ..FilterCriteria::new()
    };
    assert!(query_positions(&db, &dates).is_empty());

    let distance = FilterCriteria {
        distance_min: Some(0.5),
        distance_max: Some(0.1),
        ..FilterCriteria::new()
    };
    assert!(query_positions(&db, &distance).is_empty());

    let velocity = FilterCriteria {
        velocity_min: Some(50.0),
        velocity_max: Some(1.0),
        ..FilterCriteria::new()
    };
    assert!(query_positions(&db, &velocity).is_empty());
}

// =============================================================================
// Concrete Scenario Tests
// =============================================================================

/// A hazardous 0.6 km object approaching at 0.3 au matches
/// `hazardous=true, distance_max=0.4` and not `distance_max=0.1`.
#[test]
fn test_scenario_adonis_flyby() {
    let neos = vec![neo("2101", Some("Adonis"), Some(0.6), true)];
    let approaches = vec![approach("2101", "2020-03-02T12:00:00", 0.3, 15.0)];
    let db = NeoDatabase::new(neos, approaches).unwrap();

    let including = FilterCriteria {
        hazardous: Some(true),
        distance_max: Some(0.4),
        ..FilterCriteria::new()
    };
    let filter = CompositeFilter::from_criteria(&including);
    assert_eq!(db.query(Some(&filter)).count(), 1);

    let excluding = FilterCriteria {
        hazardous: Some(true),
        distance_max: Some(0.1),
        ..FilterCriteria::new()
    };
    let filter = CompositeFilter::from_criteria(&excluding);
    assert_eq!(db.query(Some(&filter)).count(), 0);
}

/// An unlinked approach is invisible to object-derived filters but still
/// appears under no filter or under approach-derived filters it satisfies.
#[test]
fn test_scenario_unlinked_approach_visibility() {
    let db = sample_db();
    let orphan = &db.approaches()[2];
    assert!(orphan.neo().is_none());

    let all: Vec<_> = db.query(None).collect();
    assert!(all.iter().any(|a| std::ptr::eq(*a, orphan)));

    let by_date = FilterCriteria {
        date: Some(date(2020, 3, 2)),
        ..FilterCriteria::new()
    };
    assert!(query_positions(&db, &by_date).contains(&2));

    for object_criteria in [
        FilterCriteria {
            hazardous: Some(true),
            ..FilterCriteria::new()
        },
        FilterCriteria {
            hazardous: Some(false),
            ..FilterCriteria::new()
        },
        FilterCriteria {
            diameter_min: Some(0.0),
            ..FilterCriteria::new()
        },
    ] {
        assert!(
            !query_positions(&db, &object_criteria).contains(&2),
            "unlinked approach leaked through {:?}",
            object_criteria
        );
    }
}

// =============================================================================
// Result Cap Tests
// =============================================================================

#[test]
fn test_limit_caps_query_results() {
    let db = sample_db();

    let capped: Vec<_> = limit(db.query(None), Some(3)).collect();
    assert_eq!(capped.len(), 3);
    assert!(std::ptr::eq(capped[0], &db.approaches()[0]));

    let uncapped: Vec<_> = limit(db.query(None), None).collect();
    assert_eq!(uncapped.len(), 6);

    let zero: Vec<_> = limit(db.query(None), Some(0)).collect();
    assert_eq!(zero.len(), 6);

    let negative: Vec<_> = limit(db.query(None), Some(-5)).collect();
    assert_eq!(negative.len(), 6);
}
