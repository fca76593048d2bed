//! Close approach loading from the CAD API JSON envelope

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::{info, warn};
use serde_json::Value;

use crate::model::CloseApproach;

use super::errors::{ExtractError, ExtractResult};
use super::time::parse_cad_time;

// Field positions in a CAD data row.
const COL_DESIGNATION: usize = 0;
const COL_TIME: usize = 3;
const COL_DISTANCE: usize = 4;
const COL_VELOCITY: usize = 7;

/// Loads close approaches from a CAD JSON file.
///
/// The file is the NASA/JPL envelope `{"data": [[...], ...]}` with the
/// designation, timestamp, distance, and velocity at fixed positions in
/// each row. Rows with missing or malformed fields are skipped with a
/// warning; a missing `data` array is fatal.
pub fn load_approaches(path: impl AsRef<Path>) -> ExtractResult<Vec<CloseApproach>> {
    let file = File::open(path.as_ref())?;
    let envelope: Value = serde_json::from_reader(BufReader::new(file))?;
    let rows = envelope
        .get("data")
        .and_then(Value::as_array)
        .ok_or(ExtractError::MissingData)?;

    let mut approaches = Vec::new();

    for (row_num, row) in rows.iter().enumerate() {
        match parse_row(row) {
            Ok(Some(approach)) => approaches.push(approach),
            Ok(None) => continue,
            Err(e) => warn!("skipping malformed approach row {}: {}", row_num + 1, e),
        }
    }

    info!("loaded {} close approaches", approaches.len());
    Ok(approaches)
}

/// Parses one CAD row. `Ok(None)` means a row with empty required fields,
/// silently dropped as in the upstream export.
fn parse_row(row: &Value) -> ExtractResult<Option<CloseApproach>> {
    let fields = match row.as_array() {
        Some(fields) => fields,
        None => return Ok(None),
    };

    let designation = field_str(fields, COL_DESIGNATION);
    let time_str = field_str(fields, COL_TIME);
    let distance_str = field_str(fields, COL_DISTANCE);
    let velocity_str = field_str(fields, COL_VELOCITY);

    if designation.is_empty() || time_str.is_empty() || distance_str.is_empty() || velocity_str.is_empty() {
        return Ok(None);
    }

    let time = parse_cad_time(time_str)?;
    let distance = distance_str
        .parse::<f64>()
        .map_err(|_| ExtractError::InvalidNumber(distance_str.to_string()))?;
    let velocity = velocity_str
        .parse::<f64>()
        .map_err(|_| ExtractError::InvalidNumber(velocity_str.to_string()))?;

    match CloseApproach::new(designation, time, distance, velocity) {
        Ok(approach) => Ok(Some(approach)),
        Err(e) => {
            warn!("dropping invalid approach for '{}': {}", designation, e);
            Ok(None)
        }
    }
}

fn field_str(fields: &[Value], index: usize) -> &str {
    fields
        .get(index)
        .and_then(Value::as_str)
        .unwrap_or("")
        .trim()
}
