//! CSV result writer

use std::path::Path;

use serde::Serialize;

use crate::database::NeoDatabase;
use crate::model::CloseApproach;

use super::errors::WriteResult;

/// One output row: approach fields followed by the linked object's fields
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    datetime_utc: String,
    distance_au: f64,
    velocity_km_s: f64,
    designation: &'a str,
    name: &'a str,
    diameter_km: Option<f64>,
    potentially_hazardous: bool,
}

/// Writes close approaches to a CSV file with a header row.
///
/// Unlinked approaches carry their own designation, an empty name, no
/// diameter, and a false hazardous flag.
pub fn write_to_csv<'a>(
    db: &NeoDatabase,
    results: impl IntoIterator<Item = &'a CloseApproach>,
    path: impl AsRef<Path>,
) -> WriteResult<()> {
    let mut writer = csv::Writer::from_path(path.as_ref())?;

    for approach in results {
        let neo = db.neo_for(approach);
        let row = CsvRow {
            datetime_utc: approach.time_str(),
            distance_au: approach.distance(),
            velocity_km_s: approach.velocity(),
            designation: neo.map_or(approach.designation(), |n| n.designation()),
            name: neo.and_then(|n| n.name()).unwrap_or(""),
            diameter_km: neo.and_then(|n| n.diameter()),
            potentially_hazardous: neo.is_some_and(|n| n.hazardous()),
        };
        writer.serialize(row)?;
    }

    writer.flush()?;
    Ok(())
}
