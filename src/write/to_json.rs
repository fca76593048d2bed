//! JSON result writer

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::Serialize;

use crate::database::NeoDatabase;
use crate::model::CloseApproach;

use super::errors::WriteResult;

#[derive(Debug, Serialize)]
struct JsonRow<'a> {
    datetime_utc: String,
    distance_au: f64,
    velocity_km_s: f64,
    neo: JsonNeo<'a>,
}

#[derive(Debug, Serialize)]
struct JsonNeo<'a> {
    designation: &'a str,
    name: Option<&'a str>,
    diameter_km: Option<f64>,
    potentially_hazardous: bool,
}

/// Writes close approaches to a pretty-printed JSON array, each element
/// carrying the approach fields and a nested object record.
pub fn write_to_json<'a>(
    db: &NeoDatabase,
    results: impl IntoIterator<Item = &'a CloseApproach>,
    path: impl AsRef<Path>,
) -> WriteResult<()> {
    let rows: Vec<JsonRow> = results
        .into_iter()
        .map(|approach| {
            let neo = db.neo_for(approach);
            JsonRow {
                datetime_utc: approach.time_str(),
                distance_au: approach.distance(),
                velocity_km_s: approach.velocity(),
                neo: JsonNeo {
                    designation: neo.map_or(approach.designation(), |n| n.designation()),
                    name: neo.and_then(|n| n.name()),
                    diameter_km: neo.and_then(|n| n.diameter()),
                    potentially_hazardous: neo.is_some_and(|n| n.hazardous()),
                },
            }
        })
        .collect();

    let file = File::create(path.as_ref())?;
    serde_json::to_writer_pretty(BufWriter::new(file), &rows)?;
    Ok(())
}
