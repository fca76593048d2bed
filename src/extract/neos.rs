//! Near-Earth object loading from the small-body CSV export

use std::path::Path;

use log::{info, warn};
use serde::Deserialize;

use crate::model::NearEarthObject;

use super::errors::ExtractResult;

/// Columns of interest in the small-body export; the file carries many
/// more, which the reader ignores.
#[derive(Debug, Deserialize)]
struct NeoRow {
    #[serde(default)]
    pdes: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    diameter: String,
    #[serde(default)]
    pha: String,
}

/// Loads near-Earth objects from a CSV file.
///
/// Rows without a designation are skipped; an unparseable diameter is
/// treated as unknown; `pha` of `Y` (any case) marks the object
/// hazardous. Rows that fail entity validation are skipped with a
/// warning, leaving the abort-or-continue decision here rather than in
/// the entity model.
pub fn load_neos(path: impl AsRef<Path>) -> ExtractResult<Vec<NearEarthObject>> {
    let mut reader = csv::Reader::from_path(path.as_ref())?;
    let mut neos = Vec::new();

    for (row_num, row) in reader.deserialize::<NeoRow>().enumerate() {
        let row = match row {
            Ok(row) => row,
            Err(e) => {
                warn!("skipping malformed NEO row {}: {}", row_num + 2, e);
                continue;
            }
        };

        let designation = row.pdes.trim();
        if designation.is_empty() {
            continue;
        }

        let name = Some(row.name).filter(|n| !n.trim().is_empty());
        let diameter = row.diameter.trim().parse::<f64>().ok();
        let hazardous = row.pha.trim().eq_ignore_ascii_case("y");

        match NearEarthObject::new(designation, name, diameter, hazardous) {
            Ok(neo) => neos.push(neo),
            Err(e) => warn!("skipping invalid NEO row {}: {}", row_num + 2, e),
        }
    }

    info!("loaded {} NEOs", neos.len());
    Ok(neos)
}
