//! Aggregate statistics snapshot

use std::fmt;

use crate::model::{CloseApproach, NearEarthObject};

/// Aggregate counts over a database's entity collections.
///
/// Computed once at construction time; never recomputed, since the
/// underlying collections never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Statistics {
    /// Total number of objects
    pub total_neos: usize,
    /// Total number of close approaches
    pub total_approaches: usize,
    /// Objects marked potentially hazardous
    pub hazardous_neos: usize,
    /// Objects with an IAU name
    pub named_neos: usize,
    /// Objects with a known diameter
    pub neos_with_diameter: usize,
}

impl Statistics {
    /// Computes the snapshot for the given entity collections
    pub(crate) fn compute(neos: &[NearEarthObject], approaches: &[CloseApproach]) -> Self {
        Self {
            total_neos: neos.len(),
            total_approaches: approaches.len(),
            hazardous_neos: neos.iter().filter(|n| n.hazardous()).count(),
            named_neos: neos.iter().filter(|n| n.name().is_some()).count(),
            neos_with_diameter: neos.iter().filter(|n| n.diameter().is_some()).count(),
        }
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "NEOs: {}", self.total_neos)?;
        writeln!(f, "Close approaches: {}", self.total_approaches)?;
        writeln!(f, "Potentially hazardous NEOs: {}", self.hazardous_neos)?;
        writeln!(f, "Named NEOs: {}", self.named_neos)?;
        write!(f, "NEOs with known diameter: {}", self.neos_with_diameter)
    }
}
