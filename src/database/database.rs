//! The linked NEO database and its query operations

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::NaiveDate;
use log::info;

use crate::filters::CompositeFilter;
use crate::model::{ApproachId, CloseApproach, NearEarthObject, NeoId};

use super::errors::{DatabaseError, DatabaseResult};
use super::indexes::{ApproachIndexes, DiameterBucket};
use super::statistics::Statistics;

/// A database of near-Earth objects and their close approaches.
///
/// Built once from already-validated entity collections: the constructor
/// indexes objects by designation and name, links every approach whose
/// designation matches an object, builds the secondary indexes, and caches
/// an aggregate statistics snapshot. The database is logically immutable
/// after construction.
#[derive(Debug)]
pub struct NeoDatabase {
    neos: Vec<NearEarthObject>,
    approaches: Vec<CloseApproach>,
    designation_index: BTreeMap<String, NeoId>,
    name_index: BTreeMap<String, NeoId>,
    indexes: ApproachIndexes,
    stats: Statistics,
}

impl NeoDatabase {
    /// Creates a database from ordered entity collections.
    ///
    /// Fails with [`DatabaseError::DuplicateDesignation`] if two objects
    /// share a designation; the uniqueness invariant is never silently
    /// repaired by overwriting. Approaches whose designation matches no
    /// object stay unlinked permanently, which is not an error.
    pub fn new(
        neos: Vec<NearEarthObject>,
        mut approaches: Vec<CloseApproach>,
    ) -> DatabaseResult<Self> {
        let mut designation_index = BTreeMap::new();
        let mut name_index = BTreeMap::new();

        for (i, neo) in neos.iter().enumerate() {
            let id = NeoId(i);
            if designation_index
                .insert(neo.designation().to_string(), id)
                .is_some()
            {
                return Err(DatabaseError::DuplicateDesignation(
                    neo.designation().to_string(),
                ));
            }
            if let Some(name) = neo.name() {
                // Names are not unique; the last object in input order wins.
                name_index.insert(name.to_string(), id);
            }
        }

        let mut neos = neos;
        let mut indexes = ApproachIndexes::new();
        let mut linked = 0usize;

        for (i, approach) in approaches.iter_mut().enumerate() {
            let id = ApproachId(i);
            indexes.index_date(approach.date(), id);

            if let Some(&neo_id) = designation_index.get(approach.designation()) {
                approach.link(neo_id);
                let neo = &mut neos[neo_id.0];
                neo.record_approach(id);
                indexes.index_linked(neo.hazardous(), neo.diameter(), id);
                linked += 1;
            }
        }

        let stats = Statistics::compute(&neos, &approaches);
        info!(
            "database initialized with {} NEOs and {} close approaches ({} linked)",
            stats.total_neos, stats.total_approaches, linked
        );

        Ok(Self {
            neos,
            approaches,
            designation_index,
            name_index,
            indexes,
            stats,
        })
    }

    /// Returns all objects in input order
    pub fn neos(&self) -> &[NearEarthObject] {
        &self.neos
    }

    /// Returns all close approaches in input order
    pub fn approaches(&self) -> &[CloseApproach] {
        &self.approaches
    }

    /// Resolves an object handle
    pub fn neo(&self, id: NeoId) -> Option<&NearEarthObject> {
        self.neos.get(id.0)
    }

    /// Resolves an approach handle
    pub fn approach(&self, id: ApproachId) -> Option<&CloseApproach> {
        self.approaches.get(id.0)
    }

    /// Returns the object an approach was linked to, if any
    pub fn neo_for(&self, approach: &CloseApproach) -> Option<&NearEarthObject> {
        approach.neo().and_then(|id| self.neos.get(id.0))
    }

    /// Returns an object's linked approaches in input order
    pub fn approaches_of<'a>(
        &'a self,
        neo: &'a NearEarthObject,
    ) -> impl Iterator<Item = &'a CloseApproach> + 'a {
        neo.approaches()
            .iter()
            .filter_map(move |id| self.approaches.get(id.0))
    }

    /// Finds an object by exact designation (case/whitespace-normalized).
    pub fn get_by_designation(&self, designation: &str) -> Option<&NearEarthObject> {
        let key = designation.trim().to_uppercase();
        self.designation_index
            .get(&key)
            .and_then(|&id| self.neos.get(id.0))
    }

    /// Finds an object by IAU name.
    ///
    /// Tries an exact (trimmed) match first, then falls back to a
    /// case-insensitive linear scan over the name index. Most lookups hit
    /// the fast path; only ambiguous casing pays for the scan.
    pub fn get_by_name(&self, name: &str) -> Option<&NearEarthObject> {
        let trimmed = name.trim();
        if let Some(&id) = self.name_index.get(trimmed) {
            return self.neos.get(id.0);
        }

        let lowered = trimmed.to_lowercase();
        self.name_index
            .iter()
            .find(|(stored, _)| stored.to_lowercase() == lowered)
            .and_then(|(_, &id)| self.neos.get(id.0))
    }

    /// Lazily yields approaches matching the composite filter, in input
    /// order. With no filter, yields every approach. Each call produces a
    /// fresh sequence; nothing is materialized eagerly.
    pub fn query<'a>(
        &'a self,
        filter: Option<&'a CompositeFilter>,
    ) -> impl Iterator<Item = &'a CloseApproach> + 'a {
        self.approaches.iter().filter(move |approach| match filter {
            Some(filter) => filter.matches(approach, self.neo_for(approach)),
            None => true,
        })
    }

    /// Returns all approaches on the given calendar date (index lookup)
    pub fn query_by_date(&self, date: NaiveDate) -> Vec<&CloseApproach> {
        match self.indexes.date.get(&date) {
            Some(ids) => self.resolve(ids),
            None => Vec::new(),
        }
    }

    /// Lazily yields approaches within the inclusive date range
    pub fn query_by_date_range<'a>(
        &'a self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> impl Iterator<Item = &'a CloseApproach> + 'a {
        self.approaches.iter().filter(move |approach| {
            let date = approach.date();
            start <= date && date <= end
        })
    }

    /// Returns all approaches whose linked object has the given hazardous
    /// flag (index lookup). Unlinked approaches are in neither bucket.
    pub fn query_hazardous(&self, hazardous: bool) -> Vec<&CloseApproach> {
        match self.indexes.hazardous.get(&hazardous) {
            Some(ids) => self.resolve(ids),
            None => Vec::new(),
        }
    }

    /// Returns all approaches whose linked object's diameter falls in the
    /// given bucket (index lookup)
    pub fn query_diameter_bucket(&self, bucket: DiameterBucket) -> Vec<&CloseApproach> {
        match self.indexes.diameter.get(&bucket) {
            Some(ids) => self.resolve(ids),
            None => Vec::new(),
        }
    }

    /// Lazily yields approaches whose linked object's diameter falls in
    /// `[min, max]` inclusive. Unlinked approaches and objects without a
    /// diameter are excluded, not failed.
    pub fn query_by_diameter_range<'a>(
        &'a self,
        min: f64,
        max: f64,
    ) -> impl Iterator<Item = &'a CloseApproach> + 'a {
        self.approaches.iter().filter(move |approach| {
            match self.neo_for(approach).and_then(|n| n.diameter()) {
                Some(diameter) => min <= diameter && diameter <= max,
                None => false,
            }
        })
    }

    /// Searches objects by case-insensitive substring, designations first,
    /// then names (excluding objects already matched), stopping at `limit`.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&NearEarthObject> {
        let query = query.trim().to_lowercase();
        if query.is_empty() || limit == 0 {
            return Vec::new();
        }

        let mut results: Vec<&NearEarthObject> = Vec::new();
        let mut matched: Vec<&str> = Vec::new();

        for neo in &self.neos {
            if neo.designation().to_lowercase().contains(&query) {
                results.push(neo);
                matched.push(neo.designation());
                if results.len() >= limit {
                    return results;
                }
            }
        }

        for neo in &self.neos {
            let name_hit = neo
                .name()
                .is_some_and(|name| name.to_lowercase().contains(&query));
            if name_hit && !matched.contains(&neo.designation()) {
                results.push(neo);
                if results.len() >= limit {
                    break;
                }
            }
        }

        results
    }

    /// Returns the `limit` approaches with the smallest distance.
    ///
    /// Full stable sort per call, ties broken by input order; the caller
    /// caches the result if repeated access is needed.
    pub fn closest(&self, limit: usize) -> Vec<&CloseApproach> {
        self.ranked(limit, |a, b| {
            a.distance()
                .partial_cmp(&b.distance())
                .unwrap_or(Ordering::Equal)
        })
    }

    /// Returns the `limit` approaches with the largest velocity
    pub fn fastest(&self, limit: usize) -> Vec<&CloseApproach> {
        self.ranked(limit, |a, b| {
            b.velocity()
                .partial_cmp(&a.velocity())
                .unwrap_or(Ordering::Equal)
        })
    }

    /// Returns the `limit` most recent approaches (latest time first)
    pub fn recent(&self, limit: usize) -> Vec<&CloseApproach> {
        self.ranked(limit, |a, b| b.time().cmp(&a.time()))
    }

    /// Returns the cached statistics snapshot
    pub fn statistics(&self) -> Statistics {
        self.stats
    }

    /// Formats an approach for display, using the linked object's full
    /// name when available.
    pub fn describe(&self, approach: &CloseApproach) -> String {
        let subject = match self.neo_for(approach) {
            Some(neo) => neo.fullname(),
            None => format!("'{}'", approach.designation()),
        };
        format!(
            "On {}, {} approaches Earth at a distance of {:.2} au and a velocity of {:.2} km/s.",
            approach.time_str(),
            subject,
            approach.distance(),
            approach.velocity()
        )
    }

    fn ranked(
        &self,
        limit: usize,
        compare: impl FnMut(&&CloseApproach, &&CloseApproach) -> Ordering,
    ) -> Vec<&CloseApproach> {
        let mut sorted: Vec<&CloseApproach> = self.approaches.iter().collect();
        sorted.sort_by(compare);
        sorted.truncate(limit);
        sorted
    }

    fn resolve(&self, ids: &[ApproachId]) -> Vec<&CloseApproach> {
        ids.iter()
            .filter_map(|id| self.approaches.get(id.0))
            .collect()
    }
}
