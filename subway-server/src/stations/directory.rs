//! The in-memory station directory.

use std::collections::HashMap;

use crate::domain::StopId;

use super::error::LoadError;

/// A single station record from the static dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct StationRecord {
    /// Stable identifier from the source dataset.
    pub id: StopId,

    /// Display name (e.g. "Nostrand Av").
    pub name: String,

    /// Latitude in floating-point degrees.
    pub latitude: f64,

    /// Longitude in floating-point degrees.
    pub longitude: f64,

    /// Parent station, if this record is a platform child.
    /// `None` means this is a top-level station.
    pub parent_station: Option<StopId>,
}

impl StationRecord {
    /// Whether this record is a top-level station.
    ///
    /// Only top-level stations participate in proximity search;
    /// platform children (`A46N`, `A46S`, ...) are skipped.
    pub fn is_top_level(&self) -> bool {
        self.parent_station.is_none()
    }
}

/// The immutable set of station records, loaded once at startup.
///
/// Records keep their dataset order, which matters: distance ranking
/// uses a stable sort and breaks ties by this order. Lookup by id is
/// map-backed O(1).
#[derive(Debug, Clone, Default)]
pub struct StationDirectory {
    /// Records in dataset order.
    records: Vec<StationRecord>,

    /// Stop id → index into `records`.
    by_id: HashMap<StopId, usize>,
}

impl StationDirectory {
    /// Build a directory from records, preserving their order.
    ///
    /// Fails with [`LoadError::DuplicateStop`] if two records share an id.
    pub fn new(records: Vec<StationRecord>) -> Result<Self, LoadError> {
        let mut by_id = HashMap::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            if by_id.insert(record.id.clone(), index).is_some() {
                return Err(LoadError::DuplicateStop(record.id.clone()));
            }
        }
        Ok(Self { records, by_id })
    }

    /// Look up a station by id.
    pub fn lookup(&self, id: &StopId) -> Option<&StationRecord> {
        self.by_id.get(id).map(|&index| &self.records[index])
    }

    /// Whether the directory contains a station with this id.
    pub fn contains(&self, id: &StopId) -> bool {
        self.by_id.contains_key(id)
    }

    /// All records, in dataset order.
    pub fn iter(&self) -> impl Iterator<Item = &StationRecord> {
        self.records.iter()
    }

    /// Top-level stations (no parent), in dataset order.
    pub fn top_level(&self) -> impl Iterator<Item = &StationRecord> {
        self.records.iter().filter(|r| r.is_top_level())
    }

    /// Total number of records, children included.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the directory holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
