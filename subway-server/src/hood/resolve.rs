//! Neighborhood resolution.
//!
//! Given a geographic point: find the nearest stations, the lines
//! serving each, and every line-adjacent station in both directions.
//! The deduplicated union of all of those is the "neighborhood".

use std::collections::{BTreeMap, HashSet};

use tracing::{debug, trace};

use crate::domain::{Direction, StopId};
use crate::lines::LineTopology;
use crate::stations::{StationDirectory, StationRecord};

/// Error from neighborhood resolution.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QueryError {
    /// A coordinate was NaN or infinite
    #[error("{field} must be a finite number, got {value}")]
    NonFiniteCoordinate { field: &'static str, value: f64 },
}

/// A neighborhood query: a point and how many stations to return.
#[derive(Debug, Clone, Copy)]
pub struct NeighborhoodQuery {
    /// Query latitude in degrees.
    pub latitude: f64,

    /// Query longitude in degrees.
    pub longitude: f64,

    /// How many close stations to return. Clamped to at least 1 at
    /// resolution time; there is no upper clamp (asking for more than
    /// exist returns all).
    pub result_count: usize,
}

impl NeighborhoodQuery {
    /// Result count used when the caller doesn't give one.
    pub const DEFAULT_RESULT_COUNT: usize = 20;

    /// Query with the default result count.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self::with_count(latitude, longitude, Self::DEFAULT_RESULT_COUNT)
    }

    /// Query with an explicit result count.
    pub fn with_count(latitude: f64, longitude: f64, result_count: usize) -> Self {
        Self {
            latitude,
            longitude,
            result_count,
        }
    }
}

/// The stations one step away along a line, relative to a direction of
/// travel: `prev` is one step behind, `next` one step ahead. Either may
/// be absent independently (penultimate-to-terminal has a `prev` but no
/// `next`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdjacentStations {
    pub prev: Option<StopId>,
    pub next: Option<StopId>,
}

/// Per-direction adjacency for one station: line name → neighbors.
#[derive(Debug, Clone, Default)]
pub struct StationNeighbors {
    /// Adjacency when travelling north.
    pub northbound: BTreeMap<String, AdjacentStations>,

    /// Adjacency when travelling south.
    pub southbound: BTreeMap<String, AdjacentStations>,
}

impl StationNeighbors {
    fn heading_mut(&mut self, direction: Direction) -> &mut BTreeMap<String, AdjacentStations> {
        match direction {
            Direction::Northbound => &mut self.northbound,
            Direction::Southbound => &mut self.southbound,
        }
    }

    /// Adjacency map for one direction.
    pub fn heading(&self, direction: Direction) -> &BTreeMap<String, AdjacentStations> {
        match direction {
            Direction::Northbound => &self.northbound,
            Direction::Southbound => &self.southbound,
        }
    }
}

/// Result of a neighborhood query.
#[derive(Debug, Clone)]
pub struct Neighborhood {
    /// Nearest stations, nearest first.
    pub close_stations: Vec<StationRecord>,

    /// Their stop ids, in the same order.
    pub stop_ids: Vec<StopId>,

    /// Station id → per-direction, per-line adjacency.
    pub neighbors: BTreeMap<StopId, StationNeighbors>,

    /// Every stop id the result references: the close stations plus
    /// all their computed neighbors, deduplicated in first-appearance
    /// order.
    pub hood: Vec<StopId>,
}

/// Resolves neighborhood queries against an immutable directory and
/// topology.
///
/// Resolution is pure, synchronous CPU work over a few hundred records;
/// the borrowed data is never mutated, so one resolver (or many) can
/// serve concurrent requests freely.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    directory: &'a StationDirectory,
    topology: &'a LineTopology,
}

impl<'a> Resolver<'a> {
    /// Create a resolver over a directory and topology.
    pub fn new(directory: &'a StationDirectory, topology: &'a LineTopology) -> Self {
        Self {
            directory,
            topology,
        }
    }

    /// Resolve a query into a [`Neighborhood`].
    ///
    /// Fails whole on non-finite coordinates; never returns a partial
    /// result. Absent adjacencies (terminals, stations on no line) are
    /// `None` fields inside a complete result.
    pub fn resolve(&self, query: &NeighborhoodQuery) -> Result<Neighborhood, QueryError> {
        if !query.latitude.is_finite() {
            return Err(QueryError::NonFiniteCoordinate {
                field: "latitude",
                value: query.latitude,
            });
        }
        if !query.longitude.is_finite() {
            return Err(QueryError::NonFiniteCoordinate {
                field: "longitude",
                value: query.longitude,
            });
        }

        let count = query.result_count.max(1);
        let close_stations = self.closest_stations(query.latitude, query.longitude, count);
        let stop_ids: Vec<StopId> = close_stations.iter().map(|s| s.id.clone()).collect();

        debug!(
            latitude = query.latitude,
            longitude = query.longitude,
            count,
            found = close_stations.len(),
            "resolved close stations"
        );

        // Build the adjacency maps and the hood in one pass so the
        // hood's order is reproducible: close stations first, then each
        // station's neighbors, N before S, lines in name order, prev
        // before next.
        let mut neighbors = BTreeMap::new();
        let mut hood = stop_ids.clone();
        let mut seen: HashSet<StopId> = stop_ids.iter().cloned().collect();

        for id in &stop_ids {
            let lines = self.topology.lines_serving(id);
            trace!(stop = %id, lines = ?lines, "lines serving stop");

            let mut station_neighbors = StationNeighbors::default();
            for direction in Direction::BOTH {
                let heading = station_neighbors.heading_mut(direction);
                for line in &lines {
                    let adjacency = AdjacentStations {
                        prev: self
                            .topology
                            .adjacent(id, line, direction.opposite())
                            .cloned(),
                        next: self.topology.adjacent(id, line, direction).cloned(),
                    };
                    for stop in adjacency.prev.iter().chain(adjacency.next.iter()) {
                        if seen.insert(stop.clone()) {
                            hood.push(stop.clone());
                        }
                    }
                    heading.insert((*line).to_string(), adjacency);
                }
            }
            neighbors.insert(id.clone(), station_neighbors);
        }

        Ok(Neighborhood {
            close_stations,
            stop_ids,
            neighbors,
            hood,
        })
    }

    /// Top-level stations sorted by planar distance, nearest first,
    /// truncated to `count`.
    fn closest_stations(&self, latitude: f64, longitude: f64, count: usize) -> Vec<StationRecord> {
        let mut ranked: Vec<(f64, &StationRecord)> = self
            .directory
            .top_level()
            .map(|s| (planar_distance(latitude, longitude, s), s))
            .collect();

        // Stable sort: equal distances keep dataset order.
        ranked.sort_by(|a, b| a.0.total_cmp(&b.0));

        ranked
            .into_iter()
            .take(count)
            .map(|(_, s)| s.clone())
            .collect()
    }
}

/// Euclidean distance in raw degree space.
///
/// Deliberately not great-circle: at city scale the ranking comes out
/// the same and this matches the behavior the AR client was built
/// against. Do not swap in a geodesic formula.
fn planar_distance(latitude: f64, longitude: f64, station: &StationRecord) -> f64 {
    let d_lat = latitude - station.latitude;
    let d_lon = longitude - station.longitude;
    (d_lat * d_lat + d_lon * d_lon).sqrt()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::lines::LineTopology;
    use crate::stations::StationDirectory;
    use proptest::prelude::*;

    fn directory_of(points: &[(f64, f64)]) -> StationDirectory {
        StationDirectory::new(
            points
                .iter()
                .enumerate()
                .map(|(i, (lat, lon))| StationRecord {
                    id: StopId::parse(&format!("S{i}")).unwrap(),
                    name: format!("S{i}"),
                    latitude: *lat,
                    longitude: *lon,
                    parent_station: None,
                })
                .collect(),
        )
        .unwrap()
    }

    proptest! {
        /// At most `count` results, sorted by non-decreasing distance.
        #[test]
        fn ranked_and_bounded(
            points in proptest::collection::vec((-80.0f64..80.0, -179.0f64..179.0), 1..40),
            lat in -80.0f64..80.0,
            lon in -179.0f64..179.0,
            count in 0usize..50,
        ) {
            let directory = directory_of(&points);
            let topology = LineTopology::builder().build().unwrap();
            let resolver = Resolver::new(&directory, &topology);

            let result = resolver
                .resolve(&NeighborhoodQuery::with_count(lat, lon, count))
                .unwrap();

            prop_assert!(result.close_stations.len() <= count.max(1));
            let distances: Vec<f64> = result
                .close_stations
                .iter()
                .map(|s| {
                    let d_lat = lat - s.latitude;
                    let d_lon = lon - s.longitude;
                    (d_lat * d_lat + d_lon * d_lon).sqrt()
                })
                .collect();
            prop_assert!(distances.windows(2).all(|w| w[0] <= w[1]));
        }

        /// The hood is always a superset of the returned stop ids and
        /// contains no duplicates.
        #[test]
        fn hood_superset_and_unique(
            points in proptest::collection::vec((-80.0f64..80.0, -179.0f64..179.0), 1..20),
            lat in -80.0f64..80.0,
            lon in -179.0f64..179.0,
        ) {
            let directory = directory_of(&points);
            // Chain every station onto one line so adjacency kicks in.
            let names: Vec<String> = (0..points.len()).map(|i| format!("S{i}")).collect();
            let refs: Vec<&str> = names.iter().map(String::as_str).collect();
            let topology = LineTopology::builder().line("X", &refs).build().unwrap();
            let resolver = Resolver::new(&directory, &topology);

            let result = resolver
                .resolve(&NeighborhoodQuery::new(lat, lon))
                .unwrap();

            for id in &result.stop_ids {
                prop_assert!(result.hood.contains(id));
            }
            let mut sorted = result.hood.clone();
            sorted.sort();
            sorted.dedup();
            prop_assert_eq!(sorted.len(), result.hood.len());
        }
    }
}
