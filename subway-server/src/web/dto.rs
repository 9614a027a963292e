//! Data transfer objects for web requests and responses.
//!
//! The response shapes mirror what the AR client already parses:
//! station records keep their GTFS field names and the neighbor map is
//! keyed `"N"` / `"S"` with `prev` / `next` per line (`null` when a
//! terminal has no further station).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::Direction;
use crate::hood::{Neighborhood, StationNeighbors};
use crate::stations::StationRecord;

/// Query parameters for `/location`.
///
/// Coordinates are taken as strings so a bad value produces our own
/// error message rather than a framework rejection.
#[derive(Debug, Deserialize)]
pub struct LocationRequest {
    /// Query latitude in degrees
    pub latitude: Option<String>,

    /// Query longitude in degrees
    pub longitude: Option<String>,

    /// How many close stations to return (default 20)
    pub count: Option<usize>,
}

/// Query parameters for `/stations`.
#[derive(Debug, Deserialize)]
pub struct StationsRequest {
    /// Comma-separated stop ids, e.g. `A46,L14`
    pub ids: Option<String>,
}

/// A station record in a response.
#[derive(Debug, Serialize)]
pub struct StationResult {
    pub stop_id: String,
    pub stop_name: String,
    pub stop_lat: f64,
    pub stop_lon: f64,
    pub parent_station: Option<String>,
}

impl StationResult {
    /// Convert a directory record.
    pub fn from_record(record: &StationRecord) -> Self {
        Self {
            stop_id: record.id.as_str().to_string(),
            stop_name: record.name.clone(),
            stop_lat: record.latitude,
            stop_lon: record.longitude,
            parent_station: record
                .parent_station
                .as_ref()
                .map(|p| p.as_str().to_string()),
        }
    }
}

/// Adjacent stations for one line in one direction.
#[derive(Debug, Serialize)]
pub struct AdjacencyResult {
    /// One step behind in the travel direction
    pub prev: Option<String>,

    /// One step ahead in the travel direction
    pub next: Option<String>,
}

/// Per-direction adjacency for one station.
#[derive(Debug, Serialize)]
pub struct StationNeighborsResult {
    #[serde(rename = "N")]
    pub northbound: BTreeMap<String, AdjacencyResult>,

    #[serde(rename = "S")]
    pub southbound: BTreeMap<String, AdjacencyResult>,
}

impl StationNeighborsResult {
    fn from_neighbors(neighbors: &StationNeighbors) -> Self {
        let convert = |direction: Direction| {
            neighbors
                .heading(direction)
                .iter()
                .map(|(line, adjacency)| {
                    (
                        line.clone(),
                        AdjacencyResult {
                            prev: adjacency.prev.as_ref().map(|s| s.as_str().to_string()),
                            next: adjacency.next.as_ref().map(|s| s.as_str().to_string()),
                        },
                    )
                })
                .collect()
        };

        Self {
            northbound: convert(Direction::Northbound),
            southbound: convert(Direction::Southbound),
        }
    }
}

/// Response for `/location`.
#[derive(Debug, Serialize)]
pub struct LocationResponse {
    /// Every stop id in the neighborhood, deduplicated
    pub hood: Vec<String>,

    /// Station id → per-direction, per-line adjacency
    pub neighbors: BTreeMap<String, StationNeighborsResult>,

    /// The close stations, nearest first
    pub stations: Vec<StationResult>,

    /// Their stop ids
    pub id: Vec<String>,
}

impl LocationResponse {
    /// Convert a resolved neighborhood.
    pub fn from_neighborhood(neighborhood: &Neighborhood) -> Self {
        Self {
            hood: neighborhood
                .hood
                .iter()
                .map(|s| s.as_str().to_string())
                .collect(),
            neighbors: neighborhood
                .neighbors
                .iter()
                .map(|(id, n)| {
                    (
                        id.as_str().to_string(),
                        StationNeighborsResult::from_neighbors(n),
                    )
                })
                .collect(),
            stations: neighborhood
                .close_stations
                .iter()
                .map(StationResult::from_record)
                .collect(),
            id: neighborhood
                .stop_ids
                .iter()
                .map(|s| s.as_str().to_string())
                .collect(),
        }
    }
}

/// Response for `/stations`.
#[derive(Debug, Serialize)]
pub struct StationsResponse {
    /// Records for the requested ids, unknown ids omitted
    pub stations: Vec<StationResult>,
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StopId;
    use crate::hood::{NeighborhoodQuery, Resolver};
    use crate::lines::LineTopology;
    use crate::stations::StationDirectory;

    fn stop(s: &str) -> StopId {
        StopId::parse(s).unwrap()
    }

    fn fixture() -> (StationDirectory, LineTopology) {
        let records = [("L01", 40.7398, -74.0026), ("L02", 40.7373, -73.9968)]
            .iter()
            .map(|(id, lat, lon)| StationRecord {
                id: stop(id),
                name: format!("Station {id}"),
                latitude: *lat,
                longitude: *lon,
                parent_station: None,
            })
            .collect();
        let directory = StationDirectory::new(records).unwrap();
        let topology = LineTopology::builder()
            .line("L", &["L01", "L02"])
            .build()
            .unwrap();
        (directory, topology)
    }

    #[test]
    fn location_response_wire_shape() {
        let (directory, topology) = fixture();
        let resolver = Resolver::new(&directory, &topology);
        let neighborhood = resolver
            .resolve(&NeighborhoodQuery::with_count(40.7398, -74.0026, 1))
            .unwrap();

        let response = LocationResponse::from_neighborhood(&neighborhood);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "hood": ["L01", "L02"],
                "neighbors": {
                    "L01": {
                        "N": {"L": {"prev": "L02", "next": null}},
                        "S": {"L": {"prev": null, "next": "L02"}}
                    }
                },
                "stations": [{
                    "stop_id": "L01",
                    "stop_name": "Station L01",
                    "stop_lat": 40.7398,
                    "stop_lon": -74.0026,
                    "parent_station": null
                }],
                "id": ["L01"]
            })
        );
    }

    #[test]
    fn station_result_keeps_gtfs_field_names() {
        let record = StationRecord {
            id: stop("A46N"),
            name: "Nostrand Av".to_string(),
            latitude: 40.680438,
            longitude: -73.950426,
            parent_station: Some(stop("A46")),
        };

        let json = serde_json::to_value(StationResult::from_record(&record)).unwrap();
        assert_eq!(json["stop_id"], "A46N");
        assert_eq!(json["stop_name"], "Nostrand Av");
        assert_eq!(json["parent_station"], "A46");
    }
}
