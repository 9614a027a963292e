//! Station dataset loader.
//!
//! The dataset is the GTFS stops file reshaped as a JSON object keyed by
//! stop id. Coordinates arrive as either JSON numbers or numeric strings
//! (the original CSV export used strings); extra GTFS columns such as
//! `stop_code` and `location_type` are ignored.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::domain::StopId;

use super::directory::{StationDirectory, StationRecord};
use super::error::LoadError;

/// Load the station directory from a dataset file.
pub fn load_stations(path: impl AsRef<Path>) -> Result<StationDirectory, LoadError> {
    let text = fs::read_to_string(path)?;
    parse_stations(&text)
}

/// Parse the station directory from dataset JSON.
///
/// Fails whole: any malformed record aborts the load and no directory
/// is produced. Record order follows the dataset (`serde_json` is built
/// with `preserve_order` for exactly this reason).
pub fn parse_stations(json: &str) -> Result<StationDirectory, LoadError> {
    let raw: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;

    let mut records = Vec::with_capacity(raw.len());
    for (key, value) in raw {
        let station: RawStation =
            serde_json::from_value(value).map_err(|e| LoadError::MalformedRecord {
                key: key.clone(),
                message: e.to_string(),
            })?;
        records.push(station.into_record(&key)?);
    }

    StationDirectory::new(records)
}

/// One station record as it appears in the dataset.
#[derive(Debug, Deserialize)]
struct RawStation {
    stop_id: String,
    stop_name: String,
    stop_lat: Coordinate,
    stop_lon: Coordinate,
    #[serde(default)]
    parent_station: Option<String>,
}

/// A coordinate that may be a JSON number or a numeric string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Coordinate {
    Number(f64),
    Text(String),
}

impl Coordinate {
    /// The finite numeric value, or `None` if unparseable or non-finite.
    fn to_degrees(&self) -> Option<f64> {
        let value = match self {
            Coordinate::Number(n) => *n,
            Coordinate::Text(t) => t.trim().parse().ok()?,
        };
        value.is_finite().then_some(value)
    }

    fn raw(&self) -> String {
        match self {
            Coordinate::Number(n) => n.to_string(),
            Coordinate::Text(t) => t.clone(),
        }
    }
}

impl RawStation {
    fn into_record(self, key: &str) -> Result<StationRecord, LoadError> {
        let id = StopId::parse(&self.stop_id).map_err(|e| LoadError::MalformedRecord {
            key: key.to_string(),
            message: e.to_string(),
        })?;

        let latitude = self
            .stop_lat
            .to_degrees()
            .ok_or_else(|| LoadError::InvalidCoordinate {
                key: key.to_string(),
                field: "stop_lat",
                value: self.stop_lat.raw(),
            })?;

        let longitude = self
            .stop_lon
            .to_degrees()
            .ok_or_else(|| LoadError::InvalidCoordinate {
                key: key.to_string(),
                field: "stop_lon",
                value: self.stop_lon.raw(),
            })?;

        // An empty parent_station marks a top-level station.
        let parent_station = match self.parent_station.as_deref() {
            None | Some("") => None,
            Some(parent) => Some(StopId::parse(parent).map_err(|e| LoadError::MalformedRecord {
                key: key.to_string(),
                message: format!("parent_station: {e}"),
            })?),
        };

        Ok(StationRecord {
            id,
            name: self.stop_name,
            latitude,
            longitude,
            parent_station,
        })
    }
}
