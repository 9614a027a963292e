//! Station dataset error types.

use crate::domain::StopId;

/// Errors that can occur while loading the station dataset.
///
/// Any of these is fatal to startup: on failure no directory is
/// produced, so a partially populated directory cannot escape.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Could not read the dataset file
    #[error("failed to read station dataset: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset is not valid JSON
    #[error("station dataset is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A record is missing a field or has one of the wrong shape
    #[error("station {key}: malformed record: {message}")]
    MalformedRecord { key: String, message: String },

    /// A coordinate could not be interpreted as a finite number
    #[error("station {key}: non-numeric {field}: {value:?}")]
    InvalidCoordinate {
        key: String,
        field: &'static str,
        value: String,
    },

    /// The same stop id appears in two records
    #[error("duplicate stop id {0}")]
    DuplicateStop(StopId),
}
