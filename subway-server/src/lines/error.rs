//! Line topology error types.

use crate::domain::StopId;

/// Errors in the static line tables, fatal at startup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopologyError {
    /// A line table contains a string that is not a valid stop id
    #[error("line {line}: invalid stop id {stop:?}: {message}")]
    InvalidStop {
        line: String,
        stop: String,
        message: String,
    },

    /// A line table references a stop the station directory doesn't have
    #[error("line {line}: stop {stop} is not in the station directory")]
    UnknownStop { line: String, stop: StopId },
}
