//! Application state for the web layer.

use std::sync::Arc;

use crate::lines::LineTopology;
use crate::stations::StationDirectory;

/// Shared application state.
///
/// Both pieces are loaded once at startup and never mutated, so they
/// are shared across requests without locking.
#[derive(Clone)]
pub struct AppState {
    /// The static station directory
    pub directory: Arc<StationDirectory>,

    /// The static line topology
    pub topology: Arc<LineTopology>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(directory: StationDirectory, topology: LineTopology) -> Self {
        Self {
            directory: Arc::new(directory),
            topology: Arc::new(topology),
        }
    }
}
