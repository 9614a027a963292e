//! Static station dataset: records, directory and loader.
//!
//! The directory is loaded once at startup from a bundled GTFS stops
//! dataset and is immutable from then on, so it can be shared across
//! requests without locking.

mod directory;
mod error;
mod load;

pub use directory::{StationDirectory, StationRecord};
pub use error::LoadError;
pub use load::{load_stations, parse_stations};
