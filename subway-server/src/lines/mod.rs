//! Line topologies: which stations each line visits, in order.

mod error;
mod nyc;
mod topology;

pub use error::TopologyError;
pub use nyc::subway_lines;
pub use topology::{LineTopology, LineTopologyBuilder};
