//! Neighborhood resolution: nearest stations and their line-adjacent
//! neighbors, computed per request against the immutable station
//! directory and line topology.

mod resolve;

pub use resolve::{
    AdjacentStations, Neighborhood, NeighborhoodQuery, QueryError, Resolver, StationNeighbors,
};
