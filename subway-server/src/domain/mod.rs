//! Core domain types for the subway neighborhood server.
//!
//! These types represent validated transit identifiers and directions.
//! They enforce their invariants at construction time, so code that
//! receives them can trust their validity.

mod direction;
mod stop_id;

pub use direction::Direction;
pub use stop_id::{InvalidStopId, StopId};
