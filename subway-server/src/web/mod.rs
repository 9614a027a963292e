//! Web layer for the subway neighborhood server.
//!
//! A thin HTTP boundary: parse query parameters, call the resolver,
//! serialize the result.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
