//! Subway neighborhood server.
//!
//! A small backend that answers: "what subway stations are near me,
//! and what trains run through them?" against a static transit dataset.

pub mod domain;
pub mod hood;
pub mod lines;
pub mod stations;
pub mod web;
