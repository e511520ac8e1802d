//! trainplan - Training calendar planner
//!
//! Partitions a date range into per-day workout slots, fills them from a
//! weekly series template, and propagates, moves or clears day content.
//! The engine in [`domain`] is pure and I/O-free; the other layers wrap it
//! with file-backed storage and a command-line interface.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use error::PlanError;
