//! Core types and definitions for the pod racing bot.
//!
//! This crate defines the vocabulary shared across all other crates:
//! vector geometry, telemetry records, the track model, race state,
//! pod commands, and tuning constants.
//! It performs no I/O.

pub mod commands;
pub mod constants;
pub mod enums;
pub mod error;
pub mod geometry;
pub mod state;
pub mod track;
pub mod types;

pub use error::RaceError;
pub use geometry::Vector;

#[cfg(test)]
mod tests;
