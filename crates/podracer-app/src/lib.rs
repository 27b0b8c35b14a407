//! Pod racing bot binary support.
//!
//! This crate wires the race engine to the referee's line protocol:
//! startup input, one telemetry block per tick, two commands back.

pub mod game_loop;
pub mod protocol;

pub use podracer_core as core;
