//! Race engine for the pod racing bot.
//!
//! Owns the track and the race state, folds each tick's telemetry into
//! pod state, and produces one command per own pod.

pub mod engine;
pub mod tracker;

pub use engine::RaceEngine;
pub use podracer_core as core;
