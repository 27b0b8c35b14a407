//! Decision core for the pod racing bot.
//!
//! Implements the per-pod strategy state machine, the three mode policies,
//! and the friction-aware arrival and collision predictors they consult.

pub mod blocking;
pub mod defense;
pub mod fsm;
pub mod prediction;
pub mod profiles;
pub mod racing;
pub mod steering;

pub use podracer_core as core;
