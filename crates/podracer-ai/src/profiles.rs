//! Mode-specific shield parameters.
//!
//! Consolidates how far ahead each mode looks for collisions and how close
//! an opponent must get before the shield is worth its lost thrust.

use podracer_core::enums::StrategyMode;

/// Collision forecast parameters for one strategy mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShieldProfile {
    /// Ticks of straight-line projection.
    pub horizon_ticks: u32,
    /// Inter-pod distance counted as a collision.
    pub collision_radius: f64,
    /// The pod must be moving faster than this for a shield to pay off.
    pub min_speed: f64,
}

/// Get the shield profile for a given mode.
pub fn get_profile(mode: StrategyMode) -> ShieldProfile {
    use podracer_core::constants::*;

    match mode {
        StrategyMode::Racing => ShieldProfile {
            horizon_ticks: 1,
            collision_radius: COLLISION_RADIUS,
            min_speed: 20.0,
        },
        StrategyMode::AggressiveBlock => ShieldProfile {
            horizon_ticks: 2,
            collision_radius: COLLISION_RADIUS,
            min_speed: 20.0,
        },
        // Wider radius, lower speed gate.
        StrategyMode::FullDefense => ShieldProfile {
            horizon_ticks: 2,
            collision_radius: DEFENSE_COLLISION_RADIUS,
            min_speed: 10.0,
        },
    }
}
