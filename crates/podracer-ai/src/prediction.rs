//! Arrival and collision prediction.
//!
//! Both predictors run over a small fixed horizon so a decision never
//! costs more than a handful of iterations.

use podracer_core::constants::{ARRIVAL_HORIZON_TICKS, FRICTION};
use podracer_core::geometry::Vector;
use podracer_core::state::Pod;

/// Result of a friction-decayed arrival estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrival {
    /// First tick at which the accumulated distance reaches the target.
    pub ticks: u32,
    /// Distance covered by then.
    pub traveled: f64,
}

/// Forecast contact between two pods.
#[derive(Debug, Clone, Copy)]
pub struct Collision {
    /// Ticks from now.
    pub tick: u32,
    /// Position of the other pod relative to this one at that tick.
    pub displacement: Vector,
}

/// Estimate when a coasting pod covers `target_distance`.
///
/// Each tick the pod moves by its current speed, then loses speed to
/// friction. Returns `None` if the distance is not covered within
/// `ARRIVAL_HORIZON_TICKS`.
pub fn ticks_to_arrive_with_friction(target_distance: f64, current_speed: f64) -> Option<Arrival> {
    let mut traveled = 0.0;
    if traveled >= target_distance {
        return Some(Arrival { ticks: 0, traveled });
    }

    let mut speed = current_speed;
    for tick in 1..=ARRIVAL_HORIZON_TICKS {
        traveled += speed;
        speed *= FRICTION;
        if traveled >= target_distance {
            return Some(Arrival { ticks: tick, traveled });
        }
    }
    None
}

/// True if the straight predicted path ends within `tolerance` of the target.
pub fn will_probably_hit(target: &Vector, predicted_path: &Vector, tolerance: f64) -> bool {
    target.subtract(predicted_path).length() < tolerance
}

/// First tick within `lookahead_ticks` at which the two pods come within
/// `danger_radius`, both keeping their current velocity.
pub fn future_collision_course(
    pod: &Pod,
    other: &Pod,
    danger_radius: f64,
    lookahead_ticks: u32,
) -> Option<Collision> {
    (1..=lookahead_ticks).find_map(|tick| {
        let own = project(pod, tick);
        let theirs = project(other, tick);
        let displacement = Vector::from_cartesian(theirs.0 - own.0, theirs.1 - own.1);
        (displacement.length() <= danger_radius).then_some(Collision { tick, displacement })
    })
}

/// Position after `ticks` ticks at constant velocity.
fn project(pod: &Pod, ticks: u32) -> (f64, f64) {
    let t = f64::from(ticks);
    (
        f64::from(pod.position.x) + f64::from(pod.velocity.x) * t,
        f64::from(pod.position.y) + f64::from(pod.velocity.y) * t,
    )
}
