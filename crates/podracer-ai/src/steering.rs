//! Steering and thrust helpers shared by the policies.

use podracer_core::constants::*;
use podracer_core::geometry::Vector;
use podracer_core::state::Pod;

use crate::fsm::Situation;
use crate::prediction::{future_collision_course, ticks_to_arrive_with_friction, will_probably_hit};
use crate::profiles::ShieldProfile;

/// `|error| < limit`; false when the angle is undefined.
pub fn within(error: Option<i32>, limit: i32) -> bool {
    error.is_some_and(|e| e.abs() < limit)
}

/// `|error| > limit`; false when the angle is undefined.
pub fn exceeds(error: Option<i32>, limit: i32) -> bool {
    error.is_some_and(|e| e.abs() > limit)
}

/// Aim past the target by the current drift: doubling the angle between
/// velocity and target bearing turns the pod onto the target line in
/// fewer ticks than pointing straight at it.
pub fn corrected_heading(target: &Vector, velocity: &Vector) -> Option<Vector> {
    let delta = target.bearing_from(velocity)?;
    Some(Vector::from_polar(
        target.length(),
        target.angle_degrees() + f64::from(delta),
    ))
}

/// Will the pod coast through its checkpoint with at least one tick to spare
/// for turning toward the next one?
pub fn can_cut_corner(situation: &Situation) -> bool {
    let velocity = &situation.velocity;
    if !velocity.has_direction() {
        return false;
    }
    match ticks_to_arrive_with_friction(situation.distance(), velocity.length()) {
        Some(arrival) if arrival.ticks >= CORNER_CUT_MIN_TICKS => {
            let path = Vector::from_polar(arrival.traveled, velocity.angle_degrees());
            will_probably_hit(&situation.checkpoint, &path, HIT_TOLERANCE)
        }
        _ => false,
    }
}

/// Racing line toward the next checkpoint.
///
/// Returns the aim vector and, when heading correction chose it, the thrust
/// that goes with it.
pub fn racing_line(situation: &Situation) -> (Vector, Option<i32>) {
    let distance = situation.distance();
    let error = situation.heading_error;
    let viability = situation.long_range.bearing_from(&situation.checkpoint);

    if within(viability, LONG_RANGE_MAX_DEVIATION) && distance > LONG_RANGE_DISTANCE {
        return (situation.long_range, None);
    }

    if can_cut_corner(situation) {
        return (situation.after, None);
    }

    let correctable = within(error, CORRECTION_MAX_ERROR)
        || (distance < f64::from(SLOWDOWN_DISTANCE) && within(error, CORRECTION_MAX_ERROR_NEAR));
    if distance > APPROACH_DISTANCE && correctable {
        if let Some(corrected) = corrected_heading(&situation.checkpoint, &situation.velocity) {
            return (corrected, Some(distance_thrust(distance)));
        }
    }

    if distance < APPROACH_DISTANCE && within(error, FINAL_APPROACH_MAX_ERROR) {
        return (situation.after, None);
    }

    (situation.checkpoint, None)
}

/// Full thrust, scaled down linearly inside `SLOWDOWN_DISTANCE`.
pub fn distance_thrust(distance: f64) -> i32 {
    let distance = distance as i32;
    if distance < SLOWDOWN_DISTANCE {
        MAX_THRUST * (distance + 100) / (SLOWDOWN_DISTANCE + 100)
    } else {
        MAX_THRUST
    }
}

/// Racing thrust: distance scaling, then heading-based cuts unless the
/// racing line already supplied a thrust.
pub fn racing_thrust(distance: f64, heading_error: Option<i32>, explicit: Option<i32>) -> i32 {
    if let Some(thrust) = explicit {
        return thrust;
    }
    let thrust = distance_thrust(distance);
    if exceeds(heading_error, REVERSE_TURN_ERROR) {
        REVERSE_TURN_THRUST
    } else if exceeds(heading_error, WIDE_TURN_ERROR) {
        thrust.min(WIDE_TURN_THRUST)
    } else {
        thrust
    }
}

/// Is any opponent on a collision course within the profile's horizon?
pub fn collision_forecast(pod: &Pod, opponents: &[Pod; 2], profile: &ShieldProfile) -> bool {
    pod.velocity_vector().length() > profile.min_speed
        && opponents.iter().any(|opponent| {
            future_collision_course(pod, opponent, profile.collision_radius, profile.horizon_ticks)
                .is_some()
        })
}
