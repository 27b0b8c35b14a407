//! Full-defense policy: the trailing pod while the opposing team leads.
//!
//! Parks itself on the opposing leader's line. The intercept point is where
//! the perpendicular bisector of the segment pod-opponent crosses the
//! opponent's path to its checkpoint, i.e. the point both pods reach after
//! covering the same distance.

use podracer_core::constants::*;
use podracer_core::enums::StrategyMode;
use podracer_core::geometry::{normalize_angle_radians, Vector};
use podracer_core::state::Pod;
use podracer_core::RaceError;

use crate::fsm::{PodContext, PodDecision, Situation};
use crate::prediction::future_collision_course;
use crate::profiles::get_profile;
use crate::steering::{collision_forecast, corrected_heading, within};

pub fn decide(ctx: &PodContext, situation: &Situation) -> Result<PodDecision, RaceError> {
    let pod = ctx.pod;
    let opponent = &ctx.opponents[ctx.opponent_leader];
    let opponent_checkpoint = ctx.track.checkpoint(opponent.next_checkpoint_id)?;

    let to_opponent = pod.vector_to(&opponent.position);
    let to_opponent_target = pod.vector_to(&opponent_checkpoint.center);
    let opponent_to_target = opponent.vector_to(&opponent_checkpoint.center);

    let mut target = if to_opponent_target.length() < DEFENSE_RAM_DISTANCE
        || to_opponent.length() < DEFENSE_RAM_DISTANCE
    {
        to_opponent
    } else if let Some(point) =
        intercept_point(&to_opponent, &opponent_to_target, &to_opponent_target)
    {
        point
    } else if on_final_leg(opponent, ctx.laps_total) {
        to_opponent
    } else {
        pod.vector_to(&opponent_checkpoint.next_aimpoint)
    };

    if let Some(collision) =
        future_collision_course(pod, ctx.partner, COLLISION_RADIUS, PARTNER_LOOKAHEAD_TICKS)
    {
        let collision_point = situation.velocity.scale(f64::from(collision.tick));
        if collision_point.length() < target.length() {
            target = deflect(&target, &collision.displacement);
        }
    }

    if within(target.bearing_from(&situation.velocity), DEFENSE_CORRECTION_MAX_ERROR) {
        if let Some(corrected) = corrected_heading(&target, &situation.velocity) {
            target = corrected;
        }
    }

    let profile = get_profile(StrategyMode::FullDefense);
    Ok(PodDecision {
        mode: StrategyMode::FullDefense,
        target,
        thrust: tiered_thrust(target.heading_error(pod.facing)),
        shield: collision_forecast(pod, ctx.opponents, &profile),
        boost: false,
    })
}

/// Equal-distance point on the opponent's path, relative to the pod.
///
/// `None` when the pod is behind the opponent (no crossing ahead of it) or
/// when the crossing lies beyond a checkpoint the opponent will reach first.
pub fn intercept_point(
    to_opponent: &Vector,
    opponent_to_target: &Vector,
    to_opponent_target: &Vector,
) -> Option<Vector> {
    let opponent_to_pod = to_opponent.scale(-1.0);
    if !opponent_to_pod.has_direction() || !opponent_to_target.has_direction() {
        return None;
    }

    let phi = normalize_angle_radians(
        opponent_to_pod.angle_radians() - opponent_to_target.angle_radians(),
    );
    let cos_phi = phi.cos();
    if cos_phi <= DEFENSE_MIN_INTERCEPT_COS {
        return None;
    }

    let reach = to_opponent.length() / (2.0 * cos_phi);
    if reach >= opponent_to_target.length() {
        // Clamped to the opponent's checkpoint: only useful if we get there first.
        return (to_opponent_target.length() <= opponent_to_target.length())
            .then_some(*to_opponent_target);
    }

    Some(to_opponent.add(&Vector::from_polar(reach, opponent_to_target.angle_degrees())))
}

/// Heading for the finish: the checkpoint after this one is never reached.
fn on_final_leg(opponent: &Pod, laps_total: u32) -> bool {
    opponent.next_checkpoint_id == 0 && opponent.lap > laps_total
}

/// Rotate the target 30 degrees away from the side the teammate will be on.
pub(crate) fn deflect(target: &Vector, teammate: &Vector) -> Vector {
    match teammate.bearing_from(target) {
        Some(side) => {
            let turn = if side >= 0 {
                -PARTNER_DEFLECTION
            } else {
                PARTNER_DEFLECTION
            };
            Vector::from_polar(target.length(), target.angle_degrees() + turn)
        }
        None => *target,
    }
}

/// Thrust tiers by heading error to the final target.
pub(crate) fn tiered_thrust(error: Option<i32>) -> i32 {
    let Some(error) = error else {
        return MAX_THRUST;
    };
    DEFENSE_THRUST_TIERS
        .iter()
        .find(|(limit, _)| error.abs() > *limit)
        .map_or(MAX_THRUST, |&(_, thrust)| thrust)
}
