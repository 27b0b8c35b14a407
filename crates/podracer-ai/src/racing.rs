//! Racing policy: the team leader (and everybody on the opening stretch).

use podracer_core::constants::*;
use podracer_core::enums::StrategyMode;

use crate::fsm::{PodContext, PodDecision, Situation};
use crate::profiles::get_profile;
use crate::steering::{collision_forecast, racing_line, racing_thrust, within};

pub fn decide(ctx: &PodContext, situation: &Situation) -> PodDecision {
    let distance = situation.distance();
    let (target, explicit_thrust) = racing_line(situation);
    let thrust = racing_thrust(distance, situation.heading_error, explicit_thrust);

    let crowded_gate = distance < SHIELD_CHECKPOINT_DISTANCE
        && situation
            .to_opponents
            .iter()
            .any(|v| v.length() < SHIELD_OPPONENT_DISTANCE);
    let profile = get_profile(StrategyMode::Racing);
    let shield = crowded_gate || collision_forecast(ctx.pod, ctx.opponents, &profile);

    PodDecision {
        mode: StrategyMode::Racing,
        target,
        thrust,
        shield,
        boost: wants_boost(ctx, situation),
    }
}

/// The single boost goes out on the first tick for the leader, or later on
/// a long, clear, well-aimed straight. Never once the team has used it.
fn wants_boost(ctx: &PodContext, situation: &Situation) -> bool {
    if ctx.boost_used {
        return false;
    }
    if ctx.is_first_tick && ctx.is_leader {
        return true;
    }
    situation.distance() > BOOST_MIN_DISTANCE
        && within(situation.heading_error, BOOST_MAX_ERROR)
        && situation
            .to_opponents
            .iter()
            .all(|v| v.length() > BOOST_MIN_OPPONENT_DISTANCE)
}
