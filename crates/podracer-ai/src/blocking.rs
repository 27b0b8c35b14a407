//! Aggressive-block policy: the trailing pod while the team is ahead.
//!
//! Rams an opponent sitting on the way to the checkpoint, otherwise races.

use podracer_core::constants::*;
use podracer_core::enums::StrategyMode;
use podracer_core::geometry::Vector;

use crate::fsm::{PodContext, PodDecision, Situation};
use crate::profiles::get_profile;
use crate::steering::{collision_forecast, racing_line, racing_thrust, within};

pub fn decide(ctx: &PodContext, situation: &Situation) -> PodDecision {
    let profile = get_profile(StrategyMode::AggressiveBlock);
    let shield = collision_forecast(ctx.pod, ctx.opponents, &profile);

    let (target, thrust) = match interception_target(situation) {
        Some(to_opponent) => (to_opponent, MAX_THRUST),
        None => {
            let (target, explicit) = racing_line(situation);
            let thrust = racing_thrust(situation.distance(), situation.heading_error, explicit);
            (target, thrust)
        }
    };

    PodDecision {
        mode: StrategyMode::AggressiveBlock,
        target,
        thrust,
        shield,
        boost: false,
    }
}

/// Closest opponent that is on the path and less than half way to the checkpoint.
fn interception_target(situation: &Situation) -> Option<Vector> {
    let distance = situation.distance();
    if distance >= BLOCK_ENGAGE_DISTANCE {
        return None;
    }

    situation
        .to_opponents
        .iter()
        .filter(|v| v.length() * 2.0 < distance)
        .filter(|v| within(v.bearing_from(&situation.checkpoint), BLOCK_PATH_CONE))
        .min_by(|a, b| a.length().total_cmp(&b.length()))
        .copied()
}
