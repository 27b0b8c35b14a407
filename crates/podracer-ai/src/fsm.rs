//! Per-pod strategy state machine.
//!
//! Pure functions: the mode is re-derived every tick from leadership, the
//! opening stretch, and team standing, then the matching policy produces a
//! target and a thrust/shield/boost decision. No state identity survives
//! between ticks.

use tracing::debug;

use podracer_core::enums::StrategyMode;
use podracer_core::geometry::Vector;
use podracer_core::state::Pod;
use podracer_core::track::Track;
use podracer_core::RaceError;

use crate::{blocking, defense, racing};

/// Input to the strategy FSM for one own pod.
pub struct PodContext<'a> {
    pub pod: &'a Pod,
    pub partner: &'a Pod,
    pub opponents: &'a [Pod; 2],
    pub track: &'a Track,
    /// This pod is ahead of its teammate.
    pub is_leader: bool,
    /// Index into `opponents` of the opposing team's leader.
    pub opponent_leader: usize,
    /// The opposing leader is ahead of our leader.
    pub opponent_leads: bool,
    pub is_first_tick: bool,
    pub boost_used: bool,
    pub laps_total: u32,
}

/// Output of the strategy FSM for one own pod.
#[derive(Debug, Clone, Copy)]
pub struct PodDecision {
    pub mode: StrategyMode,
    /// Aim vector relative to the pod.
    pub target: Vector,
    pub thrust: i32,
    pub shield: bool,
    pub boost: bool,
}

/// Relative vectors every policy starts from.
pub struct Situation {
    /// Pod to its next checkpoint.
    pub checkpoint: Vector,
    /// Pod to the checkpoint after that.
    pub after: Vector,
    /// Pod to the next checkpoint's long-range aim-point.
    pub long_range: Vector,
    pub velocity: Vector,
    pub to_opponents: [Vector; 2],
    /// Whole-degree error between facing and the checkpoint bearing.
    pub heading_error: Option<i32>,
}

impl Situation {
    pub fn new(ctx: &PodContext) -> Result<Self, RaceError> {
        let pod = ctx.pod;
        let checkpoint = ctx.track.checkpoint(pod.next_checkpoint_id)?;
        let to_checkpoint = pod.vector_to(&checkpoint.center);
        Ok(Self {
            heading_error: to_checkpoint.heading_error(pod.facing),
            checkpoint: to_checkpoint,
            after: pod.vector_to(&checkpoint.next_aimpoint),
            long_range: pod.vector_to(&checkpoint.long_range_aimpoint),
            velocity: pod.velocity_vector(),
            to_opponents: [
                pod.vector_to(&ctx.opponents[0].position),
                pod.vector_to(&ctx.opponents[1].position),
            ],
        })
    }

    /// Distance to the next checkpoint.
    pub fn distance(&self) -> f64 {
        self.checkpoint.length()
    }
}

/// Choose the mode for a pod. The opening stretch overrides everything.
pub fn classify(is_leader: bool, in_opening_stretch: bool, opponent_leads: bool) -> StrategyMode {
    if is_leader || in_opening_stretch {
        StrategyMode::Racing
    } else if opponent_leads {
        StrategyMode::FullDefense
    } else {
        StrategyMode::AggressiveBlock
    }
}

/// Evaluate the FSM for one pod.
pub fn evaluate(ctx: &PodContext) -> Result<PodDecision, RaceError> {
    let mode = classify(ctx.is_leader, ctx.pod.in_opening_stretch(), ctx.opponent_leads);
    let situation = Situation::new(ctx)?;

    let decision = match mode {
        StrategyMode::Racing => racing::decide(ctx, &situation),
        StrategyMode::AggressiveBlock => blocking::decide(ctx, &situation),
        StrategyMode::FullDefense => defense::decide(ctx, &situation)?,
    };

    debug!(
        ?mode,
        target_x = decision.target.x(),
        target_y = decision.target.y(),
        thrust = decision.thrust,
        shield = decision.shield,
        boost = decision.boost,
        "pod decision"
    );
    Ok(decision)
}
