//! Race engine: the per-tick decision loop.
//!
//! `RaceEngine` owns the track and the race state. Each call to `tick`
//! folds the telemetry into pod state, ranks the pods, runs the strategy
//! FSM for both own pods, and encodes their commands. Completely headless
//! (no I/O), so whole races can be replayed deterministically in tests.

use tracing::{debug, info};

use podracer_ai::fsm::{self, PodContext};
use podracer_core::commands::PodCommand;
use podracer_core::enums::StrategyMode;
use podracer_core::state::{Pod, RaceState};
use podracer_core::track::Track;
use podracer_core::types::{PodTelemetry, RaceSetup, TickTelemetry};
use podracer_core::RaceError;

use crate::tracker::{determine_leader, update_pod};

/// The race engine. One instance per race.
pub struct RaceEngine {
    track: Track,
    state: RaceState,
    modes: [StrategyMode; 2],
    ticks: u64,
}

impl RaceEngine {
    /// Build the track and an initial race state from the startup input.
    pub fn new(setup: &RaceSetup) -> Result<Self, RaceError> {
        let track = Track::build(&setup.checkpoints)?;
        let state = RaceState::new(setup.laps, track.len());
        info!(
            laps = state.laps_total,
            checkpoints = state.checkpoint_count,
            "race setup"
        );
        for (id, checkpoint) in track.checkpoints().iter().enumerate() {
            debug!(
                id,
                center = ?checkpoint.center,
                long_range = ?checkpoint.long_range_aimpoint,
                next = ?checkpoint.next_aimpoint,
                "checkpoint"
            );
        }

        Ok(Self {
            track,
            state,
            modes: [StrategyMode::default(); 2],
            ticks: 0,
        })
    }

    /// Consume one tick of telemetry and return the command for each own pod.
    pub fn tick(&mut self, telemetry: &TickTelemetry) -> Result<[PodCommand; 2], RaceError> {
        self.observe(telemetry)?;

        let own_leader = determine_leader(&self.state.own[0], &self.state.own[1]);
        let opponent_leader = determine_leader(&self.state.opponents[0], &self.state.opponents[1]);
        let opponent_leads = determine_leader(
            &self.state.own[own_leader],
            &self.state.opponents[opponent_leader],
        ) == 1;

        let first = self.command_for(0, own_leader, opponent_leader, opponent_leads)?;
        let second = self.command_for(1, own_leader, opponent_leader, opponent_leads)?;

        self.state.is_first_tick = false;
        self.ticks += 1;
        Ok([first, second])
    }

    /// Run the FSM for one own pod and encode its command. The boost flag
    /// flips as soon as a boosting command is encoded, so the second pod of
    /// the same tick already sees it.
    fn command_for(
        &mut self,
        id: usize,
        own_leader: usize,
        opponent_leader: usize,
        opponent_leads: bool,
    ) -> Result<PodCommand, RaceError> {
        let pod = self.state.own[id];
        let ctx = PodContext {
            pod: &pod,
            partner: &self.state.own[1 - id],
            opponents: &self.state.opponents,
            track: &self.track,
            is_leader: id == own_leader,
            opponent_leader,
            opponent_leads,
            is_first_tick: self.state.is_first_tick,
            boost_used: self.state.boost_used,
            laps_total: self.state.laps_total,
        };
        let decision = fsm::evaluate(&ctx)?;
        self.modes[id] = decision.mode;

        let command = PodCommand::encode(
            pod.position,
            &decision.target,
            decision.thrust,
            decision.shield,
            decision.boost,
        )?;
        if command.is_boost() {
            info!(pod = id, tick = self.ticks, "boost");
            self.state.boost_used = true;
        }
        Ok(command)
    }

    fn observe(&mut self, telemetry: &TickTelemetry) -> Result<(), RaceError> {
        self.state.own = observe_pair(&self.state.own, &telemetry.own, &self.track)?;
        self.state.opponents = observe_pair(&self.state.opponents, &telemetry.opponents, &self.track)?;
        Ok(())
    }

    pub fn state(&self) -> &RaceState {
        &self.state
    }

    pub fn track(&self) -> &Track {
        &self.track
    }

    /// Modes chosen for the own pods on the last tick.
    pub fn modes(&self) -> [StrategyMode; 2] {
        self.modes
    }

    /// Number of ticks processed so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

fn observe_pair(
    previous: &[Pod; 2],
    telemetry: &[PodTelemetry; 2],
    track: &Track,
) -> Result<[Pod; 2], RaceError> {
    Ok([
        update_pod(&previous[0], &telemetry[0], track)?,
        update_pod(&previous[1], &telemetry[1], track)?,
    ])
}
