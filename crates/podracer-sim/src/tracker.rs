//! Pod state tracker: laps and advancement from raw telemetry.

use podracer_core::constants::{ADVANCEMENT_CHECKPOINT_WEIGHT, ADVANCEMENT_LAP_WEIGHT};
use podracer_core::state::Pod;
use podracer_core::track::Track;
use podracer_core::types::{Point, PodTelemetry};
use podracer_core::RaceError;

/// Fold fresh telemetry into a pod. The lap increments exactly when the
/// next checkpoint id changes to 0.
pub fn update_pod(previous: &Pod, telemetry: &PodTelemetry, track: &Track) -> Result<Pod, RaceError> {
    let next_checkpoint_id = track.validate_id(telemetry.next_checkpoint_id)?;
    let lap = if next_checkpoint_id == 0 && previous.next_checkpoint_id != 0 {
        previous.lap + 1
    } else {
        previous.lap
    };

    let position = telemetry.position();
    let distance = position
        .vector_to(&track.checkpoint(next_checkpoint_id)?.center)
        .length();

    Ok(Pod {
        position,
        velocity: Point::new(telemetry.vx, telemetry.vy),
        facing: telemetry.facing,
        next_checkpoint_id,
        lap,
        advancement: advancement(lap, next_checkpoint_id, distance),
    })
}

/// Total-order key for pods of the same race.
pub fn advancement(lap: u32, next_checkpoint_id: usize, distance: f64) -> i64 {
    i64::from(lap) * ADVANCEMENT_LAP_WEIGHT
        + next_checkpoint_id as i64 * ADVANCEMENT_CHECKPOINT_WEIGHT
        - distance as i64
}

/// Index (0 or 1) of the pod further along. Ties go to the first.
pub fn determine_leader(a: &Pod, b: &Pod) -> usize {
    if b.advancement > a.advancement {
        1
    } else {
        0
    }
}
