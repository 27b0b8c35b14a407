//! Contract violations that make a tick (or the whole race) undecidable.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RaceError {
    /// Aim-point precomputation needs at least one checkpoint.
    #[error("track has no checkpoints")]
    EmptyTrack,
    /// Telemetry referenced a checkpoint the track does not have.
    #[error("checkpoint id {id} out of range (track has {count})")]
    CheckpointOutOfRange { id: i64, count: usize },
    /// An encoded aim-point does not fit the board's integer coordinates.
    #[error("aim-point ({x}, {y}) out of coordinate range")]
    CoordinateOverflow { x: i64, y: i64 },
}
