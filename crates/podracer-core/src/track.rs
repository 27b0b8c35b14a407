//! Track model: checkpoints with precomputed aim-points.

use serde::{Deserialize, Serialize};

use crate::constants::LONG_RANGE_DIVISOR;
use crate::error::RaceError;
use crate::types::Point;

/// A checkpoint and the two aim-points derived from its successor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub center: Point,
    /// Overshoot target one third of the next leg beyond the center,
    /// away from the following checkpoint.
    pub long_range_aimpoint: Point,
    /// Center of the checkpoint that follows this one.
    pub next_aimpoint: Point,
}

/// Ordered, wrap-around loop of checkpoints. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    checkpoints: Vec<Checkpoint>,
}

impl Track {
    /// Build the track and precompute every aim-point in one backward pass.
    pub fn build(centers: &[Point]) -> Result<Self, RaceError> {
        let Some(&first) = centers.first() else {
            return Err(RaceError::EmptyTrack);
        };

        let mut checkpoints: Vec<Checkpoint> = centers
            .iter()
            .map(|&center| Checkpoint {
                center,
                long_range_aimpoint: center,
                next_aimpoint: center,
            })
            .collect();

        let mut next = first;
        for checkpoint in checkpoints.iter_mut().rev() {
            let c = checkpoint.center;
            checkpoint.long_range_aimpoint = long_range_aimpoint(c, next)?;
            checkpoint.next_aimpoint = next;
            next = c;
        }

        Ok(Self { checkpoints })
    }

    pub fn len(&self) -> usize {
        self.checkpoints.len()
    }

    /// Always false for a built track.
    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }

    pub fn checkpoints(&self) -> &[Checkpoint] {
        &self.checkpoints
    }

    /// Look up a checkpoint by the id reported in telemetry.
    pub fn checkpoint(&self, id: usize) -> Result<&Checkpoint, RaceError> {
        self.checkpoints
            .get(id)
            .ok_or(RaceError::CheckpointOutOfRange {
                id: id as i64,
                count: self.checkpoints.len(),
            })
    }

    /// Validate a raw telemetry id against the track.
    pub fn validate_id(&self, id: i32) -> Result<usize, RaceError> {
        usize::try_from(id)
            .ok()
            .filter(|&i| i < self.checkpoints.len())
            .ok_or(RaceError::CheckpointOutOfRange {
                id: i64::from(id),
                count: self.checkpoints.len(),
            })
    }
}

/// `c + (c - next) / 3` per component, truncating toward zero.
fn long_range_aimpoint(c: Point, next: Point) -> Result<Point, RaceError> {
    let divisor = i64::from(LONG_RANGE_DIVISOR);
    let x = i64::from(c.x) + (i64::from(c.x) - i64::from(next.x)) / divisor;
    let y = i64::from(c.y) + (i64::from(c.y) - i64::from(next.y)) / divisor;
    match (i32::try_from(x), i32::try_from(y)) {
        (Ok(px), Ok(py)) => Ok(Point::new(px, py)),
        _ => Err(RaceError::CoordinateOverflow { x, y }),
    }
}
