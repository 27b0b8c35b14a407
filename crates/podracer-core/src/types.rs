//! Integer board coordinates and the raw records read from the referee.

use serde::{Deserialize, Serialize};

use crate::error::RaceError;
use crate::geometry::Vector;

/// A position on the board (integer game units).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Relative vector from `self` to `other`.
    pub fn vector_to(&self, other: &Point) -> Vector {
        Vector::from_cartesian(
            f64::from(other.x) - f64::from(self.x),
            f64::from(other.y) - f64::from(self.y),
        )
    }

    /// Absolute point reached by adding a relative vector, truncating its components.
    pub fn offset_by(&self, v: &Vector) -> Result<Point, RaceError> {
        let x = i64::from(self.x) + v.x() as i64;
        let y = i64::from(self.y) + v.y() as i64;
        match (i32::try_from(x), i32::try_from(y)) {
            (Ok(px), Ok(py)) => Ok(Point::new(px, py)),
            _ => Err(RaceError::CoordinateOverflow { x, y }),
        }
    }
}

/// One pod's telemetry for a single tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodTelemetry {
    pub x: i32,
    pub y: i32,
    pub vx: i32,
    pub vy: i32,
    /// Facing angle in whole degrees as reported by the referee.
    pub facing: i32,
    pub next_checkpoint_id: i32,
}

impl PodTelemetry {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Everything the referee sends for one tick: own pods first, then opponents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickTelemetry {
    pub own: [PodTelemetry; 2],
    pub opponents: [PodTelemetry; 2],
}

/// Startup input: lap count and checkpoint centers in traversal order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceSetup {
    pub laps: u32,
    pub checkpoints: Vec<Point>,
}
