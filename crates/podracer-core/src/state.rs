//! Per-pod derived state and the race-wide state threaded through every tick.

use serde::{Deserialize, Serialize};

use crate::constants::{FIRST_LAP, OPENING_CHECKPOINT};
use crate::geometry::Vector;
use crate::types::Point;

/// One pod as seen by the decision core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pod {
    pub position: Point,
    /// Velocity in game units per tick.
    pub velocity: Point,
    pub facing: i32,
    pub next_checkpoint_id: usize,
    pub lap: u32,
    /// `lap * BIG + next_checkpoint_id * MED - distance`. Only comparable
    /// between pods of the same race.
    pub advancement: i64,
}

impl Default for Pod {
    fn default() -> Self {
        Self {
            position: Point::default(),
            velocity: Point::default(),
            facing: 0,
            next_checkpoint_id: 0,
            lap: FIRST_LAP,
            advancement: 0,
        }
    }
}

impl Pod {
    pub fn velocity_vector(&self) -> Vector {
        Vector::from_cartesian(f64::from(self.velocity.x), f64::from(self.velocity.y))
    }

    /// Relative vector from this pod to an absolute point.
    pub fn vector_to(&self, target: &Point) -> Vector {
        self.position.vector_to(target)
    }

    /// Lap 1, heading to checkpoint 1: everybody races here.
    pub fn in_opening_stretch(&self) -> bool {
        self.lap == FIRST_LAP && self.next_checkpoint_id == OPENING_CHECKPOINT
    }
}

/// Race-wide state. One instance per race, owned by the tick loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceState {
    pub laps_total: u32,
    pub checkpoint_count: usize,
    pub boost_used: bool,
    pub is_first_tick: bool,
    pub own: [Pod; 2],
    pub opponents: [Pod; 2],
}

impl RaceState {
    pub fn new(laps_total: u32, checkpoint_count: usize) -> Self {
        Self {
            laps_total,
            checkpoint_count,
            boost_used: false,
            is_first_tick: true,
            own: [Pod::default(); 2],
            opponents: [Pod::default(); 2],
        }
    }
}
