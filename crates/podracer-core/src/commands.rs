//! Pod commands sent back to the referee.
//!
//! Exactly one command per own pod per tick: an absolute aim-point plus a
//! thrust level, a boost, or a shield.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_THRUST, MIN_THRUST};
use crate::error::RaceError;
use crate::geometry::Vector;
use crate::types::Point;

/// What the pod does this tick besides steering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PodAction {
    Thrust { power: u8 },
    Boost,
    Shield,
}

/// A fully encoded command for one pod.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodCommand {
    pub target: Point,
    pub action: PodAction,
}

impl PodCommand {
    /// Turn a relative target vector and a decision into an absolute command.
    ///
    /// Boost takes precedence over shield, shield over thrust. Thrust is
    /// clamped into `[0, 100]`. Fails if the aim-point leaves the `i32` range.
    pub fn encode(
        position: Point,
        target: &Vector,
        thrust: i32,
        shield: bool,
        boost: bool,
    ) -> Result<Self, RaceError> {
        let action = if boost {
            PodAction::Boost
        } else if shield {
            PodAction::Shield
        } else {
            PodAction::Thrust {
                power: thrust.clamp(MIN_THRUST, MAX_THRUST) as u8,
            }
        };
        Ok(Self {
            target: position.offset_by(target)?,
            action,
        })
    }

    pub fn is_boost(&self) -> bool {
        matches!(self.action, PodAction::Boost)
    }
}

impl fmt::Display for PodCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.action {
            PodAction::Thrust { power } => write!(f, "{} {} {}", self.target.x, self.target.y, power),
            PodAction::Boost => write!(f, "{} {} BOOST", self.target.x, self.target.y),
            PodAction::Shield => write!(f, "{} {} SHIELD", self.target.x, self.target.y),
        }
    }
}
