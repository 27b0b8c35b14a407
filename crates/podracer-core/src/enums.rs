//! Enumeration types used throughout the decision core.

use serde::{Deserialize, Serialize};

/// Behavior selected for one own pod on one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyMode {
    /// Drive the racing line as fast as possible.
    #[default]
    Racing,
    /// Support pod while the team is ahead: ram opponents on the way.
    AggressiveBlock,
    /// Support pod while the team is behind: intercept the opposing leader.
    FullDefense,
}

