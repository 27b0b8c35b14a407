//! Race constants and tuning parameters.
//!
//! The friction factor and the thresholds below were tuned against the
//! game's observed physics. Tests pin them as golden values.

// --- Physics ---

/// Per-tick multiplicative velocity decay applied by the game.
pub const FRICTION: f64 = 0.85;

/// Number of ticks the arrival predictor simulates before giving up.
pub const ARRIVAL_HORIZON_TICKS: u32 = 9;

/// A predicted pass within this distance of the target counts as a hit.
pub const HIT_TOLERANCE: f64 = 500.0;

/// Earliest predicted arrival tick at which cutting the corner is allowed.
/// Arriving sooner leaves no full tick to turn toward the next checkpoint.
pub const CORNER_CUT_MIN_TICKS: u32 = 2;

// --- Advancement ---

/// Advancement weight of one completed lap.
pub const ADVANCEMENT_LAP_WEIGHT: i64 = 1_000_000;

/// Advancement weight of one checkpoint within a lap.
pub const ADVANCEMENT_CHECKPOINT_WEIGHT: i64 = 100_000;

/// Lap number every pod starts on.
pub const FIRST_LAP: u32 = 1;

/// Checkpoint a pod heads to during the opening stretch of the race.
pub const OPENING_CHECKPOINT: usize = 1;

// --- Track ---

/// The long-range aim-point sits this fraction of the next leg beyond a checkpoint.
pub const LONG_RANGE_DIVISOR: i32 = 3;

// --- Racing ---

/// Distance beyond which the long-range aim-point may replace the checkpoint.
pub const LONG_RANGE_DISTANCE: f64 = 5500.0;

/// Max bearing deviation (degrees) between the long-range aim-point and the checkpoint.
pub const LONG_RANGE_MAX_DEVIATION: i32 = 45;

/// Inside this distance the pod is on final approach.
pub const APPROACH_DISTANCE: f64 = 1500.0;

/// Inside this distance thrust is scaled down linearly.
pub const SLOWDOWN_DISTANCE: i32 = 2000;

/// Heading error (degrees) under which heading correction applies at range.
pub const CORRECTION_MAX_ERROR: i32 = 20;

/// Heading error (degrees) under which heading correction applies inside `SLOWDOWN_DISTANCE`.
pub const CORRECTION_MAX_ERROR_NEAR: i32 = 45;

/// Heading error (degrees) under which the final approach aims past the checkpoint.
pub const FINAL_APPROACH_MAX_ERROR: i32 = 10;

/// Full thrust.
pub const MAX_THRUST: i32 = 100;

/// Minimum legal thrust.
pub const MIN_THRUST: i32 = 0;

/// Thrust cap when the heading error exceeds `WIDE_TURN_ERROR`.
pub const WIDE_TURN_THRUST: i32 = 60;

/// Heading error (degrees) considered a wide turn.
pub const WIDE_TURN_ERROR: i32 = 45;

/// Thrust when the target is behind the pod.
pub const REVERSE_TURN_THRUST: i32 = 5;

/// Heading error (degrees) considered behind the pod.
pub const REVERSE_TURN_ERROR: i32 = 90;

// --- Shield ---

/// Racing pods shield when this close to their checkpoint...
pub const SHIELD_CHECKPOINT_DISTANCE: f64 = 1000.0;

/// ...and an opponent is this close.
pub const SHIELD_OPPONENT_DISTANCE: f64 = 900.0;

/// Two pods closer than this are colliding (twice the pod radius).
pub const COLLISION_RADIUS: f64 = 800.0;

/// Wider collision radius used by defensive pods.
pub const DEFENSE_COLLISION_RADIUS: f64 = 1200.0;

// --- Boost ---

/// Minimum straight length (distance to target) before boosting.
pub const BOOST_MIN_DISTANCE: f64 = 5500.0;

/// Max heading error (degrees, exclusive) allowed when boosting.
pub const BOOST_MAX_ERROR: i32 = 3;

/// Both opponents must be at least this far away to boost.
pub const BOOST_MIN_OPPONENT_DISTANCE: f64 = 2000.0;

// --- Aggressive block ---

/// Interception is only considered while the checkpoint is within this distance.
pub const BLOCK_ENGAGE_DISTANCE: f64 = 6000.0;

/// Max bearing deviation (degrees) for an opponent to count as on the path.
pub const BLOCK_PATH_CONE: i32 = 45;

// --- Full defense ---

/// Own pod within this range of the opponent's checkpoint (or the opponent) rams it.
pub const DEFENSE_RAM_DISTANCE: f64 = 800.0;

/// Intercept geometry is rejected when cos(phi) falls to this value or below.
pub const DEFENSE_MIN_INTERCEPT_COS: f64 = 0.1;

/// Lookahead for the same-team collision forecast.
pub const PARTNER_LOOKAHEAD_TICKS: u32 = 10;

/// Deflection (degrees) applied away from a forecast same-team collision.
pub const PARTNER_DEFLECTION: f64 = 30.0;

/// Max relative bearing (degrees) between target and velocity for heading correction.
pub const DEFENSE_CORRECTION_MAX_ERROR: i32 = 40;

/// Defense thrust tiers: (heading error exceeded, thrust).
pub const DEFENSE_THRUST_TIERS: [(i32, i32); 3] = [(90, 1), (60, 10), (30, 40)];
