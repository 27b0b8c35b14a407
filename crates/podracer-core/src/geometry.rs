//! Immutable 2D vector with cached polar form.
//!
//! Angles follow the game's convention: degrees in `(-180, 180]`, measured
//! from the +x axis toward +y. A zero-length vector has no direction and
//! its angles are NaN. That is a sentinel, not an error: every branch keyed
//! on an angle treats "no direction" as "condition false".

use std::f64::consts::PI;

use glam::DVec2;

/// A 2D vector together with its length and normalized angle.
#[derive(Debug, Clone, Copy)]
pub struct Vector {
    v: DVec2,
    length: f64,
    angle_degrees: f64,
    angle_radians: f64,
}

impl Vector {
    /// Build from Cartesian components.
    pub fn from_cartesian(x: f64, y: f64) -> Self {
        // Fold -0.0 into +0.0 so the arctangent picks the right half-plane.
        let (x, y) = (x + 0.0, y + 0.0);
        let angle_radians = normalize_angle_radians(cartesian_to_radians(x, y));
        let v = DVec2::new(x, y);
        Self {
            v,
            length: v.length(),
            angle_degrees: angle_radians.to_degrees(),
            angle_radians,
        }
    }

    /// Build from a length and an angle in degrees.
    ///
    /// The angle is normalized first and the Cartesian pair is derived from
    /// the normalized value, so the stored angle always agrees with `x`/`y`.
    pub fn from_polar(length: f64, angle_degrees: f64) -> Self {
        if length == 0.0 {
            return Self::zero();
        }
        let angle_radians = normalize_angle_radians(angle_degrees.to_radians());
        Self {
            v: DVec2::new(length * angle_radians.cos(), length * angle_radians.sin()),
            length,
            angle_degrees: angle_radians.to_degrees(),
            angle_radians,
        }
    }

    /// The canonical zero vector (no direction).
    pub fn zero() -> Self {
        Self::from_cartesian(0.0, 0.0)
    }

    pub fn x(&self) -> f64 {
        self.v.x
    }

    pub fn y(&self) -> f64 {
        self.v.y
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    /// Angle in degrees, NaN when the vector has no direction.
    pub fn angle_degrees(&self) -> f64 {
        self.angle_degrees
    }

    /// Angle in radians, NaN when the vector has no direction.
    pub fn angle_radians(&self) -> f64 {
        self.angle_radians
    }

    /// False for the zero vector.
    pub fn has_direction(&self) -> bool {
        !self.angle_radians.is_nan()
    }

    pub fn add(&self, other: &Vector) -> Vector {
        let sum = self.v + other.v;
        Self::from_cartesian(sum.x, sum.y)
    }

    pub fn subtract(&self, other: &Vector) -> Vector {
        let diff = self.v - other.v;
        Self::from_cartesian(diff.x, diff.y)
    }

    /// Scale by `factor`. Scaling a directionless vector yields the zero vector.
    pub fn scale(&self, factor: f64) -> Vector {
        if self.length == 0.0 || !self.has_direction() {
            return Self::zero();
        }
        let scaled = self.v * factor;
        Self::from_cartesian(scaled.x, scaled.y)
    }

    /// Components truncated toward zero.
    pub fn to_ints(&self) -> (i32, i32) {
        (self.v.x as i32, self.v.y as i32)
    }

    /// Signed error between this bearing and a facing angle, both truncated
    /// to whole degrees before subtracting. `None` without a direction.
    pub fn heading_error(&self, facing_degrees: i32) -> Option<i32> {
        if !self.has_direction() {
            return None;
        }
        Some(normalize_degrees_i32(
            (self.angle_degrees as i32).saturating_sub(facing_degrees),
        ))
    }

    /// Signed bearing of `self` relative to `other`, subtracted first and
    /// then truncated. `None` if either vector has no direction.
    pub fn bearing_from(&self, other: &Vector) -> Option<i32> {
        if !self.has_direction() || !other.has_direction() {
            return None;
        }
        Some(normalize_degrees_i32(
            (self.angle_degrees - other.angle_degrees) as i32,
        ))
    }
}

impl Default for Vector {
    fn default() -> Self {
        Self::zero()
    }
}

/// Quadrant-correcting arctangent. NaN for the origin.
fn cartesian_to_radians(x: f64, y: f64) -> f64 {
    let angle = (y / x).atan();
    if x < 0.0 && y >= 0.0 {
        angle + PI
    } else if x < 0.0 && y < 0.0 {
        angle - PI
    } else {
        angle
    }
}

/// Wrap an angle into `(-PI, PI]`. Only valid within one turn of that range.
pub fn normalize_angle_radians(angle: f64) -> f64 {
    if angle > PI {
        angle - 2.0 * PI
    } else if angle <= -PI {
        angle + 2.0 * PI
    } else {
        angle
    }
}

/// Wrap an angle into `(-180, 180]`. Only valid within one turn of that range.
pub fn normalize_angle_degrees(angle: f64) -> f64 {
    if angle > 180.0 {
        angle - 360.0
    } else if angle <= -180.0 {
        angle + 360.0
    } else {
        angle
    }
}

/// Whole-degree variant of [`normalize_angle_degrees`].
pub fn normalize_degrees_i32(angle: i32) -> i32 {
    if angle > 180 {
        angle - 360
    } else if angle <= -180 {
        angle + 360
    } else {
        angle
    }
}
