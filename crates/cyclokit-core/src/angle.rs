//! Angle helpers and shared numeric tolerances.

pub use std::f64::consts::TAU;
use std::f64::consts::PI;

/// Absolute tolerance used for geometric comparisons.
pub const EPSILON: f64 = 1e-9;

/// Wraps an angle into the half-open range `(-π, π]`.
pub fn normalize_angle(angle: f64) -> f64 {
    let mut a = angle.rem_euclid(TAU);
    if a > PI {
        a -= TAU;
    }
    a
}

/// Angle of the vector `(x, y)`, defined as `0.0` for the zero vector.
pub fn angle_of(x: f64, y: f64) -> f64 {
    if x.abs() < EPSILON && y.abs() < EPSILON {
        0.0
    } else {
        y.atan2(x)
    }
}

/// Returns true when `a` and `b` differ by less than [`EPSILON`].
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}
