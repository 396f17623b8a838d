use std::f64::consts::{PI, TAU};

use super::Vector2;

/// Wraps an angle into `(-pi, pi]`.
#[must_use]
pub fn fix_angle(theta: f64) -> f64 {
    let wrapped = (theta + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

/// Angular distance from `a` to `b`, i.e. `(b - a) mod 2pi`, in `[0, 2pi)`.
///
/// Walking a clockwise polygon, edge directions decrease, so the distance
/// from a later edge to the first one grows monotonically along the walk.
#[must_use]
pub fn ang_dist(a: f64, b: f64) -> f64 {
    let d = (b - a).rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs.
    if d >= TAU {
        0.0
    } else {
        d
    }
}

/// Direction of a vector in `(-pi, pi]`.
#[must_use]
pub fn vector_angle(v: &Vector2) -> f64 {
    fix_angle(v.y.atan2(v.x))
}

/// Returns `true` if `a` and `b` denote the same direction within `tol` radians.
#[must_use]
pub fn same_direction(a: f64, b: f64, tol: f64) -> bool {
    let d = ang_dist(a, b);
    d < tol || TAU - d < tol
}
