//! Distances, directions and the cut angle
//!
//! Directions are computed in radians with `atan2`; degrees appear only at
//! the API boundary. Coincident points give a direction of 0 (the `atan2(0, 0)`
//! result), so nothing here produces NaN for finite input.

use super::Point;
use crate::fold_angle;

/// Euclidean distance between two points
#[inline]
pub fn distance(p1: Point, p2: Point) -> f64 {
    p1.to_vec().distance(p2.to_vec())
}

/// Direction from `p1` to `p2` in radians, in (-π, π]
#[inline]
pub fn angle_radians(p1: Point, p2: Point) -> f64 {
    (p2.y - p1.y).atan2(p2.x - p1.x)
}

/// Direction from `p1` to `p2` in degrees, in (-180, 180]
#[inline]
pub fn angle_degrees(p1: Point, p2: Point) -> f64 {
    angle_radians(p1, p2).to_degrees()
}

/// Unsigned angle at `origin` between the rays to `p1` and `p2`, in [0, 180]
pub fn angle_between_vectors(origin: Point, p1: Point, p2: Point) -> f64 {
    let a1 = angle_radians(origin, p1);
    let a2 = angle_radians(origin, p2);
    fold_angle(a1 - a2).to_degrees()
}

/// Cut angle in degrees, in [0, 180]
///
/// The angle between the potting line (object ball to pocket) and the strike
/// line (cue ball to object ball). 0° is a dead straight pot, 90° the
/// theoretical maximum cut, and anything beyond 90° cannot be potted.
pub fn calculate_aiming_angle(cue_ball: Point, object_ball: Point, pocket: Point) -> f64 {
    let pot_line = angle_radians(object_ball, pocket);
    let strike_line = angle_radians(cue_ball, object_ball);
    fold_angle(pot_line - strike_line).to_degrees()
}

/// Inclusive point-in-circle test
#[inline]
pub fn is_point_in_circle(point: Point, center: Point, radius: f64) -> bool {
    distance(point, center) <= radius
}

/// Normalize degrees to [0, 360)
pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360
    if a >= 360.0 { 0.0 } else { a }
}
