//! 2D vector and angle helpers
//!
//! Angles are radians in [0, 2π) unless noted. A vector's angle is resolved
//! by quadrant from `atan(|dy|/|dx|)`, which has no value when dx == 0;
//! straight-vertical vectors are handled explicitly and the zero vector
//! yields a sentinel angle of 0.0.

use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, PI, TAU};
use std::fmt;

/// A zero-length vector where a direction was required.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DegenerateVectorError;

impl fmt::Display for DegenerateVectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "zero-length vector has no direction")
    }
}

impl std::error::Error for DegenerateVectorError {}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

#[inline]
pub fn degree_to_radian(angle: f32) -> f32 {
    angle * PI / 180.0
}

#[inline]
pub fn radian_to_degree(angle: f32) -> f32 {
    angle * 180.0 / PI
}

/// Angle of a vector in [0, 2π), resolved by quadrant from the signs of dx/dy.
///
/// dx == 0 resolves to π/2 or 3π/2 by the sign of dy; the zero vector has no
/// direction and maps to the sentinel 0.0.
pub fn vector_angle(v: Vec2) -> f32 {
    if v.x == 0.0 {
        return if v.y > 0.0 {
            FRAC_PI_2
        } else if v.y < 0.0 {
            PI + FRAC_PI_2
        } else {
            0.0
        };
    }
    if v.y == 0.0 {
        return if v.x > 0.0 { 0.0 } else { PI };
    }

    let mut angle = (v.y.abs() / v.x.abs()).atan();
    if v.x < 0.0 && v.y > 0.0 {
        angle = PI - angle;
    } else if v.x < 0.0 && v.y < 0.0 {
        angle += PI;
    } else if v.x > 0.0 && v.y < 0.0 {
        angle = TAU - angle;
    }
    angle
}

/// `(-dy, dx)` when inverted, else `(-dx, dy)`.
///
/// Only the inverted arm is a true perpendicular; the other mirrors across
/// the y axis. Both behaviors are load-bearing for the orbit tangent math.
#[inline]
pub fn orthogonal(v: Vec2, invert: bool) -> Vec2 {
    if invert {
        Vec2::new(-v.y, v.x)
    } else {
        Vec2::new(-v.x, v.y)
    }
}

/// Build a vector from magnitude and angle; negative angles are folded into
/// [0, 2π) first.
pub fn polar_vec(length: f32, angle: f32) -> Vec2 {
    let angle = if angle < 0.0 { TAU + angle } else { angle };
    Vec2::new(angle.cos() * length, angle.sin() * length)
}

/// Rotate `point` about `pivot` by `angle` radians (negative angles are
/// folded into [0, 2π) first).
pub fn rotate_point(point: Vec2, pivot: Vec2, angle: f32) -> Vec2 {
    let angle = if angle < 0.0 { TAU + angle } else { angle };
    let radius = distance(pivot, point);
    let current = vector_angle(point - pivot);
    pivot + polar_vec(radius, current + angle)
}

/// Rotate a vector by decomposing it into magnitude/angle and rebuilding.
pub fn rotate_vector(v: Vec2, radians: f32) -> Vec2 {
    polar_vec(v.length(), vector_angle(v) + radians)
}

/// Fold an angle in (-2π, 2π) into the signed smaller rotational direction,
/// in [-π, π]: 350° becomes -10°, 190° becomes -170°, 10° stays 10°.
pub fn smaller_degree_distance(angle: f32) -> f32 {
    if angle > PI {
        angle - TAU
    } else if angle < -PI {
        angle + TAU
    } else {
        angle
    }
}
