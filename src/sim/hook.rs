//! Orbital hook
//!
//! A hook tethers a moving point to a fixed pivot at a constant radius. The
//! radius and launch direction are captured once at attach time; rotation
//! then advances the angle at the current angular speed and recomputes the
//! moving point from polar coordinates, so the orbit can never drift.

use glam::Vec2;
use std::f32::consts::TAU;

use crate::consts::BASE_ORBIT_SPEED;
use crate::math::{degree_to_radian, distance, polar_vec, vector_angle, DegenerateVectorError};

/// Constant-radius tether between a pivot and an orbiting point
#[derive(Debug, Clone, PartialEq)]
pub struct Hook {
    /// Orbit center
    pub fixed_point: Vec2,
    /// Current position of the orbiting point
    pub moving_point: Vec2,
    /// Current angle of the tether in [0, 2π)
    pub angle: f32,
    /// Orbit radius, fixed at attach time
    pub distance: f32,
    /// Angular speed in degrees per second
    pub current_speed: f32,
    acceleration: f32,
}

impl Hook {
    /// Attach a hook from `fixed` to `moving`.
    ///
    /// Fails when the two points coincide, since a zero-radius orbit has no
    /// defined angle or tangent.
    pub fn attach(fixed: Vec2, moving: Vec2) -> Result<Self, DegenerateVectorError> {
        let radius = distance(fixed, moving);
        if radius <= f32::EPSILON {
            return Err(DegenerateVectorError);
        }
        Ok(Self {
            fixed_point: fixed,
            moving_point: moving,
            angle: vector_angle(moving - fixed),
            distance: radius,
            current_speed: BASE_ORBIT_SPEED,
            acceleration: 0.0,
        })
    }

    /// Advance the orbit by `elapsed` seconds and return the new position of
    /// the moving point.
    pub fn rotate(&mut self, is_clockwise: bool, elapsed: f32) -> Vec2 {
        let direction = if is_clockwise { -1.0 } else { 1.0 };
        self.angle += degree_to_radian(self.current_speed * elapsed) * direction;
        self.angle = self.angle.rem_euclid(TAU);
        self.current_speed += self.acceleration * elapsed;
        self.moving_point = self.fixed_point + polar_vec(self.distance, self.angle);
        self.moving_point
    }
}
