//! The wandering player
//!
//! The player is always in exactly one of two flight states: drifting freely
//! on a straight line, or orbiting a hooked planet. Facing is decoupled from
//! motion and chases the travel direction under a turn-rate cap, with a small
//! hysteresis so the nose does not flip-flop when the target angle sits right
//! at the cap boundary.

use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

use crate::consts::{BASE_ORBIT_SPEED, FACING_TURN_SPEED};
use crate::math::{degree_to_radian, orthogonal, rotate_vector, smaller_degree_distance, vector_angle};
use crate::sim::hook::Hook;

/// How the player is currently moving
#[derive(Debug, Clone, PartialEq)]
pub enum FlightState {
    /// Straight-line drift
    Free { velocity: Vec2 },
    /// Tethered to a planet
    Orbiting {
        hook: Hook,
        planet_id: u32,
        is_clockwise: bool,
        /// Set until the first orbit step resolves the orbit handedness from
        /// the player's facing
        just_grabbed: bool,
    },
}

/// In-flight scale snap-back after a slingshot launch
#[derive(Debug, Clone, Copy, PartialEq)]
struct ScaleRecover {
    from: f32,
    total: f32,
    elapsed: f32,
}

/// The player ship
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub position: Vec2,
    /// Facing angle in radians; not normalized
    pub rotation: f32,
    /// Unscaled sprite size
    pub size: Vec2,
    /// Uniform render scale; squashed while aiming a slingshot
    pub scale: f32,
    pub flight: FlightState,
    last_time: Option<f64>,
    /// Last committed turn direction for the facing hysteresis: -1, 0 or 1
    turn_direction: i8,
    scale_recover: Option<ScaleRecover>,
}

impl Player {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            rotation: 0.0,
            size,
            scale: 1.0,
            flight: FlightState::Free {
                velocity: Vec2::ZERO,
            },
            last_time: None,
            turn_direction: 0,
            scale_recover: None,
        }
    }

    pub fn is_orbiting(&self) -> bool {
        matches!(self.flight, FlightState::Orbiting { .. })
    }

    /// Drift velocity, zero while orbiting
    pub fn velocity(&self) -> Vec2 {
        match self.flight {
            FlightState::Free { velocity } => velocity,
            FlightState::Orbiting { .. } => Vec2::ZERO,
        }
    }

    /// Replace the drift velocity; ignored while orbiting
    pub fn set_velocity(&mut self, velocity: Vec2) {
        if let FlightState::Free { velocity: v } = &mut self.flight {
            *v = velocity;
        }
    }

    /// Whether a world point falls inside the player's scaled bounding box
    pub fn bounds_contain(&self, point: Vec2) -> bool {
        let half = self.size * self.scale / 2.0;
        (point.x - self.position.x).abs() <= half.x && (point.y - self.position.y).abs() <= half.y
    }

    /// Enter orbit around a planet. Handedness is resolved on the next orbit
    /// step from the current facing.
    pub fn grab(&mut self, hook: Hook, planet_id: u32) {
        self.flight = FlightState::Orbiting {
            hook,
            planet_id,
            is_clockwise: false,
            just_grabbed: true,
        };
    }

    /// Leave orbit along the tangent. The launch speed scales with how fast
    /// the orbit was spinning relative to the base rate. Returns the launch
    /// velocity and the planet left behind, or `None` when not orbiting.
    pub fn release(&mut self) -> Option<(Vec2, u32)> {
        let FlightState::Orbiting {
            hook,
            planet_id,
            is_clockwise,
            ..
        } = &self.flight
        else {
            return None;
        };

        let movement = orthogonal(hook.moving_point - hook.fixed_point, true);
        let out = rotate_vector(movement, if *is_clockwise { PI } else { 0.0 });
        let velocity = out * (hook.current_speed / BASE_ORBIT_SPEED);
        let planet_id = *planet_id;

        self.flight = FlightState::Free { velocity };
        self.turn_direction = 0;
        Some((velocity, planet_id))
    }

    /// Advance one orbiting frame. The very first step only records the
    /// timestamp.
    pub fn orbit_step(&mut self, time: f64) {
        let Some(last) = self.last_time else {
            self.last_time = Some(time);
            return;
        };
        let dt = (time - last) as f32;

        let rotation = self.rotation;
        let (new_pos, movement, offset, clockwise) = match &mut self.flight {
            FlightState::Orbiting {
                hook,
                is_clockwise,
                just_grabbed,
                ..
            } => {
                if *just_grabbed {
                    let tangent = orthogonal(hook.moving_point - hook.fixed_point, true);
                    let target = vector_angle(tangent) + FRAC_PI_2;
                    *is_clockwise = (target - rotation).abs() > PI;
                    *just_grabbed = false;
                }
                let new_pos = hook.rotate(*is_clockwise, dt);
                let movement = orthogonal(new_pos - hook.fixed_point, true);
                let offset = if *is_clockwise { -FRAC_PI_2 } else { FRAC_PI_2 };
                (new_pos, movement, offset, *is_clockwise)
            }
            FlightState::Free { .. } => return,
        };

        self.position = new_pos;
        self.steer_toward(
            movement,
            offset,
            degree_to_radian(FACING_TURN_SPEED),
            dt,
            clockwise,
        );
        self.advance_scale(dt);
        self.last_time = Some(time);
    }

    /// Advance one free-flight frame. The very first step only records the
    /// timestamp.
    pub fn free_step(&mut self, time: f64) {
        let Some(last) = self.last_time else {
            self.last_time = Some(time);
            return;
        };
        let dt = (time - last) as f32;

        if let FlightState::Free { velocity } = self.flight {
            self.position += velocity * dt;
        }
        self.advance_scale(dt);
        self.last_time = Some(time);
    }

    /// Turn the facing toward the direction of `vector`, offset by `offset`
    /// radians, at most `max_speed * dt` radians this frame. A non-positive
    /// `max_speed` snaps immediately.
    pub(crate) fn steer_toward(
        &mut self,
        vector: Vec2,
        offset: f32,
        max_speed: f32,
        dt: f32,
        is_clockwise: bool,
    ) {
        let target = vector_angle(vector) - offset;
        if max_speed <= 0.0 {
            self.rotation = target;
            return;
        }

        let max_change = max_speed * dt;
        let diff = smaller_degree_distance((target - self.rotation) % TAU);
        let sign = if is_clockwise { -1.0 } else { 1.0 };

        if diff.abs() < max_change {
            self.rotation = target;
            self.turn_direction = 0;
        } else if self.turn_direction != 0 && diff < 1.5 * max_change {
            // Within the hysteresis band, keep turning the committed way
            self.rotation += max_change * self.turn_direction as f32 * sign;
        } else if diff > 0.0 {
            self.turn_direction = 1;
            self.rotation += max_change * sign;
        } else {
            self.turn_direction = -1;
            self.rotation -= max_change * sign;
        }
    }

    /// Start the post-launch scale snap-back
    pub fn begin_scale_recover(&mut self, secs: f32) {
        self.scale_recover = Some(ScaleRecover {
            from: self.scale,
            total: secs,
            elapsed: 0.0,
        });
    }

    fn advance_scale(&mut self, dt: f32) {
        if let Some(recover) = &mut self.scale_recover {
            recover.elapsed += dt;
            let t = (recover.elapsed / recover.total).min(1.0);
            self.scale = recover.from + (1.0 - recover.from) * t;
            if t >= 1.0 {
                self.scale_recover = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_player() -> Player {
        Player::new(Vec2::new(200.0, 300.0), Vec2::new(40.0, 44.0))
    }

    #[test]
    fn test_release_launches_along_tangent() {
        let mut player = test_player();
        let hook = Hook::attach(Vec2::ZERO, Vec2::new(1.0, 0.0)).unwrap();
        player.grab(hook, 9);
        if let FlightState::Orbiting {
            is_clockwise,
            just_grabbed,
            ..
        } = &mut player.flight
        {
            *is_clockwise = false;
            *just_grabbed = false;
        }

        let (velocity, planet_id) = player.release().unwrap();
        assert_eq!(planet_id, 9);
        assert!(velocity.distance(Vec2::new(0.0, 1.0)) < 1e-5);
        assert!(!player.is_orbiting());
    }

    #[test]
    fn test_release_clockwise_reverses_tangent() {
        let mut player = test_player();
        let hook = Hook::attach(Vec2::ZERO, Vec2::new(1.0, 0.0)).unwrap();
        player.grab(hook, 1);
        if let FlightState::Orbiting { is_clockwise, .. } = &mut player.flight {
            *is_clockwise = true;
        }

        let (velocity, _) = player.release().unwrap();
        assert!(velocity.distance(Vec2::new(0.0, -1.0)) < 1e-5);
    }

    #[test]
    fn test_release_speed_scales_with_orbit_speed() {
        let mut player = test_player();
        let mut hook = Hook::attach(Vec2::ZERO, Vec2::new(10.0, 0.0)).unwrap();
        hook.current_speed = 180.0;
        player.grab(hook, 2);

        let (velocity, _) = player.release().unwrap();
        // twice the base rate doubles the launch speed
        assert!((velocity.length() - 20.0).abs() < 1e-3);
    }

    #[test]
    fn test_release_while_free_is_none() {
        let mut player = test_player();
        assert_eq!(player.release(), None);
    }

    #[test]
    fn test_handedness_resolved_once() {
        let mut player = test_player();
        player.rotation = 7.0;
        let hook = Hook::attach(Vec2::ZERO, Vec2::new(50.0, 0.0)).unwrap();
        player.grab(hook, 1);

        player.orbit_step(0.0);
        player.orbit_step(0.016);
        let FlightState::Orbiting {
            is_clockwise,
            just_grabbed,
            ..
        } = player.flight
        else {
            panic!("still orbiting");
        };
        assert!(is_clockwise);
        assert!(!just_grabbed);
    }

    #[test]
    fn test_orbit_step_moves_player_on_circle() {
        let mut player = test_player();
        let hook = Hook::attach(Vec2::new(100.0, 100.0), Vec2::new(150.0, 100.0)).unwrap();
        player.grab(hook, 1);

        player.orbit_step(0.0);
        for frame in 1..=120 {
            player.orbit_step(frame as f64 / 60.0);
            let radius = player.position.distance(Vec2::new(100.0, 100.0));
            assert!((radius - 50.0).abs() < 1e-2);
        }
    }

    #[test]
    fn test_orbit_facing_tracks_tangent() {
        let mut player = test_player();
        let hook = Hook::attach(Vec2::new(100.0, 100.0), Vec2::new(150.0, 100.0)).unwrap();
        player.grab(hook, 1);

        player.orbit_step(0.0);
        for frame in 1..=180 {
            player.orbit_step(frame as f64 / 60.0);
        }

        // the cap outruns the orbit rate, so the facing locks onto the
        // tangent direction minus the quarter-turn sprite offset
        let FlightState::Orbiting {
            ref hook,
            is_clockwise,
            ..
        } = player.flight
        else {
            panic!("still orbiting");
        };
        let movement = orthogonal(hook.moving_point - hook.fixed_point, true);
        let offset = if is_clockwise { -FRAC_PI_2 } else { FRAC_PI_2 };
        let target = vector_angle(movement) - offset;
        let gap = smaller_degree_distance((target - player.rotation) % TAU);
        assert!(gap.abs() < 1e-3, "facing off tangent by {gap}");
    }

    #[test]
    fn test_facing_turn_is_rate_capped() {
        let mut player = test_player();
        player.rotation = 0.0;
        // target is far away, so one frame moves at most the cap
        player.steer_toward(
            Vec2::new(-1.0, 0.0),
            0.0,
            degree_to_radian(FACING_TURN_SPEED),
            0.016,
            false,
        );
        let max_change = degree_to_radian(FACING_TURN_SPEED) * 0.016;
        assert!((player.rotation - max_change).abs() < 1e-6);
    }

    #[test]
    fn test_facing_snaps_inside_cap() {
        let mut player = test_player();
        player.rotation = 0.01;
        player.steer_toward(
            Vec2::new(1.0, 0.0),
            0.0,
            degree_to_radian(FACING_TURN_SPEED),
            0.016,
            false,
        );
        assert_eq!(player.rotation, 0.0);
    }

    #[test]
    fn test_facing_snap_when_uncapped() {
        let mut player = test_player();
        player.steer_toward(Vec2::new(0.0, 1.0), 0.0, -1.0, 0.0, false);
        assert!((player.rotation - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_free_flight_integrates_velocity() {
        let mut player = test_player();
        player.set_velocity(Vec2::new(60.0, -30.0));
        player.free_step(0.0);
        player.free_step(1.0);
        assert!(player.position.distance(Vec2::new(260.0, 270.0)) < 1e-3);
    }

    #[test]
    fn test_bounds_contain_respects_scale() {
        let mut player = test_player();
        assert!(player.bounds_contain(Vec2::new(219.0, 300.0)));
        assert!(!player.bounds_contain(Vec2::new(221.0, 300.0)));
        player.scale = 0.5;
        assert!(!player.bounds_contain(Vec2::new(219.0, 300.0)));
        assert!(player.bounds_contain(Vec2::new(209.0, 300.0)));
    }

    #[test]
    fn test_scale_recovers_to_one() {
        let mut player = test_player();
        player.scale = 0.4;
        player.begin_scale_recover(0.15);
        player.free_step(0.0);
        player.free_step(0.075);
        assert!(player.scale > 0.4 && player.scale < 1.0);
        player.free_step(0.2);
        assert_eq!(player.scale, 1.0);
    }
}
