//! Per-frame simulation advance
//!
//! Hosts call [`tick`] once per frame with a monotonic timestamp and any
//! decoded touch gestures. Gestures apply first, then the player advances in
//! its current flight state, then proximity hooking and planet streaming run
//! on the new position.

use glam::Vec2;
use std::f32::consts::FRAC_PI_2;

use crate::consts::{MAX_DRAG_SQUASH, SCALE_RECOVER_SECS};
use crate::math::distance;
use crate::sim::hook::Hook;
use crate::sim::planet::Planet;
use crate::sim::state::{DragState, GameEvent, GameState};
use crate::sim::world;

/// A decoded touch gesture in world coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    Began(Vec2),
    Moved(Vec2),
    Ended(Vec2),
}

/// Everything the simulation consumes for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameInput {
    /// Monotonic frame timestamp in seconds
    pub time: f64,
    /// Gestures since the previous frame, in arrival order
    pub gestures: Vec<Gesture>,
}

impl FrameInput {
    /// An input frame with no gestures
    pub fn at(time: f64) -> Self {
        Self {
            time,
            gestures: Vec::new(),
        }
    }
}

/// Advance the world by one frame
pub fn tick(state: &mut GameState, input: &FrameInput) {
    for gesture in &input.gestures {
        match *gesture {
            Gesture::Began(pos) => touch_began(state, pos),
            Gesture::Moved(pos) => touch_moved(state, pos),
            Gesture::Ended(pos) => touch_ended(state, pos),
        }
    }

    if state.player.is_orbiting() {
        state.player.orbit_step(input.time);
    } else {
        state.player.free_step(input.time);
    }

    check_proximity(state);
    world::stream_planets(state);
}

/// Hook onto the first un-grabbed planet whose surface the player overlaps.
/// While already orbiting, overlapped planets are marked instead so a close
/// flyby still sounds their cue.
fn check_proximity(state: &mut GameState) {
    let reach = state.player.size.y / 2.0;
    let player_pos = state.player.position;
    let already_orbiting = state.player.is_orbiting();

    let mut grazed = Vec::new();
    let mut entered: Option<(Hook, u32)> = None;

    for planet in &mut state.planets {
        if planet.grabbed || planet.is_destroyed() {
            continue;
        }
        if distance(player_pos, planet.position) >= reach + planet.radius {
            continue;
        }

        if already_orbiting {
            planet.grab();
            if let Some(pitch) = planet.touched() {
                grazed.push((planet.id, pitch));
            }
            continue;
        }

        match Hook::attach(planet.position, player_pos) {
            Ok(hook) => {
                planet.grab();
                entered = Some((hook, planet.id));
                break;
            }
            Err(err) => {
                // player sitting exactly on the core, no orbit this frame
                log::warn!("cannot hook planet {}: {err}", planet.id);
            }
        }
    }

    if let Some((hook, planet_id)) = entered {
        state.player.grab(hook, planet_id);
        state.push_event(GameEvent::OrbitEntered { planet_id });
    }
    for (planet_id, pitch) in grazed {
        state.push_event(GameEvent::PlanetTouched { planet_id, pitch });
    }
}

/// A tap releases an orbit; a touch on the drifting player starts a
/// slingshot drag.
fn touch_began(state: &mut GameState, pos: Vec2) {
    if state.player.is_orbiting() {
        if let Some((_, planet_id)) = state.player.release() {
            state.push_event(GameEvent::OrbitReleased { planet_id });
            let pitch = state.planet_mut(planet_id).and_then(Planet::touched);
            if let Some(pitch) = pitch {
                state.push_event(GameEvent::PlanetTouched { planet_id, pitch });
            }
        }
        return;
    }

    if state.player.bounds_contain(pos) {
        state.player.set_velocity(Vec2::ZERO);
        state.drag = Some(DragState {
            origin: pos,
            initial_scale: state.player.scale,
        });
    }
}

/// Dragging squashes the player toward 1/3 scale and aims it opposite the
/// pull
fn touch_moved(state: &mut GameState, pos: Vec2) {
    let Some(drag) = state.drag else {
        return;
    };

    let stretch = drag.origin - pos;
    let squash = ((100.0 + stretch.length()) / 100.0).clamp(1.0, MAX_DRAG_SQUASH);
    state.player.scale = drag.initial_scale / squash;
    if stretch != Vec2::ZERO {
        state.player.steer_toward(stretch, FRAC_PI_2, -1.0, 0.0, false);
    }
}

/// Ending a drag launches the player with the full pull vector as velocity
fn touch_ended(state: &mut GameState, pos: Vec2) {
    let Some(drag) = state.drag.take() else {
        return;
    };

    let velocity = drag.origin - pos;
    state.player.set_velocity(velocity);
    state.player.begin_scale_recover(SCALE_RECOVER_SECS);
    state.push_event(GameEvent::Launched { velocity });
}
