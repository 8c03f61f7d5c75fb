//! Planet field streaming
//!
//! The infinite field is managed as a 3x3 grid of screen-sized cells centered
//! on the player. Planets that drift outside the grid are culled; off-screen
//! cells that fall below their planet quota are topped up with fresh spawns.
//! The visible center cell is never ambient-spawned into, so new planets
//! always appear just outside the screen.

use glam::Vec2;
use rand::Rng;

use crate::sim::planet::{Planet, PlanetPhase};
use crate::sim::state::{GameEvent, GameState};

/// Index of the on-screen center cell in the 3x3 grid
pub const VISIBLE_CELL: usize = 4;

/// Classify a position into one of the nine cells around the player, row
/// major from bottom-left. Positions farther than 1.5 screens away on either
/// axis are outside the grid.
pub fn cell_index(pos: Vec2, player: Vec2, width: f32, height: f32) -> Option<usize> {
    if (pos.x - player.x).abs() > 1.5 * width || (pos.y - player.y).abs() > 1.5 * height {
        return None;
    }

    let left = player.x - width / 2.0;
    let right = player.x + width / 2.0;
    let bottom = player.y - height / 2.0;
    let top = player.y + height / 2.0;

    let mut cell = 0;
    if pos.x > left && pos.x < right {
        cell += 1;
    } else if pos.x > right {
        cell += 2;
    }
    if pos.y > bottom && pos.y < top {
        cell += 3;
    } else if pos.y > top {
        cell += 6;
    }
    Some(cell)
}

/// One streaming pass: cull planets that left the grid, compact them out of
/// the roster, and top every off-screen cell back up to its quota.
pub fn stream_planets(state: &mut GameState) {
    let player_pos = state.player.position;
    let (width, height) = (state.width, state.height);
    let mut counts = [0usize; 9];

    for planet in &mut state.planets {
        if planet.is_destroyed() {
            continue;
        }
        // an active orbit claim pins its planet; once touched it rejoins
        // the cull pass, keeping the roster bounded over a long session
        if planet.grabbed && planet.phase == PlanetPhase::Active {
            continue;
        }
        match cell_index(planet.position, player_pos, width, height) {
            Some(cell) => {
                if !planet.grabbed {
                    counts[cell] += 1;
                }
            }
            None => planet.destroy(),
        }
    }

    let mut culled = Vec::new();
    state.planets.retain(|planet| {
        if planet.is_destroyed() {
            culled.push(planet.id);
            false
        } else {
            true
        }
    });
    for id in culled {
        state.push_event(GameEvent::PlanetCulled { id });
    }

    for cell in 0..9 {
        if cell == VISIBLE_CELL {
            continue;
        }
        while counts[cell] < state.planets_per_cell {
            spawn_into_cell(state, cell);
            counts[cell] += 1;
        }
    }
}

/// Spawn a planet at a uniformly random position inside the given cell
fn spawn_into_cell(state: &mut GameState, cell: usize) {
    let col = (cell % 3) as f32;
    let row = (cell / 3) as f32;
    let base = state.player.position
        + Vec2::new((col - 1.5) * state.width, (row - 1.5) * state.height);
    let offset = Vec2::new(
        state.rng.random_range(0.0..1.0) * state.width,
        state.rng.random_range(0.0..1.0) * state.height,
    );

    let id = state.next_entity_id();
    let planet = Planet::spawn(id, base + offset, &state.palette, &mut state.rng);
    state.planets.push(planet);
    state.push_event(GameEvent::PlanetSpawned { id, cell });
}
