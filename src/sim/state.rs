//! Game state container
//!
//! `GameState` owns everything the simulation mutates: the player, the
//! planet roster, the seeded RNG, and a queue of events the host drains each
//! frame to drive rendering and sound. Two states built from the same config
//! and seed evolve identically under the same inputs.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::config::WorldConfig;
use crate::consts::INITIAL_PLANETS;
use crate::palette::Color;
use crate::sim::planet::Planet;
use crate::sim::player::Player;

/// Something observable happened this frame
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A planet was ambient-spawned into an off-screen cell
    PlanetSpawned { id: u32, cell: usize },
    /// A planet drifted out of the streaming grid and was removed
    PlanetCulled { id: u32 },
    /// The player hooked onto a planet
    OrbitEntered { planet_id: u32 },
    /// The player let go of a planet
    OrbitReleased { planet_id: u32 },
    /// A planet sounded its cue for the first time
    PlanetTouched { planet_id: u32, pitch: u8 },
    /// A slingshot drag ended
    Launched { velocity: Vec2 },
}

/// An in-progress slingshot drag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    /// Where the drag began, in world coordinates
    pub origin: Vec2,
    /// Player scale when the drag began
    pub initial_scale: f32,
}

/// Complete simulation state
#[derive(Debug)]
pub struct GameState {
    pub width: f32,
    pub height: f32,
    pub planets_per_cell: usize,
    pub palette: Vec<Color>,
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub player: Player,
    pub planets: Vec<Planet>,
    pub(crate) drag: Option<DragState>,
    events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Build a fresh world: the player at screen center and a fixed ladder
    /// of starter planets alternating between the left and right flanks.
    pub fn new(config: &WorldConfig, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut next_id = 0u32;

        let player = Player::new(
            Vec2::new(config.width / 2.0, config.height / 2.0),
            config.player_size(),
        );

        let mut planets = Vec::with_capacity(INITIAL_PLANETS);
        for i in 0..INITIAL_PLANETS {
            let x = if i % 2 == 0 {
                2.0 * config.width / 10.0
            } else {
                8.0 * config.width / 10.0
            };
            let y = (i + 1) as f32 * config.height / 5.0;
            planets.push(Planet::spawn(
                next_id,
                Vec2::new(x, y),
                &config.palette,
                &mut rng,
            ));
            next_id += 1;
        }

        log::info!(
            "world start: seed={seed} screen={}x{} starter_planets={}",
            config.width,
            config.height,
            planets.len()
        );

        Self {
            width: config.width,
            height: config.height,
            planets_per_cell: config.planets_per_cell,
            palette: config.palette.clone(),
            seed,
            rng,
            player,
            planets,
            drag: None,
            events: Vec::new(),
            next_id,
        }
    }

    /// Hand out the next unique entity id
    pub(crate) fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events queued since the last drain, in occurrence order
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn planet(&self, id: u32) -> Option<&Planet> {
        self.planets.iter().find(|p| p.id == id)
    }

    pub fn planet_mut(&mut self, id: u32) -> Option<&mut Planet> {
        self.planets.iter_mut().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_places_player_at_center() {
        let state = GameState::new(&WorldConfig::default(), 0);
        assert_eq!(state.player.position, Vec2::new(200.0, 300.0));
        assert_eq!(state.player.size, Vec2::new(40.0, 400.0 / 9.1));
    }

    #[test]
    fn test_new_spawns_starter_ladder() {
        let state = GameState::new(&WorldConfig::default(), 0);
        assert_eq!(state.planets.len(), 5);
        for (i, planet) in state.planets.iter().enumerate() {
            let expected_x = if i % 2 == 0 { 80.0 } else { 320.0 };
            assert_eq!(planet.position.x, expected_x);
            assert_eq!(planet.position.y, (i + 1) as f32 * 120.0);
        }
    }

    #[test]
    fn test_same_seed_same_world() {
        let a = GameState::new(&WorldConfig::default(), 123);
        let b = GameState::new(&WorldConfig::default(), 123);
        assert_eq!(a.planets, b.planets);
    }

    #[test]
    fn test_different_seed_different_geometry() {
        let a = GameState::new(&WorldConfig::default(), 1);
        let b = GameState::new(&WorldConfig::default(), 2);
        assert_ne!(a.planets, b.planets);
    }

    #[test]
    fn test_entity_ids_are_unique() {
        let mut state = GameState::new(&WorldConfig::default(), 0);
        let a = state.next_entity_id();
        let b = state.next_entity_id();
        assert_ne!(a, b);
        assert!(state.planets.iter().all(|p| p.id != a && p.id != b));
    }

    #[test]
    fn test_drain_events_empties_queue() {
        let mut state = GameState::new(&WorldConfig::default(), 0);
        state.push_event(GameEvent::PlanetCulled { id: 99 });
        let events = state.drain_events();
        assert_eq!(events, vec![GameEvent::PlanetCulled { id: 99 }]);
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_planet_lookup_by_id() {
        let mut state = GameState::new(&WorldConfig::default(), 0);
        assert!(state.planet(3).is_some());
        assert!(state.planet(999).is_none());
        if let Some(planet) = state.planet_mut(3) {
            planet.grab();
        }
        assert!(state.planet(3).is_some_and(|p| p.grabbed));
    }
}
