//! Space Nomad headless demo
//!
//! Runs the simulation for a while with a scripted pilot: tap to release
//! whenever an orbit has been caught, slingshot in a wandering direction
//! otherwise. Events are logged as they happen, so the run doubles as a
//! smoke test for the whole sim loop.

use glam::Vec2;

use space_nomad::audio::{CueBackend, CuePlayer};
use space_nomad::sim::{tick, FrameInput, GameEvent, GameState, Gesture};
use space_nomad::WorldConfig;

/// Backend that narrates cues instead of mixing them
struct LogBackend;

impl CueBackend for LogBackend {
    fn start(&mut self, pitch: u8) {
        log::info!("cue: pitch step {pitch}");
    }

    fn is_playing(&self) -> bool {
        false
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xCAFE);

    let config = WorldConfig::default();
    let mut state = GameState::new(&config, seed);
    let mut cues = CuePlayer::new(LogBackend);

    let fps = 60u32;
    let frames = fps * 30;
    let mut launches = 0u32;
    let mut visited = 0u32;

    for frame in 0..frames {
        let mut input = FrameInput::at(frame as f64 / fps as f64);

        // nudge the pilot every five seconds
        if frame % (fps * 5) == fps * 2 {
            if state.player.is_orbiting() {
                input.gestures.push(Gesture::Began(Vec2::ZERO));
            } else {
                let n = (frame / (fps * 5)) as f32;
                let pull = Vec2::new((n * 0.37).sin(), (n * 0.73).cos()) * 140.0;
                let origin = state.player.position;
                input.gestures.push(Gesture::Began(origin));
                input.gestures.push(Gesture::Moved(origin - pull / 2.0));
                input.gestures.push(Gesture::Ended(origin - pull));
            }
        }

        tick(&mut state, &input);

        for event in state.drain_events() {
            match event {
                GameEvent::OrbitEntered { planet_id } => {
                    log::info!("hooked planet {planet_id}");
                }
                GameEvent::OrbitReleased { planet_id } => {
                    log::info!("released planet {planet_id}");
                }
                GameEvent::PlanetTouched { planet_id, pitch } => {
                    visited += 1;
                    cues.play(pitch);
                    log::info!("planet {planet_id} touched (pitch {pitch})");
                }
                GameEvent::Launched { velocity } => {
                    launches += 1;
                    log::info!("launched at {velocity}");
                }
                GameEvent::PlanetSpawned { id, cell } => {
                    log::debug!("spawned planet {id} in cell {cell}");
                }
                GameEvent::PlanetCulled { id } => {
                    log::debug!("culled planet {id}");
                }
            }
        }
    }

    log::info!(
        "demo over: seed={seed} launches={launches} planets_visited={visited} roster={} at {}",
        state.planets.len(),
        state.player.position
    );
}
