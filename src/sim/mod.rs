//! Deterministic simulation core
//!
//! Everything in here is headless and platform-free: given the same config,
//! seed and frame inputs, two simulations produce identical states and event
//! streams. Hosts own the clock and the input decoding; the sim owns all
//! movement, hooking, streaming and event emission.

pub mod hook;
pub mod planet;
pub mod player;
pub mod state;
pub mod tick;
pub mod world;

pub use hook::Hook;
pub use planet::{pitch_for_radius, DispersalRing, Planet, PlanetPhase};
pub use player::{FlightState, Player};
pub use state::{DragState, GameEvent, GameState};
pub use tick::{tick, FrameInput, Gesture};
pub use world::{cell_index, stream_planets, VISIBLE_CELL};
