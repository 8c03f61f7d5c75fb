//! Space Nomad - an objective-less orbit-and-slingshot exploration toy
//!
//! Core modules:
//! - `sim`: Deterministic simulation (orbit physics, planet streaming, game state)
//! - `math`: 2D vector/angle helpers used by everything else
//! - `audio`: pitch-cue interface consumed by the presentation layer
//! - `config`: Data-driven world configuration
//!
//! The crate is headless: a host loop feeds per-frame timestamps and decoded
//! gestures into [`sim::tick`] and drains [`sim::GameEvent`]s to drive its
//! renderer and mixer.

pub mod audio;
pub mod config;
pub mod math;
pub mod palette;
pub mod sim;

pub use config::WorldConfig;
pub use palette::Color;

/// Game tuning constants
pub mod consts {
    /// Default streaming-cell (screen) size, portrait
    pub const WORLD_WIDTH: f32 = 400.0;
    pub const WORLD_HEIGHT: f32 = 600.0;

    /// Base orbital speed in degrees per second
    pub const BASE_ORBIT_SPEED: f32 = 90.0;
    /// Cap on how fast the facing angle turns while orbiting (degrees/second)
    pub const FACING_TURN_SPEED: f32 = 120.0;

    /// Nominal planet radius bounds (spawn parameters land in 12..=66; the
    /// upper constant is deliberately loose)
    pub const MIN_PLANET_RADIUS: f32 = 12.0;
    pub const MAX_PLANET_RADIUS: f32 = 70.0;

    /// Ambient planets kept alive per off-screen cell
    pub const PLANETS_PER_CELL: usize = 3;
    /// Planets placed at predetermined positions when a world starts
    pub const INITIAL_PLANETS: usize = 5;

    /// Number of pitch steps for the touched-planet cue
    pub const PITCH_STEPS: u8 = 12;

    /// The player squashes down to 1/3 scale at full slingshot stretch
    pub const MAX_DRAG_SQUASH: f32 = 3.0;
    /// Time for the scale to snap back to 1x after a launch (seconds)
    pub const SCALE_RECOVER_SECS: f32 = 0.15;
}
