//! Planets and their procedural dispersal rings

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::consts::{MAX_PLANET_RADIUS, MIN_PLANET_RADIUS};
use crate::palette::Color;

/// Lifecycle of a planet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanetPhase {
    /// Untouched, eligible for streaming culls
    Active,
    /// The player has orbited it at least once; its cue has sounded
    Touched,
    /// Culled by streaming, awaiting compaction
    Destroyed,
}

/// One decorative ring in a planet's dispersal halo
#[derive(Debug, Clone, PartialEq)]
pub struct DispersalRing {
    pub radius: f32,
    pub line_width: f32,
    pub stroke: Color,
    /// Per-ring positional wander target, relative to the planet center
    pub drift: Vec2,
    /// Phase offset for the ring's wander animation (seconds)
    pub anim_secs: f32,
    /// Amplitude of the ring's scale pulse
    pub scale_pulse: f32,
}

/// A planet in the streamed field
#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    pub id: u32,
    pub position: Vec2,
    /// Outer radius, inner core plus all rings
    pub radius: f32,
    /// Set once the player has ever hooked onto this planet; grabbed planets
    /// are exempt from streaming culls
    pub grabbed: bool,
    pub phase: PlanetPhase,
    pub fill: Color,
    /// Period of the core's idle scale pulse (seconds)
    pub pulse_secs: f32,
    pub rings: Vec<DispersalRing>,
}

impl Planet {
    /// Spawn a planet with randomized geometry: core radius 2..7, ring
    /// spacing 2..6, and 5..13 rings.
    pub fn spawn(id: u32, position: Vec2, palette: &[Color], rng: &mut Pcg32) -> Self {
        let inner = 2.0 + rng.random_range(0..5) as f32;
        let spacing = 2.0 + rng.random_range(0..4) as f32;
        let ring_count = 5 + rng.random_range(0..8u32);
        Self::with_params(id, position, inner, spacing, ring_count, palette, rng)
    }

    /// Spawn with explicit geometry parameters
    pub fn with_params(
        id: u32,
        position: Vec2,
        inner: f32,
        spacing: f32,
        ring_count: u32,
        palette: &[Color],
        rng: &mut Pcg32,
    ) -> Self {
        let fill = if palette.is_empty() {
            Color::rgb(1.0, 1.0, 1.0)
        } else {
            palette[rng.random_range(0..palette.len())]
        };
        let pulse_secs = (1000 + rng.random_range(0..1500)) as f32 / 1000.0;

        let mut rings = Vec::with_capacity(ring_count as usize);
        for i in 0..ring_count {
            let dx = rng.random_range(0.0..inner);
            let dy = rng.random_range(0.0..inner);
            rings.push(DispersalRing {
                radius: inner + spacing * i as f32,
                line_width: ((inner - 10.0) / 2.0).max(1.0),
                stroke: Color::rgb(dx / inner, dy / inner, (dx + dy) / inner / 2.0),
                drift: Vec2::new(dx, dy),
                anim_secs: rng.random_range(0..500) as f32 / 1000.0,
                scale_pulse: rng.random_range(0..10) as f32 / 5.0,
            });
        }

        Self {
            id,
            position,
            radius: inner + ring_count as f32 * spacing,
            grabbed: false,
            phase: PlanetPhase::Active,
            fill,
            pulse_secs,
            rings,
        }
    }

    /// Mark the planet as hooked; idempotent
    pub fn grab(&mut self) {
        self.grabbed = true;
    }

    /// One-shot transition to `Touched`. Returns the pitch step for the
    /// planet's cue the first time, `None` thereafter.
    pub fn touched(&mut self) -> Option<u8> {
        if self.phase != PlanetPhase::Active {
            return None;
        }
        self.phase = PlanetPhase::Touched;
        Some(pitch_for_radius(self.radius))
    }

    pub fn destroy(&mut self) {
        self.phase = PlanetPhase::Destroyed;
    }

    pub fn is_destroyed(&self) -> bool {
        self.phase == PlanetPhase::Destroyed
    }
}

/// Map a planet radius to a pitch step in [0, 11]. Smaller planets sound
/// higher.
pub fn pitch_for_radius(radius: f32) -> u8 {
    let step = 11.0 - (radius - MIN_PLANET_RADIUS) / MAX_PLANET_RADIUS * 11.0;
    step.round().clamp(0.0, 11.0) as u8
}
