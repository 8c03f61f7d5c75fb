//! Color palette for planet fills

use serde::{Deserialize, Serialize};

/// RGBA color with components in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

/// The seven fill colors planets pick from, warm-to-cool.
pub fn default_palette() -> Vec<Color> {
    vec![
        Color::rgb(0.992, 0.722, 0.153),
        Color::rgb(0.894, 0.0, 0.349),
        Color::rgb(0.475, 0.063, 0.529),
        Color::rgb(0.349, 0.063, 0.357),
        Color::rgb(0.341, 0.624, 0.169),
        Color::rgb(0.239, 0.675, 0.969),
        Color::rgb(0.188, 0.098, 0.918),
    ]
}
