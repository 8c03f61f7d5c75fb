//! World configuration
//!
//! Everything tunable about a world lives here so hosts can inject their own
//! screen dimensions and palette instead of reaching for globals.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts;
use crate::palette::{self, Color};

/// Parameters a host supplies when creating a world
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Streaming-cell width (one screen)
    pub width: f32,
    /// Streaming-cell height (one screen)
    pub height: f32,
    /// Ambient planets kept alive per off-screen cell
    pub planets_per_cell: usize,
    /// Fill colors planets pick from
    pub palette: Vec<Color>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: consts::WORLD_WIDTH,
            height: consts::WORLD_HEIGHT,
            planets_per_cell: consts::PLANETS_PER_CELL,
            palette: palette::default_palette(),
        }
    }
}

impl WorldConfig {
    /// Player sprite size derived from the screen width, slightly taller
    /// than wide
    pub fn player_size(&self) -> Vec2 {
        Vec2::new(self.width / 10.0, self.width / 9.1)
    }

    /// Load a config from a JSON file, falling back to defaults if the file
    /// is missing or malformed
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(config) => {
                    log::info!("Loaded world config from {}", path.display());
                    config
                }
                Err(err) => {
                    log::warn!("Ignoring malformed config {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No config at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Save the config as pretty JSON
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }
}
