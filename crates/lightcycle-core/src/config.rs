use serde::{Deserialize, Serialize};

/// Data-driven configuration for a light-cycle match.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Arena width (playfield units).
    pub arena_width: f32,
    /// Arena height; the excess over the width becomes the score header.
    pub arena_height: f32,
    /// Suppress rendering and frame pacing.
    pub headless: bool,
    /// Ticks per game-clock second.
    pub tick_rate: f32,
    /// Base step per tick.
    pub base_speed: f32,
    /// Boost activations each player gets per round.
    pub boosts_per_round: u32,
    /// Thickness of the boundary walls.
    pub wall_thickness: f32,
    /// Distance from the side walls to each spawn point.
    pub spawn_margin: f32,
    /// Stop a headless run after this many ticks.
    pub max_ticks: Option<u64>,
    /// Bundled pilot name for seat one ("random" or "scout").
    pub pilot_one: Option<String>,
    /// Bundled pilot name for seat two.
    pub pilot_two: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena_width: 600.0,
            arena_height: 660.0,
            headless: false,
            tick_rate: 60.0,
            base_speed: 2.0,
            boosts_per_round: 3,
            wall_thickness: 15.0,
            spawn_margin: 50.0,
            max_ticks: None,
            pilot_one: None,
            pilot_two: None,
        }
    }
}

impl GameConfig {
    /// Load config from environment or TOML file, falling back to defaults.
    pub fn load() -> Self {
        if let Ok(path) = std::env::var("LIGHTCYCLE_CONFIG")
            && let Ok(contents) = std::fs::read_to_string(&path)
            && let Ok(config) = toml::from_str::<Self>(&contents)
        {
            return config;
        }
        if let Ok(contents) = std::fs::read_to_string("config/lightcycle.toml")
            && let Ok(config) = toml::from_str::<Self>(&contents)
        {
            return config;
        }
        Self::default()
    }
}
