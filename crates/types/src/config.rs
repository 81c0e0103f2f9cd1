//! Runtime configuration.
//!
//! Values come from defaults, then environment variables, then (in the binary)
//! command-line flags.

use crate::{
    DEFAULT_MAZE_HEIGHT, DEFAULT_MAZE_WIDTH, DEFAULT_MOVE_SPEED, DEFAULT_PATH_WIDTH,
    DEFAULT_ROTATE_SPEED, MAX_MAP_SIZE, MAX_PATH_WIDTH, MAZE_FOV_DEG, PRESET_FOV_DEG,
    PRESET_MOVE_SPEED, PRESET_ROTATE_SPEED,
};

/// Which map the session starts on.
///
/// - **Maze**: a freshly carved maze of the configured size
/// - **Classic**: hand-drawn 16x16 room
/// - **Arena**: hand-drawn 25x16 room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MapPreset {
    #[default]
    Maze,
    Classic,
    Arena,
}

impl MapPreset {
    /// Parse preset name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "maze" => Some(MapPreset::Maze),
            "classic" => Some(MapPreset::Classic),
            "arena" => Some(MapPreset::Arena),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MapPreset::Maze => "maze",
            MapPreset::Classic => "classic",
            MapPreset::Arena => "arena",
        }
    }

    /// Field of view used when none is configured
    pub fn default_fov_deg(&self) -> f32 {
        match self {
            MapPreset::Maze => MAZE_FOV_DEG,
            MapPreset::Classic | MapPreset::Arena => PRESET_FOV_DEG,
        }
    }

    pub fn default_move_speed(&self) -> f32 {
        match self {
            MapPreset::Maze => DEFAULT_MOVE_SPEED,
            MapPreset::Classic | MapPreset::Arena => PRESET_MOVE_SPEED,
        }
    }

    pub fn default_rotate_speed(&self) -> f32 {
        match self {
            MapPreset::Maze => DEFAULT_ROTATE_SPEED,
            MapPreset::Classic | MapPreset::Arena => PRESET_ROTATE_SPEED,
        }
    }
}

/// Session configuration
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub maze_width: usize,
    pub maze_height: usize,
    pub path_width: usize,
    /// Seed for the first maze; later regenerations always use a fresh clock seed
    pub seed: Option<u32>,
    pub preset: MapPreset,
    /// Field of view in degrees; `None` means the preset default
    pub fov_deg: Option<f32>,
    /// Map units per second; `None` means the preset default
    pub move_speed: Option<f32>,
    /// Radians per second; `None` means the preset default
    pub rotate_speed: Option<f32>,
    pub log_path: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            maze_width: DEFAULT_MAZE_WIDTH,
            maze_height: DEFAULT_MAZE_HEIGHT,
            path_width: DEFAULT_PATH_WIDTH,
            seed: None,
            preset: MapPreset::Maze,
            fov_deg: None,
            move_speed: None,
            rotate_speed: None,
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Create from environment variables.
    ///
    /// Unset or unparsable variables keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (used by `from_env` and tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let parsed = |key: &str| lookup(key).and_then(|s| s.trim().parse::<usize>().ok());
        let parsed_f32 = |key: &str| {
            lookup(key)
                .and_then(|s| s.trim().parse::<f32>().ok())
                .filter(|v| v.is_finite() && *v > 0.0)
        };

        let log_path = lookup("MAZE_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            maze_width: parsed("MAZE_WIDTH").unwrap_or(defaults.maze_width),
            maze_height: parsed("MAZE_HEIGHT").unwrap_or(defaults.maze_height),
            path_width: parsed("MAZE_PATH_WIDTH").unwrap_or(defaults.path_width),
            seed: lookup("MAZE_SEED").and_then(|s| s.trim().parse().ok()),
            preset: lookup("MAZE_PRESET")
                .and_then(|s| MapPreset::from_str(&s))
                .unwrap_or(defaults.preset),
            fov_deg: parsed_f32("MAZE_FOV_DEG"),
            move_speed: parsed_f32("MAZE_MOVE_SPEED"),
            rotate_speed: parsed_f32("MAZE_ROTATE_SPEED"),
            log_path,
        }
        .sanitized()
    }

    /// Clamp sizes so the expanded map is between 1 and [`MAX_MAP_SIZE`] tiles
    /// per side, and the field of view to (0, 180).
    pub fn sanitized(mut self) -> Self {
        self.path_width = self.path_width.clamp(1, MAX_PATH_WIDTH);
        let max_cells = (MAX_MAP_SIZE - 1) / (self.path_width + 1);
        self.maze_width = self.maze_width.clamp(1, max_cells);
        self.maze_height = self.maze_height.clamp(1, max_cells);
        self.fov_deg = self.fov_deg.map(|f| f.clamp(1.0, 179.0));
        self
    }

    /// Effective field of view in radians
    pub fn fov(&self) -> f32 {
        self.fov_deg
            .unwrap_or_else(|| self.preset.default_fov_deg())
            .to_radians()
    }

    /// Effective move speed
    pub fn move_speed(&self) -> f32 {
        self.move_speed
            .unwrap_or_else(|| self.preset.default_move_speed())
    }

    /// Effective turn speed
    pub fn rotate_speed(&self) -> f32 {
        self.rotate_speed
            .unwrap_or_else(|| self.preset.default_rotate_speed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = GameConfig::from_lookup(|_| None);
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.maze_width, 10);
        assert_eq!(config.path_width, 2);
    }

    #[test]
    fn environment_overrides_and_garbage_falls_back() {
        let config = GameConfig::from_lookup(lookup_from(&[
            ("MAZE_WIDTH", "6"),
            ("MAZE_HEIGHT", "not-a-number"),
            ("MAZE_SEED", "42"),
            ("MAZE_PRESET", "Classic"),
            ("MAZE_LOG_PATH", "  "),
        ]));
        assert_eq!(config.maze_width, 6);
        assert_eq!(config.maze_height, DEFAULT_MAZE_HEIGHT);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.preset, MapPreset::Classic);
        assert_eq!(config.log_path, None);
    }

    #[test]
    fn zero_sizes_are_clamped() {
        let config = GameConfig::from_lookup(lookup_from(&[
            ("MAZE_WIDTH", "0"),
            ("MAZE_PATH_WIDTH", "0"),
        ]));
        assert_eq!(config.maze_width, 1);
        assert_eq!(config.path_width, 1);
    }

    #[test]
    fn fov_defaults_follow_preset() {
        let mut config = GameConfig::default();
        assert!((config.fov() - std::f32::consts::FRAC_PI_3).abs() < 1e-6);
        config.preset = MapPreset::Arena;
        assert!((config.fov() - std::f32::consts::FRAC_PI_4).abs() < 1e-6);
        config.fov_deg = Some(90.0);
        assert!((config.fov() - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn huge_sizes_are_capped() {
        let max = usize::MAX.to_string();
        let config = GameConfig::from_lookup(lookup_from(&[
            ("MAZE_WIDTH", max.as_str()),
            ("MAZE_HEIGHT", "2"),
            ("MAZE_PATH_WIDTH", max.as_str()),
        ]));
        assert_eq!(config.path_width, MAX_PATH_WIDTH);
        assert_eq!(config.maze_height, 2);
        let side = crate::expanded_size(config.maze_width, config.path_width);
        assert!(side <= MAX_MAP_SIZE);
        assert!(config.maze_width > 1);

        let config = GameConfig {
            maze_width: usize::MAX,
            maze_height: usize::MAX,
            path_width: 2,
            ..GameConfig::default()
        }
        .sanitized();
        assert_eq!(config.maze_width, (MAX_MAP_SIZE - 1) / 3);
        assert!(crate::expanded_size(config.maze_height, 2) <= MAX_MAP_SIZE);
    }

    #[test]
    fn speeds_default_per_preset() {
        let mut config = GameConfig::default();
        assert_eq!(config.move_speed(), DEFAULT_MOVE_SPEED);
        assert_eq!(config.rotate_speed(), DEFAULT_ROTATE_SPEED);

        config.preset = MapPreset::Classic;
        assert_eq!(config.move_speed(), 100.0);
        assert_eq!(config.rotate_speed(), 50.0);

        let config = GameConfig::from_lookup(lookup_from(&[
            ("MAZE_PRESET", "arena"),
            ("MAZE_MOVE_SPEED", "12.5"),
            ("MAZE_ROTATE_SPEED", "-3"),
        ]));
        assert_eq!(config.move_speed(), 12.5);
        assert_eq!(config.rotate_speed(), PRESET_ROTATE_SPEED);
    }
}
