//! Core simulation module - pure, deterministic, and testable
//!
//! This crate holds everything that decides *what* is on screen: the maze, the
//! tile map, the player and the ray caster. It has **no dependencies** on the
//! terminal, so every piece can be exercised from plain unit tests.
//!
//! # Module Structure
//!
//! - [`grid`]: flat row-major tile map with bounds-checked lookups
//! - [`maze`]: cell graph, depth-first carver and corridor expansion
//! - [`rng`]: seeded LCG used by the carver
//! - [`player`]: position/heading and end-point collision
//! - [`raycast`]: fixed-step ray marching, seam detection and shading bands
//! - [`editor`]: tile cursor for the map editor
//! - [`presets`]: hand-drawn maps
//! - [`game_state`]: owns all of the above and applies [`GameAction`]s
//! - [`timer`]: wall-clock frame delta
//!
//! # Example
//!
//! ```
//! use maze_walker_core::GameState;
//! use maze_walker_types::{GameAction, GameConfig};
//!
//! let mut game = GameState::new(GameConfig { seed: Some(7), ..GameConfig::default() });
//! assert_eq!(game.map().width(), 31);
//!
//! game.apply_action(GameAction::RotateRight, 0.01);
//!
//! let mut columns = Vec::new();
//! game.project_frame(40, 20, &mut columns);
//! assert_eq!(columns.len(), 41);
//! ```
//!
//! [`GameAction`]: maze_walker_types::GameAction

pub mod editor;
pub mod game_state;
pub mod grid;
pub mod maze;
pub mod player;
pub mod presets;
pub mod raycast;
pub mod rng;
pub mod timer;

pub use maze_walker_types as types;

// Re-export commonly used types for convenience
pub use editor::EditorCursor;
pub use game_state::GameState;
pub use grid::TileMap;
pub use maze::{expand, CellFlags, CellGraph, Direction, MazeGenerator};
pub use player::Player;
pub use presets::preset_map;
pub use raycast::{
    floor_shade, vertical_split, wall_shade, ColumnProjection, FloorShade, RayCaster, RayHit,
    Span, WallShade,
};
pub use rng::{seed_from_clock, SimpleRng};
pub use timer::FrameTimer;
