//! Shared types module - constants, tiles, modes and actions
//!
//! Everything here is plain data with no external dependencies, so it can be used
//! from the simulation core, the terminal renderer and the input layer alike.
//!
//! # Map Dimensions
//!
//! A logical maze of `Mw x Mh` cells expands into a tile map of
//! `Mw * (path_width + 1) + 1` by `Mh * (path_width + 1) + 1` tiles:
//!
//! | Maze | Path width | Map |
//! |------|------------|-----|
//! | 10x10 | 2 | 31x31 |
//! | 10x10 | 1 | 21x21 |
//! | 4x3 | 3 | 17x13 |
//!
//! # Projection Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `RAY_STEP` | 0.1 | Ray march increment in map units |
//! | `BOUNDARY_ANGLE` | 0.005 | Max ray/corner deviation (radians) for a tile seam |
//! | `MAZE_FOV_DEG` | 60 | Field of view for generated mazes |
//! | `PRESET_FOV_DEG` | 45 | Field of view for the hand-drawn maps |
//!
//! # Speeds
//!
//! | Map | Move (units/s) | Turn (rad/s) |
//! |-----|----------------|--------------|
//! | generated maze | 150 | 70 |
//! | hand-drawn preset | 100 | 50 |
//!
//! # Examples
//!
//! ```
//! use maze_walker_types::{expanded_size, GameAction, Mode, Tile};
//!
//! assert_eq!(expanded_size(10, 2), 31);
//! assert_eq!(Tile::from_char('#'), Tile::Wall);
//! assert_eq!(GameAction::from_str("regenerate"), Some(GameAction::Regenerate));
//! assert_eq!(Mode::Navigate.toggle(), Mode::Edit);
//! ```

pub mod config;

pub use config::{GameConfig, MapPreset};

/// Default maze width in logical cells
pub const DEFAULT_MAZE_WIDTH: usize = 10;

/// Default maze height in logical cells
pub const DEFAULT_MAZE_HEIGHT: usize = 10;

/// Default corridor width in map tiles
pub const DEFAULT_PATH_WIDTH: usize = 2;

/// Ray march increment in map units
pub const RAY_STEP: f32 = 0.1;

/// Angular threshold (radians) under which a ray counts as hitting a tile corner
pub const BOUNDARY_ANGLE: f32 = 0.005;

/// Field of view for generated mazes, in degrees
pub const MAZE_FOV_DEG: f32 = 60.0;

/// Field of view for the hand-drawn preset maps, in degrees
pub const PRESET_FOV_DEG: f32 = 45.0;

/// Forward/backward speed in map units per second
pub const DEFAULT_MOVE_SPEED: f32 = 150.0;

/// Turn speed in radians per second
pub const DEFAULT_ROTATE_SPEED: f32 = 70.0;

/// Move speed on the hand-drawn preset maps
pub const PRESET_MOVE_SPEED: f32 = 100.0;

/// Turn speed on the hand-drawn preset maps
pub const PRESET_ROTATE_SPEED: f32 = 50.0;

/// Largest expanded map side, in tiles. Keeps sizes well inside `u16` screen math.
pub const MAX_MAP_SIZE: usize = 1024;

/// Largest corridor width, in tiles
pub const MAX_PATH_WIDTH: usize = 16;

/// Player spawn point inside the origin cell of a generated maze
pub const MAZE_START: (f32, f32) = (1.0, 1.0);

/// Initial heading for generated mazes (facing +X)
pub const MAZE_START_ANGLE: f32 = std::f32::consts::FRAC_PI_2;

/// Number of map tiles along one axis after corridor widening.
pub const fn expanded_size(cells: usize, path_width: usize) -> usize {
    cells * (path_width + 1) + 1
}


/// A single tile of the expanded map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tile {
    #[default]
    Wall,
    Open,
}

impl Tile {
    /// Parse a map character: `#` is a wall, anything else is floor
    pub fn from_char(ch: char) -> Self {
        if ch == '#' {
            Tile::Wall
        } else {
            Tile::Open
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Open => ' ',
        }
    }

    pub fn is_wall(&self) -> bool {
        matches!(self, Tile::Wall)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tile::Wall => "wall",
            Tile::Open => "open",
        }
    }
}

/// Top-level interaction mode
///
/// - **Navigate**: walk the maze in first person
/// - **Edit**: move a cursor over the map and change tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Navigate,
    Edit,
}

impl Mode {
    /// The only transition: Navigate <-> Edit
    pub fn toggle(&self) -> Self {
        match self {
            Mode::Navigate => Mode::Edit,
            Mode::Edit => Mode::Navigate,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Navigate => "navigate",
            Mode::Edit => "edit",
        }
    }
}

/// Actions that drive the simulation
///
/// Navigation actions are scaled by the frame delta; editor actions are discrete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Turn counter-clockwise (heading decreases)
    RotateLeft,
    /// Turn clockwise (heading increases)
    RotateRight,
    MoveForward,
    MoveBackward,
    /// Switch between navigation and the map editor
    ToggleEditor,
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    /// Turn the tile under the cursor into a wall
    PlaceWall,
    /// Turn the tile under the cursor into floor
    ClearWall,
    /// Move the player onto the tile under the cursor
    Teleport,
    /// Carve a brand new maze
    Regenerate,
    /// Replace the map with an empty room bordered by walls
    ResetRoom,
    Quit,
}

impl GameAction {
    /// Parse action from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use maze_walker_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveForward"), Some(GameAction::MoveForward));
    /// assert_eq!(GameAction::from_str("RESETROOM"), Some(GameAction::ResetRoom));
    /// assert_eq!(GameAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "rotateleft" => Some(GameAction::RotateLeft),
            "rotateright" => Some(GameAction::RotateRight),
            "moveforward" => Some(GameAction::MoveForward),
            "movebackward" => Some(GameAction::MoveBackward),
            "toggleeditor" => Some(GameAction::ToggleEditor),
            "cursorup" => Some(GameAction::CursorUp),
            "cursordown" => Some(GameAction::CursorDown),
            "cursorleft" => Some(GameAction::CursorLeft),
            "cursorright" => Some(GameAction::CursorRight),
            "placewall" => Some(GameAction::PlaceWall),
            "clearwall" => Some(GameAction::ClearWall),
            "teleport" => Some(GameAction::Teleport),
            "regenerate" => Some(GameAction::Regenerate),
            "resetroom" => Some(GameAction::ResetRoom),
            "quit" => Some(GameAction::Quit),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::RotateLeft => "rotateLeft",
            GameAction::RotateRight => "rotateRight",
            GameAction::MoveForward => "moveForward",
            GameAction::MoveBackward => "moveBackward",
            GameAction::ToggleEditor => "toggleEditor",
            GameAction::CursorUp => "cursorUp",
            GameAction::CursorDown => "cursorDown",
            GameAction::CursorLeft => "cursorLeft",
            GameAction::CursorRight => "cursorRight",
            GameAction::PlaceWall => "placeWall",
            GameAction::ClearWall => "clearWall",
            GameAction::Teleport => "teleport",
            GameAction::Regenerate => "regenerate",
            GameAction::ResetRoom => "resetRoom",
            GameAction::Quit => "quit",
        }
    }
}

/// Core-side event emitted by an applied action.
///
/// The frame loop forwards these to the journal; the simulation itself never
/// reports errors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    ModeChanged(Mode),
    /// A move would have ended on a wall or outside the map and was reverted
    MoveRejected { x: f32, y: f32 },
    MazeGenerated {
        seed: u32,
        map_width: usize,
        map_height: usize,
        open_tiles: usize,
    },
    TileEdited { x: usize, y: usize, tile: Tile },
    /// Edit targeted the tile the player stands on
    EditIgnored { x: usize, y: usize },
    Teleported { x: usize, y: usize },
    TeleportRejected { x: usize, y: usize },
    RoomReset,
    Quit,
}

impl GameEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            GameEvent::ModeChanged(_) => "mode_changed",
            GameEvent::MoveRejected { .. } => "move_rejected",
            GameEvent::MazeGenerated { .. } => "maze_generated",
            GameEvent::TileEdited { .. } => "tile_edited",
            GameEvent::EditIgnored { .. } => "edit_ignored",
            GameEvent::Teleported { .. } => "teleported",
            GameEvent::TeleportRejected { .. } => "teleport_rejected",
            GameEvent::RoomReset => "room_reset",
            GameEvent::Quit => "quit",
        }
    }
}
