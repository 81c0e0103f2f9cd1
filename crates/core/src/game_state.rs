//! Game state module - the single owner of all simulation state
//!
//! Ties together the maze generator, the tile map, the player and the editor
//! cursor, and dispatches [`GameAction`]s according to the current [`Mode`].
//! Renderers borrow it read-only; nothing here touches the terminal.

use crate::editor::EditorCursor;
use crate::grid::TileMap;
use crate::maze::{expand, CellGraph, MazeGenerator};
use crate::player::Player;
use crate::presets::{preset_map, PRESET_START};
use crate::raycast::{ColumnProjection, RayCaster};
use crate::rng::seed_from_clock;
use crate::types::{
    GameAction, GameConfig, GameEvent, MapPreset, Mode, Tile, MAZE_START, MAZE_START_ANGLE,
};

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    graph: CellGraph,
    map: TileMap,
    generator: MazeGenerator,
    caster: RayCaster,
    player: Player,
    mode: Mode,
    cursor: EditorCursor,
    running: bool,
    /// Seed of the most recent maze
    seed: u32,
    /// Number of mazes carved this session
    generation: u32,
    last_event: Option<GameEvent>,
}

impl GameState {
    /// Build the starting map described by `config`.
    ///
    /// A generated maze uses `config.seed` when set, otherwise a clock seed.
    pub fn new(config: GameConfig) -> Self {
        let config = config.sanitized();
        let seed = config.seed.unwrap_or_else(seed_from_clock);
        let fov = config.fov();

        let (map, player) = match preset_map(config.preset) {
            Some(map) => {
                let (x, y, angle) = PRESET_START;
                let player = Player::new(x, y, angle, config.move_speed(), config.rotate_speed());
                (map, player)
            }
            None => {
                let (x, y) = MAZE_START;
                let player = Player::new(
                    x,
                    y,
                    MAZE_START_ANGLE,
                    config.move_speed(),
                    config.rotate_speed(),
                );
                (TileMap::new(0, 0), player)
            }
        };

        let mut state = Self {
            graph: CellGraph::new(config.maze_width, config.maze_height),
            caster: RayCaster::for_map(fov, &map),
            map,
            generator: MazeGenerator::new(seed),
            player,
            mode: Mode::Navigate,
            cursor: EditorCursor::new(),
            running: true,
            seed,
            generation: 0,
            last_event: None,
            config,
        };

        if state.config.preset == MapPreset::Maze {
            state.regenerate_with_seed(seed);
        }
        state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn map(&self) -> &TileMap {
        &self.map
    }

    /// Raw map access for editing tools
    pub fn map_mut(&mut self) -> &mut TileMap {
        &mut self.map
    }

    pub fn graph(&self) -> &CellGraph {
        &self.graph
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn caster(&self) -> &RayCaster {
        &self.caster
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn cursor(&self) -> EditorCursor {
        self.cursor
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Take and clear the event produced by the last action.
    pub fn take_last_event(&mut self) -> Option<GameEvent> {
        self.last_event.take()
    }

    /// Player tile, if the player is inside the map
    pub fn player_tile(&self) -> Option<(usize, usize)> {
        self.player.tile(&self.map)
    }

    /// Carve a new maze from `seed`, replacing the current map.
    ///
    /// The player returns to the start tile; the heading is kept.
    pub fn regenerate_with_seed(&mut self, seed: u32) {
        self.graph = CellGraph::new(self.config.maze_width, self.config.maze_height);
        self.generator.carve(&mut self.graph, seed);
        self.map = expand(&self.graph, self.config.path_width);
        self.caster = RayCaster::for_map(self.config.fov(), &self.map);

        let (x, y) = MAZE_START;
        self.player.place(x, y);
        self.cursor.clamp_to(self.map.width(), self.map.height());
        self.seed = seed;
        self.generation += 1;

        self.last_event = Some(GameEvent::MazeGenerated {
            seed,
            map_width: self.map.width(),
            map_height: self.map.height(),
            open_tiles: self.map.open_count(),
        });
    }

    /// Carve a new maze from a fresh clock seed.
    pub fn regenerate(&mut self) {
        self.regenerate_with_seed(seed_from_clock());
    }

    /// Apply an action; `dt` is the frame delta in seconds.
    ///
    /// Returns true when the action changed state. Actions that do not belong to
    /// the current mode are ignored.
    pub fn apply_action(&mut self, action: GameAction, dt: f32) -> bool {
        if action == GameAction::Quit {
            self.running = false;
            self.last_event = Some(GameEvent::Quit);
            return true;
        }
        if action == GameAction::ToggleEditor {
            self.toggle_mode();
            return true;
        }

        match self.mode {
            Mode::Navigate => self.apply_navigation(action, dt),
            Mode::Edit => self.apply_edit(action),
        }
    }

    /// Switch modes. Entering the editor resets the cursor; the player heading is kept.
    fn toggle_mode(&mut self) {
        self.mode = self.mode.toggle();
        if self.mode == Mode::Edit {
            self.cursor = EditorCursor::new();
        }
        self.last_event = Some(GameEvent::ModeChanged(self.mode));
    }

    fn apply_navigation(&mut self, action: GameAction, dt: f32) -> bool {
        match action {
            GameAction::RotateLeft => {
                self.player.rotate(-1.0, dt);
                true
            }
            GameAction::RotateRight => {
                self.player.rotate(1.0, dt);
                true
            }
            GameAction::MoveForward => self.step_player(1.0, dt),
            GameAction::MoveBackward => self.step_player(-1.0, dt),
            _ => false,
        }
    }

    fn step_player(&mut self, direction: f32, dt: f32) -> bool {
        let moved = self.player.advance(&self.map, direction, dt);
        if !moved {
            self.last_event = Some(GameEvent::MoveRejected {
                x: self.player.x,
                y: self.player.y,
            });
        }
        moved
    }

    fn apply_edit(&mut self, action: GameAction) -> bool {
        let (w, h) = (self.map.width(), self.map.height());
        match action {
            GameAction::CursorUp => self.cursor.step(0, -1, w, h),
            GameAction::CursorDown => self.cursor.step(0, 1, w, h),
            GameAction::CursorLeft => self.cursor.step(-1, 0, w, h),
            GameAction::CursorRight => self.cursor.step(1, 0, w, h),
            GameAction::PlaceWall => return self.edit_tile(Tile::Wall),
            GameAction::ClearWall => return self.edit_tile(Tile::Open),
            GameAction::Teleport => return self.teleport_to_cursor(),
            GameAction::Regenerate => self.regenerate(),
            GameAction::ResetRoom => self.reset_room(),
            _ => return false,
        }
        true
    }

    fn edit_tile(&mut self, tile: Tile) -> bool {
        let EditorCursor { x, y } = self.cursor;
        if self.player_tile() == Some((x, y)) {
            self.last_event = Some(GameEvent::EditIgnored { x, y });
            return false;
        }
        if !self.map.set(x, y, tile) {
            return false;
        }
        self.last_event = Some(GameEvent::TileEdited { x, y, tile });
        true
    }

    fn teleport_to_cursor(&mut self) -> bool {
        let EditorCursor { x, y } = self.cursor;
        if self.map.get(x, y) != Some(Tile::Open) {
            self.last_event = Some(GameEvent::TeleportRejected { x, y });
            return false;
        }
        self.player.place(x as f32 + 0.5, y as f32 + 0.5);
        self.last_event = Some(GameEvent::Teleported { x, y });
        true
    }

    fn reset_room(&mut self) {
        self.map.reset_to_room();
        if !self.map.is_passable(self.player.x, self.player.y) {
            let (x, y) = MAZE_START;
            self.player.place(x, y);
        }
        self.last_event = Some(GameEvent::RoomReset);
    }

    /// Project every screen column for the current player view.
    pub fn project_frame(
        &self,
        screen_width: u16,
        screen_height: u16,
        out: &mut Vec<ColumnProjection>,
    ) {
        self.caster
            .project_frame(&self.map, &self.player, screen_width, screen_height, out);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig {
            seed: Some(1),
            ..GameConfig::default()
        })
    }
}
