//! Terminal maze walker (default binary).
//!
//! Carves a maze, then walks it in first person. `M` toggles the map editor,
//! `Q`/`Esc` quits. Settings come from `MAZE_*` environment variables; command
//! line flags override them.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;

use maze_walker::core::{FrameTimer, GameState};
use maze_walker::input::{handle_key_event, InputSource, TerminalInput};
use maze_walker::journal::Journal;
use maze_walker::term::{FrameBuffer, TerminalRenderer, Viewport, WorldView};
use maze_walker::types::{GameConfig, MapPreset};

/// Command line overrides for [`GameConfig`].
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Maze width in cells
    #[arg(long, value_name = "CELLS")]
    maze_width: Option<usize>,

    /// Maze height in cells
    #[arg(long, value_name = "CELLS")]
    maze_height: Option<usize>,

    /// Corridor width in tiles
    #[arg(long, value_name = "TILES")]
    path_width: Option<usize>,

    /// Seed for the first maze (default: clock)
    #[arg(long)]
    seed: Option<u32>,

    /// Start map: maze, classic or arena
    #[arg(long, value_parser = parse_preset)]
    preset: Option<MapPreset>,

    /// Field of view in degrees
    #[arg(long, value_name = "DEG")]
    fov: Option<f32>,

    /// Movement speed in tiles per second
    #[arg(long)]
    move_speed: Option<f32>,

    /// Rotation speed in radians per second
    #[arg(long)]
    rotate_speed: Option<f32>,

    /// Append a JSON-lines session journal to FILE
    #[arg(long, value_name = "FILE")]
    log_path: Option<PathBuf>,
}

impl Args {
    fn apply(self, mut config: GameConfig) -> GameConfig {
        if let Some(v) = self.maze_width {
            config.maze_width = v;
        }
        if let Some(v) = self.maze_height {
            config.maze_height = v;
        }
        if let Some(v) = self.path_width {
            config.path_width = v;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(v) = self.preset {
            config.preset = v;
        }
        if self.fov.is_some() {
            config.fov_deg = self.fov;
        }
        if let Some(v) = self.move_speed.filter(|v| v.is_finite() && *v > 0.0) {
            config.move_speed = Some(v);
        }
        if let Some(v) = self.rotate_speed.filter(|v| v.is_finite() && *v > 0.0) {
            config.rotate_speed = Some(v);
        }
        if let Some(path) = self.log_path {
            config.log_path = Some(path.to_string_lossy().into_owned());
        }
        config.sanitized()
    }
}

fn parse_preset(s: &str) -> Result<MapPreset, String> {
    MapPreset::from_str(s).ok_or_else(|| format!("unknown preset `{s}` (maze, classic, arena)"))
}

fn main() -> Result<()> {
    let config = Args::parse().apply(GameConfig::from_env());
    let mut journal = Journal::from_config(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = term.ensure_color().and_then(|()| run(&mut term, &mut journal, config));

    // Always try to restore terminal state before reporting.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, journal: &mut Journal, config: GameConfig) -> Result<()> {
    journal.session_start(&config);

    let mut state = GameState::new(config);
    let mut input = TerminalInput::new();
    let mut view = WorldView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut timer = FrameTimer::new(Instant::now());

    if let Some(ev) = state.take_last_event() {
        journal.event(&ev);
    }

    while state.is_running() {
        let dt = timer.tick(Instant::now());

        if let Some(key) = input.poll_key()? {
            if let Some(action) = handle_key_event(key, state.mode()) {
                state.apply_action(action, dt);
                if let Some(ev) = state.take_last_event() {
                    journal.event(&ev);
                }
            }
        }

        let (w, h) = term.size();
        view.render_into(&state, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;
    }

    journal.session_end(timer.frames());
    Ok(())
}
