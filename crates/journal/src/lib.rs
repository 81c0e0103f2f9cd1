//! Session journal: one JSON object per line.
//!
//! The terminal belongs to the renderer while the game runs, so diagnostics go to
//! an optional append-only file instead (`MAZE_LOG_PATH` / `--log-path`).
//! Every record carries `type` and `ts` (milliseconds since the Unix epoch).
//!
//! Writes are buffered. The first I/O failure disables the journal; the game keeps
//! running.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub use maze_walker_types as types;

use types::{GameConfig, GameEvent};

/// One journal line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Record {
    SessionStart {
        ts: u64,
        preset: String,
        maze_width: usize,
        maze_height: usize,
        path_width: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        seed: Option<u32>,
        fov_deg: f32,
        move_speed: f32,
        rotate_speed: f32,
    },
    ModeChanged {
        ts: u64,
        mode: String,
    },
    MoveRejected {
        ts: u64,
        x: f32,
        y: f32,
    },
    MazeGenerated {
        ts: u64,
        seed: u32,
        map_width: usize,
        map_height: usize,
        open_tiles: usize,
    },
    TileEdited {
        ts: u64,
        x: usize,
        y: usize,
        tile: String,
    },
    EditIgnored {
        ts: u64,
        x: usize,
        y: usize,
    },
    Teleported {
        ts: u64,
        x: usize,
        y: usize,
    },
    TeleportRejected {
        ts: u64,
        x: usize,
        y: usize,
    },
    RoomReset {
        ts: u64,
    },
    Quit {
        ts: u64,
    },
    SessionEnd {
        ts: u64,
        frames: u64,
    },
}

impl Record {
    pub fn session_start(config: &GameConfig, ts: u64) -> Self {
        Record::SessionStart {
            ts,
            preset: config.preset.as_str().to_string(),
            maze_width: config.maze_width,
            maze_height: config.maze_height,
            path_width: config.path_width,
            seed: config.seed,
            fov_deg: config.fov().to_degrees(),
            move_speed: config.move_speed(),
            rotate_speed: config.rotate_speed(),
        }
    }

    pub fn from_event(event: &GameEvent, ts: u64) -> Self {
        match *event {
            GameEvent::ModeChanged(mode) => Record::ModeChanged {
                ts,
                mode: mode.as_str().to_string(),
            },
            GameEvent::MoveRejected { x, y } => Record::MoveRejected { ts, x, y },
            GameEvent::MazeGenerated {
                seed,
                map_width,
                map_height,
                open_tiles,
            } => Record::MazeGenerated {
                ts,
                seed,
                map_width,
                map_height,
                open_tiles,
            },
            GameEvent::TileEdited { x, y, tile } => Record::TileEdited {
                ts,
                x,
                y,
                tile: tile.as_str().to_string(),
            },
            GameEvent::EditIgnored { x, y } => Record::EditIgnored { ts, x, y },
            GameEvent::Teleported { x, y } => Record::Teleported { ts, x, y },
            GameEvent::TeleportRejected { x, y } => Record::TeleportRejected { ts, x, y },
            GameEvent::RoomReset => Record::RoomReset { ts },
            GameEvent::Quit => Record::Quit { ts },
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Record::SessionStart { .. } => "session_start",
            Record::ModeChanged { .. } => "mode_changed",
            Record::MoveRejected { .. } => "move_rejected",
            Record::MazeGenerated { .. } => "maze_generated",
            Record::TileEdited { .. } => "tile_edited",
            Record::EditIgnored { .. } => "edit_ignored",
            Record::Teleported { .. } => "teleported",
            Record::TeleportRejected { .. } => "teleport_rejected",
            Record::RoomReset { .. } => "room_reset",
            Record::Quit { .. } => "quit",
            Record::SessionEnd { .. } => "session_end",
        }
    }
}

/// Append-only JSON-lines writer. A disabled journal drops every record.
pub struct Journal {
    out: Option<BufWriter<File>>,
    buf: Vec<u8>,
}

impl Journal {
    pub fn disabled() -> Self {
        Self {
            out: None,
            buf: Vec::new(),
        }
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open journal {}", path.display()))?;
        Ok(Self {
            out: Some(BufWriter::new(file)),
            buf: Vec::with_capacity(256),
        })
    }

    /// Open the configured journal, or a disabled one when no path is set.
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        match config.log_path.as_deref() {
            Some(path) if !path.trim().is_empty() => Self::open(path),
            _ => Ok(Self::disabled()),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.out.is_some()
    }

    pub fn session_start(&mut self, config: &GameConfig) {
        self.write(&Record::session_start(config, now_ms()));
    }

    pub fn event(&mut self, event: &GameEvent) {
        self.write(&Record::from_event(event, now_ms()));
    }

    pub fn session_end(&mut self, frames: u64) {
        self.write(&Record::SessionEnd {
            ts: now_ms(),
            frames,
        });
        self.flush();
    }

    pub fn write(&mut self, record: &Record) {
        let Some(out) = self.out.as_mut() else {
            return;
        };

        self.buf.clear();
        if serde_json::to_writer(&mut self.buf, record).is_err() {
            return;
        }
        self.buf.push(b'\n');

        if out.write_all(&self.buf).is_err() {
            self.out = None;
        }
    }

    pub fn flush(&mut self) {
        if let Some(out) = self.out.as_mut() {
            if out.flush().is_err() {
                self.out = None;
            }
        }
    }
}

impl Drop for Journal {
    fn drop(&mut self) {
        self.flush();
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
