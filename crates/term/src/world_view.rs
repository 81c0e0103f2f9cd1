//! WorldView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, for a terminal of `cols x rows`:
//!
//! - row 0: status line (position and heading, or the editor banner)
//! - minimap at (1, 1), every map tile two columns wide
//! - perspective view `cols/2` wide and half as tall, vertically centred and
//!   pushed toward the right edge; drawn last so it sits on top of the minimap
//!
//! In edit mode the perspective view is hidden and the minimap shows the cursor.

use crate::core::{ColumnProjection, GameState, Span, WallShade};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::surface::{DisplaySurface, Region, Surface};
use crate::types::{Mode, Tile};

/// Banner shown on the status line while editing
pub const EDITOR_BANNER: &str = "EDIT MAP MODE (PRESS M TO SWITCH BACK TO GAME)";

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Screen regions for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorldLayout {
    pub minimap: Region,
    pub perspective: Region,
}

impl WorldLayout {
    pub fn compute(viewport: Viewport, map_width: usize, map_height: usize, tile_w: u16) -> Self {
        let minimap = Region::new(
            1,
            1,
            (map_width as u16).saturating_mul(tile_w),
            map_height as u16,
        );

        let screen_w = viewport.width / 2;
        let screen_h = (screen_w / 2).min(viewport.height.saturating_sub(1));
        // Keep row 0 for the status line.
        let start_y = (viewport.height.saturating_sub(screen_h) / 2).max(1);
        let start_x = (viewport.width.saturating_sub(screen_w) as f32 / 1.1) as u16;

        Self {
            minimap,
            perspective: Region::new(start_x, start_y, screen_w, screen_h),
        }
    }
}

const SKY: CellStyle = CellStyle::new(Rgb::gray(220), Rgb::gray(0));
const FLOOR: CellStyle = CellStyle::new(Rgb::new(90, 130, 200), Rgb::gray(0));
const FRAME: CellStyle = CellStyle::new(Rgb::gray(200), Rgb::gray(0));
const STATUS: CellStyle = CellStyle::new(Rgb::gray(230), Rgb::gray(0));
const MAP_WALL: CellStyle = CellStyle::new(Rgb::gray(0), Rgb::gray(235));
const MAP_OPEN: CellStyle = CellStyle::new(Rgb::gray(220), Rgb::gray(0));
const MAP_PLAYER: CellStyle = CellStyle::new(Rgb::gray(0), Rgb::new(230, 200, 40));
const MAP_CURSOR: CellStyle = CellStyle::new(Rgb::gray(0), Rgb::new(60, 110, 230));

/// Renders the first-person view, the minimap and the status line.
pub struct WorldView {
    /// Minimap tile width in terminal columns.
    tile_w: u16,
    /// Per-column projections, reused across frames.
    columns: Vec<ColumnProjection>,
}

impl Default for WorldView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2)
    }
}

impl WorldView {
    pub fn new(tile_w: u16) -> Self {
        Self {
            tile_w: tile_w.max(1),
            columns: Vec::new(),
        }
    }

    pub fn layout(&self, state: &GameState, viewport: Viewport) -> WorldLayout {
        WorldLayout::compute(
            viewport,
            state.map().width(),
            state.map().height(),
            self.tile_w,
        )
    }

    /// Projections from the most recent frame
    pub fn columns(&self) -> &[ColumnProjection] {
        &self.columns
    }

    /// Render the current state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&mut self, state: &GameState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(SKY.into_cell(' '));

        let layout = self.layout(state, viewport);

        match state.mode() {
            Mode::Navigate => {
                self.draw_status(fb, state);
                self.draw_minimap(&mut Surface::new(fb, layout.minimap), state, false);
                self.draw_perspective(&mut Surface::new(fb, layout.perspective), state);
            }
            Mode::Edit => {
                fb.put_str(0, 0, EDITOR_BANNER, STATUS.inverted().bold());
                self.draw_minimap(&mut Surface::new(fb, layout.minimap), state, true);
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&mut self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, viewport, &mut fb);
        fb
    }

    fn draw_status(&self, fb: &mut FrameBuffer, state: &GameState) {
        let p = state.player();
        let line = format!(
            "X:{:.6}, Y:{:.6}, A:{:.6}",
            p.x,
            p.y,
            p.heading_degrees()
        );
        fb.put_str(0, 0, &line, STATUS);
    }

    fn draw_perspective(&mut self, surface: &mut impl DisplaySurface, state: &GameState) {
        let (w, h) = surface.size();
        surface.clear(SKY);
        if w == 0 || h == 0 {
            return;
        }

        state.project_frame(w, h, &mut self.columns);

        for (col, proj) in self.columns.iter().enumerate().take(w as usize) {
            for row in 0..h {
                let span = proj.span_at(row as i32, h as i32);
                surface.write_cell(row, col as u16, span.glyph(), span_style(span));
            }
        }

        surface.draw_border_box(FRAME);
    }

    fn draw_minimap(&self, surface: &mut impl DisplaySurface, state: &GameState, show_cursor: bool) {
        let map = state.map();
        let player = state.player_tile();
        let cursor = state.cursor();

        for y in 0..map.height() {
            for x in 0..map.width() {
                let mut style = match map.get(x, y) {
                    Some(Tile::Wall) => MAP_WALL,
                    _ => MAP_OPEN,
                };
                if player == Some((x, y)) {
                    style = MAP_PLAYER;
                }
                if show_cursor && (cursor.x, cursor.y) == (x, y) {
                    style = MAP_CURSOR;
                }
                let col = (x as u16).saturating_mul(self.tile_w);
                for dx in 0..self.tile_w {
                    surface.write_cell(y as u16, col.saturating_add(dx), ' ', style);
                }
            }
        }
    }
}

fn span_style(span: Span) -> CellStyle {
    match span {
        Span::Sky => SKY,
        Span::Floor(_) => FLOOR,
        Span::Wall(shade) => {
            let v = match shade {
                WallShade::Solid => 235,
                WallShade::Dark => 190,
                WallShade::Medium => 145,
                WallShade::Light => 100,
                WallShade::Empty => 0,
            };
            CellStyle::new(Rgb::gray(v), Rgb::gray(0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_matches_terminal_proportions() {
        let layout = WorldLayout::compute(Viewport::new(120, 40), 31, 31, 2);
        assert_eq!(layout.minimap, Region::new(1, 1, 62, 31));
        assert_eq!(layout.perspective.width, 60);
        assert_eq!(layout.perspective.height, 30);
        assert_eq!(layout.perspective.y, 5);
        assert_eq!(layout.perspective.x, 54);
    }

    #[test]
    fn layout_never_exceeds_short_terminals() {
        let layout = WorldLayout::compute(Viewport::new(200, 20), 31, 31, 2);
        assert!(layout.perspective.y + layout.perspective.height <= 20);
    }
}
