//! Display surfaces: clipped rectangular windows onto a framebuffer.
//!
//! The view composer draws the perspective view and the minimap into two
//! independent surfaces, each addressed from its own `(row, col)` origin. Writes
//! outside a surface are dropped.

use crate::fb::{Cell, CellStyle, FrameBuffer};

/// Something the composer can draw character cells into.
pub trait DisplaySurface {
    /// Size in cells as `(cols, rows)`
    fn size(&self) -> (u16, u16);

    fn write_cell(&mut self, row: u16, col: u16, ch: char, style: CellStyle);

    /// Fill the whole surface with blanks in `style`
    fn clear(&mut self, style: CellStyle);

    /// Draw a single-line box on the outermost ring of the surface.
    fn draw_border_box(&mut self, style: CellStyle) {
        let (w, h) = self.size();
        if w < 2 || h < 2 {
            return;
        }

        self.write_cell(0, 0, '┌', style);
        self.write_cell(0, w - 1, '┐', style);
        self.write_cell(h - 1, 0, '└', style);
        self.write_cell(h - 1, w - 1, '┘', style);

        for col in 1..w - 1 {
            self.write_cell(0, col, '─', style);
            self.write_cell(h - 1, col, '─', style);
        }
        for row in 1..h - 1 {
            self.write_cell(row, 0, '│', style);
            self.write_cell(row, w - 1, '│', style);
        }
    }

    fn write_str(&mut self, row: u16, col: u16, s: &str, style: CellStyle) {
        let (w, _) = self.size();
        for (i, ch) in s.chars().enumerate() {
            let Some(c) = col.checked_add(i as u16) else {
                break;
            };
            if c >= w {
                break;
            }
            self.write_cell(row, c, ch, style);
        }
    }
}

/// Window at `(x, y)` of size `width x height` inside a framebuffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Region {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Mutable surface over a framebuffer region
pub struct Surface<'a> {
    fb: &'a mut FrameBuffer,
    region: Region,
}

impl<'a> Surface<'a> {
    pub fn new(fb: &'a mut FrameBuffer, region: Region) -> Self {
        Self { fb, region }
    }

    pub fn region(&self) -> Region {
        self.region
    }
}

impl DisplaySurface for Surface<'_> {
    fn size(&self) -> (u16, u16) {
        (self.region.width, self.region.height)
    }

    fn write_cell(&mut self, row: u16, col: u16, ch: char, style: CellStyle) {
        if row >= self.region.height || col >= self.region.width {
            return;
        }
        let (Some(x), Some(y)) = (
            self.region.x.checked_add(col),
            self.region.y.checked_add(row),
        ) else {
            return;
        };
        self.fb.set(x, y, Cell { ch, style });
    }

    fn clear(&mut self, style: CellStyle) {
        let Region {
            x,
            y,
            width,
            height,
        } = self.region;
        self.fb.fill_rect(x, y, width, height, ' ', style);
    }
}

impl DisplaySurface for FrameBuffer {
    fn size(&self) -> (u16, u16) {
        (self.width(), self.height())
    }

    fn write_cell(&mut self, row: u16, col: u16, ch: char, style: CellStyle) {
        self.put_char(col, row, ch, style);
    }

    fn clear(&mut self, style: CellStyle) {
        FrameBuffer::clear(self, style.into_cell(' '));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_offsets_and_clips_writes() {
        let mut fb = FrameBuffer::new(6, 4);
        let style = CellStyle::default();
        {
            let mut s = Surface::new(&mut fb, Region::new(2, 1, 3, 2));
            s.write_cell(0, 0, 'A', style);
            s.write_cell(1, 2, 'B', style);
            s.write_cell(2, 0, 'X', style);
            s.write_cell(0, 3, 'X', style);
        }
        assert_eq!(fb.get(2, 1).unwrap().ch, 'A');
        assert_eq!(fb.get(4, 2).unwrap().ch, 'B');
        assert!(!fb.cells().iter().any(|c| c.ch == 'X'));
    }

    #[test]
    fn border_box_draws_corners() {
        let mut fb = FrameBuffer::new(5, 3);
        fb.draw_border_box(CellStyle::default());
        assert_eq!(fb.row_text(0), "┌───┐");
        assert_eq!(fb.row_text(1), "│   │");
        assert_eq!(fb.row_text(2), "└───┘");
    }
}
