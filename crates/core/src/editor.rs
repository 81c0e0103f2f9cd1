//! Map editor cursor.

/// Tile cursor over the minimap, clamped to the map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EditorCursor {
    pub x: usize,
    pub y: usize,
}

impl EditorCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move by one tile, staying inside a `width x height` map
    pub fn step(&mut self, dx: isize, dy: isize, width: usize, height: usize) {
        self.x = clamp_axis(self.x, dx, width);
        self.y = clamp_axis(self.y, dy, height);
    }

    /// Pull the cursor back inside the map after the map shrank
    pub fn clamp_to(&mut self, width: usize, height: usize) {
        self.x = self.x.min(width.saturating_sub(1));
        self.y = self.y.min(height.saturating_sub(1));
    }
}

fn clamp_axis(v: usize, delta: isize, len: usize) -> usize {
    v.saturating_add_signed(delta).min(len.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_stays_inside_map() {
        let mut c = EditorCursor::new();
        c.step(-1, -1, 5, 4);
        assert_eq!((c.x, c.y), (0, 0));
        for _ in 0..10 {
            c.step(1, 1, 5, 4);
        }
        assert_eq!((c.x, c.y), (4, 3));
        c.clamp_to(2, 2);
        assert_eq!((c.x, c.y), (1, 1));
    }
}
