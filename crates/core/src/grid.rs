//! Grid module - the expanded wall/floor tile map
//!
//! The map is a flat row-major array of tiles. Coordinates are `(x, y)` with
//! x growing to the right and y growing downwards; a continuous position lies on
//! tile `(floor(x), floor(y))`.
//!
//! All index arithmetic goes through [`TileMap::index`]. Out-of-range lookups
//! return `None`; what that means (wall, max-depth hit, rejected move) is up to
//! the caller.

use crate::types::Tile;

/// Expanded map of wall and floor tiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileMap {
    width: usize,
    height: usize,
    /// Flat array of tiles, row-major order (y * width + x)
    tiles: Vec<Tile>,
}

impl TileMap {
    /// Create a map of the given size filled with walls
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, Tile::Wall)
    }

    pub fn filled(width: usize, height: usize, tile: Tile) -> Self {
        Self {
            width,
            height,
            tiles: vec![tile; width * height],
        }
    }

    /// Build a map from text rows (`#` = wall, anything else = floor).
    ///
    /// The width is taken from the longest row; short rows are padded with walls.
    pub fn from_rows(rows: &[&str]) -> Self {
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        let mut map = Self::new(width, rows.len());
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                map.set(x, y, Tile::from_char(ch));
            }
        }
        map
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    /// Tile coordinates under a continuous position, if inside the map
    #[inline]
    pub fn tile_at(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        if !(x >= 0.0 && y >= 0.0) {
            return None;
        }
        let (tx, ty) = (x.floor() as usize, y.floor() as usize);
        self.index(tx, ty).map(|_| (tx, ty))
    }

    /// Signed variant used by the ray marcher
    #[inline]
    pub fn get_signed(&self, x: i64, y: i64) -> Option<Tile> {
        if x < 0 || y < 0 {
            return None;
        }
        self.get(x as usize, y as usize)
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Tile> {
        self.index(x, y).map(|i| self.tiles[i])
    }

    /// Raw mutable access, used by the editor
    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut Tile> {
        self.index(x, y).map(move |i| &mut self.tiles[i])
    }

    /// Set tile at (x, y); returns false if out of bounds
    pub fn set(&mut self, x: usize, y: usize, tile: Tile) -> bool {
        match self.get_mut(x, y) {
            Some(slot) => {
                *slot = tile;
                true
            }
            None => false,
        }
    }

    /// True when the continuous position is inside the map and on a floor tile
    pub fn is_passable(&self, x: f32, y: f32) -> bool {
        self.tile_at(x, y)
            .and_then(|(tx, ty)| self.get(tx, ty))
            .is_some_and(|t| !t.is_wall())
    }

    pub fn is_wall(&self, x: usize, y: usize) -> bool {
        matches!(self.get(x, y), Some(Tile::Wall))
    }

    pub fn fill(&mut self, tile: Tile) {
        self.tiles.fill(tile);
    }

    /// Fill a rectangle, clipped to the map
    pub fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, tile: Tile) {
        for ty in y..(y + h).min(self.height) {
            for tx in x..(x + w).min(self.width) {
                self.set(tx, ty, tile);
            }
        }
    }

    /// Turn the map into an empty room: walls on the outer ring, floor inside
    pub fn reset_to_room(&mut self) {
        for y in 0..self.height {
            for x in 0..self.width {
                let edge = x == 0 || y == 0 || x + 1 == self.width || y + 1 == self.height;
                self.set(x, y, if edge { Tile::Wall } else { Tile::Open });
            }
        }
    }

    pub fn open_count(&self) -> usize {
        self.tiles.iter().filter(|t| !t.is_wall()).count()
    }

    /// Rows as text, `#` for wall and space for floor
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.tiles
            .chunks(self.width.max(1))
            .map(|row| row.iter().map(Tile::as_char).collect())
    }
}
