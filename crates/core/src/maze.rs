//! Maze module - randomized depth-first carving and corridor expansion
//!
//! Carving runs an iterative backtracker over a `width x height` cell graph:
//! starting from the origin cell, it repeatedly steps from the cell on top of the
//! stack to a random unvisited neighbour (opening the wall between them) and pops
//! when a cell has no unvisited neighbours left. Every cell is visited exactly once,
//! so the result is a spanning tree with `width * height - 1` passages.
//!
//! [`expand`] turns the cell graph into a [`TileMap`]: every cell becomes a
//! `path_width x path_width` block of floor, separated from its neighbours by a
//! one-tile wall that is opened wherever a passage exists.

use arrayvec::ArrayVec;
use bitflags::bitflags;

use crate::grid::TileMap;
use crate::rng::SimpleRng;
use crate::types::{expanded_size, Tile};

bitflags! {
    /// Per-cell passage and visit bits.
    #[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct CellFlags: u8 {
        const PATH_NORTH = 0x01;
        const PATH_EAST  = 0x02;
        const PATH_SOUTH = 0x04;
        const PATH_WEST  = 0x08;
        const VISITED    = 0x10;
    }
}

/// Orthogonal step between cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Probe order used when collecting neighbours
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub fn path_flag(&self) -> CellFlags {
        match self {
            Direction::North => CellFlags::PATH_NORTH,
            Direction::East => CellFlags::PATH_EAST,
            Direction::South => CellFlags::PATH_SOUTH,
            Direction::West => CellFlags::PATH_WEST,
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    pub fn delta(&self) -> (isize, isize) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }
}

/// Logical maze cells before corridor widening
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellGraph {
    width: usize,
    height: usize,
    cells: Vec<CellFlags>,
}

impl CellGraph {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![CellFlags::empty(); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline(always)]
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    pub fn get(&self, x: usize, y: usize) -> Option<CellFlags> {
        self.index(x, y).map(|i| self.cells[i])
    }

    fn insert(&mut self, x: usize, y: usize, flags: CellFlags) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] |= flags;
        }
    }

    /// Clear every bit on every cell
    pub fn clear(&mut self) {
        self.cells.fill(CellFlags::empty());
    }

    /// Neighbour coordinates one step away, if inside the graph
    pub fn neighbor(&self, x: usize, y: usize, dir: Direction) -> Option<(usize, usize)> {
        let (dx, dy) = dir.delta();
        let nx = x.checked_add_signed(dx)?;
        let ny = y.checked_add_signed(dy)?;
        self.index(nx, ny).map(|_| (nx, ny))
    }

    pub fn has_path(&self, x: usize, y: usize, dir: Direction) -> bool {
        self.get(x, y)
            .is_some_and(|c| c.contains(dir.path_flag()))
    }

    /// Number of carved passages (each counted once via its east/south bit)
    pub fn edge_count(&self) -> usize {
        self.cells
            .iter()
            .map(|c| {
                c.contains(CellFlags::PATH_EAST) as usize
                    + c.contains(CellFlags::PATH_SOUTH) as usize
            })
            .sum()
    }

    pub fn visited_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| c.contains(CellFlags::VISITED))
            .count()
    }
}

/// Randomized depth-first maze carver
#[derive(Debug, Clone)]
pub struct MazeGenerator {
    rng: SimpleRng,
    stack: Vec<(usize, usize)>,
}

impl MazeGenerator {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            stack: Vec::new(),
        }
    }

    /// Clear `graph`, re-seed, and carve a fresh spanning tree into it.
    pub fn carve(&mut self, graph: &mut CellGraph, seed: u32) {
        self.rng.reseed(seed);
        self.stack.clear();
        graph.clear();

        let total = graph.len();
        if total == 0 {
            return;
        }

        self.stack.push((0, 0));
        graph.insert(0, 0, CellFlags::VISITED);
        let mut visited = 1usize;

        while visited < total {
            let Some(&(x, y)) = self.stack.last() else {
                break;
            };

            let mut candidates: ArrayVec<(Direction, (usize, usize)), 4> = ArrayVec::new();
            for dir in Direction::ALL {
                if let Some((nx, ny)) = graph.neighbor(x, y, dir) {
                    let seen = graph
                        .get(nx, ny)
                        .is_some_and(|c| c.contains(CellFlags::VISITED));
                    if !seen {
                        candidates.push((dir, (nx, ny)));
                    }
                }
            }

            if candidates.is_empty() {
                self.stack.pop();
                continue;
            }

            let pick = self.rng.next_range(candidates.len() as u32) as usize;
            let (dir, (nx, ny)) = candidates[pick];
            graph.insert(x, y, dir.path_flag());
            graph.insert(nx, ny, CellFlags::VISITED | dir.opposite().path_flag());
            self.stack.push((nx, ny));
            visited += 1;
        }
    }
}

/// Widen the cell graph into a tile map.
///
/// Map size is `expanded_size(width, path_width) x expanded_size(height, path_width)`.
pub fn expand(graph: &CellGraph, path_width: usize) -> TileMap {
    let pw = path_width.max(1);
    let stride = pw + 1;
    let mut map = TileMap::new(
        expanded_size(graph.width(), pw),
        expanded_size(graph.height(), pw),
    );

    for y in 0..graph.height() {
        for x in 0..graph.width() {
            let Some(cell) = graph.get(x, y) else {
                continue;
            };
            let (ox, oy) = (x * stride + 1, y * stride + 1);

            if cell.contains(CellFlags::VISITED) {
                map.fill_rect(ox, oy, pw, pw, Tile::Open);
            }
            if cell.contains(CellFlags::PATH_SOUTH) {
                map.fill_rect(ox, oy + pw, pw, 1, Tile::Open);
            }
            if cell.contains(CellFlags::PATH_EAST) {
                map.fill_rect(ox + pw, oy, 1, pw, Tile::Open);
            }
        }
    }

    map
}
