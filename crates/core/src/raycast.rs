//! Raycast module - per-column ray marching and projection
//!
//! For every screen column a ray leaves the player at
//! `angle - fov/2 + (column / screen_width) * fov` and is marched in fixed
//! [`RAY_STEP`] increments until it lands on a wall tile or reaches the max depth.
//! Leaving the map counts as a hit at max depth.
//!
//! The hit distance then drives three things:
//!
//! - the wall glyph ([`WallShade`], darker = closer),
//! - the rows where the wall starts and ends ([`vertical_split`]),
//! - whether the column sits on a tile edge. Edges are found by comparing the
//!   ray with the directions to the two nearest corners of the hit tile; a
//!   near-exact match blanks the column, leaving a thin seam between tiles.
//!
//! Floor rows below the wall are shaded by screen row only ([`FloorShade`]).

use crate::grid::TileMap;
use crate::player::Player;
use crate::types::{BOUNDARY_ANGLE, RAY_STEP};

/// Result of marching a single ray
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Distance travelled, in `(0, depth]`
    pub distance: f32,
    /// Column lies on the edge of a wall tile
    pub boundary: bool,
    /// Hit tile, `None` when the ray left the map or ran out of depth
    pub tile: Option<(usize, usize)>,
}

/// Wall glyph by distance band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WallShade {
    /// `d <= depth/4`
    Solid,
    /// `d < depth/3`
    Dark,
    /// `d < depth/2`
    Medium,
    /// `d < depth`
    Light,
    /// Too far away, or a tile seam
    Empty,
}

impl WallShade {
    pub fn glyph(&self) -> char {
        match self {
            WallShade::Solid => '\u{2588}',
            WallShade::Dark => '\u{2593}',
            WallShade::Medium => '\u{2592}',
            WallShade::Light => '\u{2591}',
            WallShade::Empty => ' ',
        }
    }
}

/// Floor glyph by screen row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloorShade {
    Dense,
    Wave,
    Dot,
    Dash,
    Empty,
}

impl FloorShade {
    pub fn glyph(&self) -> char {
        match self {
            FloorShade::Dense => '=',
            FloorShade::Wave => '~',
            FloorShade::Dot => '.',
            FloorShade::Dash => '-',
            FloorShade::Empty => ' ',
        }
    }
}

/// What a single screen cell shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Span {
    Sky,
    Wall(WallShade),
    Floor(FloorShade),
}

impl Span {
    pub fn glyph(&self) -> char {
        match self {
            Span::Sky => ' ',
            Span::Wall(shade) => shade.glyph(),
            Span::Floor(shade) => shade.glyph(),
        }
    }
}

/// Projection of one screen column
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnProjection {
    pub distance: f32,
    pub boundary: bool,
    /// First wall row; rows above are sky. May be negative for very close walls.
    pub ceiling: i32,
    /// Last wall row; rows below are floor.
    pub floor: i32,
    pub shade: WallShade,
}

impl ColumnProjection {
    /// Content of screen row `row` in a view `screen_height` rows tall
    pub fn span_at(&self, row: i32, screen_height: i32) -> Span {
        if row < self.ceiling {
            Span::Sky
        } else if row <= self.floor {
            Span::Wall(self.shade)
        } else {
            Span::Floor(floor_shade(row, screen_height))
        }
    }
}

/// Map a hit distance to its wall shade band.
pub fn wall_shade(distance: f32, depth: f32) -> WallShade {
    if distance <= depth / 4.0 {
        WallShade::Solid
    } else if distance < depth / 3.0 {
        WallShade::Dark
    } else if distance < depth / 2.0 {
        WallShade::Medium
    } else if distance < depth {
        WallShade::Light
    } else {
        WallShade::Empty
    }
}

/// Floor shade for screen row `row`: dense near the bottom edge, blank near the horizon.
pub fn floor_shade(row: i32, screen_height: i32) -> FloorShade {
    let half = screen_height as f32 / 2.0;
    if half <= 0.0 {
        return FloorShade::Empty;
    }
    let b = 1.0 - (row as f32 - half) / half;
    if b < 0.25 {
        FloorShade::Dense
    } else if b < 0.5 {
        FloorShade::Wave
    } else if b < 0.75 {
        FloorShade::Dot
    } else if b < 0.9 {
        FloorShade::Dash
    } else {
        FloorShade::Empty
    }
}

/// Ceiling and floor rows for a wall at `distance`: `(ceiling, floor)`.
pub fn vertical_split(distance: f32, screen_height: i32) -> (i32, i32) {
    let h = screen_height as f32;
    let d = if distance > 0.0 { distance } else { RAY_STEP };
    let ceiling = (h / 2.0 - h / d) as i32;
    (ceiling, screen_height - ceiling)
}

/// Fixed-step ray marcher
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayCaster {
    /// Field of view in radians
    pub fov: f32,
    /// Max ray length in map units
    pub depth: f32,
    pub step: f32,
    pub boundary_angle: f32,
}

impl RayCaster {
    pub fn new(fov: f32, depth: f32) -> Self {
        Self {
            fov,
            depth,
            step: RAY_STEP,
            boundary_angle: BOUNDARY_ANGLE,
        }
    }

    /// Depth derived from the map: its larger dimension
    pub fn for_map(fov: f32, map: &TileMap) -> Self {
        Self::new(fov, map.width().max(map.height()) as f32)
    }

    /// World angle of the ray for screen column `column` of `screen_width`.
    pub fn ray_angle(&self, player_angle: f32, column: u16, screen_width: u16) -> f32 {
        let t = if screen_width == 0 {
            0.0
        } else {
            column as f32 / screen_width as f32
        };
        player_angle - self.fov / 2.0 + t * self.fov
    }

    /// March one ray from `(x, y)` along `angle`.
    pub fn cast(&self, map: &TileMap, x: f32, y: f32, angle: f32) -> RayHit {
        self.cast_with(map, x, y, angle, |_| {})
    }

    /// Like [`cast`](Self::cast), reporting every sampled distance to `on_step`.
    pub fn cast_with(
        &self,
        map: &TileMap,
        x: f32,
        y: f32,
        angle: f32,
        mut on_step: impl FnMut(f32),
    ) -> RayHit {
        let (eye_x, eye_y) = (angle.sin(), angle.cos());
        let step = if self.step > 0.0 { self.step } else { RAY_STEP };

        let mut steps: u32 = 0;
        let mut distance = 0.0f32;
        while distance < self.depth {
            steps += 1;
            // Multiply instead of accumulating so long rays do not drift.
            distance = (steps as f32 * step).min(self.depth);
            on_step(distance);

            let px = x + eye_x * distance;
            let py = y + eye_y * distance;
            let (tx, ty) = (px.floor() as i64, py.floor() as i64);

            match map.get_signed(tx, ty) {
                None => {
                    on_step(self.depth);
                    return RayHit {
                        distance: self.depth,
                        boundary: false,
                        tile: None,
                    };
                }
                Some(tile) if tile.is_wall() => {
                    let (tx, ty) = (tx as usize, ty as usize);
                    return RayHit {
                        distance,
                        boundary: self.is_tile_edge(x, y, eye_x, eye_y, tx, ty),
                        tile: Some((tx, ty)),
                    };
                }
                Some(_) => {}
            }
        }

        RayHit {
            distance: self.depth,
            boundary: false,
            tile: None,
        }
    }

    /// True when the ray `(eye_x, eye_y)` from `(x, y)` points almost exactly at
    /// one of the two corners of tile `(tx, ty)` nearest to the viewer.
    fn is_tile_edge(&self, x: f32, y: f32, eye_x: f32, eye_y: f32, tx: usize, ty: usize) -> bool {
        let mut corners = [(0.0f32, 0.0f32); 4];
        let mut i = 0;
        for cx in 0..2 {
            for cy in 0..2 {
                let vx = (tx + cx) as f32 - x;
                let vy = (ty + cy) as f32 - y;
                let d = (vx * vx + vy * vy).sqrt();
                let dot = if d > 0.0 {
                    (eye_x * vx + eye_y * vy) / d
                } else {
                    1.0
                };
                corners[i] = (d, dot);
                i += 1;
            }
        }

        corners.sort_unstable_by(|a, b| a.0.total_cmp(&b.0));
        corners[..2]
            .iter()
            .any(|&(_, dot)| dot.clamp(-1.0, 1.0).acos() < self.boundary_angle)
    }

    /// Cast and project one screen column.
    pub fn project_column(
        &self,
        map: &TileMap,
        player: &Player,
        column: u16,
        screen_width: u16,
        screen_height: u16,
    ) -> ColumnProjection {
        let angle = self.ray_angle(player.angle, column, screen_width);
        let hit = self.cast(map, player.x, player.y, angle);
        let (ceiling, floor) = vertical_split(hit.distance, screen_height as i32);
        let shade = if hit.boundary {
            WallShade::Empty
        } else {
            wall_shade(hit.distance, self.depth)
        };
        ColumnProjection {
            distance: hit.distance,
            boundary: hit.boundary,
            ceiling,
            floor,
            shade,
        }
    }

    /// Project `screen_width + 1` columns into `out` (cleared first).
    pub fn project_frame(
        &self,
        map: &TileMap,
        player: &Player,
        screen_width: u16,
        screen_height: u16,
        out: &mut Vec<ColumnProjection>,
    ) {
        out.clear();
        out.reserve(screen_width as usize + 1);
        for column in 0..=screen_width {
            out.push(self.project_column(map, player, column, screen_width, screen_height));
        }
    }
}
