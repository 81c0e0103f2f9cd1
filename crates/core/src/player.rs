//! Player module - position, heading and collision-checked movement
//!
//! Heading convention: angle 0 looks along +Y and increasing angles turn toward
//! +X, so the facing vector is `(sin a, cos a)`. The ray caster uses the same
//! convention, so what the player sees is where W walks.
//!
//! Collision is tested only at the end point of a move. A large enough step
//! (high speed or a long frame) can skip over a one-tile wall.

use crate::grid::TileMap;

/// Continuous player state in map coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    /// Heading in radians
    pub angle: f32,
    /// Map units per second
    pub move_speed: f32,
    /// Radians per second
    pub rotate_speed: f32,
}

impl Player {
    pub fn new(x: f32, y: f32, angle: f32, move_speed: f32, rotate_speed: f32) -> Self {
        Self {
            x,
            y,
            angle,
            move_speed,
            rotate_speed,
        }
    }

    /// Unit facing vector `(sin a, cos a)`
    #[inline]
    pub fn facing(&self) -> (f32, f32) {
        (self.angle.sin(), self.angle.cos())
    }

    /// Map tile the player stands on, if inside the map
    pub fn tile(&self, map: &TileMap) -> Option<(usize, usize)> {
        map.tile_at(self.x, self.y)
    }

    /// Heading in degrees, for display
    pub fn heading_degrees(&self) -> f32 {
        self.angle.to_degrees()
    }

    pub fn rotate(&mut self, direction: f32, dt: f32) {
        self.angle += direction * self.rotate_speed * dt;
    }

    /// Step along the facing vector (`direction` is +1 forward, -1 backward).
    ///
    /// Returns false (and leaves the position untouched) when the end point is
    /// outside the map or on a wall.
    pub fn advance(&mut self, map: &TileMap, direction: f32, dt: f32) -> bool {
        let (fx, fy) = self.facing();
        let step = direction * self.move_speed * dt;
        self.try_move_to(map, self.x + fx * step, self.y + fy * step)
    }

    /// Commit `(x, y)` if it lies on an open tile
    pub fn try_move_to(&mut self, map: &TileMap, x: f32, y: f32) -> bool {
        if !map.is_passable(x, y) {
            return false;
        }
        self.x = x;
        self.y = y;
        true
    }

    /// Unchecked relocation, used when the map itself is replaced
    pub fn place(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facing_uses_swapped_convention() {
        let mut p = Player::new(0.0, 0.0, 0.0, 1.0, 1.0);
        let (fx, fy) = p.facing();
        assert!(fx.abs() < 1e-6 && (fy - 1.0).abs() < 1e-6);

        p.angle = std::f32::consts::FRAC_PI_2;
        let (fx, fy) = p.facing();
        assert!((fx - 1.0).abs() < 1e-6 && fy.abs() < 1e-6);
    }

    #[test]
    fn rotate_scales_by_speed_and_dt() {
        let mut p = Player::new(0.0, 0.0, 1.0, 1.0, 70.0);
        p.rotate(-1.0, 0.01);
        assert!((p.angle - 0.3).abs() < 1e-5);
    }
}
