//! Hand-drawn maps.
//!
//! Both maps start the player at (8, 8) facing +Y. The classic map has gaps in
//! its outer wall; walking through one is rejected by the out-of-bounds check.

use crate::grid::TileMap;
use crate::types::MapPreset;

const CLASSIC: [&str; 16] = [
    "#########.......",
    "#...............",
    "#.......########",
    "#..............#",
    "#......##......#",
    "#......##......#",
    "#..............#",
    "###............#",
    "##.............#",
    "#......####..###",
    "#......#.......#",
    "#......#.......#",
    "#..............#",
    "#......#########",
    "#..............#",
    "################",
];

const ARENA: [&str; 16] = [
    "#########################",
    "#.......................#",
    "#.......................#",
    "#######..........########",
    "#######..........########",
    "#................##.....#",
    "#................##.....#",
    "#................##.....#",
    "#................##.....#",
    "#.......................#",
    "#...########............#",
    "#......##...............#",
    "#......##...............#",
    "#......##...............#",
    "#......##...............#",
    "#########################",
];

/// Start pose on the hand-drawn maps: (x, y, heading)
pub const PRESET_START: (f32, f32, f32) = (8.0, 8.0, 0.0);

/// Tile map for a hand-drawn preset; `None` for [`MapPreset::Maze`]
pub fn preset_map(preset: MapPreset) -> Option<TileMap> {
    match preset {
        MapPreset::Maze => None,
        MapPreset::Classic => Some(TileMap::from_rows(&CLASSIC)),
        MapPreset::Arena => Some(TileMap::from_rows(&ARENA)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_sizes() {
        let classic = preset_map(MapPreset::Classic).unwrap();
        assert_eq!((classic.width(), classic.height()), (16, 16));
        let arena = preset_map(MapPreset::Arena).unwrap();
        assert_eq!((arena.width(), arena.height()), (25, 16));
        assert!(preset_map(MapPreset::Maze).is_none());
    }

    #[test]
    fn preset_start_is_open() {
        let (x, y, _) = PRESET_START;
        for preset in [MapPreset::Classic, MapPreset::Arena] {
            let map = preset_map(preset).unwrap();
            assert!(map.is_passable(x, y), "{:?} start must be open", preset);
        }
    }
}
