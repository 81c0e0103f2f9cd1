//! Tile map tests - bounds, lookups and editing helpers

use maze_walker::core::TileMap;
use maze_walker::types::Tile;

#[test]
fn test_new_map_is_all_wall() {
    let map = TileMap::new(4, 3);
    assert_eq!(map.width(), 4);
    assert_eq!(map.height(), 3);
    assert_eq!(map.tiles().len(), 12);
    assert!(map.tiles().iter().all(|t| t.is_wall()));
    assert_eq!(map.open_count(), 0);
}

#[test]
fn test_out_of_bounds_lookups() {
    let map = TileMap::filled(3, 3, Tile::Open);

    assert_eq!(map.get(3, 0), None);
    assert_eq!(map.get(0, 3), None);
    assert_eq!(map.get_signed(-1, 0), None);
    assert_eq!(map.get_signed(0, -1), None);

    assert_eq!(map.tile_at(-0.5, 1.0), None);
    assert_eq!(map.tile_at(1.0, 3.0), None);
    assert_eq!(map.tile_at(f32::NAN, 1.0), None);
    assert!(!map.is_passable(-0.1, 1.0));
}

#[test]
fn test_tile_at_floors_coordinates() {
    let map = TileMap::filled(5, 5, Tile::Open);
    assert_eq!(map.tile_at(2.99, 0.01), Some((2, 0)));
    assert_eq!(map.tile_at(0.0, 4.5), Some((0, 4)));
}

#[test]
fn test_set_reports_bounds() {
    let mut map = TileMap::new(2, 2);
    assert!(map.set(1, 1, Tile::Open));
    assert_eq!(map.get(1, 1), Some(Tile::Open));
    assert!(!map.set(2, 0, Tile::Open));
    assert_eq!(map.open_count(), 1);
}

#[test]
fn test_from_rows_pads_with_walls() {
    let map = TileMap::from_rows(&["####", "# ", "####"]);
    assert_eq!(map.width(), 4);
    assert_eq!(map.height(), 3);
    assert_eq!(map.get(1, 1), Some(Tile::Open));
    assert_eq!(map.get(3, 1), Some(Tile::Wall));
    assert!(map.is_passable(1.5, 1.5));
    assert!(!map.is_passable(0.5, 1.5));
}

#[test]
fn test_reset_to_room_keeps_border() {
    let mut map = TileMap::new(6, 5);
    map.reset_to_room();

    let rows: Vec<String> = map.rows().collect();
    assert_eq!(rows[0], "######");
    assert_eq!(rows[2], "#    #");
    assert_eq!(rows[4], "######");
    assert_eq!(map.open_count(), 4 * 3);
}

#[test]
fn test_fill_rect_is_clipped() {
    let mut map = TileMap::new(4, 4);
    map.fill_rect(2, 2, 10, 10, Tile::Open);
    assert_eq!(map.open_count(), 4);
    assert_eq!(map.get(3, 3), Some(Tile::Open));
    assert_eq!(map.get(1, 1), Some(Tile::Wall));
}
