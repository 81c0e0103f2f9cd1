//! Ray caster tests - marching, shading bands, seams and projection

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use maze_walker::core::{
    floor_shade, vertical_split, wall_shade, ColumnProjection, FloorShade, Player, RayCaster,
    Span, TileMap, WallShade,
};
use maze_walker::types::{Tile, RAY_STEP};

fn room(width: usize, height: usize) -> TileMap {
    let mut map = TileMap::new(width, height);
    map.reset_to_room();
    map
}

#[test]
fn test_depth_is_larger_map_dimension() {
    let caster = RayCaster::for_map(1.0, &room(25, 16));
    assert_eq!(caster.depth, 25.0);
    assert_eq!(caster.step, RAY_STEP);
}

#[test]
fn test_ray_follows_sin_cos_convention() {
    let map = room(10, 10);
    let caster = RayCaster::for_map(1.0, &map);

    // Angle 0 marches along +Y.
    let hit = caster.cast(&map, 5.5, 5.5, 0.0);
    assert_eq!(hit.tile, Some((5, 9)));
    assert!((hit.distance - 3.5).abs() <= RAY_STEP + 1e-4, "{}", hit.distance);

    // Angle pi/2 marches along +X.
    let hit = caster.cast(&map, 5.5, 5.5, FRAC_PI_2);
    assert_eq!(hit.tile, Some((9, 5)));

    // Angle pi marches along -Y.
    let hit = caster.cast(&map, 5.5, 5.5, PI);
    assert_eq!(hit.tile, Some((5, 0)));
}

#[test]
fn test_sampled_distances_never_decrease() {
    let map = room(16, 16);
    let caster = RayCaster::for_map(1.0, &map);

    for i in 0..32 {
        let angle = i as f32 * 0.2;
        let mut samples = Vec::new();
        let hit = caster.cast_with(&map, 3.3, 7.7, angle, |d| samples.push(d));

        assert!(!samples.is_empty());
        assert!(samples.windows(2).all(|w| w[0] <= w[1]), "angle {}", angle);
        assert!(samples.iter().all(|&d| d > 0.0 && d <= caster.depth));
        assert!(hit.distance > 0.0 && hit.distance <= caster.depth);
    }
}

#[test]
fn test_leaving_the_map_hits_at_max_depth() {
    let map = TileMap::filled(5, 5, Tile::Open);
    let caster = RayCaster::new(1.0, 40.0);

    let hit = caster.cast(&map, 2.5, 2.5, 0.3);
    assert_eq!(hit.distance, 40.0);
    assert_eq!(hit.tile, None);
    assert!(!hit.boundary);
}

#[test]
fn test_running_out_of_depth_hits_at_max_depth() {
    let map = TileMap::filled(50, 50, Tile::Open);
    let caster = RayCaster::new(1.0, 3.0);

    let hit = caster.cast(&map, 25.0, 25.0, 1.0);
    assert_eq!(hit.distance, 3.0);
    assert_eq!(hit.tile, None);
}

#[test]
fn test_wall_shade_band_edges() {
    let depth = 16.0;
    assert_eq!(wall_shade(0.1, depth), WallShade::Solid);
    assert_eq!(wall_shade(4.0, depth), WallShade::Solid);
    assert_eq!(wall_shade(4.1, depth), WallShade::Dark);
    assert_eq!(wall_shade(16.0 / 3.0 + 0.01, depth), WallShade::Medium);
    assert_eq!(wall_shade(7.99, depth), WallShade::Medium);
    assert_eq!(wall_shade(8.0, depth), WallShade::Light);
    assert_eq!(wall_shade(15.9, depth), WallShade::Light);
    assert_eq!(wall_shade(16.0, depth), WallShade::Empty);
    assert_eq!(wall_shade(16.0 / 3.0, depth), WallShade::Medium);

    assert_eq!(WallShade::Solid.glyph(), '█');
    assert_eq!(WallShade::Dark.glyph(), '▓');
    assert_eq!(WallShade::Medium.glyph(), '▒');
    assert_eq!(WallShade::Light.glyph(), '░');
    assert_eq!(WallShade::Empty.glyph(), ' ');
}

#[test]
fn test_wall_shade_exact_band_boundaries() {
    // Depth 12 puts every band edge on an exact float: 3, 4, 6, 12.
    let depth = 12.0;
    assert_eq!(wall_shade(3.0, depth), WallShade::Solid);
    assert_eq!(wall_shade(3.01, depth), WallShade::Dark);
    assert_eq!(wall_shade(3.99, depth), WallShade::Dark);
    assert_eq!(wall_shade(4.0, depth), WallShade::Medium);
    assert_eq!(wall_shade(5.99, depth), WallShade::Medium);
    assert_eq!(wall_shade(6.0, depth), WallShade::Light);
    assert_eq!(wall_shade(11.99, depth), WallShade::Light);
    assert_eq!(wall_shade(12.0, depth), WallShade::Empty);
}

#[test]
fn test_floor_shade_dense_at_bottom_blank_at_horizon() {
    let h = 20;
    assert_eq!(floor_shade(19, h), FloorShade::Dense);
    assert_eq!(floor_shade(16, h), FloorShade::Wave);
    assert_eq!(floor_shade(14, h), FloorShade::Dot);
    assert_eq!(floor_shade(12, h), FloorShade::Dash);
    assert_eq!(floor_shade(10, h), FloorShade::Empty);
}

#[test]
fn test_vertical_split_shrinks_with_distance() {
    let (near_c, near_f) = vertical_split(2.0, 30);
    let (far_c, far_f) = vertical_split(10.0, 30);
    assert!(near_c < far_c);
    assert!(near_f > far_f);
    assert_eq!(near_c + near_f, 30);
    assert_eq!(far_c + far_f, 30);

    // Very close walls overflow the screen instead of wrapping.
    let (c, f) = vertical_split(0.5, 30);
    assert!(c < 0);
    assert!(f > 30);
}

#[test]
fn test_column_spans_sky_wall_floor() {
    let (ceiling, floor) = vertical_split(4.0, 20);
    let col = ColumnProjection {
        distance: 4.0,
        boundary: false,
        ceiling,
        floor,
        shade: WallShade::Solid,
    };

    assert_eq!(col.span_at(0, 20), Span::Sky);
    assert_eq!(col.span_at(ceiling - 1, 20), Span::Sky);
    assert_eq!(col.span_at(ceiling, 20), Span::Wall(WallShade::Solid));
    assert_eq!(col.span_at(floor, 20), Span::Wall(WallShade::Solid));
    assert_eq!(col.span_at(19, 20), Span::Floor(FloorShade::Dense));
}

#[test]
fn test_ray_at_tile_corner_is_a_seam() {
    let mut map = room(10, 10);
    map.set(5, 5, Tile::Wall);
    let caster = RayCaster::for_map(1.0, &map);

    let hit = caster.cast(&map, 2.5, 2.5, FRAC_PI_4);
    assert_eq!(hit.tile, Some((5, 5)));
    assert!(hit.boundary);
}

#[test]
fn test_ray_at_tile_face_centre_is_not_a_seam() {
    let mut map = room(10, 10);
    map.set(6, 5, Tile::Wall);
    let caster = RayCaster::for_map(1.0, &map);

    let hit = caster.cast(&map, 2.5, 5.5, FRAC_PI_2);
    assert_eq!(hit.tile, Some((6, 5)));
    assert!(!hit.boundary);
}

#[test]
fn test_seam_columns_are_blank() {
    let mut map = room(10, 10);
    map.set(5, 5, Tile::Wall);
    let caster = RayCaster::for_map(1.0, &map);
    let player = Player::new(2.5, 2.5, FRAC_PI_4, 1.0, 1.0);

    // The centre column looks straight down the player's heading.
    let col = caster.project_column(&map, &player, 20, 40, 20);
    assert!(col.boundary);
    assert_eq!(col.shade, WallShade::Empty);
}

#[test]
fn test_project_frame_covers_every_column() {
    let map = room(12, 12);
    let caster = RayCaster::for_map(1.0, &map);
    let player = Player::new(6.0, 6.0, 0.3, 1.0, 1.0);

    let mut out = Vec::new();
    caster.project_frame(&map, &player, 40, 20, &mut out);
    assert_eq!(out.len(), 41);

    // Reusing the buffer replaces the previous frame.
    caster.project_frame(&map, &player, 10, 20, &mut out);
    assert_eq!(out.len(), 11);
    assert!(out.iter().all(|c| c.distance > 0.0 && c.distance <= caster.depth));
}

#[test]
fn test_ray_angles_sweep_the_field_of_view() {
    let caster = RayCaster::new(1.0, 10.0);
    assert!((caster.ray_angle(2.0, 0, 40) - 1.5).abs() < 1e-6);
    assert!((caster.ray_angle(2.0, 20, 40) - 2.0).abs() < 1e-6);
    assert!((caster.ray_angle(2.0, 40, 40) - 2.5).abs() < 1e-6);
}
