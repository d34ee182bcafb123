//! Collision and safety detector tests

use crossy_road::simulation::{
    find_collision, is_position_safe, player_extent, vehicle_extent, Extent, GameConfig, Lane,
    TravelDirection, VehicleType,
};

fn car_at(x: f32) -> Lane {
    Lane::road(1, VehicleType::Car, TravelDirection::Rightward, 2.0, &[x])
}

fn truck_at(x: f32) -> Lane {
    Lane::road(1, VehicleType::Truck, TravelDirection::Leftward, 2.0, &[x])
}

#[test]
fn test_touching_extents_do_not_overlap() {
    let a = Extent { min: -15.0, max: 15.0 };
    let b = Extent { min: 15.0, max: 135.0 };
    assert!(!a.overlaps(&b));
    assert!(!b.overlaps(&a));

    let c = Extent::centered(20.0, 12.0);
    assert_eq!(c, Extent { min: 14.0, max: 26.0 });
    assert!(a.overlaps(&c));
    assert!(c.overlaps(&a));
}

#[test]
fn test_extent_widths_apply_zoom() {
    let config = GameConfig::default();

    assert_eq!(player_extent(0.0, &config), Extent { min: -15.0, max: 15.0 });

    let car_lane = car_at(100.0);
    let car = &car_lane.vehicles()[0];
    assert_eq!(vehicle_extent(car, &config), Extent { min: 40.0, max: 160.0 });

    let truck_lane = truck_at(100.0);
    let truck = &truck_lane.vehicles()[0];
    assert_eq!(vehicle_extent(truck, &config), Extent { min: -5.0, max: 205.0 });
}

#[test]
fn test_car_touching_player_is_not_a_hit() {
    let config = GameConfig::default();
    assert_eq!(find_collision(&car_at(75.0), 0.0, &config), None);
    assert_eq!(find_collision(&car_at(-75.0), 0.0, &config), None);
}

#[test]
fn test_car_overlapping_player_is_a_hit() {
    let config = GameConfig::default();
    assert_eq!(find_collision(&car_at(74.9), 0.0, &config), Some(0));
    assert_eq!(find_collision(&car_at(-74.9), 0.0, &config), Some(0));
}

#[test]
fn test_truck_reaches_further_than_car() {
    let config = GameConfig::default();
    assert_eq!(find_collision(&car_at(100.0), 0.0, &config), None);
    assert_eq!(find_collision(&truck_at(100.0), 0.0, &config), Some(0));
    assert_eq!(find_collision(&truck_at(120.0), 0.0, &config), None);
}

#[test]
fn test_hit_reports_overlapping_vehicle_index() {
    let config = GameConfig::default();
    let lane = Lane::road(
        2,
        VehicleType::Car,
        TravelDirection::Leftward,
        3.0,
        &[-500.0, 300.0, 10.0],
    );
    assert_eq!(find_collision(&lane, 0.0, &config), Some(2));
    assert_eq!(find_collision(&lane, 300.0, &config), Some(1));
}

#[test]
fn test_only_roads_collide() {
    let config = GameConfig::default();
    assert_eq!(find_collision(&Lane::field(0), 0.0, &config), None);
    assert_eq!(find_collision(&Lane::forest(1, &[8]), 0.0, &config), None);
}

#[test]
fn test_only_trees_make_cells_unsafe() {
    let lanes = vec![Lane::field(0), Lane::forest(1, &[2, 8]), car_at(0.0)];

    assert!(is_position_safe(&lanes, 0, 8));
    assert!(!is_position_safe(&lanes, 1, 2));
    assert!(!is_position_safe(&lanes, 1, 8));
    assert!(is_position_safe(&lanes, 1, 3));
    // Roads are safe to step on; vehicles are checked every frame instead
    assert!(is_position_safe(&lanes, 2, 8));
    assert!(is_position_safe(&lanes, 3, 8));
}
