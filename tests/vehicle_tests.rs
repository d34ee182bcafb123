//! Vehicle movement tests

use crossy_road::simulation::{
    advance_lane, GameConfig, GameWorld, Lane, LaneContent, TrackBounds, TravelDirection,
    VehicleType,
};

fn first_x(lane: &Lane) -> f32 {
    lane.vehicles()[0].x.into_inner()
}

#[test]
fn test_displacement_follows_speed_and_elapsed_time() {
    let config = GameConfig::default();

    let mut rightward = Lane::road(1, VehicleType::Car, TravelDirection::Rightward, 2.0, &[0.0]);
    advance_lane(&mut rightward, 100.0, &config);
    assert!((first_x(&rightward) - 12.5).abs() < 1e-4);

    let mut leftward = Lane::road(2, VehicleType::Car, TravelDirection::Leftward, 3.0, &[0.0]);
    advance_lane(&mut leftward, 16.0, &config);
    assert!((first_x(&leftward) + 3.0).abs() < 1e-4);
}

#[test]
fn test_negative_delta_does_not_move_vehicles() {
    let config = GameConfig::default();
    let mut lane = Lane::road(1, VehicleType::Truck, TravelDirection::Rightward, 2.0, &[50.0]);

    advance_lane(&mut lane, -40.0, &config);
    assert_eq!(first_x(&lane), 50.0);
}

#[test]
fn test_track_bounds_include_run_off() {
    let bounds = TrackBounds::from_config(&GameConfig::default());
    assert_eq!(bounds.min, -882.0);
    assert_eq!(bounds.max, 882.0);
}

#[test]
fn test_rightward_vehicle_wraps_to_left_bound() {
    let config = GameConfig::default();
    let mut lane = Lane::road(1, VehicleType::Car, TravelDirection::Rightward, 2.0, &[881.0]);

    let wrapped = advance_lane(&mut lane, 16.0, &config);
    assert_eq!(wrapped, 1);
    assert_eq!(first_x(&lane), -882.0);
}

#[test]
fn test_leftward_vehicle_wraps_to_right_bound() {
    let config = GameConfig::default();
    let mut lane = Lane::road(1, VehicleType::Truck, TravelDirection::Leftward, 2.0, &[-881.0]);

    let wrapped = advance_lane(&mut lane, 16.0, &config);
    assert_eq!(wrapped, 1);
    assert_eq!(first_x(&lane), 882.0);
}

#[test]
fn test_vehicle_at_bound_does_not_wrap() {
    let config = GameConfig::default();
    let mut lane = Lane::road(1, VehicleType::Car, TravelDirection::Rightward, 2.0, &[880.0]);

    assert_eq!(advance_lane(&mut lane, 16.0, &config), 0);
    assert_eq!(first_x(&lane), 882.0);
}

#[test]
fn test_non_road_lanes_are_untouched() {
    let config = GameConfig::default();
    let mut forest = Lane::forest(3, &[2, 4]);
    let before = forest.clone();

    assert_eq!(advance_lane(&mut forest, 500.0, &config), 0);
    assert_eq!(forest, before);
}

#[test]
fn test_traffic_stays_on_track_over_many_frames() {
    let mut world = GameWorld::new_with_seed(GameConfig::default(), 21).unwrap();
    let bounds = TrackBounds::from_config(&world.config);

    let counts: Vec<usize> = world.lanes.iter().map(|lane| lane.vehicles().len()).collect();

    for frame in 0..2000 {
        world.frame(frame as f64 * 16.0);
    }

    // The player never moved, so the same lanes are still in play
    assert_eq!(world.session.games_played, 1);
    let after: Vec<usize> = world.lanes.iter().map(|lane| lane.vehicles().len()).collect();
    assert_eq!(counts, after);

    for lane in &world.lanes {
        if let LaneContent::Road { vehicles, .. } = &lane.content {
            for vehicle in vehicles {
                let x = vehicle.x.into_inner();
                assert!(
                    x >= bounds.min && x <= bounds.max,
                    "Vehicle on lane {} left the track at {}",
                    lane.index,
                    x
                );
            }
        }
    }
}
