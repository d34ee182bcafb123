//! Lane generation tests

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crossy_road::simulation::{
    GameConfig, Lane, LaneContent, LaneType, VehicleType, LANE_SPEEDS, TREE_HEIGHTS,
};

fn generate_many(config: &GameConfig, seed: u64, count: i64) -> Vec<Lane> {
    let mut rng = StdRng::seed_from_u64(seed);
    (1..=count)
        .map(|index| Lane::generate(index, config, &mut rng))
        .collect()
}

#[test]
fn test_lanes_at_or_behind_start_are_fields() {
    let config = GameConfig::default();
    let mut rng = StdRng::seed_from_u64(3);

    for index in -9..=0 {
        let lane = Lane::generate(index, &config, &mut rng);
        assert_eq!(lane.index, index);
        assert_eq!(lane.lane_type(), LaneType::Field);
        assert!(lane.vehicles().is_empty());
    }
}

#[test]
fn test_generated_lanes_cover_every_kind() {
    let config = GameConfig::default();
    let lanes = generate_many(&config, 42, 300);

    let kinds: BTreeSet<_> = lanes
        .iter()
        .map(|lane| format!("{:?}", lane.lane_type()))
        .collect();
    assert!(kinds.contains("Car"));
    assert!(kinds.contains("Truck"));
    assert!(kinds.contains("Forest"));
    assert!(!kinds.contains("Field"), "Fields only appear at the start");
}

#[test]
fn test_forest_trees_are_distinct_and_in_range() {
    let config = GameConfig::default();

    for lane in generate_many(&config, 7, 300) {
        if let LaneContent::Forest { trees } = &lane.content {
            assert_eq!(trees.len(), config.trees_per_forest);
            for (&column, height) in trees {
                assert!(column < config.columns);
                assert!(TREE_HEIGHTS.contains(height));
                assert!(lane.has_tree_at(column));
            }
        }
    }
}

#[test]
fn test_road_vehicles_use_distinct_slots() {
    let config = GameConfig::default();

    for lane in generate_many(&config, 11, 300) {
        let LaneContent::Road {
            vehicle_type,
            speed,
            vehicles,
            ..
        } = &lane.content
        else {
            continue;
        };

        let expected = match vehicle_type {
            VehicleType::Car => 3,
            VehicleType::Truck => 2,
        };
        assert_eq!(vehicles.len(), expected);
        assert!(LANE_SPEEDS.contains(speed));

        let slots: BTreeSet<usize> = vehicles.iter().map(|vehicle| vehicle.slot).collect();
        assert_eq!(slots.len(), vehicles.len(), "Two vehicles share a slot");

        for vehicle in vehicles {
            assert_eq!(vehicle.vehicle_type, *vehicle_type);
            assert!(vehicle.slot < config.vehicle_slots(*vehicle_type));
            assert_eq!(
                vehicle.x.into_inner(),
                config.slot_x(*vehicle_type, vehicle.slot)
            );
        }
    }
}

#[test]
fn test_same_seed_generates_same_lanes() {
    let config = GameConfig::default();
    assert_eq!(generate_many(&config, 99, 50), generate_many(&config, 99, 50));
}

#[test]
fn test_crowded_board_still_places_every_tree() {
    let config = GameConfig {
        columns: 5,
        trees_per_forest: 4,
        ..GameConfig::default()
    };
    config.validate().expect("Four trees fit on five columns");

    let mut forests = 0;
    for lane in generate_many(&config, 5, 200) {
        match &lane.content {
            LaneContent::Forest { trees } => {
                forests += 1;
                assert_eq!(trees.len(), 4);
                assert!(trees.keys().all(|&column| column < 5));
            }
            LaneContent::Road {
                vehicle_type,
                vehicles,
                ..
            } => {
                assert_eq!(vehicles.len(), vehicle_type.per_lane());
            }
            LaneContent::Field => panic!("Generated a field ahead of the start"),
        }
    }
    assert!(forests > 0);
}

#[test]
fn test_helper_constructors() {
    let forest = Lane::forest(4, &[1, 3]);
    assert_eq!(forest.lane_type(), LaneType::Forest);
    assert!(forest.has_tree_at(1));
    assert!(!forest.has_tree_at(2));

    let road = Lane::road(
        5,
        VehicleType::Truck,
        crossy_road::simulation::TravelDirection::Leftward,
        2.5,
        &[-100.0, 300.0],
    );
    assert_eq!(road.lane_type(), LaneType::Truck);
    assert_eq!(road.vehicles().len(), 2);
    assert_eq!(
        road.traffic(),
        Some((crossy_road::simulation::TravelDirection::Leftward, 2.5))
    );
    assert_eq!(Lane::field(0).traffic(), None);
}

#[test]
fn test_without_speeds_roads_fall_back_to_fields() {
    let config = GameConfig {
        lane_speeds: Vec::new(),
        ..GameConfig::default()
    };
    assert!(config.validate().is_err());

    let lanes = generate_many(&config, 13, 200);
    assert!(lanes.iter().all(|lane| !lane.lane_type().is_road()));
    assert!(lanes.iter().any(|lane| lane.lane_type() == LaneType::Field));
    assert!(lanes.iter().any(|lane| lane.lane_type() == LaneType::Forest));
}
