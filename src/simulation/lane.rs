//! Procedural lane generation
//!
//! Lanes are generated one at a time from their index. Lanes at or behind
//! the start line are always plain fields; lanes ahead of it are a uniform
//! pick of car road, truck road or forest with randomly placed occupants.

use std::collections::{BTreeMap, BTreeSet};

use log::debug;
use ordered_float::OrderedFloat;
use rand::seq::IndexedRandom;
use rand::Rng;

use super::config::GameConfig;
use super::types::{
    LaneType, TravelDirection, VehicleType, TREE_HEIGHTS, VEHICLE_COLOR_COUNT,
};

/// Random draws per occupant before falling back to the first free slot
const MAX_PLACEMENT_ATTEMPTS: usize = 64;

/// A vehicle driving along a road lane
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub vehicle_type: VehicleType,
    /// Coarse slot the vehicle was placed in
    pub slot: usize,
    /// Horizontal world position of the vehicle's centre
    pub x: OrderedFloat<f32>,
    /// Index into the vehicle colour palette
    pub color_index: usize,
}

/// What sits on a lane
#[derive(Debug, Clone, PartialEq)]
pub enum LaneContent {
    Field,
    Forest {
        /// Occupied columns mapped to the tree's crown height
        trees: BTreeMap<usize, f32>,
    },
    Road {
        vehicle_type: VehicleType,
        direction: TravelDirection,
        speed: f32,
        vehicles: Vec<Vehicle>,
    },
}

/// One row of the board
#[derive(Debug, Clone, PartialEq)]
pub struct Lane {
    pub index: i64,
    pub content: LaneContent,
}

impl Lane {
    /// Generate the lane at `index`
    ///
    /// Expects a config that passed `GameConfig::validate`. Without any
    /// lane speed a road cannot be drawn and the lane falls back to a field.
    pub fn generate<R: Rng>(index: i64, config: &GameConfig, rng: &mut R) -> Lane {
        if index <= 0 {
            return Lane::field(index);
        }

        let lane_type = LaneType::GENERATED[rng.random_range(0..LaneType::GENERATED.len())];
        let lane = match lane_type.vehicle_type() {
            None => Self::generate_forest(index, config, rng),
            Some(vehicle_type) => Self::generate_road(index, vehicle_type, config, rng),
        };
        debug!("Generated lane {} as {:?}", index, lane.lane_type());
        lane
    }

    fn generate_forest<R: Rng>(index: i64, config: &GameConfig, rng: &mut R) -> Lane {
        let mut occupied = BTreeSet::new();
        let mut trees = BTreeMap::new();
        for _ in 0..config.trees_per_forest {
            let Some(column) = pick_free_slot(rng, config.columns, &occupied) else {
                break;
            };
            occupied.insert(column);
            let height = TREE_HEIGHTS[rng.random_range(0..TREE_HEIGHTS.len())];
            trees.insert(column, height);
        }
        Lane {
            index,
            content: LaneContent::Forest { trees },
        }
    }

    fn generate_road<R: Rng>(
        index: i64,
        vehicle_type: VehicleType,
        config: &GameConfig,
        rng: &mut R,
    ) -> Lane {
        let direction = if rng.random_bool(0.5) {
            TravelDirection::Leftward
        } else {
            TravelDirection::Rightward
        };

        let slots = config.vehicle_slots(vehicle_type);
        let mut occupied = BTreeSet::new();
        let mut vehicles = Vec::with_capacity(vehicle_type.per_lane());
        for _ in 0..vehicle_type.per_lane() {
            let Some(slot) = pick_free_slot(rng, slots, &occupied) else {
                break;
            };
            occupied.insert(slot);
            vehicles.push(Vehicle {
                vehicle_type,
                slot,
                x: OrderedFloat(config.slot_x(vehicle_type, slot)),
                color_index: rng.random_range(0..VEHICLE_COLOR_COUNT),
            });
        }

        let Some(&speed) = config.lane_speeds.choose(rng) else {
            return Lane::field(index);
        };

        Lane {
            index,
            content: LaneContent::Road {
                vehicle_type,
                direction,
                speed,
                vehicles,
            },
        }
    }

    /// An empty grass lane
    pub fn field(index: i64) -> Lane {
        Lane {
            index,
            content: LaneContent::Field,
        }
    }

    /// A forest lane with trees at the given columns
    pub fn forest(index: i64, columns: &[usize]) -> Lane {
        let trees = columns.iter().map(|&column| (column, TREE_HEIGHTS[0])).collect();
        Lane {
            index,
            content: LaneContent::Forest { trees },
        }
    }

    /// A road lane with vehicles at the given world x positions
    pub fn road(
        index: i64,
        vehicle_type: VehicleType,
        direction: TravelDirection,
        speed: f32,
        positions: &[f32],
    ) -> Lane {
        let vehicles = positions
            .iter()
            .enumerate()
            .map(|(slot, &x)| Vehicle {
                vehicle_type,
                slot,
                x: OrderedFloat(x),
                color_index: 0,
            })
            .collect();
        Lane {
            index,
            content: LaneContent::Road {
                vehicle_type,
                direction,
                speed,
                vehicles,
            },
        }
    }

    pub fn lane_type(&self) -> LaneType {
        match &self.content {
            LaneContent::Field => LaneType::Field,
            LaneContent::Forest { .. } => LaneType::Forest,
            LaneContent::Road { vehicle_type, .. } => match vehicle_type {
                VehicleType::Car => LaneType::Car,
                VehicleType::Truck => LaneType::Truck,
            },
        }
    }

    /// Whether a tree stands in `column`
    pub fn has_tree_at(&self, column: usize) -> bool {
        match &self.content {
            LaneContent::Forest { trees } => trees.contains_key(&column),
            _ => false,
        }
    }

    /// Vehicles on this lane; empty unless it is a road
    pub fn vehicles(&self) -> &[Vehicle] {
        match &self.content {
            LaneContent::Road { vehicles, .. } => vehicles,
            _ => &[],
        }
    }

    /// Travel direction and speed of a road lane
    pub fn traffic(&self) -> Option<(TravelDirection, f32)> {
        match &self.content {
            LaneContent::Road {
                direction, speed, ..
            } => Some((*direction, *speed)),
            _ => None,
        }
    }
}

/// Rejection-sample a slot in `0..slots` not yet in `taken`
///
/// Retries are capped; past the cap the lowest free slot is used so that a
/// crowded lane still terminates. Returns `None` only if every slot is taken.
fn pick_free_slot<R: Rng>(
    rng: &mut R,
    slots: usize,
    taken: &BTreeSet<usize>,
) -> Option<usize> {
    if slots == 0 || taken.len() >= slots {
        return None;
    }
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let candidate = rng.random_range(0..slots);
        if !taken.contains(&candidate) {
            return Some(candidate);
        }
    }
    (0..slots).find(|slot| !taken.contains(slot))
}
