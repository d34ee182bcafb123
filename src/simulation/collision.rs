//! Safety and collision checks
//!
//! Forest trees are checked when a move is requested. Vehicles move on
//! their own, so road lanes are checked every frame instead.

use super::config::GameConfig;
use super::lane::{Lane, Vehicle};

/// A horizontal interval along a lane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub min: f32,
    pub max: f32,
}

impl Extent {
    pub fn centered(center: f32, width: f32) -> Self {
        Self {
            min: center - width / 2.0,
            max: center + width / 2.0,
        }
    }

    /// Open-interval intersection; touching edges do not overlap
    pub fn overlaps(&self, other: &Extent) -> bool {
        self.max > other.min && self.min < other.max
    }
}

/// Hit box of the player centred on `x`
pub fn player_extent(x: f32, config: &GameConfig) -> Extent {
    Extent::centered(x, config.chicken_size * config.zoom)
}

/// Hit box of a vehicle
pub fn vehicle_extent(vehicle: &Vehicle, config: &GameConfig) -> Extent {
    Extent::centered(
        vehicle.x.into_inner(),
        vehicle.vehicle_type.length() * config.zoom,
    )
}

/// Whether the player may step onto `column` of gameplay lane `lane`
///
/// Only a tree blocks a cell. Lanes that are not generated yet count as
/// safe since they are generated before the player arrives.
pub fn is_position_safe(lanes: &[Lane], lane: usize, column: usize) -> bool {
    match lanes.get(lane) {
        Some(lane) => !lane.has_tree_at(column),
        None => true,
    }
}

/// Index of the first vehicle on `lane` overlapping a player at `player_x`
pub fn find_collision(lane: &Lane, player_x: f32, config: &GameConfig) -> Option<usize> {
    if !lane.lane_type().is_road() {
        return None;
    }
    let player = player_extent(player_x, config);
    lane.vehicles()
        .iter()
        .position(|vehicle| player.overlaps(&vehicle_extent(vehicle, config)))
}
