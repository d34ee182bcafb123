//! Core types for the crossing game
//!
//! These are standalone types that don't depend on Bevy.

use std::fmt;
use std::str::FromStr;

use anyhow::bail;

/// A move command issued by the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward higher lane indices
    Forward,
    /// Toward lower lane indices
    Backward,
    /// Toward lower column indices
    Left,
    /// Toward higher column indices
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Forward,
        Direction::Backward,
        Direction::Left,
        Direction::Right,
    ];

    /// Grid displacement as (lane delta, column delta)
    pub fn offset(self) -> (i64, i64) {
        match self {
            Direction::Forward => (1, 0),
            Direction::Backward => (-1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Forward => "forward",
            Direction::Backward => "backward",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

impl FromStr for Direction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "f" | "forward" | "up" => Ok(Direction::Forward),
            "b" | "backward" | "back" | "down" => Ok(Direction::Backward),
            "l" | "left" => Ok(Direction::Left),
            "r" | "right" => Ok(Direction::Right),
            other => bail!("unknown direction '{}'", other),
        }
    }
}

/// Type of a lane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LaneType {
    /// Plain grass, nothing on it
    Field,
    /// Grass with static trees that block movement
    Forest,
    /// Road carrying cars
    Car,
    /// Road carrying trucks
    Truck,
}

impl LaneType {
    /// Lane types a lane ahead of the start line is drawn from
    pub const GENERATED: [LaneType; 3] = [LaneType::Car, LaneType::Truck, LaneType::Forest];

    pub fn is_road(self) -> bool {
        matches!(self, LaneType::Car | LaneType::Truck)
    }

    /// The vehicle kind driving on this lane, if it is a road
    pub fn vehicle_type(self) -> Option<VehicleType> {
        match self {
            LaneType::Car => Some(VehicleType::Car),
            LaneType::Truck => Some(VehicleType::Truck),
            LaneType::Field | LaneType::Forest => None,
        }
    }
}

/// Type of vehicle on a road lane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleType {
    Car,
    Truck,
}

impl VehicleType {
    /// Length along the lane before zoom is applied
    pub fn length(self) -> f32 {
        match self {
            VehicleType::Car => CAR_LENGTH,
            VehicleType::Truck => TRUCK_LENGTH,
        }
    }

    /// How many columns one placement slot spans
    pub fn slot_width(self) -> usize {
        match self {
            VehicleType::Car => 2,
            VehicleType::Truck => 3,
        }
    }

    /// Number of vehicles placed on a lane of this kind
    pub fn per_lane(self) -> usize {
        match self {
            VehicleType::Car => 3,
            VehicleType::Truck => 2,
        }
    }
}

/// Which way traffic flows on a road lane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TravelDirection {
    /// Toward negative x
    Leftward,
    /// Toward positive x
    Rightward,
}

impl TravelDirection {
    pub fn sign(self) -> f32 {
        match self {
            TravelDirection::Leftward => -1.0,
            TravelDirection::Rightward => 1.0,
        }
    }
}

/// A 3D position in world units
///
/// `x` runs along a lane, `y` along the forward axis and `z` is height.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn lerp(&self, other: &Position, t: f32) -> Position {
        Position {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
            z: self.z + (other.z - self.z) * t,
        }
    }
}

/// Number of columns on the board
pub const COLUMNS: usize = 17;

/// Width of one grid cell before zoom
pub const POSITION_WIDTH: f32 = 42.0;

/// World scale applied to every size
pub const ZOOM: f32 = 2.0;

/// Footprint of the chicken before zoom
pub const CHICKEN_SIZE: f32 = 15.0;

/// Duration of a single step in milliseconds
pub const STEP_TIME_MS: f64 = 200.0;

/// Peak of the hop arc before zoom
pub const HOP_HEIGHT: f32 = 8.0;

/// Possible road lane speeds
pub const LANE_SPEEDS: [f32; 3] = [2.0, 2.5, 3.0];

/// Speed is divided by this to get world units per millisecond
pub const SPEED_DIVISOR: f32 = 16.0;

/// Trees placed on every forest lane
pub const TREES_PER_FOREST: usize = 4;

/// Crown heights a tree is drawn from
pub const TREE_HEIGHTS: [f32; 3] = [20.0, 45.0, 60.0];

/// Number of vehicle colours to pick from
pub const VEHICLE_COLOR_COUNT: usize = 3;

/// Length of a car before zoom
pub const CAR_LENGTH: f32 = 60.0;

/// Length of a truck before zoom
pub const TRUCK_LENGTH: f32 = 105.0;

/// Field lanes generated behind the start line
pub const BACKDROP_LANES: usize = 9;

/// Lanes kept generated ahead of the player's target
pub const LOOKAHEAD_LANES: usize = 9;

/// Cells of run-off past each board edge before vehicles wrap
pub const WRAP_BUFFER_CELLS: f32 = 2.0;
