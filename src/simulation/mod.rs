//! Standalone game simulation module
//!
//! This module contains all the core game logic that can run independently
//! of the Bevy game engine. It can be driven from the console or from tests
//! without booting up a window.

mod collision;
mod config;
mod game;
mod game_state;
mod input;
mod lane;
mod player;
mod surface;
mod types;
mod vehicle;
mod world;

// Re-export public types for external use
pub use collision::{find_collision, is_position_safe, player_extent, vehicle_extent, Extent};
pub use config::GameConfig;
pub use game::{Game, InputSender, RunSummary};
pub use game_state::Session;
pub use input::{
    classify_swipe, direction_from_key, parse_move_script, SwipeTracker, MIN_SWIPE_DISTANCE,
};
pub use lane::{Lane, LaneContent, Vehicle};
pub use player::{rest_position, Player, StepPhase, StepUpdate};
pub use surface::{render_ascii, AsciiSurface, FixedTimestep, RenderSurface, Scene, TimingSource};
#[allow(unused_imports)]
pub use types::{
    Direction, LaneType, Position, TravelDirection, VehicleType, BACKDROP_LANES, CAR_LENGTH,
    CHICKEN_SIZE, COLUMNS, HOP_HEIGHT, LANE_SPEEDS, LOOKAHEAD_LANES, POSITION_WIDTH,
    SPEED_DIVISOR, STEP_TIME_MS, TREES_PER_FOREST, TREE_HEIGHTS, TRUCK_LENGTH,
    VEHICLE_COLOR_COUNT, WRAP_BUFFER_CELLS, ZOOM,
};
pub use vehicle::{advance_lane, TrackBounds};
pub use world::{Collision, FrameReport, GameWorld, MoveRejection, MoveResult};
