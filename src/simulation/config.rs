//! Tunable parameters of a game session
//!
//! Every size is stored before zoom; the coordinate helpers apply it.

use anyhow::{bail, Result};

use super::types::{
    VehicleType, BACKDROP_LANES, CHICKEN_SIZE, COLUMNS, HOP_HEIGHT, LANE_SPEEDS, LOOKAHEAD_LANES,
    POSITION_WIDTH, SPEED_DIVISOR, STEP_TIME_MS, TREES_PER_FOREST, WRAP_BUFFER_CELLS, ZOOM,
};

/// Game configuration shared by all subsystems
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Number of columns on the board
    pub columns: usize,
    /// Width of one grid cell
    pub position_width: f32,
    /// World scale
    pub zoom: f32,
    /// Width of the player's hit box
    pub chicken_size: f32,
    /// Duration of one step in milliseconds
    pub step_time_ms: f64,
    /// Peak of the hop arc
    pub hop_height: f32,
    /// Speeds a road lane is drawn from
    pub lane_speeds: Vec<f32>,
    /// Divides lane speed into world units per millisecond
    pub speed_divisor: f32,
    /// Trees per forest lane
    pub trees_per_forest: usize,
    /// Field lanes generated behind the start line
    pub backdrop_lanes: usize,
    /// Lanes kept generated past the furthest accepted forward target
    pub lookahead_lanes: usize,
    /// Cells of run-off past each board edge before vehicles wrap
    pub wrap_buffer_cells: f32,
    /// Keep the game over state until `restart` instead of restarting at once
    pub pause_on_game_over: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            columns: COLUMNS,
            position_width: POSITION_WIDTH,
            zoom: ZOOM,
            chicken_size: CHICKEN_SIZE,
            step_time_ms: STEP_TIME_MS,
            hop_height: HOP_HEIGHT,
            lane_speeds: LANE_SPEEDS.to_vec(),
            speed_divisor: SPEED_DIVISOR,
            trees_per_forest: TREES_PER_FOREST,
            backdrop_lanes: BACKDROP_LANES,
            lookahead_lanes: LOOKAHEAD_LANES,
            wrap_buffer_cells: WRAP_BUFFER_CELLS,
            pause_on_game_over: false,
        }
    }
}

impl GameConfig {
    /// Check that lanes can be generated and stepped with these settings
    pub fn validate(&self) -> Result<()> {
        if self.columns == 0 {
            bail!("board needs at least one column");
        }
        if self.trees_per_forest >= self.columns {
            bail!(
                "{} trees leave no free column on a {}-column board",
                self.trees_per_forest,
                self.columns
            );
        }
        for vehicle_type in [VehicleType::Car, VehicleType::Truck] {
            let slots = self.vehicle_slots(vehicle_type);
            if vehicle_type.per_lane() > slots {
                bail!(
                    "{} {:?} slots cannot hold {} vehicles",
                    slots,
                    vehicle_type,
                    vehicle_type.per_lane()
                );
            }
        }
        if self.lane_speeds.is_empty() {
            bail!("at least one lane speed is required");
        }
        if self.lane_speeds.iter().any(|speed| !speed.is_finite() || *speed <= 0.0) {
            bail!("lane speeds must be positive: {:?}", self.lane_speeds);
        }
        if !(self.step_time_ms > 0.0) {
            bail!("step time must be positive, got {}", self.step_time_ms);
        }
        if !(self.position_width > 0.0) || !(self.zoom > 0.0) || !(self.speed_divisor > 0.0) {
            bail!("cell width, zoom and speed divisor must be positive");
        }
        Ok(())
    }

    /// Size of one cell in world units
    pub fn cell_size(&self) -> f32 {
        self.position_width * self.zoom
    }

    /// Width of the playable board in world units
    pub fn board_width(&self) -> f32 {
        self.position_width * self.columns as f32 * self.zoom
    }

    /// Column the player starts in
    pub fn start_column(&self) -> usize {
        self.columns / 2
    }

    /// Number of coarse placement slots for a vehicle kind
    pub fn vehicle_slots(&self, vehicle_type: VehicleType) -> usize {
        self.columns.div_ceil(vehicle_type.slot_width())
    }

    /// World x of the centre of a column
    pub fn column_center_x(&self, column: usize) -> f32 {
        (column as f32 * self.position_width + self.position_width / 2.0) * self.zoom
            - self.board_width() / 2.0
    }

    /// World x at which a vehicle placed in `slot` starts
    pub fn slot_x(&self, vehicle_type: VehicleType, slot: usize) -> f32 {
        let slot_span = self.position_width * vehicle_type.slot_width() as f32;
        (slot as f32 * slot_span + self.position_width / 2.0) * self.zoom - self.board_width() / 2.0
    }

    /// World y of a lane
    pub fn lane_y(&self, lane: i64) -> f32 {
        lane as f32 * self.cell_size()
    }

    /// Outer bounds of a road lane's track; vehicles wrap once past them
    pub fn track_bounds(&self) -> (f32, f32) {
        let reach = self.board_width() / 2.0 + self.wrap_buffer_cells * self.cell_size();
        (-reach, reach)
    }
}
