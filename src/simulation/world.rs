//! Main game world that ties everything together
//!
//! `GameWorld` owns the lanes, the player and the session, and advances
//! them one rendered frame at a time. It has no Bevy dependencies.

use anyhow::Result;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::collision::{find_collision, is_position_safe};
use super::config::GameConfig;
use super::game_state::Session;
use super::lane::Lane;
use super::player::{Player, StepUpdate};
use super::surface::{render_ascii, Scene};
use super::types::{Direction, Position};
use super::vehicle::advance_lane;

/// Why a move request was ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    /// The game is over
    GameOver,
    /// The target cell is off the board or behind the start line
    OutOfBounds,
    /// A tree stands on the target cell
    Blocked,
}

/// Outcome of a move request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    Accepted,
    Rejected(MoveRejection),
}

/// A collision between the player and a vehicle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collision {
    pub lane: usize,
    /// Index of the vehicle within its lane
    pub vehicle: usize,
    /// Score of the game the collision ended
    pub final_score: usize,
}

/// What happened during one frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    pub timestamp: f64,
    pub delta_ms: f64,
    pub step: StepUpdate,
    pub collision: Option<Collision>,
    pub score: usize,
}

/// The main game world
pub struct GameWorld {
    /// Configuration shared by every subsystem
    pub config: GameConfig,

    /// Gameplay lanes; `lanes[i].index == i`
    pub lanes: Vec<Lane>,

    /// Field lanes behind the start line, nearest first
    pub backdrop: Vec<Lane>,

    /// The chicken
    pub player: Player,

    /// Score and game over state
    pub session: Session,

    /// Frames run since the world was created
    pub frames: u64,

    previous_timestamp: Option<f64>,

    /// Optional seeded RNG for reproducible games
    rng: Option<StdRng>,
}

impl Default for GameWorld {
    fn default() -> Self {
        Self::new_internal(GameConfig::default(), None)
    }
}

impl GameWorld {
    fn new_internal(config: GameConfig, rng: Option<StdRng>) -> Self {
        let player = Player::new(0, config.start_column(), &config);
        let mut world = Self {
            config,
            lanes: Vec::new(),
            backdrop: Vec::new(),
            player,
            session: Session::new(),
            frames: 0,
            previous_timestamp: None,
            rng,
        };
        world.initialize_values();
        world
    }

    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new_internal(config, None))
    }

    /// Create a new GameWorld with a seeded RNG for reproducible games
    pub fn new_with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        Ok(Self::new_internal(config, Some(StdRng::seed_from_u64(seed))))
    }

    fn generate_lane(&mut self, index: i64) -> Lane {
        match &mut self.rng {
            Some(rng) => Lane::generate(index, &self.config, rng),
            None => Lane::generate(index, &self.config, &mut rand::rng()),
        }
    }

    fn random_column(&mut self) -> usize {
        let columns = self.config.columns;
        match &mut self.rng {
            Some(rng) => rng.random_range(0..columns),
            None => rand::rng().random_range(0..columns),
        }
    }

    /// Throw away all lanes and start a fresh game
    fn initialize_values(&mut self) {
        let mut backdrop = Vec::with_capacity(self.config.backdrop_lanes);
        for offset in 1..=self.config.backdrop_lanes {
            backdrop.push(self.generate_lane(-(offset as i64)));
        }
        self.backdrop = backdrop;

        self.lanes.clear();
        self.ensure_lanes_through(self.config.lookahead_lanes);

        let mut column = self.config.start_column();
        while !is_position_safe(&self.lanes, 0, column) {
            column = self.random_column();
        }

        self.player = Player::new(0, column, &self.config);
        self.previous_timestamp = None;
        self.session.begin_game();

        info!(
            "Starting game {} at column {}",
            self.session.games_played, column
        );
    }

    /// Generate lanes one at a time until `last` exists
    fn ensure_lanes_through(&mut self, last: usize) {
        while self.lanes.len() <= last {
            let lane = self.generate_lane(self.lanes.len() as i64);
            self.lanes.push(lane);
        }
    }

    /// Whether the player may step onto a cell
    pub fn is_position_safe(&self, lane: usize, column: usize) -> bool {
        is_position_safe(&self.lanes, lane, column)
    }

    /// Validate a move against the player's projected cell and queue it
    ///
    /// Rejected moves leave the world untouched.
    pub fn request_move(&mut self, direction: Direction) -> MoveResult {
        let result = self.try_queue_move(direction);
        if let MoveResult::Rejected(reason) = result {
            debug!("Ignored move {}: {:?}", direction, reason);
        }
        result
    }

    fn try_queue_move(&mut self, direction: Direction) -> MoveResult {
        if self.session.is_game_over {
            return MoveResult::Rejected(MoveRejection::GameOver);
        }

        let (lane, column) = self.player.projected_cell();
        let (d_lane, d_column) = direction.offset();
        let (target_lane, target_column) = (lane + d_lane, column + d_column);

        if target_column < 0 || target_column >= self.config.columns as i64 || target_lane < 0 {
            return MoveResult::Rejected(MoveRejection::OutOfBounds);
        }
        let (target_lane, target_column) = (target_lane as usize, target_column as usize);

        // The target lane must exist before its trees can be checked
        if direction == Direction::Forward {
            self.ensure_lanes_through(target_lane + self.config.lookahead_lanes);
        }

        if !self.is_position_safe(target_lane, target_column) {
            return MoveResult::Rejected(MoveRejection::Blocked);
        }

        self.player.enqueue(direction);
        MoveResult::Accepted
    }

    /// Run one frame at `timestamp` milliseconds
    pub fn frame(&mut self, timestamp: f64) -> FrameReport {
        self.frames += 1;

        let delta_ms = match self.previous_timestamp {
            Some(previous) => (timestamp - previous).max(0.0),
            None => 0.0,
        };
        self.previous_timestamp = Some(timestamp);

        if self.session.is_game_over && !self.config.pause_on_game_over {
            self.session.acknowledge_game_over();
        }

        for lane in self.lanes.iter_mut() {
            advance_lane(lane, delta_ms as f32, &self.config);
        }

        if self.session.is_game_over {
            return FrameReport {
                timestamp,
                delta_ms,
                step: StepUpdate::Idle,
                collision: None,
                score: self.session.score,
            };
        }

        let step = self.player.update(timestamp, &self.config);
        if let StepUpdate::Committed {
            direction,
            lane,
            column,
        } = step
        {
            debug!("Stepped {} to lane {}, column {}", direction, lane, column);
            if direction == Direction::Forward {
                self.session.record_lane(lane);
            }
        }

        let collision = self.check_collision();

        FrameReport {
            timestamp,
            delta_ms,
            step,
            collision,
            score: self.session.score,
        }
    }

    /// Test the player's lane for a vehicle hit and end the game on one
    fn check_collision(&mut self) -> Option<Collision> {
        let lane_index = self.player.lane;
        let lane = self.lanes.get(lane_index)?;
        let vehicle = find_collision(lane, self.player.position().x, &self.config)?;

        let final_score = self.session.finish_game();
        info!(
            "Game over: hit by a {:?} on lane {} with score {}",
            lane.lane_type(),
            lane_index,
            final_score
        );

        if !self.config.pause_on_game_over {
            self.initialize_values();
        }

        Some(Collision {
            lane: lane_index,
            vehicle,
            final_score,
        })
    }

    /// Start a new game, clearing a held game over state
    pub fn restart(&mut self) {
        self.session.acknowledge_game_over();
        self.initialize_values();
    }

    /// Borrowed snapshot of everything a render surface draws
    pub fn scene(&self) -> Scene<'_> {
        let player = self.player.position();
        Scene {
            config: &self.config,
            lanes: &self.lanes,
            backdrop: &self.backdrop,
            player,
            player_lane: self.player.lane,
            camera_focus: Position::new(player.x, player.y, 0.0),
            score: self.session.score,
            is_game_over: self.session.is_game_over,
        }
    }

    /// Print a summary of the world state
    pub fn print_summary(&self) {
        println!("=== Crossy Road Summary ===");
        println!("Frames: {}", self.frames);
        println!("{}", self.session.summary());
        println!(
            "Player: lane {}, column {}, queued moves: {}",
            self.player.lane,
            self.player.column,
            self.player.pending_moves().count()
        );
        println!("Lanes generated: {}", self.lanes.len());
        if let Some(lane) = self.lanes.get(self.player.lane) {
            println!("Current lane: {:?}", lane.lane_type());
        }
    }

    /// Draw the lanes around the player in the terminal
    pub fn draw_map(&self) {
        println!("\n=== Board ===");
        println!("Legend: @=Chicken, #=Tree, C=Car, T=Truck, .=Grass, -=Road");
        println!();
        for line in render_ascii(&self.scene(), 8, 3) {
            println!("{}", line);
        }
        println!();
    }
}
