//! Player movement state machine
//!
//! The player's logical cell only changes when a step finishes. While a step
//! animates, the continuous position is interpolated between the two cells
//! and lifted along a half-sine hop. Moves issued mid-step are queued and
//! played back to back.

use std::collections::VecDeque;
use std::f32::consts::PI;

use super::config::GameConfig;
use super::types::{Direction, Position};

/// Where the player is in its step cycle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepPhase {
    /// No move queued
    Idle,
    /// A move was queued while idle; it starts on the next frame
    Pending,
    /// The front move of the queue is animating
    Stepping { started_at: f64 },
}

/// Result of advancing the player by one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepUpdate {
    /// Nothing to animate
    Idle,
    /// A step is in flight
    Animating { direction: Direction, progress: f32 },
    /// A step finished and the player now occupies its target cell
    Committed {
        direction: Direction,
        lane: usize,
        column: usize,
    },
}

/// The chicken
#[derive(Debug, Clone)]
pub struct Player {
    /// Committed lane
    pub lane: usize,
    /// Committed column
    pub column: usize,
    pending_moves: VecDeque<Direction>,
    phase: StepPhase,
    position: Position,
}

impl Player {
    pub fn new(lane: usize, column: usize, config: &GameConfig) -> Self {
        Self {
            lane,
            column,
            pending_moves: VecDeque::new(),
            phase: StepPhase::Idle,
            position: rest_position(lane as i64, column, config),
        }
    }

    /// True while any move is queued or animating
    pub fn is_moving(&self) -> bool {
        !self.pending_moves.is_empty()
    }

    pub fn phase(&self) -> StepPhase {
        self.phase
    }

    /// Timestamp at which the current step started
    pub fn step_started_at(&self) -> Option<f64> {
        match self.phase {
            StepPhase::Stepping { started_at } => Some(started_at),
            StepPhase::Idle | StepPhase::Pending => None,
        }
    }

    pub fn pending_moves(&self) -> impl Iterator<Item = Direction> + '_ {
        self.pending_moves.iter().copied()
    }

    /// Continuous position including the in-flight step and hop
    pub fn position(&self) -> Position {
        self.position
    }

    /// Cell the player ends up in once every queued move has played
    pub fn projected_cell(&self) -> (i64, i64) {
        self.pending_moves.iter().fold(
            (self.lane as i64, self.column as i64),
            |(lane, column), direction| {
                let (d_lane, d_column) = direction.offset();
                (lane + d_lane, column + d_column)
            },
        )
    }

    /// Queue an already validated move
    pub fn enqueue(&mut self, direction: Direction) {
        self.pending_moves.push_back(direction);
        if self.phase == StepPhase::Idle {
            self.phase = StepPhase::Pending;
        }
    }

    /// Advance the step animation to `timestamp`
    pub fn update(&mut self, timestamp: f64, config: &GameConfig) -> StepUpdate {
        if self.phase == StepPhase::Pending {
            self.phase = StepPhase::Stepping {
                started_at: timestamp,
            };
        }

        let StepPhase::Stepping { started_at } = self.phase else {
            return StepUpdate::Idle;
        };
        let Some(&direction) = self.pending_moves.front() else {
            self.phase = StepPhase::Idle;
            return StepUpdate::Idle;
        };

        let elapsed = (timestamp - started_at).max(0.0);
        let progress = (elapsed / config.step_time_ms).min(1.0) as f32;

        if elapsed < config.step_time_ms {
            let from = rest_position(self.lane as i64, self.column, config);
            let (d_lane, d_column) = direction.offset();
            let to = rest_position(
                self.lane as i64 + d_lane,
                self.column.saturating_add_signed(d_column as isize),
                config,
            );
            self.position = from.lerp(&to, progress);
            self.position.z = (progress * PI).sin() * config.hop_height * config.zoom;
            return StepUpdate::Animating {
                direction,
                progress,
            };
        }

        self.commit(direction);
        self.pending_moves.pop_front();
        self.phase = if self.pending_moves.is_empty() {
            StepPhase::Idle
        } else {
            StepPhase::Stepping {
                started_at: timestamp,
            }
        };
        self.position = rest_position(self.lane as i64, self.column, config);

        StepUpdate::Committed {
            direction,
            lane: self.lane,
            column: self.column,
        }
    }

    fn commit(&mut self, direction: Direction) {
        match direction {
            Direction::Forward => self.lane += 1,
            Direction::Backward => self.lane = self.lane.saturating_sub(1),
            Direction::Left => self.column = self.column.saturating_sub(1),
            Direction::Right => self.column += 1,
        }
    }
}

/// World position of the centre of a cell, on the ground
pub fn rest_position(lane: i64, column: usize, config: &GameConfig) -> Position {
    Position::new(config.column_center_x(column), config.lane_y(lane), 0.0)
}
