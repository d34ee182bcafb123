//! The game loop handed to a host
//!
//! `Game` binds a `GameWorld` to the host's timing source, render surface
//! and input channel, and exposes the `move` and `cleanup` commands.

use std::sync::mpsc::{self, Receiver, Sender};

use anyhow::{Context, Result};
use log::{debug, info, warn};

use super::surface::{RenderSurface, TimingSource};
use super::types::Direction;
use super::world::{FrameReport, GameWorld, MoveResult};

/// Sending half of the input channel; clone one per input handler
pub type InputSender = Sender<Direction>;

/// Totals reported when a run ends
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub games_played: u32,
    pub collisions: u32,
    pub final_score: usize,
    pub best_score: usize,
}

/// A running game bound to its host collaborators
pub struct Game<S: RenderSurface, T: TimingSource> {
    world: GameWorld,
    surface: Option<S>,
    timing: Option<T>,
    input_tx: Sender<Direction>,
    input_rx: Receiver<Direction>,
    collisions: u32,
}

impl<S: RenderSurface, T: TimingSource> Game<S, T> {
    /// Mount the surface and get ready to run frames
    pub fn initialize(world: GameWorld, mut surface: S, timing: T) -> Result<Self> {
        surface
            .attach()
            .context("Failed to attach render surface")?;
        let (input_tx, input_rx) = mpsc::channel();

        info!(
            "Game initialized with {} columns and {} lanes",
            world.config.columns,
            world.lanes.len()
        );

        Ok(Self {
            world,
            surface: Some(surface),
            timing: Some(timing),
            input_tx,
            input_rx,
            collisions: 0,
        })
    }

    /// A sender input handlers can push moves through from any thread
    pub fn input_sender(&self) -> InputSender {
        self.input_tx.clone()
    }

    /// Request a move right away
    pub fn move_player(&mut self, direction: Direction) -> MoveResult {
        self.world.request_move(direction)
    }

    pub fn world(&self) -> &GameWorld {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut GameWorld {
        &mut self.world
    }

    pub fn score(&self) -> usize {
        self.world.session.score
    }

    pub fn is_game_over(&self) -> bool {
        self.world.session.is_game_over
    }

    /// False once cleaned up or the timing source has run dry
    pub fn is_running(&self) -> bool {
        self.timing.is_some()
    }

    /// Run a single frame
    ///
    /// Returns `None` once the timing source stops or after `cleanup`.
    pub fn run_frame(&mut self) -> Result<Option<FrameReport>> {
        let Some(timing) = self.timing.as_mut() else {
            return Ok(None);
        };
        let Some(timestamp) = timing.next_frame() else {
            debug!("Timing source stopped after {} frames", self.world.frames);
            timing.detach();
            self.timing = None;
            return Ok(None);
        };

        while let Ok(direction) = self.input_rx.try_recv() {
            self.world.request_move(direction);
        }

        let report = self.world.frame(timestamp);
        if report.collision.is_some() {
            self.collisions += 1;
        }

        if let Some(surface) = self.surface.as_mut() {
            surface
                .render(&self.world.scene())
                .with_context(|| format!("Failed to render frame at {:.1}ms", timestamp))?;
        }

        Ok(Some(report))
    }

    /// Run frames until the timing source stops
    pub fn run(&mut self) -> Result<RunSummary> {
        while self.run_frame()?.is_some() {}
        Ok(self.summary())
    }

    pub fn summary(&self) -> RunSummary {
        let session = &self.world.session;
        RunSummary {
            frames: self.world.frames,
            games_played: session.games_played,
            collisions: self.collisions,
            final_score: session.score,
            best_score: session.best_score,
        }
    }

    /// Release the render surface and stop the frame loop
    ///
    /// Safe to call any number of times; only the first call releases.
    pub fn cleanup(&mut self) {
        let timing = self.timing.take();
        let surface = self.surface.take();
        if timing.is_none() && surface.is_none() {
            return;
        }

        if let Some(mut timing) = timing {
            timing.detach();
        }
        if let Some(mut surface) = surface {
            if let Err(e) = surface.release() {
                warn!("Failed to release render surface: {:#}", e);
            }
        }

        info!("Game cleaned up after {} frames", self.world.frames);
    }
}

impl<S: RenderSurface, T: TimingSource> Drop for Game<S, T> {
    fn drop(&mut self) {
        self.cleanup();
    }
}
