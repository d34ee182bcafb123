//! Host collaborators: where frames come from and where they are drawn
//!
//! The game core never talks to a window or a clock directly. A host hands
//! it a `TimingSource` and a `RenderSurface`; this module also carries the
//! synthetic implementations used by the headless runner and the tests.

use anyhow::{bail, Result};

use super::config::GameConfig;
use super::lane::{Lane, LaneContent};
use super::types::{Position, VehicleType};

/// Borrowed snapshot of everything a render surface draws
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub config: &'a GameConfig,
    pub lanes: &'a [Lane],
    pub backdrop: &'a [Lane],
    /// Continuous player position, hop included
    pub player: Position,
    /// Committed lane of the player
    pub player_lane: usize,
    /// Point the camera follows
    pub camera_focus: Position,
    pub score: usize,
    pub is_game_over: bool,
}

impl<'a> Scene<'a> {
    /// Lane at any index, backdrop included
    pub fn lane(&self, index: i64) -> Option<&'a Lane> {
        if index >= 0 {
            self.lanes.get(index as usize)
        } else {
            self.backdrop.get((-index - 1) as usize)
        }
    }
}

/// Delivers one monotonically increasing timestamp (ms) per displayed frame
pub trait TimingSource {
    /// Timestamp of the next frame, or `None` once the source has stopped
    fn next_frame(&mut self) -> Option<f64>;

    /// Stop delivering frames
    fn detach(&mut self) {}
}

/// Something the scene can be drawn onto
pub trait RenderSurface {
    /// Mount the surface before the first frame
    fn attach(&mut self) -> Result<()>;

    /// Draw one frame
    fn render(&mut self, scene: &Scene<'_>) -> Result<()>;

    /// Release everything the surface holds
    fn release(&mut self) -> Result<()>;
}

/// Synthetic timing source advancing by a fixed step
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    next: f64,
    step_ms: f64,
    remaining: Option<u64>,
}

impl FixedTimestep {
    pub fn new(step_ms: f64) -> Self {
        Self {
            next: 0.0,
            step_ms,
            remaining: None,
        }
    }

    /// Timestamp of the first frame
    pub fn starting_at(mut self, start_ms: f64) -> Self {
        self.next = start_ms;
        self
    }

    /// Stop after `frames` frames
    pub fn with_frame_limit(mut self, frames: u64) -> Self {
        self.remaining = Some(frames);
        self
    }
}

impl TimingSource for FixedTimestep {
    fn next_frame(&mut self) -> Option<f64> {
        if let Some(remaining) = &mut self.remaining {
            if *remaining == 0 {
                return None;
            }
            *remaining -= 1;
        }
        let timestamp = self.next;
        self.next += self.step_ms;
        Some(timestamp)
    }

    fn detach(&mut self) {
        self.remaining = Some(0);
    }
}

/// Render surface printing the board as text every few frames
#[derive(Debug, Clone)]
pub struct AsciiSurface {
    print_every: u64,
    frames_rendered: u64,
    attached: bool,
    last_frame: Vec<String>,
}

impl AsciiSurface {
    /// Print one frame out of every `print_every`; 0 never prints
    pub fn new(print_every: u64) -> Self {
        Self {
            print_every,
            frames_rendered: 0,
            attached: false,
            last_frame: Vec::new(),
        }
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Lines of the most recently rendered frame
    pub fn last_frame(&self) -> &[String] {
        &self.last_frame
    }
}

impl RenderSurface for AsciiSurface {
    fn attach(&mut self) -> Result<()> {
        if self.attached {
            bail!("ASCII surface is already attached");
        }
        self.attached = true;
        Ok(())
    }

    fn render(&mut self, scene: &Scene<'_>) -> Result<()> {
        if !self.attached {
            bail!("ASCII surface is not attached");
        }
        self.frames_rendered += 1;
        self.last_frame = render_ascii(scene, 8, 3);

        if self.print_every > 0 && self.frames_rendered % self.print_every == 0 {
            println!(
                "--- Frame {} | Score: {}{} ---",
                self.frames_rendered,
                scene.score,
                if scene.is_game_over { " | GAME OVER" } else { "" }
            );
            for line in &self.last_frame {
                println!("{}", line);
            }
            println!();
        }
        Ok(())
    }

    fn release(&mut self) -> Result<()> {
        if !self.attached {
            bail!("ASCII surface was already released");
        }
        self.attached = false;
        self.last_frame.clear();
        Ok(())
    }
}

/// Draw the lanes from `behind` lanes below the player to `ahead` lanes
/// above it, furthest lane first
pub fn render_ascii(scene: &Scene<'_>, ahead: usize, behind: usize) -> Vec<String> {
    let config = scene.config;
    let cell = config.cell_size();
    let half_board = config.board_width() / 2.0;

    let player_row = (scene.player.y / cell).round() as i64;
    let player_column = ((scene.player.x + half_board) / cell - 0.5).round() as i64;

    let top = scene.player_lane as i64 + ahead as i64;
    let bottom = scene.player_lane as i64 - behind as i64;

    (bottom..=top)
        .rev()
        .map(|index| {
            let mut row: Vec<char> = match scene.lane(index) {
                Some(lane) => lane_row(lane, config),
                None => vec![' '; config.columns],
            };
            if index == player_row {
                if let Some(slot) = usize::try_from(player_column)
                    .ok()
                    .and_then(|column| row.get_mut(column))
                {
                    *slot = '@';
                }
            }
            format!("{:>4} |{}|", index, row.into_iter().collect::<String>())
        })
        .collect()
}

fn lane_row(lane: &Lane, config: &GameConfig) -> Vec<char> {
    match &lane.content {
        LaneContent::Field => vec!['.'; config.columns],
        LaneContent::Forest { trees } => (0..config.columns)
            .map(|column| if trees.contains_key(&column) { '#' } else { '.' })
            .collect(),
        LaneContent::Road { vehicles, .. } => {
            let mut row = vec!['-'; config.columns];
            for vehicle in vehicles {
                let half_length = vehicle.vehicle_type.length() * config.zoom / 2.0;
                let symbol = match vehicle.vehicle_type {
                    VehicleType::Car => 'C',
                    VehicleType::Truck => 'T',
                };
                for (column, slot) in row.iter_mut().enumerate() {
                    let center = config.column_center_x(column);
                    if (center - vehicle.x.into_inner()).abs() < half_length {
                        *slot = symbol;
                    }
                }
            }
            row
        }
    }
}
