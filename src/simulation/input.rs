//! Turning raw host input into move commands

use anyhow::{Context, Result};

use super::types::Direction;

/// Minimum travel in pixels before a touch counts as a swipe
pub const MIN_SWIPE_DISTANCE: f32 = 50.0;

/// Map a keyboard key name to a move
pub fn direction_from_key(key: &str) -> Option<Direction> {
    match key {
        "ArrowUp" => Some(Direction::Forward),
        "ArrowDown" => Some(Direction::Backward),
        "ArrowLeft" => Some(Direction::Left),
        "ArrowRight" => Some(Direction::Right),
        _ => None,
    }
}

/// Classify a touch drag of (`dx`, `dy`) screen pixels
///
/// The axis with the larger travel wins, ties going to the vertical axis.
/// Screen y grows downward, so a downward swipe moves backward.
pub fn classify_swipe(dx: f32, dy: f32, min_distance: f32) -> Option<Direction> {
    let (abs_dx, abs_dy) = (dx.abs(), dy.abs());
    if abs_dx <= min_distance && abs_dy <= min_distance {
        return None;
    }

    let direction = if abs_dx > abs_dy {
        if dx > 0.0 {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if dy > 0.0 {
        Direction::Backward
    } else {
        Direction::Forward
    };
    Some(direction)
}

/// Tracks a single-finger touch from start to release
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    start: Option<(f32, f32)>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, x: f32, y: f32) {
        self.start = Some((x, y));
    }

    /// Finish the touch at (`x`, `y`) and classify it
    pub fn end(&mut self, x: f32, y: f32) -> Option<Direction> {
        let (start_x, start_y) = self.start.take()?;
        classify_swipe(x - start_x, y - start_y, MIN_SWIPE_DISTANCE)
    }

    pub fn cancel(&mut self) {
        self.start = None;
    }
}

/// Parse a scripted move list
///
/// Tokens are separated by commas or whitespace. A token is either a
/// direction word (`forward`, `up`, `left`, ...) or a run of the letters
/// `f`, `b`, `l` and `r`, one move per letter.
pub fn parse_move_script(script: &str) -> Result<Vec<Direction>> {
    let mut moves = Vec::new();
    let tokens = script
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty());

    for (i, token) in tokens.enumerate() {
        if let Ok(direction) = token.parse::<Direction>() {
            moves.push(direction);
            continue;
        }
        for letter in token.chars() {
            let direction = letter
                .to_string()
                .parse::<Direction>()
                .with_context(|| format!("Invalid token #{} '{}' in move script", i + 1, token))?;
            moves.push(direction);
        }
    }
    Ok(moves)
}
