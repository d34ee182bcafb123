//! Session tracking for the crossing game
//!
//! Score and game over state of the current run. Nothing here outlives
//! the process.

/// Score and lifecycle state of a play session
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Furthest lane reached in the current game
    pub score: usize,

    /// Highest score since the process started
    pub best_score: usize,

    /// Set on the frame a collision ends a game
    pub is_game_over: bool,

    /// Games started, including the current one
    pub games_played: u32,

    /// Score of the most recently finished game
    pub last_final_score: Option<usize>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the score to `lane` if it is a new maximum
    pub fn record_lane(&mut self, lane: usize) {
        if lane > self.score {
            self.score = lane;
            self.best_score = self.best_score.max(lane);
        }
    }

    /// Mark the current game as lost and remember its score
    pub fn finish_game(&mut self) -> usize {
        let final_score = self.score;
        self.is_game_over = true;
        self.last_final_score = Some(final_score);
        final_score
    }

    /// Reset the score for a fresh game; the game over flag is left alone
    pub fn begin_game(&mut self) {
        self.score = 0;
        self.games_played += 1;
    }

    /// Drop the game over flag
    pub fn acknowledge_game_over(&mut self) {
        self.is_game_over = false;
    }

    /// Get a summary string for display
    pub fn summary(&self) -> String {
        format!(
            "Score: {} | Best: {} | Games: {}{}",
            self.score,
            self.best_score,
            self.games_played,
            if self.is_game_over { " | GAME OVER" } else { "" }
        )
    }
}
