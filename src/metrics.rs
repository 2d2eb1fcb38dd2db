//! Session bookkeeping across restarts: high score, games played, the
//! running clock shown in the header bar.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct SessionMetrics {
    started_at: Instant,
    elapsed: Duration,
    pub high_score: u32,
    pub games_played: u32,
}

impl SessionMetrics {
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
            elapsed: Duration::ZERO,
            high_score: 0,
            games_played: 0,
        }
    }

    /// Refresh the clock; called once per rendered frame.
    pub fn update(&mut self) {
        self.elapsed = self.started_at.elapsed();
    }

    pub fn record_restart(&mut self) {
        self.started_at = Instant::now();
        self.elapsed = Duration::ZERO;
    }

    pub fn record_game_over(&mut self, final_score: u32) {
        self.games_played += 1;
        self.high_score = self.high_score.max(final_score);
    }

    /// Elapsed time as `MM:SS`.
    pub fn clock(&self) -> String {
        let secs = self.elapsed.as_secs();
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self::new()
    }
}
