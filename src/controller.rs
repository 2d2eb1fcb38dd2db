//! Owns the single game-state snapshot and mediates between the tick timer,
//! the input source, and the rendering collaborator.
//!
//! Input events and timer ticks both funnel into one task; nothing else
//! mutates the state. Direction changes arrive asynchronously between ticks
//! and only the latest pending one is consumed when a tick fires.

use std::time::Duration;

use anyhow::Result;
use tokio::sync::{mpsc, watch};
use tokio::time::{interval, MissedTickBehavior};

use crate::game::{Coordinate, GameConfig, GamePhase, GameState, GridEngine, TickOutcome};
use crate::game::Direction;
use crate::metrics::SessionMetrics;

/// An event from the input collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Change heading starting with the next tick.
    Steer(Direction),
    TogglePause,
    Restart,
    Shutdown,
}

/// What the rendering collaborator gets to draw: coordinate lists and the
/// numbers for the chrome, nothing it could mutate the game through.
#[derive(Debug, Clone)]
pub struct FrameSnapshot {
    pub snake: Vec<Coordinate>,
    pub food: Coordinate,
    pub grid_width: i32,
    pub grid_height: i32,
    pub score: u32,
    pub phase: GamePhase,
    pub paused: bool,
    pub high_score: u32,
    pub clock: String,
}

pub struct GameController {
    engine: GridEngine,
    state: GameState,
    metrics: SessionMetrics,
    pending: Option<Direction>,
    paused: bool,
    shutdown: bool,
}

impl GameController {
    pub fn new(config: GameConfig) -> Self {
        let mut engine = GridEngine::new(config);
        let state = engine.reset();
        Self {
            engine,
            state,
            metrics: SessionMetrics::new(),
            pending: None,
            paused: false,
            shutdown: false,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_seed(config: GameConfig, seed: u64) -> Self {
        let mut engine = GridEngine::with_seed(config, seed);
        let state = engine.reset();
        Self {
            engine,
            state,
            metrics: SessionMetrics::new(),
            pending: None,
            paused: false,
            shutdown: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Absorb one command. Steering overwrites any earlier direction queued
    /// this tick; the newest wish wins.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Steer(direction) => {
                self.pending = Some(direction);
            }
            Command::TogglePause => {
                if self.state.is_running() {
                    self.paused = !self.paused;
                }
            }
            Command::Restart => self.restart(),
            Command::Shutdown => self.shutdown = true,
        }
    }

    /// One timer tick. Inert while paused or after game-over; the timer keeps
    /// firing but the state stops moving until a restart.
    pub fn tick(&mut self) -> TickOutcome {
        if self.paused || !self.state.is_running() {
            self.pending = None;
            return TickOutcome {
                ate_food: false,
                collision: None,
                grid_filled: false,
            };
        }

        let steer = self.pending.take();
        let outcome = self.engine.tick(&mut self.state, steer);
        if outcome.game_over() {
            self.metrics.record_game_over(self.state.score);
        }
        outcome
    }

    fn restart(&mut self) {
        if self.state.is_running() {
            // Abandoning a live run still counts as a played game.
            self.metrics.record_game_over(self.state.score);
        }
        self.state = self.engine.reset();
        self.metrics.record_restart();
        self.pending = None;
        self.paused = false;
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            snake: self.state.snake.segments().to_vec(),
            food: self.state.food,
            grid_width: self.state.bounds.width,
            grid_height: self.state.bounds.height,
            score: self.state.score,
            phase: self.state.phase,
            paused: self.paused,
            high_score: self.metrics.high_score,
            clock: self.metrics.clock(),
        }
    }

    /// Drive the game until shutdown: commands on `commands`, ticks from an
    /// internal interval, snapshots out on `frames` after every change. Ends
    /// when `Shutdown` arrives or the command channel closes.
    pub async fn run(
        mut self,
        mut commands: mpsc::Receiver<Command>,
        frames: watch::Sender<FrameSnapshot>,
    ) -> Result<()> {
        let mut ticker = interval(Duration::from_millis(self.engine.config().tick_interval_ms));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        frames.send_replace(self.snapshot());

        loop {
            tokio::select! {
                command = commands.recv() => {
                    match command {
                        Some(command) => self.apply(command),
                        None => break,
                    }
                }
                _ = ticker.tick() => {
                    self.metrics.update();
                    self.tick();
                }
            }

            if self.shutdown {
                break;
            }

            frames.send_replace(self.snapshot());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Collision;

    fn controller() -> GameController {
        GameController::with_seed(GameConfig::default(), 11)
    }

    #[test]
    fn latest_pending_direction_wins() {
        let mut ctl = controller();
        let head = ctl.state().snake.head();

        ctl.apply(Command::Steer(Direction::Up));
        ctl.apply(Command::Steer(Direction::Down));
        ctl.tick();

        assert_eq!(ctl.state().snake.head(), head.step(Direction::Down));
    }

    #[test]
    fn pause_freezes_ticks() {
        let mut ctl = controller();
        let before = ctl.state().snake.head();

        ctl.apply(Command::TogglePause);
        ctl.tick();
        ctl.tick();
        assert_eq!(ctl.state().snake.head(), before);

        ctl.apply(Command::TogglePause);
        ctl.tick();
        assert_ne!(ctl.state().snake.head(), before);
    }

    #[test]
    fn restart_resets_board_and_counts_the_game() {
        let mut ctl = controller();

        // Drive straight into the right wall.
        for _ in 0..30 {
            ctl.tick();
        }
        assert_eq!(ctl.state().phase, GamePhase::GameOver);
        assert_eq!(ctl.metrics.games_played, 1);

        ctl.apply(Command::Restart);
        assert_eq!(ctl.state().phase, GamePhase::Running);
        assert_eq!(ctl.state().score, 0);
        assert_eq!(ctl.state().snake.len(), 3);
    }

    #[test]
    fn game_over_stops_movement_until_restart() {
        let mut ctl = controller();
        for _ in 0..30 {
            ctl.tick();
        }
        let frozen = ctl.state().clone();

        ctl.apply(Command::Steer(Direction::Up));
        let outcome = ctl.tick();

        assert!(outcome.collision.is_none());
        assert_eq!(*ctl.state(), frozen);
    }

    #[test]
    fn wall_run_reports_wall_collision() {
        let mut ctl = controller();
        let mut last = None;
        for _ in 0..30 {
            let outcome = ctl.tick();
            if outcome.game_over() {
                last = outcome.collision;
                break;
            }
        }
        assert_eq!(last, Some(Collision::Wall));
    }

    #[tokio::test]
    async fn run_loop_ticks_and_ends_on_channel_close() {
        let config = GameConfig {
            tick_interval_ms: 1,
            ..GameConfig::default()
        };
        let ctl = GameController::with_seed(config, 3);
        let (tx, rx) = mpsc::channel(8);
        let (frame_tx, frame_rx) = watch::channel(FrameSnapshot {
            snake: Vec::new(),
            food: Coordinate::new(0, 0),
            grid_width: 0,
            grid_height: 0,
            score: 0,
            phase: GamePhase::Running,
            paused: false,
            high_score: 0,
            clock: String::new(),
        });

        let handle = tokio::spawn(ctl.run(rx, frame_tx));

        tx.send(Command::Steer(Direction::Down)).await.unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;
        drop(tx);

        handle.await.unwrap().unwrap();
        let frame = frame_rx.borrow();
        assert!(!frame.snake.is_empty());
        assert_eq!(frame.grid_width, 20);
    }

    #[tokio::test]
    async fn run_loop_ends_on_shutdown_command() {
        let ctl = GameController::with_seed(GameConfig::default(), 5);
        let (tx, rx) = mpsc::channel(8);
        let (frame_tx, _frame_rx) = watch::channel(FrameSnapshot {
            snake: Vec::new(),
            food: Coordinate::new(0, 0),
            grid_width: 0,
            grid_height: 0,
            score: 0,
            phase: GamePhase::Running,
            paused: false,
            high_score: 0,
            clock: String::new(),
        });

        let handle = tokio::spawn(ctl.run(rx, frame_tx));
        tx.send(Command::Shutdown).await.unwrap();
        handle.await.unwrap().unwrap();
    }
}
