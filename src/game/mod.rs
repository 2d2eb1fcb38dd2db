//! Grid movement and collision engine.
//!
//! Pure game logic: advancing the snake's coordinate list each tick,
//! detecting food consumption and wall/self collisions, and flipping the
//! phase to game-over. Nothing here knows about timers, key events, or
//! rendering; those collaborators live in the surrounding modules.

pub mod config;
pub mod direction;
pub mod engine;
pub mod state;

pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{eats_food, GridEngine, TickOutcome};
pub use state::{Collision, Coordinate, GamePhase, GameState, GridBounds, Snake};
