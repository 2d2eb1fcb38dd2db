use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{
    config::GameConfig,
    direction::Direction,
    state::{Collision, Coordinate, GamePhase, GameState, GridBounds, Snake},
};

/// Food proximity check. The head eats the food when it is strictly within
/// `tolerance` cells on both axes; tolerance 1 degenerates to exact cell
/// equality. The fuzzy radius is deliberate policy, not a bug.
pub fn eats_food(head: Coordinate, food: Coordinate, tolerance: i32) -> bool {
    (head.x - food.x).abs() < tolerance && (head.y - food.y).abs() < tolerance
}

/// What one tick did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    /// The snake ate food this tick and grew by one segment.
    pub ate_food: bool,
    /// Set when this tick ended the game by hitting something.
    pub collision: Option<Collision>,
    /// The snake covers every cell; there is nowhere left to put food.
    pub grid_filled: bool,
}

impl TickOutcome {
    fn idle() -> Self {
        Self {
            ate_food: false,
            collision: None,
            grid_filled: false,
        }
    }

    pub fn game_over(&self) -> bool {
        self.collision.is_some() || self.grid_filled
    }
}

/// Grid movement and collision engine. Pure game logic: owns the rules and
/// the food RNG, never touches a timer, a key event, or a terminal.
pub struct GridEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GridEngine {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic food placement for tests.
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// A fresh board: snake centered heading right, food somewhere off the
    /// snake. Used at startup and on every restart.
    pub fn reset(&mut self) -> GameState {
        let bounds = GridBounds::new(self.config.grid_width, self.config.grid_height);
        let snake = Snake::new(
            Coordinate::new(self.config.grid_width / 2, self.config.grid_height / 2),
            Direction::Right,
            self.config.initial_length,
        );
        // A validated config always leaves free cells at reset.
        let food = self
            .place_food(&snake, bounds)
            .unwrap_or_else(|| Coordinate::new(0, 0));
        GameState::new(snake, food, bounds)
    }

    /// Advance the game one tick. `steer` is the latest pending direction
    /// from the input collaborator, if any; a reversal is ignored while the
    /// snake is longer than one segment. A move into a wall or into the body
    /// is not committed: the state keeps its last valid shape and the phase
    /// flips to `GameOver`.
    pub fn tick(&mut self, state: &mut GameState, steer: Option<Direction>) -> TickOutcome {
        if state.phase == GamePhase::GameOver {
            return TickOutcome::idle();
        }

        if let Some(direction) = steer {
            if state.snake.len() <= 1 || !state.snake.heading.opposes(direction) {
                state.snake.heading = direction;
            }
        }

        let next_head = state.snake.head().step(state.snake.heading);

        if !state.bounds.contains(next_head) {
            state.phase = GamePhase::GameOver;
            return TickOutcome {
                ate_food: false,
                collision: Some(Collision::Wall),
                grid_filled: false,
            };
        }

        let ate_food = eats_food(next_head, state.food, self.config.food_tolerance);
        let advanced = state.snake.advanced(next_head, ate_food);

        if advanced.bites_itself() {
            state.phase = GamePhase::GameOver;
            return TickOutcome {
                ate_food: false,
                collision: Some(Collision::Body),
                grid_filled: false,
            };
        }

        state.snake = advanced;
        state.ticks += 1;

        let mut grid_filled = false;
        if ate_food {
            state.score += self.config.score_per_food;
            match self.place_food(&state.snake, state.bounds) {
                Some(food) => state.food = food,
                None => {
                    // Nowhere left to spawn food: the board is beaten.
                    grid_filled = true;
                    state.phase = GamePhase::GameOver;
                }
            }
        }

        TickOutcome {
            ate_food,
            collision: None,
            grid_filled,
        }
    }

    /// Pick a random cell not occupied by the snake, retrying on collision.
    /// Falls back to a scan once the board is crowded enough that blind
    /// retries stop paying off; `None` means the snake covers everything.
    fn place_food(&mut self, snake: &Snake, bounds: GridBounds) -> Option<Coordinate> {
        let free_cells = bounds.cell_count().saturating_sub(snake.len());
        if free_cells == 0 {
            return None;
        }

        for _ in 0..bounds.cell_count() {
            let cell = Coordinate::new(
                self.rng.gen_range(0..bounds.width),
                self.rng.gen_range(0..bounds.height),
            );
            if !snake.occupies(cell) {
                return Some(cell);
            }
        }

        (0..bounds.height)
            .flat_map(|y| (0..bounds.width).map(move |x| Coordinate::new(x, y)))
            .find(|cell| !snake.occupies(*cell))
    }
}
