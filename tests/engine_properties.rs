//! Property tests for the movement/collision engine: whatever the steering
//! sequence, every committed tick moves the head by exactly one direction
//! vector, preserves length except on food, and never leaves the snake
//! overlapping itself.

use std::collections::HashSet;

use proptest::prelude::*;

use grid_snake::game::{eats_food, Coordinate, Direction, GameConfig, GamePhase, GridEngine};

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Up),
        Just(Direction::Down),
        Just(Direction::Left),
        Just(Direction::Right),
    ]
}

proptest! {
    #[test]
    fn tick_invariants_hold(
        seed in any::<u64>(),
        steers in proptest::collection::vec(proptest::option::of(direction()), 1..80),
    ) {
        let config = GameConfig::default();
        let tolerance = config.food_tolerance;
        let mut engine = GridEngine::with_seed(config, seed);
        let mut state = engine.reset();

        for steer in steers {
            let prev_head = state.snake.head();
            let prev_heading = state.snake.heading;
            let prev_len = state.snake.len();
            let prev_food = state.food;

            let outcome = engine.tick(&mut state, steer);

            if state.phase == GamePhase::GameOver {
                // A rejected move commits nothing.
                prop_assert_eq!(state.snake.head(), prev_head);
                prop_assert_eq!(state.snake.len(), prev_len);
                break;
            }

            let heading = match steer {
                Some(d) if prev_len <= 1 || !prev_heading.opposes(d) => d,
                _ => prev_heading,
            };
            prop_assert_eq!(state.snake.heading, heading);
            prop_assert_eq!(state.snake.head(), prev_head.step(heading));

            prop_assert_eq!(
                outcome.ate_food,
                eats_food(state.snake.head(), prev_food, tolerance)
            );
            let expected_len = prev_len + usize::from(outcome.ate_food);
            prop_assert_eq!(state.snake.len(), expected_len);

            let distinct: HashSet<Coordinate> =
                state.snake.segments().iter().copied().collect();
            prop_assert_eq!(distinct.len(), state.snake.len());

            prop_assert!(!state.snake.occupies(state.food));
            prop_assert!(state.bounds.contains(state.food));
        }
    }

    #[test]
    fn unit_tolerance_is_exact_equality(
        hx in -5i32..25, hy in -5i32..25,
        fx in -5i32..25, fy in -5i32..25,
    ) {
        let head = Coordinate::new(hx, hy);
        let food = Coordinate::new(fx, fy);
        prop_assert_eq!(eats_food(head, food, 1), head == food);
    }
}
