#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::time::Duration;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::config::game::{COLUMNS, ROWS, STARTING_X, STARTING_Y, STEP_INTERVAL};
    use crate::game::entities::{Apple, Snake};
    use crate::game::grid::Grid;
    use crate::game::state::GameState;
    use crate::game::systems::{handle_input, step_snake};
    use crate::game::types::{Direction, EndReason, InputEvent, Point};

    /// Just over one step interval, so a single `update` runs exactly one step.
    fn one_step() -> Duration {
        STEP_INTERVAL + Duration::from_millis(1)
    }

    fn assert_invariants(state: &GameState) {
        let cells: HashSet<Point> = state.snake.body.iter().copied().collect();
        assert_eq!(cells.len(), state.snake.len(), "segments overlap: {:?}", state.snake.body);
        assert!(state.snake.body.iter().all(|&p| state.grid.contains(p)));
        assert!(state.snake.len() >= 2);
        assert!(state.snake.len() <= state.grid.capacity());
        assert!(!state.snake.occupies(state.apple.pos), "apple on snake at {:?}", state.apple.pos);
    }

    #[test]
    fn test_initial_state() {
        let state = GameState::new();
        assert!(state.running);
        assert_eq!(state.grid, Grid::new(COLUMNS, ROWS));
        assert_eq!(state.snake.head(), Point::new(STARTING_X, STARTING_Y));
        assert_eq!(state.snake.tail(), Point::new(STARTING_X - 1, STARTING_Y));
        assert_eq!(state.snake.last_direction, Direction::Right);
        assert_invariants(&state);
    }

    #[test]
    fn test_invariants_hold_during_random_play() {
        for seed in 0..20 {
            let mut state = GameState::with_seed(Grid::new(8, 6), Point::new(3, 3), Direction::Right, seed);
            let mut driver = StdRng::seed_from_u64(seed + 1000);
            let directions = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

            for _ in 0..500 {
                let direction = directions[driver.random_range(0..directions.len())];
                handle_input(&mut state, [InputEvent::Arrow(direction)]);

                let before = state.snake.body.clone();
                match step_snake(&mut state) {
                    Ok(()) => assert_invariants(&state),
                    Err(reason) => {
                        // Collisions are detected before the body moves.
                        if reason != EndReason::BoardFull {
                            assert_eq!(state.snake.body, before);
                        }
                        state.end(reason);
                        break;
                    }
                }
            }
        }
    }

    #[test]
    fn test_step_catch_up_runs_three_steps() {
        let mut state = GameState::with_seed(Grid::new(COLUMNS, ROWS), Point::new(7, 9), Direction::Right, 5);
        state.apple = Apple { pos: Point::new(0, 0) };

        state.update(Duration::from_millis(500));

        assert_eq!(STEP_INTERVAL, Duration::from_millis(166));
        assert_eq!(state.steps, 3);
        assert_eq!(state.snake.head(), Point::new(10, 9));
        assert_eq!(state.clock.built_up_time, Duration::from_millis(2));
        assert!(state.running);
    }

    #[test]
    fn test_growth_reuses_previous_tail() {
        let mut state = GameState::with_seed(Grid::new(6, 6), Point::new(2, 2), Direction::Right, 11);
        state.apple = Apple { pos: Point::new(3, 2) };
        let tail_before = state.snake.tail();

        state.update(one_step());

        assert!(state.running);
        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.snake.tail(), tail_before);
        assert_eq!(state.snake.head(), Point::new(3, 2));
        assert_eq!(state.apples_eaten, 1);
        assert_invariants(&state);
    }

    #[test]
    fn test_leaving_the_grid_ends_the_game() {
        let mut state = GameState::with_seed(Grid::new(5, 5), Point::new(0, 2), Direction::Left, 2);
        state.apple = Apple { pos: Point::new(4, 4) };

        state.update(one_step());

        assert!(!state.running);
        assert_eq!(state.end_reason, Some(EndReason::OutOfBounds));
        assert_eq!(state.steps, 0);
    }

    #[test]
    fn test_self_collision_ends_the_game() {
        let grid = Grid::new(5, 5);
        let mut state = GameState::with_seed(grid, Point::new(2, 2), Direction::Down, 4);
        state.snake = Snake::from_segments(
            &grid,
            [Point::new(2, 2), Point::new(2, 1), Point::new(1, 1), Point::new(1, 2), Point::new(1, 3)],
            Direction::Down,
        );
        state.apple = Apple { pos: Point::new(4, 4) };

        handle_input(&mut state, [InputEvent::Arrow(Direction::Left)]);
        state.update(one_step());

        assert!(!state.running);
        assert_eq!(state.end_reason, Some(EndReason::SelfCollision));
    }

    #[test]
    fn test_failed_step_drops_remaining_steps() {
        let mut state = GameState::with_seed(Grid::new(COLUMNS, ROWS), Point::new(COLUMNS - 2, 9), Direction::Right, 8);
        state.apple = Apple { pos: Point::new(0, 0) };

        state.update(Duration::from_secs(1));

        assert!(!state.running);
        assert_eq!(state.end_reason, Some(EndReason::OutOfBounds));
        assert_eq!(state.steps, 1);
        assert_eq!(state.snake.head(), Point::new(COLUMNS - 1, 9));
    }

    #[test]
    fn test_filling_the_board_wins() {
        let mut state = GameState::with_seed(Grid::new(3, 1), Point::new(1, 0), Direction::Right, 6);
        // Only one free cell, so the apple has to be there.
        assert_eq!(state.apple.pos, Point::new(2, 0));

        state.update(one_step());

        assert!(!state.running);
        assert_eq!(state.end_reason, Some(EndReason::BoardFull));
        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.apples_eaten, 1);
    }

    #[test]
    fn test_no_updates_after_quit() {
        let mut state = GameState::with_seed(Grid::new(10, 10), Point::new(5, 5), Direction::Right, 1);
        handle_input(&mut state, [InputEvent::Quit]);
        let head = state.snake.head();

        state.update(Duration::from_secs(2));

        assert_eq!(state.snake.head(), head);
        assert_eq!(state.end_reason, Some(EndReason::Quit));
    }

    #[test]
    fn test_only_first_end_reason_is_kept() {
        let mut state = GameState::with_seed(Grid::new(10, 10), Point::new(5, 5), Direction::Right, 1);
        state.end(EndReason::SelfCollision);
        state.end(EndReason::Quit);
        assert_eq!(state.end_reason, Some(EndReason::SelfCollision));
    }

    #[test]
    fn test_summary_serializes_reason() {
        let mut state = GameState::with_seed(Grid::new(10, 10), Point::new(5, 5), Direction::Right, 1);
        state.end(EndReason::Quit);

        let json = serde_json::to_string(&state.summary()).expect("summary serializes");
        assert!(json.contains(r#""reason":"Quit""#));
        assert!(json.contains(r#""length":2"#));
    }
}
