use std::time::Duration;

use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Serialize, Deserialize};

use crate::config::game::{STARTING_DIRECTION, STARTING_X, STARTING_Y, STEP_INTERVAL};
use crate::game::entities::{Apple, Snake, place_apple};
use crate::game::grid::Grid;
use crate::game::systems::{GameClock, step_snake};
use crate::game::types::{Direction, EndReason, Point};

/// Everything the frame loop mutates. Owned by the loop, never shared.
#[derive(Debug, Clone)]
pub struct GameState {
    pub grid: Grid,
    pub snake: Snake,
    pub apple: Apple,
    pub running: bool,
    pub end_reason: Option<EndReason>,
    pub clock: GameClock,
    pub apples_eaten: u32,
    pub steps: u64,
    pub rng: StdRng,
}

/// Logged once the game is over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSummary {
    pub length: usize,
    pub apples_eaten: u32,
    pub steps: u64,
    pub reason: Option<EndReason>,
}

impl GameState {
    /// Full-size board with the configured start, seeded from the OS.
    pub fn new() -> Self {
        Self::spawn(
            Grid::default(),
            Point::new(STARTING_X, STARTING_Y),
            STARTING_DIRECTION,
            StdRng::from_os_rng(),
        )
    }

    /// Deterministic game on an arbitrary board.
    pub fn with_seed(grid: Grid, head: Point, direction: Direction, seed: u64) -> Self {
        Self::spawn(grid, head, direction, StdRng::seed_from_u64(seed))
    }

    fn spawn(grid: Grid, head: Point, direction: Direction, mut rng: StdRng) -> Self {
        let snake = Snake::new(&grid, head, direction);
        let apple = place_apple(&snake, &grid, &mut rng);

        let mut game_state = GameState {
            grid,
            apple: apple.unwrap_or(Apple { pos: snake.tail() }),
            snake,
            running: true,
            end_reason: None,
            clock: GameClock::new(STEP_INTERVAL),
            apples_eaten: 0,
            steps: 0,
            rng,
        };
        if apple.is_none() {
            game_state.end(EndReason::BoardFull);
        }
        game_state
    }

    /// Feed the frame's elapsed time to the clock and run every step that is due.
    /// Steps run back to back; the first failing step ends the game and drops the rest.
    pub fn update(&mut self, elapsed: Duration) {
        if !self.running {
            return;
        }

        let due = self.clock.advance(elapsed);
        for _ in 0..due {
            if let Err(reason) = step_snake(self) {
                self.end(reason);
                break;
            }
        }
    }

    /// Stop the game. Only the first reason is kept.
    pub fn end(&mut self, reason: EndReason) {
        if !self.running {
            return;
        }
        self.running = false;
        self.end_reason = Some(reason);
        info!("[Game] Game over: {} (length={}, steps={})", reason, self.snake.len(), self.steps);
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            length: self.snake.len(),
            apples_eaten: self.apples_eaten,
            steps: self.steps,
            reason: self.end_reason,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
