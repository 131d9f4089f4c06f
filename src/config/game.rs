/// Game configuration constants.
/// 
/// This module defines the gameplay parameters: grid dimensions, snake speed
/// and starting position.
use std::time::Duration;

use crate::config::window::{CELL_SIZE, HEIGHT, WIDTH};
use crate::game::types::Direction;

/// Number of columns in the game grid.
pub const COLUMNS: i32 = WIDTH / CELL_SIZE;

/// Number of rows in the game grid.
pub const ROWS: i32 = HEIGHT / CELL_SIZE;

pub const SPEED: u64 = 6; // Grid cells per second.

/// Time between two discrete snake steps.
pub const STEP_INTERVAL: Duration = Duration::from_millis(1000 / SPEED);

/// Starting head cell. The tail starts one cell behind it.
pub const STARTING_X: i32 = 7;
pub const STARTING_Y: i32 = 9;

pub const STARTING_DIRECTION: Direction = Direction::Right;
