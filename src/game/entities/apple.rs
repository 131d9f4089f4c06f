//! Apple entity logic.
//!
//! This module handles placing the apple on a free cell.

use log::debug;
use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::game::entities::Snake;
use crate::game::grid::Grid;
use crate::game::types::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Apple {
    pub pos: Point,
}

/// Pick a uniformly random cell not covered by the snake.
///
/// Column and row are sampled independently and resampled until the cell is free.
/// Returns `None` when the snake covers every cell, which would otherwise never terminate.
pub fn place_apple<R: Rng + ?Sized>(snake: &Snake, grid: &Grid, rng: &mut R) -> Option<Apple> {
    if snake.len() >= grid.capacity() {
        return None;
    }

    let mut attempts = 1u32;
    loop {
        let pos = Point::new(rng.random_range(0..grid.columns), rng.random_range(0..grid.rows));
        if !snake.occupies(pos) {
            debug!("[Apple] Placed at ({}, {}) after {} attempt(s)", pos.x, pos.y, attempts);
            return Some(Apple { pos });
        }
        attempts += 1;
    }
}
