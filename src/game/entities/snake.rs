//! Snake entity.
//!
//! The body is an ordered sequence of cells, head first. Its capacity is
//! reserved up front for the whole grid, so it never reallocates while growing.

use std::collections::VecDeque;

use log::debug;

use crate::game::grid::Grid;
use crate::game::types::{Direction, EndReason, Point};

#[derive(Debug, Clone)]
pub struct Snake {
    pub body: VecDeque<Point>,
    /// Direction applied on the most recent successful step.
    pub last_direction: Direction,
    /// Direction requested by input, applied on the next step.
    pub pending_direction: Direction,
}

impl Snake {
    /// Two-segment snake with its tail one cell behind `head`.
    pub fn new(grid: &Grid, head: Point, direction: Direction) -> Self {
        Self::from_segments(grid, [head, head.shifted(direction.opposite())], direction)
    }

    /// Build a snake from explicit segments, head first.
    pub fn from_segments(
        grid: &Grid,
        segments: impl IntoIterator<Item = Point>,
        direction: Direction,
    ) -> Self {
        let mut body = VecDeque::with_capacity(grid.capacity());
        body.extend(segments);
        debug_assert!(body.len() >= 2, "a snake has at least two segments");

        Self {
            body,
            last_direction: direction,
            pending_direction: direction,
        }
    }

    pub fn head(&self) -> Point {
        self.body[0]
    }

    pub fn tail(&self) -> Point {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn occupies(&self, point: Point) -> bool {
        self.body.contains(&point)
    }

    /// Queue a turn for the next step.
    /// Reversing into the neck is refused; returns whether the turn was accepted.
    pub fn request_turn(&mut self, direction: Direction) -> bool {
        if direction == self.last_direction.opposite() {
            debug!("[Input] Rejected reversal {:?} -> {:?}", self.last_direction, direction);
            return false;
        }
        if direction != self.pending_direction {
            debug!("[Input] Turn queued: {:?}", direction);
        }
        self.pending_direction = direction;
        true
    }

    /// Move one cell in the pending direction.
    ///
    /// Bounds and self-collision are checked before anything is mutated, so a
    /// failed step leaves the body as it was. The current tail does not count
    /// as an obstacle since it vacates its cell during the same step.
    /// Returns the cell the tail left, so the caller can grow the snake back into it.
    pub fn advance(&mut self, grid: &Grid) -> Result<Point, EndReason> {
        let new_head = self.head().shifted(self.pending_direction);

        if !grid.contains(new_head) {
            return Err(EndReason::OutOfBounds);
        }

        let without_tail = self.body.len() - 1;
        if self.body.iter().take(without_tail).any(|&p| p == new_head) {
            return Err(EndReason::SelfCollision);
        }

        let tail = self.tail();
        self.body.pop_back();
        self.body.push_front(new_head);
        self.last_direction = self.pending_direction;

        Ok(tail)
    }

    /// Re-append a segment at the tail.
    pub fn grow(&mut self, tail: Point) {
        self.body.push_back(tail);
    }
}
