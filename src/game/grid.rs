//! Grid geometry.

use crate::config::game::{COLUMNS, ROWS};
use crate::game::types::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub columns: i32,
    pub rows: i32,
}

impl Grid {
    pub fn new(columns: i32, rows: i32) -> Self {
        Self { columns, rows }
    }

    pub fn contains(&self, point: Point) -> bool {
        (0..self.columns).contains(&point.x) && (0..self.rows).contains(&point.y)
    }

    /// Total number of cells.
    pub fn capacity(&self) -> usize {
        (self.columns.max(0) as usize) * (self.rows.max(0) as usize)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(COLUMNS, ROWS)
    }
}
