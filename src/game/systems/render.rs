//! Game rendering system.
//!
//! Draws the current state as filled rectangles on any [`Canvas`]. The
//! renderer keeps no state of its own.

use crate::config::window::{
    APPLE_COLOR, BACKGROUND_COLOR, CELL_SIZE, GRID_COLOR, GRID_LINE_WIDTH, SNAKE_COLOR,
};
use crate::game::state::GameState;
use crate::game::types::Point;

/// Packed 0xAARRGGBB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Argb(pub u32);

impl Argb {
    /// Channels as `[r, g, b, a]`.
    pub fn rgba(self) -> [u8; 4] {
        let [a, r, g, b] = self.0.to_be_bytes();
        [r, g, b, a]
    }
}

/// Axis-aligned rectangle in window pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Drawing surface provided by the windowing backend.
pub trait Canvas {
    fn fill_rect(&mut self, rect: PixelRect, color: Argb);
}

/// Draw one full frame: background, apple, snake, then grid lines on top.
pub fn render<C: Canvas + ?Sized>(game_state: &GameState, canvas: &mut C) {
    let width = game_state.grid.columns * CELL_SIZE;
    let height = game_state.grid.rows * CELL_SIZE;

    canvas.fill_rect(PixelRect { x: 0, y: 0, width, height }, Argb(BACKGROUND_COLOR));

    draw_cell(canvas, game_state.apple.pos, Argb(APPLE_COLOR));

    for &segment in &game_state.snake.body {
        draw_cell(canvas, segment, Argb(SNAKE_COLOR));
    }

    for column in 1..game_state.grid.columns {
        let line = PixelRect {
            x: column * CELL_SIZE - GRID_LINE_WIDTH / 2,
            y: 0,
            width: GRID_LINE_WIDTH,
            height,
        };
        canvas.fill_rect(line, Argb(GRID_COLOR));
    }

    for row in 1..game_state.grid.rows {
        let line = PixelRect {
            x: 0,
            y: row * CELL_SIZE - GRID_LINE_WIDTH / 2,
            width,
            height: GRID_LINE_WIDTH,
        };
        canvas.fill_rect(line, Argb(GRID_COLOR));
    }
}

fn draw_cell<C: Canvas + ?Sized>(canvas: &mut C, cell: Point, color: Argb) {
    let rect = PixelRect {
        x: cell.x * CELL_SIZE,
        y: cell.y * CELL_SIZE,
        width: CELL_SIZE,
        height: CELL_SIZE,
    };
    canvas.fill_rect(rect, color);
}
