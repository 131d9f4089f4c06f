/// Window and drawing configuration constants.
///
/// Pixel sizes, colors (packed ARGB) and frame pacing.
use std::time::Duration;

pub const WINDOW_TITLE: &str = "Snake";

/// Window width in pixels.
pub const WIDTH: i32 = 912;

/// Window height in pixels.
pub const HEIGHT: i32 = 912;

/// Side of a grid cell in pixels.
pub const CELL_SIZE: i32 = 48;

/// Thickness of the separator lines drawn between cells.
pub const GRID_LINE_WIDTH: i32 = 2;

/// Delay after each presented frame (~60Hz render cap).
pub const FRAME_DELAY: Duration = Duration::from_millis(16);

pub const GRID_COLOR: u32 = 0xFF444444;
pub const SNAKE_COLOR: u32 = 0xFF00FF00;
pub const APPLE_COLOR: u32 = 0xFFFF0000;
pub const BACKGROUND_COLOR: u32 = 0xFF000000;
