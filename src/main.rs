//! Main entry point for the Snake game.
//!
//! Opens the window, then runs one frame per iteration: drain input, advance the
//! fixed-step simulation, render and present, until the game stops running.

use std::time::Instant;

use log::{info, warn};
use macroquad::window::next_frame;

use frontend::{InputQueue, MacroquadCanvas, window_conf};
use game::state::GameState;
use game::systems::{handle_input, render};

pub mod config;
mod frontend;
mod game;

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize logger from environment variable.
    env_logger::init();

    let mut game_state = GameState::new();
    let mut input = InputQueue::new();
    let mut canvas = MacroquadCanvas;

    info!(
        "[Game] Start: {}x{} grid, head at ({}, {})",
        game_state.grid.columns,
        game_state.grid.rows,
        game_state.snake.head().x,
        game_state.snake.head().y
    );

    let mut last_frame = Instant::now();
    while game_state.running {
        handle_input(&mut game_state, input.drain());

        let now = Instant::now();
        game_state.update(now - last_frame);
        last_frame = now;

        render(&game_state, &mut canvas);
        next_frame().await;

        std::thread::sleep(config::window::FRAME_DELAY);
    }

    match serde_json::to_string(&game_state.summary()) {
        Ok(summary) => info!("[Game] Summary: {}", summary),
        Err(e) => warn!("[Game] Could not serialize summary: {}", e),
    }
}
