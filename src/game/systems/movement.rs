//! Snake movement system.
//!
//! This module runs one discrete step of the simulation.

use crate::game::state::GameState;
use crate::game::systems::rules::apply_apple_rules;
use crate::game::types::EndReason;

/// Advance the snake one cell, then resolve apple consumption.
/// An `Err` carries the reason the game has to stop.
pub fn step_snake(game_state: &mut GameState) -> Result<(), EndReason> {
    let vacated_tail = game_state.snake.advance(&game_state.grid)?;
    game_state.steps += 1;

    apply_apple_rules(game_state, vacated_tail)
}
