use log::{debug, info};

use crate::game::entities::place_apple;
use crate::game::state::GameState;
use crate::game::types::{EndReason, Point};

/// Eat the apple if the head reached it: regrow into the vacated tail cell and
/// relocate the apple. Filling the last free cell ends the game.
pub fn apply_apple_rules(game_state: &mut GameState, vacated_tail: Point) -> Result<(), EndReason> {
    if game_state.snake.head() != game_state.apple.pos {
        return Ok(());
    }

    game_state.snake.grow(vacated_tail);
    game_state.apples_eaten += 1;
    debug!(
        "[Game] Apple eaten at ({}, {}), length={}",
        game_state.apple.pos.x,
        game_state.apple.pos.y,
        game_state.snake.len()
    );

    match place_apple(&game_state.snake, &game_state.grid, &mut game_state.rng) {
        Some(apple) => {
            game_state.apple = apple;
            Ok(())
        }
        None => {
            info!("[Game] No free cell left for an apple");
            Err(EndReason::BoardFull)
        }
    }
}
