//! Input system.
//!
//! Turns the events drained this frame into at most one directional intent.

use crate::game::state::GameState;
use crate::game::types::{Direction, EndReason, InputEvent};

/// What the player asked for during one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub quit: bool,
    pub intent: Option<Direction>,
}

/// Fold a frame's events into a single intent.
/// The first arrow key wins so that two keys in one frame cannot make a diagonal move.
/// A quit anywhere in the queue is always honoured.
pub fn read_input(events: impl IntoIterator<Item = InputEvent>) -> FrameInput {
    let mut input = FrameInput::default();

    for event in events {
        match event {
            InputEvent::Quit => input.quit = true,
            InputEvent::Arrow(direction) if input.intent.is_none() => {
                input.intent = Some(direction);
            }
            InputEvent::Arrow(_) | InputEvent::Other => {}
        }
    }

    input
}

/// Apply this frame's events to the game state.
pub fn handle_input(game_state: &mut GameState, events: impl IntoIterator<Item = InputEvent>) {
    let input = read_input(events);

    if input.quit {
        game_state.end(EndReason::Quit);
    }

    if let Some(direction) = input.intent {
        game_state.snake.request_turn(direction);
    }
}
