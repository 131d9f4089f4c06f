//! Macroquad backend.
//!
//! Window configuration, an ordered drain of this frame's key events and a
//! [`Canvas`] that fills rectangles on the window.

use macroquad::input::utils::{register_input_subscriber, repeat_all_miniquad_input};
use macroquad::input::{KeyCode, is_quit_requested, prevent_quit};
use macroquad::miniquad::{EventHandler, KeyMods};
use macroquad::prelude::{Color, draw_rectangle};
use macroquad::window::Conf;

use crate::config::window::{HEIGHT, WIDTH, WINDOW_TITLE};
use crate::game::systems::{Argb, Canvas, PixelRect};
use crate::game::types::{Direction, InputEvent};

pub fn window_conf() -> Conf {
    Conf {
        window_title: WINDOW_TITLE.to_owned(),
        window_width: WIDTH,
        window_height: HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

/// Collects raw input between frames, in arrival order.
pub struct InputQueue {
    subscriber: usize,
    pending: Vec<InputEvent>,
}

impl InputQueue {
    /// Must be created inside the macroquad main.
    pub fn new() -> Self {
        // Window close is reported to the game loop instead of exiting right away.
        prevent_quit();
        Self {
            subscriber: register_input_subscriber(),
            pending: Vec::new(),
        }
    }

    /// Everything received since the previous call.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        let subscriber = self.subscriber;
        repeat_all_miniquad_input(self, subscriber);

        if is_quit_requested() {
            self.pending.push(InputEvent::Quit);
        }
        std::mem::take(&mut self.pending)
    }
}

impl EventHandler for InputQueue {
    fn update(&mut self) {}

    fn draw(&mut self) {}

    fn key_down_event(&mut self, keycode: KeyCode, _keymods: KeyMods, _repeat: bool) {
        self.pending.push(translate_key(keycode));
    }
}

fn translate_key(keycode: KeyCode) -> InputEvent {
    match keycode {
        KeyCode::Up => InputEvent::Arrow(Direction::Up),
        KeyCode::Down => InputEvent::Arrow(Direction::Down),
        KeyCode::Left => InputEvent::Arrow(Direction::Left),
        KeyCode::Right => InputEvent::Arrow(Direction::Right),
        _ => InputEvent::Other,
    }
}

pub struct MacroquadCanvas;

impl Canvas for MacroquadCanvas {
    fn fill_rect(&mut self, rect: PixelRect, color: Argb) {
        let [r, g, b, a] = color.rgba();
        draw_rectangle(
            rect.x as f32,
            rect.y as f32,
            rect.width as f32,
            rect.height as f32,
            Color::from_rgba(r, g, b, a),
        );
    }
}
