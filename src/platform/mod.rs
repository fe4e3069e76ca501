//! Platform abstraction layer
//!
//! Everything that touches macroquad's window, keyboard and clock:
//! - Window configuration
//! - Input polling into plain simulation inputs
//! - Frame timing

use glam::Vec2;
use macroquad::input::{KeyCode, is_key_down, is_key_pressed};
use macroquad::window::{Conf, screen_height, screen_width};

use crate::settings::Settings;
use crate::sim::{MoveInput, TickInput};

/// Window configuration from the display settings
pub fn window_conf(title: &str, settings: &Settings) -> Conf {
    Conf {
        window_title: title.to_string(),
        window_width: settings.window_width,
        window_height: settings.window_height,
        high_dpi: settings.high_dpi,
        window_resizable: false,
        ..Default::default()
    }
}

/// Platformer keys: arrows move, Space jumps, R restarts
pub fn poll_tick_input() -> TickInput {
    TickInput {
        left: is_key_down(KeyCode::Left),
        right: is_key_down(KeyCode::Right),
        jump: is_key_pressed(KeyCode::Space),
        restart: is_key_pressed(KeyCode::R),
    }
}

/// Demo keys: WASD
pub fn poll_move_input() -> MoveInput {
    MoveInput {
        up: is_key_down(KeyCode::W),
        down: is_key_down(KeyCode::S),
        left: is_key_down(KeyCode::A),
        right: is_key_down(KeyCode::D),
    }
}

/// Seconds since the previous frame (unclamped)
pub fn frame_dt() -> f32 {
    macroquad::time::get_frame_time()
}

/// Current window size in pixels
pub fn screen_size() -> Vec2 {
    Vec2::new(screen_width(), screen_height())
}
