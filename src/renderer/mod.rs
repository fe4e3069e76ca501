//! macroquad rendering
//!
//! World drawing goes through a `ViewTransform` built from the follow camera;
//! the overlay is drawn in screen space on top.

pub mod hud;
pub mod world;

pub use hud::{Hud, draw_overlay};
pub use world::{draw_wanderer, draw_world};

use glam::Vec2;
use macroquad::color::Color;

use crate::sim::{CameraFollow, Rect};

/// Scene colors
pub mod palette {
    use macroquad::color::Color;

    pub const BACKGROUND: Color = Color::new(0.8, 0.9, 1.0, 1.0);
    pub const GROUND: Color = Color::new(0.0, 0.5, 0.0, 1.0);
    pub const GOAL_MARKER: Color = Color::new(1.0, 0.84, 0.0, 1.0);
    pub const PLAYER: Color = Color::new(0.2, 0.5, 0.8, 1.0);
    pub const GAME_OVER: Color = Color::new(1.0, 0.0, 0.0, 1.0);
    pub const GOAL: Color = Color::new(1.0, 0.65, 0.0, 1.0);
    pub const PROMPT: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    pub const WANDERER: Color = Color::new(1.0, 0.65, 0.0, 1.0);
}

/// World-to-screen mapping for one frame
///
/// The camera frames a `viewport`-sized region around its center. That region
/// is scaled uniformly to fit the window and centered, leaving bars on the
/// longer axis when the aspect ratios differ.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    origin: Vec2,
    scale: f32,
    /// Letterbox offset in screen pixels
    offset: Vec2,
}

impl ViewTransform {
    pub fn new(camera: &CameraFollow, viewport: Vec2, screen: Vec2) -> Self {
        let fit = screen / viewport;
        let scale = fit.x.min(fit.y);
        let scale = if scale.is_finite() && scale > 0.0 { scale } else { 1.0 };
        Self {
            origin: camera.view_origin(viewport),
            scale,
            offset: (screen - viewport * scale) / 2.0,
        }
    }

    /// Identity mapping (screen space)
    pub fn identity() -> Self {
        Self {
            origin: Vec2::ZERO,
            scale: 1.0,
            offset: Vec2::ZERO,
        }
    }

    pub fn point(&self, p: Vec2) -> Vec2 {
        (p - self.origin) * self.scale + self.offset
    }

    pub fn rect(&self, r: &Rect) -> Rect {
        let top_left = self.point(Vec2::new(r.x, r.y));
        Rect::new(top_left.x, top_left.y, r.w * self.scale, r.h * self.scale)
    }

    pub fn length(&self, l: f32) -> f32 {
        l * self.scale
    }
}

/// Filled rectangle through a view
pub(crate) fn fill_rect(view: &ViewTransform, r: &Rect, color: Color) {
    let s = view.rect(r);
    macroquad::shapes::draw_rectangle(s.x, s.y, s.w, s.h, color);
}
