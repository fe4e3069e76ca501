//! Screen-space overlay: lifecycle text and FPS counter

use anyhow::anyhow;
use glam::Vec2;
use macroquad::color::Color;
use macroquad::text::{Font, TextParams, draw_text_ex, load_ttf_font, measure_text};

use super::palette;
use crate::settings::Settings;
use crate::sim::GamePhase;

pub const RESTART_PROMPT: &str = "Press R to restart";
/// Vertical gap between the headline and the restart prompt
const PROMPT_OFFSET: f32 = 80.0;
const FPS_FONT_SIZE: u16 = 20;

/// Overlay resources
pub struct Hud {
    font: Option<Font>,
    font_size: u16,
    show_fps: bool,
}

impl Hud {
    /// Load the overlay font. A configured font that fails to load is fatal.
    pub async fn load(settings: &Settings) -> anyhow::Result<Self> {
        let font = match &settings.font_path {
            Some(path) => {
                let font = load_ttf_font(path)
                    .await
                    .map_err(|e| anyhow!("failed to load font {}: {:?}", path, e))?;
                log::info!("Loaded font {}", path);
                Some(font)
            }
            None => None,
        };

        Ok(Self {
            font,
            font_size: settings.font_size,
            show_fps: settings.show_fps,
        })
    }

    /// Draw `text` centered on `center`
    fn draw_centered(&self, text: &str, center: Vec2, color: Color) {
        let dims = measure_text(text, self.font.as_ref(), self.font_size, 1.0);
        draw_text_ex(
            text,
            center.x - dims.width / 2.0,
            center.y + dims.offset_y / 2.0,
            TextParams {
                font: self.font.as_ref(),
                font_size: self.font_size,
                color,
                ..Default::default()
            },
        );
    }
}

/// Headline color for a phase
pub fn headline_color(phase: GamePhase) -> Color {
    match phase {
        GamePhase::GameOver => palette::GAME_OVER,
        GamePhase::Goal => palette::GOAL,
        GamePhase::Playing => palette::PROMPT,
    }
}

/// Draw the lifecycle overlay (only outside of Playing) and the FPS counter
pub fn draw_overlay(hud: &Hud, phase: GamePhase, screen: Vec2) {
    if let Some(headline) = phase.headline() {
        let center = screen / 2.0;
        hud.draw_centered(headline, center, headline_color(phase));
        hud.draw_centered(
            RESTART_PROMPT,
            center + Vec2::new(0.0, PROMPT_OFFSET),
            palette::PROMPT,
        );
    }

    if hud.show_fps {
        draw_text_ex(
            &format!("FPS {}", macroquad::time::get_fps()),
            8.0,
            8.0 + FPS_FONT_SIZE as f32,
            TextParams {
                font: hud.font.as_ref(),
                font_size: FPS_FONT_SIZE,
                color: palette::PROMPT,
                ..Default::default()
            },
        );
    }
}
