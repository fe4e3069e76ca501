//! Four-direction movement demo
//!
//! A circle pushed around with WASD at a fixed step per frame. No physics, no
//! collision, no lifecycle.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Pixels moved per frame for each held key
pub const STEP: f32 = 5.0;
pub const WANDERER_RADIUS: f32 = 30.0;
pub const WANDERER_START: Vec2 = Vec2::new(400.0, 300.0);

/// Held direction keys for one frame
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// The demo's only entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wanderer {
    pub pos: Vec2,
    pub radius: f32,
}

impl Default for Wanderer {
    fn default() -> Self {
        Self {
            pos: WANDERER_START,
            radius: WANDERER_RADIUS,
        }
    }
}

impl Wanderer {
    /// Move one frame. Opposite keys cancel out.
    pub fn step(&mut self, input: &MoveInput) {
        if input.up {
            self.pos.y -= STEP;
        }
        if input.down {
            self.pos.y += STEP;
        }
        if input.left {
            self.pos.x -= STEP;
        }
        if input.right {
            self.pos.x += STEP;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_center() {
        let w = Wanderer::default();
        assert_eq!(w.pos, Vec2::new(400.0, 300.0));
        assert_eq!(w.radius, 30.0);
    }

    #[test]
    fn test_each_key_moves_one_step() {
        let mut w = Wanderer::default();
        w.step(&MoveInput {
            up: true,
            right: true,
            ..Default::default()
        });
        assert_eq!(w.pos, Vec2::new(405.0, 295.0));
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut w = Wanderer::default();
        w.step(&MoveInput {
            up: true,
            down: true,
            left: true,
            right: true,
        });
        assert_eq!(w.pos, WANDERER_START);
    }

    #[test]
    fn test_no_bounds() {
        let mut w = Wanderer::default();
        let left = MoveInput {
            left: true,
            ..Default::default()
        };
        for _ in 0..200 {
            w.step(&left);
        }
        assert_eq!(w.pos.x, 400.0 - 1000.0);
    }
}
