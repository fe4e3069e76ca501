//! World drawing: tiles, goal marker, player

use glam::Vec2;

use super::{ViewTransform, fill_rect, palette};
use crate::sim::{GameState, Rect, Wanderer};

/// Goal marker post standing on the ground at the goal line
pub fn goal_marker(state: &GameState) -> Rect {
    let ground_top = state.stage.scene_height - state.tuning.ground_height;
    Rect::new(
        state.stage.goal_x,
        ground_top - crate::consts::GOAL_MARKER_HEIGHT,
        crate::consts::GOAL_MARKER_WIDTH,
        crate::consts::GOAL_MARKER_HEIGHT,
    )
}

/// Draw the stage and player through the follow camera
pub fn draw_world(state: &GameState, view: &ViewTransform) {
    // Holes are not drawn; the background shows through
    for tile in state.stage.tiles().iter().filter(|t| t.is_ground()) {
        fill_rect(view, &tile.rect, palette::GROUND);
    }

    fill_rect(view, &goal_marker(state), palette::GOAL_MARKER);
    fill_rect(view, &state.player.rect(), palette::PLAYER);
}

/// Draw the movement demo's circle
pub fn draw_wanderer(wanderer: &Wanderer, view: &ViewTransform) {
    let p: Vec2 = view.point(wanderer.pos);
    macroquad::shapes::draw_circle(p.x, p.y, view.length(wanderer.radius), palette::WANDERER);
}
