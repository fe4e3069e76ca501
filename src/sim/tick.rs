//! Per-frame simulation step
//!
//! `tick` dispatches on the lifecycle phase. Each phase has its own step
//! function that returns the next phase; the camera follows afterwards in
//! every phase.

use super::camera::CameraFollow;
use super::collision::{find_landing, has_ground_support, resting_tile};
use super::state::{GameEvent, GamePhase, GameState};

/// Input for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Left held
    pub left: bool,
    /// Right held
    pub right: bool,
    /// Jump pressed this frame
    pub jump: bool,
    /// Restart pressed this frame
    pub restart: bool,
}

/// Advance the game state by one frame of `dt` seconds
///
/// `dt` is clamped to the tuning's `max_frame_dt` first.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    let dt = state.tuning.clamp_dt(dt);
    state.frame += 1;

    let prev = state.phase;
    let next = match prev {
        GamePhase::Playing => step_playing(state, input, dt),
        GamePhase::GameOver => step_game_over(state, input),
        GamePhase::Goal => step_goal(state, input),
    };

    if next != prev {
        log::info!("Phase {:?} -> {:?} (frame {})", prev, next, state.frame);
    }
    state.phase = next;

    follow_player(state, dt);
}

/// Playing: move, jump, fall, land, then check hole and goal
fn step_playing(state: &mut GameState, input: &TickInput, dt: f32) -> GamePhase {
    let GameState {
        tuning,
        stage,
        player,
        events,
        ..
    } = state;

    // Horizontal movement (both keys cancel out)
    if input.left {
        player.pos.x -= tuning.move_speed * dt;
    }
    if input.right {
        player.pos.x += tuning.move_speed * dt;
    }

    if player.on_ground && input.jump {
        player.vel.y = -tuning.jump_velocity;
        player.on_ground = false;
        events.push(GameEvent::Jumped);
        log::debug!("Jump at x={:.1}", player.pos.x);
    }

    // Semi-implicit Euler: velocity first, then position
    if !player.on_ground {
        player.vel.y += tuning.gravity * dt;
    }
    player.pos.y += player.vel.y * dt;

    // Landing
    let was_on_ground = player.on_ground;
    player.on_ground = false;
    let rect = player.rect();
    let support = if let Some(landing) = find_landing(&rect, player.vel.y, stage) {
        player.pos.y = landing.surface_y - player.size.y / 2.0;
        player.vel.y = 0.0;
        Some(landing.tile_index)
    } else if player.vel.y == 0.0 {
        resting_tile(&rect, stage)
    } else {
        None
    };

    if let Some(tile_index) = support {
        player.on_ground = true;
        if !was_on_ground {
            events.push(GameEvent::Landed { tile_index });
            log::debug!("Landed on tile {} at x={:.1}", tile_index, player.pos.x);
        }
    }

    // Hole: far below the scene with nothing under the player
    let rect = player.rect();
    if player.pos.y > stage.scene_height + player.size.y && !has_ground_support(&rect, stage) {
        events.push(GameEvent::FellIntoHole);
        return GamePhase::GameOver;
    }

    if rect.right() > stage.goal_x {
        events.push(GameEvent::ReachedGoal);
        return GamePhase::Goal;
    }

    GamePhase::Playing
}

/// GameOver: wait for restart
fn step_game_over(state: &mut GameState, input: &TickInput) -> GamePhase {
    if input.restart {
        state.restart();
        return GamePhase::Playing;
    }
    GamePhase::GameOver
}

/// Goal: wait for restart
fn step_goal(state: &mut GameState, input: &TickInput) -> GamePhase {
    if input.restart {
        state.restart();
        return GamePhase::Playing;
    }
    GamePhase::Goal
}

/// Retarget the camera on the player and advance its smoothing
fn follow_player(state: &mut GameState, dt: f32) {
    let target = CameraFollow::follow_target(
        state.player.pos.x,
        state.viewport,
        state.tuning.camera_lead,
    );
    state.camera.update(target, state.tuning.camera_smooth_time, dt);
}
