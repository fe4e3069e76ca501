//! Game state and core simulation types
//!
//! `GameState` is the whole world: stage, player, lifecycle phase, camera and
//! the event queue. The frame loop owns one and passes it to `tick`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::camera::CameraFollow;
use super::rect::Rect;
use super::stage::{Stage, generate_stage};
use crate::tuning::Tuning;

/// Lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Playing,
    /// Fell into a hole
    GameOver,
    /// Crossed the goal line
    Goal,
}

impl GamePhase {
    /// Overlay headline shown for this phase
    pub fn headline(&self) -> Option<&'static str> {
        match self {
            GamePhase::Playing => None,
            GamePhase::GameOver => Some("GAME OVER"),
            GamePhase::Goal => Some("GOAL!"),
        }
    }
}

/// Something noteworthy that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Jumped,
    Landed { tile_index: usize },
    FellIntoHole,
    ReachedGoal,
    Restarted,
}

/// The player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Center of the bounding box
    pub pos: Vec2,
    pub vel: Vec2,
    /// Resting on a tile top. `vel.y` is zero whenever this is set.
    pub on_ground: bool,
    pub size: Vec2,
}

impl Player {
    /// Player at the spawn point, at rest and airborne
    pub fn spawn(tuning: &Tuning, scene_height: f32) -> Self {
        Self {
            pos: spawn_point(tuning, scene_height),
            vel: Vec2::ZERO,
            on_ground: false,
            size: Vec2::new(tuning.player_width, tuning.player_height),
        }
    }

    /// Bounding box from the current position
    pub fn rect(&self) -> Rect {
        Rect::from_center(self.pos, self.size)
    }

    /// Put the player back at the spawn point
    pub fn reset(&mut self, tuning: &Tuning, scene_height: f32) {
        self.pos = spawn_point(tuning, scene_height);
        self.vel = Vec2::ZERO;
        self.on_ground = false;
    }
}

/// Spawn position: above the first ground segment, feet `spawn_drop` above it
pub fn spawn_point(tuning: &Tuning, scene_height: f32) -> Vec2 {
    Vec2::new(
        tuning.spawn_x,
        scene_height - tuning.ground_height - tuning.player_height / 2.0 - tuning.spawn_drop,
    )
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub tuning: Tuning,
    pub stage: Stage,
    pub player: Player,
    pub phase: GamePhase,
    pub camera: CameraFollow,
    /// Viewport size used for camera framing
    pub viewport: Vec2,
    /// Frames simulated so far
    pub frame: u64,
    /// Events raised since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game: generate the stage once and spawn the player
    pub fn new(tuning: Tuning, viewport: Vec2) -> Self {
        let scene_height = viewport.y;
        let stage = generate_stage(&tuning, scene_height);
        let player = Player::spawn(&tuning, scene_height);

        Self {
            tuning,
            stage,
            player,
            phase: GamePhase::Playing,
            camera: CameraFollow::new(viewport / 2.0),
            viewport,
            frame: 0,
            events: Vec::new(),
        }
    }

    /// Reset the player and resume play. The stage is kept as is.
    pub fn restart(&mut self) {
        self.player.reset(&self.tuning, self.stage.scene_height);
        self.phase = GamePhase::Playing;
        self.events.push(GameEvent::Restarted);
    }

    /// Take all events raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
