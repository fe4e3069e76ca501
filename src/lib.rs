//! Goal Dash - a side-scrolling hole-jumping platformer
//!
//! Core modules:
//! - `sim`: Simulation (physics, landing, lifecycle, camera follow)
//! - `renderer`: macroquad drawing of the world and the overlay
//! - `platform`: Input polling, frame timing and window setup
//! - `settings`: Display preferences and the config file
//! - `tuning`: Data-driven physics and stage constants

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::{Config, Settings};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Logical scene size (the original runs in an 800x600 scene)
    pub const SCENE_WIDTH: f32 = 800.0;
    pub const SCENE_HEIGHT: f32 = 600.0;

    /// Player physics
    pub const GRAVITY: f32 = 2000.0;
    pub const JUMP_VELOCITY: f32 = 800.0;
    pub const MOVE_SPEED: f32 = 300.0;
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 60.0;

    /// Player spawn: x, and height of the drop onto the first ground segment
    pub const SPAWN_X: f32 = 200.0;
    pub const SPAWN_DROP: f32 = 100.0;

    /// Stage layout
    pub const GROUND_HEIGHT: f32 = 50.0;
    pub const STAGE_WIDTH: f32 = 3000.0;
    pub const GOAL_MARGIN: f32 = 100.0;
    /// Ground, hole, ground, hole...
    pub const SEGMENT_WIDTHS: [f32; 7] = [400.0, 200.0, 500.0, 150.0, 600.0, 250.0, 400.0];
    pub const GOAL_PLATFORM_SIZE: f32 = 100.0;
    pub const GOAL_PLATFORM_RISE: f32 = 100.0;
    pub const GOAL_MARKER_WIDTH: f32 = 10.0;
    pub const GOAL_MARKER_HEIGHT: f32 = 50.0;

    /// Camera keeps the player left of center by this fraction of the viewport
    pub const CAMERA_LEAD: f32 = 0.2;
    /// Approximate time for the camera to reach its target (seconds)
    pub const CAMERA_SMOOTH_TIME: f32 = 0.2;

    /// Largest frame delta fed to the simulation (seconds)
    pub const MAX_FRAME_DT: f32 = 1.0 / 30.0;
}
