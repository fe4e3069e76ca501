//! Simulation module
//!
//! All gameplay logic lives here. No rendering or platform dependencies:
//! - Variable timestep, clamped at the boundary
//! - Stable iteration order (tiles in generation order)
//! - Plain inputs in, state and events out

pub mod camera;
pub mod collision;
pub mod free_move;
pub mod rect;
pub mod stage;
pub mod state;
pub mod tick;

pub use camera::{CameraFollow, smooth_damp};
pub use collision::{Landing, find_landing, has_ground_support, resting_tile};
pub use free_move::{MoveInput, Wanderer};
pub use rect::Rect;
pub use stage::{Stage, StageTile, TileKind, generate_stage};
pub use state::{GameEvent, GamePhase, GameState, Player, spawn_point};
pub use tick::{TickInput, tick};
