//! Data-driven game balance
//!
//! Every physics and stage constant the simulation reads. Defaults come from
//! [`crate::consts`]; any field can be overridden from the config file.

use anyhow::ensure;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Physics and stage tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    /// Downward acceleration (px/s²)
    pub gravity: f32,
    /// Initial upward speed of a jump (px/s, positive)
    pub jump_velocity: f32,
    /// Horizontal speed while a direction key is held (px/s)
    pub move_speed: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub spawn_x: f32,
    /// How far above the ground top the player's feet start
    pub spawn_drop: f32,

    // === Stage ===
    pub ground_height: f32,
    pub stage_width: f32,
    /// Distance from the stage's right end to the goal line
    pub goal_margin: f32,
    /// Alternating ground/hole widths, starting with ground
    pub segment_widths: Vec<f32>,
    pub goal_platform_size: f32,
    /// Height of the goal platform's top above the ground top
    pub goal_platform_rise: f32,

    // === Camera ===
    pub camera_lead: f32,
    pub camera_smooth_time: f32,

    // === Timing ===
    /// Frame deltas above this are clamped before stepping the simulation
    pub max_frame_dt: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            move_speed: MOVE_SPEED,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            spawn_x: SPAWN_X,
            spawn_drop: SPAWN_DROP,

            ground_height: GROUND_HEIGHT,
            stage_width: STAGE_WIDTH,
            goal_margin: GOAL_MARGIN,
            segment_widths: SEGMENT_WIDTHS.to_vec(),
            goal_platform_size: GOAL_PLATFORM_SIZE,
            goal_platform_rise: GOAL_PLATFORM_RISE,

            camera_lead: CAMERA_LEAD,
            camera_smooth_time: CAMERA_SMOOTH_TIME,

            max_frame_dt: MAX_FRAME_DT,
        }
    }
}

impl Tuning {
    /// X coordinate of the goal line
    pub fn goal_x(&self) -> f32 {
        self.stage_width - self.goal_margin
    }

    /// Clamp a raw frame delta into the range the simulation accepts
    pub fn clamp_dt(&self, dt: f32) -> f32 {
        if !dt.is_finite() {
            return 0.0;
        }
        dt.max(0.0).min(self.max_frame_dt.max(0.0))
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(self.max_frame_dt > 0.0, "max_frame_dt must be positive, got {}", self.max_frame_dt);
        ensure!(self.player_width > 0.0, "player_width must be positive, got {}", self.player_width);
        ensure!(self.player_height > 0.0, "player_height must be positive, got {}", self.player_height);
        ensure!(self.ground_height > 0.0, "ground_height must be positive, got {}", self.ground_height);
        ensure!(
            self.camera_smooth_time > 0.0,
            "camera_smooth_time must be positive, got {}",
            self.camera_smooth_time
        );
        ensure!(
            self.segment_widths.iter().all(|w| *w >= 0.0),
            "segment widths must not be negative, got {:?}",
            self.segment_widths
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_x_default() {
        assert_eq!(Tuning::default().goal_x(), 2900.0);
    }

    #[test]
    fn test_clamp_dt() {
        let tuning = Tuning::default();
        assert_eq!(tuning.clamp_dt(0.01), 0.01);
        assert_eq!(tuning.clamp_dt(2.0), MAX_FRAME_DT);
        assert_eq!(tuning.clamp_dt(-1.0), 0.0);
        assert_eq!(tuning.clamp_dt(f32::NAN), 0.0);
    }

    #[test]
    fn test_clamp_dt_never_panics_on_bad_limit() {
        let tuning = Tuning {
            max_frame_dt: -0.5,
            ..Default::default()
        };
        assert_eq!(tuning.clamp_dt(1.0 / 60.0), 0.0);
    }

    #[test]
    fn test_validate() {
        assert!(Tuning::default().validate().is_ok());

        let bad = [
            Tuning { max_frame_dt: -0.5, ..Default::default() },
            Tuning { max_frame_dt: 0.0, ..Default::default() },
            Tuning { player_width: 0.0, ..Default::default() },
            Tuning { player_height: -60.0, ..Default::default() },
            Tuning { ground_height: 0.0, ..Default::default() },
            Tuning { camera_smooth_time: 0.0, ..Default::default() },
            Tuning { segment_widths: vec![400.0, -200.0], ..Default::default() },
        ];
        for tuning in &bad {
            assert!(tuning.validate().is_err(), "accepted {:?}", tuning);
        }
    }

    #[test]
    fn test_partial_override() {
        let tuning: Tuning = serde_json::from_str(r#"{ "gravity": 1000.0 }"#).unwrap();
        assert_eq!(tuning.gravity, 1000.0);
        assert_eq!(tuning.move_speed, MOVE_SPEED);
        assert_eq!(tuning.segment_widths, SEGMENT_WIDTHS.to_vec());
    }
}
