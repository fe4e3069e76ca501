//! Camera follow
//!
//! The camera keeps the player in view with a fixed lead to the right. Its
//! center eases toward the target with a critically damped spring, so a
//! restart or a fast run never snaps the view.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A 2D follow camera (world-space center, zoom fixed at 1)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraFollow {
    /// Current view center
    pub center: Vec2,
    /// Where the camera is heading
    pub target: Vec2,
    /// Spring velocity carried between frames
    velocity: Vec2,
}

impl CameraFollow {
    /// Camera resting at `center`
    pub fn new(center: Vec2) -> Self {
        Self {
            center,
            target: center,
            velocity: Vec2::ZERO,
        }
    }

    /// Target center that keeps `player_x` left of the viewport center
    pub fn follow_target(player_x: f32, viewport: Vec2, lead: f32) -> Vec2 {
        Vec2::new(player_x + viewport.x * lead, viewport.y / 2.0)
    }

    /// Set the target and advance the smoothing by `dt` seconds
    pub fn update(&mut self, target: Vec2, smooth_time: f32, dt: f32) {
        self.target = target;
        self.center.x = smooth_damp(self.center.x, target.x, &mut self.velocity.x, smooth_time, dt);
        self.center.y = smooth_damp(self.center.y, target.y, &mut self.velocity.y, smooth_time, dt);
    }

    /// World-space top-left corner of a viewport of the given size
    pub fn view_origin(&self, viewport: Vec2) -> Vec2 {
        self.center - viewport / 2.0
    }
}

/// Critically damped approach of `current` toward `target`
///
/// `smooth_time` is roughly the time to reach the target. Never overshoots.
pub fn smooth_damp(current: f32, target: f32, velocity: &mut f32, smooth_time: f32, dt: f32) -> f32 {
    if dt <= 0.0 {
        return current;
    }

    let smooth_time = smooth_time.max(0.0001);
    let omega = 2.0 / smooth_time;
    let x = omega * dt;
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * decay;
    let mut output = target + (change + temp) * decay;

    // Clamp overshoot
    if (target - current > 0.0) == (output > target) {
        output = target;
        *velocity = 0.0;
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_target_leads_player() {
        let target = CameraFollow::follow_target(200.0, Vec2::new(800.0, 600.0), 0.2);
        assert_eq!(target, Vec2::new(360.0, 300.0));
    }

    #[test]
    fn test_zero_dt_does_not_move() {
        let mut camera = CameraFollow::new(Vec2::new(400.0, 300.0));
        camera.update(Vec2::new(1000.0, 300.0), 0.2, 0.0);
        assert_eq!(camera.center, Vec2::new(400.0, 300.0));
        assert_eq!(camera.target, Vec2::new(1000.0, 300.0));
    }

    #[test]
    fn test_converges_without_overshoot() {
        let mut camera = CameraFollow::new(Vec2::new(400.0, 300.0));
        let target = Vec2::new(1000.0, 300.0);
        let mut last_x = camera.center.x;

        for _ in 0..600 {
            camera.update(target, 0.2, 1.0 / 60.0);
            assert!(camera.center.x >= last_x);
            assert!(camera.center.x <= target.x);
            last_x = camera.center.x;
        }

        assert!((camera.center.x - target.x).abs() < 0.01);
        assert_eq!(camera.center.y, 300.0);
    }

    #[test]
    fn test_moves_toward_target_leftward() {
        let mut velocity = 0.0;
        let out = smooth_damp(500.0, 100.0, &mut velocity, 0.2, 1.0 / 60.0);
        assert!(out < 500.0);
        assert!(out > 100.0);
        assert!(velocity < 0.0);
    }

    #[test]
    fn test_view_origin() {
        let camera = CameraFollow::new(Vec2::new(400.0, 300.0));
        assert_eq!(camera.view_origin(Vec2::new(800.0, 600.0)), Vec2::ZERO);
    }
}
