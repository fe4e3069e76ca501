//! Collision detection between the player and stage tiles
//!
//! Only Ground tiles take part. The player can land on a tile top while
//! falling; sides and undersides are not solid.

use super::rect::Rect;
use super::stage::Stage;

/// A landing found for this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landing {
    /// Storage index of the tile landed on
    pub tile_index: usize,
    /// Y of the tile's top surface
    pub surface_y: f32,
}

/// Whether `rect` is crossing `tile` downward through its top edge
#[inline]
fn crosses_top(rect: &Rect, tile: &Rect) -> bool {
    rect.bottom() > tile.top() && rect.top() < tile.top()
}

/// Find the tile the player lands on this frame, if any
///
/// A Ground tile is a candidate when it intersects the player, the player is
/// falling (`vel_y > 0`) and the player straddles the tile's top edge. Among
/// candidates the one with the highest surface (smallest top) wins; equal tops
/// resolve to the earlier tile in storage order.
pub fn find_landing(player: &Rect, vel_y: f32, stage: &Stage) -> Option<Landing> {
    if vel_y <= 0.0 {
        return None;
    }

    stage
        .ground_tiles()
        .filter(|(_, tile)| player.intersects(&tile.rect) && crosses_top(player, &tile.rect))
        .map(|(tile_index, tile)| Landing {
            tile_index,
            surface_y: tile.rect.top(),
        })
        .min_by(|a, b| {
            a.surface_y
                .partial_cmp(&b.surface_y)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
}

/// Tolerance for treating the player's feet as touching a tile top
const REST_EPSILON: f32 = 0.01;

/// Ground tile the player is standing on without moving vertically
///
/// A player snapped onto a tile sits exactly on its top edge, so it no longer
/// intersects the tile. This keeps it supported while it stays horizontally
/// over the tile.
pub fn resting_tile(player: &Rect, stage: &Stage) -> Option<usize> {
    stage
        .ground_tiles()
        .filter(|(_, tile)| {
            player.left() < tile.rect.right()
                && tile.rect.left() < player.right()
                && (player.bottom() - tile.rect.top()).abs() <= REST_EPSILON
        })
        .map(|(tile_index, _)| tile_index)
        .next()
}

/// Check if any Ground tile overlaps `rect`
pub fn has_ground_support(rect: &Rect, stage: &Stage) -> bool {
    stage.ground_tiles().any(|(_, tile)| rect.intersects(&tile.rect))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::stage::{StageTile, TileKind};
    use glam::Vec2;

    fn tile(x: f32, y: f32, w: f32, h: f32, kind: TileKind) -> StageTile {
        StageTile {
            rect: Rect::new(x, y, w, h),
            kind,
        }
    }

    fn player_at(x: f32, y: f32) -> Rect {
        Rect::from_center(Vec2::new(x, y), Vec2::new(40.0, 60.0))
    }

    #[test]
    fn test_landing_from_above() {
        let stage = Stage::from_tiles(
            vec![tile(0.0, 550.0, 400.0, 50.0, TileKind::Ground)],
            2900.0,
            600.0,
        );
        // Bottom at 555, top at 495: crossing the tile top at 550
        let landing = find_landing(&player_at(200.0, 525.0), 100.0, &stage);
        assert_eq!(
            landing,
            Some(Landing {
                tile_index: 0,
                surface_y: 550.0
            })
        );
    }

    #[test]
    fn test_no_landing_while_rising() {
        let stage = Stage::from_tiles(
            vec![tile(0.0, 550.0, 400.0, 50.0, TileKind::Ground)],
            2900.0,
            600.0,
        );
        assert_eq!(find_landing(&player_at(200.0, 525.0), -100.0, &stage), None);
        assert_eq!(find_landing(&player_at(200.0, 525.0), 0.0, &stage), None);
    }

    #[test]
    fn test_holes_are_not_solid() {
        let stage = Stage::from_tiles(
            vec![tile(0.0, 550.0, 400.0, 50.0, TileKind::Hole)],
            2900.0,
            600.0,
        );
        assert_eq!(find_landing(&player_at(200.0, 525.0), 100.0, &stage), None);
        assert!(!has_ground_support(&player_at(200.0, 525.0), &stage));
    }

    #[test]
    fn test_fully_inside_tile_is_not_a_landing() {
        let stage = Stage::from_tiles(
            vec![tile(0.0, 500.0, 400.0, 200.0, TileKind::Ground)],
            2900.0,
            600.0,
        );
        // Player top (540) is below the tile top: already sunk in, no snap
        assert_eq!(find_landing(&player_at(200.0, 570.0), 100.0, &stage), None);
        assert!(has_ground_support(&player_at(200.0, 570.0), &stage));
    }

    #[test]
    fn test_highest_surface_wins_regardless_of_order() {
        let low = tile(0.0, 550.0, 400.0, 50.0, TileKind::Ground);
        let high = tile(150.0, 530.0, 100.0, 50.0, TileKind::Ground);
        // Straddles both tops (530 and 550)
        let rect = player_at(200.0, 525.0);

        let stage = Stage::from_tiles(vec![low, high], 2900.0, 600.0);
        let landing = find_landing(&rect, 50.0, &stage).unwrap();
        assert_eq!(landing.surface_y, 530.0);
        assert_eq!(landing.tile_index, 1);

        let stage = Stage::from_tiles(vec![high, low], 2900.0, 600.0);
        let landing = find_landing(&rect, 50.0, &stage).unwrap();
        assert_eq!(landing.surface_y, 530.0);
        assert_eq!(landing.tile_index, 0);
    }

    #[test]
    fn test_resting_tile() {
        let stage = Stage::from_tiles(
            vec![
                tile(0.0, 550.0, 400.0, 50.0, TileKind::Ground),
                tile(400.0, 550.0, 200.0, 50.0, TileKind::Hole),
            ],
            2900.0,
            600.0,
        );
        // Feet exactly on the top edge
        assert_eq!(resting_tile(&player_at(200.0, 520.0), &stage), Some(0));
        // Still overlapping the edge of the ground segment
        assert_eq!(resting_tile(&player_at(415.0, 520.0), &stage), Some(0));
        // Fully over the hole
        assert_eq!(resting_tile(&player_at(450.0, 520.0), &stage), None);
        // Hovering above
        assert_eq!(resting_tile(&player_at(200.0, 510.0), &stage), None);
    }

    #[test]
    fn test_equal_tops_use_storage_order() {
        let a = tile(0.0, 550.0, 200.0, 50.0, TileKind::Ground);
        let b = tile(190.0, 550.0, 200.0, 50.0, TileKind::Ground);
        let stage = Stage::from_tiles(vec![a, b], 2900.0, 600.0);
        let landing = find_landing(&player_at(200.0, 525.0), 50.0, &stage).unwrap();
        assert_eq!(landing.tile_index, 0);
    }
}
