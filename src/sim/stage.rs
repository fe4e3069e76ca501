//! Stage generation
//!
//! The stage is a left-to-right run of ground segments and holes built once at
//! startup, followed by a raised goal platform.

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::tuning::Tuning;

/// Tile kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileKind {
    /// Solid, the player can stand on it
    Ground,
    /// Empty, not drawn, the player falls through
    Hole,
}

impl TileKind {
    /// The kind that follows this one in the alternating run
    pub fn alternate(self) -> Self {
        match self {
            TileKind::Ground => TileKind::Hole,
            TileKind::Hole => TileKind::Ground,
        }
    }
}

/// A static stage element
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StageTile {
    pub rect: Rect,
    pub kind: TileKind,
}

impl StageTile {
    pub fn is_ground(&self) -> bool {
        self.kind == TileKind::Ground
    }
}

/// The generated stage. Tiles are never modified after generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stage {
    tiles: Vec<StageTile>,
    /// X coordinate of the goal line
    pub goal_x: f32,
    /// Height of the scene the ground is anchored to
    pub scene_height: f32,
}

impl Stage {
    /// Build a stage from explicit tiles (used by tests and custom layouts)
    pub fn from_tiles(tiles: Vec<StageTile>, goal_x: f32, scene_height: f32) -> Self {
        Self {
            tiles,
            goal_x,
            scene_height,
        }
    }

    /// All tiles in generation order
    pub fn tiles(&self) -> &[StageTile] {
        &self.tiles
    }

    /// Ground tiles with their storage index
    pub fn ground_tiles(&self) -> impl Iterator<Item = (usize, &StageTile)> {
        self.tiles.iter().enumerate().filter(|(_, t)| t.is_ground())
    }
}

/// Generate the stage from the tuning's segment widths
///
/// Segments alternate Ground / Hole starting with Ground, sit flush on the
/// bottom of the scene and leave no gaps. A goal platform is appended last,
/// centered on the goal line and raised above the ground.
pub fn generate_stage(tuning: &Tuning, scene_height: f32) -> Stage {
    let ground_top = scene_height - tuning.ground_height;
    let mut tiles = Vec::with_capacity(tuning.segment_widths.len() + 1);

    let mut x = 0.0;
    let mut kind = TileKind::Ground;
    for &width in &tuning.segment_widths {
        tiles.push(StageTile {
            rect: Rect::new(x, ground_top, width, tuning.ground_height),
            kind,
        });
        x += width;
        kind = kind.alternate();
    }

    let goal_x = tuning.goal_x();
    let size = tuning.goal_platform_size;
    tiles.push(StageTile {
        rect: Rect::new(
            goal_x - size / 2.0,
            ground_top - tuning.goal_platform_rise,
            size,
            size,
        ),
        kind: TileKind::Ground,
    });

    log::debug!(
        "Generated stage: {} tiles, segments end at x={}, goal at x={}",
        tiles.len(),
        x,
        goal_x
    );

    Stage::from_tiles(tiles, goal_x, scene_height)
}
