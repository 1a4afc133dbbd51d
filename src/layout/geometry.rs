//! Grid/world mapping and tile-set aggregation
//!
//! The battle grid is centered on the world origin. Grid x runs along
//! negative world x, grid y along positive world z, and every tile is
//! addressed by its center.

use glam::{IVec2, Vec2, Vec3};

/// Maps grid coordinates of one battle into world space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridMapping {
    pub width: u32,
    pub height: u32,
}

impl GridMapping {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// World position of a grid coordinate at the given elevation
    ///
    /// `(W/2 - x - 0.5, elevation, y - H/2 + 0.5)`
    pub fn to_world(&self, pos: Vec2, elevation: f32) -> Vec3 {
        Vec3::new(
            self.width as f32 / 2.0 - pos.x - 0.5,
            elevation,
            pos.y - self.height as f32 / 2.0 + 0.5,
        )
    }

    /// World position of a tile center
    pub fn tile_to_world(&self, tile: IVec2, elevation: f32) -> Vec3 {
        self.to_world(tile.as_vec2(), elevation)
    }

    /// Is the tile inside the grid?
    pub fn contains(&self, tile: IVec2) -> bool {
        tile.x >= 0 && tile.y >= 0 && (tile.x as u32) < self.width && (tile.y as u32) < self.height
    }
}

/// Round to the nearest integer, ties to even
pub fn round_to_int(value: f32) -> i32 {
    value.round_ties_even() as i32
}

/// Nearest tile to a fractional grid position
pub fn round_to_tile(pos: Vec2) -> IVec2 {
    IVec2::new(round_to_int(pos.x), round_to_int(pos.y))
}

/// Arithmetic mean of a tile set, `None` when empty
pub fn centroid(tiles: &[IVec2]) -> Option<Vec2> {
    if tiles.is_empty() {
        return None;
    }
    let sum: Vec2 = tiles.iter().map(|t| t.as_vec2()).sum();
    Some(sum / tiles.len() as f32)
}

/// Inclusive axis-aligned width and height spanned by a tile set
///
/// Equals the maximum of `other - tile + 1` over all ordered pairs, so a
/// single tile spans (1, 1) and an empty set spans (0, 0).
pub fn bounding_extent(tiles: &[IVec2]) -> IVec2 {
    let Some(first) = tiles.first() else {
        return IVec2::ZERO;
    };
    let (min, max) = tiles
        .iter()
        .fold((*first, *first), |(min, max), t| (min.min(*t), max.max(*t)));
    max - min + IVec2::ONE
}

/// Side length of the square footprint closest to `tile_count` tiles
pub fn tower_size(tile_count: usize) -> i32 {
    round_to_int((tile_count as f32).sqrt())
}
