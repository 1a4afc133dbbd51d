//! Per-tile ground height derived from sector heights
//!
//! Sectors are rasterized in battle order; a tile claimed by several
//! sectors ends up with the height of the last one. Heights are stored raw,
//! scaling happens at placement time.

use glam::{IVec2, Vec2};

use crate::battle::Battle;
use crate::core::error::{LayoutError, Result};
use crate::layout::geometry::round_to_tile;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heightmap {
    width: u32,
    height: u32,
    /// Column-major: index = x * height + y
    cells: Vec<i32>,
}

impl Heightmap {
    /// Flat heightmap of the given size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![0; width as usize * height as usize],
        }
    }

    /// Rasterize every sector of a battle
    pub fn build(battle: &Battle) -> Result<Self> {
        let mut map = Self::new(battle.width, battle.height);
        for sector in &battle.sectors {
            for tile in &sector.tiles {
                map.set(*tile, sector.height)?;
            }
        }
        tracing::debug!(
            "Built {}x{} heightmap from {} sectors",
            map.width,
            map.height,
            battle.sectors.len()
        );
        Ok(map)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Height of a tile, `None` outside the grid
    pub fn get(&self, x: i32, y: i32) -> Option<i32> {
        self.index(IVec2::new(x, y)).map(|i| self.cells[i])
    }

    /// Height under a fractional grid position (rounded to the nearest tile)
    pub fn height_at(&self, pos: Vec2) -> Result<i32> {
        let tile = round_to_tile(pos);
        self.index(tile)
            .map(|i| self.cells[i])
            .ok_or_else(|| self.out_of_bounds(tile))
    }

    /// Overwrite a tile's height
    pub fn set(&mut self, tile: IVec2, height: i32) -> Result<()> {
        let i = self.index(tile).ok_or_else(|| self.out_of_bounds(tile))?;
        self.cells[i] = height;
        Ok(())
    }

    fn index(&self, tile: IVec2) -> Option<usize> {
        if tile.x < 0 || tile.y < 0 {
            return None;
        }
        let (x, y) = (tile.x as u32, tile.y as u32);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(x as usize * self.height as usize + y as usize)
    }

    fn out_of_bounds(&self, tile: IVec2) -> LayoutError {
        LayoutError::OutOfBounds {
            x: tile.x,
            y: tile.y,
            width: self.width,
            height: self.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::{Sector, SectorKind};
    use crate::core::types::Orientation;

    #[test]
    fn test_unclaimed_tiles_are_zero() {
        let battle = Battle::new(3, 2);
        let map = Heightmap::build(&battle).unwrap();
        for x in 0..3 {
            for y in 0..2 {
                assert_eq!(map.get(x, y), Some(0));
            }
        }
    }

    #[test]
    fn test_stores_raw_sector_height() {
        let battle = Battle::new(4, 4).with_sector(Sector::wall(
            vec![IVec2::new(0, 0), IVec2::new(1, 0)],
            2,
            Orientation::Horizontal,
        ));
        let map = Heightmap::build(&battle).unwrap();

        assert_eq!(map.get(0, 0), Some(2));
        assert_eq!(map.get(1, 0), Some(2));
        assert_eq!(map.get(0, 1), Some(0));
    }

    #[test]
    fn test_last_sector_wins_on_overlap() {
        let shared = IVec2::new(1, 1);
        let battle = Battle::new(4, 4)
            .with_sector(Sector::new(SectorKind::Tower, vec![shared, IVec2::ZERO], 5))
            .with_sector(Sector::new(SectorKind::Flag, vec![shared], 1));
        let map = Heightmap::build(&battle).unwrap();

        assert_eq!(map.get(1, 1), Some(1));
        assert_eq!(map.get(0, 0), Some(5));
    }

    #[test]
    fn test_unknown_sectors_still_rasterized() {
        let battle = Battle::new(2, 2).with_sector(Sector::new(
            SectorKind::Other("mound".into()),
            vec![IVec2::new(1, 0)],
            4,
        ));
        let map = Heightmap::build(&battle).unwrap();
        assert_eq!(map.get(1, 0), Some(4));
    }

    #[test]
    fn test_out_of_range_tile_is_error() {
        let battle =
            Battle::new(2, 2).with_sector(Sector::new(SectorKind::Flag, vec![IVec2::new(2, 0)], 1));
        match Heightmap::build(&battle) {
            Err(LayoutError::OutOfBounds {
                x,
                y,
                width,
                height,
            }) => {
                assert_eq!((x, y, width, height), (2, 0, 2, 2));
            }
            other => panic!("Expected OutOfBounds, got {:?}", other),
        }
    }

    #[test]
    fn test_height_at_rounds_position() {
        let mut map = Heightmap::new(4, 4);
        map.set(IVec2::new(2, 1), 6).unwrap();

        assert_eq!(map.height_at(Vec2::new(1.6, 1.2)).unwrap(), 6);
        // 2.5 rounds to even
        assert_eq!(map.height_at(Vec2::new(2.5, 0.5)).unwrap(), 0);
        assert_eq!(map.height_at(Vec2::new(2.5, 1.0)).unwrap(), 6);
    }

    #[test]
    fn test_height_at_out_of_range() {
        let map = Heightmap::new(4, 4);
        assert!(matches!(
            map.height_at(Vec2::new(-1.0, 0.0)),
            Err(LayoutError::OutOfBounds { .. })
        ));
        assert!(map.get(4, 0).is_none());
    }
}
