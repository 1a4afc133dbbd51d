//! Battle description: grid extents, sectors and player start positions

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::battle::sector::{Sector, SectorKind};
use crate::core::types::Side;

/// A player spawn point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Grid coordinate; rounded to the nearest tile for height lookups
    pub start_pos: Vec2,
}

impl Player {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            start_pos: Vec2::new(x, y),
        }
    }
}

/// The full battle description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Battle {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub sectors: Vec<Sector>,
    #[serde(default)]
    pub attackers: Vec<Player>,
    #[serde(default)]
    pub defenders: Vec<Player>,
}

impl Battle {
    /// Create an empty battle of the given grid size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            sectors: Vec::new(),
            attackers: Vec::new(),
            defenders: Vec::new(),
        }
    }

    pub fn with_sector(mut self, sector: Sector) -> Self {
        self.sectors.push(sector);
        self
    }

    pub fn with_player(mut self, side: Side, player: Player) -> Self {
        match side {
            Side::Attack => self.attackers.push(player),
            Side::Defense => self.defenders.push(player),
        }
        self
    }

    /// Height of the first wall sector in sector order, 0 without walls
    ///
    /// Gates take this height instead of their own.
    pub fn first_wall_height(&self) -> i32 {
        self.sectors
            .iter()
            .find(|s| s.kind.is_wall())
            .map(|s| s.height)
            .unwrap_or(0)
    }

    /// All players tagged with their side, attackers first
    pub fn players(&self) -> impl Iterator<Item = (Side, &Player)> {
        self.attackers
            .iter()
            .map(|p| (Side::Attack, p))
            .chain(self.defenders.iter().map(|p| (Side::Defense, p)))
    }

    /// Sectors the layout builder has no handler for
    pub fn unhandled_sectors(&self) -> impl Iterator<Item = &Sector> {
        self.sectors
            .iter()
            .filter(|s| matches!(s.kind, SectorKind::Other(_)))
    }
}
