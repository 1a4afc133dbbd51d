//! Structure placement per sector kind
//!
//! One planner function per `SectorKind` variant. Per-tile kinds (walls,
//! gates, flags) go into a named container under the fort; towers and
//! buildings are a single object at the sector centroid.

use std::f32::consts::FRAC_PI_2;

use glam::{Quat, Vec3};

use crate::battle::{Battle, Sector, SectorKind};
use crate::core::config::LayoutConfig;
use crate::core::error::{LayoutError, Result};
use crate::core::types::{Orientation, PrefabKind};
use crate::layout::geometry::{bounding_extent, centroid, tower_size, GridMapping};
use crate::layout::placement::{ComponentParams, Placement, SectorPlan};

/// World elevation every structure is spawned at
pub const STRUCTURE_ELEVATION: f32 = 0.5;

pub const WALL_GROUP: &str = "Wall";
pub const GATE_GROUP: &str = "Gate";
pub const FLAG_GROUP: &str = "Flag";
pub const FLAG_ADJACENT_GROUP: &str = "Flag Adjacent";

/// Plans structure placements for the sectors of one battle
pub struct SectorPlanner {
    mapping: GridMapping,
    scaling_factor: f32,
    /// Gates borrow the first wall's height
    wall_height: i32,
}

impl SectorPlanner {
    pub fn new(battle: &Battle, config: &LayoutConfig) -> Self {
        Self {
            mapping: GridMapping::new(battle.width, battle.height),
            scaling_factor: config.scaling_factor,
            wall_height: battle.first_wall_height(),
        }
    }

    /// Plan every sector in order, skipping kinds without a handler
    pub fn plan_all(&self, battle: &Battle) -> Result<Vec<SectorPlan>> {
        let mut plans = Vec::with_capacity(battle.sectors.len());
        for (index, sector) in battle.sectors.iter().enumerate() {
            if let Some(plan) = self.plan(index, sector)? {
                plans.push(plan);
            }
        }
        Ok(plans)
    }

    /// Plan one sector; `None` for `SectorKind::Other`
    pub fn plan(&self, index: usize, sector: &Sector) -> Result<Option<SectorPlan>> {
        let plan = match &sector.kind {
            SectorKind::Wall { orientation } => self.plan_walls(index, sector, *orientation),
            SectorKind::Tower => self.plan_tower(index, sector)?,
            SectorKind::Gate => self.plan_gates(index, sector),
            SectorKind::Flag => self.plan_flags(index, sector, PrefabKind::Flag),
            SectorKind::FlagAdjacent => self.plan_flags(index, sector, PrefabKind::FlagAdjacent),
            SectorKind::Building => self.plan_building(index, sector)?,
            SectorKind::Other(name) => {
                tracing::debug!("Skipping sector {} of unhandled type '{}'", index, name);
                return Ok(None);
            }
        };
        Ok(Some(plan))
    }

    fn scaled(&self, height: i32) -> f32 {
        height as f32 * self.scaling_factor
    }

    fn per_tile(
        &self,
        sector: &Sector,
        kind: PrefabKind,
        rotation: Quat,
        params: ComponentParams,
    ) -> Vec<Placement> {
        sector
            .tiles
            .iter()
            .map(|tile| {
                let position = self.mapping.tile_to_world(*tile, STRUCTURE_ELEVATION);
                Placement::new(kind, position, params).rotated(rotation)
            })
            .collect()
    }

    fn centroid_position(&self, index: usize, sector: &Sector) -> Result<Vec3> {
        let center = centroid(&sector.tiles).ok_or(LayoutError::EmptySector { index })?;
        Ok(self.mapping.to_world(center, STRUCTURE_ELEVATION))
    }

    fn plan_walls(&self, index: usize, sector: &Sector, orientation: Orientation) -> SectorPlan {
        let rotation = match orientation {
            Orientation::Horizontal => Quat::IDENTITY,
            Orientation::Vertical => Quat::from_rotation_y(FRAC_PI_2),
        };
        let params = ComponentParams::WallHeight {
            height: self.scaled(sector.height),
        };
        SectorPlan {
            index,
            group: Some(WALL_GROUP),
            placements: self.per_tile(sector, PrefabKind::Wall, rotation, params),
        }
    }

    fn plan_tower(&self, index: usize, sector: &Sector) -> Result<SectorPlan> {
        let position = self.centroid_position(index, sector)?;
        let params = ComponentParams::TowerSize {
            height: self.scaled(sector.height),
            size: tower_size(sector.tile_count()),
        };
        Ok(SectorPlan {
            index,
            group: None,
            placements: vec![Placement::new(PrefabKind::Tower, position, params)],
        })
    }

    fn plan_gates(&self, index: usize, sector: &Sector) -> SectorPlan {
        let params = ComponentParams::GateHeight {
            height: self.scaled(self.wall_height),
            seam_scale: self.scaling_factor,
        };
        SectorPlan {
            index,
            group: Some(GATE_GROUP),
            placements: self.per_tile(sector, PrefabKind::Gate, Quat::IDENTITY, params),
        }
    }

    fn plan_flags(&self, index: usize, sector: &Sector, kind: PrefabKind) -> SectorPlan {
        let height = self.scaled(sector.height);
        let (group, params) = match kind {
            PrefabKind::FlagAdjacent => (
                FLAG_ADJACENT_GROUP,
                ComponentParams::FlagAdjacentHeight { height },
            ),
            _ => (FLAG_GROUP, ComponentParams::FlagHeight { height }),
        };
        SectorPlan {
            index,
            group: Some(group),
            placements: self.per_tile(sector, kind, Quat::IDENTITY, params),
        }
    }

    fn plan_building(&self, index: usize, sector: &Sector) -> Result<SectorPlan> {
        let position = self.centroid_position(index, sector)?;
        let params = ComponentParams::BuildingSize {
            height: self.scaled(sector.height),
            footprint: bounding_extent(&sector.tiles),
        };
        Ok(SectorPlan {
            index,
            group: None,
            placements: vec![Placement::new(PrefabKind::Building, position, params)],
        })
    }
}
