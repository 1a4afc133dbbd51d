//! Planned spawns: what to instantiate, where, and how to configure it

use glam::{IVec2, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::core::types::{PrefabKind, Side};

/// Parameters handed to a spawned object's behavior component
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "component", rename_all = "snake_case")]
pub enum ComponentParams {
    WallHeight { height: f32 },
    TowerSize { height: f32, size: i32 },
    /// `seam_scale` lets gate meshes line up with the neighbouring walls
    GateHeight { height: f32, seam_scale: f32 },
    FlagHeight { height: f32 },
    FlagAdjacentHeight { height: f32 },
    BuildingSize { height: f32, footprint: IVec2 },
    PlayerSide { side: Side },
}

impl ComponentParams {
    /// Configured height, if this component has one
    pub fn height(&self) -> Option<f32> {
        match self {
            ComponentParams::WallHeight { height }
            | ComponentParams::TowerSize { height, .. }
            | ComponentParams::GateHeight { height, .. }
            | ComponentParams::FlagHeight { height }
            | ComponentParams::FlagAdjacentHeight { height }
            | ComponentParams::BuildingSize { height, .. } => Some(*height),
            ComponentParams::PlayerSide { .. } => None,
        }
    }
}

/// One object to spawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub kind: PrefabKind,
    pub position: Vec3,
    pub rotation: Quat,
    pub params: ComponentParams,
}

impl Placement {
    pub fn new(kind: PrefabKind, position: Vec3, params: ComponentParams) -> Self {
        Self {
            kind,
            position,
            rotation: Quat::IDENTITY,
            params,
        }
    }

    pub fn rotated(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }
}

/// Everything one sector spawns
#[derive(Debug, Clone, PartialEq)]
pub struct SectorPlan {
    /// Position of the sector in the battle's sector list
    pub index: usize,
    /// Per-sector container under the fort; `None` parents placements to
    /// the fort directly
    pub group: Option<&'static str>,
    pub placements: Vec<Placement>,
}

/// A player spawn on one side
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerPlacement {
    pub side: Side,
    pub placement: Placement,
}
