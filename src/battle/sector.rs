//! Battlefield sectors
//!
//! A sector is a named region of the grid: a type, a height and a set of
//! tiles. The type is a tagged variant so each kind gets its own layout
//! handler; wall orientation only exists on walls.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::core::types::Orientation;

/// What a sector represents on the battlefield
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SectorKind {
    Wall { orientation: Orientation },
    Tower,
    Gate,
    Flag,
    FlagAdjacent,
    Building,
    /// Any type the layout builder has no handler for (kept by name)
    Other(String),
}

impl SectorKind {
    /// Parse a sector type name
    ///
    /// Matching ignores case and `_`, `-` or space separators, so
    /// `"flag_adjacent"`, `"FlagAdjacent"` and `"flag adjacent"` agree.
    pub fn from_name(name: &str, orientation: Option<Orientation>) -> Self {
        let normalized: String = name
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "wall" => SectorKind::Wall {
                orientation: orientation.unwrap_or_default(),
            },
            "tower" => SectorKind::Tower,
            "gate" => SectorKind::Gate,
            "flag" => SectorKind::Flag,
            "flagadjacent" => SectorKind::FlagAdjacent,
            "building" => SectorKind::Building,
            _ => SectorKind::Other(name.to_string()),
        }
    }

    /// Canonical type name (the unrecognized name for `Other`)
    pub fn name(&self) -> &str {
        match self {
            SectorKind::Wall { .. } => "wall",
            SectorKind::Tower => "tower",
            SectorKind::Gate => "gate",
            SectorKind::Flag => "flag",
            SectorKind::FlagAdjacent => "flag_adjacent",
            SectorKind::Building => "building",
            SectorKind::Other(name) => name,
        }
    }

    pub fn is_wall(&self) -> bool {
        matches!(self, SectorKind::Wall { .. })
    }
}

/// A typed region of battle tiles sharing one height
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawSector", into = "RawSector")]
pub struct Sector {
    pub kind: SectorKind,
    pub tiles: Vec<IVec2>,
    pub height: i32,
}

impl Sector {
    pub fn new(kind: SectorKind, tiles: Vec<IVec2>, height: i32) -> Self {
        Self {
            kind,
            tiles,
            height,
        }
    }

    pub fn wall(tiles: Vec<IVec2>, height: i32, orientation: Orientation) -> Self {
        Self::new(SectorKind::Wall { orientation }, tiles, height)
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }
}

/// On-disk sector shape
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawSector {
    #[serde(rename = "type")]
    sector_type: String,
    #[serde(default)]
    tiles: Vec<IVec2>,
    #[serde(default)]
    height: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    orientation: Option<Orientation>,
}

impl From<RawSector> for Sector {
    fn from(raw: RawSector) -> Self {
        Sector {
            kind: SectorKind::from_name(&raw.sector_type, raw.orientation),
            tiles: raw.tiles,
            height: raw.height,
        }
    }
}

impl From<Sector> for RawSector {
    fn from(sector: Sector) -> Self {
        let orientation = match sector.kind {
            SectorKind::Wall { orientation } => Some(orientation),
            _ => None,
        };
        RawSector {
            sector_type: sector.kind.name().to_string(),
            tiles: sector.tiles,
            height: sector.height,
            orientation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_name_variants() {
        assert_eq!(SectorKind::from_name("tower", None), SectorKind::Tower);
        assert_eq!(SectorKind::from_name("Gate", None), SectorKind::Gate);
        assert_eq!(
            SectorKind::from_name("FlagAdjacent", None),
            SectorKind::FlagAdjacent
        );
        assert_eq!(
            SectorKind::from_name("flag_adjacent", None),
            SectorKind::FlagAdjacent
        );
        assert_eq!(SectorKind::from_name("BUILDING", None), SectorKind::Building);
    }

    #[test]
    fn test_wall_orientation_defaults_horizontal() {
        assert_eq!(
            SectorKind::from_name("wall", None),
            SectorKind::Wall {
                orientation: Orientation::Horizontal
            }
        );
        assert_eq!(
            SectorKind::from_name("wall", Some(Orientation::Vertical)),
            SectorKind::Wall {
                orientation: Orientation::Vertical
            }
        );
    }

    #[test]
    fn test_unknown_kind_keeps_name() {
        let kind = SectorKind::from_name("Moat", None);
        assert_eq!(kind, SectorKind::Other("Moat".to_string()));
        assert_eq!(kind.name(), "Moat");
    }

    #[test]
    fn test_orientation_ignored_off_walls() {
        assert_eq!(
            SectorKind::from_name("tower", Some(Orientation::Vertical)),
            SectorKind::Tower
        );
    }

    #[test]
    fn test_deserialize_sector() {
        let sector: Sector = serde_json::from_str(
            r#"{ "type": "wall", "tiles": [[0, 0], [0, 1]], "height": 3, "orientation": "vertical" }"#,
        )
        .unwrap();

        assert_eq!(sector.height, 3);
        assert_eq!(sector.tiles, vec![IVec2::new(0, 0), IVec2::new(0, 1)]);
        assert_eq!(
            sector.kind,
            SectorKind::Wall {
                orientation: Orientation::Vertical
            }
        );
    }

    #[test]
    fn test_serialize_writes_orientation_only_for_walls() {
        let tower = Sector::new(SectorKind::Tower, vec![IVec2::ZERO], 4);
        let json = serde_json::to_value(&tower).unwrap();
        assert_eq!(json["type"], "tower");
        assert!(json.get("orientation").is_none());

        let wall = Sector::wall(vec![IVec2::ZERO], 2, Orientation::Vertical);
        let json = serde_json::to_value(&wall).unwrap();
        assert_eq!(json["orientation"], "vertical");
    }
}
