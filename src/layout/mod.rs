//! Battlefield layout - pure placement planning
//!
//! Nothing in here touches a scene. Planners turn a `Battle` into
//! placements; `crate::scene` dispatches them.

pub mod geometry;
pub mod heightmap;
pub mod placement;
pub mod players;
pub mod sectors;

pub use geometry::{bounding_extent, centroid, round_to_int, tower_size, GridMapping};
pub use heightmap::Heightmap;
pub use placement::{ComponentParams, Placement, PlayerPlacement, SectorPlan};
pub use players::{plan_players, PLAYER_CLEARANCE};
pub use sectors::{SectorPlanner, STRUCTURE_ELEVATION};
