//! Battle descriptions - grid extents, typed sectors and player starts
//!
//! Battles are read-only once loaded; everything downstream borrows them.

pub mod loader;
pub mod model;
pub mod sector;

pub use loader::{BattleLoader, DEFAULT_BATTLE_DIR};
pub use model::{Battle, Player};
pub use sector::{Sector, SectorKind};
