//! Load battle descriptions from JSON
//!
//! Battles are stored as one JSON document each, either passed as a path
//! or resolved by name inside a battle directory (`{dir}/{name}.json`).

use std::path::{Path, PathBuf};

use crate::battle::model::Battle;
use crate::core::error::Result;

/// Default directory for named battles
pub const DEFAULT_BATTLE_DIR: &str = "data/battles";

/// Loader that converts JSON battle files into `Battle` records
pub struct BattleLoader {
    battle_dir: PathBuf,
}

impl BattleLoader {
    /// Create a loader resolving names inside `battle_dir`
    pub fn new(battle_dir: impl Into<PathBuf>) -> Self {
        Self {
            battle_dir: battle_dir.into(),
        }
    }

    /// Load a battle from a JSON string
    pub fn load_from_json(json: &str) -> Result<Battle> {
        let battle: Battle = serde_json::from_str(json)?;
        tracing::debug!(
            "Parsed battle {}x{} with {} sectors, {} attackers, {} defenders",
            battle.width,
            battle.height,
            battle.sectors.len(),
            battle.attackers.len(),
            battle.defenders.len()
        );
        Ok(battle)
    }

    /// Load a battle from a JSON file on disk
    pub fn load_from_file(path: &Path) -> Result<Battle> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_json(&content)
    }

    /// Load a battle by resource name
    pub fn load_named(&self, name: &str) -> Result<Battle> {
        Self::load_from_file(&self.path_for(name))
    }

    /// Path a battle name resolves to
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.battle_dir.join(format!("{}.json", name))
    }
}

impl Default for BattleLoader {
    fn default() -> Self {
        Self::new(DEFAULT_BATTLE_DIR)
    }
}
