//! Layout configuration
//!
//! The host supplies one scaling factor and the prefab names for every
//! structure kind. The config is built once at startup and passed by
//! reference into the builders; there is no global instance.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::{LayoutError, Result};
use crate::core::types::{PrefabId, PrefabKind};

/// Prefab names for each kind of spawned object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrefabSet {
    pub wall: PrefabId,
    pub flag: PrefabId,
    pub flag_adjacent: PrefabId,
    pub tower: PrefabId,
    pub building: PrefabId,
    pub gate: PrefabId,
    pub player: PrefabId,
}

impl Default for PrefabSet {
    fn default() -> Self {
        Self {
            wall: PrefabId::new("wall"),
            flag: PrefabId::new("flag"),
            flag_adjacent: PrefabId::new("flag_adjacent"),
            tower: PrefabId::new("tower"),
            building: PrefabId::new("building"),
            gate: PrefabId::new("gate"),
            player: PrefabId::new("player"),
        }
    }
}

impl PrefabSet {
    /// Prefab to instantiate for a kind
    pub fn get(&self, kind: PrefabKind) -> &PrefabId {
        match kind {
            PrefabKind::Wall => &self.wall,
            PrefabKind::Tower => &self.tower,
            PrefabKind::Gate => &self.gate,
            PrefabKind::Flag => &self.flag,
            PrefabKind::FlagAdjacent => &self.flag_adjacent,
            PrefabKind::Building => &self.building,
            PrefabKind::Player => &self.player,
        }
    }

    fn iter(&self) -> impl Iterator<Item = (&'static str, &PrefabId)> {
        [
            ("wall", &self.wall),
            ("flag", &self.flag),
            ("flag_adjacent", &self.flag_adjacent),
            ("tower", &self.tower),
            ("building", &self.building),
            ("gate", &self.gate),
            ("player", &self.player),
        ]
        .into_iter()
    }
}

/// Configuration for battle layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Multiplier from sector height units to world units
    ///
    /// Applied to every structure height and to player elevation.
    /// Gates also receive it unmodified as their seam scale.
    pub scaling_factor: f32,

    /// Prefab names per structure kind
    pub prefabs: PrefabSet,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            scaling_factor: 1.0,
            prefabs: PrefabSet::default(),
        }
    }
}

impl LayoutConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Config with defaults and the given scaling factor
    pub fn with_scaling_factor(scaling_factor: f32) -> Self {
        Self {
            scaling_factor,
            ..Self::default()
        }
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: LayoutConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if !self.scaling_factor.is_finite() || self.scaling_factor <= 0.0 {
            return Err(LayoutError::InvalidConfig(format!(
                "scaling_factor ({}) must be a positive finite number",
                self.scaling_factor
            )));
        }

        for (field, prefab) in self.prefabs.iter() {
            if prefab.as_str().trim().is_empty() {
                return Err(LayoutError::InvalidConfig(format!(
                    "prefabs.{} must not be empty",
                    field
                )));
            }
        }

        Ok(())
    }
}
