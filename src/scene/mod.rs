//! Scene abstraction - the only place layout meets an engine
//!
//! Hosts implement `SceneBuilder` over their scene graph. `SceneRecorder`
//! is an in-memory implementation used by the CLI and by tests.

pub mod build;
pub mod recorder;

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::core::types::PrefabId;
use crate::layout::placement::ComponentParams;

pub use build::{build_battle, build_structures, place_players, BattleBuild, BuildReport};
pub use recorder::{SceneNode, SceneRecorder};

/// Opaque reference to an object owned by the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectHandle(pub u64);

/// Result of configuring a spawned object's behavior component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigureOutcome {
    Applied,
    /// The prefab has no component accepting these parameters; not fatal
    CapabilityAbsent,
}

/// Capabilities the layout needs from a scene graph
pub trait SceneBuilder {
    /// Instantiate a prefab at a world transform
    fn spawn(&mut self, prefab: &PrefabId, position: Vec3, rotation: Quat) -> ObjectHandle;

    /// Create an empty named container under `parent`
    fn create_group(&mut self, name: &str, parent: ObjectHandle) -> ObjectHandle;

    /// Hand component parameters to a spawned object
    fn configure(&mut self, handle: ObjectHandle, params: &ComponentParams) -> ConfigureOutcome;

    /// Move an object under a new parent
    fn reparent(&mut self, handle: ObjectHandle, parent: ObjectHandle);
}

/// Host-supplied top-level containers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneRoots {
    /// Parent of every structure
    pub fort: ObjectHandle,
    pub attackers: ObjectHandle,
    pub defenders: ObjectHandle,
}
