//! In-memory scene graph

use ahash::{AHashMap, AHashSet};
use glam::{Quat, Vec3};
use serde::Serialize;

use super::{ConfigureOutcome, ObjectHandle, SceneBuilder, SceneRoots};
use crate::core::types::PrefabId;
use crate::layout::placement::ComponentParams;

/// One recorded scene object
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneNode {
    pub handle: ObjectHandle,
    pub name: String,
    /// `None` for containers
    pub prefab: Option<PrefabId>,
    pub position: Vec3,
    pub rotation: Quat,
    pub parent: Option<ObjectHandle>,
    pub params: Option<ComponentParams>,
}

/// Scene graph that records every call made through `SceneBuilder`
#[derive(Debug, Default)]
pub struct SceneRecorder {
    nodes: AHashMap<ObjectHandle, SceneNode>,
    next_handle: u64,
    /// Prefabs spawned without a behavior component
    bare_prefabs: AHashSet<PrefabId>,
}

impl SceneRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorder with "Fort", "Attackers" and "Defenders" roots
    pub fn with_roots() -> (Self, SceneRoots) {
        let mut recorder = Self::new();
        let roots = SceneRoots {
            fort: recorder.add_root("Fort"),
            attackers: recorder.add_root("Attackers"),
            defenders: recorder.add_root("Defenders"),
        };
        (recorder, roots)
    }

    /// Mark a prefab as lacking its behavior component
    pub fn without_component(mut self, prefab: PrefabId) -> Self {
        self.bare_prefabs.insert(prefab);
        self
    }

    /// Add a parentless container
    pub fn add_root(&mut self, name: &str) -> ObjectHandle {
        self.insert(name.to_string(), None, Vec3::ZERO, Quat::IDENTITY, None)
    }

    fn insert(
        &mut self,
        name: String,
        prefab: Option<PrefabId>,
        position: Vec3,
        rotation: Quat,
        parent: Option<ObjectHandle>,
    ) -> ObjectHandle {
        self.next_handle += 1;
        let handle = ObjectHandle(self.next_handle);
        self.nodes.insert(
            handle,
            SceneNode {
                handle,
                name,
                prefab,
                position,
                rotation,
                parent,
                params: None,
            },
        );
        handle
    }

    pub fn get(&self, handle: ObjectHandle) -> Option<&SceneNode> {
        self.nodes.get(&handle)
    }

    /// All nodes in creation order
    pub fn nodes(&self) -> Vec<&SceneNode> {
        let mut nodes: Vec<&SceneNode> = self.nodes.values().collect();
        nodes.sort_by_key(|n| n.handle);
        nodes
    }

    /// Direct children of a node in creation order
    pub fn children(&self, parent: ObjectHandle) -> Vec<&SceneNode> {
        self.nodes()
            .into_iter()
            .filter(|n| n.parent == Some(parent))
            .collect()
    }

    /// Every instance of a prefab in creation order
    pub fn nodes_with_prefab(&self, prefab: &PrefabId) -> Vec<&SceneNode> {
        self.nodes()
            .into_iter()
            .filter(|n| n.prefab.as_ref() == Some(prefab))
            .collect()
    }

    /// Render the hierarchy as an indented outline
    pub fn outline(&self) -> String {
        let mut out = String::new();
        for root in self.nodes().into_iter().filter(|n| n.parent.is_none()) {
            self.outline_node(root, 0, &mut out);
        }
        out
    }

    fn outline_node(&self, node: &SceneNode, depth: usize, out: &mut String) {
        let indent = "  ".repeat(depth);
        match &node.params {
            Some(params) => out.push_str(&format!(
                "{}{} @ ({:.2}, {:.2}, {:.2}) {:?}\n",
                indent, node.name, node.position.x, node.position.y, node.position.z, params
            )),
            None if node.prefab.is_some() => out.push_str(&format!(
                "{}{} @ ({:.2}, {:.2}, {:.2})\n",
                indent, node.name, node.position.x, node.position.y, node.position.z
            )),
            None => out.push_str(&format!("{}{}/\n", indent, node.name)),
        }
        for child in self.children(node.handle) {
            self.outline_node(child, depth + 1, out);
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl SceneBuilder for SceneRecorder {
    fn spawn(&mut self, prefab: &PrefabId, position: Vec3, rotation: Quat) -> ObjectHandle {
        self.insert(
            prefab.to_string(),
            Some(prefab.clone()),
            position,
            rotation,
            None,
        )
    }

    fn create_group(&mut self, name: &str, parent: ObjectHandle) -> ObjectHandle {
        self.insert(
            name.to_string(),
            None,
            Vec3::ZERO,
            Quat::IDENTITY,
            Some(parent),
        )
    }

    fn configure(&mut self, handle: ObjectHandle, params: &ComponentParams) -> ConfigureOutcome {
        let Some(node) = self.nodes.get_mut(&handle) else {
            return ConfigureOutcome::CapabilityAbsent;
        };
        let bare = match &node.prefab {
            Some(prefab) => self.bare_prefabs.contains(prefab),
            None => true,
        };
        if bare {
            return ConfigureOutcome::CapabilityAbsent;
        }
        node.params = Some(*params);
        ConfigureOutcome::Applied
    }

    fn reparent(&mut self, handle: ObjectHandle, parent: ObjectHandle) {
        if let Some(node) = self.nodes.get_mut(&handle) {
            node.parent = Some(parent);
        }
    }
}
