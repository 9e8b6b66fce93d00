//! In-Memory-Szene: bildet Anker, Node-Hierarchie und Kamera ohne AR-Tracking nach.

use std::collections::{HashMap, HashSet};

use glam::{Quat, Vec3};

use super::{AnchorHandle, ArSceneHost, Renderable, SceneNodeHandle, SurfaceHit};

/// Ein Node der simulierten Szene.
#[derive(Debug, Clone)]
pub struct SimNode {
    /// Eltern-Node (None = Anker-Node oder Wurzel-Kind)
    pub parent: Option<SceneNodeHandle>,
    /// Anker, dem dieser Node folgt (nur Anker-Nodes)
    pub anchor: Option<AnchorHandle>,
    /// Versatz relativ zum Eltern-Node
    pub local_offset: Vec3,
    /// Lokale Skalierung
    pub local_scale: Vec3,
    /// Zuletzt gesetzte Welt-Rotation
    pub world_rotation: Quat,
    /// Angehängtes Renderable
    pub renderable: Option<Renderable>,
}

/// Simulierte AR-Szene für Tests und die Demo-Binary.
#[derive(Debug, Default)]
pub struct SimulatedScene {
    next_handle: u64,
    anchors: HashMap<AnchorHandle, Vec3>,
    nodes: HashMap<SceneNodeHandle, SimNode>,
    scene_root: HashSet<SceneNodeHandle>,
    camera_position: Vec3,
    destroyed_nodes: Vec<SceneNodeHandle>,
    destroyed_anchors: Vec<AnchorHandle>,
}

impl SimulatedScene {
    /// Erstellt eine leere Szene mit Kamera im Ursprung.
    pub fn new() -> Self {
        Self::default()
    }

    /// Verschiebt die Kamera.
    pub fn set_camera_position(&mut self, position: Vec3) {
        self.camera_position = position;
    }

    /// Node-Daten (falls noch nicht freigegeben).
    pub fn node(&self, node: SceneNodeHandle) -> Option<&SimNode> {
        self.nodes.get(&node)
    }

    /// Renderable eines Nodes.
    pub fn renderable(&self, node: SceneNodeHandle) -> Option<&Renderable> {
        self.nodes.get(&node).and_then(|n| n.renderable.as_ref())
    }

    /// Gibt `true` zurück, wenn der Node direkt an der Szenen-Wurzel hängt.
    pub fn is_in_scene(&self, node: SceneNodeHandle) -> bool {
        self.scene_root.contains(&node)
    }

    /// Anzahl der Wurzel-Kinder.
    pub fn root_child_count(&self) -> usize {
        self.scene_root.len()
    }

    /// Anzahl noch lebender Nodes.
    pub fn live_node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Anzahl noch lebender Anker.
    pub fn live_anchor_count(&self) -> usize {
        self.anchors.len()
    }

    /// Wie oft `destroy_node` für diesen Node aufgerufen wurde.
    pub fn node_destroy_count(&self, node: SceneNodeHandle) -> usize {
        self.destroyed_nodes.iter().filter(|&&n| n == node).count()
    }

    /// Wie oft `destroy_anchor` für diesen Anker aufgerufen wurde.
    pub fn anchor_destroy_count(&self, anchor: AnchorHandle) -> usize {
        self.destroyed_anchors.iter().filter(|&&a| a == anchor).count()
    }

    fn next(&mut self) -> u64 {
        self.next_handle += 1;
        self.next_handle
    }

    fn insert_node(&mut self, node: SimNode) -> SceneNodeHandle {
        let handle = SceneNodeHandle(self.next());
        self.nodes.insert(handle, node);
        handle
    }
}

impl ArSceneHost for SimulatedScene {
    fn create_anchor(&mut self, hit: &SurfaceHit) -> AnchorHandle {
        let handle = AnchorHandle(self.next());
        self.anchors.insert(handle, hit.position);
        handle
    }

    fn create_anchor_node(&mut self, anchor: AnchorHandle) -> SceneNodeHandle {
        self.insert_node(SimNode {
            parent: None,
            anchor: Some(anchor),
            local_offset: Vec3::ZERO,
            local_scale: Vec3::ONE,
            world_rotation: Quat::IDENTITY,
            renderable: None,
        })
    }

    fn create_child_node(
        &mut self,
        parent: SceneNodeHandle,
        local_offset: Vec3,
        local_scale: Vec3,
    ) -> SceneNodeHandle {
        self.insert_node(SimNode {
            parent: Some(parent),
            anchor: None,
            local_offset,
            local_scale,
            world_rotation: Quat::IDENTITY,
            renderable: None,
        })
    }

    fn set_renderable(&mut self, node: SceneNodeHandle, renderable: Option<Renderable>) {
        match self.nodes.get_mut(&node) {
            Some(n) => n.renderable = renderable,
            None => log::warn!("set_renderable auf freigegebenem Node {:?}", node),
        }
    }

    fn add_to_scene(&mut self, node: SceneNodeHandle) {
        self.scene_root.insert(node);
    }

    fn remove_from_scene(&mut self, node: SceneNodeHandle) {
        self.scene_root.remove(&node);
    }

    fn world_position(&self, node: SceneNodeHandle) -> Vec3 {
        // Eltern-Kette aufsummieren; Skalierung der Eltern bleibt unberücksichtigt
        let mut position = Vec3::ZERO;
        let mut current = self.nodes.get(&node);
        while let Some(n) = current {
            position += n.local_offset;
            if let Some(anchor) = n.anchor {
                position += self.anchors.get(&anchor).copied().unwrap_or(Vec3::ZERO);
            }
            current = n.parent.and_then(|p| self.nodes.get(&p));
        }
        position
    }

    fn set_world_rotation(&mut self, node: SceneNodeHandle, rotation: Quat) {
        if let Some(n) = self.nodes.get_mut(&node) {
            n.world_rotation = rotation;
        }
    }

    fn camera_world_position(&self) -> Vec3 {
        self.camera_position
    }

    fn destroy_anchor(&mut self, anchor: AnchorHandle) {
        self.anchors.remove(&anchor);
        self.destroyed_anchors.push(anchor);
    }

    fn destroy_node(&mut self, node: SceneNodeHandle) {
        self.nodes.remove(&node);
        self.scene_root.remove(&node);
        self.destroyed_nodes.push(node);
    }
}
