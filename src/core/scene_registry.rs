//! Registry aller platzierten Modelle samt Bedienelement-Node.
//!
//! Die Registry besitzt die `PlacedNode`-Records exklusiv. Anker und
//! Render-Graph gehören dem Host; die Registry hält nur dessen Handles und
//! gibt sie beim Entfernen genau einmal zurück.

use glam::Vec3;
use indexmap::IndexMap;

use super::look_rotation::face_towards;
use crate::host::{
    AnchorHandle, ArSceneHost, ControlRenderable, Placeable, Renderable, SceneNodeHandle,
};

/// Eindeutige ID eines platzierten Modells; wird pro Session nie wiederverwendet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Fehler der Registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// ID unbekannt oder bereits entfernt
    #[error("Platziertes Modell {0} nicht gefunden")]
    NotFound(NodeId),
}

/// Ergebnis von [`SceneNodeRegistry::toggle_control`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Sichtbarkeit gewechselt; enthält den neuen Zustand
    Toggled {
        /// Bedienelement jetzt sichtbar
        visible: bool,
    },
    /// Modell wird gerade transformiert, Tipp beendet nur die Geste
    Skipped,
}

/// Ein platziertes Modell.
#[derive(Debug, Clone)]
pub struct PlacedNode {
    /// Anker im Tracking
    pub anchor: AnchorHandle,
    /// Node, der dem Anker folgt (Wurzel-Kind)
    pub anchor_node: SceneNodeHandle,
    /// Transformierbarer Modell-Node
    pub model_node: SceneNodeHandle,
    /// Node für das Bedienelement über dem Modell
    pub aux_node: SceneNodeHandle,
    /// Bedienelement, das beim Einblenden angehängt wird
    pub control: ControlRenderable,
    /// Bedienelement aktuell sichtbar
    pub aux_visible: bool,
    /// Modell wird gerade verschoben/rotiert
    pub transforming: bool,
}

/// Registry aller platzierten Modelle.
#[derive(Debug, Default)]
pub struct SceneNodeRegistry {
    nodes: IndexMap<NodeId, PlacedNode>,
    next_id: u64,
    focused: Option<NodeId>,
}

impl SceneNodeRegistry {
    /// Erstellt eine leere Registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Platziert ein geladenes Modell am Anker.
    ///
    /// Der Bedienelement-Node wird unsichtbar angelegt und sitzt auf Höhe
    /// der Kollisions-Box. Das neue Modell wird fokussiert.
    pub fn place(
        &mut self,
        host: &mut dyn ArSceneHost,
        anchor: AnchorHandle,
        placeable: Placeable,
    ) -> NodeId {
        let Placeable { primary, control } = placeable;
        let height = primary.collision_height;

        let anchor_node = host.create_anchor_node(anchor);
        let model_node = host.create_child_node(anchor_node, Vec3::ZERO, Vec3::ONE);
        host.set_renderable(model_node, Some(Renderable::Model(primary)));
        host.add_to_scene(anchor_node);
        let aux_node = host.create_child_node(model_node, Vec3::new(0.0, height, 0.0), Vec3::ONE);

        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(
            id,
            PlacedNode {
                anchor,
                anchor_node,
                model_node,
                aux_node,
                control,
                aux_visible: false,
                transforming: false,
            },
        );
        self.focused = Some(id);
        log::info!("Modell {} platziert ({} in Szene)", id, self.nodes.len());
        id
    }

    /// Blendet das Bedienelement ein oder aus.
    pub fn toggle_control(
        &mut self,
        host: &mut dyn ArSceneHost,
        id: NodeId,
    ) -> Result<ToggleOutcome, RegistryError> {
        let node = self.nodes.get_mut(&id).ok_or(RegistryError::NotFound(id))?;
        if node.transforming {
            return Ok(ToggleOutcome::Skipped);
        }

        node.aux_visible = !node.aux_visible;
        let renderable = node
            .aux_visible
            .then(|| Renderable::Control(node.control.clone()));
        host.set_renderable(node.aux_node, renderable);
        Ok(ToggleOutcome::Toggled {
            visible: node.aux_visible,
        })
    }

    /// Markiert Beginn/Ende einer Transform-Geste auf dem Modell.
    pub fn set_transforming(&mut self, id: NodeId, transforming: bool) -> Result<(), RegistryError> {
        let node = self.nodes.get_mut(&id).ok_or(RegistryError::NotFound(id))?;
        node.transforming = transforming;
        if transforming {
            self.focused = Some(id);
        }
        Ok(())
    }

    /// Entfernt das Modell aus Szene und Registry und gibt alle Handles frei.
    pub fn remove(&mut self, host: &mut dyn ArSceneHost, id: NodeId) -> Result<(), RegistryError> {
        let node = self
            .nodes
            .shift_remove(&id)
            .ok_or(RegistryError::NotFound(id))?;
        release(host, &node);
        if self.focused == Some(id) {
            self.focused = None;
        }
        log::info!("Modell {} entfernt ({} in Szene)", id, self.nodes.len());
        Ok(())
    }

    /// Entfernt alle Modelle (z.B. beim Verlassen des Platzierungs-Modus).
    pub fn clear(&mut self, host: &mut dyn ArSceneHost) {
        for (_, node) in self.nodes.drain(..) {
            release(host, &node);
        }
        self.focused = None;
    }

    /// Ruft `f` für jedes Modell mit sichtbarem Bedienelement auf.
    pub fn for_each_aux_node(&self, mut f: impl FnMut(NodeId, &PlacedNode)) {
        for (&id, node) in self.nodes.iter().filter(|(_, n)| n.aux_visible) {
            f(id, node);
        }
    }

    /// Dreht alle sichtbaren Bedienelemente zur Kamera. Einmal pro Frame.
    ///
    /// Gibt die Anzahl aktualisierter Nodes zurück.
    pub fn update_aux_orientations(&self, host: &mut dyn ArSceneHost) -> usize {
        let camera = host.camera_world_position();
        let mut updated = 0;
        self.for_each_aux_node(|_, node| {
            let position = host.world_position(node.aux_node);
            if let Some(rotation) = face_towards(position, camera) {
                host.set_world_rotation(node.aux_node, rotation);
                updated += 1;
            }
        });
        updated
    }

    /// Record zu einer ID.
    pub fn get(&self, id: NodeId) -> Option<&PlacedNode> {
        self.nodes.get(&id)
    }

    /// Findet das platzierte Modell zu einem Modell-Node (für Tipps aus dem Host).
    pub fn find_by_model_node(&self, model_node: SceneNodeHandle) -> Option<NodeId> {
        self.nodes
            .iter()
            .find(|(_, n)| n.model_node == model_node)
            .map(|(&id, _)| id)
    }

    /// IDs in Platzierungsreihenfolge.
    pub fn ids(&self) -> Vec<NodeId> {
        self.nodes.keys().copied().collect()
    }

    /// Zuletzt platziertes bzw. transformiertes Modell.
    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    /// Anzahl platzierter Modelle.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Gibt `true` zurück, wenn nichts platziert ist.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

fn release(host: &mut dyn ArSceneHost, node: &PlacedNode) {
    host.remove_from_scene(node.anchor_node);
    host.destroy_node(node.aux_node);
    host.destroy_node(node.model_node);
    host.destroy_node(node.anchor_node);
    host.destroy_anchor(node.anchor);
}
