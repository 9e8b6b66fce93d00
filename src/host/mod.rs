//! Verträge zu den externen Kollaborateuren: AR-Szene und Asset-Loader.
//!
//! Tracking, Rendering und Asset-Dekodierung liegen vollständig außerhalb
//! dieses Crates. Der Kern spricht nur über die Traits [`ArSceneHost`] und
//! [`AssetLoader`] mit ihnen und behandelt alle Handles als opak.
//! `SimulatedScene` und die Loader in [`loader`] sind In-Memory-Varianten
//! für Tests und die Demo-Binary.

pub mod loader;
pub mod simulated;

use std::sync::mpsc::Sender;

use glam::{Quat, Vec3};

use crate::core::AssetId;

pub use loader::{DeferredLoader, ImmediateLoader, ThreadedLoader};
pub use simulated::SimulatedScene;

/// Treffer eines Tipps auf einer getrackten Fläche.
///
/// Für den Gesten-Classifier opak; nur der Host wertet ihn aus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceHit {
    /// Trefferpunkt in Weltkoordinaten
    pub position: Vec3,
    /// ID der getroffenen Fläche
    pub plane_id: u64,
}

impl SurfaceHit {
    /// Erstellt einen Treffer auf Fläche `plane_id`.
    pub fn new(position: Vec3, plane_id: u64) -> Self {
        Self { position, plane_id }
    }
}

/// Opakes Anker-Handle (gehört dem Host).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnchorHandle(pub u64);

/// Opakes Handle eines Render-Graph-Nodes (gehört dem Host).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SceneNodeHandle(pub u64);

/// Geladenes 3D-Modell.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimaryRenderable {
    /// Quelle des Modells
    pub model_ref: AssetId,
    /// Höhe der Kollisions-Box; das Bedienelement sitzt darüber
    pub collision_height: f32,
}

/// Bedienelement, das über einem platzierten Modell angezeigt wird.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlRenderable {
    /// Beschriftung des Buttons
    pub label: String,
}

impl ControlRenderable {
    /// Der rote "Delete"-Button.
    pub fn delete_button() -> Self {
        Self {
            label: "Delete".to_string(),
        }
    }
}

/// Video-Quad mit Chroma-Key-Material.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoRenderable {
    /// Videoquelle, die als externe Textur gebunden ist
    pub source: String,
    /// Herausgefilterte Farbe (RGB)
    pub key_color: [f32; 3],
}

/// Modell und Bedienelement, gemeinsam geladen.
#[derive(Debug, Clone, PartialEq)]
pub struct Placeable {
    /// Das Modell
    pub primary: PrimaryRenderable,
    /// Das Bedienelement
    pub control: ControlRenderable,
}

/// Alles, was der Host an einen Node hängen kann.
#[derive(Debug, Clone, PartialEq)]
pub enum Renderable {
    /// 3D-Modell
    Model(PrimaryRenderable),
    /// Button über dem Modell
    Control(ControlRenderable),
    /// Chroma-Key-Video
    Video(VideoRenderable),
}

/// AR-Szene des Hosts: Anker, Render-Graph und Kamera.
///
/// Alle Aufrufe erfolgen auf dem einen logischen UI-Thread.
pub trait ArSceneHost {
    /// Erzeugt einen Anker am Trefferpunkt.
    fn create_anchor(&mut self, hit: &SurfaceHit) -> AnchorHandle;
    /// Erzeugt einen Node, der dem Anker folgt.
    fn create_anchor_node(&mut self, anchor: AnchorHandle) -> SceneNodeHandle;
    /// Erzeugt einen Kind-Node mit lokalem Versatz und lokaler Skalierung.
    fn create_child_node(
        &mut self,
        parent: SceneNodeHandle,
        local_offset: Vec3,
        local_scale: Vec3,
    ) -> SceneNodeHandle;
    /// Setzt oder entfernt (`None`) das Renderable eines Nodes.
    fn set_renderable(&mut self, node: SceneNodeHandle, renderable: Option<Renderable>);
    /// Hängt einen Node an die Szenen-Wurzel.
    fn add_to_scene(&mut self, node: SceneNodeHandle);
    /// Löst einen Node von der Szenen-Wurzel.
    fn remove_from_scene(&mut self, node: SceneNodeHandle);
    /// Weltposition eines Nodes.
    fn world_position(&self, node: SceneNodeHandle) -> Vec3;
    /// Setzt die Welt-Rotation eines Nodes.
    fn set_world_rotation(&mut self, node: SceneNodeHandle, rotation: Quat);
    /// Weltposition der Kamera.
    fn camera_world_position(&self) -> Vec3;
    /// Gibt den Anker frei.
    fn destroy_anchor(&mut self, anchor: AnchorHandle);
    /// Gibt den Node frei.
    fn destroy_node(&mut self, node: SceneNodeHandle);
}

// ── Asset-Loading ───────────────────────────────────────────────────

/// Kennung eines laufenden Ladevorgangs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadTicket(pub u64);

/// Ladefehler mit lesbarer Ursache.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{asset}: {cause}")]
pub struct LoadError {
    /// Asset, dessen Laden fehlschlug
    pub asset: String,
    /// Lesbare Ursache
    pub cause: String,
}

impl LoadError {
    /// Erstellt einen Ladefehler.
    pub fn new(asset: impl Into<String>, cause: impl Into<String>) -> Self {
        Self {
            asset: asset.into(),
            cause: cause.into(),
        }
    }
}

/// Ergebnis eines erfolgreichen Ladevorgangs.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadedAsset {
    /// Modell + Bedienelement
    Placeable(Placeable),
    /// Chroma-Key-Video-Renderable
    Video(VideoRenderable),
}

/// Abschlussmeldung eines Ladevorgangs.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadCompletion {
    /// Zugehöriges Ticket
    pub ticket: LoadTicket,
    /// Ergebnis
    pub result: Result<LoadedAsset, LoadError>,
}

/// Rückkanal für Abschlussmeldungen.
///
/// Der Controller leert den Empfänger auf seinem eigenen Thread, daher darf
/// ein Loader von beliebigen Threads aus senden.
pub type LoadSender = Sender<LoadCompletion>;

/// Asynchroner Asset-Loader.
///
/// Aufrufe dürfen nicht blockieren. Das Ergebnis wird genau einmal über
/// `done` gemeldet, sofort oder später.
pub trait AssetLoader {
    /// Lädt Modell und Bedienelement für `model_ref`.
    fn load_placeable(&mut self, ticket: LoadTicket, model_ref: &AssetId, done: LoadSender);
    /// Lädt das Chroma-Key-Video-Renderable für `source`.
    fn load_video(
        &mut self,
        ticket: LoadTicket,
        source: &str,
        key_color: [f32; 3],
        done: LoadSender,
    );
}
