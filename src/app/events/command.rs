use std::time::Instant;

use crate::app::state::AppMode;
use crate::core::{DeviceCapabilities, NodeId};
use crate::host::{Placeable, SurfaceHit, VideoRenderable};
use crate::shared::ArOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    // === Anwendung ===
    /// Geräte-Check ausführen
    CheckDevice { caps: DeviceCapabilities },
    /// Modus wechseln (räumt den alten Modus auf)
    EnterMode { mode: AppMode },
    /// Anwendung beenden
    RequestExit,
    /// Optionen übernehmen
    ApplyOptions { options: ArOptions },
    /// Hinweise verwerfen
    DismissNotifications,
    /// Fehlgeschlagenen Ladevorgang melden
    ReportLoadFailure { message: String },

    // === Modell-Liste ===
    /// Modell im Katalog selektieren
    SelectModel { index: usize },
    /// Bottom-Sheet umschalten
    ToggleBottomSheet,

    // === Platzierung ===
    /// Tipp an den Doppeltipp-Classifier geben
    RegisterTap { hit: SurfaceHit, at: Instant },
    /// Geladenes Modell am Treffer platzieren
    PlaceModel { hit: SurfaceHit, placeable: Placeable },
    /// Bedienelement ein-/ausblenden
    ToggleControl { node_id: NodeId },
    /// Transform-Zustand setzen
    SetTransforming { node_id: NodeId, transforming: bool },
    /// Platziertes Modell entfernen
    RemovePlacedModel { node_id: NodeId },
    /// Bedienelemente zur Kamera drehen
    UpdateAuxOrientations,

    // === Video ===
    /// Videoquelle öffnen und Renderable anfordern
    OpenVideo {
        uri: String,
        dimensions: Option<(u32, u32)>,
    },
    /// Video-Renderable ist geladen
    VideoRenderableLoaded { renderable: VideoRenderable },
    /// Video-Quad am Treffer platzieren
    PlaceVideo { hit: SurfaceHit },
    /// Wartenden Video-Nodes das Renderable anhängen
    AttachPendingVideo,
}
