use std::time::Instant;

use crate::core::{DeviceCapabilities, NodeId};
use crate::host::{SceneNodeHandle, SurfaceHit};
use crate::shared::ArOptions;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/Host ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Host meldet einmalig die Geräteeigenschaften
    DeviceCapabilitiesReported { caps: DeviceCapabilities },
    /// Auswahl-Screen: "3D-Modelle platzieren"
    ModelPlacementChosen,
    /// Auswahl-Screen: "Chroma-Key-Video"
    ChromaVideoChosen,
    /// Zurück zum Auswahl-Screen
    BackRequested,
    /// Anwendung beenden
    ExitRequested,
    /// Neue Laufzeit-Optionen übernehmen
    OptionsChanged { options: ArOptions },

    /// Zeile in der Modell-Liste angeklickt
    ModelRowClicked { index: usize },
    /// Bottom-Sheet auf-/zuklappen
    BottomSheetToggled,

    /// Tipp auf eine getrackte Fläche
    SurfaceTapped { hit: SurfaceHit, at: Instant },
    /// Tipp auf ein platziertes Modell
    PlacedModelTapped { node_id: NodeId },
    /// Host meldet einen Tipp auf einen Modell-Node (ohne Registry-ID)
    ModelNodeTapped { node: SceneNodeHandle },
    /// Transform-Geste (Verschieben/Drehen) auf einem Modell beginnt
    TransformStarted { node_id: NodeId },
    /// Transform-Geste endet
    TransformEnded { node_id: NodeId },
    /// Bedienelement ("Delete") eines Modells angeklickt
    ControlClicked { node_id: NodeId },
    /// Szenen-Update (einmal pro Frame)
    SceneUpdated,

    /// Video-Auswahl abgeschlossen (`None` = abgebrochen/leer)
    VideoPicked {
        uri: Option<String>,
        dimensions: Option<(u32, u32)>,
    },
    /// Erstes Videobild ist verfügbar
    VideoFrameAvailable,

    /// Angezeigte Hinweise verwerfen
    NotificationsDismissed,
}
