//! Chroma-Key-Video: Sitzungszustand des Videoplayers und Quad-Skalierung.
//!
//! Die erste Platzierung startet die Wiedergabe. Das Renderable wird erst
//! angehängt, wenn das erste Videobild vorliegt, damit kein schwarzes Quad
//! aufblitzt. Spätere Platzierungen bekommen es sofort.

use glam::Vec3;

use crate::host::{AnchorHandle, SceneNodeHandle, VideoRenderable};

/// Ein platziertes Video-Quad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedVideo {
    /// Anker im Tracking
    pub anchor: AnchorHandle,
    /// Anker-Node (Wurzel-Kind)
    pub anchor_node: SceneNodeHandle,
    /// Node mit dem Video-Renderable
    pub video_node: SceneNodeHandle,
}

/// Zustand einer gewählten Videoquelle.
#[derive(Debug, Clone)]
pub struct VideoSession {
    /// Videoquelle (URI)
    pub source: String,
    /// Pixelmaße des Videos, falls bekannt
    pub dimensions: Option<(u32, u32)>,
    /// Geladenes Chroma-Key-Renderable
    pub renderable: Option<VideoRenderable>,
    /// Player läuft
    pub playing: bool,
    /// Wiedergabe in Endlosschleife (ab Start der Wiedergabe)
    pub looping: bool,
    /// Nodes, die auf das erste Videobild warten
    pub awaiting_first_frame: Vec<SceneNodeHandle>,
    /// Alle platzierten Video-Quads
    pub placed: Vec<PlacedVideo>,
}

impl VideoSession {
    /// Neue Sitzung für `source`; der Player ist vorbereitet, aber gestoppt.
    pub fn new(source: impl Into<String>, dimensions: Option<(u32, u32)>) -> Self {
        Self {
            source: source.into(),
            dimensions,
            renderable: None,
            playing: false,
            looping: false,
            awaiting_first_frame: Vec::new(),
            placed: Vec::new(),
        }
    }

    /// Gibt `true` zurück, sobald Tipps ein Video platzieren können.
    pub fn is_ready(&self) -> bool {
        self.renderable.is_some()
    }
}

/// Lokale Skalierung des Video-Quads bei fester Höhe.
///
/// Ohne bekannte Maße bleibt die Standard-Skalierung.
pub fn video_node_scale(dimensions: Option<(u32, u32)>, height_meters: f32) -> Vec3 {
    match dimensions {
        Some((width, height)) if height > 0 => Vec3::new(
            height_meters * (width as f32 / height as f32),
            height_meters,
            1.0,
        ),
        _ => Vec3::ONE,
    }
}
