//! Feature-Handler für AppCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod lifecycle;
pub mod placement;
pub mod selection;
pub mod video;

use crate::host::{ArSceneHost, AssetLoader, LoadSender};

/// Zugriff der Handler auf die externen Kollaborateure.
pub struct HandlerContext<'a> {
    /// AR-Szene des Hosts
    pub host: &'a mut dyn ArSceneHost,
    /// Asset-Loader
    pub loader: &'a mut dyn AssetLoader,
    /// Rückkanal für Lade-Ergebnisse
    pub load_tx: &'a LoadSender,
}
