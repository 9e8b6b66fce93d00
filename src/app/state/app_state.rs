use std::sync::mpsc::Receiver;

use crate::app::{CommandLog, LoadQueue};
use crate::core::{
    GestureClassifier, ModelEntry, SceneNodeRegistry, SelectionError, SelectionList, VideoSession,
};
use crate::shared::ArOptions;

use super::UiState;

/// Aktiver Screen der Anwendung
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    /// Auswahl-Screen mit zwei Buttons
    #[default]
    Choice,
    /// 3D-Modelle per Doppeltipp platzieren
    ModelPlacement,
    /// Chroma-Key-Video per Tipp platzieren
    ChromaVideo,
}

impl AppMode {
    /// Gibt `true` zurück für Modi, die eine AR-Szene brauchen.
    pub fn needs_ar(self) -> bool {
        !matches!(self, AppMode::Choice)
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktiver Screen
    pub mode: AppMode,
    /// Modellkatalog mit Einfach-Selektion
    pub catalog: SelectionList,
    /// Beobachter-Kanal der UI auf die Katalog-Selektion
    pub selection_feed: Receiver<ModelEntry>,
    /// Doppeltipp-Erkennung
    pub gesture: GestureClassifier,
    /// Platzierte Modelle
    pub placed: SceneNodeRegistry,
    /// Aktive Video-Sitzung (nur im Video-Modus)
    pub video: Option<VideoSession>,
    /// Offene Ladevorgänge
    pub loads: LoadQueue,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: ArOptions,
    /// Ergebnis des Geräte-Checks (None = noch nicht gemeldet)
    pub device_supported: Option<bool>,
    /// Signalisiert dem Host, die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen App-State mit Standard-Katalog und Standard-Optionen.
    pub fn new() -> Self {
        Self::from_parts(SelectionList::default(), ArOptions::default())
    }

    /// Erstellt einen App-State mit eigenem Katalog und eigenen Optionen.
    pub fn with_catalog(
        entries: Vec<ModelEntry>,
        options: ArOptions,
    ) -> Result<Self, SelectionError> {
        Ok(Self::from_parts(SelectionList::new(entries)?, options))
    }

    fn from_parts(mut catalog: SelectionList, options: ArOptions) -> Self {
        let selection_feed = catalog.observe();
        let mut state = Self {
            mode: AppMode::Choice,
            catalog,
            selection_feed,
            gesture: GestureClassifier::new(options.double_tap_window()),
            placed: SceneNodeRegistry::new(),
            video: None,
            loads: LoadQueue::new(),
            ui: UiState::new(&options),
            command_log: CommandLog::new(),
            options,
            device_supported: None,
            should_exit: false,
        };
        // Initialwert des Beobachters sofort in den Titel übernehmen
        crate::app::handlers::selection::sync_selection_feed(&mut state);
        state
    }

    /// Gibt `true` zurück, solange AR-Modi betreten werden dürfen.
    pub fn ar_allowed(&self) -> bool {
        self.device_supported != Some(false)
    }

    /// Aktuell selektiertes Modell.
    pub fn selected_model(&self) -> &ModelEntry {
        self.catalog.current()
    }

    /// Anzahl platzierter Modelle (für UI-Anzeige)
    pub fn placed_count(&self) -> usize {
        self.placed.len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
