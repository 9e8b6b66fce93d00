//! Zentrale Konfiguration fuer den AR-Platzierungs-Kern.
//!
//! `ArOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};
use std::time::Duration;

// ── Gesten ──────────────────────────────────────────────────────────

/// Zeitfenster in Millisekunden, in dem ein zweiter Tipp als Doppeltipp gilt.
pub const DOUBLE_TAP_WINDOW_MS: u64 = 1000;

// ── Bottom-Sheet ────────────────────────────────────────────────────

/// Sichtbare Höhe des eingeklappten Modell-Sheets in dp.
pub const BOTTOM_SHEET_PEEK_HEIGHT_DP: f32 = 50.0;

// ── Video ───────────────────────────────────────────────────────────

/// Höhe des Video-Quads in Welteinheiten (Meter).
pub const VIDEO_HEIGHT_METERS: f32 = 0.85;
/// Farbe, die aus dem Video herausgefiltert wird (RGB: Greenscreen-Grün).
pub const CHROMA_KEY_COLOR: [f32; 3] = [0.1843, 1.0, 0.098];

// ── Geräte-Voraussetzungen ──────────────────────────────────────────

/// Minimales Android-API-Level (Android N).
pub const MIN_SDK_LEVEL: u32 = 24;
/// Minimale OpenGL-ES-Version.
pub const MIN_OPENGL_VERSION: f64 = 3.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `ar_model_placer.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArOptions {
    /// Doppeltipp-Zeitfenster in Millisekunden
    pub double_tap_window_ms: u64,
    /// Peek-Höhe des Bottom-Sheets in dp
    pub bottom_sheet_peek_height_dp: f32,
    /// Höhe des Video-Quads in Metern
    pub video_height_meters: f32,
    /// Chroma-Key-Farbe (RGB)
    pub chroma_key_color: [f32; 3],
    /// Minimales API-Level
    #[serde(default = "default_min_sdk_level")]
    pub min_sdk_level: u32,
    /// Minimale OpenGL-ES-Version
    #[serde(default = "default_min_opengl_version")]
    pub min_opengl_version: f64,
}

impl Default for ArOptions {
    fn default() -> Self {
        Self {
            double_tap_window_ms: DOUBLE_TAP_WINDOW_MS,
            bottom_sheet_peek_height_dp: BOTTOM_SHEET_PEEK_HEIGHT_DP,
            video_height_meters: VIDEO_HEIGHT_METERS,
            chroma_key_color: CHROMA_KEY_COLOR,
            min_sdk_level: MIN_SDK_LEVEL,
            min_opengl_version: MIN_OPENGL_VERSION,
        }
    }
}

/// Serde-Default für `min_sdk_level` (Abwärtskompatibilität älterer TOML-Dateien).
fn default_min_sdk_level() -> u32 {
    MIN_SDK_LEVEL
}

/// Serde-Default für `min_opengl_version`.
fn default_min_opengl_version() -> f64 {
    MIN_OPENGL_VERSION
}

impl ArOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("ar_model_placer"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("ar_model_placer.toml")
    }

    /// Doppeltipp-Fenster als `Duration`.
    pub fn double_tap_window(&self) -> Duration {
        Duration::from_millis(self.double_tap_window_ms)
    }
}
