//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen, die sowohl vom `core` (Gesten-Fenster,
//! Geräte-Check) als auch vom `app`-Layer gelesen werden.

pub mod options;

pub use options::ArOptions;
pub use options::{CHROMA_KEY_COLOR, DOUBLE_TAP_WINDOW_MS, VIDEO_HEIGHT_METERS};
