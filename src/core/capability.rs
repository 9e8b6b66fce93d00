//! Einmaliger Geräte-Check beim Start (API-Level und OpenGL-ES-Version).

use serde::{Deserialize, Serialize};

use crate::shared::ArOptions;

/// Vom Host gemeldete Geräteeigenschaften.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceCapabilities {
    /// Android-API-Level
    pub sdk_level: u32,
    /// OpenGL-ES-Version als String (z.B. "3.2")
    pub gl_es_version: String,
}

/// Gerät erfüllt die Voraussetzungen der AR-Szene nicht.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CapabilityError {
    /// API-Level zu niedrig
    #[error("AR-Szene benötigt API-Level {required} oder neuer (Gerät: {actual})")]
    UnsupportedOs {
        /// Mindest-Level
        required: u32,
        /// Geräte-Level
        actual: u32,
    },
    /// OpenGL ES zu alt oder nicht lesbar
    #[error("AR-Szene benötigt OpenGL ES {required} oder neuer (Gerät: {actual})")]
    UnsupportedOpenGl {
        /// Mindest-Version
        required: f64,
        /// Gemeldete Version
        actual: String,
    },
}

/// Prüft, ob das Gerät die AR-Szene ausführen kann.
pub fn check_device_supported(
    caps: &DeviceCapabilities,
    options: &ArOptions,
) -> Result<(), CapabilityError> {
    if caps.sdk_level < options.min_sdk_level {
        return Err(CapabilityError::UnsupportedOs {
            required: options.min_sdk_level,
            actual: caps.sdk_level,
        });
    }

    let gl_ok = caps
        .gl_es_version
        .trim()
        .parse::<f64>()
        .is_ok_and(|v| v >= options.min_opengl_version);
    if !gl_ok {
        return Err(CapabilityError::UnsupportedOpenGl {
            required: options.min_opengl_version,
            actual: caps.gl_es_version.clone(),
        });
    }
    Ok(())
}
