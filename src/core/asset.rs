//! Modellkatalog: unveränderliche Einträge für die Modell-Auswahlliste.

use serde::{Deserialize, Serialize};

/// Opake Asset-Referenz, wird erst vom externen Loader aufgelöst.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetId(pub String);

impl AssetId {
    /// Erstellt eine Asset-Referenz aus einem beliebigen String.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Gibt die Referenz als `&str` zurück.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AssetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ein platzierbares Modell im Katalog.
///
/// Wird einmalig beim Start erzeugt und danach nie verändert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelEntry {
    /// Anzeigename in der Liste
    pub display_label: String,
    /// Vorschaubild
    pub thumbnail_ref: AssetId,
    /// Eigentliches 3D-Modell
    pub model_ref: AssetId,
}

impl ModelEntry {
    /// Erstellt einen neuen Katalog-Eintrag.
    pub fn new(
        display_label: impl Into<String>,
        thumbnail_ref: impl Into<String>,
        model_ref: impl Into<String>,
    ) -> Self {
        Self {
            display_label: display_label.into(),
            thumbnail_ref: AssetId::new(thumbnail_ref),
            model_ref: AssetId::new(model_ref),
        }
    }
}

/// Format einer Katalog-Datei (`[[models]]`-Tabellen).
#[derive(Debug, Deserialize)]
struct CatalogFile {
    models: Vec<ModelEntry>,
}

/// Standard-Katalog der Demo-Modelle.
pub fn default_catalog() -> Vec<ModelEntry> {
    vec![
        ModelEntry::new("Astronaut", "ico_astronut", "astronaut"),
        ModelEntry::new("Box", "ico_box", "boom_box"),
        ModelEntry::new("Corset", "ico_corset", "corset"),
        ModelEntry::new("Helmet", "ico_helmet", "helmet"),
        ModelEntry::new("Horse", "ico_horse", "horse"),
        ModelEntry::new("Lalten", "ico_lalten", "lalten"),
        ModelEntry::new("T-Shirt", "ic_tshirt", "tshirt_glb"),
        ModelEntry::new("Statue", "ic_devil", "george_washington"),
    ]
}

/// Parst einen Katalog aus TOML.
pub fn parse_catalog(content: &str) -> anyhow::Result<Vec<ModelEntry>> {
    let file: CatalogFile = toml::from_str(content)?;
    if file.models.is_empty() {
        anyhow::bail!("Katalog enthält keine Modelle");
    }
    Ok(file.models)
}

/// Lädt einen Katalog aus einer TOML-Datei. Bei Fehler: Standard-Katalog.
pub fn load_catalog_from_file(path: &std::path::Path) -> Vec<ModelEntry> {
    let parsed = std::fs::read_to_string(path)
        .map_err(anyhow::Error::from)
        .and_then(|content| parse_catalog(&content));
    match parsed {
        Ok(models) => {
            log::info!("{} Modelle geladen aus: {}", models.len(), path.display());
            models
        }
        Err(e) => {
            log::info!("Kein gültiger Katalog ({:#}), verwende Standard-Katalog", e);
            default_catalog()
        }
    }
}
