//! Asset-Loader-Varianten: sofort, manuell aufgelöst und threadbasiert.

use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use super::{
    AssetLoader, ControlRenderable, LoadCompletion, LoadError, LoadSender, LoadTicket,
    LoadedAsset, Placeable, PrimaryRenderable, VideoRenderable,
};
use crate::core::AssetId;

/// Standard-Höhe der Kollisions-Box, wenn kein Wert hinterlegt ist.
const DEFAULT_COLLISION_HEIGHT: f32 = 0.5;

/// Bekannte Assets: Modell-Referenz → Kollisionshöhe.
#[derive(Debug, Clone, Default)]
pub struct AssetTable {
    heights: HashMap<AssetId, f32>,
    strict: bool,
}

impl AssetTable {
    /// Tabelle, die jedes Modell mit Standardhöhe kennt.
    pub fn permissive() -> Self {
        Self::default()
    }

    /// Tabelle, die nur explizit eingetragene Modelle kennt.
    pub fn strict() -> Self {
        Self {
            heights: HashMap::new(),
            strict: true,
        }
    }

    /// Trägt ein Modell mit Kollisionshöhe ein.
    pub fn with_model(mut self, model_ref: impl Into<String>, collision_height: f32) -> Self {
        self.heights.insert(AssetId::new(model_ref), collision_height);
        self
    }

    fn resolve(&self, model_ref: &AssetId) -> Result<LoadedAsset, LoadError> {
        let height = match self.heights.get(model_ref) {
            Some(&h) => h,
            None if self.strict => {
                return Err(LoadError::new(model_ref.as_str(), "Modell nicht gefunden"));
            }
            None => DEFAULT_COLLISION_HEIGHT,
        };
        Ok(LoadedAsset::Placeable(Placeable {
            primary: PrimaryRenderable {
                model_ref: model_ref.clone(),
                collision_height: height,
            },
            control: ControlRenderable::delete_button(),
        }))
    }
}

fn video_asset(source: &str, key_color: [f32; 3]) -> Result<LoadedAsset, LoadError> {
    if source.is_empty() {
        return Err(LoadError::new("chroma_key_video", "leere Videoquelle"));
    }
    Ok(LoadedAsset::Video(VideoRenderable {
        source: source.to_string(),
        key_color,
    }))
}

fn send(done: &LoadSender, completion: LoadCompletion) {
    if done.send(completion).is_err() {
        log::warn!("Lade-Ergebnis verworfen: Empfänger existiert nicht mehr");
    }
}

// ── Sofort-Loader ───────────────────────────────────────────────────

/// Meldet das Ergebnis noch innerhalb des Aufrufs.
#[derive(Debug, Clone, Default)]
pub struct ImmediateLoader {
    table: AssetTable,
}

impl ImmediateLoader {
    /// Erstellt den Loader mit einer Asset-Tabelle.
    pub fn new(table: AssetTable) -> Self {
        Self { table }
    }
}

impl AssetLoader for ImmediateLoader {
    fn load_placeable(&mut self, ticket: LoadTicket, model_ref: &AssetId, done: LoadSender) {
        let result = self.table.resolve(model_ref);
        send(&done, LoadCompletion { ticket, result });
    }

    fn load_video(
        &mut self,
        ticket: LoadTicket,
        source: &str,
        key_color: [f32; 3],
        done: LoadSender,
    ) {
        let result = video_asset(source, key_color);
        send(&done, LoadCompletion { ticket, result });
    }
}

// ── Manuell aufgelöster Loader ──────────────────────────────────────

#[derive(Debug)]
enum DeferredTarget {
    Placeable(AssetId),
    Video { source: String, key_color: [f32; 3] },
}

#[derive(Debug)]
struct DeferredRequest {
    ticket: LoadTicket,
    target: DeferredTarget,
    done: LoadSender,
}

/// Hält Anfragen zurück, bis sie explizit aufgelöst werden.
///
/// Bildet langsame Loads nach, die erst nach weiteren Benutzeraktionen fertig werden.
#[derive(Debug, Default)]
pub struct DeferredLoader {
    table: AssetTable,
    pending: VecDeque<DeferredRequest>,
}

impl DeferredLoader {
    /// Erstellt den Loader mit einer Asset-Tabelle.
    pub fn new(table: AssetTable) -> Self {
        Self {
            table,
            pending: VecDeque::new(),
        }
    }

    /// Anzahl offener Anfragen.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Tickets aller offenen Anfragen in Eingangsreihenfolge.
    pub fn pending_tickets(&self) -> Vec<LoadTicket> {
        self.pending.iter().map(|r| r.ticket).collect()
    }

    /// Löst die älteste offene Anfrage regulär auf.
    pub fn resolve_next(&mut self) -> Option<LoadTicket> {
        let request = self.pending.pop_front()?;
        let ticket = request.ticket;
        self.complete(request);
        Some(ticket)
    }

    /// Löst die Anfrage mit `ticket` regulär auf.
    pub fn resolve(&mut self, ticket: LoadTicket) -> bool {
        match self.take(ticket) {
            Some(request) => {
                self.complete(request);
                true
            }
            None => false,
        }
    }

    /// Lässt die Anfrage mit `ticket` mit `cause` fehlschlagen.
    pub fn fail(&mut self, ticket: LoadTicket, cause: &str) -> bool {
        match self.take(ticket) {
            Some(request) => {
                let asset = match &request.target {
                    DeferredTarget::Placeable(model_ref) => model_ref.to_string(),
                    DeferredTarget::Video { .. } => "chroma_key_video".to_string(),
                };
                send(
                    &request.done,
                    LoadCompletion {
                        ticket,
                        result: Err(LoadError::new(asset, cause)),
                    },
                );
                true
            }
            None => false,
        }
    }

    fn take(&mut self, ticket: LoadTicket) -> Option<DeferredRequest> {
        let pos = self.pending.iter().position(|r| r.ticket == ticket)?;
        self.pending.remove(pos)
    }

    fn complete(&self, request: DeferredRequest) {
        let result = match &request.target {
            DeferredTarget::Placeable(model_ref) => self.table.resolve(model_ref),
            DeferredTarget::Video { source, key_color } => video_asset(source, *key_color),
        };
        send(
            &request.done,
            LoadCompletion {
                ticket: request.ticket,
                result,
            },
        );
    }
}

impl AssetLoader for DeferredLoader {
    fn load_placeable(&mut self, ticket: LoadTicket, model_ref: &AssetId, done: LoadSender) {
        self.pending.push_back(DeferredRequest {
            ticket,
            target: DeferredTarget::Placeable(model_ref.clone()),
            done,
        });
    }

    fn load_video(
        &mut self,
        ticket: LoadTicket,
        source: &str,
        key_color: [f32; 3],
        done: LoadSender,
    ) {
        self.pending.push_back(DeferredRequest {
            ticket,
            target: DeferredTarget::Video {
                source: source.to_string(),
                key_color,
            },
            done,
        });
    }
}

// ── Thread-Loader ───────────────────────────────────────────────────

/// Lädt auf Worker-Threads; Ergebnisse laufen über den Kanal zurück.
#[derive(Debug, Clone)]
pub struct ThreadedLoader {
    table: AssetTable,
    latency: Duration,
}

impl ThreadedLoader {
    /// Erstellt den Loader mit simulierter Ladezeit.
    pub fn new(table: AssetTable, latency: Duration) -> Self {
        Self { table, latency }
    }
}

impl AssetLoader for ThreadedLoader {
    fn load_placeable(&mut self, ticket: LoadTicket, model_ref: &AssetId, done: LoadSender) {
        let table = self.table.clone();
        let model_ref = model_ref.clone();
        let latency = self.latency;
        std::thread::spawn(move || {
            std::thread::sleep(latency);
            let result = table.resolve(&model_ref);
            send(&done, LoadCompletion { ticket, result });
        });
    }

    fn load_video(
        &mut self,
        ticket: LoadTicket,
        source: &str,
        key_color: [f32; 3],
        done: LoadSender,
    ) {
        let source = source.to_string();
        let latency = self.latency;
        std::thread::spawn(move || {
            std::thread::sleep(latency);
            let result = video_asset(&source, key_color);
            send(&done, LoadCompletion { ticket, result });
        });
    }
}
