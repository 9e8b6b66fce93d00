//! Auswahlliste: unveränderlicher Katalog plus genau ein selektierter Index.
//!
//! Beobachter registrieren sich über [`SelectionList::observe`] und erhalten
//! sofort den aktuellen Eintrag, danach jede tatsächliche Änderung.

use std::sync::mpsc::{channel, Receiver, Sender};

use super::asset::ModelEntry;

/// Fehler der Auswahlliste.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    /// Index liegt außerhalb von `[0, len)`
    #[error("Index {index} außerhalb des Katalogs (Länge {len})")]
    OutOfRange {
        /// Angefragter Index
        index: usize,
        /// Länge des Katalogs
        len: usize,
    },
    /// Eine Auswahlliste braucht mindestens einen Eintrag
    #[error("Katalog ist leer")]
    EmptyCatalog,
}

/// Ergebnis einer Selektion.
///
/// `Changed` nennt beide Zeilen, die die Listen-Darstellung neu zeichnen muss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    /// Index war bereits selektiert; nichts emittiert
    Unchanged,
    /// Selektion gewechselt
    Changed {
        /// Vorher selektierte Zeile
        previous: usize,
        /// Neu selektierte Zeile
        current: usize,
    },
}

/// Geordneter Modellkatalog mit Einfach-Selektion.
#[derive(Debug)]
pub struct SelectionList {
    entries: Vec<ModelEntry>,
    current_index: usize,
    observers: Vec<Sender<ModelEntry>>,
}

impl SelectionList {
    /// Erstellt die Liste; Index 0 ist selektiert.
    pub fn new(entries: Vec<ModelEntry>) -> Result<Self, SelectionError> {
        if entries.is_empty() {
            return Err(SelectionError::EmptyCatalog);
        }
        Ok(Self {
            entries,
            current_index: 0,
            observers: Vec::new(),
        })
    }

    /// Selektiert den Eintrag an `index` und benachrichtigt Beobachter.
    pub fn select(&mut self, index: usize) -> Result<SelectionChange, SelectionError> {
        if index >= self.entries.len() {
            return Err(SelectionError::OutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        if index == self.current_index {
            return Ok(SelectionChange::Unchanged);
        }

        let previous = self.current_index;
        self.current_index = index;
        self.emit();
        Ok(SelectionChange::Changed {
            previous,
            current: index,
        })
    }

    /// Wie [`select`](Self::select), klemmt ungültige Indizes aber auf den
    /// letzten Eintrag. Debug-Builds schlagen bei ungültigem Index fehl.
    pub fn select_clamped(&mut self, index: usize) -> SelectionChange {
        let last = self.entries.len() - 1;
        debug_assert!(
            index <= last,
            "Selektion außerhalb des Katalogs: {index} (Länge {})",
            self.entries.len()
        );
        match self.select(index.min(last)) {
            Ok(change) => change,
            Err(_) => SelectionChange::Unchanged,
        }
    }

    /// Aktuell selektierter Eintrag.
    pub fn current(&self) -> &ModelEntry {
        &self.entries[self.current_index]
    }

    /// Index des selektierten Eintrags.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Gibt `true` zurück, wenn die Zeile `index` hervorgehoben werden muss.
    pub fn is_selected(&self, index: usize) -> bool {
        index == self.current_index
    }

    /// Registriert einen Beobachter. Der aktuelle Eintrag wird sofort gesendet.
    pub fn observe(&mut self) -> Receiver<ModelEntry> {
        let (tx, rx) = channel();
        // Empfänger lebt noch, Senden kann hier nicht fehlschlagen
        let _ = tx.send(self.current().clone());
        self.observers.push(tx);
        rx
    }

    /// Alle Einträge in Katalogreihenfolge.
    pub fn entries(&self) -> &[ModelEntry] {
        &self.entries
    }

    /// Anzahl der Einträge.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Immer `false`; eine leere Liste kann nicht erstellt werden.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn emit(&mut self) {
        let entry = self.entries[self.current_index].clone();
        self.observers.retain(|tx| tx.send(entry.clone()).is_ok());
    }
}

impl Default for SelectionList {
    /// Standard-Katalog der Demo-Modelle, Index 0 selektiert.
    fn default() -> Self {
        Self {
            entries: super::asset::default_catalog(),
            current_index: 0,
            observers: Vec::new(),
        }
    }
}
