//! Doppeltipp-Erkennung auf getrackten Flächen.
//!
//! Der Classifier betrachtet nur den Ankunftszeitpunkt eines Tipps, nie
//! dessen Inhalt. Zustand ist ausschließlich der letzte Zeitstempel.

use std::time::{Duration, Instant};

/// Ergebnis eines einzelnen Tipps.
#[derive(Debug, Clone, PartialEq)]
pub enum TapOutcome<T> {
    /// Kein Platzierungswunsch (erster Tipp oder Fenster abgelaufen)
    Ignore,
    /// Doppeltipp erkannt; enthält den auslösenden (zweiten) Treffer
    PlaceRequested(T),
}

/// Erkennt Doppeltipps innerhalb eines festen Zeitfensters.
#[derive(Debug, Clone)]
pub struct GestureClassifier {
    window: Duration,
    last_tap: Option<Instant>,
}

impl GestureClassifier {
    /// Erstellt einen Classifier mit dem angegebenen Zeitfenster.
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_tap: None,
        }
    }

    /// Verarbeitet einen Tipp zum Zeitpunkt `now`.
    pub fn on_tap<T>(&mut self, hit: T, now: Instant) -> TapOutcome<T> {
        match self.last_tap {
            Some(last) if now.saturating_duration_since(last) < self.window => {
                self.last_tap = None;
                TapOutcome::PlaceRequested(hit)
            }
            _ => {
                self.last_tap = Some(now);
                TapOutcome::Ignore
            }
        }
    }

    /// Verwirft einen angefangenen Doppeltipp.
    pub fn reset(&mut self) {
        self.last_tap = None;
    }

    /// Setzt ein neues Zeitfenster (verwirft den laufenden Zustand).
    pub fn set_window(&mut self, window: Duration) {
        self.window = window;
        self.last_tap = None;
    }

    /// Aktuelles Zeitfenster.
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Gibt `true` zurück, wenn ein erster Tipp auf seinen Partner wartet.
    pub fn is_armed(&self) -> bool {
        self.last_tap.is_some()
    }
}

impl Default for GestureClassifier {
    fn default() -> Self {
        Self::new(Duration::from_millis(crate::shared::DOUBLE_TAP_WINDOW_MS))
    }
}
