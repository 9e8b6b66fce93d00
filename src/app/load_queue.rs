//! Buchführung über laufende Ladevorgänge.
//!
//! Jede Anfrage an den Asset-Loader bekommt ein Ticket. Zum Ticket merkt sich
//! die Queue, was mit dem Ergebnis passieren soll. Abbrechen gibt es nicht:
//! auch ein veraltetes Ergebnis wird noch verarbeitet.

use std::collections::HashMap;

use crate::host::{LoadTicket, SurfaceHit};

/// Zweck eines Ladevorgangs.
#[derive(Debug, Clone, PartialEq)]
pub enum PendingLoad {
    /// Modell am Treffer platzieren, sobald geladen
    Placement {
        /// Treffer des auslösenden Doppeltipps
        hit: SurfaceHit,
    },
    /// Chroma-Key-Renderable der Video-Sitzung
    Video,
}

/// Offene Ladevorgänge nach Ticket.
#[derive(Debug, Default)]
pub struct LoadQueue {
    pending: HashMap<LoadTicket, PendingLoad>,
    next_ticket: u64,
}

impl LoadQueue {
    /// Erstellt eine leere Queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registriert einen Ladevorgang und gibt sein Ticket zurück.
    pub fn issue(&mut self, load: PendingLoad) -> LoadTicket {
        self.next_ticket += 1;
        let ticket = LoadTicket(self.next_ticket);
        self.pending.insert(ticket, load);
        ticket
    }

    /// Entnimmt den Ladevorgang zum Ticket.
    pub fn take(&mut self, ticket: LoadTicket) -> Option<PendingLoad> {
        self.pending.remove(&ticket)
    }

    /// Anzahl offener Ladevorgänge.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Gibt `true` zurück, wenn nichts lädt.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_tickets_are_unique_and_taken_once() {
        let mut queue = LoadQueue::new();
        let a = queue.issue(PendingLoad::Video);
        let b = queue.issue(PendingLoad::Placement {
            hit: SurfaceHit::new(Vec3::ZERO, 1),
        });
        assert_ne!(a, b);
        assert_eq!(queue.len(), 2);

        assert_eq!(queue.take(a), Some(PendingLoad::Video));
        assert_eq!(queue.take(a), None);
        assert_eq!(queue.len(), 1);
    }
}
