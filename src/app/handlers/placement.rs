//! Handler für Doppeltipp-Platzierung und platzierte Modelle.

use std::time::Instant;

use super::HandlerContext;
use crate::app::load_queue::PendingLoad;
use crate::app::state::AppMode;
use crate::app::AppState;
use crate::core::{NodeId, TapOutcome, ToggleOutcome};
use crate::host::{Placeable, SurfaceHit};

/// Gibt einen Flächen-Tipp an den Classifier; ein Doppeltipp startet das Laden.
pub fn register_tap(state: &mut AppState, ctx: &mut HandlerContext, hit: SurfaceHit, at: Instant) {
    match state.gesture.on_tap(hit, at) {
        TapOutcome::Ignore => log::debug!("Tipp registriert, warte auf zweiten Tipp"),
        TapOutcome::PlaceRequested(hit) => {
            let model_ref = state.catalog.current().model_ref.clone();
            let ticket = state.loads.issue(PendingLoad::Placement { hit });
            log::info!("Doppeltipp: lade {} (Ticket {:?})", model_ref, ticket);
            ctx.loader
                .load_placeable(ticket, &model_ref, ctx.load_tx.clone());
        }
    }
}

/// Platziert ein fertig geladenes Modell.
///
/// Ergebnisse alter Ladevorgänge werden ebenfalls platziert, auch wenn der
/// Benutzer inzwischen weitergetippt oder den Modus verlassen hat.
pub fn place_model(
    state: &mut AppState,
    ctx: &mut HandlerContext,
    hit: SurfaceHit,
    placeable: Placeable,
) -> NodeId {
    if state.mode != AppMode::ModelPlacement {
        log::debug!("Platziere veraltetes Lade-Ergebnis im Modus {:?}", state.mode);
    }
    let anchor = ctx.host.create_anchor(&hit);
    state.placed.place(ctx.host, anchor, placeable)
}

/// Blendet das Bedienelement eines Modells ein oder aus.
pub fn toggle_control(state: &mut AppState, ctx: &mut HandlerContext, node_id: NodeId) {
    match state.placed.toggle_control(ctx.host, node_id) {
        Ok(ToggleOutcome::Toggled { visible }) => {
            log::debug!("Bedienelement {} sichtbar: {}", node_id, visible);
        }
        Ok(ToggleOutcome::Skipped) => {
            log::debug!("Modell {} wird transformiert, Tipp ignoriert", node_id);
        }
        Err(e) => log::debug!("{}", e),
    }
}

/// Setzt den Transform-Zustand eines Modells.
pub fn set_transforming(state: &mut AppState, node_id: NodeId, transforming: bool) {
    if let Err(e) = state.placed.set_transforming(node_id, transforming) {
        log::debug!("{}", e);
    }
}

/// Entfernt ein Modell. Ein doppelter Klick auf "Delete" ist ein No-op.
pub fn remove_placed_model(state: &mut AppState, ctx: &mut HandlerContext, node_id: NodeId) {
    if let Err(e) = state.placed.remove(ctx.host, node_id) {
        log::debug!("Entfernen ignoriert: {}", e);
    }
}

/// Dreht sichtbare Bedienelemente zur Kamera.
pub fn update_aux_orientations(state: &AppState, ctx: &mut HandlerContext) {
    state.placed.update_aux_orientations(ctx.host);
}
