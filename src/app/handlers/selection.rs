//! Handler für die Modell-Liste und das Bottom-Sheet.

use crate::app::AppState;
use crate::core::SelectionChange;

/// Selektiert ein Modell aus dem Katalog.
///
/// Die UI bietet nur gültige Zeilen an; ein ungültiger Index wird in
/// Release-Builds auf die letzte Zeile geklemmt.
pub fn select_model(state: &mut AppState, index: usize) {
    match state.catalog.select_clamped(index) {
        SelectionChange::Changed { previous, current } => {
            state.ui.rows_to_redraw = vec![previous, current];
            log::info!(
                "Modell selektiert: {} (Zeile {})",
                state.catalog.current().display_label,
                current
            );
        }
        SelectionChange::Unchanged => {
            state.ui.rows_to_redraw.clear();
            log::debug!("Modell in Zeile {} bereits selektiert", index);
        }
    }
}

/// Übernimmt alle neuen Selektionen aus dem Beobachter-Kanal in den Titel.
pub fn sync_selection_feed(state: &mut AppState) {
    while let Ok(entry) = state.selection_feed.try_recv() {
        state.ui.models_title = format!("Models ({})", entry.display_label);
    }
}

/// Klappt das Bottom-Sheet auf oder zu.
pub fn toggle_bottom_sheet(state: &mut AppState) {
    state.ui.bottom_sheet_expanded = !state.ui.bottom_sheet_expanded;
}
