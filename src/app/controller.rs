//! Application Controller für zentrale Event-Verarbeitung.

use std::sync::mpsc::{channel, Receiver};

use super::handlers::{self, HandlerContext};
use super::intent_mapping;
use super::{AppCommand, AppIntent, AppState};
use crate::host::{ArSceneHost, AssetLoader, LoadCompletion, LoadSender};

/// Orchestriert UI-Events, Lade-Ergebnisse und Use-Cases auf den AppState.
///
/// Besitzt die Kollaborateure (AR-Szene, Asset-Loader) und den Rückkanal
/// der Ladevorgänge. Alle Mutationen laufen über diesen Controller und damit
/// auf dem Thread, der ihn aufruft.
pub struct AppController<H, L> {
    host: H,
    loader: L,
    load_tx: LoadSender,
    load_rx: Receiver<LoadCompletion>,
}

impl<H: ArSceneHost, L: AssetLoader> AppController<H, L> {
    /// Erstellt einen neuen Controller.
    pub fn new(host: H, loader: L) -> Self {
        let (load_tx, load_rx) = channel();
        Self {
            host,
            loader,
            load_tx,
            load_rx,
        }
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Übernimmt alle bisher eingetroffenen Lade-Ergebnisse.
    ///
    /// Muss regelmäßig (z.B. pro Frame) vom UI-Thread aufgerufen werden.
    /// Gibt die Anzahl verarbeiteter Ergebnisse zurück.
    pub fn poll_loads(&mut self, state: &mut AppState) -> anyhow::Result<usize> {
        let mut processed = 0;
        while let Ok(completion) = self.load_rx.try_recv() {
            processed += 1;
            let Some(pending) = state.loads.take(completion.ticket) else {
                log::warn!("Unbekanntes Lade-Ticket {:?}, verworfen", completion.ticket);
                continue;
            };
            for command in intent_mapping::map_completion_to_commands(pending, completion) {
                self.handle_command(state, command)?;
            }
        }
        Ok(processed)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        let mut ctx = HandlerContext {
            host: &mut self.host,
            loader: &mut self.loader,
            load_tx: &self.load_tx,
        };

        match command {
            // === Anwendung ===
            AppCommand::CheckDevice { caps } => {
                handlers::lifecycle::check_device(state, &mut ctx, caps)
            }
            AppCommand::EnterMode { mode } => handlers::lifecycle::enter_mode(state, &mut ctx, mode),
            AppCommand::RequestExit => handlers::lifecycle::request_exit(state),
            AppCommand::ApplyOptions { options } => {
                handlers::lifecycle::apply_options(state, options)
            }
            AppCommand::DismissNotifications => handlers::lifecycle::dismiss_notifications(state),
            AppCommand::ReportLoadFailure { message } => {
                handlers::lifecycle::report_load_failure(state, message)
            }

            // === Modell-Liste ===
            AppCommand::SelectModel { index } => handlers::selection::select_model(state, index),
            AppCommand::ToggleBottomSheet => handlers::selection::toggle_bottom_sheet(state),

            // === Platzierung ===
            AppCommand::RegisterTap { hit, at } => {
                handlers::placement::register_tap(state, &mut ctx, hit, at)
            }
            AppCommand::PlaceModel { hit, placeable } => {
                handlers::placement::place_model(state, &mut ctx, hit, placeable);
            }
            AppCommand::ToggleControl { node_id } => {
                handlers::placement::toggle_control(state, &mut ctx, node_id)
            }
            AppCommand::SetTransforming {
                node_id,
                transforming,
            } => handlers::placement::set_transforming(state, node_id, transforming),
            AppCommand::RemovePlacedModel { node_id } => {
                handlers::placement::remove_placed_model(state, &mut ctx, node_id)
            }
            AppCommand::UpdateAuxOrientations => {
                handlers::placement::update_aux_orientations(state, &mut ctx)
            }

            // === Video ===
            AppCommand::OpenVideo { uri, dimensions } => {
                handlers::video::open_video(state, &mut ctx, uri, dimensions)
            }
            AppCommand::VideoRenderableLoaded { renderable } => {
                handlers::video::renderable_loaded(state, renderable)
            }
            AppCommand::PlaceVideo { hit } => handlers::video::place_video(state, &mut ctx, hit),
            AppCommand::AttachPendingVideo => handlers::video::attach_pending(state, &mut ctx),
        }

        handlers::selection::sync_selection_feed(state);
        Ok(())
    }

    /// Read-only Zugriff auf die AR-Szene.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutierbarer Zugriff auf die AR-Szene (z.B. Kamera bewegen).
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Mutierbarer Zugriff auf den Loader (z.B. Ladevorgänge auflösen).
    pub fn loader_mut(&mut self) -> &mut L {
        &mut self.loader
    }
}
