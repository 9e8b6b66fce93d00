//! Mapping von UI-Intents und Lade-Ergebnissen auf mutierende App-Commands.

use super::load_queue::PendingLoad;
use super::state::AppMode;
use super::{AppCommand, AppIntent, AppState};
use crate::host::{LoadCompletion, LoadedAsset};

/// Hinweistext, wenn Video-Auswahl oder Video-Renderable fehlschlagen.
pub const VIDEO_LOAD_FAILED: &str = "Unable to load video renderable";

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::DeviceCapabilitiesReported { caps } => vec![AppCommand::CheckDevice { caps }],
        AppIntent::ModelPlacementChosen => vec![AppCommand::EnterMode {
            mode: AppMode::ModelPlacement,
        }],
        AppIntent::ChromaVideoChosen => vec![AppCommand::EnterMode {
            mode: AppMode::ChromaVideo,
        }],
        AppIntent::BackRequested => match state.mode {
            AppMode::Choice => vec![AppCommand::RequestExit],
            _ => vec![AppCommand::EnterMode {
                mode: AppMode::Choice,
            }],
        },
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],

        AppIntent::ModelRowClicked { index } => vec![AppCommand::SelectModel { index }],
        AppIntent::BottomSheetToggled => vec![AppCommand::ToggleBottomSheet],

        AppIntent::SurfaceTapped { hit, at } => match state.mode {
            AppMode::ModelPlacement => vec![AppCommand::RegisterTap { hit, at }],
            AppMode::ChromaVideo => {
                // Tipps vor dem Laden des Renderables verpuffen
                if state.video.as_ref().is_some_and(|v| v.is_ready()) {
                    vec![AppCommand::PlaceVideo { hit }]
                } else {
                    vec![]
                }
            }
            AppMode::Choice => vec![],
        },
        AppIntent::PlacedModelTapped { node_id } => vec![AppCommand::ToggleControl { node_id }],
        AppIntent::ModelNodeTapped { node } => match state.placed.find_by_model_node(node) {
            Some(node_id) => vec![AppCommand::ToggleControl { node_id }],
            None => vec![],
        },
        AppIntent::TransformStarted { node_id } => vec![AppCommand::SetTransforming {
            node_id,
            transforming: true,
        }],
        AppIntent::TransformEnded { node_id } => vec![AppCommand::SetTransforming {
            node_id,
            transforming: false,
        }],
        AppIntent::ControlClicked { node_id } => {
            vec![AppCommand::RemovePlacedModel { node_id }]
        }
        AppIntent::SceneUpdated => {
            if state.placed.is_empty() {
                vec![]
            } else {
                vec![AppCommand::UpdateAuxOrientations]
            }
        }

        AppIntent::VideoPicked { uri, dimensions } => {
            // Videoauswahl gehört zum Video-Screen; späte Ergebnisse anderswo verwerfen
            if state.mode != AppMode::ChromaVideo {
                log::debug!("Videoauswahl im Modus {:?} verworfen", state.mode);
                return vec![];
            }
            match uri.filter(|u| !u.trim().is_empty()) {
                Some(uri) => vec![AppCommand::OpenVideo { uri, dimensions }],
                None => vec![AppCommand::ReportLoadFailure {
                    message: VIDEO_LOAD_FAILED.to_string(),
                }],
            }
        }
        AppIntent::VideoFrameAvailable => vec![AppCommand::AttachPendingVideo],

        AppIntent::NotificationsDismissed => vec![AppCommand::DismissNotifications],
    }
}

/// Übersetzt ein Lade-Ergebnis samt zugehörigem Zweck in Commands.
pub fn map_completion_to_commands(
    pending: PendingLoad,
    completion: LoadCompletion,
) -> Vec<AppCommand> {
    match (pending, completion.result) {
        (PendingLoad::Placement { hit }, Ok(LoadedAsset::Placeable(placeable))) => {
            vec![AppCommand::PlaceModel { hit, placeable }]
        }
        (PendingLoad::Placement { .. }, Err(e)) => vec![AppCommand::ReportLoadFailure {
            message: format!("Error Loading Model {e}"),
        }],
        (PendingLoad::Video, Ok(LoadedAsset::Video(renderable))) => {
            vec![AppCommand::VideoRenderableLoaded { renderable }]
        }
        (PendingLoad::Video, Err(e)) => {
            log::warn!("Video-Renderable nicht geladen: {}", e);
            vec![AppCommand::ReportLoadFailure {
                message: VIDEO_LOAD_FAILED.to_string(),
            }]
        }
        (pending, Ok(_)) => {
            log::warn!(
                "Lade-Ergebnis passt nicht zu {:?} (Ticket {:?}), verworfen",
                pending,
                completion.ticket
            );
            vec![]
        }
    }
}

#[cfg(test)]
mod tests;
