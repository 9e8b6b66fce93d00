use std::time::Instant;

use glam::Vec3;

use crate::app::load_queue::PendingLoad;
use crate::app::state::AppMode;
use crate::app::{AppCommand, AppIntent, AppState};
use crate::core::{AssetId, NodeId, VideoSession};
use crate::host::{
    ControlRenderable, LoadCompletion, LoadError, LoadTicket, LoadedAsset, Placeable,
    PrimaryRenderable, SceneNodeHandle, SurfaceHit, VideoRenderable,
};

use super::{map_completion_to_commands, map_intent_to_commands, VIDEO_LOAD_FAILED};

fn tap() -> AppIntent {
    AppIntent::SurfaceTapped {
        hit: SurfaceHit::new(Vec3::ZERO, 1),
        at: Instant::now(),
    }
}

#[test]
fn surface_tap_in_choice_mode_maps_to_nothing() {
    let state = AppState::new();

    assert!(map_intent_to_commands(&state, tap()).is_empty());
}

#[test]
fn surface_tap_in_placement_mode_goes_to_gesture_classifier() {
    let mut state = AppState::new();
    state.mode = AppMode::ModelPlacement;

    let commands = map_intent_to_commands(&state, tap());

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::RegisterTap { .. }));
}

#[test]
fn surface_tap_in_video_mode_places_only_when_renderable_ready() {
    let mut state = AppState::new();
    state.mode = AppMode::ChromaVideo;
    state.video = Some(VideoSession::new("content://clip", None));

    assert!(map_intent_to_commands(&state, tap()).is_empty());

    if let Some(video) = state.video.as_mut() {
        video.renderable = Some(VideoRenderable {
            source: "content://clip".into(),
            key_color: [0.0, 1.0, 0.0],
        });
    }
    let commands = map_intent_to_commands(&state, tap());
    assert!(matches!(commands[..], [AppCommand::PlaceVideo { .. }]));
}

#[test]
fn back_requested_returns_to_choice_then_exits() {
    let mut state = AppState::new();
    state.mode = AppMode::ChromaVideo;

    let commands = map_intent_to_commands(&state, AppIntent::BackRequested);
    assert!(matches!(
        commands[..],
        [AppCommand::EnterMode {
            mode: AppMode::Choice
        }]
    ));

    state.mode = AppMode::Choice;
    let commands = map_intent_to_commands(&state, AppIntent::BackRequested);
    assert!(matches!(commands[..], [AppCommand::RequestExit]));
}

#[test]
fn empty_video_pick_maps_to_failure_notification() {
    let mut state = AppState::new();
    state.mode = AppMode::ChromaVideo;

    let commands = map_intent_to_commands(
        &state,
        AppIntent::VideoPicked {
            uri: Some("  ".into()),
            dimensions: None,
        },
    );

    match &commands[..] {
        [AppCommand::ReportLoadFailure { message }] => assert_eq!(message, VIDEO_LOAD_FAILED),
        other => panic!("Unerwartete Commands: {other:?}"),
    }
}

#[test]
fn video_pick_outside_video_mode_maps_to_nothing() {
    let mut state = AppState::new();
    let picked = || AppIntent::VideoPicked {
        uri: Some("content://v".into()),
        dimensions: Some((1280, 720)),
    };

    for mode in [AppMode::Choice, AppMode::ModelPlacement] {
        state.mode = mode;
        assert!(map_intent_to_commands(&state, picked()).is_empty());
    }

    state.mode = AppMode::ChromaVideo;
    assert!(matches!(
        map_intent_to_commands(&state, picked())[..],
        [AppCommand::OpenVideo { .. }]
    ));
}

#[test]
fn model_node_tap_without_registered_model_maps_to_nothing() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::ModelNodeTapped {
            node: SceneNodeHandle(99),
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn scene_update_without_placed_models_is_skipped() {
    let state = AppState::new();

    assert!(map_intent_to_commands(&state, AppIntent::SceneUpdated).is_empty());
}

#[test]
fn transform_intents_map_to_transforming_flag() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::TransformEnded {
            node_id: NodeId(4),
        },
    );

    assert!(matches!(
        commands[..],
        [AppCommand::SetTransforming {
            node_id: NodeId(4),
            transforming: false
        }]
    ));
}

#[test]
fn placement_completion_maps_to_place_model() {
    let hit = SurfaceHit::new(Vec3::new(1.0, 0.0, 0.0), 3);
    let placeable = Placeable {
        primary: PrimaryRenderable {
            model_ref: AssetId::new("horse"),
            collision_height: 1.0,
        },
        control: ControlRenderable::delete_button(),
    };

    let commands = map_completion_to_commands(
        PendingLoad::Placement { hit },
        LoadCompletion {
            ticket: LoadTicket(1),
            result: Ok(LoadedAsset::Placeable(placeable)),
        },
    );

    match &commands[..] {
        [AppCommand::PlaceModel { hit: h, .. }] => assert_eq!(*h, hit),
        other => panic!("Unerwartete Commands: {other:?}"),
    }
}

#[test]
fn failed_placement_completion_reports_cause() {
    let commands = map_completion_to_commands(
        PendingLoad::Placement {
            hit: SurfaceHit::new(Vec3::ZERO, 1),
        },
        LoadCompletion {
            ticket: LoadTicket(2),
            result: Err(LoadError::new("horse", "Datei beschädigt")),
        },
    );

    match &commands[..] {
        [AppCommand::ReportLoadFailure { message }] => {
            assert!(message.starts_with("Error Loading Model"));
            assert!(message.contains("Datei beschädigt"));
        }
        other => panic!("Unerwartete Commands: {other:?}"),
    }
}

#[test]
fn mismatched_completion_is_dropped() {
    let commands = map_completion_to_commands(
        PendingLoad::Video,
        LoadCompletion {
            ticket: LoadTicket(3),
            result: Ok(LoadedAsset::Placeable(Placeable {
                primary: PrimaryRenderable {
                    model_ref: AssetId::new("box"),
                    collision_height: 0.3,
                },
                control: ControlRenderable::delete_button(),
            })),
        },
    );

    assert!(commands.is_empty());
}
