use ar_model_placer::app::NotificationDuration;
use ar_model_placer::host::loader::AssetTable;
use ar_model_placer::host::ImmediateLoader;
use ar_model_placer::{
    AppController, AppIntent, AppMode, AppState, ArOptions, DeviceCapabilities, SimulatedScene,
};

fn controller() -> AppController<SimulatedScene, ImmediateLoader> {
    AppController::new(
        SimulatedScene::new(),
        ImmediateLoader::new(AssetTable::permissive()),
    )
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = controller();
    let mut state = AppState::new();

    assert!(!state.should_exit);

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");

    assert!(
        last.contains("RequestExit"),
        "Unerwarteter letzter Command: {last}"
    );
}

#[test]
fn test_initial_title_shows_default_selection() {
    let state = AppState::new();

    assert_eq!(state.ui.models_title, "Models (Astronaut)");
    assert_eq!(state.catalog.current_index(), 0);
}

#[test]
fn test_row_click_updates_title_and_redraws_both_rows() {
    let mut controller = controller();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::ModelRowClicked { index: 3 })
        .expect("ModelRowClicked sollte durchlaufen");

    assert_eq!(state.catalog.current_index(), 3);
    assert_eq!(state.ui.models_title, "Models (Helmet)");
    assert_eq!(state.ui.rows_to_redraw, vec![0, 3]);
}

#[test]
fn test_rows_to_redraw_are_drained_and_cleared_on_repeat() {
    let mut controller = controller();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::ModelRowClicked { index: 3 })
        .expect("ModelRowClicked sollte durchlaufen");
    assert_eq!(state.ui.take_rows_to_redraw(), vec![0, 3]);
    assert!(state.ui.rows_to_redraw.is_empty());

    controller
        .handle_intent(&mut state, AppIntent::ModelRowClicked { index: 5 })
        .expect("ModelRowClicked sollte durchlaufen");
    controller
        .handle_intent(&mut state, AppIntent::ModelRowClicked { index: 5 })
        .expect("ModelRowClicked sollte durchlaufen");
    controller
        .handle_intent(&mut state, AppIntent::BottomSheetToggled)
        .expect("Toggle sollte durchlaufen");

    assert!(state.ui.rows_to_redraw.is_empty());
    assert_eq!(state.ui.models_title, "Models (Lalten)");
}

#[test]
fn test_same_row_click_twice_emits_once() {
    let mut controller = controller();
    let mut state = AppState::new();
    let observer = state.catalog.observe();
    // Initialwert verwerfen
    assert!(observer.try_recv().is_ok());

    for _ in 0..2 {
        controller
            .handle_intent(&mut state, AppIntent::ModelRowClicked { index: 3 })
            .expect("ModelRowClicked sollte durchlaufen");
    }

    let emitted: Vec<_> = observer.try_iter().collect();
    assert_eq!(emitted.len(), 1);
    assert_eq!(emitted[0].display_label, "Helmet");
}

#[test]
fn test_unsupported_device_blocks_ar_modes() {
    let mut controller = controller();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::DeviceCapabilitiesReported {
                caps: DeviceCapabilities {
                    sdk_level: 21,
                    gl_es_version: "3.0".into(),
                },
            },
        )
        .expect("Geräte-Check sollte durchlaufen");
    assert_eq!(state.device_supported, Some(false));
    assert_eq!(state.ui.notifications.len(), 1);
    assert_eq!(
        state.ui.notifications[0].duration,
        NotificationDuration::Long
    );

    controller
        .handle_intent(&mut state, AppIntent::ModelPlacementChosen)
        .expect("Moduswahl sollte durchlaufen");
    assert_eq!(state.mode, AppMode::Choice);
    assert_eq!(state.ui.notifications.len(), 2);
}

#[test]
fn test_supported_device_allows_mode_switching() {
    let mut controller = controller();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::DeviceCapabilitiesReported {
                caps: DeviceCapabilities {
                    sdk_level: 33,
                    gl_es_version: "3.2".into(),
                },
            },
        )
        .expect("Geräte-Check sollte durchlaufen");
    controller
        .handle_intent(&mut state, AppIntent::ChromaVideoChosen)
        .expect("Moduswahl sollte durchlaufen");

    assert_eq!(state.mode, AppMode::ChromaVideo);
    assert!(state.ui.video_picker_open);

    controller
        .handle_intent(&mut state, AppIntent::BackRequested)
        .expect("Zurück sollte durchlaufen");
    assert_eq!(state.mode, AppMode::Choice);
    assert!(!state.ui.video_picker_open);
    assert!(!state.should_exit);
}

#[test]
fn test_options_change_applies_new_double_tap_window() {
    let mut controller = controller();
    let mut state = AppState::new();
    let options = ArOptions {
        double_tap_window_ms: 300,
        bottom_sheet_peek_height_dp: 72.0,
        ..ArOptions::default()
    };

    controller
        .handle_intent(&mut state, AppIntent::OptionsChanged { options })
        .expect("Optionen sollten übernommen werden");

    assert_eq!(state.gesture.window().as_millis(), 300);
    assert_eq!(state.ui.bottom_sheet_peek_height_dp, 72.0);
    assert_eq!(state.options.double_tap_window_ms, 300);
}

#[test]
fn test_bottom_sheet_toggle_and_notification_dismiss() {
    let mut controller = controller();
    let mut state = AppState::new();
    state.ui.notify("Hinweis", NotificationDuration::Short);

    controller
        .handle_intent(&mut state, AppIntent::BottomSheetToggled)
        .expect("Toggle sollte durchlaufen");
    assert!(state.ui.bottom_sheet_expanded);

    controller
        .handle_intent(&mut state, AppIntent::NotificationsDismissed)
        .expect("Dismiss sollte durchlaufen");
    assert!(state.ui.notifications.is_empty());
}
