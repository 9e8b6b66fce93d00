use std::time::{Duration, Instant};

use ar_model_placer::host::loader::AssetTable;
use ar_model_placer::host::{DeferredLoader, ImmediateLoader, Renderable, ThreadedLoader};
use ar_model_placer::{
    AppController, AppIntent, AppMode, AppState, ArSceneHost, AssetLoader, NodeId,
    SimulatedScene, SurfaceHit,
};
use glam::Vec3;

fn placement_state() -> AppState {
    let mut state = AppState::new();
    state.mode = AppMode::ModelPlacement;
    state
}

fn hit(x: f32) -> SurfaceHit {
    SurfaceHit::new(Vec3::new(x, 0.0, -1.0), 1)
}

fn double_tap<H: ArSceneHost, L: AssetLoader>(
    controller: &mut AppController<H, L>,
    state: &mut AppState,
    base: Instant,
    hit: SurfaceHit,
) {
    for ms in [0, 400] {
        controller
            .handle_intent(
                state,
                AppIntent::SurfaceTapped {
                    hit,
                    at: base + Duration::from_millis(ms),
                },
            )
            .expect("Tipp sollte durchlaufen");
    }
}

#[test]
fn test_double_tap_places_selected_model() {
    let mut controller = AppController::new(
        SimulatedScene::new(),
        ImmediateLoader::new(AssetTable::strict().with_model("horse", 1.6)),
    );
    let mut state = placement_state();
    controller
        .handle_intent(&mut state, AppIntent::ModelRowClicked { index: 4 })
        .expect("Selektion sollte durchlaufen");

    double_tap(&mut controller, &mut state, Instant::now(), hit(0.0));
    assert_eq!(controller.poll_loads(&mut state).expect("poll"), 1);

    assert_eq!(state.placed_count(), 1);
    let id = state.placed.focused().expect("neues Modell ist fokussiert");
    let node = state.placed.get(id).expect("Node existiert");
    assert!(!node.aux_visible);
    match controller.host().renderable(node.model_node) {
        Some(Renderable::Model(model)) => assert_eq!(model.model_ref.as_str(), "horse"),
        other => panic!("Unerwartetes Renderable: {other:?}"),
    }
    assert_eq!(
        controller.host().world_position(node.aux_node),
        Vec3::new(0.0, 1.6, -1.0)
    );
}

#[test]
fn test_taps_beyond_window_place_nothing() {
    let mut controller = AppController::new(
        SimulatedScene::new(),
        ImmediateLoader::new(AssetTable::permissive()),
    );
    let mut state = placement_state();
    let base = Instant::now();

    for ms in [0, 1200, 2500] {
        controller
            .handle_intent(
                &mut state,
                AppIntent::SurfaceTapped {
                    hit: hit(0.0),
                    at: base + Duration::from_millis(ms),
                },
            )
            .expect("Tipp sollte durchlaufen");
    }
    controller.poll_loads(&mut state).expect("poll");

    assert_eq!(state.placed_count(), 0);
    assert!(state.loads.is_empty());
}

#[test]
fn test_taps_outside_placement_mode_are_ignored() {
    let mut controller = AppController::new(
        SimulatedScene::new(),
        ImmediateLoader::new(AssetTable::permissive()),
    );
    let mut state = AppState::new();

    double_tap(&mut controller, &mut state, Instant::now(), hit(0.0));
    controller.poll_loads(&mut state).expect("poll");

    assert_eq!(state.placed_count(), 0);
}

#[test]
fn test_load_failure_notifies_without_scene_change() {
    let mut controller = AppController::new(
        SimulatedScene::new(),
        ImmediateLoader::new(AssetTable::strict()),
    );
    let mut state = placement_state();

    double_tap(&mut controller, &mut state, Instant::now(), hit(0.0));
    controller.poll_loads(&mut state).expect("poll");

    assert_eq!(state.placed_count(), 0);
    assert_eq!(controller.host().live_anchor_count(), 0);
    let message = state.ui.last_notification().expect("Hinweis erwartet");
    assert!(message.starts_with("Error Loading Model"), "{message}");
}

#[test]
fn test_host_tap_on_model_node_toggles_its_control() {
    let mut controller = AppController::new(
        SimulatedScene::new(),
        ImmediateLoader::new(AssetTable::permissive()),
    );
    let mut state = placement_state();
    double_tap(&mut controller, &mut state, Instant::now(), hit(0.0));
    controller.poll_loads(&mut state).expect("poll");
    let id = state.placed.focused().expect("Modell platziert");
    let node = state.placed.get(id).cloned().expect("Node existiert");

    controller
        .handle_intent(
            &mut state,
            AppIntent::ModelNodeTapped {
                node: node.model_node,
            },
        )
        .expect("Tipp auf Modell-Node");
    assert!(state.placed.get(id).expect("Node existiert").aux_visible);

    controller
        .handle_intent(&mut state, AppIntent::ControlClicked { node_id: id })
        .expect("Entfernen");
    // Node gehört zu keinem Modell mehr; Tipp bleibt folgenlos
    controller
        .handle_intent(
            &mut state,
            AppIntent::ModelNodeTapped {
                node: node.model_node,
            },
        )
        .expect("Tipp auf entfernten Node");
    assert_eq!(state.placed_count(), 0);
    assert!(state.ui.notifications.is_empty());
}

#[test]
fn test_toggle_remove_and_double_click_on_delete() {
    let mut controller = AppController::new(
        SimulatedScene::new(),
        ImmediateLoader::new(AssetTable::permissive()),
    );
    let mut state = placement_state();
    double_tap(&mut controller, &mut state, Instant::now(), hit(0.0));
    controller.poll_loads(&mut state).expect("poll");
    let id = state.placed.focused().expect("Modell platziert");
    let node = state.placed.get(id).cloned().expect("Node existiert");

    controller
        .handle_intent(&mut state, AppIntent::PlacedModelTapped { node_id: id })
        .expect("Tipp aufs Modell");
    assert!(matches!(
        controller.host().renderable(node.aux_node),
        Some(Renderable::Control(_))
    ));

    for _ in 0..2 {
        controller
            .handle_intent(&mut state, AppIntent::ControlClicked { node_id: id })
            .expect("Doppelklick auf Delete ist kein Fehler");
    }

    assert_eq!(state.placed_count(), 0);
    assert_eq!(controller.host().anchor_destroy_count(node.anchor), 1);
    assert_eq!(controller.host().node_destroy_count(node.model_node), 1);
    assert!(state.ui.notifications.is_empty());
}

#[test]
fn test_tap_ending_transform_does_not_toggle_control() {
    let mut controller = AppController::new(
        SimulatedScene::new(),
        ImmediateLoader::new(AssetTable::permissive()),
    );
    let mut state = placement_state();
    double_tap(&mut controller, &mut state, Instant::now(), hit(0.0));
    controller.poll_loads(&mut state).expect("poll");
    let id = state.placed.focused().expect("Modell platziert");

    controller
        .handle_intent(&mut state, AppIntent::TransformStarted { node_id: id })
        .expect("Transform-Start");
    controller
        .handle_intent(&mut state, AppIntent::PlacedModelTapped { node_id: id })
        .expect("Tipp aufs Modell");
    assert!(!state.placed.get(id).expect("Node existiert").aux_visible);

    controller
        .handle_intent(&mut state, AppIntent::TransformEnded { node_id: id })
        .expect("Transform-Ende");
    controller
        .handle_intent(&mut state, AppIntent::PlacedModelTapped { node_id: id })
        .expect("Tipp aufs Modell");
    assert!(state.placed.get(id).expect("Node existiert").aux_visible);
}

#[test]
fn test_scene_update_turns_visible_controls_to_camera() {
    let mut controller = AppController::new(
        SimulatedScene::new(),
        ImmediateLoader::new(AssetTable::permissive().with_model("astronaut", 1.0)),
    );
    let mut state = placement_state();
    double_tap(&mut controller, &mut state, Instant::now(), hit(2.0));
    controller.poll_loads(&mut state).expect("poll");
    let id = state.placed.focused().expect("Modell platziert");
    controller
        .handle_intent(&mut state, AppIntent::PlacedModelTapped { node_id: id })
        .expect("Tipp aufs Modell");

    // Bedienelement sitzt bei (2, 1, -1); Kamera direkt links davon
    controller
        .host_mut()
        .set_camera_position(Vec3::new(-3.0, 1.0, -1.0));
    controller
        .handle_intent(&mut state, AppIntent::SceneUpdated)
        .expect("Szenen-Update");

    let aux = state.placed.get(id).expect("Node existiert").aux_node;
    let rotation = controller
        .host()
        .node(aux)
        .map(|n| n.world_rotation)
        .expect("Node lebt");
    let facing = rotation * Vec3::Z;
    assert!((facing - Vec3::NEG_X).length() < 1e-5, "{facing:?}");
}

#[test]
fn test_stale_load_still_places_node() {
    let mut controller = AppController::new(
        SimulatedScene::new(),
        DeferredLoader::new(AssetTable::permissive()),
    );
    let mut state = placement_state();
    let base = Instant::now();

    double_tap(&mut controller, &mut state, base, hit(0.0));
    double_tap(&mut controller, &mut state, base + Duration::from_secs(5), hit(1.0));
    assert_eq!(controller.loader_mut().pending_count(), 2);
    assert_eq!(state.loads.len(), 2);

    // zweite Anfrage zuerst fertig; die erste kommt später trotzdem an
    let tickets = controller.loader_mut().pending_tickets();
    assert!(controller.loader_mut().resolve(tickets[1]));
    controller.poll_loads(&mut state).expect("poll");
    assert_eq!(state.placed_count(), 1);

    controller
        .handle_intent(&mut state, AppIntent::BackRequested)
        .expect("Zurück");
    assert_eq!(state.placed_count(), 0);

    assert!(controller.loader_mut().resolve(tickets[0]));
    controller.poll_loads(&mut state).expect("poll");
    assert_eq!(state.placed_count(), 1);
    assert!(state.loads.is_empty());
}

#[test]
fn test_node_ids_are_unique_across_removals() {
    let mut controller = AppController::new(
        SimulatedScene::new(),
        ImmediateLoader::new(AssetTable::permissive()),
    );
    let mut state = placement_state();
    let base = Instant::now();
    let mut seen: Vec<NodeId> = Vec::new();

    for round in 0..3u64 {
        double_tap(
            &mut controller,
            &mut state,
            base + Duration::from_secs(5 * round),
            hit(round as f32),
        );
        controller.poll_loads(&mut state).expect("poll");
        let id = state.placed.focused().expect("Modell platziert");
        assert!(!seen.contains(&id));
        seen.push(id);
        controller
            .handle_intent(&mut state, AppIntent::ControlClicked { node_id: id })
            .expect("Entfernen");
    }
}

#[test]
fn test_threaded_loader_completes_on_controller_thread() {
    let mut controller = AppController::new(
        SimulatedScene::new(),
        ThreadedLoader::new(AssetTable::permissive(), Duration::from_millis(1)),
    );
    let mut state = placement_state();
    double_tap(&mut controller, &mut state, Instant::now(), hit(0.0));

    let deadline = Instant::now() + Duration::from_secs(5);
    while !state.loads.is_empty() && Instant::now() < deadline {
        controller.poll_loads(&mut state).expect("poll");
        std::thread::sleep(Duration::from_millis(2));
    }

    assert_eq!(state.placed_count(), 1);
}
