//! AR Model Placer — Demo-Session.
//!
//! Spielt eine kurze Benutzer-Session gegen die simulierte AR-Szene ab:
//! Modell wählen, per Doppeltipp platzieren, Bedienelement einblenden,
//! zur Kamera drehen und wieder löschen. Danach folgt der Video-Modus.

use std::time::{Duration, Instant};

use ar_model_placer::core::{load_catalog_from_file, DeviceCapabilities, NodeId};
use ar_model_placer::host::loader::AssetTable;
use ar_model_placer::host::ThreadedLoader;
use ar_model_placer::{AppController, AppIntent, AppState, ArOptions, SimulatedScene, SurfaceHit};
use glam::Vec3;

type DemoController = AppController<SimulatedScene, ThreadedLoader>;

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("AR Model Placer v{} startet...", env!("CARGO_PKG_VERSION"));

    let options = ArOptions::load_from_file(&ArOptions::config_path());
    let catalog_path = ArOptions::config_path().with_file_name("ar_model_catalog.toml");
    let mut state = AppState::with_catalog(load_catalog_from_file(&catalog_path), options)?;

    let table = AssetTable::permissive()
        .with_model("astronaut", 1.8)
        .with_model("horse", 1.6);
    let mut controller = AppController::new(
        SimulatedScene::new(),
        ThreadedLoader::new(table, Duration::from_millis(20)),
    );

    if let Err(e) = run_session(&mut controller, &mut state) {
        log::error!("Session abgebrochen: {:#}", e);
        return Err(e);
    }

    log::info!(
        "Session beendet: {} Commands, {} Modelle in der Szene",
        state.command_log.len(),
        state.placed_count()
    );
    Ok(())
}

fn run_session(controller: &mut DemoController, state: &mut AppState) -> anyhow::Result<()> {
    controller.handle_intent(
        state,
        AppIntent::DeviceCapabilitiesReported {
            caps: DeviceCapabilities {
                sdk_level: 30,
                gl_es_version: "3.2".to_string(),
            },
        },
    )?;
    controller.handle_intent(state, AppIntent::ModelPlacementChosen)?;
    controller.handle_intent(state, AppIntent::ModelRowClicked { index: 4 })?;
    log::info!("{}", state.ui.models_title);

    let start = Instant::now();
    let hit = SurfaceHit::new(Vec3::new(0.0, 0.0, -1.5), 1);
    for offset_ms in [0, 300] {
        controller.handle_intent(
            state,
            AppIntent::SurfaceTapped {
                hit,
                at: start + Duration::from_millis(offset_ms),
            },
        )?;
    }
    wait_for_loads(controller, state)?;

    let Some(node_id) = state.placed.focused() else {
        anyhow::bail!("Doppeltipp hat kein Modell platziert");
    };
    controller.handle_intent(state, AppIntent::PlacedModelTapped { node_id })?;

    controller
        .host_mut()
        .set_camera_position(Vec3::new(0.5, 1.6, 0.5));
    controller.handle_intent(state, AppIntent::SceneUpdated)?;
    log_control_rotation(controller, state, node_id);

    controller.handle_intent(state, AppIntent::ControlClicked { node_id })?;
    // zweiter Klick auf denselben Button bleibt folgenlos
    controller.handle_intent(state, AppIntent::ControlClicked { node_id })?;

    controller.handle_intent(state, AppIntent::BackRequested)?;
    controller.handle_intent(state, AppIntent::ChromaVideoChosen)?;
    controller.handle_intent(
        state,
        AppIntent::VideoPicked {
            uri: Some("content://media/external/video/42".to_string()),
            dimensions: Some((1920, 1080)),
        },
    )?;
    wait_for_loads(controller, state)?;
    controller.handle_intent(
        state,
        AppIntent::SurfaceTapped {
            hit: SurfaceHit::new(Vec3::new(0.0, 0.0, -2.0), 2),
            at: Instant::now(),
        },
    )?;
    controller.handle_intent(state, AppIntent::VideoFrameAvailable)?;
    if let Some(video) = state.video.as_ref() {
        log::info!(
            "{} Video-Quad(s) platziert, Wiedergabe: {}",
            video.placed.len(),
            video.playing
        );
    }

    for notification in &state.ui.notifications {
        log::warn!("Offener Hinweis: {}", notification.message);
    }
    controller.handle_intent(state, AppIntent::BackRequested)?;
    controller.handle_intent(state, AppIntent::ExitRequested)?;
    Ok(())
}

fn wait_for_loads(controller: &mut DemoController, state: &mut AppState) -> anyhow::Result<()> {
    let deadline = Instant::now() + Duration::from_secs(5);
    while !state.loads.is_empty() {
        if Instant::now() > deadline {
            anyhow::bail!("Ladevorgänge nicht rechtzeitig abgeschlossen");
        }
        controller.poll_loads(state)?;
        std::thread::sleep(Duration::from_millis(5));
    }
    Ok(())
}

fn log_control_rotation(controller: &DemoController, state: &AppState, node_id: NodeId) {
    let rotation = state
        .placed
        .get(node_id)
        .and_then(|n| controller.host().node(n.aux_node))
        .map(|n| n.world_rotation);
    if let Some(rotation) = rotation {
        log::info!("Bedienelement {} zeigt nach {:?}", node_id, rotation * Vec3::Z);
    }
}
