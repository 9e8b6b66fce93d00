//! AR Model Placer Library.
//! Interaktions-Kern als Library exportiert für Tests, Benchmarks und Hosts.

pub mod app;
pub mod core;
pub mod host;
pub mod shared;

pub use app::{AppCommand, AppController, AppIntent, AppMode, AppState, UiState};
pub use core::{
    AssetId, DeviceCapabilities, GestureClassifier, ModelEntry, NodeId, SceneNodeRegistry,
    SelectionList, TapOutcome,
};
pub use host::{ArSceneHost, AssetLoader, SimulatedScene, SurfaceHit};
pub use shared::ArOptions;
