//! Application-Layer: Controller, State, Events und Handler.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod load_queue;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Modus, Katalog, Szene, UI).
pub mod state;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use intent_mapping::VIDEO_LOAD_FAILED;
pub use load_queue::{LoadQueue, PendingLoad};
pub use state::{AppMode, AppState, Notification, NotificationDuration, UiState};
