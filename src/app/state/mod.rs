//! Application State — zentrale Datenhaltung.

mod app_state;
mod ui;

pub use app_state::{AppMode, AppState};
pub use ui::{Notification, NotificationDuration, UiState};
