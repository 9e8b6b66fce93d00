//! Handler für Modus-Wechsel, Geräte-Check und Anwendungssteuerung.

use super::{video, HandlerContext};
use crate::app::state::{AppMode, NotificationDuration};
use crate::app::AppState;
use crate::core::{check_device_supported, DeviceCapabilities};
use crate::shared::ArOptions;

/// Hinweistext, wenn ein AR-Modus auf einem ungeeigneten Gerät gewählt wird.
pub const AR_UNSUPPORTED: &str = "AR is not supported on this device";

/// Führt den einmaligen Geräte-Check aus.
pub fn check_device(state: &mut AppState, ctx: &mut HandlerContext, caps: DeviceCapabilities) {
    match check_device_supported(&caps, &state.options) {
        Ok(()) => {
            state.device_supported = Some(true);
            log::info!(
                "Gerät unterstützt (API {}, OpenGL ES {})",
                caps.sdk_level,
                caps.gl_es_version
            );
        }
        Err(e) => {
            log::error!("{}", e);
            state.device_supported = Some(false);
            state.ui.notify(e.to_string(), NotificationDuration::Long);
            if state.mode.needs_ar() {
                leave_current_mode(state, ctx);
                state.mode = AppMode::Choice;
            }
        }
    }
}

/// Wechselt den Screen und räumt den vorherigen Modus auf.
pub fn enter_mode(state: &mut AppState, ctx: &mut HandlerContext, mode: AppMode) {
    if mode == state.mode {
        log::debug!("Modus {:?} bereits aktiv", mode);
        return;
    }
    if mode.needs_ar() && !state.ar_allowed() {
        log::warn!("Modus {:?} blockiert: Gerät nicht unterstützt", mode);
        state.ui.notify(AR_UNSUPPORTED, NotificationDuration::Long);
        return;
    }

    leave_current_mode(state, ctx);
    state.mode = mode;
    // Der Video-Modus beginnt direkt mit der Videoauswahl
    state.ui.video_picker_open = mode == AppMode::ChromaVideo;
    log::info!("Modus gewechselt: {:?}", mode);
}

fn leave_current_mode(state: &mut AppState, ctx: &mut HandlerContext) {
    state.placed.clear(ctx.host);
    video::release(state, ctx);
    state.gesture.reset();
    state.ui.video_picker_open = false;
}

/// Markiert die Anwendung zum Beenden.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Übernimmt neue Optionen; das Doppeltipp-Fenster gilt sofort.
pub fn apply_options(state: &mut AppState, options: ArOptions) {
    state.gesture.set_window(options.double_tap_window());
    state.ui.bottom_sheet_peek_height_dp = options.bottom_sheet_peek_height_dp;
    state.options = options;
    log::info!("Optionen übernommen");
}

/// Verwirft alle angezeigten Hinweise.
pub fn dismiss_notifications(state: &mut AppState) {
    state.ui.notifications.clear();
}

/// Zeigt einen Ladefehler an. Die Szene bleibt unverändert.
pub fn report_load_failure(state: &mut AppState, message: String) {
    log::warn!("{}", message);
    state.ui.notify(message, NotificationDuration::Short);
}
