use crate::shared::ArOptions;

/// Anzeigedauer eines Hinweises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationDuration {
    /// Kurz eingeblendet
    Short,
    /// Länger eingeblendet
    Long,
}

/// Kurzzeitiger Hinweis an den Benutzer (Toast).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Anzuzeigender Text
    pub message: String,
    /// Anzeigedauer
    pub duration: NotificationDuration,
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Clone)]
pub struct UiState {
    /// Titel über der Modell-Liste, z.B. "Models (Horse)"
    pub models_title: String,
    /// Bottom-Sheet ausgeklappt
    pub bottom_sheet_expanded: bool,
    /// Peek-Höhe des eingeklappten Bottom-Sheets in dp
    pub bottom_sheet_peek_height_dp: f32,
    /// Listenzeilen, die neu gezeichnet werden müssen
    pub rows_to_redraw: Vec<usize>,
    /// Offene Hinweise (älteste zuerst)
    pub notifications: Vec<Notification>,
    /// Video-Auswahl des Systems ist offen
    pub video_picker_open: bool,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand.
    pub fn new(options: &ArOptions) -> Self {
        Self {
            models_title: String::from("Models"),
            bottom_sheet_expanded: false,
            bottom_sheet_peek_height_dp: options.bottom_sheet_peek_height_dp,
            rows_to_redraw: Vec::new(),
            notifications: Vec::new(),
            video_picker_open: false,
        }
    }

    /// Reiht einen Hinweis ein.
    pub fn notify(&mut self, message: impl Into<String>, duration: NotificationDuration) {
        let message = message.into();
        log::info!("Hinweis: {}", message);
        self.notifications.push(Notification { message, duration });
    }

    /// Entnimmt die neu zu zeichnenden Listenzeilen (einmal pro Frame).
    pub fn take_rows_to_redraw(&mut self) -> Vec<usize> {
        std::mem::take(&mut self.rows_to_redraw)
    }

    /// Text des zuletzt eingereihten Hinweises.
    pub fn last_notification(&self) -> Option<&str> {
        self.notifications.last().map(|n| n.message.as_str())
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(&ArOptions::default())
    }
}
