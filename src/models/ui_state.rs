use leptos::prelude::*;

/// Frontend-only reactive state shared by all pages via `use_context()`.
#[derive(Clone, Copy)]
pub struct UiState {
    /// Active notification (if any)
    pub notification: RwSignal<Option<String>>,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            notification: RwSignal::new(None),
        }
    }

    /// Show a notification (auto-dismiss is handled by `NotificationBar`)
    pub fn show_notification(&self, message: impl Into<String>) {
        self.notification.set(Some(message.into()));
    }

    pub fn clear_notification(&self) {
        self.notification.set(None);
    }

    /// Log a failure to the console and surface it in the notification bar.
    pub fn report(&self, context: &str, error: &impl std::fmt::Display) {
        let message = format!("{context}: {error}");
        web_sys::console::error_1(&message.clone().into());
        self.show_notification(message);
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
