use tauri::{AppHandle, Emitter};

/// Event channel the frontend listens on. Payloads are full status lines,
/// each one replacing the previous in the UI.
pub const LOG_EVENT: &str = "launcher-log";

/// Sink for user-facing progress lines.
///
/// Emission is best-effort; a failed emit never aborts a launch. Every
/// line is mirrored into the file log.
#[derive(Clone)]
pub struct Progress {
    app: AppHandle,
}

impl Progress {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }

    pub fn line(&self, message: impl Into<String>) {
        let message = message.into();
        log::info!("{message}");
        let _ = self.app.emit(LOG_EVENT, message);
    }
}
