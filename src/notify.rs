//! User notifications
//!
//! Currently a console-backed stub.
// TODO: render toast elements once the dashboard grows a notification area

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationLevel {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationLevel {
    /// Uppercase tag used in the console line
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationLevel::Info => "INFO",
            NotificationLevel::Success => "SUCCESS",
            NotificationLevel::Warning => "WARNING",
            NotificationLevel::Error => "ERROR",
        }
    }

    /// Parse a level name, defaulting to `Info` on anything unknown
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "success" => NotificationLevel::Success,
            "warning" => NotificationLevel::Warning,
            "error" => NotificationLevel::Error,
            _ => NotificationLevel::Info,
        }
    }
}

/// Show a notification to the user
///
/// Logs `[LEVEL] message` through the level-appropriate console method.
pub fn show_notification(message: &str, level: NotificationLevel) {
    let line = format_line(message, level);

    #[cfg(target_arch = "wasm32")]
    {
        let value = wasm_bindgen::JsValue::from_str(&line);
        match level {
            NotificationLevel::Error => web_sys::console::error_1(&value),
            NotificationLevel::Warning => web_sys::console::warn_1(&value),
            _ => web_sys::console::log_1(&value),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("{line}");
}

fn format_line(message: &str, level: NotificationLevel) -> String {
    format!("[{}] {}", level.as_str(), message)
}
