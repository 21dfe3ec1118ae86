//! Blocking browser dialogs
//!
//! The only error surface the app has: modal alert for rejections,
//! modal confirm gating destructive actions.

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// False when the window or the call is unavailable, so destructive
/// actions fail closed.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
