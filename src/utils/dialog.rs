use web_sys::window;

/// Blocking acknowledgment dialog.
pub fn alert(message: &str) {
    if let Some(win) = window() {
        let _ = win.alert_with_message(message);
    }
}

/// Blocking yes/no prompt. Answers "no" when the window is unavailable.
pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}
