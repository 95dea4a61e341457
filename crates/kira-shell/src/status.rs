//! Presentational status strings for the host UI.

/// Compact status badge text.
pub fn status_line(is_listening: bool, is_speaking: bool) -> &'static str {
    if is_listening {
        "Listening..."
    } else if is_speaking {
        "Speaking..."
    } else {
        "Ready"
    }
}

/// Caption shown under the detailed avatar.
pub fn avatar_caption(is_listening: bool, is_speaking: bool) -> &'static str {
    if is_listening {
        "Listening..."
    } else if is_speaking {
        "Speaking..."
    } else {
        "Ready to help"
    }
}

/// Audio level as an integer percent string, e.g. "42%".
pub fn audio_percent(level: f32) -> String {
    format!("{}%", (level * 100.0).round() as i32)
}

/// Connection badge label.
pub fn connection_label(connected: bool) -> &'static str {
    if connected {
        "Connected"
    } else {
        "Disconnected"
    }
}
