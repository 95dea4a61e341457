//! Wire types and display helpers for the backend contracts.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Response of the backend health check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall backend status, e.g. "healthy".
    pub status: String,
    /// Per-service availability, keyed by service id.
    #[serde(default)]
    pub services: BTreeMap<String, bool>,
}

impl HealthResponse {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Response of a chat message send.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// The assistant's reply text.
    pub response: String,
    /// Backend confidence in `[0, 1]`.
    pub confidence: f32,
}

/// Human-readable name for a backend service id. Unknown ids pass through.
pub fn service_display_name(service: &str) -> &str {
    match service {
        "gemini" => "Google Gemini AI",
        "livekit" => "LiveKit Audio",
        "opencv" => "Computer Vision",
        "ml_models" => "ML Models",
        other => other,
    }
}

/// Status badge label for a single service.
pub fn service_status_label(up: bool) -> &'static str {
    if up {
        "Online"
    } else {
        "Offline"
    }
}
