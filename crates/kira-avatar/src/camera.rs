//! Edge-triggered camera framing.

use kira_types::Vec3;
use serde::{Deserialize, Serialize};

/// A fixed camera preset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub position: Vec3,
}

impl CameraPose {
    /// Closer framing while listening.
    pub const LISTENING: Self = Self {
        position: Vec3::new(0.0, 1.0, 6.0),
    };
    /// Slight angle while speaking.
    pub const SPEAKING: Self = Self {
        position: Vec3::new(1.0, 2.0, 7.0),
    };
    /// Default resting framing.
    pub const IDLE: Self = Self {
        position: Vec3::new(0.0, 2.0, 8.0),
    };

    /// The preset for a pair of interaction flags. Listening is checked
    /// before speaking — the opposite of the emotion classifier; the
    /// asymmetry is deliberate.
    pub fn for_state(is_listening: bool, is_speaking: bool) -> Self {
        if is_listening {
            Self::LISTENING
        } else if is_speaking {
            Self::SPEAKING
        } else {
            Self::IDLE
        }
    }
}

/// Tracks the interaction flags and emits a pose only on transitions.
///
/// Repeated calls with unchanged flags return `None`; no extra pose change
/// events fire.
#[derive(Debug, Default)]
pub struct CameraController {
    last: Option<(bool, bool)>,
}

impl CameraController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the new pose when either flag changed value, `None`
    /// otherwise. The first call always fires.
    pub fn on_state_change(&mut self, is_listening: bool, is_speaking: bool) -> Option<CameraPose> {
        let flags = (is_listening, is_speaking);
        if self.last == Some(flags) {
            return None;
        }
        self.last = Some(flags);
        Some(CameraPose::for_state(is_listening, is_speaking))
    }
}
