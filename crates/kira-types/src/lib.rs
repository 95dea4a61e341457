//! Shared types for the KIRA avatar engine.
//!
//! This crate provides the foundational types used across all KIRA crates:
//! the interaction snapshot supplied by the application shell, the derived
//! emotion classification, chat messages, and the small math types consumed
//! by the animation layer.
//!
//! No crate in the workspace depends on anything *except* `kira-types` for
//! cross-cutting type definitions. This keeps the dependency graph clean and
//! prevents circular dependencies.

use serde::{Deserialize, Serialize};

mod math;
mod message;

pub use math::{Vec2, Vec3};
pub use message::Message;

/// The externally supplied snapshot of the interaction.
///
/// Produced by the surrounding application (microphone state, speech
/// pipeline, chat input) and read-only to the engine. Changes asynchronously
/// and arbitrarily often; the classifier recomputes wholesale on every
/// change and the animation driver samples it every frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InteractionState {
    /// The microphone is open and the assistant is capturing speech.
    pub is_listening: bool,
    /// The assistant is producing a response (driven by the host's
    /// processing flag).
    pub is_speaking: bool,
    /// Normalized input amplitude in `[0, 1]`.
    pub audio_level: f32,
    /// Text of the most recent chat message, or empty when none exists.
    pub last_message_text: String,
}

/// Discrete emotion classification driving color and text indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    /// Resting state; nothing notable detected.
    #[default]
    Neutral,
    /// A greeting was detected in the last message.
    Happy,
    /// The last message looks like a query that needs processing.
    Thinking,
    /// The assistant is currently responding.
    Speaking,
    /// Positive feedback was detected.
    Excited,
    /// The assistant is listening attentively.
    Focused,
}

impl Emotion {
    /// Returns the canonical lowercase string for this emotion.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Happy => "happy",
            Self::Thinking => "thinking",
            Self::Speaking => "speaking",
            Self::Excited => "excited",
            Self::Focused => "focused",
        }
    }

    /// Returns the capitalized display label (e.g. "Happy").
    pub fn label(self) -> &'static str {
        match self {
            Self::Neutral => "Neutral",
            Self::Happy => "Happy",
            Self::Thinking => "Thinking",
            Self::Speaking => "Speaking",
            Self::Excited => "Excited",
            Self::Focused => "Focused",
        }
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Emotion {
    type Err = ParseEmotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "neutral" => Ok(Self::Neutral),
            "happy" => Ok(Self::Happy),
            "thinking" => Ok(Self::Thinking),
            "speaking" => Ok(Self::Speaking),
            "excited" => Ok(Self::Excited),
            "focused" => Ok(Self::Focused),
            _ => Err(ParseEmotionError(s.to_string())),
        }
    }
}

/// Error returned when parsing an unknown emotion string.
#[derive(Debug, Clone)]
pub struct ParseEmotionError(pub String);

impl std::fmt::Display for ParseEmotionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown emotion: {}", self.0)
    }
}

impl std::error::Error for ParseEmotionError {}

/// The derived emotion classification with confidence and context.
///
/// Recomputed wholesale from an [`InteractionState`] on every change; no
/// incremental update and no history. `confidence` is always in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionState {
    /// The dominant emotion.
    pub primary: Emotion,
    /// Classifier confidence in `[0, 1]`.
    pub confidence: f32,
    /// Human-readable context line (e.g. "Listening carefully").
    pub context: String,
}

impl EmotionState {
    pub fn new(primary: Emotion, confidence: f32, context: impl Into<String>) -> Self {
        Self {
            primary,
            confidence,
            context: context.into(),
        }
    }
}

impl Default for EmotionState {
    /// The resting state shown before any interaction has happened.
    fn default() -> Self {
        Self::new(Emotion::Neutral, 0.8, "Ready to help")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    const ALL_EMOTIONS: [Emotion; 6] = [
        Emotion::Neutral,
        Emotion::Happy,
        Emotion::Thinking,
        Emotion::Speaking,
        Emotion::Excited,
        Emotion::Focused,
    ];

    #[test]
    fn emotion_round_trip() {
        for emotion in ALL_EMOTIONS {
            let s = emotion.as_str();
            assert_eq!(Emotion::from_str(s).unwrap(), emotion);
        }
    }

    #[test]
    fn emotion_parse_invalid() {
        assert!(Emotion::from_str("angry").is_err());
        assert!(Emotion::from_str("Happy").is_err());
        assert!(Emotion::from_str("").is_err());
    }

    #[test]
    fn emotion_serde_uses_lowercase() {
        let json = serde_json::to_string(&Emotion::Focused).unwrap();
        assert_eq!(json, "\"focused\"");
        let back: Emotion = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Emotion::Focused);
    }

    #[test]
    fn interaction_state_serde_round_trip() {
        let state = InteractionState {
            is_listening: true,
            is_speaking: false,
            audio_level: 0.42,
            last_message_text: "Hello there".to_string(),
        };
        let json = serde_json::to_string(&state).unwrap();
        let back: InteractionState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn default_emotion_state_is_resting() {
        let state = EmotionState::default();
        assert_eq!(state.primary, Emotion::Neutral);
        assert_eq!(state.context, "Ready to help");
    }
}
