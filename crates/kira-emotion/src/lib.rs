//! Emotion classification for the KIRA avatar.
//!
//! Maps the interaction snapshot (listening/speaking flags plus the last
//! message text) to a discrete [`EmotionState`](kira_types::EmotionState).
//! The classifier is a deliberately crude keyword heuristic — its priority
//! order and substrings are observable behavior and must not be "improved"
//! without changing the product.
//!
//! [`EmotionDetector`] wraps the classifier with the current state and a
//! broadcast channel so the shell and indicator widgets can react to
//! changes.

mod classifier;
mod detector;

pub use classifier::{classify, indicator_color, intensity_percent};
pub use detector::EmotionDetector;
