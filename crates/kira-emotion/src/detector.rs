//! Stateful wrapper around the classifier with change notification.

use crate::classifier::classify;
use kira_types::{EmotionState, InteractionState};
use tokio::sync::broadcast;
use tracing::debug;

/// Default capacity for the emotion broadcast channel.
const DEFAULT_EMOTION_BROADCAST_CAPACITY: usize = 16;

/// Owns the current emotion state and notifies subscribers on every
/// recomputation.
///
/// The detector recomputes wholesale on each call to [`update`] — no
/// debouncing, no history — and broadcasts the new state even when it equals
/// the previous one, matching the synchronous recompute-on-change contract.
///
/// [`update`]: EmotionDetector::update
#[derive(Debug)]
pub struct EmotionDetector {
    current: EmotionState,
    emotion_tx: broadcast::Sender<EmotionState>,
}

impl EmotionDetector {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(DEFAULT_EMOTION_BROADCAST_CAPACITY);
        Self {
            current: EmotionState::default(),
            emotion_tx: tx,
        }
    }

    /// Recomputes the emotion from the interaction snapshot, stores it, and
    /// notifies subscribers. Returns the new state.
    pub fn update(&mut self, state: &InteractionState) -> &EmotionState {
        let next = classify(
            &state.last_message_text,
            state.is_listening,
            state.is_speaking,
        );

        if next != self.current {
            debug!(
                emotion = %next.primary,
                confidence = next.confidence,
                "emotion changed"
            );
        }

        self.current = next;
        // Subscribers may come and go; a send with no receivers is fine.
        let _ = self.emotion_tx.send(self.current.clone());
        &self.current
    }

    /// The most recently computed emotion state.
    pub fn current(&self) -> &EmotionState {
        &self.current
    }

    /// Subscribes to emotion change notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<EmotionState> {
        self.emotion_tx.subscribe()
    }
}

impl Default for EmotionDetector {
    fn default() -> Self {
        Self::new()
    }
}
