//! The keyword-heuristic emotion classifier.

use kira_types::{Emotion, EmotionState};

/// Classifies the interaction into an emotion state.
///
/// Total function: always produces a result, defaulting to `Neutral`.
/// Priority order, first match wins (substring checks are case-insensitive):
///
/// 1. speaking
/// 2. listening
/// 3. greeting keywords ("hello", "hi")
/// 4. query keywords ("explain", "what")
/// 5. positive-feedback keywords ("amazing", "great")
/// 6. neutral fallback
///
/// When both flags are set, speaking wins. The camera controller resolves
/// the same ambiguity the other way round; the asymmetry is intentional.
pub fn classify(last_message_text: &str, is_listening: bool, is_speaking: bool) -> EmotionState {
    let text = last_message_text.to_lowercase();

    if is_speaking {
        EmotionState::new(Emotion::Speaking, 0.9, "Responding to your question")
    } else if is_listening {
        EmotionState::new(Emotion::Focused, 0.85, "Listening carefully")
    } else if text.contains("hello") || text.contains("hi") {
        EmotionState::new(Emotion::Happy, 0.9, "Greeting detected")
    } else if text.contains("explain") || text.contains("what") {
        EmotionState::new(Emotion::Thinking, 0.8, "Processing complex query")
    } else if text.contains("amazing") || text.contains("great") {
        EmotionState::new(Emotion::Excited, 0.85, "Positive feedback received")
    } else {
        EmotionState::new(Emotion::Neutral, 0.7, "Ready to assist")
    }
}

/// Indicator color (hex) for the emotion badge.
pub fn indicator_color(emotion: Emotion) -> &'static str {
    match emotion {
        Emotion::Happy => "#22c55e",
        Emotion::Thinking => "#eab308",
        Emotion::Speaking => "#3b82f6",
        Emotion::Excited => "#a855f7",
        Emotion::Focused => "#f97316",
        Emotion::Neutral => "#6b7280",
    }
}

/// Confidence as an integer percent for the intensity bar.
pub fn intensity_percent(confidence: f32) -> u8 {
    (confidence * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speaking_always_wins() {
        // Regardless of other fields, speaking yields Speaking/0.90.
        for (listening, text) in [(false, ""), (true, "hello"), (true, "what is this")] {
            let state = classify(text, listening, true);
            assert_eq!(state.primary, Emotion::Speaking);
            assert_eq!(state.confidence, 0.9);
            assert_eq!(state.context, "Responding to your question");
        }
    }

    #[test]
    fn listening_without_speaking_is_focused() {
        for text in ["", "hello", "amazing work"] {
            let state = classify(text, true, false);
            assert_eq!(state.primary, Emotion::Focused);
            assert_eq!(state.confidence, 0.85);
        }
    }

    #[test]
    fn greeting_detected() {
        let state = classify("Hello there", false, false);
        assert_eq!(state.primary, Emotion::Happy);
        assert_eq!(state.confidence, 0.9);
        assert_eq!(state.context, "Greeting detected");
    }

    #[test]
    fn greeting_is_case_insensitive() {
        assert_eq!(classify("HI KIRA", false, false).primary, Emotion::Happy);
    }

    #[test]
    fn query_keywords_match_before_feedback() {
        // "what" matches at priority 4 even though the text is also positive.
        let state = classify("What is explain-ability", false, false);
        assert_eq!(state.primary, Emotion::Thinking);
        assert_eq!(state.confidence, 0.8);

        let state = classify("what a great idea", false, false);
        assert_eq!(state.primary, Emotion::Thinking);
    }

    #[test]
    fn positive_feedback_detected() {
        let state = classify("that was amazing", false, false);
        assert_eq!(state.primary, Emotion::Excited);
        assert_eq!(state.confidence, 0.85);
    }

    #[test]
    fn neutral_fallback() {
        let state = classify("", false, false);
        assert_eq!(state.primary, Emotion::Neutral);
        assert_eq!(state.confidence, 0.7);
        assert_eq!(state.context, "Ready to assist");
    }

    #[test]
    fn confidence_always_in_unit_range() {
        let inputs = [
            ("", false, false),
            ("hello", false, false),
            ("what", false, false),
            ("great", false, false),
            ("anything else", true, false),
            ("anything else", false, true),
            ("hi", true, true),
        ];
        for (text, listening, speaking) in inputs {
            let state = classify(text, listening, speaking);
            assert!((0.0..=1.0).contains(&state.confidence));
        }
    }

    #[test]
    fn intensity_percent_rounds() {
        assert_eq!(intensity_percent(0.85), 85);
        assert_eq!(intensity_percent(0.704), 70);
        assert_eq!(intensity_percent(1.0), 100);
        assert_eq!(intensity_percent(0.0), 0);
    }
}
