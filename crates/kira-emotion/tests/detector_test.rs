use kira_emotion::EmotionDetector;
use kira_types::{Emotion, InteractionState};

#[tokio::test]
async fn detector_notifies_subscribers_on_update() {
    let mut detector = EmotionDetector::new();
    let mut rx = detector.subscribe();

    let state = InteractionState {
        is_listening: true,
        ..Default::default()
    };
    detector.update(&state);

    let notified = rx.recv().await.unwrap();
    assert_eq!(notified.primary, Emotion::Focused);
    assert_eq!(notified.confidence, 0.85);
    assert_eq!(detector.current(), &notified);
}

#[tokio::test]
async fn detector_recomputes_wholesale_on_every_update() {
    let mut detector = EmotionDetector::new();
    let mut rx = detector.subscribe();

    let mut state = InteractionState {
        last_message_text: "Hello KIRA".to_string(),
        ..Default::default()
    };
    detector.update(&state);
    assert_eq!(rx.recv().await.unwrap().primary, Emotion::Happy);

    // Same text again: still notified, no dedup.
    detector.update(&state);
    assert_eq!(rx.recv().await.unwrap().primary, Emotion::Happy);

    state.last_message_text = "What can you do?".to_string();
    detector.update(&state);
    assert_eq!(rx.recv().await.unwrap().primary, Emotion::Thinking);
}

#[tokio::test]
async fn speaking_overrides_listening_in_detector() {
    let mut detector = EmotionDetector::new();
    let state = InteractionState {
        is_listening: true,
        is_speaking: true,
        ..Default::default()
    };
    let emotion = detector.update(&state);
    assert_eq!(emotion.primary, Emotion::Speaking);
}

#[test]
fn detector_starts_in_resting_state() {
    let detector = EmotionDetector::new();
    assert_eq!(detector.current().primary, Emotion::Neutral);
    assert_eq!(detector.current().context, "Ready to help");
}
