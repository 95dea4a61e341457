//! The timer-driven async wrapper around [`BarArray`].

use crate::bars::{BarArray, UPDATE_INTERVAL};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;
use tracing::debug;

/// Owns the bar array and the 100 ms redraw task.
///
/// The task exists only while the visualizer is active. Deactivation aborts
/// it and flushes the heights to zero in the same call, so a reader never
/// observes stale bars and no periodic task leaks past deactivation.
#[derive(Debug)]
pub struct VoiceVisualizer {
    bars: Arc<Mutex<BarArray>>,
    audio_level: Arc<Mutex<f32>>,
    task: Option<JoinHandle<()>>,
}

impl VoiceVisualizer {
    pub fn new() -> Self {
        Self {
            bars: Arc::new(Mutex::new(BarArray::new())),
            audio_level: Arc::new(Mutex::new(0.0)),
            task: None,
        }
    }

    /// Starts the redraw task. No-op when already active.
    pub fn activate(&mut self) {
        if self.task.is_some() {
            return;
        }

        lock(&self.bars).set_active(true);

        let bars = Arc::clone(&self.bars);
        let audio_level = Arc::clone(&self.audio_level);
        self.task = Some(tokio::spawn(async move {
            let mut rng = StdRng::from_entropy();
            let mut interval = tokio::time::interval(UPDATE_INTERVAL);
            interval.tick().await; // first tick fires immediately; skip it
            loop {
                interval.tick().await;
                let level = *lock(&audio_level);
                lock(&bars).redraw(level, &mut rng);
            }
        }));
        debug!("visualizer activated");
    }

    /// Cancels the redraw task and flushes every height to zero.
    pub fn deactivate(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        lock(&self.bars).set_active(false);
        debug!("visualizer deactivated");
    }

    /// Updates the audio level the running task mixes into each redraw.
    pub fn set_audio_level(&self, level: f32) {
        *lock(&self.audio_level) = level;
    }

    pub fn is_active(&self) -> bool {
        self.task.is_some()
    }

    /// Snapshot of the raw bar heights.
    pub fn heights(&self) -> [f32; crate::bars::BAR_COUNT] {
        *lock(&self.bars).heights()
    }

    /// Snapshot of the heights as drawn (floored for rendering).
    pub fn display_heights(&self) -> [f32; crate::bars::BAR_COUNT] {
        lock(&self.bars).display_heights()
    }
}

impl Default for VoiceVisualizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for VoiceVisualizer {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| e.into_inner())
}
