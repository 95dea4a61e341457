//! Voice amplitude visualizer bars.
//!
//! Twelve bar heights redrawn pseudo-randomly on a fixed 100 ms interval
//! while active, pinned to zero while inactive. The heights are
//! presentational noise seeded by the audio level, not a spectrum analysis.
//!
//! [`BarArray`] is the synchronous state machine; [`VoiceVisualizer`] wraps
//! it with the tokio interval task and guarantees the timer is cancelled,
//! never orphaned, on deactivation or drop.

mod bars;
mod task;

pub use bars::{BarArray, BAR_COUNT, RENDER_FLOOR, UPDATE_INTERVAL};
pub use task::VoiceVisualizer;
