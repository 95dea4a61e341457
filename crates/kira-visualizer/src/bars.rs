//! The bar-height state machine.

use rand::Rng;
use std::time::Duration;

/// Number of visualizer bars.
pub const BAR_COUNT: usize = 12;

/// Redraw period while active.
pub const UPDATE_INTERVAL: Duration = Duration::from_millis(100);

/// Minimum height a bar is *drawn* with. A rendering floor only; the stored
/// heights are not clamped.
pub const RENDER_FLOOR: f32 = 4.0;

/// Fixed-size ordered sequence of bar heights.
///
/// While inactive every height is pinned to 0 and [`redraw`] is a no-op.
///
/// [`redraw`]: BarArray::redraw
#[derive(Debug, Clone, PartialEq)]
pub struct BarArray {
    heights: [f32; BAR_COUNT],
    active: bool,
}

impl BarArray {
    pub fn new() -> Self {
        Self {
            heights: [0.0; BAR_COUNT],
            active: false,
        }
    }

    /// Sets the activity flag. Deactivating immediately flushes every
    /// height to zero.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
        if !active {
            self.heights = [0.0; BAR_COUNT];
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Redraws every bar independently as `random * 100 + audio_level * 50`.
    /// Does nothing while inactive.
    pub fn redraw(&mut self, audio_level: f32, rng: &mut impl Rng) {
        if !self.active {
            return;
        }
        for height in &mut self.heights {
            *height = rng.gen::<f32>() * 100.0 + audio_level * 50.0;
        }
    }

    /// The raw stored heights.
    pub fn heights(&self) -> &[f32; BAR_COUNT] {
        &self.heights
    }

    /// Heights as drawn, floored at [`RENDER_FLOOR`].
    pub fn display_heights(&self) -> [f32; BAR_COUNT] {
        self.heights.map(|h| h.max(RENDER_FLOOR))
    }
}

impl Default for BarArray {
    fn default() -> Self {
        Self::new()
    }
}
