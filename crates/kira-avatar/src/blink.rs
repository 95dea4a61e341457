//! Blink timer state.

use rand::Rng;

/// Seconds a blink stays visible after the timer resets.
pub const BLINK_DURATION_SECS: f32 = 0.15;

/// Range the blink interval is drawn from, seconds.
pub const BLINK_INTERVAL_SECS: std::ops::Range<f32> = 3.0..5.0;

/// The blink cycle: a timer that accumulates wall-clock time and resets
/// when it crosses a randomized threshold.
///
/// The threshold is redrawn exactly once per cycle, at the moment of the
/// reset. The random source is injected so tests can pin cycle lengths with
/// a seeded rng or a fixed threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct BlinkState {
    timer: f32,
    threshold: f32,
}

impl BlinkState {
    /// Creates a blink state with the first threshold drawn from `rng`.
    pub fn new(rng: &mut impl Rng) -> Self {
        Self {
            timer: 0.0,
            threshold: rng.gen_range(BLINK_INTERVAL_SECS),
        }
    }

    /// Creates a blink state with a fixed first threshold. Subsequent
    /// thresholds still come from the rng passed to [`tick`].
    ///
    /// [`tick`]: BlinkState::tick
    pub fn with_threshold(threshold: f32) -> Self {
        Self {
            timer: 0.0,
            threshold,
        }
    }

    /// Advances the timer by `dt` seconds, resetting and redrawing the
    /// threshold when the current one is exceeded.
    pub fn tick(&mut self, dt: f32, rng: &mut impl Rng) {
        self.timer += dt;
        if self.timer > self.threshold {
            self.timer = 0.0;
            self.threshold = rng.gen_range(BLINK_INTERVAL_SECS);
        }
    }

    /// `true` while the eyelids should be drawn closed.
    pub fn is_blinking(&self) -> bool {
        self.timer < BLINK_DURATION_SECS
    }

    /// Seconds since the last reset.
    pub fn timer(&self) -> f32 {
        self.timer
    }

    /// The threshold the current cycle will reset at.
    pub fn threshold(&self) -> f32 {
        self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const TICK: f32 = 1.0 / 60.0;

    #[test]
    fn threshold_drawn_within_interval() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let blink = BlinkState::new(&mut rng);
            assert!(BLINK_INTERVAL_SECS.contains(&blink.threshold()));
        }
    }

    #[test]
    fn fixed_threshold_cycle_resets_after_four_seconds() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut blink = BlinkState::with_threshold(4.0);

        // 240 ticks at 1/60 s = 4.0 s. Accumulated float error means the
        // timer crosses 4.0 within a tick of the nominal count.
        let mut reset_at = None;
        for i in 0..242 {
            blink.tick(TICK, &mut rng);
            if blink.timer() < TICK / 2.0 {
                reset_at = Some(i + 1);
                break;
            }
        }

        let ticks = reset_at.expect("blink timer never reset");
        assert!((239..=241).contains(&ticks), "reset after {} ticks", ticks);
        // A fresh threshold was drawn for the next cycle.
        assert!(BLINK_INTERVAL_SECS.contains(&blink.threshold()));
    }

    #[test]
    fn blink_active_only_shortly_after_reset() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut blink = BlinkState::with_threshold(4.0);

        // Timer starts at zero, so the first few frames blink.
        assert!(blink.is_blinking());
        for _ in 0..9 {
            blink.tick(TICK, &mut rng);
        }
        // 9 ticks = 0.15 s; strictly-less comparison means the blink has
        // ended.
        assert!(!blink.is_blinking());

        // Advance past the threshold: blink again right after the reset.
        for _ in 0..240 {
            blink.tick(TICK, &mut rng);
        }
        assert!(blink.is_blinking());
    }

    #[test]
    fn threshold_redrawn_exactly_once_per_cycle() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut blink = BlinkState::with_threshold(3.0);

        let initial = blink.threshold();
        let mut redraws = 0;
        let mut last = initial;
        for _ in 0..185 {
            // just past one cycle (3.0 s = 180 ticks)
            blink.tick(TICK, &mut rng);
            if blink.threshold() != last {
                redraws += 1;
                last = blink.threshold();
            }
        }
        assert_eq!(redraws, 1);
    }
}
