//! The per-frame animation driver.

use crate::blink::BlinkState;
use crate::frame::{AnimationFrame, Particle};
use kira_types::{Emotion, InteractionState, Vec2, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Number of ring particles around the detailed avatar.
pub const DETAILED_PARTICLE_COUNT: usize = 12;

/// Factor applied to the eye offset when positioning pupils relative to the
/// socket.
pub const EYE_TRACK_FACTOR: f32 = 0.05;

/// Body breathing scale: `1 + sin(t * 1.5) * 0.02`, always in [0.98, 1.02].
pub fn body_scale(t: f32) -> f32 {
    1.0 + (t * 1.5).sin() * 0.02
}

/// Head rotation for the current mode. Priority: listening > speaking >
/// idle.
pub fn head_rotation(t: f32, is_listening: bool, is_speaking: bool) -> Vec2 {
    if is_listening {
        // Attentive head position
        Vec2::new((t * 2.0).sin() * 0.05, (t * 1.5).sin() * 0.1)
    } else if is_speaking {
        Vec2::new((t * 4.0).sin() * 0.08, (t * 3.0).sin() * 0.06)
    } else {
        // Idle subtle movements
        Vec2::new((t * 0.8).sin() * 0.03, (t * 0.6).sin() * 0.04)
    }
}

/// Subtle eye-tracking offset.
pub fn eye_offset(t: f32) -> Vec2 {
    Vec2::new((t * 0.5).sin() * 0.1, (t * 0.3).cos() * 0.05)
}

/// Mouth scale. Animated only while speaking; 1.0 (resting) otherwise.
pub fn mouth_scale(t: f32, is_speaking: bool, audio_level: f32) -> f32 {
    if is_speaking {
        1.0 + (t * 8.0 + audio_level * 10.0).sin() * 0.3
    } else {
        1.0
    }
}

/// Vertical bob applied to the whole figure, scaled by audio intensity.
pub fn body_bob(t: f32, is_speaking: bool, audio_level: f32) -> f32 {
    let intensity = audio_level * 0.5 + if is_speaking { 0.3 } else { 0.0 };
    (t * 2.0).sin() * intensity * 0.1
}

/// Halo color for the emotion indicator ring.
pub fn halo_color(emotion: Emotion) -> &'static str {
    match emotion {
        Emotion::Happy => "#10b981",
        Emotion::Thinking => "#f59e0b",
        Emotion::Speaking => "#06b6d4",
        _ => "#6366f1",
    }
}

/// The ring of floating particles around the detailed avatar.
///
/// Positions are a function of the particle index only; activity controls
/// opacity alone.
pub fn detailed_ring(active: bool) -> Vec<Particle> {
    let opacity = if active { 0.8 } else { 0.4 };
    (0..DETAILED_PARTICLE_COUNT)
        .map(|i| {
            let angle = (i as f32 / DETAILED_PARTICLE_COUNT as f32) * std::f32::consts::TAU;
            let radius = 2.0 + (i as f32).sin() * 0.5;
            Particle {
                position: Vec3::new(
                    angle.cos() * radius,
                    (angle * 0.5).sin() * 0.8 + 0.5,
                    angle.sin() * radius,
                ),
                opacity,
            }
        })
        .collect()
}

/// Drives the detailed avatar, one tick per render frame.
///
/// The driver owns the blink state and the rng used for threshold redraws;
/// everything else in the output is a pure function of `(t, state, emotion)`.
#[derive(Debug)]
pub struct AvatarDriver {
    blink: BlinkState,
    rng: StdRng,
}

impl AvatarDriver {
    pub fn new() -> Self {
        let mut rng = StdRng::from_entropy();
        let blink = BlinkState::new(&mut rng);
        Self { blink, rng }
    }

    /// Creates a driver with a deterministic rng and a fixed first blink
    /// threshold, for tests.
    pub fn seeded(seed: u64, first_threshold: f32) -> Self {
        Self {
            blink: BlinkState::with_threshold(first_threshold),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Computes the frame for elapsed time `t`, advancing the blink timer by
    /// the wall-clock delta `dt`.
    pub fn tick(
        &mut self,
        t: f32,
        dt: f32,
        state: &InteractionState,
        emotion: Emotion,
    ) -> AnimationFrame {
        self.blink.tick(dt, &mut self.rng);

        let active = state.is_listening || state.is_speaking;
        AnimationFrame {
            head_rotation: head_rotation(t, state.is_listening, state.is_speaking),
            eye_offset: eye_offset(t),
            blink_active: self.blink.is_blinking(),
            mouth_scale: mouth_scale(t, state.is_speaking, state.audio_level),
            body_scale: body_scale(t),
            body_bob: body_bob(t, state.is_speaking, state.audio_level),
            halo_color: halo_color(emotion),
            particles: detailed_ring(active),
        }
    }

    /// Read access to the blink state, for inspection in tests.
    pub fn blink(&self) -> &BlinkState {
        &self.blink
    }
}

impl Default for AvatarDriver {
    fn default() -> Self {
        Self::new()
    }
}
