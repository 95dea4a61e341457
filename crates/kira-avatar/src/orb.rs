//! The simple orb avatar variant.
//!
//! A single pulsing sphere with a glow shell and an eight-particle ring,
//! used where the full humanoid avatar is too heavy.

use crate::frame::Particle;
use kira_types::{InteractionState, Vec3};
use serde::Serialize;

/// Number of ring particles around the orb.
pub const SIMPLE_PARTICLE_COUNT: usize = 8;

/// Per-tick pose of the orb avatar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrbFrame {
    /// Gentle y-axis sway, radians.
    pub rotation_y: f32,
    /// Sphere scale, modulated by speech and audio level.
    pub scale: f32,
    /// Glow shell scale; pulses while listening.
    pub glow_scale: f32,
    /// Sphere color as a hex string, keyed by interaction state.
    pub color: &'static str,
    /// The particle ring.
    pub particles: Vec<Particle>,
}

/// Computes the orb pose for elapsed time `t`. Pure; the orb carries no
/// frame-over-frame state.
pub fn orb_frame(t: f32, state: &InteractionState) -> OrbFrame {
    let speech_pulse = if state.is_speaking {
        (t * 8.0).sin() * 0.1
    } else {
        0.0
    };
    let glow_scale = if state.is_listening {
        1.0 + (t * 4.0).sin() * 0.3
    } else {
        0.5
    };
    let color = if state.is_listening {
        "#4f46e5"
    } else if state.is_speaking {
        "#06b6d4"
    } else {
        "#6366f1"
    };

    OrbFrame {
        rotation_y: (t * 0.5).sin() * 0.1,
        scale: 1.0 + speech_pulse + state.audio_level * 0.2,
        glow_scale,
        color,
        particles: simple_ring(state.is_listening || state.is_speaking),
    }
}

/// The orb's static particle ring. Positions depend on index only.
pub fn simple_ring(active: bool) -> Vec<Particle> {
    let opacity = if active { 0.8 } else { 0.3 };
    (0..SIMPLE_PARTICLE_COUNT)
        .map(|i| {
            let angle = i as f32 * std::f32::consts::PI / 4.0;
            Particle {
                position: Vec3::new(angle.cos() * 2.0, angle.sin() * 0.5, angle.sin() * 2.0),
                opacity,
            }
        })
        .collect()
}
