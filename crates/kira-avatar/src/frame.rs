//! The ephemeral per-tick animation output.

use kira_types::{Vec2, Vec3};
use serde::Serialize;

/// A single ring particle around the avatar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Particle {
    /// World position of the particle.
    pub position: Vec3,
    /// Render opacity in `[0, 1]`.
    pub opacity: f32,
}

/// Pose and material parameters for one render tick.
///
/// Recomputed every frame and consumed immediately by the render sink;
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimationFrame {
    /// Head rotation around the x and y axes, radians.
    pub head_rotation: Vec2,
    /// Subtle eye-tracking offset applied to the pupils.
    pub eye_offset: Vec2,
    /// Whether the eyelids are drawn this frame.
    pub blink_active: bool,
    /// Mouth scale; 1.0 when resting, modulated while speaking.
    pub mouth_scale: f32,
    /// Body breathing scale, always within `[0.98, 1.02]`.
    pub body_scale: f32,
    /// Vertical offset applied to the whole figure.
    pub body_bob: f32,
    /// Halo color keyed by the current emotion, as a hex string.
    pub halo_color: &'static str,
    /// The ring of floating particles around the avatar.
    pub particles: Vec<Particle>,
}
