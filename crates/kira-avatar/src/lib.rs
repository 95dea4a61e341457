//! Avatar animation engine for KIRA.
//!
//! Synthesizes a continuous visual behavior — pose, blink cycle, mouth
//! motion, halo color, particle motion, camera framing — from a small set of
//! external signals (listening/speaking flags, audio level, current
//! emotion). The per-frame output is an [`AnimationFrame`] handed to a
//! [`RenderSink`]; the renderer itself lives outside this crate.
//!
//! # State model
//!
//! Everything the driver computes is a pure function of elapsed time and the
//! interaction snapshot, with one exception: the blink timer, which is the
//! only carried-forward mutable state in the loop. Its threshold redraw
//! takes an injected random source so tests can pin exact cycle lengths.
//!
//! A skipped frame is harmless: state simply advances by the wall-clock
//! delta on the next tick.

mod ambient;
mod blink;
mod camera;
mod driver;
mod frame;
mod orb;
mod sink;

pub use ambient::{AmbientField, AmbientFrame, AmbientPose, AMBIENT_PARTICLE_COUNT};
pub use blink::{BlinkState, BLINK_DURATION_SECS, BLINK_INTERVAL_SECS};
pub use camera::{CameraController, CameraPose};
pub use driver::{
    body_bob, body_scale, detailed_ring, eye_offset, halo_color, head_rotation, mouth_scale,
    AvatarDriver, DETAILED_PARTICLE_COUNT, EYE_TRACK_FACTOR,
};
pub use frame::{AnimationFrame, Particle};
pub use orb::{orb_frame, simple_ring, OrbFrame, SIMPLE_PARTICLE_COUNT};
pub use sink::{apply_frame, RenderSink};
