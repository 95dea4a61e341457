//! The seam between the animation driver and the rendering surface.

use crate::frame::AnimationFrame;
use tracing::warn;

/// Consumes per-frame animation output to set transform and material
/// parameters of scene nodes.
///
/// Implementations live outside this crate (the rendering surface is a
/// collaborator, not part of the engine). A failing sink must not take the
/// animation loop down; use [`apply_frame`] to log and skip.
pub trait RenderSink {
    /// Applies one frame. Errors are reported as strings; the engine has no
    /// richer taxonomy to offer a renderer it knows nothing about.
    fn apply(&mut self, frame: &AnimationFrame) -> Result<(), String>;
}

/// Applies a frame, isolating sink failures: a failed frame is logged and
/// skipped so subsequent frames keep flowing.
pub fn apply_frame(sink: &mut impl RenderSink, frame: &AnimationFrame) {
    if let Err(e) = sink.apply(frame) {
        warn!(error = %e, "render sink rejected frame, skipping");
    }
}
