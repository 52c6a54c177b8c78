use std::error::Error;

use crate::core::data::frame_uniforms::FrameUniforms;
use crate::core::data::viewport::Viewport;

/// Draws frames for the scheduler.
///
/// All calls come from the thread that owns the event loop.
pub trait Renderer {
    type Error: Error;

    fn set_viewport(&mut self, viewport: Viewport) -> Result<(), Self::Error>;
    fn set_uniforms(&mut self, uniforms: &FrameUniforms);
    /// Draws with the last uniforms and presents. May block for a long time.
    fn draw_frame(&mut self) -> Result<(), Self::Error>;
}
