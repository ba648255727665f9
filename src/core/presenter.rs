use anyhow::Result;

use super::display_context::DisplayContext;
use super::frame::VideoFrame;
use crate::types::TexturedQuad;

/// Rendering backend - draws textured quads onto the displays
pub trait Presenter {
    /// Start a frame on every display
    fn begin_frame(&mut self) -> Result<()>;

    /// Clear one display to black
    fn clear(&mut self, display: &DisplayContext) -> Result<()>;

    /// Draw `frame` onto `display` through `quad`
    fn draw_quad(
        &mut self,
        display: &DisplayContext,
        quad: &TexturedQuad,
        frame: &VideoFrame<'_>,
    ) -> Result<()>;

    /// Present the frame on every display
    fn end_frame(&mut self) -> Result<()>;
}
