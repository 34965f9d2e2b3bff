//! Renderer trait abstraction.

use kurbo::Size;
use linework_core::drawing::Drawing;
use linework_core::shapes::ShapeDescriptor;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("initialization failed: {0}")]
    InitFailed(String),
    #[error("render failed: {0}")]
    RenderFailed(String),
    #[error("surface error: {0}")]
    Surface(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// The drawing to paint — always a whole snapshot read from the
    /// history store, never a partial view.
    pub drawing: &'a Drawing,
    /// Viewport size in physical pixels.
    pub viewport_size: Size,
    /// Device pixel ratio (for HiDPI).
    pub scale_factor: f64,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(drawing: &'a Drawing, viewport_size: Size) -> Self {
        Self {
            drawing,
            viewport_size,
            scale_factor: 1.0,
        }
    }
}

/// A rendering backend.
///
/// A [`ShapeDescriptor`] is the entire contract: whatever a backend builds
/// from one (paths, stroke caches, GPU buffers) stays internal to it.
pub trait Renderer {
    /// Clear the surface and start a new frame.
    fn begin_frame(&mut self, ctx: &RenderContext<'_>) -> RenderResult<()>;

    /// Paint one shape from its descriptor.
    fn draw_shape(&mut self, descriptor: &ShapeDescriptor) -> RenderResult<()>;

    /// Finish the frame.
    fn end_frame(&mut self) -> RenderResult<()>;
}

/// Repaint a whole drawing: clear, then every shape in id order.
///
/// The editor repaints the full snapshot on every state change rather than
/// diffing, so this is the only paint path.
pub fn render_drawing<R: Renderer>(renderer: &mut R, ctx: &RenderContext<'_>) -> RenderResult<()> {
    renderer.begin_frame(ctx)?;
    for descriptor in ctx.drawing.descriptors() {
        renderer.draw_shape(&descriptor)?;
    }
    renderer.end_frame()
}
