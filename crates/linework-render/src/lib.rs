//! Linework Render Library
//!
//! Renderer boundary for the linework editor: the trait a rendering
//! backend fulfils and the per-frame context it consumes. The core hands
//! over shape descriptors and never inspects what a backend derives from
//! them; everything stroke-related lives on the backend's side.

mod renderer;

pub use renderer::{RenderContext, RenderResult, Renderer, RendererError, render_drawing};
