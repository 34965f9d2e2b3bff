//! Linework Core Library
//!
//! Geometry and interaction state engine for the linework shape editor:
//! the shape model, hit-testing, move/resize transform math, and the linear
//! undo/redo history over whole-drawing snapshots. Rendering, tool widgets
//! and window plumbing are external collaborators; see `linework-render`
//! for the renderer boundary.

pub mod drawing;
pub mod editor;
pub mod geometry;
pub mod history;
pub mod hit;
pub mod input;
pub mod shapes;
pub mod transform;

pub use drawing::Drawing;
pub use editor::{EditorSession, ToolKind};
pub use history::{History, WriteMode};
pub use hit::{Hit, HitPosition, classify_position, locate_target};
pub use input::{Modifiers, PointerEvent};
pub use shapes::{Coords, Shape, ShapeDescriptor, ShapeKind};
pub use transform::{CursorHint, cursor_for, moved_coords, resized_coords};
