//! Hit-testing: which shape, and which part of it, is under the pointer.

use kurbo::Point;
use serde::{Deserialize, Serialize};

use crate::shapes::{Shape, ShapeKind, line, rectangle};

/// The part of a shape a pointer position lands on.
///
/// Corner labels apply to rectangles, `Start`/`End` to lines, `Inside` to
/// either body. The names track the raw coordinate pairs during a drag and
/// only become geometrically literal after terminal normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HitPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Inside,
    Start,
    End,
}

impl HitPosition {
    /// True for the named resize grab points, i.e. everything but the body.
    pub fn is_handle(self) -> bool {
        !matches!(self, HitPosition::Inside)
    }
}

/// A successful hit: the winning shape and the part that was hit.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    pub shape: &'a Shape,
    pub position: HitPosition,
}

/// Classify where `p` lands on `shape`, if anywhere.
///
/// Handles take precedence over the body for both kinds, so they stay
/// selectable even right next to the interior. `None` is a miss, not an
/// error.
pub fn classify_position(p: Point, shape: &Shape) -> Option<HitPosition> {
    match shape.kind {
        ShapeKind::Line => line::classify(p, shape.coords()),
        ShapeKind::Rectangle => rectangle::classify(p, shape.coords()),
    }
}

/// Scan `shapes` in id order and return the first hit.
///
/// Lower ids (earlier-created shapes) win when bodies overlap. `None`
/// means "no interaction target" and the caller proceeds targetless.
pub fn locate_target(p: Point, shapes: &[Shape]) -> Option<Hit<'_>> {
    shapes
        .iter()
        .find_map(|shape| classify_position(p, shape).map(|position| Hit { shape, position }))
}
