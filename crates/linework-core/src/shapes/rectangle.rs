//! Rectangle-specific coordinate rules.

use kurbo::Point;

use super::Coords;
use crate::geometry::near_point;
use crate::hit::HitPosition;

/// Reorder corners to `x1 <= x2, y1 <= y2`. The bounding box is unchanged.
pub(crate) fn normalized(coords: Coords) -> Coords {
    Coords::new(
        coords.x1.min(coords.x2),
        coords.y1.min(coords.y2),
        coords.x1.max(coords.x2),
        coords.y1.max(coords.y2),
    )
}

/// Closed bounding-box containment, insensitive to corner ordering.
pub(crate) fn contains(p: Point, coords: Coords) -> bool {
    let c = normalized(coords);
    p.x >= c.x1 && p.x <= c.x2 && p.y >= c.y1 && p.y <= c.y2
}

/// Classify where `p` lands on a rectangle. Corner handles are tested
/// first so they stay selectable right next to the interior.
///
/// Corner names follow the raw coordinate pairs, not the canonical
/// ordering: mid-drag, "top-left" is wherever `(x1, y1)` currently sits.
pub(crate) fn classify(p: Point, coords: Coords) -> Option<HitPosition> {
    let Coords { x1, y1, x2, y2 } = coords;
    if near_point(p, Point::new(x1, y1)) {
        Some(HitPosition::TopLeft)
    } else if near_point(p, Point::new(x2, y1)) {
        Some(HitPosition::TopRight)
    } else if near_point(p, Point::new(x1, y2)) {
        Some(HitPosition::BottomLeft)
    } else if near_point(p, Point::new(x2, y2)) {
        Some(HitPosition::BottomRight)
    } else if contains(p, coords) {
        Some(HitPosition::Inside)
    } else {
        None
    }
}
