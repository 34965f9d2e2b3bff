//! Line-specific coordinate rules.

use kurbo::Point;

use super::Coords;
use crate::geometry::{LINE_BODY_TOLERANCE, near_point, point_near_segment};
use crate::hit::HitPosition;

/// Order endpoints lexicographically: the first point gets the smaller x,
/// or the smaller y when the line is vertical. Idempotent.
pub(crate) fn normalized(coords: Coords) -> Coords {
    let keep = coords.x1 < coords.x2 || (coords.x1 == coords.x2 && coords.y1 <= coords.y2);
    if keep {
        coords
    } else {
        Coords::new(coords.x2, coords.y2, coords.x1, coords.y1)
    }
}

/// Classify where `p` lands on a line. Endpoint handles win over the body.
pub(crate) fn classify(p: Point, coords: Coords) -> Option<HitPosition> {
    if near_point(p, coords.p1()) {
        Some(HitPosition::Start)
    } else if near_point(p, coords.p2()) {
        Some(HitPosition::End)
    } else if point_near_segment(p, coords.p1(), coords.p2(), LINE_BODY_TOLERANCE) {
        Some(HitPosition::Inside)
    } else {
        None
    }
}
