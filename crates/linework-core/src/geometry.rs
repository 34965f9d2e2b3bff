//! Pure geometry helpers shared by the hit-tester and transform engine.

use kurbo::Point;

/// Half-width of the square window used for handle detection, in canvas
/// units. Sized for a comfortable click/touch target; not configurable.
pub const HANDLE_TOLERANCE: f64 = 5.0;

/// Slack allowed by the line-body test, in canvas units.
pub const LINE_BODY_TOLERANCE: f64 = 1.0;

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// True when `p` falls inside the fixed square handle window around
/// `target` (±[`HANDLE_TOLERANCE`] on both axes).
pub fn near_point(p: Point, target: Point) -> bool {
    (p.x - target.x).abs() < HANDLE_TOLERANCE && (p.y - target.y).abs() < HANDLE_TOLERANCE
}

/// Slack test for "`p` lies on the segment a..b": the sum of distances from
/// `p` to both endpoints, minus the segment's own length, stays within
/// `tolerance`.
///
/// A point exactly colinear with the infinite line through `a` and `b` can
/// pass this test beyond the segment's span. The window is a thin sliver at
/// the 1-unit body tolerance, so the behavior is kept rather than replaced
/// with a clamped projection.
pub fn point_near_segment(p: Point, a: Point, b: Point, tolerance: f64) -> bool {
    let offset = distance(a, b) - (distance(a, p) + distance(b, p));
    offset.abs() < tolerance
}
