//! Transform engine: cursor hints plus the move and resize coordinate math.

use kurbo::{Point, Vec2};

use crate::hit::HitPosition;
use crate::shapes::Coords;

/// Cursor shape the host UI should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorHint {
    /// NW/SE diagonal resize.
    NwseResize,
    /// NE/SW diagonal resize.
    NeswResize,
    /// Whole-shape move.
    Move,
    /// Drawing tools.
    Crosshair,
    /// Nothing interactive under the pointer.
    #[default]
    Arrow,
}

/// Pure lookup from hit position to cursor shape.
///
/// `tl`/`br` and the two line endpoints share the NW/SE diagonal, `tr`/`bl`
/// the NE/SW one; everything else, including the body, is a move.
pub fn cursor_for(position: HitPosition) -> CursorHint {
    match position {
        HitPosition::TopLeft | HitPosition::BottomRight | HitPosition::Start | HitPosition::End => {
            CursorHint::NwseResize
        }
        HitPosition::TopRight | HitPosition::BottomLeft => CursorHint::NeswResize,
        _ => CursorHint::Move,
    }
}

/// Replace the handle's coordinates with the pointer position, leaving the
/// opposite corner/endpoint fixed.
///
/// `tl`/`start` replace `(x1, y1)`; `br`/`end` replace `(x2, y2)`; `tr`
/// sets `y1 := py, x2 := px`; `bl` sets `x1 := px, y2 := py`. A non-handle
/// position yields `None`, meaning "no geometry change" — handle values
/// come from the hit-tester's closed label set, so this is a silent
/// precondition miss, never a panic.
pub fn resized_coords(pointer: Point, handle: HitPosition, coords: Coords) -> Option<Coords> {
    let Coords { x1, y1, x2, y2 } = coords;
    match handle {
        HitPosition::TopLeft | HitPosition::Start => Some(Coords::new(pointer.x, pointer.y, x2, y2)),
        HitPosition::TopRight => Some(Coords::new(x1, pointer.y, pointer.x, y2)),
        HitPosition::BottomLeft => Some(Coords::new(pointer.x, y1, x2, pointer.y)),
        HitPosition::BottomRight | HitPosition::End => {
            Some(Coords::new(x1, y1, pointer.x, pointer.y))
        }
        HitPosition::Inside => None,
    }
}

/// Translate a shape so the pointer keeps the offset it was grabbed at,
/// preserving width and height — the shape follows the drag instead of
/// snapping its corner to the pointer.
pub fn moved_coords(coords: Coords, grab_offset: Vec2, pointer: Point) -> Coords {
    let width = coords.width();
    let height = coords.height();
    let x1 = pointer.x - grab_offset.x;
    let y1 = pointer.y - grab_offset.y;
    Coords::new(x1, y1, x1 + width, y1 + height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_lookup() {
        assert_eq!(cursor_for(HitPosition::TopLeft), CursorHint::NwseResize);
        assert_eq!(cursor_for(HitPosition::BottomRight), CursorHint::NwseResize);
        assert_eq!(cursor_for(HitPosition::Start), CursorHint::NwseResize);
        assert_eq!(cursor_for(HitPosition::End), CursorHint::NwseResize);
        assert_eq!(cursor_for(HitPosition::TopRight), CursorHint::NeswResize);
        assert_eq!(cursor_for(HitPosition::BottomLeft), CursorHint::NeswResize);
        assert_eq!(cursor_for(HitPosition::Inside), CursorHint::Move);
    }

    #[test]
    fn test_resize_br_replaces_second_pair() {
        let c = resized_coords(
            Point::new(80.0, 90.0),
            HitPosition::BottomRight,
            Coords::new(10.0, 10.0, 50.0, 50.0),
        )
        .unwrap();
        assert_eq!(c, Coords::new(10.0, 10.0, 80.0, 90.0));
    }

    #[test]
    fn test_resize_tl_replaces_first_pair() {
        let c = resized_coords(
            Point::new(0.0, 5.0),
            HitPosition::TopLeft,
            Coords::new(10.0, 10.0, 50.0, 50.0),
        )
        .unwrap();
        assert_eq!(c, Coords::new(0.0, 5.0, 50.0, 50.0));
    }

    #[test]
    fn test_resize_mixed_corners() {
        let base = Coords::new(10.0, 10.0, 50.0, 50.0);
        let tr = resized_coords(Point::new(60.0, 0.0), HitPosition::TopRight, base).unwrap();
        assert_eq!(tr, Coords::new(10.0, 0.0, 60.0, 50.0));
        let bl = resized_coords(Point::new(0.0, 70.0), HitPosition::BottomLeft, base).unwrap();
        assert_eq!(bl, Coords::new(0.0, 10.0, 50.0, 70.0));
    }

    #[test]
    fn test_resize_line_endpoints() {
        let base = Coords::new(0.0, 0.0, 30.0, 0.0);
        let start = resized_coords(Point::new(-10.0, 5.0), HitPosition::Start, base).unwrap();
        assert_eq!(start, Coords::new(-10.0, 5.0, 30.0, 0.0));
        let end = resized_coords(Point::new(40.0, 10.0), HitPosition::End, base).unwrap();
        assert_eq!(end, Coords::new(0.0, 0.0, 40.0, 10.0));
    }

    #[test]
    fn test_resize_body_is_noop() {
        assert!(
            resized_coords(
                Point::new(0.0, 0.0),
                HitPosition::Inside,
                Coords::new(10.0, 10.0, 50.0, 50.0),
            )
            .is_none()
        );
    }

    #[test]
    fn test_move_preserves_extent_and_grab_offset() {
        // Rectangle (0,0)-(10,10) grabbed at (2,2), dragged to (12,12).
        let c = moved_coords(
            Coords::new(0.0, 0.0, 10.0, 10.0),
            Vec2::new(2.0, 2.0),
            Point::new(12.0, 12.0),
        );
        assert_eq!(c, Coords::new(10.0, 10.0, 20.0, 20.0));
        assert!((c.width() - 10.0).abs() < f64::EPSILON);
        assert!((c.height() - 10.0).abs() < f64::EPSILON);
    }
}
