//! Shape definitions for the editor.

pub(crate) mod line;
pub(crate) mod rectangle;

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// The kind of drawable primitive. Closed for now; new kinds slot in here
/// and in the per-kind modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Line,
    Rectangle,
}

/// The flattened endpoint quad the transform engine operates on.
///
/// Mid-gesture the pairs are in drag order, not canonical order: `x1 > x2`
/// is legal until the terminal normalization at pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coords {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Coords {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn from_points(p1: Point, p2: Point) -> Self {
        Self::new(p1.x, p1.y, p2.x, p2.y)
    }

    /// First endpoint (top-left corner for a normalized rectangle).
    pub fn p1(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    /// Second endpoint (bottom-right corner for a normalized rectangle).
    pub fn p2(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    /// Signed width (`x2 - x1`).
    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    /// Signed height (`y2 - y1`).
    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }
}

/// A drawable primitive: a kind plus the two endpoints defining its extent.
///
/// Ids are assigned once, by [`crate::drawing::Drawing::add_shape`], and
/// equal the shape's position in the owning drawing for its whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    id: usize,
    pub kind: ShapeKind,
    pub p1: Point,
    pub p2: Point,
}

impl Shape {
    /// Pure constructor; touches nothing else.
    pub fn new(id: usize, kind: ShapeKind, p1: Point, p2: Point) -> Self {
        Self { id, kind, p1, p2 }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn coords(&self) -> Coords {
        Coords::from_points(self.p1, self.p2)
    }

    /// Same shape with replaced endpoints. Id and kind carry over.
    pub fn with_coords(&self, coords: Coords) -> Self {
        Self::new(self.id, self.kind, coords.p1(), coords.p2())
    }

    /// Derive a fresh render descriptor.
    ///
    /// The descriptor is a pure function of `(kind, p1, p2)` and is never
    /// stored, so it cannot go stale after an edit.
    pub fn descriptor(&self) -> ShapeDescriptor {
        ShapeDescriptor {
            kind: self.kind,
            p1: self.p1,
            p2: self.p2,
        }
    }

    /// Canonical coordinate ordering for this kind.
    ///
    /// Rectangles reorder corners to `x1 <= x2, y1 <= y2`; lines order
    /// endpoints lexicographically by `(x, then y)`. Applied once at the
    /// end of a gesture, never mid-drag, so handle identities stay stable
    /// relative to the original drag direction.
    pub fn normalized_coords(&self) -> Coords {
        match self.kind {
            ShapeKind::Line => line::normalized(self.coords()),
            ShapeKind::Rectangle => rectangle::normalized(self.coords()),
        }
    }

    /// Same shape with canonical coordinate ordering applied.
    pub fn normalized(&self) -> Self {
        self.with_coords(self.normalized_coords())
    }
}

/// Everything the rendering collaborator gets per shape. Whatever the
/// renderer derives from it stays on the renderer's side of the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeDescriptor {
    pub kind: ShapeKind,
    pub p1: Point,
    pub p2: Point,
}
