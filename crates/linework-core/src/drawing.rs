//! The drawing: a dense, ordered sequence of shapes.

use kurbo::Point;
use serde::{Deserialize, Serialize};

use crate::shapes::{Shape, ShapeDescriptor, ShapeKind};

/// The complete ordered collection of shapes at one point in time. This is
/// the unit the history store snapshots.
///
/// Shape ids double as positions: the sequence is dense, 0-based and
/// append-only, and edits replace in place — never reorder or compact.
/// [`Drawing::add_shape`] is the only id source, which keeps
/// `shape.id() == index` true by construction. If deletion is ever added,
/// this must become keyed storage plus a separate ordering sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Drawing {
    shapes: Vec<Shape>,
}

impl Drawing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new shape, assigning the next id. Returns the id.
    pub fn add_shape(&mut self, kind: ShapeKind, p1: Point, p2: Point) -> usize {
        let id = self.shapes.len();
        self.shapes.push(Shape::new(id, kind, p1, p2));
        id
    }

    /// Replace the shape at `shape.id()` in place.
    ///
    /// A missing id is ignored: ids only come from `add_shape`, so a miss
    /// is a stale id held across an undo into a smaller snapshot.
    pub fn replace(&mut self, shape: Shape) {
        if let Some(slot) = self.shapes.get_mut(shape.id()) {
            *slot = shape;
        }
    }

    pub fn shape(&self, id: usize) -> Option<&Shape> {
        self.shapes.get(id)
    }

    /// Shapes in id (creation) order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Fresh render descriptors for every shape, in paint order.
    pub fn descriptors(&self) -> impl Iterator<Item = ShapeDescriptor> + '_ {
        self.shapes.iter().map(Shape::descriptor)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Serialize to JSON. Debugging/export convenience; the format carries
    /// no compatibility guarantees.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON produced by [`Drawing::to_json`].
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_equal_indices() {
        let mut drawing = Drawing::new();
        let a = drawing.add_shape(ShapeKind::Line, Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        let b = drawing.add_shape(
            ShapeKind::Rectangle,
            Point::new(2.0, 2.0),
            Point::new(3.0, 3.0),
        );
        assert_eq!(a, 0);
        assert_eq!(b, 1);
        for (index, shape) in drawing.shapes().iter().enumerate() {
            assert_eq!(shape.id(), index);
        }
    }

    #[test]
    fn test_replace_in_place() {
        let mut drawing = Drawing::new();
        let id = drawing.add_shape(ShapeKind::Line, Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        let edited = drawing
            .shape(id)
            .unwrap()
            .with_coords(crate::shapes::Coords::new(5.0, 5.0, 9.0, 9.0));
        drawing.replace(edited);

        assert_eq!(drawing.len(), 1);
        let shape = drawing.shape(id).unwrap();
        assert!((shape.p1.x - 5.0).abs() < f64::EPSILON);
        assert_eq!(shape.id(), id);
    }

    #[test]
    fn test_replace_with_stale_id_is_ignored() {
        let mut drawing = Drawing::new();
        let ghost = Shape::new(
            7,
            ShapeKind::Line,
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
        );
        drawing.replace(ghost);
        assert!(drawing.is_empty());
    }

    #[test]
    fn test_json_round_trip() {
        let mut drawing = Drawing::new();
        drawing.add_shape(
            ShapeKind::Rectangle,
            Point::new(10.0, 10.0),
            Point::new(50.0, 50.0),
        );
        let json = drawing.to_json().unwrap();
        let restored = Drawing::from_json(&json).unwrap();
        assert_eq!(restored, drawing);
    }
}
