//! A tagged union over every shape kind.

use crate::bounding_volume::Rect;
use crate::math::{self, Point, Real};
use crate::query::distance;
use crate::shape::{Line, Polygon};

/// Any of the supported shape kinds, for heterogeneous collections.
///
/// A point with a NaN coordinate is the empty-geometry sentinel; it answers
/// `false` to every predicate.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    /// A single position.
    Point(Point),
    /// An axis-aligned rectangle.
    Rect(Rect),
    /// An open polyline.
    Line(Line),
    /// A polygon with optional holes.
    Polygon(Polygon),
}

impl Geometry {
    /// The empty geometry.
    pub fn empty() -> Geometry {
        Geometry::Point(Point::new(Real::NAN, Real::NAN))
    }

    /// Does this geometry hold no usable shape?
    pub fn is_empty(&self) -> bool {
        match self {
            // NaN slips through every tolerant comparison, so it must be
            // rejected before the predicates run.
            Geometry::Point(pt) => pt.x.is_nan() || pt.y.is_nan(),
            Geometry::Rect(_) => false,
            Geometry::Line(line) => line.is_empty(),
            Geometry::Polygon(poly) => poly.is_empty(),
        }
    }

    /// The bounding rectangle, degenerate for a point.
    pub fn rect(&self) -> Rect {
        match self {
            Geometry::Point(pt) => Rect { min: *pt, max: *pt },
            Geometry::Rect(rect) => *rect,
            Geometry::Line(line) => line.rect(),
            Geometry::Polygon(poly) => poly.rect(),
        }
    }

    /// Are all coordinates valid longitude/latitude positions?
    pub fn valid(&self) -> bool {
        match self {
            Geometry::Point(pt) => math::point_valid(pt),
            Geometry::Rect(rect) => rect.valid(),
            Geometry::Line(line) => line.valid(),
            Geometry::Polygon(poly) => poly.valid(),
        }
    }

    /// Returns this geometry translated by `(dx, dy)`.
    pub fn move_by(&self, dx: Real, dy: Real) -> Geometry {
        match self {
            Geometry::Point(pt) => Geometry::Point(Point::new(pt.x + dx, pt.y + dy)),
            Geometry::Rect(rect) => Geometry::Rect(rect.move_by(dx, dy)),
            Geometry::Line(line) => Geometry::Line(line.move_by(dx, dy)),
            Geometry::Polygon(poly) => Geometry::Polygon(poly.move_by(dx, dy)),
        }
    }

    /// Does this geometry fully contain `other`?
    pub fn contains(&self, other: &Geometry) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        match (self, other) {
            (Geometry::Point(pt), other) => point_contains(pt, other),
            (Geometry::Rect(rect), Geometry::Point(pt)) => rect.contains_point(pt),
            (Geometry::Rect(rect), Geometry::Rect(o)) => rect.contains_rect(o),
            (Geometry::Rect(rect), Geometry::Line(line)) => rect.contains_line(line),
            (Geometry::Rect(rect), Geometry::Polygon(poly)) => rect.contains_polygon(poly),
            (Geometry::Line(line), Geometry::Point(pt)) => line.contains_point(pt),
            (Geometry::Line(line), Geometry::Rect(o)) => line.contains_rect(o),
            (Geometry::Line(line), Geometry::Line(o)) => line.contains_line(o),
            (Geometry::Line(line), Geometry::Polygon(poly)) => line.contains_polygon(poly),
            (Geometry::Polygon(poly), Geometry::Point(pt)) => poly.contains_point(pt),
            (Geometry::Polygon(poly), Geometry::Rect(o)) => poly.contains_rect(o),
            (Geometry::Polygon(poly), Geometry::Line(line)) => poly.contains_line(line),
            (Geometry::Polygon(poly), Geometry::Polygon(o)) => poly.contains_polygon(o),
        }
    }

    /// Is this geometry fully contained by `other`?
    #[inline]
    pub fn within(&self, other: &Geometry) -> bool {
        other.contains(self)
    }

    /// Does this geometry intersect `other`?
    pub fn intersects(&self, other: &Geometry) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        match (self, other) {
            (Geometry::Point(pt), other) | (other, Geometry::Point(pt)) => {
                point_intersects(pt, other)
            }
            (Geometry::Rect(rect), Geometry::Rect(o)) => rect.intersects_rect(o),
            (Geometry::Rect(rect), Geometry::Line(line))
            | (Geometry::Line(line), Geometry::Rect(rect)) => line.intersects_rect(rect),
            (Geometry::Rect(rect), Geometry::Polygon(poly))
            | (Geometry::Polygon(poly), Geometry::Rect(rect)) => poly.intersects_rect(rect),
            (Geometry::Line(line), Geometry::Line(o)) => line.intersects_line(o),
            (Geometry::Line(line), Geometry::Polygon(poly))
            | (Geometry::Polygon(poly), Geometry::Line(line)) => poly.intersects_line(line),
            (Geometry::Polygon(poly), Geometry::Polygon(o)) => poly.intersects_polygon(o),
        }
    }

    /// Planar distance between the bounding rectangles, exact for points
    /// and rectangles. NaN when either geometry is empty.
    pub fn distance(&self, other: &Geometry) -> Real {
        if self.is_empty() || other.is_empty() {
            return Real::NAN;
        }
        distance::rect_rect(&self.rect(), &other.rect())
    }
}

// A point contains another geometry only when that geometry collapses to
// the same position, which its bounding rect exposes directly.
fn point_contains(pt: &Point, other: &Geometry) -> bool {
    let rect = other.rect();
    math::point_eq(&rect.min, pt) && math::point_eq(&rect.max, pt)
}

fn point_intersects(pt: &Point, other: &Geometry) -> bool {
    match other {
        Geometry::Point(o) => math::point_eq(pt, o),
        Geometry::Rect(rect) => rect.intersects_point(pt),
        Geometry::Line(line) => line.intersects_point(pt),
        Geometry::Polygon(poly) => poly.intersects_point(pt),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Ring;

    fn square_poly(min: Real, max: Real) -> Geometry {
        Geometry::Polygon(Polygon::new(
            Ring::new(vec![
                Point::new(min, min),
                Point::new(max, min),
                Point::new(max, max),
                Point::new(min, max),
                Point::new(min, min),
            ]),
            vec![],
        ))
    }

    #[test]
    fn empty_answers_false_everywhere() {
        let empty = Geometry::empty();
        let pt = Geometry::Point(Point::new(1.0, 1.0));
        assert!(empty.is_empty());
        assert!(!empty.contains(&pt));
        assert!(!pt.contains(&empty));
        assert!(!empty.intersects(&pt));
        assert!(empty.distance(&pt).is_nan());
    }

    #[test]
    fn point_containment_uses_collapse() {
        let pt = Geometry::Point(Point::new(3.0, 4.0));
        let same = Geometry::Point(Point::new(3.0, 4.0));
        let flat = Geometry::Rect(Rect::new(Point::new(3.0, 4.0), Point::new(3.0, 4.0)));
        let fat = Geometry::Rect(Rect::new(Point::new(2.0, 3.0), Point::new(4.0, 5.0)));
        assert!(pt.contains(&same));
        assert!(pt.contains(&flat));
        assert!(!pt.contains(&fat));
        assert!(fat.contains(&pt));
        assert!(pt.within(&fat));
    }

    #[test]
    fn cross_kind_intersection_is_symmetric() {
        let poly = square_poly(0.0, 10.0);
        let line = Geometry::Line(Line::new(vec![
            Point::new(-5.0, 5.0),
            Point::new(15.0, 5.0),
        ]));
        let rect = Geometry::Rect(Rect::new(Point::new(8.0, 8.0), Point::new(20.0, 20.0)));
        assert!(poly.intersects(&line));
        assert!(line.intersects(&poly));
        assert!(poly.intersects(&rect));
        assert!(rect.intersects(&poly));
        assert!(!line.intersects(&rect));
    }

    #[test]
    fn distance_between_kinds() {
        let a = Geometry::Point(Point::new(0.0, 0.0));
        let b = Geometry::Point(Point::new(3.0, 4.0));
        assert_relative_eq!(a.distance(&b), 5.0);
        let poly = square_poly(6.0, 10.0);
        assert_relative_eq!(a.distance(&poly), 72.0_f64.sqrt());
        assert_relative_eq!(poly.distance(&square_poly(0.0, 7.0)), 0.0);
    }

    #[test]
    fn moved_geometry_keeps_its_kind() {
        let poly = square_poly(0.0, 10.0);
        let moved = poly.move_by(5.0, 5.0);
        assert!(matches!(moved, Geometry::Polygon(_)));
        assert_eq!(
            moved.rect(),
            Rect::new(Point::new(5.0, 5.0), Point::new(15.0, 15.0))
        );
    }
}
