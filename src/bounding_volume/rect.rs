//! Axis-Aligned bounding rectangle.

use crate::math::{self, Point, Real, Vector};
use crate::shape::{Line, Polygon, Segment};
use num::Bounded;

/// An axis-aligned rectangle, defined by its minimum and maximum corners.
///
/// A `Rect` plays two roles: it is the bounding volume every shape computes,
/// and it is itself a first-class queryable shape — a closed convex loop of
/// four segments — so every ring algorithm accepts it directly.
///
/// A `Rect` is never "empty" as a shape: even when `min == max` it represents
/// a point-rect that still answers the full query surface. This is a
/// deliberate policy, distinct from the emptiness of degenerate point series.
///
/// Invariant: `min.x <= max.x` and `min.y <= max.y`, guaranteed by
/// construction. A `Rect` is immutable; [`Rect::move_by`] returns a new one.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Rect {
    /// The corner with the smallest coordinates on each axis.
    pub min: Point,
    /// The corner with the largest coordinates on each axis.
    pub max: Point,
}

impl Rect {
    /// Creates a new rectangle from two corner points.
    ///
    /// The corners may be given in any order; they are sorted per axis so the
    /// `min <= max` invariant always holds.
    #[inline]
    pub fn new(a: Point, b: Point) -> Rect {
        Rect {
            min: Point::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Computes the rectangle enclosing all the given points.
    ///
    /// Returns `None` if the iterator is empty.
    pub fn from_points<'a, I>(pts: I) -> Option<Rect>
    where
        I: IntoIterator<Item = &'a Point>,
    {
        let mut min = Point::max_value();
        let mut max = Point::min_value();
        let mut any = false;

        for pt in pts {
            any = true;
            min = min.inf(pt);
            max = max.sup(pt);
        }

        any.then_some(Rect { min, max })
    }

    /// The center of this rectangle.
    #[inline]
    pub fn center(&self) -> Point {
        na::center(&self.min, &self.max)
    }

    /// The extent of this rectangle along the `x` axis.
    #[inline]
    pub fn width(&self) -> Real {
        self.max.x - self.min.x
    }

    /// The extent of this rectangle along the `y` axis.
    #[inline]
    pub fn height(&self) -> Real {
        self.max.y - self.min.y
    }

    /// The area of this rectangle.
    #[inline]
    pub fn area(&self) -> Real {
        self.width() * self.height()
    }

    /// Enlarges this rectangle so it also contains the point `pt`.
    #[inline]
    pub fn expanded(&self, pt: &Point) -> Rect {
        Rect {
            min: self.min.inf(pt),
            max: self.max.sup(pt),
        }
    }

    /// The smallest rectangle containing both `self` and `other`.
    #[inline]
    pub fn merged(&self, other: &Rect) -> Rect {
        Rect {
            min: self.min.inf(&other.min),
            max: self.max.sup(&other.max),
        }
    }

    /// Returns this rectangle translated by `(dx, dy)`.
    #[inline]
    pub fn move_by(&self, dx: Real, dy: Real) -> Rect {
        let delta = Vector::new(dx, dy);
        Rect {
            min: self.min + delta,
            max: self.max + delta,
        }
    }

    /// Is this rectangle a valid longitude/latitude region?
    #[inline]
    pub fn valid(&self) -> bool {
        math::point_valid(&self.min) && math::point_valid(&self.max)
    }

    /// Does this rectangle contain the point `pt`?
    ///
    /// Boundary points count as contained, within epsilon tolerance.
    #[inline]
    pub fn contains_point(&self, pt: &Point) -> bool {
        math::float_gte(pt.x, self.min.x)
            && math::float_lte(pt.x, self.max.x)
            && math::float_gte(pt.y, self.min.y)
            && math::float_lte(pt.y, self.max.y)
    }

    /// Does this rectangle intersect the point `pt`?
    #[inline]
    pub fn intersects_point(&self, pt: &Point) -> bool {
        self.contains_point(pt)
    }

    /// Does this rectangle fully contain `other`?
    #[inline]
    pub fn contains_rect(&self, other: &Rect) -> bool {
        self.contains_point(&other.min) && self.contains_point(&other.max)
    }

    /// Does this rectangle intersect `other`?
    #[inline]
    pub fn intersects_rect(&self, other: &Rect) -> bool {
        math::float_gte(other.max.x, self.min.x)
            && math::float_lte(other.min.x, self.max.x)
            && math::float_gte(other.max.y, self.min.y)
            && math::float_lte(other.min.y, self.max.y)
    }

    /// Does this rectangle fully contain the segment `seg`?
    #[inline]
    pub fn contains_segment(&self, seg: &Segment) -> bool {
        self.contains_point(&seg.a) && self.contains_point(&seg.b)
    }

    /// Does this rectangle fully contain the line `line`?
    pub fn contains_line(&self, line: &Line) -> bool {
        !line.is_empty() && self.contains_rect(&line.rect())
    }

    /// Does this rectangle intersect the line `line`?
    pub fn intersects_line(&self, line: &Line) -> bool {
        line.intersects_rect(self)
    }

    /// Does this rectangle fully contain the polygon `poly`?
    pub fn contains_polygon(&self, poly: &Polygon) -> bool {
        !poly.is_empty() && self.contains_rect(&poly.rect())
    }

    /// Does this rectangle intersect the polygon `poly`?
    pub fn intersects_polygon(&self, poly: &Polygon) -> bool {
        poly.intersects_rect(self)
    }

    /// Clips `seg` to this rectangle, `None` when nothing of it remains.
    pub fn clip_segment(&self, seg: &Segment) -> Option<Segment> {
        let (clipped, rejected) = crate::query::clip_segment(seg, self);
        if rejected {
            None
        } else {
            Some(clipped)
        }
    }

    /// The number of points on the boundary loop of this rectangle.
    ///
    /// The loop is stated with an explicit closing point, so this is always 5.
    #[inline]
    pub fn num_points(&self) -> usize {
        5
    }

    /// The `index`-th point of the boundary loop, counterclockwise from `min`.
    ///
    /// Panics if `index > 4`.
    pub fn point_at(&self, index: usize) -> Point {
        match index {
            0 | 4 => self.min,
            1 => Point::new(self.max.x, self.min.y),
            2 => self.max,
            3 => Point::new(self.min.x, self.max.y),
            _ => panic!("rect point index {} out of range", index),
        }
    }

    /// The number of segments on the boundary loop of this rectangle.
    #[inline]
    pub fn num_segments(&self) -> usize {
        4
    }

    /// The `index`-th boundary segment, counterclockwise from `min`.
    ///
    /// Panics if `index > 3`.
    #[inline]
    pub fn segment_at(&self, index: usize) -> Segment {
        Segment::new(self.point_at(index), self.point_at(index + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_are_normalized() {
        let r = Rect::new(Point::new(10.0, 0.0), Point::new(0.0, 10.0));
        assert_eq!(r.min, Point::new(0.0, 0.0));
        assert_eq!(r.max, Point::new(10.0, 10.0));
    }

    #[test]
    fn boundary_loop_is_counterclockwise() {
        let r = Rect::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        assert_eq!(r.point_at(0), r.point_at(4));
        assert_eq!(r.point_at(1), Point::new(10.0, 0.0));
        assert_eq!(r.point_at(3), Point::new(0.0, 10.0));
        assert_eq!(r.segment_at(3).b, r.point_at(0));
    }

    #[test]
    fn containment_is_epsilon_tolerant() {
        let r = Rect::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        assert!(r.contains_point(&Point::new(10.0 + 1e-9, 5.0)));
        assert!(!r.contains_point(&Point::new(10.0 + 1e-7, 5.0)));
        assert!(r.intersects_rect(&Rect::new(
            Point::new(10.0, 10.0),
            Point::new(20.0, 20.0)
        )));
    }

    #[test]
    fn point_rect_has_area_zero_but_full_surface() {
        let r = Rect::new(Point::new(5.0, 5.0), Point::new(5.0, 5.0));
        assert_eq!(r.area(), 0.0);
        assert!(r.contains_point(&Point::new(5.0, 5.0)));
        assert_eq!(r.num_segments(), 4);
    }

    #[test]
    fn from_points_folds_min_max() {
        let pts = [
            Point::new(1.0, 2.0),
            Point::new(-1.0, 4.0),
            Point::new(0.0, 0.0),
        ];
        let r = Rect::from_points(pts.iter()).unwrap();
        assert_eq!(r.min, Point::new(-1.0, 0.0));
        assert_eq!(r.max, Point::new(1.0, 4.0));
        assert!(Rect::from_points(std::iter::empty::<&Point>()).is_none());
    }
}
