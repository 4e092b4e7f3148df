//! An open polyline.

use crate::bounding_volume::Rect;
use crate::math::{self, Point, Real};
use crate::query::ring::ring_intersects_line;
use crate::shape::{PointSeries, Polygon, RingShape, Segment, ShapeError};

/// An open ordered point path.
///
/// A line with fewer than 2 points is empty and answers `false` to every
/// containment and intersection query.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Line(PointSeries);

impl Line {
    /// Creates a line, taking ownership of the point list.
    ///
    /// Degenerate input yields an empty line rather than an error.
    pub fn new(points: Vec<Point>) -> Line {
        Line(PointSeries::new(points, false))
    }

    /// Creates a line that never carries a segment index.
    pub fn new_unindexed(points: Vec<Point>) -> Line {
        Line(PointSeries::new_unindexed(points, false))
    }

    /// Creates a line, rejecting invalid input instead of falling back to
    /// empty semantics. Coordinates must be valid longitude/latitude
    /// positions.
    pub fn try_new(points: Vec<Point>) -> Result<Line, ShapeError> {
        if points.len() < 2 {
            return Err(ShapeError::NotEnoughPoints {
                shape: "line",
                expected: 2,
                got: points.len(),
            });
        }
        if !points.iter().all(math::point_valid) {
            return Err(ShapeError::InvalidCoordinates);
        }
        Ok(Self::new(points))
    }

    /// The backing point series.
    #[inline]
    pub fn series(&self) -> &PointSeries {
        &self.0
    }

    /// The stored points.
    #[inline]
    pub fn points(&self) -> &[Point] {
        self.0.points()
    }

    /// The bounding rectangle.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.0.rect()
    }

    /// Does this line have too few points to be a shape?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Are all points valid longitude/latitude positions?
    #[inline]
    pub fn valid(&self) -> bool {
        self.0.valid()
    }

    /// Number of stored points.
    #[inline]
    pub fn num_points(&self) -> usize {
        self.0.num_points()
    }

    /// The `index`-th stored point. Panics out of range.
    #[inline]
    pub fn point_at(&self, index: usize) -> Point {
        self.0.point_at(index)
    }

    /// Number of segments along the path.
    #[inline]
    pub fn num_segments(&self) -> usize {
        self.0.num_segments()
    }

    /// The `index`-th segment. Panics out of range.
    #[inline]
    pub fn segment_at(&self, index: usize) -> Segment {
        self.0.segment_at(index)
    }

    /// Returns this line translated by `(dx, dy)`.
    #[inline]
    pub fn move_by(&self, dx: Real, dy: Real) -> Line {
        Line(self.0.move_by(dx, dy))
    }

    /// Does `pt` lie on this line?
    pub fn contains_point(&self, pt: &Point) -> bool {
        if self.is_empty() {
            return false;
        }
        let mut on = false;
        let _ = self.0.search(&Rect::new(*pt, *pt), &mut |seg, _| {
            if seg.raycast(pt).on {
                on = true;
                return false;
            }
            true
        });
        on
    }

    /// Does this line intersect the point `pt`? Identical to containment.
    #[inline]
    pub fn intersects_point(&self, pt: &Point) -> bool {
        self.contains_point(pt)
    }

    /// Does this line fully contain the segment `seg`?
    ///
    /// True only when the segment lies within one of this line's own
    /// segments.
    pub fn contains_segment(&self, seg: &Segment) -> bool {
        if self.is_empty() {
            return false;
        }
        !self.0.search(&seg.rect(), &mut |other, _| {
            !other.contains_segment(seg)
        })
    }

    /// Does this line intersect the segment `seg`?
    pub fn intersects_segment(&self, seg: &Segment) -> bool {
        if self.is_empty() {
            return false;
        }
        !self.0.search(&seg.rect(), &mut |other, _| {
            !other.intersects_segment(seg)
        })
    }

    /// Does this line fully contain `other`?
    ///
    /// The walk keeps a single cursor into this line's segments: each of
    /// `other`'s segments must fit the current segment, or the cursor moves
    /// forward or backward by exactly one when `other`'s path carries over
    /// onto an adjacent segment. Any other divergence fails containment.
    pub fn contains_line(&self, other: &Line) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        if !self.rect().contains_rect(&other.rect()) {
            return false;
        }

        let n = self.0.num_segments();
        let m = other.0.num_segments();
        let first = other.0.segment_at(0);
        let mut cursor = match (0..n).find(|&i| self.0.segment_at(i).contains_segment(&first)) {
            Some(i) => i,
            None => return false,
        };

        for j in 1..m {
            let seg = other.0.segment_at(j);
            if self.0.segment_at(cursor).contains_segment(&seg) {
                continue;
            }
            if cursor + 1 < n && self.0.segment_at(cursor + 1).contains_segment(&seg) {
                cursor += 1;
                continue;
            }
            if cursor > 0 && self.0.segment_at(cursor - 1).contains_segment(&seg) {
                cursor -= 1;
                continue;
            }
            return false;
        }
        true
    }

    /// Does this line intersect `other`?
    pub fn intersects_line(&self, other: &Line) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        if !self.rect().intersects_rect(&other.rect()) {
            return false;
        }
        for i in 0..other.0.num_segments() {
            if self.intersects_segment(&other.0.segment_at(i)) {
                return true;
            }
        }
        false
    }

    /// Does this line fully contain the rectangle `rect`?
    ///
    /// Only a rectangle degenerate to a point or a straight segment can fit
    /// in a line.
    pub fn contains_rect(&self, rect: &Rect) -> bool {
        if self.is_empty() {
            return false;
        }
        if math::float_ne(rect.min.x, rect.max.x) && math::float_ne(rect.min.y, rect.max.y) {
            return false;
        }
        self.contains_line(&Line::new(vec![rect.min, rect.max]))
    }

    /// Does this line intersect the rectangle `rect`?
    pub fn intersects_rect(&self, rect: &Rect) -> bool {
        ring_intersects_line(rect, &self.0, true)
    }

    /// Does this line fully contain the polygon `poly`?
    ///
    /// Only a polygon that fits in a straight vertical or horizontal stroke
    /// can be contained by a line.
    pub fn contains_polygon(&self, poly: &Polygon) -> bool {
        if self.is_empty() || poly.is_empty() {
            return false;
        }
        self.contains_rect(&poly.rect())
    }

    /// Does this line intersect the polygon `poly`?
    #[inline]
    pub fn intersects_polygon(&self, poly: &Polygon) -> bool {
        poly.intersects_line(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(pts: &[(Real, Real)]) -> Line {
        Line::new(pts.iter().map(|&(x, y)| Point::new(x, y)).collect())
    }

    #[test]
    fn point_on_path() {
        let l = line(&[(0.0, 0.0), (5.0, 5.0), (10.0, 0.0)]);
        assert!(l.contains_point(&Point::new(2.5, 2.5)));
        assert!(l.contains_point(&Point::new(5.0, 5.0)));
        assert!(!l.contains_point(&Point::new(5.0, 4.0)));
    }

    #[test]
    fn contains_line_straight_walk() {
        let l = line(&[(0.0, 0.0), (5.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
        // Each sub-segment stays within one segment of `l`, stepping the
        // cursor forward across the shared vertices.
        let sub = line(&[
            (1.0, 0.0),
            (4.0, 0.0),
            (5.0, 0.0),
            (8.0, 0.0),
            (10.0, 0.0),
            (10.0, 3.0),
        ]);
        assert!(l.contains_line(&sub));
    }

    #[test]
    fn contains_line_with_reversal() {
        let l = line(&[(0.0, 0.0), (5.0, 0.0), (10.0, 0.0)]);
        // The path backtracks across the shared vertex onto the previous
        // segment of `l`.
        let back = line(&[(6.0, 0.0), (7.0, 0.0), (5.0, 0.0), (2.0, 0.0)]);
        assert!(l.contains_line(&back));
        // Jumping two segments at once is a divergence.
        let jump = line(&[(6.0, 0.0), (7.0, 0.0), (2.0, 0.0)]);
        assert!(!l.contains_line(&jump));
    }

    #[test]
    fn contains_line_divergence_fails() {
        let l = line(&[(0.0, 0.0), (5.0, 0.0), (10.0, 0.0)]);
        let off = line(&[(1.0, 0.0), (4.0, 1.0)]);
        assert!(!l.contains_line(&off));
    }

    #[test]
    fn line_crossing_and_missing_line() {
        let a = line(&[(0.0, 0.0), (10.0, 10.0)]);
        assert!(a.intersects_line(&line(&[(0.0, 10.0), (10.0, 0.0)])));
        assert!(!a.intersects_line(&line(&[(20.0, 0.0), (30.0, 10.0)])));
    }

    #[test]
    fn rect_queries_need_degenerate_rect_for_containment() {
        let l = line(&[(0.0, 0.0), (10.0, 0.0)]);
        let flat = Rect::new(Point::new(2.0, 0.0), Point::new(8.0, 0.0));
        let fat = Rect::new(Point::new(2.0, -1.0), Point::new(8.0, 1.0));
        assert!(l.contains_rect(&flat));
        assert!(!l.contains_rect(&fat));
        assert!(l.intersects_rect(&fat));
        assert!(!l.intersects_rect(&Rect::new(
            Point::new(0.0, 5.0),
            Point::new(10.0, 6.0)
        )));
    }

    #[test]
    fn empty_line_answers_false() {
        let empty = Line::new(vec![Point::new(1.0, 1.0)]);
        assert!(empty.is_empty());
        assert!(!empty.contains_point(&Point::new(1.0, 1.0)));
        assert!(!empty.intersects_line(&line(&[(0.0, 0.0), (2.0, 2.0)])));
        assert!(Line::try_new(vec![Point::new(1.0, 1.0)]).is_err());
    }
}
