//! Ordered point sequences backing rings and lines.

use crate::bounding_volume::Rect;
use crate::math::{self, Point, Real, Vector};
use crate::partitioning::SegmentTree;
use crate::shape::Segment;

/// Number of points from which a series builds a segment index.
///
/// Below this, a linear scan over the segments beats the tree walk.
pub const INDEX_THRESHOLD: usize = 64;

/// The surface the ring algorithms need from any closed loop.
///
/// Both [`PointSeries`] and [`Rect`] implement this, which is how every
/// rect-vs-ring predicate reuses the ring algorithms instead of duplicating
/// them: a rect is just a 4-segment closed convex ring.
pub trait RingShape {
    /// The bounding rectangle of the loop.
    fn rect(&self) -> Rect;
    /// Is the loop convex?
    fn convex(&self) -> bool;
    /// Does the loop wind clockwise?
    fn clockwise(&self) -> bool;
    /// Does the loop have too few points to be a shape?
    fn is_empty(&self) -> bool;
    /// Number of stored points.
    fn num_points(&self) -> usize;
    /// The `index`-th stored point. Panics out of range.
    fn point_at(&self, index: usize) -> Point;
    /// Number of segments, closure-aware.
    fn num_segments(&self) -> usize;
    /// The `index`-th segment, closure-aware. Panics out of range.
    fn segment_at(&self, index: usize) -> Segment;
    /// Visits every segment whose bounding box intersects `rect`; the
    /// visitor returns `false` to stop early. Returns `false` iff stopped.
    fn search(&self, rect: &Rect, visitor: &mut dyn FnMut(&Segment, usize) -> bool) -> bool;
}

/// An immutable ordered point sequence, open (line) or closed (ring).
///
/// The bounding rect, convexity and winding direction are computed once at
/// construction, along with an optional bounding-box index over the segments
/// for sequences of [`INDEX_THRESHOLD`] points or more. Nothing is ever
/// recomputed or invalidated afterwards; [`PointSeries::move_by`] returns a
/// fresh series.
///
/// A closed series tolerates both storage conventions for the closing point:
/// with the first point repeated at the end there are `len - 1` segments,
/// without it there are `len`, and the closing segment is never counted
/// twice.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct PointSeries {
    points: Vec<Point>,
    closed: bool,
    rect: Rect,
    convex: bool,
    clockwise: bool,
    #[cfg_attr(feature = "serde-serialize", serde(skip))]
    index: Option<SegmentTree>,
}

impl PartialEq for PointSeries {
    fn eq(&self, other: &Self) -> bool {
        self.closed == other.closed && self.points == other.points
    }
}

impl PointSeries {
    /// Creates a series, taking ownership of the point list.
    ///
    /// A segment index is built eagerly when the list has at least
    /// [`INDEX_THRESHOLD`] points.
    pub fn new(points: Vec<Point>, closed: bool) -> PointSeries {
        let indexed = points.len() >= INDEX_THRESHOLD;
        Self::with_index(points, closed, indexed)
    }

    /// Creates a series that never carries a segment index, whatever its
    /// size. Searches fall back to a linear scan.
    pub fn new_unindexed(points: Vec<Point>, closed: bool) -> PointSeries {
        Self::with_index(points, closed, false)
    }

    fn with_index(points: Vec<Point>, closed: bool, indexed: bool) -> PointSeries {
        let (rect, convex, clockwise) = derive(&points);
        let mut series = PointSeries {
            points,
            closed,
            rect,
            convex,
            clockwise,
            index: None,
        };
        if indexed {
            let tree = SegmentTree::build(
                (0..series.num_segments()).map(|i| (i, series.segment_at(i).rect())),
            );
            series.index = Some(tree);
        }
        series
    }

    /// The stored points.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Is this series closed (a ring) rather than open (a line)?
    #[inline]
    pub fn closed(&self) -> bool {
        self.closed
    }

    /// Does this series carry a segment index?
    #[inline]
    pub fn is_indexed(&self) -> bool {
        self.index.is_some()
    }

    /// Are all points valid longitude/latitude positions?
    pub fn valid(&self) -> bool {
        self.points.iter().all(math::point_valid)
    }

    /// Returns a copy of this series translated by `(dx, dy)`, with every
    /// derived field recomputed. The index is rebuilt iff this series has
    /// one.
    pub fn move_by(&self, dx: Real, dy: Real) -> PointSeries {
        let delta = Vector::new(dx, dy);
        let points = self.points.iter().map(|pt| pt + delta).collect();
        Self::with_index(points, self.closed, self.index.is_some())
    }
}

impl RingShape for PointSeries {
    #[inline]
    fn rect(&self) -> Rect {
        self.rect
    }

    #[inline]
    fn convex(&self) -> bool {
        self.convex
    }

    #[inline]
    fn clockwise(&self) -> bool {
        self.clockwise
    }

    fn is_empty(&self) -> bool {
        if self.closed {
            self.points.len() < 3
        } else {
            self.points.len() < 2
        }
    }

    #[inline]
    fn num_points(&self) -> usize {
        self.points.len()
    }

    #[inline]
    fn point_at(&self, index: usize) -> Point {
        self.points[index]
    }

    fn num_segments(&self) -> usize {
        let n = self.points.len();
        if self.closed {
            if n < 3 {
                0
            } else if math::point_eq(&self.points[n - 1], &self.points[0]) {
                // Stored closing point: the wrap segment would be a
                // duplicate of the last stored one.
                n - 1
            } else {
                n
            }
        } else if n < 2 {
            0
        } else {
            n - 1
        }
    }

    fn segment_at(&self, index: usize) -> Segment {
        assert!(
            index < self.num_segments(),
            "segment index {} out of range",
            index
        );
        let j = if index + 1 == self.points.len() {
            0
        } else {
            index + 1
        };
        Segment::new(self.points[index], self.points[j])
    }

    fn search(&self, rect: &Rect, visitor: &mut dyn FnMut(&Segment, usize) -> bool) -> bool {
        match &self.index {
            Some(tree) => tree.search(rect, |index| {
                let seg = self.segment_at(index);
                if seg.rect().intersects_rect(rect) {
                    visitor(&seg, index)
                } else {
                    true
                }
            }),
            None => {
                for index in 0..self.num_segments() {
                    let seg = self.segment_at(index);
                    if seg.rect().intersects_rect(rect) && !visitor(&seg, index) {
                        return false;
                    }
                }
                true
            }
        }
    }
}

impl RingShape for Rect {
    #[inline]
    fn rect(&self) -> Rect {
        *self
    }

    #[inline]
    fn convex(&self) -> bool {
        true
    }

    #[inline]
    fn clockwise(&self) -> bool {
        // The boundary loop runs counterclockwise from `min`.
        false
    }

    #[inline]
    fn is_empty(&self) -> bool {
        // A rect is never empty as a shape; a point-rect still has a
        // boundary loop and answers the full query surface.
        false
    }

    #[inline]
    fn num_points(&self) -> usize {
        self.num_points()
    }

    #[inline]
    fn point_at(&self, index: usize) -> Point {
        self.point_at(index)
    }

    #[inline]
    fn num_segments(&self) -> usize {
        self.num_segments()
    }

    #[inline]
    fn segment_at(&self, index: usize) -> Segment {
        self.segment_at(index)
    }

    fn search(&self, rect: &Rect, visitor: &mut dyn FnMut(&Segment, usize) -> bool) -> bool {
        for index in 0..4 {
            let seg = self.segment_at(index);
            if seg.rect().intersects_rect(rect) && !visitor(&seg, index) {
                return false;
            }
        }
        true
    }
}

/// One pass over the points computing the bounding rect, convexity and
/// winding direction. Convexity tracks the sign of consecutive direction
/// cross products over the wrapped loop (last -> first -> second); winding
/// uses the shoelace summation, positive meaning clockwise.
fn derive(points: &[Point]) -> (Rect, bool, bool) {
    let n = points.len();
    if n == 0 {
        let origin = Point::origin();
        return (Rect::new(origin, origin), false, false);
    }

    let mut min = points[0];
    let mut max = points[0];
    let mut convex = true;
    let mut dir = 0i8;
    let mut shoelace = 0.0;

    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        let c = points[(i + 2) % n];

        min = min.inf(&a);
        max = max.sup(&a);
        shoelace += (b.x - a.x) * (b.y + a.y);

        if convex {
            let cross = (b.x - a.x) * (c.y - b.y) - (b.y - a.y) * (c.x - b.x);
            if math::float_gt(cross, 0.0) {
                if dir == -1 {
                    convex = false;
                }
                dir = 1;
            } else if math::float_lt(cross, 0.0) {
                if dir == 1 {
                    convex = false;
                }
                dir = -1;
            }
        }
    }

    (Rect::new(min, max), convex, shoelace > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn octagon() -> Vec<Point> {
        vec![
            Point::new(3.0, 0.0),
            Point::new(7.0, 0.0),
            Point::new(10.0, 3.0),
            Point::new(10.0, 7.0),
            Point::new(7.0, 10.0),
            Point::new(3.0, 10.0),
            Point::new(0.0, 7.0),
            Point::new(0.0, 3.0),
            Point::new(3.0, 0.0),
        ]
    }

    fn concave_u() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(6.0, 10.0),
            Point::new(6.0, 4.0),
            Point::new(4.0, 4.0),
            Point::new(4.0, 10.0),
            Point::new(0.0, 10.0),
        ]
    }

    #[test]
    fn derived_fields_for_octagon() {
        let s = PointSeries::new(octagon(), true);
        assert!(s.convex());
        assert!(!s.clockwise());
        assert_eq!(
            s.rect(),
            Rect::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0))
        );
        assert!(!s.is_empty());
    }

    #[test]
    fn concave_and_winding_detection() {
        let s = PointSeries::new(concave_u(), true);
        assert!(!s.convex());
        assert!(!s.clockwise());

        let mut reversed = concave_u();
        reversed.reverse();
        let s = PointSeries::new(reversed, true);
        assert!(!s.convex());
        assert!(s.clockwise());
    }

    #[test]
    fn closing_point_never_double_counted() {
        // Stored closing point: 9 points, 8 segments.
        let with_close = PointSeries::new(octagon(), true);
        assert_eq!(with_close.num_segments(), 8);

        // Implicit closure: 8 points, still 8 segments, last one wrapping.
        let mut pts = octagon();
        let _ = pts.pop();
        let without_close = PointSeries::new(pts, true);
        assert_eq!(without_close.num_segments(), 8);
        let last = without_close.segment_at(7);
        assert_eq!(last.b, Point::new(3.0, 0.0));
    }

    #[test]
    fn open_series_has_no_closing_segment() {
        let s = PointSeries::new(
            vec![
                Point::new(0.0, 0.0),
                Point::new(5.0, 5.0),
                Point::new(10.0, 0.0),
            ],
            false,
        );
        assert_eq!(s.num_segments(), 2);
        assert_eq!(s.segment_at(1).b, Point::new(10.0, 0.0));
    }

    #[test]
    fn emptiness_thresholds() {
        assert!(PointSeries::new(vec![], true).is_empty());
        assert!(PointSeries::new(octagon()[..2].to_vec(), true).is_empty());
        assert!(!PointSeries::new(octagon()[..3].to_vec(), true).is_empty());
        assert!(PointSeries::new(octagon()[..1].to_vec(), false).is_empty());
        assert!(!PointSeries::new(octagon()[..2].to_vec(), false).is_empty());
    }

    #[test]
    #[should_panic]
    fn segment_at_out_of_range_panics() {
        let s = PointSeries::new(octagon(), true);
        let _ = s.segment_at(8);
    }

    fn big_ring(n: usize) -> Vec<Point> {
        // A regular n-gon, large enough to get indexed.
        (0..n)
            .map(|i| {
                let t = (i as Real) / (n as Real) * std::f64::consts::TAU;
                Point::new(t.cos() * 100.0, t.sin() * 100.0)
            })
            .collect()
    }

    #[test]
    fn indexed_and_linear_search_agree() {
        let pts = big_ring(256);
        let indexed = PointSeries::new(pts.clone(), true);
        let linear = PointSeries::new_unindexed(pts, true);
        assert!(indexed.is_indexed());
        assert!(!linear.is_indexed());

        let query = Rect::new(Point::new(40.0, -30.0), Point::new(110.0, 30.0));
        let mut from_tree = vec![];
        let mut from_scan = vec![];
        assert!(indexed.search(&query, &mut |_, i| {
            from_tree.push(i);
            true
        }));
        assert!(linear.search(&query, &mut |_, i| {
            from_scan.push(i);
            true
        }));
        from_tree.sort_unstable();
        assert!(!from_scan.is_empty());
        assert_eq!(from_tree, from_scan);
    }

    #[test]
    fn move_round_trip_restores_points() {
        let s = PointSeries::new(octagon(), true);
        let moved = s.move_by(12.5, -3.25).move_by(-12.5, 3.25);
        for (a, b) in s.points().iter().zip(moved.points()) {
            assert!(math::point_eq(a, b));
        }
        assert_eq!(moved.rect(), s.rect());
    }

    #[test]
    fn move_preserves_index_presence() {
        let big = PointSeries::new(big_ring(128), true);
        assert!(big.move_by(1.0, 1.0).is_indexed());
        let small = PointSeries::new(octagon(), true);
        assert!(!small.move_by(1.0, 1.0).is_indexed());
    }
}
