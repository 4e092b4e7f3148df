//! A closed linear loop.

use crate::bounding_volume::Rect;
use crate::math::{self, Point, Real};
use crate::query::ring::{
    ring_contains_line, ring_contains_point, ring_contains_ring, ring_contains_segment,
    ring_intersects_line, ring_intersects_ring, ring_intersects_segment,
};
use crate::shape::{Line, PointSeries, RingShape, Segment, ShapeError};

/// A closed point loop representing one boundary, exterior or hole.
///
/// A ring with fewer than 3 points is empty and answers `false` to every
/// containment and intersection query.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Ring(PointSeries);

impl Ring {
    /// Creates a ring, taking ownership of the point list.
    ///
    /// The closing point may or may not be repeated at the end; both layouts
    /// produce the same loop. Degenerate input yields an empty ring rather
    /// than an error.
    pub fn new(points: Vec<Point>) -> Ring {
        Ring(PointSeries::new(points, true))
    }

    /// Creates a ring that never carries a segment index.
    pub fn new_unindexed(points: Vec<Point>) -> Ring {
        Ring(PointSeries::new_unindexed(points, true))
    }

    /// Creates a ring, rejecting invalid input instead of falling back to
    /// empty semantics. Coordinates must be valid longitude/latitude
    /// positions.
    pub fn try_new(points: Vec<Point>) -> Result<Ring, ShapeError> {
        if points.len() < 3 {
            return Err(ShapeError::NotEnoughPoints {
                shape: "ring",
                expected: 3,
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

    /// Is this ring convex?
    #[inline]
    pub fn convex(&self) -> bool {
        self.0.convex()
    }

    /// Does this ring wind clockwise?
    #[inline]
    pub fn clockwise(&self) -> bool {
        self.0.clockwise()
    }

    /// Does this ring have too few points to be a shape?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Are all points valid longitude/latitude positions?
    #[inline]
    pub fn valid(&self) -> bool {
        self.0.valid()
    }

    /// Returns this ring translated by `(dx, dy)`.
    #[inline]
    pub fn move_by(&self, dx: Real, dy: Real) -> Ring {
        Ring(self.0.move_by(dx, dy))
    }

    /// Is `pt` inside this ring?
    #[inline]
    pub fn contains_point(&self, pt: &Point, allow_on_edge: bool) -> bool {
        ring_contains_point(&self.0, pt, allow_on_edge).hit
    }

    /// Does this ring intersect the point `pt`?
    #[inline]
    pub fn intersects_point(&self, pt: &Point, allow_on_edge: bool) -> bool {
        self.contains_point(pt, allow_on_edge)
    }

    /// Does this ring fully contain the segment `seg`?
    #[inline]
    pub fn contains_segment(&self, seg: &Segment, allow_on_edge: bool) -> bool {
        ring_contains_segment(&self.0, seg, allow_on_edge)
    }

    /// Does this ring intersect the segment `seg`?
    #[inline]
    pub fn intersects_segment(&self, seg: &Segment, allow_on_edge: bool) -> bool {
        ring_intersects_segment(&self.0, seg, allow_on_edge)
    }

    /// Does this ring fully contain the loop `other`?
    #[inline]
    pub fn contains_ring<R: RingShape + ?Sized>(&self, other: &R, allow_on_edge: bool) -> bool {
        ring_contains_ring(&self.0, other, allow_on_edge)
    }

    /// Does this ring intersect the loop `other`?
    #[inline]
    pub fn intersects_ring<R: RingShape + ?Sized>(&self, other: &R, allow_on_edge: bool) -> bool {
        ring_intersects_ring(&self.0, other, allow_on_edge)
    }

    /// Does this ring fully contain the rectangle `rect`?
    #[inline]
    pub fn contains_rect(&self, rect: &Rect, allow_on_edge: bool) -> bool {
        self.contains_ring(rect, allow_on_edge)
    }

    /// Does this ring intersect the rectangle `rect`?
    #[inline]
    pub fn intersects_rect(&self, rect: &Rect, allow_on_edge: bool) -> bool {
        self.intersects_ring(rect, allow_on_edge)
    }

    /// Does this ring fully contain the line `line`?
    #[inline]
    pub fn contains_line(&self, line: &Line, allow_on_edge: bool) -> bool {
        ring_contains_line(&self.0, line.series(), allow_on_edge)
    }

    /// Does this ring intersect the line `line`?
    #[inline]
    pub fn intersects_line(&self, line: &Line, allow_on_edge: bool) -> bool {
        ring_intersects_line(&self.0, line.series(), allow_on_edge)
    }
}

impl RingShape for Ring {
    #[inline]
    fn rect(&self) -> Rect {
        self.0.rect()
    }

    #[inline]
    fn convex(&self) -> bool {
        self.0.convex()
    }

    #[inline]
    fn clockwise(&self) -> bool {
        self.0.clockwise()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    fn num_points(&self) -> usize {
        self.0.num_points()
    }

    #[inline]
    fn point_at(&self, index: usize) -> Point {
        self.0.point_at(index)
    }

    #[inline]
    fn num_segments(&self) -> usize {
        self.0.num_segments()
    }

    #[inline]
    fn segment_at(&self, index: usize) -> Segment {
        self.0.segment_at(index)
    }

    #[inline]
    fn search(&self, rect: &Rect, visitor: &mut dyn FnMut(&Segment, usize) -> bool) -> bool {
        self.0.search(rect, visitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_new_rejects_short_input() {
        let err = Ring::try_new(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]).unwrap_err();
        assert_eq!(
            err,
            ShapeError::NotEnoughPoints {
                shape: "ring",
                expected: 3,
                got: 2
            }
        );
        assert!(Ring::try_new(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
        ])
        .is_ok());
    }

    #[test]
    fn try_new_rejects_out_of_range_coordinates() {
        let err = Ring::try_new(vec![
            Point::new(0.0, 0.0),
            Point::new(181.0, 0.0),
            Point::new(0.0, 1.0),
        ])
        .unwrap_err();
        assert_eq!(err, ShapeError::InvalidCoordinates);
    }

    #[test]
    fn infallible_constructor_yields_empty_semantics() {
        let ring = Ring::new(vec![Point::new(0.0, 0.0)]);
        assert!(ring.is_empty());
        assert!(!ring.contains_point(&Point::new(0.0, 0.0), true));
    }
}
