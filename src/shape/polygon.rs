//! A polygon with optional holes.

use crate::bounding_volume::Rect;
use crate::math::{Point, Real};
use crate::query::ring::{
    ring_contains_line, ring_contains_point, ring_contains_ring, ring_intersects_line,
    ring_intersects_ring,
};
use crate::shape::{Line, Ring, RingShape, ShapeError};

/// A polygon: one exterior ring and any number of hole rings.
///
/// Holes are assumed to lie within the exterior and to not overlap each
/// other; the engine does not re-validate this, and query results are
/// undefined when it does not hold.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    exterior: Ring,
    holes: Vec<Ring>,
}

impl Polygon {
    /// Creates a polygon from an exterior ring and hole rings.
    pub fn new(exterior: Ring, holes: Vec<Ring>) -> Polygon {
        if !exterior.is_empty() {
            let rect = exterior.rect();
            for hole in &holes {
                if !hole.is_empty() && !rect.contains_rect(&hole.rect()) {
                    log::debug!("polygon hole extends outside the exterior bounds");
                }
            }
        }
        Polygon { exterior, holes }
    }

    /// Creates a polygon, rejecting an empty exterior or empty holes.
    pub fn try_new(exterior: Ring, holes: Vec<Ring>) -> Result<Polygon, ShapeError> {
        if exterior.is_empty() {
            return Err(ShapeError::NotEnoughPoints {
                shape: "polygon exterior",
                expected: 3,
                got: exterior.num_points(),
            });
        }
        for hole in &holes {
            if hole.is_empty() {
                return Err(ShapeError::NotEnoughPoints {
                    shape: "polygon hole",
                    expected: 3,
                    got: hole.num_points(),
                });
            }
        }
        Ok(Self::new(exterior, holes))
    }

    /// The exterior ring.
    #[inline]
    pub fn exterior(&self) -> &Ring {
        &self.exterior
    }

    /// The hole rings.
    #[inline]
    pub fn holes(&self) -> &[Ring] {
        &self.holes
    }

    /// The bounding rectangle of the exterior.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.exterior.rect()
    }

    /// Does this polygon have an empty exterior?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.exterior.is_empty()
    }

    /// Are all points, exterior and holes, valid longitude/latitude
    /// positions?
    pub fn valid(&self) -> bool {
        self.exterior.valid() && self.holes.iter().all(Ring::valid)
    }

    /// Returns this polygon translated by `(dx, dy)`.
    pub fn move_by(&self, dx: Real, dy: Real) -> Polygon {
        Polygon {
            exterior: self.exterior.move_by(dx, dy),
            holes: self.holes.iter().map(|h| h.move_by(dx, dy)).collect(),
        }
    }

    /// Is `pt` inside this polygon?
    ///
    /// The exterior boundary counts as inside; a hole boundary does not
    /// count as being in the hole, so a point on it is still contained.
    pub fn contains_point(&self, pt: &Point) -> bool {
        if !ring_contains_point(self.exterior.series(), pt, true).hit {
            return false;
        }
        for hole in &self.holes {
            if ring_contains_point(hole.series(), pt, false).hit {
                return false;
            }
        }
        true
    }

    /// Does this polygon intersect the point `pt`? Identical to containment.
    #[inline]
    pub fn intersects_point(&self, pt: &Point) -> bool {
        self.contains_point(pt)
    }

    /// Does this polygon fully contain the loop `ring`?
    ///
    /// The loop must be contained by the exterior and no hole may strictly
    /// intersect it.
    pub fn contains_ring<R: RingShape + ?Sized>(&self, ring: &R) -> bool {
        if !ring_contains_ring(self.exterior.series(), ring, true) {
            return false;
        }
        for hole in &self.holes {
            if ring_intersects_ring(hole.series(), ring, false) {
                return false;
            }
        }
        true
    }

    /// Does this polygon intersect the loop `ring`?
    ///
    /// The exterior must intersect the loop, and the loop must not sit
    /// wholly inside one of the holes.
    pub fn intersects_ring<R: RingShape + ?Sized>(&self, ring: &R) -> bool {
        if !ring_intersects_ring(self.exterior.series(), ring, true) {
            return false;
        }
        for hole in &self.holes {
            if ring_contains_ring(hole.series(), ring, false) {
                return false;
            }
        }
        true
    }

    /// Does this polygon fully contain the rectangle `rect`?
    #[inline]
    pub fn contains_rect(&self, rect: &Rect) -> bool {
        self.contains_ring(rect)
    }

    /// Does this polygon intersect the rectangle `rect`?
    #[inline]
    pub fn intersects_rect(&self, rect: &Rect) -> bool {
        self.intersects_ring(rect)
    }

    /// Does this polygon fully contain the line `line`?
    pub fn contains_line(&self, line: &Line) -> bool {
        if !ring_contains_line(self.exterior.series(), line.series(), true) {
            return false;
        }
        for hole in &self.holes {
            if ring_intersects_line(hole.series(), line.series(), false) {
                return false;
            }
        }
        true
    }

    /// Does this polygon intersect the line `line`?
    pub fn intersects_line(&self, line: &Line) -> bool {
        if !ring_intersects_line(self.exterior.series(), line.series(), true) {
            return false;
        }
        for hole in &self.holes {
            if ring_contains_line(hole.series(), line.series(), false) {
                return false;
            }
        }
        true
    }

    /// Does this polygon fully contain `other`?
    ///
    /// `other`'s exterior must be contained by this exterior. A hole of this
    /// polygon breaks containment only where it overlaps material `other`
    /// treats as solid: an overlap wholly covered by one of `other`'s own
    /// holes is not filled, so it is allowed.
    pub fn contains_polygon(&self, other: &Polygon) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        if !ring_contains_ring(self.exterior.series(), other.exterior.series(), true) {
            return false;
        }
        for hole in &self.holes {
            if ring_intersects_ring(hole.series(), other.exterior.series(), false) {
                let covered = other
                    .holes
                    .iter()
                    .any(|oh| ring_contains_ring(oh.series(), hole.series(), true));
                if !covered {
                    return false;
                }
            }
        }
        true
    }

    /// Does this polygon intersect `other`?
    ///
    /// The exteriors must intersect, and neither exterior may sit wholly
    /// inside one of the other polygon's holes — an intersection swallowed
    /// by a hole touches no solid material.
    pub fn intersects_polygon(&self, other: &Polygon) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        if !ring_intersects_ring(self.exterior.series(), other.exterior.series(), true) {
            return false;
        }
        for hole in &self.holes {
            if ring_contains_ring(hole.series(), other.exterior.series(), false) {
                return false;
            }
        }
        for hole in &other.holes {
            if ring_contains_ring(hole.series(), self.exterior.series(), false) {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(pts: &[(Real, Real)]) -> Ring {
        Ring::new(pts.iter().map(|&(x, y)| Point::new(x, y)).collect())
    }

    fn square(min: Real, max: Real) -> Ring {
        ring(&[(min, min), (max, min), (max, max), (min, max), (min, min)])
    }

    fn donut() -> Polygon {
        Polygon::new(square(0.0, 10.0), vec![square(4.0, 6.0)])
    }

    #[test]
    fn point_in_donut() {
        let p = donut();
        assert!(p.contains_point(&Point::new(2.0, 2.0)));
        assert!(!p.contains_point(&Point::new(5.0, 5.0)));
        // Exterior boundary counts as inside.
        assert!(p.contains_point(&Point::new(0.0, 5.0)));
        // Hole boundary is not inside the hole.
        assert!(p.contains_point(&Point::new(4.0, 5.0)));
    }

    #[test]
    fn rect_against_donut() {
        let p = donut();
        assert!(p.contains_rect(&Rect::new(Point::new(1.0, 1.0), Point::new(3.0, 3.0))));
        // Overlaps the hole.
        assert!(!p.contains_rect(&Rect::new(Point::new(3.0, 3.0), Point::new(7.0, 7.0))));
        assert!(p.intersects_rect(&Rect::new(Point::new(3.0, 3.0), Point::new(7.0, 7.0))));
        // Fully inside the hole.
        let swallowed = Rect::new(Point::new(4.5, 4.5), Point::new(5.5, 5.5));
        assert!(!p.contains_rect(&swallowed));
        assert!(!p.intersects_rect(&swallowed));
    }

    #[test]
    fn line_against_donut() {
        let p = donut();
        let below = Line::new(vec![Point::new(1.0, 2.0), Point::new(9.0, 2.0)]);
        let through = Line::new(vec![Point::new(1.0, 5.0), Point::new(9.0, 5.0)]);
        let inside_hole = Line::new(vec![Point::new(4.5, 5.0), Point::new(5.5, 5.0)]);
        assert!(p.contains_line(&below));
        assert!(!p.contains_line(&through));
        assert!(p.intersects_line(&through));
        assert!(!p.contains_line(&inside_hole));
        assert!(!p.intersects_line(&inside_hole));
    }

    #[test]
    fn polygon_in_polygon_hole_escape_rule() {
        let outer = donut();
        // Same exterior, bigger hole: the overlap between outer's hole and
        // this polygon is entirely inside this polygon's own hole, so it is
        // not solid material and containment holds.
        let bigger_hole = Polygon::new(square(0.0, 10.0), vec![square(3.0, 7.0)]);
        assert!(outer.contains_polygon(&bigger_hole));

        // Smaller hole: solid material of `solid` covers part of outer's
        // hole, so containment fails.
        let solid = Polygon::new(square(0.0, 10.0), vec![square(4.5, 5.5)]);
        assert!(!outer.contains_polygon(&solid));

        // No holes involved at all.
        let inner = Polygon::new(square(1.0, 3.0), vec![]);
        assert!(outer.contains_polygon(&inner));
    }

    #[test]
    fn polygon_intersection_swallowed_by_hole() {
        let p = donut();
        let swallowed = Polygon::new(square(4.5, 5.5), vec![]);
        assert!(!p.intersects_polygon(&swallowed));
        assert!(!swallowed.intersects_polygon(&p));
        let straddling = Polygon::new(square(3.0, 7.0), vec![]);
        assert!(p.intersects_polygon(&straddling));
        assert!(straddling.intersects_polygon(&p));
        let outside = Polygon::new(square(20.0, 30.0), vec![]);
        assert!(!p.intersects_polygon(&outside));
    }

    #[test]
    fn empty_polygon_answers_false() {
        let empty = Polygon::new(Ring::new(vec![]), vec![]);
        assert!(empty.is_empty());
        assert!(!empty.contains_point(&Point::new(0.0, 0.0)));
        assert!(!empty.intersects_polygon(&donut()));
        assert!(!donut().contains_polygon(&empty));
        assert!(Polygon::try_new(Ring::new(vec![]), vec![]).is_err());
    }
}
