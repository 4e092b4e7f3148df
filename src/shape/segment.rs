//! Definition of the segment shape and the raycast predicate.

use crate::bounding_volume::Rect;
use crate::math::{self, Point, Real, Vector};

/// A directed segment shape.
///
/// The direction `a -> b` matters for [`Segment::raycast`] but not for the
/// containment and intersection predicates, which are symmetric in effect.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Segment {
    /// The segment first point.
    pub a: Point,
    /// The segment second point.
    pub b: Point,
}

/// The classification of a point against a segment, produced by
/// [`Segment::raycast`].
///
/// `inside` and `on` are mutually exclusive.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub struct RaycastHit {
    /// A rightward ray from the point crosses the segment, contributing one
    /// toggle to the even-odd point-in-polygon rule.
    pub inside: bool,
    /// The point lies on the segment, endpoints included.
    pub on: bool,
}

const MISS: RaycastHit = RaycastHit {
    inside: false,
    on: false,
};
const ON: RaycastHit = RaycastHit {
    inside: false,
    on: true,
};
const INSIDE: RaycastHit = RaycastHit {
    inside: true,
    on: false,
};

impl Segment {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(a: Point, b: Point) -> Segment {
        Segment { a, b }
    }

    /// The bounding rectangle of this segment.
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.a, self.b)
    }

    /// Returns this segment translated by `(dx, dy)`.
    #[inline]
    pub fn move_by(&self, dx: Real, dy: Real) -> Segment {
        let delta = Vector::new(dx, dy);
        Segment::new(self.a + delta, self.b + delta)
    }

    /// Classifies `pt` against the horizontal ray extending rightward from
    /// it, intersected with this segment.
    ///
    /// This is the primitive every containment predicate composes: summing
    /// `inside` toggles over a ring's segments yields the even-odd
    /// point-in-polygon rule, while `on` detects boundary contact.
    pub fn raycast(&self, pt: &Point) -> RaycastHit {
        let (a, b) = (self.a, self.b);
        let min_y = a.y.min(b.y);
        let max_y = a.y.max(b.y);

        // Reject points outside the segment's vertical span.
        if math::float_lt(pt.y, min_y) || math::float_gt(pt.y, max_y) {
            return MISS;
        }

        // Degenerate segment.
        if math::point_eq(&a, &b) {
            return if math::point_eq(pt, &a) { ON } else { MISS };
        }

        // Horizontal segment: only boundary contact is possible; a
        // horizontal edge never toggles the even-odd count.
        if math::float_eq(a.y, b.y) {
            if math::float_eq(pt.y, a.y)
                && math::float_gte(pt.x, a.x.min(b.x))
                && math::float_lte(pt.x, a.x.max(b.x))
            {
                return ON;
            }
            return MISS;
        }

        // Vertical segment.
        if math::float_eq(a.x, b.x) {
            if math::float_eq(pt.x, a.x) {
                return ON;
            }
            return if math::float_lt(pt.x, a.x) {
                self.raycast_nudged(pt, &a, &b)
            } else {
                MISS
            };
        }

        // Collinear point, tested by cross-multiplied slopes against both
        // endpoints so a vertical direction never divides by zero.
        if math::float_zero((pt.y - a.y) * (b.x - a.x) - (pt.x - a.x) * (b.y - a.y))
            && math::float_gte(pt.x, a.x.min(b.x))
            && math::float_lte(pt.x, a.x.max(b.x))
        {
            return ON;
        }

        self.raycast_nudged(pt, &a, &b)
    }

    // The actual ray cast, once boundary contact has been ruled out.
    fn raycast_nudged(&self, pt: &Point, a: &Point, b: &Point) -> RaycastHit {
        // Orient the segment upward so "left of the segment" has one meaning.
        let (a, b) = if a.y < b.y { (a, b) } else { (b, a) };

        // A ray passing exactly through a vertex would be counted by both
        // edges sharing it (or by neither). Nudge the ray upward by the
        // smallest representable step until it clears every vertex.
        let mut py = pt.y;
        while py == a.y || py == b.y {
            py = next_up(py);
        }
        if py < a.y || py > b.y {
            return MISS;
        }

        let min_x = a.x.min(b.x);
        let max_x = a.x.max(b.x);
        if pt.x > max_x {
            return MISS;
        }
        if pt.x < min_x {
            return INSIDE;
        }

        // Strictly left of the segment at the (nudged) ray height?
        let cross = (b.x - a.x) * (py - a.y) - (b.y - a.y) * (pt.x - a.x);
        if cross > 0.0 {
            INSIDE
        } else {
            MISS
        }
    }

    /// Does this segment fully contain `other`?
    #[inline]
    pub fn contains_segment(&self, other: &Segment) -> bool {
        self.raycast(&other.a).on && self.raycast(&other.b).on
    }

    /// Does this segment intersect `other`?
    ///
    /// Boundary contact counts: sharing an endpoint, or merely touching,
    /// intersects.
    pub fn intersects_segment(&self, other: &Segment) -> bool {
        if !self.rect().intersects_rect(&other.rect()) {
            return false;
        }

        let (a, b) = (self.a, self.b);
        let (c, d) = (other.a, other.b);

        if math::point_eq(&a, &c)
            || math::point_eq(&a, &d)
            || math::point_eq(&b, &c)
            || math::point_eq(&b, &d)
        {
            return true;
        }

        // Parametric line intersection on cross products.
        let cmpx = c.x - a.x;
        let cmpy = c.y - a.y;
        let rx = b.x - a.x;
        let ry = b.y - a.y;
        let sx = d.x - c.x;
        let sy = d.y - c.y;
        let cmpxr = cmpy * rx - cmpx * ry;
        let cmpxs = cmpy * sx - cmpx * sy;
        let rxs = ry * sx - rx * sy;

        if math::float_zero(cmpxr) {
            // `c` sits on the support line of `self`. A coordinate-range
            // comparison catches the strict overlap; raycast confirms the
            // touch cases so a mere bounding-box overlap never counts.
            if (c.x - a.x < 0.0) != (c.x - b.x < 0.0) || (c.y - a.y < 0.0) != (c.y - b.y < 0.0) {
                return true;
            }
            return self.raycast(&c).on
                || self.raycast(&d).on
                || other.raycast(&a).on
                || other.raycast(&b).on;
        }

        if math::float_zero(rxs) || ulps_eq!(rxs, 0.0) {
            // Parallel, not collinear.
            return false;
        }

        let inv = 1.0 / rxs;
        let t = cmpxs * inv;
        let u = cmpxr * inv;
        !(math::float_lt(t, 0.0)
            || math::float_gt(t, 1.0)
            || math::float_lt(u, 0.0)
            || math::float_gt(u, 1.0))
    }
}

/// The next representable float toward positive infinity.
#[inline]
fn next_up(x: Real) -> Real {
    // NaN cannot reach here; raycast rejects out-of-span values first.
    if x == Real::INFINITY {
        x
    } else if x == 0.0 {
        Real::from_bits(1)
    } else if x > 0.0 {
        Real::from_bits(x.to_bits() + 1)
    } else {
        Real::from_bits(x.to_bits() - 1)
    }
}
