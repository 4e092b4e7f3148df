//! Containment and intersection predicates over closed loops.
//!
//! Every function here operates on any [`RingShape`] — a [`PointSeries`]
//! ring or a [`Rect`] viewed as a 4-segment loop — and composes the
//! [`Segment::raycast`] primitive through the loop's windowed segment
//! search, so indexed shapes answer in time proportional to the candidate
//! segments only.
//!
//! The `allow_on_edge` flag decides whether boundary contact counts as
//! containment/intersection. Within one query it is threaded through every
//! sub-call unchanged.

use crate::bounding_volume::Rect;
use crate::math::{Point, Real};
use crate::shape::{PointSeries, RingShape, Segment};

/// Result of [`ring_contains_point`]: whether the point is contained, and
/// the index of the boundary segment it was found on, if any.
///
/// The segment index is what lets [`ring_contains_segment`] distinguish its
/// edge-touching sub-cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingPointHit {
    /// Is the point contained (under the query's edge policy)?
    pub hit: bool,
    /// The boundary segment the point lies on, if it lies on one.
    pub on_index: Option<usize>,
}

const OUTSIDE: RingPointHit = RingPointHit {
    hit: false,
    on_index: None,
};

/// Is `pt` inside `ring`, by the even-odd rule?
///
/// The search is restricted to the horizontal half-line through `pt`; the
/// raycast `inside` toggles accumulate across the candidate segments, and
/// the first segment the point is found `on` short-circuits the scan with
/// `hit = allow_on_edge`.
pub fn ring_contains_point<R>(ring: &R, pt: &Point, allow_on_edge: bool) -> RingPointHit
where
    R: RingShape + ?Sized,
{
    if ring.is_empty() {
        return OUTSIDE;
    }

    let scan = Rect {
        min: Point::new(Real::NEG_INFINITY, pt.y),
        max: Point::new(Real::INFINITY, pt.y),
    };
    let mut inside = false;
    let mut on_index = None;

    let _ = ring.search(&scan, &mut |seg, index| {
        let hit = seg.raycast(pt);
        if hit.on {
            inside = allow_on_edge;
            on_index = Some(index);
            return false;
        }
        if hit.inside {
            inside = !inside;
        }
        true
    });

    RingPointHit {
        hit: inside,
        on_index,
    }
}

/// Does `ring` intersect the point `pt`? Identical to containment.
#[inline]
pub fn ring_intersects_point<R>(ring: &R, pt: &Point, allow_on_edge: bool) -> bool
where
    R: RingShape + ?Sized,
{
    ring_contains_point(ring, pt, allow_on_edge).hit
}

/// Does `ring` fully contain the segment `seg`?
///
/// Both endpoints must be contained; for a convex ring that alone decides.
/// For a concave ring the segment may still cross the boundary between two
/// contained endpoints, so the edge-touching configuration of the endpoints
/// is cased out explicitly.
pub fn ring_contains_segment<R>(ring: &R, seg: &Segment, allow_on_edge: bool) -> bool
where
    R: RingShape + ?Sized,
{
    let hit_a = ring_contains_point(ring, &seg.a, allow_on_edge);
    if !hit_a.hit {
        return false;
    }
    let hit_b = ring_contains_point(ring, &seg.b, allow_on_edge);
    if !hit_b.hit {
        return false;
    }

    // A convex ring contains any segment whose endpoints it contains.
    if ring.convex() {
        return true;
    }

    match (hit_a.on_index, hit_b.on_index) {
        (None, None) => no_boundary_crossing(ring, seg),
        (Some(index_a), Some(index_b)) => {
            if index_a == index_b || lies_on_one_segment(ring, seg) {
                // Both touch points share a boundary segment; the straight
                // line between them runs along the boundary.
                return true;
            }
            // The endpoints touch two different boundary segments. The
            // quadrilateral they span tells us on which side of the
            // boundary the chord passes: if its winding disagrees with the
            // ring's, the chord exits through the outside of the passover
            // region.
            let sa = ring.segment_at(index_a);
            let sb = ring.segment_at(index_b);
            if quad_clockwise(&[sa.a, sa.b, sb.a, sb.b]) != ring.clockwise() {
                return false;
            }
            no_boundary_crossing(ring, seg)
        }
        _ => {
            // One endpoint rests on the boundary, the other is strictly
            // interior. Only a real crossing elsewhere can break containment.
            no_boundary_crossing(ring, seg)
        }
    }
}

/// Does any boundary segment of `ring` really cross `seg`? A boundary
/// segment touching `seg` at one of `seg`'s endpoints is not a crossing;
/// everything else is.
fn no_boundary_crossing<R>(ring: &R, seg: &Segment) -> bool
where
    R: RingShape + ?Sized,
{
    ring.search(&seg.rect(), &mut |other, _| {
        if other.intersects_segment(seg) && !other.raycast(&seg.a).on && !other.raycast(&seg.b).on {
            return false;
        }
        true
    })
}

/// Does some single boundary segment of `ring` hold both endpoints of `seg`?
fn lies_on_one_segment<R>(ring: &R, seg: &Segment) -> bool
where
    R: RingShape + ?Sized,
{
    !ring.search(&seg.rect(), &mut |other, _| {
        !(other.raycast(&seg.a).on && other.raycast(&seg.b).on)
    })
}

/// The winding of a closed 4-point loop by the shoelace summation; positive
/// means clockwise, matching the series derivation.
fn quad_clockwise(quad: &[Point; 4]) -> bool {
    let mut shoelace = 0.0;
    for i in 0..4 {
        let a = quad[i];
        let b = quad[(i + 1) % 4];
        shoelace += (b.x - a.x) * (b.y + a.y);
    }
    shoelace > 0.0
}

/// Does `ring` intersect the segment `seg`?
///
/// True when either endpoint is contained, or when the segment crosses the
/// boundary. With `allow_on_edge = false`, contact that merely grazes the
/// boundary does not count.
pub fn ring_intersects_segment<R>(ring: &R, seg: &Segment, allow_on_edge: bool) -> bool
where
    R: RingShape + ?Sized,
{
    if ring.is_empty() {
        return false;
    }
    if ring_contains_point(ring, &seg.a, allow_on_edge).hit
        || ring_contains_point(ring, &seg.b, allow_on_edge).hit
    {
        return true;
    }

    !ring.search(&seg.rect(), &mut |other, _| {
        if !seg.intersects_segment(other) {
            return true;
        }
        if !allow_on_edge
            && (other.raycast(&seg.a).on
                || other.raycast(&seg.b).on
                || seg.raycast(&other.a).on
                || seg.raycast(&other.b).on)
        {
            // Boundary touch only.
            return true;
        }
        false
    })
}

/// Does `outer` fully contain `inner`?
///
/// For a convex outer ring, containment of every inner point suffices. A
/// concave outer boundary can let two contained points bound a segment that
/// exits and re-enters, so there every inner *segment* must be contained.
pub fn ring_contains_ring<A, B>(outer: &A, inner: &B, allow_on_edge: bool) -> bool
where
    A: RingShape + ?Sized,
    B: RingShape + ?Sized,
{
    if outer.is_empty() || inner.is_empty() {
        return false;
    }
    if !outer.rect().contains_rect(&inner.rect()) {
        return false;
    }

    if outer.convex() {
        for i in 0..inner.num_points() {
            if !ring_contains_point(outer, &inner.point_at(i), allow_on_edge).hit {
                return false;
            }
        }
    } else {
        for i in 0..inner.num_segments() {
            if !ring_contains_segment(outer, &inner.segment_at(i), allow_on_edge) {
                return false;
            }
        }
    }
    true
}

/// Do the two rings intersect?
pub fn ring_intersects_ring<A, B>(a: &A, b: &B, allow_on_edge: bool) -> bool
where
    A: RingShape + ?Sized,
    B: RingShape + ?Sized,
{
    if a.is_empty() || b.is_empty() {
        return false;
    }
    if !a.rect().intersects_rect(&b.rect()) {
        return false;
    }
    // Walk the segments of the smaller ring against the larger one; the
    // swap stabilizes behavior without changing the result.
    if a.rect().area() >= b.rect().area() {
        inner_segments_intersect(a, b, allow_on_edge)
    } else {
        inner_segments_intersect(b, a, allow_on_edge)
    }
}

fn inner_segments_intersect<A, B>(outer: &A, inner: &B, allow_on_edge: bool) -> bool
where
    A: RingShape + ?Sized,
    B: RingShape + ?Sized,
{
    for i in 0..inner.num_segments() {
        if ring_intersects_segment(outer, &inner.segment_at(i), allow_on_edge) {
            return true;
        }
    }
    false
}

/// Does `ring` fully contain the open series `line`?
///
/// Only the line's stated segments are tested; there is no implicit closing
/// segment.
pub fn ring_contains_line<R>(ring: &R, line: &PointSeries, allow_on_edge: bool) -> bool
where
    R: RingShape + ?Sized,
{
    if ring.is_empty() || line.is_empty() {
        return false;
    }
    if !ring.rect().contains_rect(&line.rect()) {
        return false;
    }
    for i in 0..line.num_segments() {
        if !ring_contains_segment(ring, &line.segment_at(i), allow_on_edge) {
            return false;
        }
    }
    true
}

/// Does `ring` intersect the open series `line`?
pub fn ring_intersects_line<R>(ring: &R, line: &PointSeries, allow_on_edge: bool) -> bool
where
    R: RingShape + ?Sized,
{
    if ring.is_empty() || line.is_empty() {
        return false;
    }
    if !ring.rect().intersects_rect(&line.rect()) {
        return false;
    }
    for i in 0..line.num_segments() {
        if ring_intersects_segment(ring, &line.segment_at(i), allow_on_edge) {
            return true;
        }
    }
    false
}
