//! Clipping of segments, rings, lines, and polygons against a rectangle.

use crate::bounding_volume::Rect;
use crate::math::{self, Point};
use crate::shape::{Line, Polygon, Ring, Segment};

bitflags::bitflags! {
    /// The half-planes of a rectangle a point falls outside of.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct OutCode: u8 {
        /// `x` below `rect.min.x`.
        const LEFT = 0b0001;
        /// `x` above `rect.max.x`.
        const RIGHT = 0b0010;
        /// `y` below `rect.min.y`.
        const BOTTOM = 0b0100;
        /// `y` above `rect.max.y`.
        const TOP = 0b1000;
    }
}

/// Classifies `pt` against the four half-planes of `rect`.
///
/// Points within tolerance of an edge carry no flag for it.
pub fn out_code(rect: &Rect, pt: &Point) -> OutCode {
    let mut code = OutCode::empty();
    if math::float_lt(pt.x, rect.min.x) {
        code |= OutCode::LEFT;
    } else if math::float_gt(pt.x, rect.max.x) {
        code |= OutCode::RIGHT;
    }
    if math::float_lt(pt.y, rect.min.y) {
        code |= OutCode::BOTTOM;
    } else if math::float_gt(pt.y, rect.max.y) {
        code |= OutCode::TOP;
    }
    code
}

/// Clips `seg` to `rect` with the Cohen-Sutherland algorithm.
///
/// Returns the clipped segment and a rejection flag; when the flag is set
/// the segment lies entirely outside `rect` and the returned segment is the
/// input unchanged.
pub fn clip_segment(seg: &Segment, rect: &Rect) -> (Segment, bool) {
    let mut a = seg.a;
    let mut b = seg.b;
    let mut code_a = out_code(rect, &a);
    let mut code_b = out_code(rect, &b);

    loop {
        if (code_a | code_b).is_empty() {
            return (Segment::new(a, b), false);
        }
        if !(code_a & code_b).is_empty() {
            return (*seg, true);
        }
        let outside = if code_a.is_empty() { code_b } else { code_a };
        let p = if outside.contains(OutCode::LEFT) {
            Point::new(
                rect.min.x,
                a.y + (b.y - a.y) * (rect.min.x - a.x) / (b.x - a.x),
            )
        } else if outside.contains(OutCode::RIGHT) {
            Point::new(
                rect.max.x,
                a.y + (b.y - a.y) * (rect.max.x - a.x) / (b.x - a.x),
            )
        } else if outside.contains(OutCode::BOTTOM) {
            Point::new(
                a.x + (b.x - a.x) * (rect.min.y - a.y) / (b.y - a.y),
                rect.min.y,
            )
        } else {
            Point::new(
                a.x + (b.x - a.x) * (rect.max.y - a.y) / (b.y - a.y),
                rect.max.y,
            )
        };
        if outside == code_a {
            a = p;
            code_a = out_code(rect, &a);
        } else {
            b = p;
            code_b = out_code(rect, &b);
        }
    }
}

// Intersection of segment (a, b) with the boundary of one half-plane.
fn edge_intersection(a: &Point, b: &Point, edge: OutCode, rect: &Rect) -> Point {
    if edge == OutCode::LEFT {
        Point::new(
            rect.min.x,
            a.y + (b.y - a.y) * (rect.min.x - a.x) / (b.x - a.x),
        )
    } else if edge == OutCode::RIGHT {
        Point::new(
            rect.max.x,
            a.y + (b.y - a.y) * (rect.max.x - a.x) / (b.x - a.x),
        )
    } else if edge == OutCode::BOTTOM {
        Point::new(
            a.x + (b.x - a.x) * (rect.min.y - a.y) / (b.y - a.y),
            rect.min.y,
        )
    } else {
        Point::new(
            a.x + (b.x - a.x) * (rect.max.y - a.y) / (b.y - a.y),
            rect.max.y,
        )
    }
}

/// Clips the closed loop `points` to `rect` with the Sutherland-Hodgman
/// algorithm.
///
/// The result is a closed point list, empty when nothing of the loop remains
/// inside `rect`. Input with fewer than four points (a closed triangle at
/// minimum) clips to nothing.
pub fn clip_ring(points: &[Point], rect: &Rect) -> Vec<Point> {
    if points.len() < 4 {
        return Vec::new();
    }
    let mut out: Vec<Point> = points.to_vec();
    let first = out[0];
    if let Some(last) = out.last() {
        if math::point_ne(&first, last) {
            out.push(first);
        }
    }

    for edge in [OutCode::LEFT, OutCode::RIGHT, OutCode::BOTTOM, OutCode::TOP] {
        let input = std::mem::take(&mut out);
        if input.len() < 2 {
            return Vec::new();
        }
        for i in 1..input.len() {
            let prev = input[i - 1];
            let cur = input[i];
            let prev_in = !out_code(rect, &prev).intersects(edge);
            let cur_in = !out_code(rect, &cur).intersects(edge);
            if prev_in {
                if !cur_in {
                    out.push(edge_intersection(&prev, &cur, edge, rect));
                } else {
                    out.push(cur);
                }
            } else if cur_in {
                out.push(edge_intersection(&prev, &cur, edge, rect));
                out.push(cur);
            }
        }
        if out.is_empty() {
            return Vec::new();
        }
        let first = out[0];
        if let Some(last) = out.last() {
            if math::point_ne(&first, last) {
                out.push(first);
            }
        }
    }
    out
}

/// Clips `line` to `rect`.
///
/// The line may leave and re-enter the rectangle, so the result is a list of
/// lines; consecutive clipped segments that share an endpoint are stitched
/// into one.
pub fn clip_line(line: &Line, rect: &Rect) -> Vec<Line> {
    let mut parts: Vec<Vec<Point>> = Vec::new();
    for i in 0..line.num_segments() {
        let (clipped, rejected) = clip_segment(&line.segment_at(i), rect);
        if rejected {
            continue;
        }
        match parts.last_mut() {
            Some(cur) if cur.last().is_some_and(|p| math::point_eq(p, &clipped.a)) => {
                cur.push(clipped.b);
            }
            _ => parts.push(vec![clipped.a, clipped.b]),
        }
    }
    parts.into_iter().map(Line::new).collect()
}

/// Clips `poly` to `rect`.
///
/// Returns `None` when the exterior clips away entirely. Holes that clip
/// away are dropped.
pub fn clip_polygon(poly: &Polygon, rect: &Rect) -> Option<Polygon> {
    let exterior = clip_ring(poly.exterior().points(), rect);
    if exterior.len() < 4 {
        return None;
    }
    let holes = poly
        .holes()
        .iter()
        .filter_map(|hole| {
            let pts = clip_ring(hole.points(), rect);
            if pts.len() < 4 {
                None
            } else {
                Some(Ring::new(pts))
            }
        })
        .collect();
    Some(Polygon::new(Ring::new(exterior), holes))
}
