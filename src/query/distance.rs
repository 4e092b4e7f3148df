//! Planar distance between points and rectangles.

use crate::bounding_volume::Rect;
use crate::math::{Point, Real};

/// Euclidean distance between two points.
#[inline]
pub fn point_point(a: &Point, b: &Point) -> Real {
    na::distance(a, b)
}

/// Distance from `pt` to the closest point of `rect`, `0.0` when inside.
pub fn point_rect(pt: &Point, rect: &Rect) -> Real {
    let dx = (rect.min.x - pt.x).max(0.0).max(pt.x - rect.max.x);
    let dy = (rect.min.y - pt.y).max(0.0).max(pt.y - rect.max.y);
    dx.hypot(dy)
}

/// Distance between the closest points of two rectangles, `0.0` on overlap.
pub fn rect_rect(a: &Rect, b: &Rect) -> Real {
    let dx = (b.min.x - a.max.x).max(0.0).max(a.min.x - b.max.x);
    let dy = (b.min.y - a.max.y).max(0.0).max(a.min.y - b.max.y);
    dx.hypot(dy)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(minx: Real, miny: Real, maxx: Real, maxy: Real) -> Rect {
        Rect::new(Point::new(minx, miny), Point::new(maxx, maxy))
    }

    #[test]
    fn point_to_point() {
        let d = point_point(&Point::new(0.0, 0.0), &Point::new(3.0, 4.0));
        assert_relative_eq!(d, 5.0);
    }

    #[test]
    fn point_to_rect() {
        let r = rect(0.0, 0.0, 10.0, 10.0);
        assert_relative_eq!(point_rect(&Point::new(5.0, 5.0), &r), 0.0);
        assert_relative_eq!(point_rect(&Point::new(13.0, 5.0), &r), 3.0);
        assert_relative_eq!(point_rect(&Point::new(13.0, 14.0), &r), 5.0);
        assert_relative_eq!(point_rect(&Point::new(-3.0, -4.0), &r), 5.0);
    }

    #[test]
    fn rect_to_rect() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        assert_relative_eq!(rect_rect(&a, &rect(5.0, 5.0, 15.0, 15.0)), 0.0);
        assert_relative_eq!(rect_rect(&a, &rect(13.0, 0.0, 20.0, 10.0)), 3.0);
        assert_relative_eq!(rect_rect(&a, &rect(13.0, 14.0, 20.0, 20.0)), 5.0);
        // Touching edges are distance zero.
        assert_relative_eq!(rect_rect(&a, &rect(10.0, 0.0, 20.0, 10.0)), 0.0);
    }
}
