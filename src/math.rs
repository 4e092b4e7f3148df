//! Scalar type aliases and epsilon-tolerant comparisons.
//!
//! Every coordinate comparison in this crate goes through the functions in
//! this module rather than raw `==`/`<`/`>` on floats. Coordinates are often
//! geographic degrees, where `1e-8°` is about a millimeter, and the shared
//! tolerance absorbs cross-platform floating point drift from chained
//! arithmetic. Predicate composition assumes one consistent tolerance, so
//! [`EPSILON`] is a single crate-wide constant, never a per-call parameter.

use crate::bounding_volume::Rect;

/// The scalar type used throughout this crate.
pub type Real = f64;

/// The point type used throughout this crate.
pub type Point = na::Point2<Real>;

/// The vector type used throughout this crate.
pub type Vector = na::Vector2<Real>;

/// The tolerance under which two coordinates are considered equal.
pub const EPSILON: Real = 1e-8;

/// Are `a` and `b` equal within [`EPSILON`]?
#[inline]
pub fn float_eq(a: Real, b: Real) -> bool {
    (a - b).abs() < EPSILON
}

/// Are `a` and `b` distinct beyond [`EPSILON`]?
#[inline]
pub fn float_ne(a: Real, b: Real) -> bool {
    !float_eq(a, b)
}

/// Is `a` less than `b`, strictly beyond [`EPSILON`]?
#[inline]
pub fn float_lt(a: Real, b: Real) -> bool {
    b - a > EPSILON
}

/// Is `a` less than or equal to `b` within [`EPSILON`]?
#[inline]
pub fn float_lte(a: Real, b: Real) -> bool {
    !float_gt(a, b)
}

/// Is `a` greater than `b`, strictly beyond [`EPSILON`]?
#[inline]
pub fn float_gt(a: Real, b: Real) -> bool {
    a - b > EPSILON
}

/// Is `a` greater than or equal to `b` within [`EPSILON`]?
#[inline]
pub fn float_gte(a: Real, b: Real) -> bool {
    !float_lt(a, b)
}

/// Is `a` zero within [`EPSILON`]?
#[inline]
pub fn float_zero(a: Real) -> bool {
    float_eq(a, 0.0)
}

/// Is `a` nonzero beyond [`EPSILON`]?
#[inline]
pub fn float_nonzero(a: Real) -> bool {
    !float_zero(a)
}

/// Are the two points equal within [`EPSILON`] on both axes?
#[inline]
pub fn point_eq(a: &Point, b: &Point) -> bool {
    float_eq(a.x, b.x) && float_eq(a.y, b.y)
}

/// Are the two points distinct beyond [`EPSILON`] on either axis?
#[inline]
pub fn point_ne(a: &Point, b: &Point) -> bool {
    !point_eq(a, b)
}

/// Are the two rectangles equal within [`EPSILON`] on all corners?
#[inline]
pub fn rect_eq(a: &Rect, b: &Rect) -> bool {
    point_eq(&a.min, &b.min) && point_eq(&a.max, &b.max)
}

/// Are the two rectangles distinct beyond [`EPSILON`] on any corner?
#[inline]
pub fn rect_ne(a: &Rect, b: &Rect) -> bool {
    !rect_eq(a, b)
}

/// Is the point a valid longitude/latitude position?
///
/// This is a coordinate-range check only (lon in `[-180, 180]`, lat in
/// `[-90, 90]`), layered on the planar types for callers working in
/// geographic space. The engine itself performs no geodesy.
#[inline]
pub fn point_valid(pt: &Point) -> bool {
    pt.x >= -180.0 && pt.x <= 180.0 && pt.y >= -90.0 && pt.y <= 90.0
}
