//! Shapes: segments, point series, rings, lines, polygons and the
//! [`Geometry`] dispatch enum.

pub use self::geometry::Geometry;
pub use self::line::Line;
pub use self::polygon::Polygon;
pub use self::ring::Ring;
pub use self::segment::{RaycastHit, Segment};
pub use self::series::{PointSeries, RingShape, INDEX_THRESHOLD};

mod geometry;
mod line;
mod polygon;
mod ring;
mod segment;
mod series;

/// Error raised when constructing a shape from structurally invalid input.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShapeError {
    /// The point list is too short for the requested shape.
    #[error("a {shape} needs at least {expected} points, got {got}.")]
    NotEnoughPoints {
        /// Human-readable name of the shape being built.
        shape: &'static str,
        /// Minimum number of points the shape requires.
        expected: usize,
        /// Number of points actually supplied.
        got: usize,
    },
    /// A coordinate is outside the valid longitude/latitude range.
    #[error("a coordinate is outside the valid longitude/latitude range.")]
    InvalidCoordinates,
}
