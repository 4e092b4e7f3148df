/*!
flatgeom
========

**flatgeom** is a planar 2D geometry engine written with the rust
programming language. It represents points, axis-aligned rectangles, open
polylines and polygons-with-holes, and answers containment, intersection
and distance queries between them, plus clips shapes against a rectangle.

All coordinate comparisons are epsilon-tolerant (see [`math::EPSILON`]) so
boundary tests behave identically across platforms, and shapes with many
vertices automatically carry a bounding-box index over their segments so
queries stay sub-linear.
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod math;
pub mod partitioning;
pub mod query;
pub mod shape;

pub use crate::bounding_volume::Rect;
pub use crate::shape::{Geometry, Line, Polygon, Ring, Segment};
