//! Queries: ring containment/intersection algorithms, rectangle clipping and
//! planar distance.

pub mod clip;
pub mod distance;
pub mod ring;

pub use self::clip::{clip_line, clip_polygon, clip_ring, clip_segment, OutCode};
pub use self::ring::{
    ring_contains_line, ring_contains_point, ring_contains_ring, ring_contains_segment,
    ring_intersects_line, ring_intersects_ring, ring_intersects_segment, RingPointHit,
};
