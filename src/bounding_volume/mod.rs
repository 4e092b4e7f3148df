//! Axis-aligned bounding rectangle.

pub use self::rect::Rect;

mod rect;
