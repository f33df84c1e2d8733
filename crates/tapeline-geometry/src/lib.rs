#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

mod point;
pub use point::WorldPoint;

mod segment;
pub use segment::LineSegment;
