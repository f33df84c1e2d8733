#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use tapeline_geometry as geometry;

#[doc(inline)]
pub use tapeline_measure as measure;

#[doc(inline)]
pub use tapeline_anchors as anchors;
