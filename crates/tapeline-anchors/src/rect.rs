use tapeline_geometry::WorldPoint;

/// One detected horizontal plane's visual footprint.
///
/// `width` mirrors the anchor's x extent and `height` its z extent, both in
/// meters; `center` is the plane center in the world frame. The external
/// tracker refines its estimate over time, so every field may shrink, grow,
/// or shift between updates.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlaneRect {
    /// Extent along the anchor's x axis, in meters.
    pub width: f64,
    /// Extent along the anchor's z axis, in meters.
    pub height: f64,
    /// Plane center in the world frame.
    pub center: WorldPoint,
}

impl PlaneRect {
    /// Create a rectangle from anchor extents and center.
    pub fn new(width: f64, height: f64, center: WorldPoint) -> Self {
        Self {
            width,
            height,
            center,
        }
    }
}
