use crate::WorldPoint;

/// The straight segment between two consecutive markers.
///
/// The core hands this to the rendering layer as plain data; drawing the
/// actual line primitive is the renderer's job.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LineSegment {
    /// Start of the segment (the earlier marker).
    pub from: WorldPoint,
    /// End of the segment (the later marker).
    pub to: WorldPoint,
}

impl LineSegment {
    /// Create a segment between two points.
    pub fn new(from: WorldPoint, to: WorldPoint) -> Self {
        Self { from, to }
    }

    /// Length of the segment in meters.
    pub fn length(&self) -> f64 {
        self.from.distance_to(&self.to)
    }

    /// The point halfway along the segment, where a renderer would place a
    /// floating distance label.
    pub fn midpoint(&self) -> WorldPoint {
        self.from.midpoint(&self.to)
    }
}
