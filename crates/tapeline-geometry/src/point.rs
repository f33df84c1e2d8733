/// A position in the AR world frame with x, y, and z coordinates in meters.
///
/// The world frame is the camera-relative coordinate space supplied by the
/// host tracking service. Points are created once per accepted tap and never
/// mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct WorldPoint {
    /// x coordinate in meters.
    pub x: f64,
    /// y coordinate in meters.
    pub y: f64,
    /// z coordinate in meters.
    pub z: f64,
}

impl WorldPoint {
    /// The world-frame origin.
    pub const ORIGIN: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Create a new point from its coordinates.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Create a new point from an array of 3 f64 values.
    pub fn from_array(array: &[f64; 3]) -> Self {
        Self {
            x: array[0],
            y: array[1],
            z: array[2],
        }
    }

    /// Return the coordinates as an array.
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Extract the position from a column-major 4x4 world transform.
    ///
    /// Hit-test services report a tapped feature point as a rigid transform
    /// in the world frame; the position is the translation column (the last
    /// column). Coordinates are widened from the tracker's single precision.
    pub fn from_world_transform(transform: &[[f32; 4]; 4]) -> Self {
        let translation = transform[3];
        Self {
            x: translation[0] as f64,
            y: translation[1] as f64,
            z: translation[2] as f64,
        }
    }

    /// Euclidean distance to another point, in meters.
    ///
    /// Computed as `sqrt(dx^2 + dy^2 + dz^2)`. The distance is symmetric in
    /// its two endpoints and zero for identical points. Non-finite
    /// coordinates are not rejected; they propagate into the result.
    pub fn distance_to(&self, destination: &WorldPoint) -> f64 {
        let dx = destination.x - self.x;
        let dy = destination.y - self.y;
        let dz = destination.z - self.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// The point halfway between this point and another.
    pub fn midpoint(&self, other: &WorldPoint) -> WorldPoint {
        WorldPoint {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
            z: (self.z + other.z) / 2.0,
        }
    }

    /// Whether all three coordinates are finite.
    ///
    /// Callers that want to reject degenerate hit-test results can check
    /// this before handing the point to a measuring session; the session
    /// itself stays permissive.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}
