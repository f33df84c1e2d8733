use tapeline_geometry::{LineSegment, WorldPoint};

use crate::status::distance_text;
use crate::units::Meters;

/// Whether a session has recorded any markers yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No markers placed.
    Empty,
    /// At least one marker placed.
    Tracking,
}

/// The distance between the newest marker and its predecessor.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Measurement {
    /// The predecessor marker.
    pub from: WorldPoint,
    /// The marker that was just placed.
    pub to: WorldPoint,
    /// Euclidean distance between the two markers.
    pub distance: Meters,
    /// The formatted info-label text, e.g. `"Distance: 8.000 inches"`.
    pub label: String,
}

impl Measurement {
    /// The segment connecting the two markers, for the renderer to draw.
    pub fn segment(&self) -> LineSegment {
        LineSegment::new(self.from, self.to)
    }
}

/// The outcome of placing one marker.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Placement {
    /// The marker that was just placed.
    pub point: WorldPoint,
    /// The measurement against the previous marker, absent on the first
    /// placement.
    pub measurement: Option<Measurement>,
}

impl Placement {
    /// Segment from the previous marker to the new one, if this placement
    /// produced a measurement.
    pub fn segment(&self) -> Option<LineSegment> {
        self.measurement.as_ref().map(Measurement::segment)
    }
}

/// An ordered record of placed markers and the measurements between them.
///
/// Markers are appended in placement order and only leave the session
/// through [`MeasureSession::clear`]. The session is owned by whatever
/// adapter receives tap events from the host framework; it keeps no global
/// state and never blocks.
#[derive(Debug, Clone, Default)]
pub struct MeasureSession {
    points: Vec<WorldPoint>,
}

impl MeasureSession {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a tapped point and measure against its predecessor.
    ///
    /// Appends `point` to the session. The first placement carries no
    /// measurement; every later placement measures against the marker
    /// placed immediately before it. This operation cannot fail: any
    /// point is accepted, and non-finite coordinates propagate into the
    /// distance unguarded.
    pub fn place_point(&mut self, point: WorldPoint) -> Placement {
        if !point.is_finite() {
            log::warn!("placing marker with non-finite coordinates: {point:?}");
        }
        let previous = self.points.last().copied();
        self.points.push(point);

        let measurement = previous.map(|from| {
            let distance = Meters(from.distance_to(&point));
            log::debug!(
                "marker {} placed, {} from previous",
                self.points.len() - 1,
                distance
            );
            Measurement {
                from,
                to: point,
                distance,
                label: distance_text(distance),
            }
        });
        Placement { point, measurement }
    }

    /// Current state of the two-state session machine.
    #[inline]
    pub fn state(&self) -> SessionState {
        if self.points.is_empty() {
            SessionState::Empty
        } else {
            SessionState::Tracking
        }
    }

    /// The placed markers, in placement order.
    pub fn points(&self) -> &[WorldPoint] {
        &self.points
    }

    /// The most recently placed marker.
    pub fn last_point(&self) -> Option<WorldPoint> {
        self.points.last().copied()
    }

    /// Segments between consecutive markers, in placement order.
    ///
    /// A renderer redrawing the scene from scratch draws one line per
    /// segment; an incremental renderer only needs [`Placement::segment`].
    pub fn segments(&self) -> impl Iterator<Item = LineSegment> + '_ {
        self.points
            .windows(2)
            .map(|pair| LineSegment::new(pair[0], pair[1]))
    }

    /// Number of placed markers.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the session has no markers.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Forget all markers, returning the session to [`SessionState::Empty`].
    ///
    /// Invoked when the host resets tracking or tears the screen down.
    pub fn clear(&mut self) {
        self.points.clear();
    }
}
