#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

use std::collections::HashMap;
use std::fmt;

use tapeline_geometry::WorldPoint;

/// Error types for anchor tracking.
pub mod errors;

mod rect;
pub use rect::PlaneRect;

use crate::errors::AnchorError;

/// Identifier of a plane anchor, assigned by the external tracker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct AnchorId(String);

impl AnchorId {
    /// Create an id from its string form.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AnchorId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for AnchorId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for AnchorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One notification from the external plane-detection service.
///
/// Adapters translate the host framework's anchor callbacks into these
/// values and feed them to [`PlaneAnchorTracker::apply`].
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum AnchorEvent {
    /// A new plane anchor appeared.
    Added {
        /// Id assigned by the tracker.
        id: AnchorId,
        /// Extent along the anchor's x axis, in meters.
        extent_x: f64,
        /// Extent along the anchor's z axis, in meters.
        extent_z: f64,
        /// Plane center in the world frame.
        center: WorldPoint,
    },
    /// An existing anchor's estimate was refined.
    Updated {
        /// Id assigned by the tracker.
        id: AnchorId,
        /// Extent along the anchor's x axis, in meters.
        extent_x: f64,
        /// Extent along the anchor's z axis, in meters.
        extent_z: f64,
        /// Plane center in the world frame.
        center: WorldPoint,
    },
    /// An anchor was dropped by the tracker.
    Removed {
        /// Id assigned by the tracker.
        id: AnchorId,
    },
}

/// Keeps one renderable rectangle per tracked plane anchor.
///
/// The external plane-detection service delivers add, update and remove
/// notifications for horizontal planes as it refines its estimates; this
/// tracker mirrors them into [`PlaneRect`] values so that rapid anchor
/// churn never drops state. Rectangles are returned as copies; the host
/// rendering layer resizes its overlays from them.
#[derive(Debug, Clone, Default)]
pub struct PlaneAnchorTracker {
    planes: HashMap<AnchorId, PlaneRect>,
}

impl PlaneAnchorTracker {
    /// Create a tracker with no known anchors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking a newly detected anchor.
    ///
    /// Stores a rectangle with `width = extent_x`, `height = extent_z` and
    /// the given center, and returns it. Fails with
    /// [`AnchorError::DuplicateAnchor`] when the id is already tracked;
    /// callers that want overwrite semantics should fall back to
    /// [`PlaneAnchorTracker::anchor_updated`] on that error.
    pub fn anchor_added(
        &mut self,
        id: AnchorId,
        extent_x: f64,
        extent_z: f64,
        center: WorldPoint,
    ) -> Result<PlaneRect, AnchorError> {
        if self.planes.contains_key(&id) {
            return Err(AnchorError::DuplicateAnchor(id));
        }
        let rect = PlaneRect::new(extent_x, extent_z, center);
        log::debug!("anchor {} added ({} x {} m)", id, extent_x, extent_z);
        self.planes.insert(id, rect);
        Ok(rect)
    }

    /// Refresh a tracked anchor's rectangle in place.
    ///
    /// The latest extents and center always win. Fails with
    /// [`AnchorError::UnknownAnchor`] when the id is not tracked, which
    /// also covers updates that race ahead of an add or trail a removal.
    pub fn anchor_updated(
        &mut self,
        id: &AnchorId,
        extent_x: f64,
        extent_z: f64,
        center: WorldPoint,
    ) -> Result<PlaneRect, AnchorError> {
        match self.planes.get_mut(id) {
            Some(rect) => {
                rect.width = extent_x;
                rect.height = extent_z;
                rect.center = center;
                log::debug!("anchor {} updated ({} x {} m)", id, extent_x, extent_z);
                Ok(*rect)
            }
            None => Err(AnchorError::UnknownAnchor(id.clone())),
        }
    }

    /// Stop tracking an anchor, returning its last rectangle.
    ///
    /// Removing an id that is not tracked is a no-op and returns `None`;
    /// the external tracker may remove anchors the core never saw.
    pub fn anchor_removed(&mut self, id: &AnchorId) -> Option<PlaneRect> {
        let removed = self.planes.remove(id);
        match removed {
            Some(_) => log::debug!("anchor {} removed", id),
            None => log::debug!("ignoring removal of unknown anchor {}", id),
        }
        removed
    }

    /// Dispatch one notification to the matching handler.
    ///
    /// Returns the rectangle the event left behind: the stored snapshot for
    /// adds and updates, the discarded rectangle for removals, and `None`
    /// for a removal that found nothing.
    pub fn apply(&mut self, event: AnchorEvent) -> Result<Option<PlaneRect>, AnchorError> {
        match event {
            AnchorEvent::Added {
                id,
                extent_x,
                extent_z,
                center,
            } => self.anchor_added(id, extent_x, extent_z, center).map(Some),
            AnchorEvent::Updated {
                id,
                extent_x,
                extent_z,
                center,
            } => self
                .anchor_updated(&id, extent_x, extent_z, center)
                .map(Some),
            AnchorEvent::Removed { id } => Ok(self.anchor_removed(&id)),
        }
    }

    /// Snapshot of a tracked anchor's rectangle.
    pub fn get(&self, id: &AnchorId) -> Option<PlaneRect> {
        self.planes.get(id).copied()
    }

    /// Iterate over all tracked anchors and their rectangles.
    pub fn iter(&self) -> impl Iterator<Item = (&AnchorId, &PlaneRect)> {
        self.planes.iter()
    }

    /// Number of tracked anchors.
    #[inline]
    pub fn len(&self) -> usize {
        self.planes.len()
    }

    /// Whether no anchors are tracked.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }

    /// Discard all tracked anchors.
    ///
    /// Invoked when the host restarts its session with existing anchors
    /// removed.
    pub fn clear(&mut self) {
        self.planes.clear();
    }
}
