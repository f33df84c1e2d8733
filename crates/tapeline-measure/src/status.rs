use std::fmt;

use crate::units::{Meters, INCHES_PER_FOOT};

/// Tracking quality reported by the external world-tracking service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TrackingState {
    /// Tracking is not available on this device or session.
    NotAvailable,
    /// Tracking is running with limited quality.
    Limited,
    /// Tracking is running normally; placements are reliable.
    Normal,
}

/// What the host shows in its on-screen info label.
///
/// The label starts at [`SessionStatus::Loading`], follows the tracking
/// state while the user scans the scene, and switches to the latest
/// measurement once two markers are placed.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub enum SessionStatus {
    /// No tracking callback received yet.
    #[default]
    Loading,
    /// Tracking is not available.
    NotAvailable,
    /// Tracking quality is limited while the scene is analyzed.
    Analyzing,
    /// Tracking is normal; markers can be placed.
    Ready,
    /// The distance between the two most recent markers.
    Distance(Meters),
}

impl From<TrackingState> for SessionStatus {
    fn from(state: TrackingState) -> Self {
        match state {
            TrackingState::NotAvailable => Self::NotAvailable,
            TrackingState::Limited => Self::Analyzing,
            TrackingState::Normal => Self::Ready,
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loading => write!(f, "Loading..."),
            Self::NotAvailable => write!(f, "Not available"),
            Self::Analyzing => write!(f, "Analyzing"),
            Self::Ready => write!(f, "Ready"),
            Self::Distance(distance) => f.write_str(&distance_text(*distance)),
        }
    }
}

/// Format a measured distance for the info label.
///
/// Distances longer than one foot are shown in feet, shorter ones in
/// inches, both with exactly three decimal digits. The unit is chosen at
/// display precision: the inch value is rounded to three decimals first,
/// and only a rounded value strictly greater than 12 switches to feet.
/// A 0.3048 m measure therefore reads `"Distance: 12.000 inches"` even
/// though the raw conversion lands a hair above 12.
///
/// Non-finite distances are not guarded; they print as `NaN`/`inf`.
pub fn distance_text(distance: Meters) -> String {
    let inches = distance.to_inches();
    if round_to_display(inches.0) > INCHES_PER_FOOT {
        format!("Distance: {:.3} feet", inches.to_feet())
    } else {
        format!("Distance: {:.3} inches", inches.0)
    }
}

/// Round to the three decimals the label shows, half away from zero.
fn round_to_display(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
