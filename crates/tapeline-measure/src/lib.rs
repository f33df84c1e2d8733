#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Measurement session over placed markers.
pub mod session;

/// User-facing status strings and distance formatting.
pub mod status;

/// Display units and conversions.
pub mod units;

pub use session::{MeasureSession, Measurement, Placement, SessionState};
pub use status::{distance_text, SessionStatus, TrackingState};
pub use units::{Inches, Meters};
