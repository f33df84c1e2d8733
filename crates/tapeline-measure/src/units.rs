use std::fmt;

/// Inches in one meter, the conversion factor used by the display rules.
pub const INCHES_PER_METER: f64 = 39.3701;

/// Inches in one foot.
pub const INCHES_PER_FOOT: f64 = 12.0;

/// A distance in meters, the unit of the world frame.
#[derive(
    Debug, Clone, Copy, PartialEq, PartialOrd, Default, serde::Serialize, serde::Deserialize,
)]
pub struct Meters(pub f64);

impl Meters {
    /// Convert to inches.
    pub fn to_inches(self) -> Inches {
        Inches(self.0 * INCHES_PER_METER)
    }

    /// Whether the value is finite.
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl fmt::Display for Meters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} m", self.0)
    }
}

/// A distance in inches.
#[derive(
    Debug, Clone, Copy, PartialEq, PartialOrd, Default, serde::Serialize, serde::Deserialize,
)]
pub struct Inches(pub f64);

impl Inches {
    /// Convert to feet.
    pub fn to_feet(self) -> f64 {
        self.0 / INCHES_PER_FOOT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_meters_to_inches() {
        assert_relative_eq!(Meters(1.0).to_inches().0, 39.3701, epsilon = 1e-12);
        assert_relative_eq!(Meters(0.5).to_inches().0, 19.68505, epsilon = 1e-12);
    }

    #[test]
    fn test_inches_to_feet() {
        assert_relative_eq!(Inches(24.0).to_feet(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(Inches(6.0).to_feet(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_meters_display() {
        assert_eq!(Meters(0.3048).to_string(), "0.305 m");
        assert_eq!(Meters(2.0).to_string(), "2.000 m");
    }

    #[test]
    fn test_non_finite() {
        assert!(Meters(1.0).is_finite());
        assert!(!Meters(f64::NAN).is_finite());
        assert!(Meters(f64::NAN).to_inches().0.is_nan());
    }
}
