//! Result types for solar azimuth/elevation calculations.

use crate::math::normalize_degrees_0_to_360;

/// Apparent solar position in the local horizon frame.
///
/// Values are kept exactly as the algorithm produces them:
/// - Azimuth: 0° = North, measured clockwise through East. The raw value
///   lies in (0°, 360°] because of the final +180° offset and is not wrapped.
/// - Elevation: 0° = horizon, positive above it. Not clamped.
///
/// # Example
/// ```
/// # use solar_azel::SolarPosition;
/// let position = SolarPosition::new(180.0, 30.0);
/// assert_eq!(position.azimuth(), 180.0);
/// assert_eq!(position.elevation(), 30.0);
/// assert_eq!(position.zenith_angle(), 60.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Azimuth angle in degrees (0° = North, increasing clockwise)
    azimuth: f64,
    /// Elevation angle in degrees above the horizon
    elevation: f64,
}

impl SolarPosition {
    /// Creates a solar position from raw azimuth and elevation in degrees.
    #[must_use]
    pub const fn new(azimuth: f64, elevation: f64) -> Self {
        Self {
            azimuth,
            elevation,
        }
    }

    /// Gets the raw azimuth angle in degrees.
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Gets the azimuth wrapped into [0°, 360°).
    ///
    /// The only raw value this changes for finite input is exactly 360°.
    #[must_use]
    pub fn normalized_azimuth(&self) -> f64 {
        normalize_degrees_0_to_360(self.azimuth)
    }

    /// Gets the elevation angle in degrees.
    #[must_use]
    pub const fn elevation(&self) -> f64 {
        self.elevation
    }

    /// Gets the zenith angle in degrees: zenith = 90° - elevation.
    #[must_use]
    pub fn zenith_angle(&self) -> f64 {
        90.0 - self.elevation
    }

    /// Checks if the sun is above the horizon (elevation angle > 0°).
    #[must_use]
    pub fn is_sun_up(&self) -> bool {
        self.elevation > 0.0
    }

    /// Checks if the sun is at or below the horizon (elevation angle ≤ 0°).
    #[must_use]
    pub fn is_sun_down(&self) -> bool {
        self.elevation <= 0.0
    }
}

impl From<SolarPosition> for (f64, f64) {
    /// Splits into `(azimuth, elevation)`.
    fn from(position: SolarPosition) -> Self {
        (position.azimuth, position.elevation)
    }
}
