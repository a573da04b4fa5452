//! # Solar Azimuth/Elevation
//!
//! Apparent position of the Sun (azimuth and elevation) for a site on Earth at a UTC instant.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! The calculation follows the low-precision solar position method from Paul Schlyter's
//! "How to compute planetary positions" tutorial, in the form popularised by D. Koblick's
//! `SolarAzEl` routine:
//!
//! 1. the UTC calendar fields are turned into a Julian Day,
//! 2. geocentric Keplerian elements of the Sun give its equatorial coordinates,
//! 3. local sidereal time turns right ascension into an hour angle,
//! 4. a rotation by the site's colatitude yields azimuth and elevation.
//!
//! Accuracy is in the range of a few hundredths of a degree for present-day dates. There is
//! no atmospheric refraction, nutation or aberration correction.
//!
//! ## Features
//!
//! - Pure and stateless: identical inputs give bit-identical results, no global clock or
//!   `gmtime`-style calendar state is consulted
//! - Multiple configurations: `std` or `no_std`, with or without `chrono`, math via native or `libm`
//! - Split calculation: compute the site-independent stage once, evaluate it for many sites
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions (usually faster than `libm`)
//! - `chrono` (default): Accept chrono `DateTime<Tz>`/`NaiveDateTime`, unix timestamps and date strings
//! - `libm`: Use pure Rust math for `no_std` environments
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono
//! solar-azel = "0.1"
//!
//! # Minimal no_std (pure numeric API)
//! solar-azel = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Quick Start
//!
//! ### With chrono
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use solar_azel::azel;
//! use chrono::{DateTime, Utc};
//!
//! let datetime = "2020-01-09T10:16:00Z".parse::<DateTime<Utc>>().unwrap();
//! let position = azel::solar_az_el(&datetime, 52.975, -6.0494, 0.0);
//!
//! println!("Azimuth: {:.3}°", position.azimuth());
//! println!("Elevation: {:.3}°", position.elevation());
//! # }
//! ```
//!
//! ### Numeric API, no chrono
//! ```rust
//! use solar_azel::{azel, time::{julian_day, UtcFields}};
//!
//! let instant = UtcFields::new(2020, 1, 9, 10, 16, 0).unwrap();
//! assert!((julian_day(&instant) - 2_458_857.927_777_8).abs() < 1e-6);
//!
//! let position = azel::solar_az_el(&instant, 52.975, -6.0494, 0.0);
//! assert!((position.azimuth() - 148.5487).abs() < 1e-4);
//! assert!((position.elevation() - 9.3613).abs() < 1e-4);
//! ```
//!
//! ## Validation
//!
//! [`azel::solar_az_el`] and [`time::julian_day`] never fail and never validate: out-of-range
//! calendar fields or coordinates produce arithmetically defined, physically meaningless output.
//! [`time::UtcFields::new`] and [`azel::solar_position`] add range checks and return [`Result`].
//!
//! ## Coordinate System
//!
//! - **Azimuth**: 0° = North, measured clockwise, raw range (0°, 360°] (not wrapped)
//! - **Elevation**: 0° = horizon, 90° = directly overhead (not clamped)
//! - **Altitude**: site height above sea level in kilometres

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Bit-exact comparisons against reference values in tests
)]

// Public API exports
pub use crate::azel::{SunEquatorial, solar_az_el};
pub use crate::error::{Error, Result};
pub use crate::time::{UtcFields, UtcInstant, julian_day};
pub use crate::types::SolarPosition;

// Algorithm modules
pub mod azel;

// Core modules
pub mod error;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod time;

#[cfg(all(test, feature = "chrono"))]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset, TimeZone, Utc};

    #[test]
    fn test_time_zones_resolve_to_same_instant() {
        let datetime_fixed = "2023-06-21T12:00:00-07:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();
        let datetime_utc = Utc.with_ymd_and_hms(2023, 6, 21, 19, 0, 0).unwrap();

        let position1 = solar_az_el(&datetime_fixed, 37.7749, -122.4194, 0.0);
        let position2 = solar_az_el(&datetime_utc, 37.7749, -122.4194, 0.0);

        // The offset only selects the instant; both are decomposed in UTC
        assert_eq!(position1, position2);
        assert_eq!(julian_day(&datetime_fixed), julian_day(&datetime_utc));

        assert!((position1.azimuth() - 128.054_526_058).abs() < 1e-6);
        assert!((position1.elevation() - 69.043_912_291).abs() < 1e-6);
    }

    #[test]
    fn test_unix_timestamp_and_fields_agree() {
        let from_timestamp = UtcFields::from_unix_timestamp(1_578_564_960).unwrap();
        let from_fields = UtcFields::new(2020, 1, 9, 10, 16, 0).unwrap();

        assert_eq!(
            solar_az_el(&from_timestamp, 52.975, -6.0494, 0.0),
            solar_az_el(&from_fields, 52.975, -6.0494, 0.0)
        );
    }
}
