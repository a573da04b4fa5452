//! Error types for the opt-in validation layer.
//!
//! The core calculation never fails; these errors are only produced by the
//! checked entry points (`UtcFields::new`, `azel::solar_position`, parsing).

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors reported by the checked constructors and entry points.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid latitude value (must be between -90 and +90 degrees).
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid longitude value (must be between -180 and +180 degrees).
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// Invalid site altitude (must be a finite number of kilometres).
    InvalidAltitude {
        /// The invalid altitude value provided.
        value: f64,
    },
    /// Invalid calendar date/time field or unparseable date/time input.
    InvalidDateTime {
        /// Description of the date/time constraint violation.
        message: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidLongitude { value } => {
                write!(
                    f,
                    "invalid longitude {value}° (must be between -180° and +180°)"
                )
            }
            Self::InvalidAltitude { value } => {
                write!(f, "invalid altitude {value} km (must be finite)")
            }
            Self::InvalidDateTime { message } => {
                write!(f, "invalid date/time: {message}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Creates an invalid altitude error.
    #[must_use]
    pub const fn invalid_altitude(value: f64) -> Self {
        Self::InvalidAltitude { value }
    }

    /// Creates an invalid date/time error.
    #[must_use]
    pub const fn invalid_datetime(message: &'static str) -> Self {
        Self::InvalidDateTime { message }
    }
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is within the valid range (-180 to +180 degrees).
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates both latitude and longitude are within valid ranges.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_latitude(latitude)?;
    check_longitude(longitude)?;
    Ok(())
}

/// Validates the site altitude is a finite number of kilometres.
///
/// Negative altitudes (sites below sea level) are accepted.
///
/// # Errors
/// Returns `InvalidAltitude` for NaN or infinite values.
pub fn check_altitude(altitude_km: f64) -> Result<()> {
    if !altitude_km.is_finite() {
        return Err(Error::invalid_altitude(altitude_km));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latitude_validation() {
        assert!(check_latitude(0.0).is_ok());
        assert!(check_latitude(90.0).is_ok());
        assert!(check_latitude(-90.0).is_ok());
        assert!(check_latitude(52.975).is_ok());

        assert!(check_latitude(91.0).is_err());
        assert!(check_latitude(-91.0).is_err());
        assert!(check_latitude(200.0).is_err());
        assert!(check_latitude(f64::NAN).is_err());
        assert!(check_latitude(f64::INFINITY).is_err());
    }

    #[test]
    fn test_longitude_validation() {
        assert!(check_longitude(0.0).is_ok());
        assert!(check_longitude(180.0).is_ok());
        assert!(check_longitude(-180.0).is_ok());
        assert!(check_longitude(-6.0494).is_ok());

        assert!(check_longitude(181.0).is_err());
        assert!(check_longitude(-181.0).is_err());
        assert!(check_longitude(f64::NAN).is_err());
        assert!(check_longitude(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_coordinates_report_first_failure() {
        assert_eq!(
            check_coordinates(95.0, 185.0),
            Err(Error::invalid_latitude(95.0))
        );
        assert_eq!(
            check_coordinates(45.0, 185.0),
            Err(Error::invalid_longitude(185.0))
        );
        assert!(check_coordinates(45.0, -120.0).is_ok());
    }

    #[test]
    fn test_altitude_validation() {
        assert!(check_altitude(0.0).is_ok());
        assert!(check_altitude(8.849).is_ok());
        assert!(check_altitude(-0.43).is_ok());

        assert!(check_altitude(f64::NAN).is_err());
        assert!(check_altitude(f64::INFINITY).is_err());
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_error_display() {
        let err = Error::invalid_latitude(95.0);
        assert_eq!(
            err.to_string(),
            "invalid latitude 95° (must be between -90° and +90°)"
        );

        let err = Error::invalid_longitude(185.0);
        assert_eq!(
            err.to_string(),
            "invalid longitude 185° (must be between -180° and +180°)"
        );

        let err = Error::invalid_altitude(f64::INFINITY);
        assert_eq!(err.to_string(), "invalid altitude inf km (must be finite)");

        let err = Error::invalid_datetime("month must be between 1 and 12");
        assert_eq!(
            err.to_string(),
            "invalid date/time: month must be between 1 and 12"
        );
    }
}
