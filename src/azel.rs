//! Solar azimuth/elevation from low-precision Keplerian elements.
//!
//! Follows the Sun section of Paul Schlyter's "How to compute planetary
//! positions" (<http://stjarnhimlen.se/comp/tutorial.html#5>) as packaged in
//! D. Koblick's `SolarAzEl` routine: geocentric orbital elements of the Sun,
//! rotation to equatorial coordinates, then an hour-angle rotation into the
//! observer's horizon frame.
//!
//! The calculation is split in two stages. [`sun_equatorial`] depends only on
//! the instant; [`az_el_from_sun_equatorial`] adds the site. [`solar_az_el`]
//! is exactly their composition.
//!
//! No refraction, nutation or aberration terms are applied, and the outputs
//! are neither wrapped nor clamped.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::suboptimal_flops)]

use crate::error::{check_altitude, check_coordinates};
use crate::math::{
    PI, asin, atan2, cos, degrees_to_radians, powi, radians_to_degrees, sin, sqrt,
};
use crate::time::UtcInstant;
use crate::{Result, SolarPosition};

/// Julian Day of 1999-12-31T00:00:00Z, the epoch of the orbital elements.
const ELEMENTS_EPOCH_JD: f64 = 2_451_543.5;

/// Kilometres per astronomical unit used by the altitude correction.
const KM_PER_AU: f64 = 149_598_000.0;

/// Obliquity applied to the z term of the ecliptic to equatorial rotation.
///
/// Every other obliquity-dependent term uses the time-varying value.
const Z_TERM_OBLIQUITY: f64 = 23.4406;

/// Site-independent part of the calculation for one instant.
///
/// Holds the Sun's geocentric equatorial rectangular coordinates together with
/// the sidereal-time inputs, so the same instant can be evaluated for several
/// sites without recomputing the orbital elements.
///
/// # Example
/// ```
/// # use solar_azel::{azel, time::UtcFields};
/// let instant = UtcFields::new(2020, 1, 9, 10, 16, 0).unwrap();
/// let sun = azel::sun_equatorial(&instant);
///
/// let dublin = azel::az_el_from_sun_equatorial(52.975, -6.0494, 0.0, &sun);
/// assert_eq!(dublin, azel::solar_az_el(&instant, 52.975, -6.0494, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunEquatorial {
    x: f64,
    y: f64,
    z: f64,
    /// Length of (x, y, z) in AU, before any altitude correction
    distance: f64,
    /// Right ascension in degrees, in (-180, 180]
    right_ascension: f64,
    /// Greenwich mean sidereal time at 0h UT, in hours
    gmst0: f64,
    /// UT hours since midnight
    ut_hours: f64,
}

impl SunEquatorial {
    /// Gets the equatorial rectangular coordinates `(x, y, z)` in AU.
    #[must_use]
    pub const fn rectangular(&self) -> (f64, f64, f64) {
        (self.x, self.y, self.z)
    }

    /// Gets the geocentric Sun distance in AU.
    #[must_use]
    pub const fn distance(&self) -> f64 {
        self.distance
    }

    /// Gets the right ascension in degrees (-180° to 180°).
    #[must_use]
    pub const fn right_ascension(&self) -> f64 {
        self.right_ascension
    }

    /// Gets the Greenwich mean sidereal time at 0h UT in hours.
    #[must_use]
    pub const fn gmst0(&self) -> f64 {
        self.gmst0
    }

    /// Gets the UT hours since midnight of the instant.
    #[must_use]
    pub const fn ut_hours(&self) -> f64 {
        self.ut_hours
    }

    /// Local sidereal time in hours for an observer at `longitude` degrees.
    ///
    /// Not reduced to [0, 24).
    #[must_use]
    pub fn local_sidereal_time(&self, longitude: f64) -> f64 {
        self.gmst0 + self.ut_hours + longitude / 15.0
    }
}

/// Calculates the solar azimuth and elevation for a site.
///
/// # Arguments
/// * `instant` - UTC instant (`UtcFields`, or chrono date/times with the `chrono` feature)
/// * `latitude` - Observer latitude in degrees (-90 to +90, south negative)
/// * `longitude` - Observer longitude in degrees (-180 to +180, west negative)
/// * `altitude_km` - Observer altitude above sea level in kilometres
///
/// # Returns
/// Raw azimuth and elevation in degrees. Inputs are not validated; use
/// [`solar_position`] for a range-checked variant.
///
/// # Example
/// ```rust
/// use solar_azel::{azel, time::UtcFields};
///
/// let instant = UtcFields::new(2020, 1, 9, 10, 16, 0).unwrap();
/// let position = azel::solar_az_el(&instant, 52.975, -6.0494, 0.0);
///
/// println!("Azimuth: {:.3}°", position.azimuth());
/// println!("Elevation: {:.3}°", position.elevation());
/// ```
#[must_use]
pub fn solar_az_el<T: UtcInstant + ?Sized>(
    instant: &T,
    latitude: f64,
    longitude: f64,
    altitude_km: f64,
) -> SolarPosition {
    let sun = sun_equatorial(instant);
    az_el_from_sun_equatorial(latitude, longitude, altitude_km, &sun)
}

/// Calculates the solar azimuth and elevation after validating the site.
///
/// Produces exactly the same numbers as [`solar_az_el`] for valid input.
///
/// # Errors
/// Returns error for invalid coordinates (latitude outside ±90°, longitude
/// outside ±180°) or a non-finite altitude.
///
/// # Example
/// ```rust
/// use solar_azel::{azel, time::UtcFields};
///
/// let instant = UtcFields::new(2020, 1, 9, 10, 16, 0).unwrap();
/// assert!(azel::solar_position(&instant, 52.975, -6.0494, 0.0).is_ok());
/// assert!(azel::solar_position(&instant, 200.0, -6.0494, 0.0).is_err());
/// ```
pub fn solar_position<T: UtcInstant + ?Sized>(
    instant: &T,
    latitude: f64,
    longitude: f64,
    altitude_km: f64,
) -> Result<SolarPosition> {
    check_coordinates(latitude, longitude)?;
    check_altitude(altitude_km)?;

    Ok(solar_az_el(instant, latitude, longitude, altitude_km))
}

/// Computes the site-independent stage for an instant.
#[must_use]
pub fn sun_equatorial<T: UtcInstant + ?Sized>(instant: &T) -> SunEquatorial {
    let fields = instant.utc_fields();
    let d = fields.julian_day() - ELEMENTS_EPOCH_JD;

    // Keplerian elements of the Sun (geocentric)
    let w = 282.9404 + 4.70935e-5 * d; // longitude of perihelion
    let e = 0.016709 - 1.151e-9 * d; // eccentricity
    let m = (356.0470 + 0.9856002585 * d) % 360.0; // mean anomaly
    let l = w + m; // mean longitude
    let oblecl = 23.4393 - 3.563e-7 * d; // obliquity of the ecliptic

    // Eccentric anomaly, single step
    let m_rad = degrees_to_radians(m);
    let ecc = m + (180.0 / PI) * e * sin(m_rad) * (1.0 + e * cos(m_rad));

    // Rectangular coordinates in the ecliptic plane, x towards perihelion
    let ecc_rad = degrees_to_radians(ecc);
    let x = cos(ecc_rad) - e;
    let y = sin(ecc_rad) * sqrt(1.0 - powi(e, 2));

    let r = sqrt(powi(x, 2) + powi(y, 2));
    let v = radians_to_degrees(atan2(y, x)); // true anomaly

    let lon_rad = degrees_to_radians(v + w);
    let xeclip = r * cos(lon_rad);
    let yeclip = r * sin(lon_rad);
    let zeclip = 0.0;

    let oblecl_rad = degrees_to_radians(oblecl);
    let xequat = xeclip;
    let yequat = yeclip * cos(oblecl_rad) + zeclip * sin(oblecl_rad);
    let zequat = yeclip * sin(degrees_to_radians(Z_TERM_OBLIQUITY)) + zeclip * cos(oblecl_rad);

    let distance = sqrt(powi(xequat, 2) + powi(yequat, 2) + powi(zequat, 2));
    let right_ascension = radians_to_degrees(atan2(yequat, xequat));

    SunEquatorial {
        x: xequat,
        y: yequat,
        z: zequat,
        distance,
        right_ascension,
        gmst0: ((l + 180.0) % 360.0) / 15.0,
        ut_hours: fields.hour_of_day(),
    }
}

/// Completes the calculation for a site using a precomputed [`SunEquatorial`].
///
/// # Arguments
/// * `latitude` - Observer latitude in degrees
/// * `longitude` - Observer longitude in degrees
/// * `altitude_km` - Observer altitude above sea level in kilometres
/// * `sun` - Output of [`sun_equatorial`] for the instant of interest
#[must_use]
pub fn az_el_from_sun_equatorial(
    latitude: f64,
    longitude: f64,
    altitude_km: f64,
    sun: &SunEquatorial,
) -> SolarPosition {
    let r = sun.distance - altitude_km / KM_PER_AU;
    let delta = radians_to_degrees(asin(sun.z / r)); // declination

    let hour_angle = sun.local_sidereal_time(longitude) * 15.0 - sun.right_ascension;

    // Rectangular coordinates in the local equatorial frame
    let ha_rad = degrees_to_radians(hour_angle);
    let delta_rad = degrees_to_radians(delta);
    let x = cos(ha_rad) * cos(delta_rad);
    let y = sin(ha_rad) * cos(delta_rad);
    let z = sin(delta_rad);

    // Rotate about the east-west axis onto the horizon
    let colatitude_rad = degrees_to_radians(90.0 - latitude);
    let xhor = x * cos(colatitude_rad) - z * sin(colatitude_rad);
    let yhor = y;
    let zhor = x * sin(colatitude_rad) + z * cos(colatitude_rad);

    let azimuth = radians_to_degrees(atan2(yhor, xhor)) + 180.0;
    let elevation = radians_to_degrees(asin(zhor));

    SolarPosition::new(azimuth, elevation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::UtcFields;

    const TOLERANCE: f64 = 1e-6;

    fn dublin_instant() -> UtcFields {
        UtcFields::new(2020, 1, 9, 10, 16, 0).unwrap()
    }

    #[test]
    fn test_reference_site() {
        let position = solar_az_el(&dublin_instant(), 52.975, -6.0494, 0.0);

        assert!((position.azimuth() - 148.548_700_350).abs() < TOLERANCE);
        assert!((position.elevation() - 9.361_294_102).abs() < TOLERANCE);
    }

    #[test]
    fn test_deterministic() {
        let first = solar_az_el(&dublin_instant(), 52.975, -6.0494, 0.0);
        let second = solar_az_el(&dublin_instant(), 52.975, -6.0494, 0.0);

        assert_eq!(first.azimuth().to_bits(), second.azimuth().to_bits());
        assert_eq!(first.elevation().to_bits(), second.elevation().to_bits());
    }

    #[test]
    fn test_split_matches_single_call() {
        let instant = UtcFields::new(2024, 12, 21, 3, 45, 30).unwrap();
        let sun = sun_equatorial(&instant);

        for (lat, lon, alt) in [
            (-33.8688, 151.2093, 0.058),
            (52.975, -6.0494, 0.0),
            (0.0, 0.0, 0.0),
            (89.9, -179.9, 3.0),
        ] {
            assert_eq!(
                az_el_from_sun_equatorial(lat, lon, alt, &sun),
                solar_az_el(&instant, lat, lon, alt)
            );
        }
    }

    #[test]
    fn test_sun_equatorial_stage() {
        let sun = sun_equatorial(&dublin_instant());

        // Early January: the Sun is near perihelion and well south of the equator.
        assert!(sun.distance() > 0.983 && sun.distance() < 0.984);
        let (_, _, z) = sun.rectangular();
        assert!(z < 0.0);
        assert!(sun.right_ascension() < -60.0 && sun.right_ascension() > -80.0);
        assert!((sun.ut_hours() - (10.0 + 16.0 / 60.0)).abs() < 1e-12);
        assert!(sun.gmst0() >= 0.0 && sun.gmst0() < 24.0);
    }

    #[test]
    fn test_local_sidereal_time_shifts_with_longitude() {
        let sun = sun_equatorial(&dublin_instant());
        let greenwich = sun.local_sidereal_time(0.0);

        assert!((sun.local_sidereal_time(15.0) - greenwich - 1.0).abs() < 1e-12);
        assert!((sun.local_sidereal_time(-90.0) - greenwich + 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_altitude_lowers_distance_term() {
        let sun = sun_equatorial(&dublin_instant());
        let sea_level = az_el_from_sun_equatorial(52.975, -6.0494, 0.0, &sun);
        let high = az_el_from_sun_equatorial(52.975, -6.0494, 1000.0, &sun);

        // Tiny but non-zero shift.
        let shift = (high.elevation() - sea_level.elevation()).abs();
        assert!(shift > 0.0 && shift < 1e-3);
    }

    #[test]
    fn test_checked_variant() {
        let instant = dublin_instant();
        let checked = solar_position(&instant, 52.975, -6.0494, 0.0).unwrap();
        assert_eq!(checked, solar_az_el(&instant, 52.975, -6.0494, 0.0));

        assert!(solar_position(&instant, 95.0, 0.0, 0.0).is_err());
        assert!(solar_position(&instant, 0.0, 185.0, 0.0).is_err());
        assert!(solar_position(&instant, 0.0, 0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_unvalidated_input_still_returns() {
        // Latitude 200° is meaningless but the unchecked path stays total.
        let position = solar_az_el(&dublin_instant(), 200.0, -6.0494, 0.0);
        assert!(position.azimuth().is_finite());
        assert!(position.elevation().is_finite());
    }

    #[test]
    fn test_azimuth_range() {
        for hour in 0..24 {
            let instant = UtcFields::new(2023, 6, 21, hour, 0, 0).unwrap();
            let position = solar_az_el(&instant, 37.7749, -122.4194, 0.0);
            assert!(position.azimuth() > 0.0 && position.azimuth() <= 360.0);
            assert!(position.elevation() >= -90.0 && position.elevation() <= 90.0);
        }
    }
}
