//! Example demonstrating usage without the chrono dependency.
//!
//! Callers decompose their own timestamps into UTC fields.

use solar_azel::{UtcFields, azel, julian_day};

fn main() {
    // 2009-02-17 19:00:00 UTC, Vienna: 48.21°N, 16.37°E, 190 m
    let instant = UtcFields::new(2009, 2, 17, 19, 0, 0).expect("Valid date");

    println!("Solar azimuth/elevation without chrono\n");
    println!("Instant: {instant}");
    println!("Julian Day: {:.6}\n", julian_day(&instant));

    let position = azel::solar_position(&instant, 48.21, 16.37, 0.19).expect("Valid coordinates");
    println!("Azimuth: {:.3}°", position.azimuth());
    println!("Elevation: {:.3}°", position.elevation());
    println!("Zenith: {:.3}°\n", position.zenith_angle());

    // Unvalidated fields are accepted by the unchecked constructor: day 32 of
    // January is simply February 1st as far as the arithmetic is concerned.
    let overflowed = UtcFields::new_unchecked(2009, 1, 32, 0, 0, 0);
    println!(
        "{} -> Julian Day {:.1} (same as 2009-02-01: {:.1})",
        overflowed,
        julian_day(&overflowed),
        julian_day(&UtcFields::new_unchecked(2009, 2, 1, 0, 0, 0))
    );
}
