//! Evaluates one instant for several sites, reusing the site-independent stage.

use chrono::{DateTime, Utc};
use solar_azel::azel;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let datetime = "2024-06-21T12:00:00Z".parse::<DateTime<Utc>>()?;
    let sun = azel::sun_equatorial(&datetime);

    println!("Sun at {datetime}");
    println!("  Right ascension: {:.4}°", sun.right_ascension());
    println!("  Distance: {:.6} AU", sun.distance());
    println!("  GMST0: {:.4} h\n", sun.gmst0());

    let sites = [
        ("Dublin", 52.975, -6.0494, 0.0),
        ("Quito", -0.1807, -78.4678, 2.85),
        ("Sydney", -33.8688, 151.2093, 0.058),
        ("Longyearbyen", 78.2232, 15.6267, 0.0),
    ];

    for (name, lat, lon, alt_km) in sites {
        let position = azel::az_el_from_sun_equatorial(lat, lon, alt_km, &sun);
        println!(
            "  {name:<13} Azimuth: {:>8.3}°  Elevation: {:>8.3}°",
            position.azimuth(),
            position.elevation()
        );
    }

    Ok(())
}
