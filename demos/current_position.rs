//! Prints the Sun's azimuth and elevation for now or for a given UTC date.
//!
//! ```text
//! cargo run --example current_position
//! cargo run --example current_position -- "2020/01/09 10:16:00"
//! cargo run --example current_position -- 2020-01-09T10:16:00Z 52.975 -6.0494 0
//! ```

use chrono::Utc;
use solar_azel::{UtcFields, azel};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);

    let instant = match args.next() {
        Some(text) => text.parse::<UtcFields>()?,
        None => UtcFields::from_datetime(&Utc::now()),
    };

    // Defaults to a site near Dublin, Ireland
    let latitude = args.next().map_or(Ok(52.975), |arg| arg.parse::<f64>())?;
    let longitude = args.next().map_or(Ok(-6.0494), |arg| arg.parse::<f64>())?;
    let altitude_km = args.next().map_or(Ok(0.0), |arg| arg.parse::<f64>())?;

    let position = azel::solar_position(&instant, latitude, longitude, altitude_km)?;

    println!("Time: {instant}");
    println!("Site: {latitude}°, {longitude}°, {altitude_km} km");
    println!("Azimuth: {:.6}", position.azimuth());
    println!("Elevation: {:.6}", position.elevation());

    if position.is_sun_up() {
        println!("  Sun is above the horizon");
    } else {
        println!("  Sun is below the horizon");
    }

    Ok(())
}
