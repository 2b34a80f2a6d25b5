use chrono::TimeZone;
use chrono_tz::America::Chicago;

use solar_orienter::panel::{ConsoleDriver, PanelDriver, PanelOrientation};
use solar_orienter::{
    generate_day_track, lookup_track, observation_time, Coordinate, SolarCalculator, TrackConfig,
};

fn main() -> solar_orienter::Result<()> {
    let springfield = Coordinate::new(39.8, -89.6);
    // Central Standard Time is centred on 90°W
    let calculator = SolarCalculator::new(-90.0)?;

    let dt = Chicago.with_ymd_and_hms(2026, 3, 21, 12, 0, 0).unwrap();
    let time = observation_time(&dt);
    let pos = calculator.position(&springfield, &time)?;

    println!("=== Solar Position Calculation Example ===");
    println!(
        "Location: Springfield, IL ({:.1}°N, {:.1}°W)",
        springfield.latitude, -springfield.longitude
    );
    println!("Date/Time: {}", dt);
    println!();
    println!("--- Solar Position ---");
    println!("Day of year: {}", pos.day_of_year);
    println!("Declination: {:.2}°", pos.declination);
    println!("Equation of Time: {:.2} minutes", pos.equation_of_time);
    println!("Solar Time: {:.2} hours", pos.solar_hour);
    println!("Hour Angle: {:.2}°", pos.hour_angle);
    println!("Elevation: {:.2}°", pos.elevation);
    match pos.azimuth {
        Some(az) => println!("Azimuth: {:.2}° (0°=N, 90°=E, 180°=S)", az),
        None => println!("Azimuth: undefined"),
    }
    println!();

    let mut driver = ConsoleDriver::new(std::io::stdout());
    driver.orient(&PanelOrientation::from_position(&pos))?;
    println!();

    let track = generate_day_track(&TrackConfig {
        interval_minutes: 60,
        reference_meridian: calculator.reference_meridian(),
        ..TrackConfig::new(springfield, pos.day_of_year)
    })?;
    println!("--- Hourly Track ---");
    for entry in track.entries.iter().filter(|e| e.daylight) {
        println!(
            "{:02}:00  elevation {:>6.2}°  azimuth {}",
            entry.minutes / 60,
            entry.elevation,
            entry
                .azimuth
                .map(|a| format!("{:.2}°", a))
                .unwrap_or_else(|| "-".to_string())
        );
    }
    if let Some(at) = lookup_track(&track, 12 * 60 + 30) {
        println!("12:30 interpolated elevation: {:.2}°", at.elevation);
    }
    Ok(())
}
