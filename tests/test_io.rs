use std::io::{Cursor, Write};

use solar_orienter::error::Error;
use solar_orienter::input::{prompt_number, read_coordinate};
use solar_orienter::panel::{ConsoleDriver, PanelDriver, PanelOrientation};
use solar_orienter::report::{position_text, to_json, track_text};
use solar_orienter::track::generate_day_track;
use solar_orienter::types::{Coordinate, ObservationTime, SolarPosition, TrackConfig};
use solar_orienter::SolarCalculator;

fn sample_position(elevation: f64, azimuth: Option<f64>) -> SolarPosition {
    SolarPosition {
        day_of_year: 172,
        declination: 23.45,
        equation_of_time: -1.45,
        solar_hour: 12.0,
        hour_angle: 0.0,
        elevation,
        azimuth,
    }
}

// ── Interactive input ──

#[test]
fn test_read_coordinate_prompts_in_order() {
    let mut reader = Cursor::new("40.5\n  -74.25 \n");
    let mut out = Vec::new();
    let coord = read_coordinate(&mut reader, &mut out).unwrap();
    assert_eq!(coord, Coordinate::new(40.5, -74.25));
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Enter latitude: Enter longitude: "
    );
}

#[test]
fn test_prompts_stay_out_of_json_output() {
    let mut reader = Cursor::new("40\n-74\n");
    let mut prompts = Vec::new();
    let mut stdout = Vec::new();
    let coord = read_coordinate(&mut reader, &mut prompts).unwrap();
    let pos = SolarCalculator::default()
        .position(&coord, &ObservationTime::new(172, 12.0))
        .unwrap();
    writeln!(stdout, "{}", to_json(&pos).unwrap()).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&stdout).unwrap();
    assert_eq!(value["day_of_year"], 172);
    assert!(String::from_utf8(prompts).unwrap().contains("Enter latitude: "));
}

#[test]
fn test_read_coordinate_rejects_garbage() {
    let mut reader = Cursor::new("forty\n-74\n");
    let mut out = Vec::new();
    let err = read_coordinate(&mut reader, &mut out).unwrap_err();
    assert!(matches!(err, Error::Parse { field: "latitude", ref input } if input == "forty"));
}

#[test]
fn test_prompt_number_at_end_of_input() {
    let mut reader = Cursor::new("");
    let mut out = Vec::new();
    let err = prompt_number(&mut reader, &mut out, "> ", "longitude").unwrap_err();
    assert!(matches!(err, Error::Parse { field: "longitude", .. }));
}

// ── Panel stub ──

#[test]
fn test_orientation_faces_sun() {
    let o = PanelOrientation::from_position(&sample_position(50.0, Some(180.0)));
    assert_eq!(o.tilt, 40.0);
    assert_eq!(o.azimuth, Some(180.0));
    assert!(o.sun_up);
}

#[test]
fn test_orientation_below_horizon_is_flat_and_down() {
    let o = PanelOrientation::from_position(&sample_position(-10.0, Some(20.0)));
    assert_eq!(o.tilt, 90.0);
    assert!(!o.sun_up);
}

#[test]
fn test_console_driver_prints_target() {
    let mut driver = ConsoleDriver::new(Vec::new());
    driver
        .orient(&PanelOrientation::from_position(&sample_position(50.0, Some(180.0))))
        .unwrap();
    assert_eq!(
        String::from_utf8(driver.into_inner()).unwrap(),
        "Orienting solar panel...\nTilt: 40.00 degrees\nAzimuth: 180.00 degrees\n"
    );
}

#[test]
fn test_console_driver_undefined_azimuth() {
    let mut driver = ConsoleDriver::new(Vec::new());
    driver
        .orient(&PanelOrientation::from_position(&sample_position(90.0, None)))
        .unwrap();
    let out = String::from_utf8(driver.into_inner()).unwrap();
    assert!(out.contains("Tilt: 0.00 degrees"));
    assert!(out.contains("Azimuth: undefined"));
}

#[test]
fn test_console_driver_stows_at_night() {
    let mut driver = ConsoleDriver::new(Vec::new());
    driver
        .orient(&PanelOrientation::from_position(&sample_position(-5.0, Some(300.0))))
        .unwrap();
    let out = String::from_utf8(driver.into_inner()).unwrap();
    assert!(out.starts_with("Sun below horizon"));
    assert!(!out.contains("Orienting"));
}

// ── Report ──

#[test]
fn test_position_text_two_decimals() {
    let text = position_text(&sample_position(73.456, Some(179.994)));
    assert_eq!(
        text,
        "Solar elevation: 73.46 degrees\nSolar azimuth: 179.99 degrees\n"
    );
}

#[test]
fn test_position_text_undefined_azimuth() {
    let text = position_text(&sample_position(88.12, None));
    assert!(text.ends_with("Solar azimuth: undefined\n"));
}

#[test]
fn test_position_json_has_null_azimuth() {
    let json = to_json(&sample_position(88.12, None)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value["azimuth"].is_null());
    assert_eq!(value["day_of_year"], 172);
    assert_eq!(value["elevation"], 88.12);
}

#[test]
fn test_track_text_lists_entries() {
    let track = generate_day_track(&TrackConfig::default()).unwrap();
    let text = track_text(&track);
    let mut lines = text.lines();
    assert!(lines.next().unwrap().starts_with("Day 80 at (39.8000, -89.6000), sunrise 06:10, sunset 18:07"));
    assert_eq!(lines.count(), track.entries.len());
    assert!(text.contains("12:00"));
    assert!(text.contains("(dark)"));
}
