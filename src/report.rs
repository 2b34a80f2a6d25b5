use std::fmt::Write as _;

use serde::Serialize;

use crate::track::minutes_to_time;
use crate::types::{DayTrack, SolarPosition};

pub fn format_azimuth(azimuth: Option<f64>) -> String {
    match azimuth {
        Some(az) => format!("{:.2} degrees", az),
        None => "undefined".to_string(),
    }
}

pub fn position_text(pos: &SolarPosition) -> String {
    format!(
        "Solar elevation: {:.2} degrees\nSolar azimuth: {}\n",
        pos.elevation,
        format_azimuth(pos.azimuth)
    )
}

pub fn track_text(track: &DayTrack) -> String {
    let (rise_h, rise_m) = minutes_to_time(track.sunrise_minutes);
    let (set_h, set_m) = minutes_to_time(track.sunset_minutes);
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Day {} at ({:.4}, {:.4}), sunrise {:02}:{:02}, sunset {:02}:{:02}",
        track.config.day_of_year,
        track.config.coordinate.latitude,
        track.config.coordinate.longitude,
        rise_h,
        rise_m,
        set_h,
        set_m,
    );
    for entry in &track.entries {
        let (h, m) = minutes_to_time(entry.minutes);
        let azimuth = match entry.azimuth {
            Some(az) => format!("{:>7.2}", az),
            None => format!("{:>7}", "-"),
        };
        let _ = writeln!(
            out,
            "{:02}:{:02}  {:>7.2}  {}{}",
            h,
            m,
            entry.elevation,
            azimuth,
            if entry.daylight { "" } else { "  (dark)" }
        );
    }
    out
}

pub fn to_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}
