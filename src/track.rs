use log::debug;

use crate::angles::{self, SolarCalculator};
use crate::error::{check_day_of_year, check_latitude, check_longitude, Error, Result};
use crate::types::{DayTrack, ObservationTime, SunriseSunset, TrackConfig, TrackEntry};

pub const MINUTES_PER_DAY: i32 = 1440;

pub fn minutes_to_time(total_minutes: i32) -> (i32, i32) {
    (total_minutes / 60, total_minutes % 60)
}

pub fn intervals_per_day(interval_minutes: i32) -> i32 {
    MINUTES_PER_DAY / interval_minutes
}

fn check_interval(interval_minutes: i32) -> Result<i32> {
    if interval_minutes > 0 && MINUTES_PER_DAY % interval_minutes == 0 {
        Ok(interval_minutes)
    } else {
        Err(Error::InvalidInterval {
            value: interval_minutes,
        })
    }
}

/// Sunrise and sunset in minutes of solar time, from the geometric horizon.
pub fn estimate_sunrise_sunset(latitude: f64, day_of_year: i32) -> SunriseSunset {
    let lat_rad = angles::deg_to_rad(latitude);
    let decl = angles::solar_declination(day_of_year);
    let decl_rad = angles::deg_to_rad(decl);
    let cos_h = -lat_rad.tan() * decl_rad.tan();

    if cos_h >= 1.0 {
        // polar night
        SunriseSunset {
            sunrise: 720,
            sunset: 720,
        }
    } else if cos_h <= -1.0 {
        SunriseSunset {
            sunrise: 0,
            sunset: MINUTES_PER_DAY,
        }
    } else {
        let h_deg = angles::rad_to_deg(cos_h.acos());
        let half_day_minutes = (h_deg / angles::DEGREES_PER_HOUR) * 60.0;
        let solar_noon_minutes = 720;
        SunriseSunset {
            sunrise: (solar_noon_minutes as f64 - half_day_minutes) as i32,
            sunset: (solar_noon_minutes as f64 + half_day_minutes) as i32,
        }
    }
}

/// Minutes to subtract from solar time to read the local clock, for an
/// observer `longitude_offset` degrees east of the reference meridian.
pub fn clock_correction_minutes(longitude_offset: f64, day_of_year: i32) -> f64 {
    angles::equation_of_time(day_of_year) - angles::longitude_correction(longitude_offset)
}

/// Moves a solar-time sunrise/sunset window onto the local clock, clamped to
/// the same calendar day. A whole-day window is left as is.
pub fn clock_sunrise_sunset(ss: SunriseSunset, correction_minutes: f64) -> SunriseSunset {
    if ss.sunrise == 0 && ss.sunset == MINUTES_PER_DAY {
        return ss;
    }
    let shift = |m: i32| {
        ((m as f64 - correction_minutes).round() as i32).clamp(0, MINUTES_PER_DAY - 1)
    };
    SunriseSunset {
        sunrise: shift(ss.sunrise),
        sunset: shift(ss.sunset),
    }
}

/// Interpolates between two compass angles along the shorter arc.
pub fn interpolate_angle(a1: Option<f64>, a2: Option<f64>, fraction: f64) -> Option<f64> {
    let (v1, v2) = (a1?, a2?);
    let diff = v2 - v1;
    let adjusted_diff = if diff > 180.0 {
        diff - 360.0
    } else if diff < -180.0 {
        diff + 360.0
    } else {
        diff
    };
    Some(angles::normalize_angle(v1 + adjusted_diff * fraction))
}

fn is_daylight(sunrise: i32, sunset: i32, minutes: i32) -> bool {
    sunrise < sunset && minutes >= sunrise && minutes <= sunset
}

fn interpolate_linear(v1: f64, v2: f64, fraction: f64) -> f64 {
    v1 + fraction * (v2 - v1)
}

/// Evaluates the calculator at every interval from buffered sunrise to
/// buffered sunset. Sample minutes, sunrise and sunset are all local clock
/// minutes.
pub fn generate_day_track(config: &TrackConfig) -> Result<DayTrack> {
    let interval = check_interval(config.interval_minutes)?;
    let latitude = check_latitude(config.coordinate.latitude)?;
    let longitude = check_longitude(config.coordinate.longitude)?;
    let day_of_year = check_day_of_year(config.day_of_year)?;
    let calculator = SolarCalculator::new(config.reference_meridian)?;

    let correction =
        clock_correction_minutes(longitude - calculator.reference_meridian(), day_of_year);
    let ss = clock_sunrise_sunset(estimate_sunrise_sunset(latitude, day_of_year), correction);
    let start_minute = (ss.sunrise - config.sunrise_buffer_minutes).max(0);
    let end_minute = (ss.sunset + config.sunset_buffer_minutes).min(MINUTES_PER_DAY - 1);

    let first_interval = start_minute / interval;
    let last_interval = (end_minute / interval).min(intervals_per_day(interval) - 1);

    let mut entries = Vec::with_capacity((last_interval - first_interval + 1).max(0) as usize);
    for i in first_interval..=last_interval {
        let minutes = i * interval;
        let time = ObservationTime::new(day_of_year, minutes as f64 / 60.0);
        let pos = calculator.position(&config.coordinate, &time)?;
        entries.push(TrackEntry {
            minutes,
            elevation: pos.elevation,
            azimuth: pos.azimuth,
            daylight: is_daylight(ss.sunrise, ss.sunset, minutes),
        });
    }
    debug!(
        "day {} track: {} entries between {} and {} minutes",
        day_of_year,
        entries.len(),
        start_minute,
        end_minute
    );

    Ok(DayTrack {
        config: *config,
        sunrise_minutes: ss.sunrise,
        sunset_minutes: ss.sunset,
        entries,
    })
}

fn find_bracketing_entries(
    entries: &[TrackEntry],
    interval_minutes: i32,
    minutes: i32,
) -> Option<(&TrackEntry, Option<&TrackEntry>, f64)> {
    let first = entries.first()?;
    let last = entries.last()?;
    if minutes < first.minutes || minutes > last.minutes {
        return None;
    }

    let idx_before =
        ((minutes - first.minutes) / interval_minutes).min(entries.len() as i32 - 1) as usize;
    let before = &entries[idx_before];
    match entries.get(idx_before + 1) {
        Some(after) if minutes != before.minutes => {
            let fraction =
                (minutes - before.minutes) as f64 / (after.minutes - before.minutes) as f64;
            Some((before, Some(after), fraction))
        }
        _ => Some((before, None, 0.0)),
    }
}

/// Position at `minutes` past local midnight, interpolated between the two
/// nearest entries. `None` outside the track.
pub fn lookup_track(track: &DayTrack, minutes: i32) -> Option<TrackEntry> {
    let (before, after, fraction) =
        find_bracketing_entries(&track.entries, track.config.interval_minutes, minutes)?;
    let daylight = is_daylight(track.sunrise_minutes, track.sunset_minutes, minutes);
    match after {
        None => Some(TrackEntry {
            minutes,
            daylight,
            ..*before
        }),
        Some(after) => Some(TrackEntry {
            minutes,
            elevation: interpolate_linear(before.elevation, after.elevation, fraction),
            azimuth: interpolate_angle(before.azimuth, after.azimuth, fraction),
            daylight,
        }),
    }
}
