use serde::{Deserialize, Serialize};

/// Observer location in degrees. Longitude is east-positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Day of year (1-based) and fractional local clock hour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObservationTime {
    pub day_of_year: i32,
    pub local_hour: f64,
}

impl ObservationTime {
    pub fn new(day_of_year: i32, local_hour: f64) -> Self {
        Self {
            day_of_year,
            local_hour,
        }
    }
}

/// Result of one calculation. `azimuth` is `None` when the sun's direction is
/// undefined (sun at the zenith, observer at a pole).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolarPosition {
    pub day_of_year: i32,
    pub declination: f64,
    pub equation_of_time: f64,
    pub solar_hour: f64,
    pub hour_angle: f64,
    pub elevation: f64,
    pub azimuth: Option<f64>,
}

impl SolarPosition {
    pub fn zenith(&self) -> f64 {
        90.0 - self.elevation
    }

    pub fn is_above_horizon(&self) -> bool {
        self.elevation > 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SunriseSunset {
    pub sunrise: i32,
    pub sunset: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackEntry {
    pub minutes: i32,
    pub elevation: f64,
    pub azimuth: Option<f64>,
    pub daylight: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackConfig {
    pub coordinate: Coordinate,
    pub day_of_year: i32,
    pub interval_minutes: i32,
    pub reference_meridian: f64,
    pub sunrise_buffer_minutes: i32,
    pub sunset_buffer_minutes: i32,
}

impl TrackConfig {
    pub fn new(coordinate: Coordinate, day_of_year: i32) -> Self {
        Self {
            coordinate,
            day_of_year,
            ..Self::default()
        }
    }
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            coordinate: Coordinate::new(39.8, -89.6),
            day_of_year: 80,
            interval_minutes: 15,
            reference_meridian: -90.0,
            sunrise_buffer_minutes: 30,
            sunset_buffer_minutes: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayTrack {
    pub config: TrackConfig,
    pub sunrise_minutes: i32,
    pub sunset_minutes: i32,
    pub entries: Vec<TrackEntry>,
}
