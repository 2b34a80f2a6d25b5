use log::{debug, warn};

use crate::error::{
    check_day_of_year, check_latitude, check_local_hour, check_longitude, check_meridian, Result,
};
use crate::types::{Coordinate, ObservationTime, SolarPosition};

pub const EARTH_AXIAL_TILT: f64 = 23.45;
pub const DEGREES_PER_HOUR: f64 = 15.0;
/// Day of year used as the declination zero crossing (~March 21).
pub const VERNAL_EQUINOX_DAY: i32 = 81;
/// Minutes of clock time per degree of longitude.
pub const MINUTES_PER_DEGREE: f64 = 4.0;

const DEGENERATE_EPSILON: f64 = 1e-9;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

/// Maps any angle into `[0, 360)`.
pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid may round up to exactly 360 for tiny negative inputs
    if a >= 360.0 {
        0.0
    } else {
        a
    }
}

/// Fraction of the year elapsed since the vernal equinox, in radians.
pub fn intermediate_angle_b(n: i32) -> f64 {
    deg_to_rad((n - VERNAL_EQUINOX_DAY) as f64 * (360.0 / 365.0))
}

pub fn solar_declination(n: i32) -> f64 {
    EARTH_AXIAL_TILT * intermediate_angle_b(n).sin()
}

/// Equation of time in minutes.
pub fn equation_of_time(n: i32) -> f64 {
    let b = intermediate_angle_b(n);
    9.87 * (2.0 * b).sin() - 7.53 * b.cos() - 1.5 * b.sin()
}

/// Clock correction in minutes for an observer `longitude_offset` degrees
/// east of the reference meridian.
pub fn longitude_correction(longitude_offset: f64) -> f64 {
    MINUTES_PER_DEGREE * longitude_offset
}

/// Converts a local clock hour into true solar time.
///
/// `longitude_offset` is the observer's longitude measured from the time
/// zone's reference meridian. Passing an absolute longitude treats the
/// reference meridian as Greenwich.
pub fn solar_hour(longitude_offset: f64, local_hour: f64, n: i32) -> f64 {
    local_hour + (equation_of_time(n) - longitude_correction(longitude_offset)) / 60.0
}

pub fn hour_angle(hour: f64) -> f64 {
    DEGREES_PER_HOUR * (hour - 12.0)
}

/// Solar elevation in degrees from latitude, declination and hour angle.
pub fn elevation_from_hour_angle(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    let dec_rad = deg_to_rad(declination);
    let ha_rad = deg_to_rad(hour_angle);
    let sin_elevation =
        lat_rad.sin() * dec_rad.sin() + lat_rad.cos() * dec_rad.cos() * ha_rad.cos();
    rad_to_deg(sin_elevation.clamp(-1.0, 1.0).asin())
}

pub fn solar_elevation(latitude: f64, longitude: f64, local_hour: f64, n: i32) -> f64 {
    let decl = solar_declination(n);
    let ha = hour_angle(solar_hour(longitude, local_hour, n));
    elevation_from_hour_angle(latitude, decl, ha)
}

/// Azimuth in degrees clockwise from north, or `None` where the direction is
/// undefined.
///
/// The hour angle here is taken from the raw `local_hour`, not from solar
/// time. The elevation passed in, however, is the solar-time one.
pub fn azimuth_from_elevation(
    latitude: f64,
    declination: f64,
    elevation: f64,
    local_hour: f64,
) -> Option<f64> {
    let lat_rad = deg_to_rad(latitude);
    let dec_rad = deg_to_rad(declination);
    let el_rad = deg_to_rad(elevation);
    let cos_el = el_rad.cos();
    let cos_lat = lat_rad.cos();
    if cos_el.abs() < DEGENERATE_EPSILON || cos_lat.abs() < DEGENERATE_EPSILON {
        return None;
    }

    let ha_rad = deg_to_rad(hour_angle(local_hour));
    let sin_az = -dec_rad.cos() * ha_rad.sin() / cos_el;
    let cos_az = (el_rad.sin() * lat_rad.sin() - dec_rad.sin()) / (cos_el * cos_lat);
    if sin_az.abs() < DEGENERATE_EPSILON && cos_az.abs() < DEGENERATE_EPSILON {
        return None;
    }

    Some(normalize_angle(rad_to_deg(sin_az.atan2(cos_az))))
}

pub fn solar_azimuth(latitude: f64, longitude: f64, local_hour: f64, n: i32) -> Option<f64> {
    let decl = solar_declination(n);
    let elevation = solar_elevation(latitude, longitude, local_hour, n);
    azimuth_from_elevation(latitude, decl, elevation, local_hour)
}

/// Computes solar positions for observers whose clock follows a time zone
/// centred on `reference_meridian` (degrees, east-positive).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SolarCalculator {
    reference_meridian: f64,
}

impl SolarCalculator {
    pub fn new(reference_meridian: f64) -> Result<Self> {
        Ok(Self {
            reference_meridian: check_meridian(reference_meridian)?,
        })
    }

    pub fn reference_meridian(&self) -> f64 {
        self.reference_meridian
    }

    /// # Errors
    /// Rejects latitude, longitude, day of year or local hour outside their
    /// valid ranges before computing anything.
    pub fn position(
        &self,
        coordinate: &Coordinate,
        time: &ObservationTime,
    ) -> Result<SolarPosition> {
        let latitude = check_latitude(coordinate.latitude)?;
        let longitude = check_longitude(coordinate.longitude)?;
        let n = check_day_of_year(time.day_of_year)?;
        let local_hour = check_local_hour(time.local_hour)?;

        let offset = longitude - self.reference_meridian;
        let decl = solar_declination(n);
        let eot = equation_of_time(n);
        let sh = solar_hour(offset, local_hour, n);
        let ha = hour_angle(sh);
        let elevation = elevation_from_hour_angle(latitude, decl, ha);
        let azimuth = azimuth_from_elevation(latitude, decl, elevation, local_hour);

        debug!(
            "day {n} hour {local_hour:.4}: decl={decl:.4} eot={eot:.4} solar_hour={sh:.4} ha={ha:.4} el={elevation:.4}"
        );
        if azimuth.is_none() {
            warn!(
                "azimuth undefined at lat={latitude}, elevation={elevation:.4}; reporting no direction"
            );
        }

        Ok(SolarPosition {
            day_of_year: n,
            declination: decl,
            equation_of_time: eot,
            solar_hour: sh,
            hour_angle: ha,
            elevation,
            azimuth,
        })
    }
}

/// Position using Greenwich as the reference meridian.
pub fn solar_position(coordinate: &Coordinate, time: &ObservationTime) -> Result<SolarPosition> {
    SolarCalculator::default().position(coordinate, time)
}
