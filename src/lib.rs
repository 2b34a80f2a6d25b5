pub mod angles;
pub mod cli;
pub mod clock;
pub mod error;
pub mod input;
pub mod logging;
pub mod panel;
pub mod report;
pub mod track;
pub mod types;

pub use angles::{
    azimuth_from_elevation, deg_to_rad, elevation_from_hour_angle, equation_of_time, hour_angle,
    intermediate_angle_b, longitude_correction, normalize_angle, rad_to_deg, solar_azimuth,
    solar_declination, solar_elevation, solar_hour, solar_position, SolarCalculator,
    DEGREES_PER_HOUR, EARTH_AXIAL_TILT, MINUTES_PER_DEGREE, VERNAL_EQUINOX_DAY,
};

pub use clock::{now_local, observation_time};

pub use error::{Error, Result};

pub use panel::{ConsoleDriver, PanelDriver, PanelOrientation};

pub use track::{
    clock_correction_minutes, clock_sunrise_sunset, estimate_sunrise_sunset, generate_day_track,
    interpolate_angle, intervals_per_day, lookup_track, minutes_to_time,
};

pub use types::{
    Coordinate, DayTrack, ObservationTime, SolarPosition, SunriseSunset, TrackConfig, TrackEntry,
};
