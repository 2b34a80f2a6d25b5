use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use clap::{Parser, Subcommand, ValueEnum};

use crate::clock;
use crate::types::{Coordinate, ObservationTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// Print the sun's position over the whole day
    Track {
        /// Minutes between samples; must divide 1440
        #[arg(long, default_value_t = 15)]
        interval: i32,
    },
}

/// Compute the sun's elevation and azimuth and orient a (simulated) solar panel.
///
/// Latitude and longitude are prompted for when not given as flags or
/// environment variables. Longitude is measured east-positive; the clock
/// correction uses its offset from --meridian, the central meridian of the
/// time zone the local hour is read in.
#[derive(Debug, Parser)]
#[command(name = "solar_orienter", version, about, allow_negative_numbers = true)]
pub struct Args {
    /// Latitude in degrees (-90 to 90)
    #[arg(short = 'a', long, env = "SOLAR_LATITUDE")]
    pub latitude: Option<f64>,

    /// Longitude in degrees, east-positive (-180 to 180)
    #[arg(short = 'o', long, env = "SOLAR_LONGITUDE")]
    pub longitude: Option<f64>,

    /// Reference meridian of the local time zone in degrees (0 = Greenwich)
    #[arg(short, long, env = "SOLAR_REFERENCE_MERIDIAN", default_value_t = 0.0)]
    pub meridian: f64,

    /// Day of year (1-366) instead of today
    #[arg(short, long)]
    pub day: Option<i32>,

    /// Fractional local hour (0-24) instead of now
    #[arg(long)]
    pub hour: Option<f64>,

    /// Calendar date (YYYY-MM-DD) instead of today; --day takes precedence
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Local clock time (HH:MM:SS) instead of now; --hour takes precedence
    #[arg(long)]
    pub time: Option<NaiveTime>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Skip the panel orientation step
    #[arg(long)]
    pub no_panel: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Args {
    pub fn coordinate(&self) -> Option<Coordinate> {
        Some(Coordinate::new(self.latitude?, self.longitude?))
    }

    /// Applies the date/time overrides on top of `now`.
    pub fn observation_time(&self, now: ObservationTime) -> ObservationTime {
        let day_of_year = self
            .day
            .or_else(|| self.date.map(|d| d.ordinal() as i32))
            .unwrap_or(now.day_of_year);
        let local_hour = self
            .hour
            .or_else(|| {
                self.time
                    .map(|t| clock::fractional_hour(t.hour(), t.minute(), t.second()))
            })
            .unwrap_or(now.local_hour);
        ObservationTime::new(day_of_year, local_hour)
    }
}
