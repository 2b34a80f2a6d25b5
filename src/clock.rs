use chrono::{DateTime, Datelike, Local, TimeZone, Timelike};

use crate::types::ObservationTime;

pub fn fractional_hour(hour: u32, minute: u32, second: u32) -> f64 {
    hour as f64 + minute as f64 / 60.0 + second as f64 / 3600.0
}

/// Reads day of year and clock hour as shown in `dt`'s own time zone.
pub fn observation_time<Tz: TimeZone>(dt: &DateTime<Tz>) -> ObservationTime {
    ObservationTime {
        day_of_year: dt.ordinal() as i32,
        local_hour: fractional_hour(dt.hour(), dt.minute(), dt.second()),
    }
}

pub fn now_local() -> ObservationTime {
    observation_time(&Local::now())
}
