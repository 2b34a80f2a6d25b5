use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid latitude {value}° (must be between -90° and +90°)")]
    InvalidLatitude { value: f64 },

    #[error("invalid longitude {value}° (must be between -180° and +180°)")]
    InvalidLongitude { value: f64 },

    #[error("invalid reference meridian {value}° (must be between -180° and +180°)")]
    InvalidMeridian { value: f64 },

    #[error("invalid day of year {value} (must be between 1 and 366)")]
    InvalidDayOfYear { value: i32 },

    #[error("invalid local hour {value} (must be between 0 and 24)")]
    InvalidLocalHour { value: f64 },

    #[error("invalid track interval {value} minutes (must divide 1440)")]
    InvalidInterval { value: i32 },

    #[error("could not parse {field} from {input:?}")]
    Parse { field: &'static str, input: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

pub fn check_latitude(value: f64) -> Result<f64> {
    if (-90.0..=90.0).contains(&value) {
        Ok(value)
    } else {
        Err(Error::InvalidLatitude { value })
    }
}

pub fn check_longitude(value: f64) -> Result<f64> {
    if (-180.0..=180.0).contains(&value) {
        Ok(value)
    } else {
        Err(Error::InvalidLongitude { value })
    }
}

pub fn check_meridian(value: f64) -> Result<f64> {
    if (-180.0..=180.0).contains(&value) {
        Ok(value)
    } else {
        Err(Error::InvalidMeridian { value })
    }
}

pub fn check_day_of_year(value: i32) -> Result<i32> {
    if (1..=366).contains(&value) {
        Ok(value)
    } else {
        Err(Error::InvalidDayOfYear { value })
    }
}

pub fn check_local_hour(value: f64) -> Result<f64> {
    if (0.0..=24.0).contains(&value) {
        Ok(value)
    } else {
        Err(Error::InvalidLocalHour { value })
    }
}
