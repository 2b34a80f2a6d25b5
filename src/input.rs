use std::io::{BufRead, Write};

use crate::error::{Error, Result};
use crate::types::Coordinate;

/// Writes `prompt`, then reads one line and parses it as a number.
pub fn prompt_number<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
    field: &'static str,
) -> Result<f64> {
    write!(writer, "{prompt}")?;
    writer.flush()?;

    let mut line = String::new();
    reader.read_line(&mut line)?;
    let trimmed = line.trim();
    trimmed.parse::<f64>().map_err(|_| Error::Parse {
        field,
        input: trimmed.to_string(),
    })
}

/// Asks for latitude then longitude. Range checks are left to the calculator.
pub fn read_coordinate<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> Result<Coordinate> {
    let latitude = prompt_number(reader, writer, "Enter latitude: ", "latitude")?;
    let longitude = prompt_number(reader, writer, "Enter longitude: ", "longitude")?;
    Ok(Coordinate::new(latitude, longitude))
}
