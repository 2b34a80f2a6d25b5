//! Panel orientation. No hardware is driven; [`ConsoleDriver`] reports what a
//! dual-axis mount would be asked to do.

use std::io::Write;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::SolarPosition;

/// Target pose for a dual-axis mount: tilt from horizontal and the compass
/// direction the panel faces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelOrientation {
    pub tilt: f64,
    pub azimuth: Option<f64>,
    pub sun_up: bool,
}

impl PanelOrientation {
    /// Faces the panel straight at the sun.
    pub fn from_position(pos: &SolarPosition) -> Self {
        Self {
            tilt: pos.zenith().clamp(0.0, 90.0),
            azimuth: pos.azimuth,
            sun_up: pos.is_above_horizon(),
        }
    }
}

pub trait PanelDriver {
    fn orient(&mut self, target: &PanelOrientation) -> Result<()>;
}

pub struct ConsoleDriver<W: Write> {
    out: W,
}

impl<W: Write> ConsoleDriver<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> PanelDriver for ConsoleDriver<W> {
    fn orient(&mut self, target: &PanelOrientation) -> Result<()> {
        info!("orienting panel: {:?}", target);
        if !target.sun_up {
            writeln!(self.out, "Sun below horizon, stowing solar panel flat.")?;
            return Ok(());
        }
        writeln!(self.out, "Orienting solar panel...")?;
        writeln!(self.out, "Tilt: {:.2} degrees", target.tilt)?;
        match target.azimuth {
            Some(az) => writeln!(self.out, "Azimuth: {:.2} degrees", az)?,
            None => writeln!(self.out, "Azimuth: undefined (holding current heading)")?,
        }
        Ok(())
    }
}
