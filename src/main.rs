use std::io;

use anyhow::Context;
use clap::Parser;
use log::info;

use solar_orienter::cli::{Args, Command, OutputFormat};
use solar_orienter::panel::{ConsoleDriver, PanelDriver, PanelOrientation};
use solar_orienter::types::TrackConfig;
use solar_orienter::{clock, input, logging, report, track, SolarCalculator};

fn main() -> anyhow::Result<()> {
    logging::init();
    let args = Args::parse();

    let time = args.observation_time(clock::now_local());
    info!(
        "observation: day {} hour {:.4}",
        time.day_of_year, time.local_hour
    );

    let coordinate = match args.coordinate() {
        Some(c) => c,
        None => {
            let stdin = io::stdin();
            let mut reader = stdin.lock();
            // prompts go to stderr so stdout carries only the report
            let mut stderr = io::stderr();
            input::read_coordinate(&mut reader, &mut stderr)
                .context("failed to read coordinates")?
        }
    };

    let calculator =
        SolarCalculator::new(args.meridian).context("invalid reference meridian")?;

    if let Some(Command::Track { interval }) = args.command {
        let config = TrackConfig {
            coordinate,
            day_of_year: time.day_of_year,
            interval_minutes: interval,
            reference_meridian: calculator.reference_meridian(),
            ..TrackConfig::default()
        };
        let day_track = track::generate_day_track(&config).context("failed to build day track")?;
        match args.format {
            OutputFormat::Text => print!("{}", report::track_text(&day_track)),
            OutputFormat::Json => println!("{}", report::to_json(&day_track)?),
        }
        return Ok(());
    }

    let position = calculator
        .position(&coordinate, &time)
        .context("failed to compute solar position")?;

    match args.format {
        OutputFormat::Text => print!("{}", report::position_text(&position)),
        OutputFormat::Json => println!("{}", report::to_json(&position)?),
    }

    if !args.no_panel && args.format == OutputFormat::Text {
        let mut driver = ConsoleDriver::new(io::stdout());
        driver
            .orient(&PanelOrientation::from_position(&position))
            .context("panel orientation failed")?;
    }

    Ok(())
}
