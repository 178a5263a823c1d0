#![warn(clippy::pedantic)]

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use log::info;
use workout_stats_domain::{DemoPackages, Service, WorkoutService};

use config::Config;
use json_file::JsonFile;

mod config;
mod json_file;
mod logger;

fn main() -> Result<()> {
    let config = Config::parse();
    logger::init(config.log_level.into())?;

    // All reports are rendered before printing, so an invalid package yields no output.
    let messages = match config.packages {
        Some(path) => {
            info!("summarizing packages of {}", path.display());
            Service::new(JsonFile::new(path)).messages()?
        }
        None => {
            info!("summarizing demo packages");
            Service::new(DemoPackages).messages()?
        }
    };

    let mut stdout = io::stdout().lock();
    for message in messages {
        writeln!(stdout, "{message}")?;
    }

    Ok(())
}
