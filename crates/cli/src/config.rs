use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

#[derive(Parser, Debug, PartialEq)]
#[command(
    name = "workout-stats",
    about = "Summarize workouts from raw sensor packages",
    long_about = "Print distance, mean speed and spent calories for each workout package. \
                  Without --packages the reference workouts are summarized."
)]
pub struct Config {
    /// JSON file containing packages, e.g. [["RUN", [15000, 1, 75]]]
    #[arg(long)]
    pub packages: Option<PathBuf>,

    /// Maximum level of log messages written to stderr
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}
