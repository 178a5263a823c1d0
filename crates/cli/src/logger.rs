use std::{
    fmt,
    io::{self, Write},
};

use chrono::{DateTime, Local};
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

static LOGGER: Logger = Logger;

/// # Errors
///
/// Returns an error if the logger has already been initialized.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

#[derive(Debug, PartialEq)]
pub struct Entry {
    pub time: String,
    pub level: Level,
    pub message: String,
}

impl Entry {
    fn new(time: DateTime<Local>, record: &Record) -> Self {
        Self {
            time: time.format("%b %d %H:%M:%S").to_string(),
            level: record.level(),
            message: record.args().to_string(),
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:<5} {}", self.time, self.level, self.message)
    }
}

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(io::stderr().lock(), "{}", Entry::new(Local::now(), record));
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}
