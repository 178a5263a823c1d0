use std::{fs, path::PathBuf};

use log::debug;
use workout_stats_domain::{Package, PackageRepository, ReadError};

/// Packages stored as a JSON array.
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PackageRepository for JsonFile {
    fn read_packages(&self) -> Result<Vec<Package>, ReadError> {
        debug!("reading packages from {}", self.path.display());
        parse_packages(&fs::read_to_string(&self.path)?)
    }
}

pub fn parse_packages(content: &str) -> Result<Vec<Package>, ReadError> {
    serde_json::from_str(content).map_err(|err| ReadError::Other(Box::new(err)))
}
