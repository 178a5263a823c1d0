use log::{debug, error};

use crate::{Error, Package, ReadError, SummaryReport, demo_packages};

pub trait PackageRepository {
    fn read_packages(&self) -> Result<Vec<Package>, ReadError>;
}

pub trait WorkoutService {
    fn get_packages(&self) -> Result<Vec<Package>, ReadError>;
    fn report(&self, package: &Package) -> Result<SummaryReport, Error>;

    /// Reports of all packages, or the first error.
    fn reports(&self) -> Result<Vec<SummaryReport>, Error> {
        self.get_packages()?
            .iter()
            .map(|package| self.report(package))
            .collect()
    }

    fn messages(&self) -> Result<Vec<String>, Error> {
        Ok(self
            .reports()?
            .iter()
            .map(SummaryReport::message)
            .collect())
    }
}

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R>
where
    R: PackageRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($result: expr, $action: literal, $entity: expr) => {{
        let result = $result;
        if let Err(ref err) = result {
            error!("failed to {} {}: {err}", $action, $entity);
        }
        result
    }};
}

impl<R: PackageRepository> WorkoutService for Service<R> {
    fn get_packages(&self) -> Result<Vec<Package>, ReadError> {
        log_on_error!(self.repository.read_packages(), "read", "packages")
    }

    fn report(&self, package: &Package) -> Result<SummaryReport, Error> {
        log_on_error!(
            package
                .read()
                .map_err(Error::from)
                .and_then(|workout| workout.summary().map_err(Error::from)),
            "report",
            format!("{} package", package.workout_type)
        )
    }
}

/// Repository of the reference workouts.
pub struct DemoPackages;

impl PackageRepository for DemoPackages {
    fn read_packages(&self) -> Result<Vec<Package>, ReadError> {
        debug!("reading demo packages");
        Ok(demo_packages())
    }
}

/// Render one report line per package.
pub fn render_packages(packages: &[Package]) -> Result<Vec<String>, Error> {
    packages
        .iter()
        .map(|package| -> Result<String, Error> { Ok(package.read()?.summary()?.message()) })
        .collect()
}
