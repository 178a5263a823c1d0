use crate::WorkoutType;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Package(#[from] PackageError),
    #[error(transparent)]
    Calculation(#[from] CalculationError),
    #[error(transparent)]
    Read(#[from] ReadError),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PackageError {
    #[error("no such workout type: {0:?}")]
    UnknownWorkoutType(String),
    #[error("invalid parameters for {0}: {1}")]
    InvalidParameters(WorkoutType, #[source] ParameterError),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    #[error("expected {expected} values, got {actual}")]
    Count { expected: usize, actual: usize },
    #[error("{field} must be a non-negative integer ({value})")]
    NotAnInteger { field: &'static str, value: f64 },
    #[error("{field} must be a finite number ({value})")]
    NotFinite { field: &'static str, value: f64 },
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculationError {
    #[error("calorie calculation not implemented for {0}")]
    NotImplemented(&'static str),
    #[error("division by zero: {0} is zero")]
    DivisionByZero(&'static str),
}

#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}
