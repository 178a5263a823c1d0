use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    Measurements, PackageError, ParameterError, Running, Swimming, Walking, Workout, WorkoutType,
};

/// Raw sensor data of a single workout.
///
/// The values are ordered as action count, duration in h, weight in kg,
/// followed by the values specific to the workout type (height in cm for
/// walking, pool length in m and pool laps for swimming). In JSON a package
/// may be written as a pair, e.g. `["SWM", [720, 1, 80, 25, 40]]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl Package {
    #[must_use]
    pub fn new(workout_type: &str, data: &[f64]) -> Self {
        Self {
            workout_type: workout_type.to_string(),
            data: data.to_vec(),
        }
    }

    pub fn read(&self) -> Result<Workout, PackageError> {
        read_package(&self.workout_type, &self.data)
    }
}

/// The packages of the reference workouts.
#[must_use]
pub fn demo_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", &[15000.0, 1.0, 75.0]),
        Package::new("WLK", &[9000.0, 1.0, 75.0, 180.0]),
    ]
}

pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Workout, PackageError> {
    let Ok(parsed_type) = workout_type.parse::<WorkoutType>() else {
        return Err(PackageError::UnknownWorkoutType(workout_type.to_string()));
    };

    let workout = read_values(parsed_type, data)
        .map_err(|err| PackageError::InvalidParameters(parsed_type, err))?;

    debug!("read {} workout: {workout:?}", workout.name());

    Ok(workout)
}

fn read_values(workout_type: WorkoutType, data: &[f64]) -> Result<Workout, ParameterError> {
    match (workout_type, data) {
        (WorkoutType::Running, &[action_count, duration, weight]) => Ok(Running::new(
            read_measurements(action_count, duration, weight)?,
        )
        .into()),
        (WorkoutType::Walking, &[action_count, duration, weight, height]) => Ok(Walking::new(
            read_measurements(action_count, duration, weight)?,
            read_real("height", height)?,
        )
        .into()),
        (WorkoutType::Swimming, &[action_count, duration, weight, pool_length, pool_laps]) => {
            Ok(Swimming::new(
                read_measurements(action_count, duration, weight)?,
                read_real("pool length", pool_length)?,
                read_count("pool laps", pool_laps)?,
            )
            .into())
        }
        _ => Err(ParameterError::Count {
            expected: workout_type.arity(),
            actual: data.len(),
        }),
    }
}

fn read_measurements(
    action_count: f64,
    duration: f64,
    weight: f64,
) -> Result<Measurements, ParameterError> {
    Ok(Measurements::new(
        read_count("action count", action_count)?,
        read_real("duration", duration)?,
        read_real("weight", weight)?,
    ))
}

fn read_count(field: &'static str, value: f64) -> Result<u32, ParameterError> {
    if !(0.0..=f64::from(u32::MAX)).contains(&value) || value.fract() != 0.0 {
        return Err(ParameterError::NotAnInteger { field, value });
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Ok(value as u32)
}

fn read_real(field: &'static str, value: f64) -> Result<f64, ParameterError> {
    if !value.is_finite() {
        return Err(ParameterError::NotFinite { field, value });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::running(
        "RUN",
        &[15000.0, 1.0, 75.0],
        Running::new(Measurements::new(15000, 1.0, 75.0)).into()
    )]
    #[case::walking(
        "WLK",
        &[9000.0, 1.0, 75.0, 180.0],
        Walking::new(Measurements::new(9000, 1.0, 75.0), 180.0).into()
    )]
    #[case::swimming(
        "SWM",
        &[720.0, 1.0, 80.0, 25.0, 40.0],
        Swimming::new(Measurements::new(720, 1.0, 80.0), 25.0, 40).into()
    )]
    fn test_read_package(
        #[case] workout_type: &str,
        #[case] data: &[f64],
        #[case] expected: Workout,
    ) {
        assert_eq!(read_package(workout_type, data), Ok(expected));
    }

    #[rstest]
    #[case::unknown("XYZ")]
    #[case::lowercase("run")]
    #[case::empty("")]
    fn test_read_package_unknown_workout_type(#[case] workout_type: &str) {
        assert_eq!(
            read_package(workout_type, &[15000.0, 1.0, 75.0]),
            Err(PackageError::UnknownWorkoutType(workout_type.to_string()))
        );
    }

    #[rstest]
    #[case::running_too_few(WorkoutType::Running, &[15000.0, 1.0])]
    #[case::running_too_many(WorkoutType::Running, &[15000.0, 1.0, 75.0, 180.0])]
    #[case::walking_too_few(WorkoutType::Walking, &[9000.0, 1.0, 75.0])]
    #[case::swimming_too_few(WorkoutType::Swimming, &[720.0, 1.0, 80.0, 25.0])]
    #[case::swimming_empty(WorkoutType::Swimming, &[])]
    fn test_read_package_invalid_count(#[case] workout_type: WorkoutType, #[case] data: &[f64]) {
        assert_eq!(
            read_package(workout_type.code(), data),
            Err(PackageError::InvalidParameters(
                workout_type,
                ParameterError::Count {
                    expected: workout_type.arity(),
                    actual: data.len()
                }
            ))
        );
    }

    #[rstest]
    #[case::fractional_action_count(
        "RUN",
        &[150.5, 1.0, 75.0],
        ParameterError::NotAnInteger { field: "action count", value: 150.5 }
    )]
    #[case::negative_action_count(
        "WLK",
        &[-1.0, 1.0, 75.0, 180.0],
        ParameterError::NotAnInteger { field: "action count", value: -1.0 }
    )]
    #[case::fractional_pool_laps(
        "SWM",
        &[720.0, 1.0, 80.0, 25.0, 40.5],
        ParameterError::NotAnInteger { field: "pool laps", value: 40.5 }
    )]
    #[case::infinite_weight(
        "RUN",
        &[15000.0, 1.0, f64::INFINITY],
        ParameterError::NotFinite { field: "weight", value: f64::INFINITY }
    )]
    fn test_read_package_invalid_value(
        #[case] workout_type: &str,
        #[case] data: &[f64],
        #[case] expected: ParameterError,
    ) {
        assert_eq!(
            read_package(workout_type, data),
            Err(PackageError::InvalidParameters(
                workout_type.parse().unwrap(),
                expected
            ))
        );
    }

    #[test]
    fn test_read_package_nan_duration() {
        assert!(matches!(
            read_package("RUN", &[15000.0, f64::NAN, 75.0]),
            Err(PackageError::InvalidParameters(
                WorkoutType::Running,
                ParameterError::NotFinite {
                    field: "duration",
                    ..
                }
            ))
        ));
    }

    #[test]
    fn test_read_package_zero_duration() {
        assert_eq!(
            read_package("RUN", &[15000.0, 0.0, 75.0]),
            Ok(Workout::from(Running::new(Measurements::new(15000, 0.0, 75.0))))
        );
    }

    #[test]
    fn test_package_read() {
        assert_eq!(
            Package::new("WLK", &[9000.0, 1.0, 75.0, 180.0]).read(),
            read_package("WLK", &[9000.0, 1.0, 75.0, 180.0])
        );
    }

    #[test]
    fn test_package_deserialize() {
        assert_eq!(
            serde_json::from_str::<Vec<Package>>(
                r#"[["SWM", [720, 1, 80, 25, 40]], {"workout_type": "RUN", "data": [15000, 1, 75]}]"#
            )
            .unwrap(),
            vec![
                Package::new("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
                Package::new("RUN", &[15000.0, 1.0, 75.0]),
            ]
        );
    }

    #[test]
    fn test_demo_packages() {
        assert_eq!(
            demo_packages()
                .iter()
                .map(|package| package.read().map(|workout| workout.workout_type()))
                .collect::<Vec<_>>(),
            vec![
                Ok(WorkoutType::Swimming),
                Ok(WorkoutType::Running),
                Ok(WorkoutType::Walking),
            ]
        );
    }
}
