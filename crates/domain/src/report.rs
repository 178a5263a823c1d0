use derive_more::Display;

use crate::WorkoutType;

/// Summary of a finished workout.
#[derive(Debug, Display, Clone, Copy, PartialEq)]
#[display(
    "Workout type: {workout_type}; Duration: {duration:.3} h; Distance: {distance:.3} km; \
     Avg speed: {speed:.3} km/h; Calories burned: {calories:.3}."
)]
pub struct SummaryReport {
    workout_type: WorkoutType,
    duration: f64,
    distance: f64,
    speed: f64,
    calories: f64,
}

impl SummaryReport {
    #[must_use]
    pub fn new(
        workout_type: WorkoutType,
        duration: f64,
        distance: f64,
        speed: f64,
        calories: f64,
    ) -> Self {
        Self {
            workout_type,
            duration,
            distance,
            speed,
            calories,
        }
    }

    #[must_use]
    pub fn workout_type(&self) -> WorkoutType {
        self.workout_type
    }

    /// Duration in h.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Distance in km.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Mean speed in km/h.
    #[must_use]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Spent calories in kcal.
    #[must_use]
    pub fn calories(&self) -> f64 {
        self.calories
    }

    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}
