use log::debug;

use crate::{CalculationError, SummaryReport};

pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
pub enum WorkoutType {
    #[strum(serialize = "RUN")]
    Running,
    #[strum(serialize = "WLK")]
    Walking,
    #[strum(serialize = "SWM")]
    Swimming,
}

impl WorkoutType {
    #[must_use]
    pub fn code(self) -> &'static str {
        self.into()
    }

    /// Number of values a package of this type carries.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            WorkoutType::Running => 3,
            WorkoutType::Walking => 4,
            WorkoutType::Swimming => 5,
        }
    }
}

/// Readings shared by all workout types.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurements {
    /// Steps or strokes.
    pub action_count: u32,
    pub duration: f64,
    pub weight: f64,
}

impl Measurements {
    #[must_use]
    pub const fn new(action_count: u32, duration: f64, weight: f64) -> Self {
        Self {
            action_count,
            duration,
            weight,
        }
    }
}

/// Calculations of a single workout type.
///
/// Distance and mean speed are derived from the step length. Calorie
/// expenditure has no general formula, so every workout type must provide its
/// own `spent_calories`.
pub trait Training {
    const WORKOUT_TYPE: WorkoutType;
    const NAME: &'static str;
    /// Distance covered by one step or stroke in meters.
    const STEP_LENGTH: f64 = 0.65;

    fn measurements(&self) -> &Measurements;

    /// Distance in km.
    fn distance(&self) -> f64 {
        f64::from(self.measurements().action_count) * Self::STEP_LENGTH / M_IN_KM
    }

    /// Mean speed in km/h.
    fn mean_speed(&self) -> Result<f64, CalculationError> {
        checked_div(self.distance(), self.measurements().duration, "duration")
    }

    /// Spent calories in kcal.
    fn spent_calories(&self) -> Result<f64, CalculationError> {
        Err(CalculationError::NotImplemented(Self::NAME))
    }

    fn summary(&self) -> Result<SummaryReport, CalculationError> {
        let report = SummaryReport::new(
            Self::WORKOUT_TYPE,
            self.measurements().duration,
            self.distance(),
            self.mean_speed()?,
            self.spent_calories()?,
        );
        debug!("summarized {} workout: {report:?}", Self::NAME);
        Ok(report)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    pub measurements: Measurements,
}

impl Running {
    pub const SPEED_MULTIPLIER: f64 = 18.0;
    pub const SPEED_SHIFT: f64 = 20.0;

    #[must_use]
    pub const fn new(measurements: Measurements) -> Self {
        Self { measurements }
    }
}

impl Training for Running {
    const WORKOUT_TYPE: WorkoutType = WorkoutType::Running;
    const NAME: &'static str = "Running";

    fn measurements(&self) -> &Measurements {
        &self.measurements
    }

    fn spent_calories(&self) -> Result<f64, CalculationError> {
        let Measurements {
            duration, weight, ..
        } = self.measurements;
        Ok(
            (Self::SPEED_MULTIPLIER * self.mean_speed()? - Self::SPEED_SHIFT) * weight / M_IN_KM
                * duration
                * MIN_IN_H,
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Walking {
    pub measurements: Measurements,
    pub height: f64,
}

impl Walking {
    pub const WEIGHT_MULTIPLIER: f64 = 0.035;
    pub const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

    #[must_use]
    pub const fn new(measurements: Measurements, height: f64) -> Self {
        Self {
            measurements,
            height,
        }
    }
}

impl Training for Walking {
    const WORKOUT_TYPE: WorkoutType = WorkoutType::Walking;
    const NAME: &'static str = "SportsWalking";

    fn measurements(&self) -> &Measurements {
        &self.measurements
    }

    fn spent_calories(&self) -> Result<f64, CalculationError> {
        let Measurements {
            duration, weight, ..
        } = self.measurements;
        // Floor division: the term is zero unless speed² reaches the height.
        let speed_height_ratio = checked_div(self.mean_speed()?.powi(2), self.height, "height")?
            .floor();
        Ok((Self::WEIGHT_MULTIPLIER * weight
            + speed_height_ratio * Self::SPEED_HEIGHT_MULTIPLIER * weight)
            * duration
            * MIN_IN_H)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    pub measurements: Measurements,
    /// Pool length in meters.
    pub pool_length: f64,
    pub pool_laps: u32,
}

impl Swimming {
    pub const SPEED_SHIFT: f64 = 1.1;
    pub const WEIGHT_MULTIPLIER: f64 = 2.0;

    #[must_use]
    pub const fn new(measurements: Measurements, pool_length: f64, pool_laps: u32) -> Self {
        Self {
            measurements,
            pool_length,
            pool_laps,
        }
    }
}

impl Training for Swimming {
    const WORKOUT_TYPE: WorkoutType = WorkoutType::Swimming;
    const NAME: &'static str = "Swimming";
    const STEP_LENGTH: f64 = 1.38;

    fn measurements(&self) -> &Measurements {
        &self.measurements
    }

    fn mean_speed(&self) -> Result<f64, CalculationError> {
        checked_div(
            self.pool_length * f64::from(self.pool_laps) / M_IN_KM,
            self.measurements.duration,
            "duration",
        )
    }

    fn spent_calories(&self) -> Result<f64, CalculationError> {
        Ok((self.mean_speed()? + Self::SPEED_SHIFT)
            * Self::WEIGHT_MULTIPLIER
            * self.measurements.weight)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    Running(Running),
    Walking(Walking),
    Swimming(Swimming),
}

macro_rules! each_workout {
    ($workout: expr, $training: ident => $body: expr) => {
        match $workout {
            Workout::Running($training) => $body,
            Workout::Walking($training) => $body,
            Workout::Swimming($training) => $body,
        }
    };
}

impl Workout {
    #[must_use]
    pub fn workout_type(&self) -> WorkoutType {
        match self {
            Workout::Running(_) => Running::WORKOUT_TYPE,
            Workout::Walking(_) => Walking::WORKOUT_TYPE,
            Workout::Swimming(_) => Swimming::WORKOUT_TYPE,
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Workout::Running(_) => Running::NAME,
            Workout::Walking(_) => Walking::NAME,
            Workout::Swimming(_) => Swimming::NAME,
        }
    }

    #[must_use]
    pub fn step_length(&self) -> f64 {
        match self {
            Workout::Running(_) => Running::STEP_LENGTH,
            Workout::Walking(_) => Walking::STEP_LENGTH,
            Workout::Swimming(_) => Swimming::STEP_LENGTH,
        }
    }

    #[must_use]
    pub fn measurements(&self) -> &Measurements {
        each_workout!(self, training => training.measurements())
    }

    #[must_use]
    pub fn distance(&self) -> f64 {
        each_workout!(self, training => training.distance())
    }

    pub fn mean_speed(&self) -> Result<f64, CalculationError> {
        each_workout!(self, training => training.mean_speed())
    }

    pub fn spent_calories(&self) -> Result<f64, CalculationError> {
        each_workout!(self, training => training.spent_calories())
    }

    pub fn summary(&self) -> Result<SummaryReport, CalculationError> {
        each_workout!(self, training => training.summary())
    }
}

impl From<Running> for Workout {
    fn from(value: Running) -> Self {
        Workout::Running(value)
    }
}

impl From<Walking> for Workout {
    fn from(value: Walking) -> Self {
        Workout::Walking(value)
    }
}

impl From<Swimming> for Workout {
    fn from(value: Swimming) -> Self {
        Workout::Swimming(value)
    }
}

fn checked_div(
    dividend: f64,
    divisor: f64,
    divisor_name: &'static str,
) -> Result<f64, CalculationError> {
    if divisor == 0.0 {
        return Err(CalculationError::DivisionByZero(divisor_name));
    }

    Ok(dividend / divisor)
}
