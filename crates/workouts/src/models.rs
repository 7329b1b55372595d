use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::WorkoutError;

/// Meters in a kilometer.
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour.
pub const MIN_IN_H: f64 = 60.0;

/// Activity codes emitted by the sensor units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityCode {
    #[serde(rename = "SWM")]
    Swimming,
    #[serde(rename = "RUN")]
    Running,
    #[serde(rename = "WLK")]
    Walking,
}

impl ActivityCode {
    pub const ALL: [ActivityCode; 3] = [
        ActivityCode::Swimming,
        ActivityCode::Running,
        ActivityCode::Walking,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityCode::Swimming => "SWM",
            ActivityCode::Running => "RUN",
            ActivityCode::Walking => "WLK",
        }
    }

    /// Display name used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            ActivityCode::Swimming => "Swimming",
            ActivityCode::Running => "Running",
            ActivityCode::Walking => "SportsWalking",
        }
    }

    /// Number of raw values a package of this kind carries.
    pub fn expected_arity(&self) -> usize {
        match self {
            ActivityCode::Swimming => 5,
            ActivityCode::Running => 3,
            ActivityCode::Walking => 4,
        }
    }
}

impl fmt::Display for ActivityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityCode {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SWM" => Ok(ActivityCode::Swimming),
            "RUN" => Ok(ActivityCode::Running),
            "WLK" => Ok(ActivityCode::Walking),
            other => Err(WorkoutError::UnknownActivity(other.to_string())),
        }
    }
}

/// One raw reading from a sensor unit: an activity code and its positional values.
///
/// The code is kept as a plain string so a batch containing an unknown code
/// still deserializes; the bad session is rejected on its own later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPackage {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl SensorPackage {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }
}

/// The reference batch processed when no input file is configured.
pub fn default_packages() -> Vec<SensorPackage> {
    vec![
        SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}
