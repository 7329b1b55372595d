//! Turning raw sensor packages into training sessions.

use tracing::debug;

use crate::errors::{Result, WorkoutError};
use crate::models::{ActivityCode, SensorPackage};
use crate::training::{Running, SportsWalking, Swimming, Workout};

/// Builds the session matching `workout_type` from its positional values.
///
/// Value order per code:
/// - `SWM`: action, duration, weight, pool length, pool lap count
/// - `RUN`: action, duration, weight
/// - `WLK`: action, duration, weight, height
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Workout> {
    let code: ActivityCode = workout_type.parse()?;

    if data.len() != code.expected_arity() {
        return Err(WorkoutError::invalid(format!(
            "{code} expects {} values, got {}",
            code.expected_arity(),
            data.len()
        )));
    }

    let action = whole_count("action_count", data[0])?;
    let (duration, weight) = (data[1], data[2]);

    let workout: Workout = match code {
        ActivityCode::Running => Running::new(action, duration, weight)?.into(),
        ActivityCode::Walking => SportsWalking::new(action, duration, weight, data[3])?.into(),
        ActivityCode::Swimming => {
            let laps = whole_count("pool_lap_count", data[4])?;
            Swimming::new(action, duration, weight, data[3], laps)?.into()
        }
    };

    debug!(code = %code, values = ?data, "Read sensor package");
    Ok(workout)
}

pub fn read_sensor_package(package: &SensorPackage) -> Result<Workout> {
    read_package(&package.workout_type, &package.data)
}

/// Converts a raw reading into a non-negative whole count.
fn whole_count(field: &str, value: f64) -> Result<u32> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        Ok(value as u32)
    } else {
        Err(WorkoutError::invalid(format!(
            "{field} must be a non-negative whole number, got {value}"
        )))
    }
}
