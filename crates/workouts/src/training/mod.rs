//! Training sessions and the metrics derived from them.
//!
//! Each activity kind is its own struct implementing [`Training`]. The trait
//! supplies the shared distance and speed derivations; every kind provides
//! its own calorie formula and may override the speed formula (swimming does).
//! [`Workout`] closes the set for callers that dispatch on a code at runtime.

mod running;
mod swimming;
mod walking;

pub use running::{RUN_LEN_STEP, Running};
pub use swimming::{SWM_LEN_STEP, Swimming};
pub use walking::{SportsWalking, WALK_LEN_STEP};

use crate::errors::{Result, WorkoutError};
use crate::models::{ActivityCode, M_IN_KM};
use crate::report::InfoMessage;

/// Capability shared by every training kind.
pub trait Training {
    /// Steps or strokes recorded by the sensor.
    fn action_count(&self) -> u32;

    /// Session duration in hours.
    fn duration_hours(&self) -> f64;

    /// Athlete body weight in kilograms.
    fn weight_kg(&self) -> f64;

    /// Distance covered by a single step or stroke, in meters.
    fn stride_length(&self) -> f64;

    fn code(&self) -> ActivityCode;

    /// Calories burned over the whole session.
    fn calories_kcal(&self) -> f64;

    /// Distance covered in kilometers.
    fn distance_km(&self) -> f64 {
        f64::from(self.action_count()) * self.stride_length() / M_IN_KM
    }

    /// Mean speed in km/h.
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.duration_hours()
    }

    /// Display name of the activity kind.
    fn label(&self) -> &'static str {
        self.code().label()
    }

    fn show_training_info(&self) -> InfoMessage {
        InfoMessage {
            training_type: self.label().to_string(),
            duration: self.duration_hours(),
            distance: self.distance_km(),
            speed: self.mean_speed_kmh(),
            calories: self.calories_kcal(),
        }
    }
}

/// Closed set of supported training kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    fn inner(&self) -> &dyn Training {
        match self {
            Workout::Running(t) => t,
            Workout::SportsWalking(t) => t,
            Workout::Swimming(t) => t,
        }
    }
}

impl Training for Workout {
    fn action_count(&self) -> u32 {
        self.inner().action_count()
    }

    fn duration_hours(&self) -> f64 {
        self.inner().duration_hours()
    }

    fn weight_kg(&self) -> f64 {
        self.inner().weight_kg()
    }

    fn stride_length(&self) -> f64 {
        self.inner().stride_length()
    }

    fn code(&self) -> ActivityCode {
        self.inner().code()
    }

    fn calories_kcal(&self) -> f64 {
        self.inner().calories_kcal()
    }

    // Delegated explicitly so swimming's pool-based speed is used.
    fn mean_speed_kmh(&self) -> f64 {
        self.inner().mean_speed_kmh()
    }

    fn distance_km(&self) -> f64 {
        self.inner().distance_km()
    }
}

impl From<Running> for Workout {
    fn from(t: Running) -> Self {
        Workout::Running(t)
    }
}

impl From<SportsWalking> for Workout {
    fn from(t: SportsWalking) -> Self {
        Workout::SportsWalking(t)
    }
}

impl From<Swimming> for Workout {
    fn from(t: Swimming) -> Self {
        Workout::Swimming(t)
    }
}

/// Common fields of every session, validated once on construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SessionBase {
    pub action: u32,
    pub duration: f64,
    pub weight: f64,
}

impl SessionBase {
    pub(crate) fn new(action: u32, duration: f64, weight: f64) -> Result<Self> {
        Ok(Self {
            action,
            duration: require_positive("duration_hours", duration)?,
            weight: require_positive("weight_kg", weight)?,
        })
    }
}

/// Rejects NaN, infinities, zero and negative values.
pub(crate) fn require_positive(field: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(WorkoutError::invalid(format!(
            "{field} must be a positive finite number, got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_positive() {
        assert!(require_positive("weight_kg", 75.0).is_ok());
        assert!(require_positive("weight_kg", 0.0).is_err());
        assert!(require_positive("weight_kg", -1.0).is_err());
        assert!(require_positive("weight_kg", f64::NAN).is_err());
        assert!(require_positive("weight_kg", f64::INFINITY).is_err());
    }

    #[test]
    fn test_workout_delegates_swimming_speed() {
        let swim = Swimming::new(720, 1.0, 80.0, 25.0, 40).unwrap();
        let workout = Workout::from(swim.clone());
        assert_eq!(workout.mean_speed_kmh(), swim.mean_speed_kmh());
        assert_eq!(workout.calories_kcal(), swim.calories_kcal());
        assert_eq!(workout.label(), "Swimming");
    }

    #[test]
    fn test_derivations_are_deterministic() {
        let a = Workout::from(SportsWalking::new(9000, 1.3, 71.5, 176.0).unwrap());
        let b = Workout::from(SportsWalking::new(9000, 1.3, 71.5, 176.0).unwrap());
        assert_eq!(a.distance_km().to_bits(), b.distance_km().to_bits());
        assert_eq!(a.mean_speed_kmh().to_bits(), b.mean_speed_kmh().to_bits());
        assert_eq!(a.calories_kcal().to_bits(), b.calories_kcal().to_bits());
    }

    #[test]
    fn test_show_training_info() {
        let info = Running::new(15000, 1.0, 75.0).unwrap().show_training_info();
        assert_eq!(info.training_type, "Running");
        assert!((info.distance - 9.75).abs() < 1e-9);
        assert!((info.speed - 9.75).abs() < 1e-9);
    }
}
