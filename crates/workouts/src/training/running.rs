//! Running sessions.

use super::{SessionBase, Training};
use crate::errors::Result;
use crate::models::{ActivityCode, M_IN_KM, MIN_IN_H};

/// Step length in meters.
pub const RUN_LEN_STEP: f64 = 0.65;

const CALORIES_SPEED_MULTIPLIER: f64 = 18.0;
const CALORIES_SPEED_SHIFT: f64 = 20.0;

/// A running session.
///
/// Calories follow `(18 * speed - 20) * weight / 1000 * minutes`.
#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    base: SessionBase,
}

impl Running {
    pub fn new(action: u32, duration_hours: f64, weight_kg: f64) -> Result<Self> {
        Ok(Self {
            base: SessionBase::new(action, duration_hours, weight_kg)?,
        })
    }
}

impl Training for Running {
    fn action_count(&self) -> u32 {
        self.base.action
    }

    fn duration_hours(&self) -> f64 {
        self.base.duration
    }

    fn weight_kg(&self) -> f64 {
        self.base.weight
    }

    fn stride_length(&self) -> f64 {
        RUN_LEN_STEP
    }

    fn code(&self) -> ActivityCode {
        ActivityCode::Running
    }

    fn calories_kcal(&self) -> f64 {
        (CALORIES_SPEED_MULTIPLIER * self.mean_speed_kmh() - CALORIES_SPEED_SHIFT)
            * self.weight_kg()
            / M_IN_KM
            * (self.duration_hours() * MIN_IN_H)
    }
}
