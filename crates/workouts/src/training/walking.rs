//! Sports walking sessions.

use super::{SessionBase, Training, require_positive};
use crate::errors::Result;
use crate::models::{ActivityCode, MIN_IN_H};

/// Step length in meters.
pub const WALK_LEN_STEP: f64 = 0.65;

const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

/// A sports walking session.
///
/// Calories follow `(0.035 * weight + (speed^2 // height) * 0.029 * weight) * minutes`,
/// where `//` is floor division and `height` is the stored value in centimeters.
#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    base: SessionBase,
    height_cm: f64,
}

impl SportsWalking {
    pub fn new(action: u32, duration_hours: f64, weight_kg: f64, height_cm: f64) -> Result<Self> {
        Ok(Self {
            base: SessionBase::new(action, duration_hours, weight_kg)?,
            height_cm: require_positive("height_cm", height_cm)?,
        })
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }
}

impl Training for SportsWalking {
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
        WALK_LEN_STEP
    }

    fn code(&self) -> ActivityCode {
        ActivityCode::Walking
    }

    fn calories_kcal(&self) -> f64 {
        let speed_by_height = floor_div(self.mean_speed_kmh().powi(2), self.height_cm);
        (CALORIES_WEIGHT_MULTIPLIER * self.weight_kg()
            + speed_by_height * CALORIES_SPEED_HEIGHT_MULTIPLIER * self.weight_kg())
            * (self.duration_hours() * MIN_IN_H)
    }
}

/// Floor division computed from the remainder, so a quotient that rounds up
/// to a whole number is not counted as an exact multiple.
fn floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 && (b < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }
    if div == 0.0 {
        return 0.0f64.copysign(a / b);
    }
    let floor = div.floor();
    if div - floor > 0.5 { floor + 1.0 } else { floor }
}
