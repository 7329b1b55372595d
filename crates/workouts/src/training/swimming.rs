//! Swimming sessions.

use super::{SessionBase, Training, require_positive};
use crate::errors::Result;
use crate::models::{ActivityCode, M_IN_KM};

/// Stroke length in meters.
pub const SWM_LEN_STEP: f64 = 1.38;

const CALORIES_SPEED_SHIFT: f64 = 1.1;
const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

/// A pool swimming session.
///
/// Speed comes from the pool laps, not the stroke count; the stroke-based
/// distance is still reported.
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    base: SessionBase,
    length_pool_m: f64,
    count_pool: u32,
}

impl Swimming {
    pub fn new(
        action: u32,
        duration_hours: f64,
        weight_kg: f64,
        length_pool_m: f64,
        count_pool: u32,
    ) -> Result<Self> {
        Ok(Self {
            base: SessionBase::new(action, duration_hours, weight_kg)?,
            length_pool_m: require_positive("pool_length_m", length_pool_m)?,
            count_pool,
        })
    }

    pub fn pool_length_m(&self) -> f64 {
        self.length_pool_m
    }

    pub fn pool_lap_count(&self) -> u32 {
        self.count_pool
    }
}

impl Training for Swimming {
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
        SWM_LEN_STEP
    }

    fn code(&self) -> ActivityCode {
        ActivityCode::Swimming
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.length_pool_m * f64::from(self.count_pool) / M_IN_KM / self.duration_hours()
    }

    fn calories_kcal(&self) -> f64 {
        (self.mean_speed_kmh() + CALORIES_SPEED_SHIFT)
            * CALORIES_WEIGHT_MULTIPLIER
            * self.weight_kg()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_session() {
        let swim = Swimming::new(720, 1.0, 80.0, 25.0, 40).unwrap();
        assert!((swim.distance_km() - 0.9936).abs() < 1e-9);
        assert!((swim.mean_speed_kmh() - 1.0).abs() < 1e-9);
        assert!((swim.calories_kcal() - 336.0).abs() < 1e-9);
    }

    #[test]
    fn test_speed_ignores_stroke_count() {
        let few = Swimming::new(10, 1.5, 60.0, 50.0, 30).unwrap();
        let many = Swimming::new(5000, 1.5, 60.0, 50.0, 30).unwrap();
        assert_eq!(few.mean_speed_kmh(), many.mean_speed_kmh());
        assert!((few.mean_speed_kmh() - 50.0 * 30.0 / 1000.0 / 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_zero_laps_is_allowed() {
        let swim = Swimming::new(0, 0.5, 70.0, 25.0, 0).unwrap();
        assert_eq!(swim.mean_speed_kmh(), 0.0);
        assert!((swim.calories_kcal() - 1.1 * 2.0 * 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_non_positive_pool_length() {
        assert!(Swimming::new(720, 1.0, 80.0, 0.0, 40).is_err());
    }
}
