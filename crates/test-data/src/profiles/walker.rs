//! Sports walker athlete profile.

use rand::RngCore;
use workouts::{ActivityCode, SensorPackage, WALK_LEN_STEP};

use super::{AthleteProfile, sample_body, sample_duration_hours, sample_variance};

/// Athlete profile for sports walking sessions.
///
/// - Base speed: ~6 km/h
/// - Height around 172 cm, which the walking calorie formula uses
#[derive(Debug, Clone)]
pub struct WalkerProfile {
    /// Base speed in km/h.
    base_speed: f64,
    /// Performance variance (coefficient of variation).
    variance: f64,
}

impl Default for WalkerProfile {
    fn default() -> Self {
        Self {
            base_speed: 6.0,
            variance: 0.12,
        }
    }
}

impl WalkerProfile {
    pub fn with_speed(speed_kmh: f64) -> Self {
        Self {
            base_speed: speed_kmh,
            ..Default::default()
        }
    }

    /// Race walker (~12 km/h).
    pub fn race() -> Self {
        Self {
            base_speed: 12.0,
            variance: 0.06,
        }
    }

    pub fn leisurely() -> Self {
        Self::with_speed(4.5)
    }
}

impl AthleteProfile for WalkerProfile {
    fn activity_code(&self) -> ActivityCode {
        ActivityCode::Walking
    }

    fn base_speed_kmh(&self) -> f64 {
        self.base_speed
    }

    fn variance(&self) -> f64 {
        self.variance
    }

    fn sample_package(&self, rng: &mut dyn RngCore) -> SensorPackage {
        let duration = sample_duration_hours(rng);
        let speed = self.base_speed * sample_variance(self, rng);
        let steps = (speed * duration * 1000.0 / WALK_LEN_STEP).round();
        let weight = sample_body(rng, 70.0, 11.0, 45.0, 120.0);
        let height = sample_body(rng, 172.0, 9.0, 150.0, 200.0);

        SensorPackage::new(
            self.activity_code().as_str(),
            vec![steps, duration, weight, height],
        )
    }
}
