//! Pool swimmer athlete profile.

use rand::{Rng, RngCore};
use workouts::{ActivityCode, SWM_LEN_STEP, SensorPackage};

use super::{AthleteProfile, sample_body, sample_duration_hours, sample_variance};

/// Standard pool lengths in meters.
pub const POOL_LENGTHS: [f64; 3] = [25.0, 33.3, 50.0];

/// Athlete profile for pool swimming sessions.
///
/// - Base speed: ~2 km/h (3:00/100m)
/// - Lap count is derived from speed, duration and pool length
#[derive(Debug, Clone)]
pub struct SwimmerProfile {
    /// Base speed in km/h.
    base_speed: f64,
    /// Performance variance (coefficient of variation).
    variance: f64,
}

impl Default for SwimmerProfile {
    fn default() -> Self {
        Self {
            base_speed: 2.0,
            variance: 0.10,
        }
    }
}

impl SwimmerProfile {
    /// Creates a swimmer profile from a pace per 100 meters, in minutes.
    pub fn with_pace_per_100m(pace_min: f64) -> Self {
        Self {
            base_speed: 6.0 / pace_min,
            ..Default::default()
        }
    }

    pub fn competitive() -> Self {
        Self::with_pace_per_100m(1.5)
    }
}

impl AthleteProfile for SwimmerProfile {
    fn activity_code(&self) -> ActivityCode {
        ActivityCode::Swimming
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
        let pool_length = POOL_LENGTHS[rng.gen_range(0..POOL_LENGTHS.len())];
        let laps = (speed * duration * 1000.0 / pool_length).round();
        let strokes = (laps * pool_length / SWM_LEN_STEP).round();
        let weight = sample_body(rng, 70.0, 9.0, 45.0, 110.0);

        SensorPackage::new(
            self.activity_code().as_str(),
            vec![strokes, duration, weight, pool_length, laps],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};
    use workouts::{Training, read_sensor_package};

    #[test]
    fn test_pace_conversion() {
        assert!((SwimmerProfile::with_pace_per_100m(3.0).base_speed_kmh() - 2.0).abs() < 0.01);
        assert!((SwimmerProfile::competitive().base_speed_kmh() - 4.0).abs() < 0.01);
    }

    #[test]
    fn test_pool_speed_matches_profile() {
        let profile = SwimmerProfile::default();
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..50 {
            let pkg = profile.sample_package(&mut rng);
            assert!(POOL_LENGTHS.contains(&pkg.data[3]));

            let workout = read_sensor_package(&pkg).unwrap();
            let speed = workout.mean_speed_kmh();
            // Lap rounding can shift short sessions in big pools a little.
            assert!(speed > 2.0 * 0.5 && speed < 2.0 * 1.6, "speed {speed}");
        }
    }
}
