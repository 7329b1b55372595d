//! Runner athlete profile.

use rand::RngCore;
use workouts::{ActivityCode, RUN_LEN_STEP, SensorPackage};

use super::{AthleteProfile, sample_body, sample_duration_hours, sample_variance};

/// Athlete profile for running sessions.
///
/// Based on typical recreational to competitive runner performance:
/// - Base pace: ~6:00/km (10 km/h)
/// - Body weight around 72 kg
#[derive(Debug, Clone)]
pub struct RunnerProfile {
    /// Base speed in km/h.
    base_speed: f64,
    /// Performance variance (coefficient of variation).
    variance: f64,
}

impl Default for RunnerProfile {
    fn default() -> Self {
        Self {
            base_speed: 10.0, // ~6:00/km
            variance: 0.08,
        }
    }
}

impl RunnerProfile {
    /// Creates a new runner profile with specified base pace.
    ///
    /// # Arguments
    /// * `pace_min_per_km` - Base pace in minutes per kilometer (e.g., 5.0 for 5:00/km)
    pub fn with_pace(pace_min_per_km: f64) -> Self {
        Self {
            base_speed: 60.0 / pace_min_per_km,
            ..Default::default()
        }
    }

    /// Creates an elite runner profile (~3:30/km base pace).
    pub fn elite() -> Self {
        Self::with_pace(3.5)
    }

    /// Creates a recreational runner profile (~7:00/km base pace).
    pub fn recreational() -> Self {
        Self::with_pace(7.0)
    }
}

impl AthleteProfile for RunnerProfile {
    fn activity_code(&self) -> ActivityCode {
        ActivityCode::Running
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
        let steps = (speed * duration * 1000.0 / RUN_LEN_STEP).round();
        let weight = sample_body(rng, 72.0, 10.0, 45.0, 120.0);

        SensorPackage::new(self.activity_code().as_str(), vec![steps, duration, weight])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};
    use workouts::{Training, read_sensor_package};

    #[test]
    fn test_default_profile() {
        let profile = RunnerProfile::default();
        assert!((profile.base_speed_kmh() - 10.0).abs() < 0.01);
    }

    #[test]
    fn test_pace_conversion() {
        assert!((RunnerProfile::with_pace(5.0).base_speed_kmh() - 12.0).abs() < 0.01);
        assert!(
            RunnerProfile::elite().base_speed_kmh() > RunnerProfile::recreational().base_speed_kmh()
        );
    }

    #[test]
    fn test_sampled_speed_near_base() {
        let profile = RunnerProfile::default();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let workout = read_sensor_package(&profile.sample_package(&mut rng)).unwrap();
            let speed = workout.mean_speed_kmh();
            assert!(speed > 10.0 * 0.65 && speed < 10.0 * 1.45, "speed {speed}");
        }
    }
}
