//! Athlete profiles.
//!
//! Profiles define realistic speeds, session lengths and body measurements for
//! each activity kind. They are used by the package generator to produce sensor
//! readings that the workouts crate accepts.

mod runner;
mod swimmer;
mod walker;

pub use runner::RunnerProfile;
pub use swimmer::SwimmerProfile;
pub use walker::WalkerProfile;

use rand::{Rng, RngCore};
use rand_distr::{Distribution, Normal};
use workouts::{ActivityCode, SensorPackage};

/// Trait for athlete profiles.
///
/// Implementations should provide:
/// - The activity code their packages carry
/// - Base speed for a typical session
/// - Day-to-day variance
/// - A sampler for complete sensor packages
pub trait AthleteProfile: Send + Sync {
    fn activity_code(&self) -> ActivityCode;

    /// Typical mean speed in km/h.
    fn base_speed_kmh(&self) -> f64;

    /// Day-to-day performance variance as a coefficient of variation (0.0 - 1.0).
    fn variance(&self) -> f64;

    /// Samples one sensor package in the positional layout of [`Self::activity_code`].
    fn sample_package(&self, rng: &mut dyn RngCore) -> SensorPackage;
}

/// Samples a variance factor from normal distribution.
/// Returns a multiplier around 1.0.
pub fn sample_variance(profile: &dyn AthleteProfile, rng: &mut dyn RngCore) -> f64 {
    let std_dev = profile.variance();
    match Normal::new(1.0, std_dev) {
        Ok(normal) if std_dev > 0.0 => normal.sample(rng).clamp(0.7, 1.4),
        _ => 1.0,
    }
}

/// Samples a body measurement, clamped to a plausible adult range.
pub(crate) fn sample_body(
    rng: &mut dyn RngCore,
    mean: f64,
    std_dev: f64,
    min: f64,
    max: f64,
) -> f64 {
    let value = Normal::new(mean, std_dev)
        .map(|normal| normal.sample(rng))
        .unwrap_or(mean);
    round_to(value.clamp(min, max), 1)
}

/// Samples a session duration in hours between 20 and 120 minutes.
pub(crate) fn sample_duration_hours(rng: &mut dyn RngCore) -> f64 {
    let minutes: u32 = rng.gen_range(20..=120);
    f64::from(minutes) / 60.0
}

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
