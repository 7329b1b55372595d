//! Sensor package generation.

use rand::{
    Rng, SeedableRng,
    distributions::{Distribution, WeightedError, WeightedIndex},
    rngs::StdRng,
};
use thiserror::Error;
use tracing::debug;
use workouts::SensorPackage;

use crate::config::GeneratorConfig;
use crate::profiles::{AthleteProfile, RunnerProfile, SwimmerProfile, WalkerProfile};

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Invalid activity mix: {0}")]
    InvalidMix(#[from] WeightedError),
}

/// Generates batches of sensor packages.
pub struct PackageGenerator {
    config: GeneratorConfig,
    profiles: Vec<Box<dyn AthleteProfile>>,
}

impl PackageGenerator {
    /// Creates a generator with the default profile for each activity kind.
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            profiles: vec![
                Box::new(RunnerProfile::default()),
                Box::new(WalkerProfile::default()),
                Box::new(SwimmerProfile::default()),
            ],
        }
    }

    /// Replaces the profiles used for running, walking and swimming sessions.
    pub fn with_profiles(
        mut self,
        runner: RunnerProfile,
        walker: WalkerProfile,
        swimmer: SwimmerProfile,
    ) -> Self {
        self.profiles = vec![Box::new(runner), Box::new(walker), Box::new(swimmer)];
        self
    }

    /// Generates a batch, seeded from the config when a seed is set.
    pub fn generate(&self) -> Result<Vec<SensorPackage>, GeneratorError> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.generate_with(&mut rng)
    }

    pub fn generate_with(&self, rng: &mut impl Rng) -> Result<Vec<SensorPackage>, GeneratorError> {
        let mix = &self.config.mix;
        // Same order as `profiles`
        let weights = WeightedIndex::new([mix.running, mix.walking, mix.swimming])?;

        let mut packages = Vec::with_capacity(self.config.session_count);
        for _ in 0..self.config.session_count {
            let profile = &self.profiles[weights.sample(&mut *rng)];
            packages.push(profile.sample_package(&mut *rng));
        }

        debug!("Generated {} sensor packages", packages.len());
        Ok(packages)
    }
}

impl Default for PackageGenerator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ActivityMix;
    use workouts::read_sensor_package;

    #[test]
    fn test_generated_packages_are_valid() {
        let generator = PackageGenerator::new(GeneratorConfig {
            session_count: 200,
            seed: Some(12345),
            ..Default::default()
        });

        let packages = generator.generate().unwrap();
        assert_eq!(packages.len(), 200);
        for pkg in &packages {
            assert!(read_sensor_package(pkg).is_ok(), "rejected {pkg:?}");
        }
    }

    #[test]
    fn test_seed_is_reproducible() {
        let config = GeneratorConfig {
            session_count: 10,
            seed: Some(99),
            ..Default::default()
        };
        let a = PackageGenerator::new(config.clone()).generate().unwrap();
        let b = PackageGenerator::new(config).generate().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_kind_mix() {
        let generator = PackageGenerator::new(GeneratorConfig {
            session_count: 30,
            mix: ActivityMix::only_swimming(),
            seed: Some(3),
        });
        let packages = generator.generate().unwrap();
        assert!(packages.iter().all(|p| p.workout_type == "SWM"));
    }

    #[test]
    fn test_custom_profiles() {
        let generator = PackageGenerator::new(GeneratorConfig {
            session_count: 5,
            mix: ActivityMix::only_running(),
            seed: Some(5),
        })
        .with_profiles(
            RunnerProfile::elite(),
            WalkerProfile::race(),
            SwimmerProfile::competitive(),
        );
        assert_eq!(generator.generate().unwrap().len(), 5);
    }

    #[test]
    fn test_all_zero_mix_is_rejected() {
        let generator = PackageGenerator::new(GeneratorConfig {
            session_count: 5,
            mix: ActivityMix {
                running: 0.0,
                walking: 0.0,
                swimming: 0.0,
            },
            seed: Some(1),
        });
        assert!(matches!(
            generator.generate(),
            Err(GeneratorError::InvalidMix(_))
        ));
    }
}
