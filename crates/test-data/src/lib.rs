//! Test data generation for workouts.
//!
//! This crate provides athlete profiles and a generator for realistic sensor
//! packages, to support manual verification of the `workouts` binary and
//! property-style tests over many sessions.
//!
//! # Quick Start
//!
//! ```rust
//! use test_data::prelude::*;
//!
//! let packages = PackageGenerator::new(GeneratorConfig {
//!     session_count: 5,
//!     seed: Some(12345),
//!     ..Default::default()
//! })
//! .generate()
//! .unwrap();
//!
//! assert_eq!(packages.len(), 5);
//! ```

pub mod config;
pub mod generators;
pub mod profiles;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{ActivityMix, GeneratorConfig};
    pub use crate::generators::{GeneratorError, PackageGenerator};
    pub use crate::profiles::{
        AthleteProfile, RunnerProfile, SwimmerProfile, WalkerProfile, sample_variance,
    };
    pub use workouts::SensorPackage;
}
