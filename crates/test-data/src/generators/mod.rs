//! Generators for test data.
//!
//! - [`PackageGenerator`]: Generate batches of sensor packages from athlete profiles

pub mod package;

pub use package::{GeneratorError, PackageGenerator};
