//! Batch processing of sensor packages.

use std::io::Write;

use serde::Serialize;
use tracing::{info, warn};

use crate::errors::Result;
use crate::models::SensorPackage;
use crate::package::read_sensor_package;
use crate::report::OutputFormat;
use crate::training::Training;

/// A session that could not be reported.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionFailure {
    /// Position of the package in the input batch.
    pub index: usize,
    pub workout_type: String,
    pub error: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchSummary {
    pub processed: usize,
    pub failed: Vec<SessionFailure>,
}

impl BatchSummary {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Reports every package in input order, one line per session.
///
/// A package that fails to build is logged and recorded in the summary;
/// the remaining packages are still processed. Only write errors abort.
pub fn process_batch(
    packages: &[SensorPackage],
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<BatchSummary> {
    let mut summary = BatchSummary::default();

    for (index, package) in packages.iter().enumerate() {
        match read_sensor_package(package) {
            Ok(workout) => {
                let line = workout.show_training_info().render(format)?;
                writeln!(out, "{line}")?;
                summary.processed += 1;
            }
            Err(e) => {
                warn!(index, workout_type = %package.workout_type, "Skipping session: {e}");
                summary.failed.push(SessionFailure {
                    index,
                    workout_type: package.workout_type.clone(),
                    error: e.to_string(),
                });
            }
        }
    }

    info!(
        processed = summary.processed,
        failed = summary.failed.len(),
        "Batch completed"
    );

    Ok(summary)
}
