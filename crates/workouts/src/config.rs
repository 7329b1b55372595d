//! Runtime configuration for the `workouts` binary.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::Result;
use crate::models::{SensorPackage, default_packages};
use crate::report::OutputFormat;

/// Path to a JSON file holding an array of sensor packages.
pub const INPUT_VAR: &str = "WORKOUTS_INPUT";
/// `text` or `json`.
pub const FORMAT_VAR: &str = "WORKOUTS_FORMAT";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Batch file; the built-in reference batch is used when unset.
    pub input: Option<PathBuf>,
    pub format: OutputFormat,
}

impl RunConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves the configuration through `lookup`, treating empty values as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let format = match get(FORMAT_VAR) {
            Some(raw) => raw.trim().parse()?,
            None => OutputFormat::default(),
        };

        Ok(Self {
            input: get(INPUT_VAR).map(PathBuf::from),
            format,
        })
    }

    pub fn load_packages(&self) -> Result<Vec<SensorPackage>> {
        match &self.input {
            Some(path) => load_packages_file(path),
            None => Ok(default_packages()),
        }
    }
}

pub fn load_packages_file(path: &Path) -> Result<Vec<SensorPackage>> {
    let raw = std::fs::read_to_string(path)?;
    let packages: Vec<SensorPackage> = serde_json::from_str(&raw)?;
    info!("Loaded {} packages from {}", packages.len(), path.display());
    Ok(packages)
}
