//! Configuration types for test data generation.

use serde::{Deserialize, Serialize};

/// Relative weights of each activity kind in a generated batch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivityMix {
    pub running: f64,
    pub walking: f64,
    pub swimming: f64,
}

impl Default for ActivityMix {
    fn default() -> Self {
        // Runners dominate typical tracker uploads
        Self {
            running: 0.5,
            walking: 0.3,
            swimming: 0.2,
        }
    }
}

impl ActivityMix {
    /// Only one kind of session.
    pub fn only_running() -> Self {
        Self {
            running: 1.0,
            walking: 0.0,
            swimming: 0.0,
        }
    }

    pub fn only_walking() -> Self {
        Self {
            running: 0.0,
            walking: 1.0,
            swimming: 0.0,
        }
    }

    pub fn only_swimming() -> Self {
        Self {
            running: 0.0,
            walking: 0.0,
            swimming: 1.0,
        }
    }
}

/// Configuration for generating sensor package batches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of sessions to generate.
    pub session_count: usize,

    pub mix: ActivityMix,

    /// Fixed RNG seed for reproducible batches.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            session_count: 20,
            mix: ActivityMix::default(),
            seed: None,
        }
    }
}
