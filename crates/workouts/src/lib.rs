//! Workout statistics from raw sensor packages.
//!
//! A package is an activity code (`SWM`, `RUN`, `WLK`) plus positional readings.
//! [`read_package`] builds the matching [`Workout`], whose [`Training`] methods
//! derive distance, mean speed and calories. [`InfoMessage`] renders the result.
//!
//! ```rust
//! use workouts::{Training, read_package};
//!
//! let workout = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
//! assert_eq!(
//!     workout.show_training_info().get_message(),
//!     "Activity type: Running; Duration: 1.000 h; Distance: 9.750 km; \
//!      Avg speed: 9.750 km/h; Calories burned: 699.750."
//! );
//! ```

pub mod batch;
pub mod config;
pub mod errors;
pub mod models;
pub mod package;
pub mod report;
pub mod training;

pub use batch::{BatchSummary, SessionFailure, process_batch};
pub use config::RunConfig;
pub use errors::WorkoutError;
pub use models::{ActivityCode, SensorPackage, default_packages};
pub use package::{read_package, read_sensor_package};
pub use report::{InfoMessage, OutputFormat};
pub use training::{
    RUN_LEN_STEP, Running, SWM_LEN_STEP, SportsWalking, Swimming, Training, WALK_LEN_STEP, Workout,
};
