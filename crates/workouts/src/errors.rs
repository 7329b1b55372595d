use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkoutError {
    #[error("Unknown activity code: {0}")]
    UnknownActivity(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl WorkoutError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        WorkoutError::InvalidInput(msg.into())
    }
}

pub type Result<T, E = WorkoutError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_activity_names_code() {
        let err = WorkoutError::UnknownActivity("BIKE".to_string());
        assert_eq!(err.to_string(), "Unknown activity code: BIKE");
    }

    #[test]
    fn test_invalid_input_message() {
        let err = WorkoutError::invalid("duration_hours must be positive");
        assert!(matches!(err, WorkoutError::InvalidInput(_)));
        assert_eq!(err.to_string(), "Invalid input: duration_hours must be positive");
    }
}
