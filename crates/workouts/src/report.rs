//! Human-readable session reports.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, WorkoutError};

/// Summary of one completed session.
///
/// Values are stored unrounded; precision is only applied when rendering text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoMessage {
    pub training_type: String,
    /// Hours.
    pub duration: f64,
    /// Kilometers.
    pub distance: f64,
    /// km/h.
    pub speed: f64,
    /// kcal.
    pub calories: f64,
}

impl InfoMessage {
    pub fn get_message(&self) -> String {
        format!(
            "Activity type: {}; Duration: {:.3} h; Distance: {:.3} km; \
             Avg speed: {:.3} km/h; Calories burned: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.get_message()),
            OutputFormat::Json => Ok(serde_json::to_string(self)?),
        }
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.get_message())
    }
}

/// How session reports are written to the output stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(WorkoutError::invalid(format!(
                "unsupported output format '{other}', expected 'text' or 'json'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> InfoMessage {
        InfoMessage {
            training_type: "Swimming".to_string(),
            duration: 1.0,
            distance: 0.9936,
            speed: 1.0,
            calories: 336.0,
        }
    }

    #[test]
    fn test_message_template() {
        assert_eq!(
            sample().get_message(),
            "Activity type: Swimming; Duration: 1.000 h; Distance: 0.994 km; \
             Avg speed: 1.000 km/h; Calories burned: 336.000."
        );
    }

    #[test]
    fn test_three_decimals_regardless_of_precision() {
        let msg = InfoMessage {
            training_type: "Running".to_string(),
            duration: 1.0 / 3.0,
            distance: 12.0,
            speed: 36.000_000_001,
            calories: 1234.56789,
        }
        .get_message();

        let numbers: Vec<&str> = msg
            .split(|c: char| !(c.is_ascii_digit() || c == '.'))
            .filter(|s| s.contains('.') && s.len() > 1)
            .map(|s| s.trim_end_matches('.'))
            .collect();
        assert_eq!(numbers, vec!["0.333", "12.000", "36.000", "1234.568"]);
    }

    #[test]
    fn test_display_matches_message() {
        let info = sample();
        assert_eq!(info.to_string(), info.get_message());
    }

    #[test]
    fn test_json_render_is_unrounded() {
        let json = sample().render(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["training_type"], "Swimming");
        assert_eq!(value["distance"], 0.9936);
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
