//! Summary: the computed statistics of one workout, ready for display.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The result bundle of one workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Workout display name (e.g. `"Running"`).
    pub training_type: String,

    /// Duration in hours.
    pub duration: f64,

    /// Distance in kilometers.
    pub distance: f64,

    /// Mean speed in km/h.
    pub speed: f64,

    /// Calories burned.
    pub calories: f64,
}

/// Which label wording to use in the summary line.
///
/// `Verbatim` reproduces the established output byte for byte, including
/// the `Duration::` double colon and the `Avgerage` misspelling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Labels {
    #[default]
    Verbatim,
    Corrected,
}

impl Labels {
    fn duration(self) -> &'static str {
        match self {
            Self::Verbatim => "Duration::",
            Self::Corrected => "Duration:",
        }
    }

    fn speed(self) -> &'static str {
        match self {
            Self::Verbatim => "Avgerage speed:",
            Self::Corrected => "Average speed:",
        }
    }
}

impl Summary {
    /// Render as one line, every number to three decimals.
    pub fn render(&self, labels: Labels) -> String {
        format!(
            "Training type: {}; {} {:.3} hrs; Distance: {:.3} km; {} {:.3} km/h; Calories burned: {:.3}.",
            self.training_type,
            labels.duration(),
            self.duration,
            self.distance,
            labels.speed(),
            self.speed,
            self.calories,
        )
    }

    fn parse_with(line: &str, labels: Labels) -> Option<Self> {
        let body = line.strip_prefix("Training type: ")?.strip_suffix('.')?;
        let mut parts = body.split("; ");

        let training_type = parts.next()?;
        let duration = number(parts.next(), labels.duration(), " hrs")?;
        let distance = number(parts.next(), "Distance:", " km")?;
        let speed = number(parts.next(), labels.speed(), " km/h")?;
        let calories = number(parts.next(), "Calories burned:", "")?;

        if training_type.is_empty() || parts.next().is_some() {
            return None;
        }

        Some(Self {
            training_type: training_type.to_string(),
            duration,
            distance,
            speed,
            calories,
        })
    }
}

/// Extract the number between `label ` and `unit` in one summary field.
fn number(part: Option<&str>, label: &str, unit: &str) -> Option<f64> {
    part?
        .strip_prefix(label)?
        .strip_prefix(' ')?
        .strip_suffix(unit)?
        .parse()
        .ok()
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Labels::Verbatim))
    }
}

/// A line that is not a rendered summary.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("malformed summary line: {0}")]
pub struct ParseSummaryError(String);

impl FromStr for Summary {
    type Err = ParseSummaryError;

    /// Read a rendered summary line back, in either label wording.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        Self::parse_with(line, Labels::Verbatim)
            .or_else(|| Self::parse_with(line, Labels::Corrected))
            .ok_or_else(|| ParseSummaryError(line.to_string()))
    }
}
