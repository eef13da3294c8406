//! Activity codes and workout construction from sensor packages.
//!
//! A package carries a three-letter activity code and its readings as a flat
//! list of numbers. The code picks the workout variant; the readings bind to
//! its fields by position.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::model::Workout;

/// Errors that can occur while turning a package into a workout.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DispatchError {
    #[error("unknown activity type: {0}")]
    UnknownActivityCode(String),

    #[error("{code} expects {expected} values, got {actual}")]
    ArityMismatch {
        code: ActivityCode,
        expected: usize,
        actual: usize,
    },
}

pub type Result<T> = core::result::Result<T, DispatchError>;

/// The activity codes a sensor can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityCode {
    /// Running: action, duration, weight.
    Run,
    /// Sports walking: action, duration, weight, height.
    Wlk,
    /// Swimming: action, duration, weight, pool length, pool count.
    Swm,
}

impl ActivityCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Run => "RUN",
            Self::Wlk => "WLK",
            Self::Swm => "SWM",
        }
    }

    /// Number of readings a package with this code must carry.
    pub fn arity(self) -> usize {
        match self {
            Self::Run => 3,
            Self::Wlk => 4,
            Self::Swm => 5,
        }
    }
}

impl fmt::Display for ActivityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityCode {
    type Err = DispatchError;

    fn from_str(code: &str) -> Result<Self> {
        match code {
            "RUN" => Ok(Self::Run),
            "WLK" => Ok(Self::Wlk),
            "SWM" => Ok(Self::Swm),
            _ => Err(DispatchError::UnknownActivityCode(code.to_string())),
        }
    }
}

/// Build the workout a package describes.
///
/// Readings bind positionally and are not range-checked.
pub fn read_package(code: &str, values: &[f64]) -> Result<Workout> {
    let activity: ActivityCode = code.parse()?;

    let workout = match (activity, values) {
        (ActivityCode::Run, &[action, duration, weight]) => Workout::Running {
            action,
            duration,
            weight,
        },
        (ActivityCode::Wlk, &[action, duration, weight, height]) => Workout::SportsWalking {
            action,
            duration,
            weight,
            height,
        },
        (ActivityCode::Swm, &[action, duration, weight, length_pool, count_pool]) => {
            Workout::Swimming {
                action,
                duration,
                weight,
                length_pool,
                count_pool,
            }
        }
        _ => {
            return Err(DispatchError::ArityMismatch {
                code: activity,
                expected: activity.arity(),
                actual: values.len(),
            });
        }
    };

    debug!(code = %activity, ?values, workout = workout.name(), "read package");
    Ok(workout)
}
