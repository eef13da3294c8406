//! Workout types: one completed training session per activity.
//!
//! Distance, speed and calories are never stored. Every accessor recomputes
//! its value from the fields captured at construction.

use super::summary::Summary;

/// Meters in a kilometer.
const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour.
const MIN_IN_H: f64 = 60.0;

/// Centimeters in a meter.
const CM_IN_M: f64 = 100.0;

/// Factor from km/h to m/s.
const KMH_IN_MSEC: f64 = 0.278;

/// Coefficients for running.
mod running {
    /// Meters covered per step.
    pub const LEN_STEP: f64 = 0.65;
    pub const SPEED_MULTIPLIER: f64 = 18.0;
    pub const SPEED_SHIFT: f64 = 1.79;
}

/// Coefficients for sports walking.
mod walking {
    /// Meters covered per step.
    pub const LEN_STEP: f64 = 0.65;
    pub const WEIGHT_MULTIPLIER: f64 = 0.035;
    pub const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
}

/// Coefficients for swimming.
mod swimming {
    /// Meters covered per stroke. Distance only; speed comes from pool laps.
    pub const LEN_STEP: f64 = 1.38;
    pub const SPEED_SHIFT: f64 = 1.1;
    pub const WEIGHT_MULTIPLIER: f64 = 2.0;
}

/// Errors that can occur while computing workout statistics.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ComputeError {
    #[error("division by zero: {field} is 0")]
    DivisionByZero { field: &'static str },
}

pub type Result<T> = core::result::Result<T, ComputeError>;

/// A completed workout, one variant per activity type.
///
/// `action` counts steps (running, walking) or strokes (swimming).
/// `duration` is in hours and `weight` in kilograms.
#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    Running {
        action: f64,
        duration: f64,
        weight: f64,
    },

    SportsWalking {
        action: f64,
        duration: f64,
        weight: f64,
        /// Height in centimeters.
        height: f64,
    },

    Swimming {
        action: f64,
        duration: f64,
        weight: f64,
        /// Pool length in meters.
        length_pool: f64,
        /// Number of pool lengths swum.
        count_pool: f64,
    },
}

impl Workout {
    /// Display name, used verbatim in the summary line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Running { .. } => "Running",
            Self::SportsWalking { .. } => "SportsWalking",
            Self::Swimming { .. } => "Swimming",
        }
    }

    /// Duration in hours.
    pub fn duration(&self) -> f64 {
        match *self {
            Self::Running { duration, .. }
            | Self::SportsWalking { duration, .. }
            | Self::Swimming { duration, .. } => duration,
        }
    }

    /// Distance covered in kilometers: actions times step length.
    pub fn distance_km(&self) -> f64 {
        let (action, len_step) = match *self {
            Self::Running { action, .. } => (action, running::LEN_STEP),
            Self::SportsWalking { action, .. } => (action, walking::LEN_STEP),
            Self::Swimming { action, .. } => (action, swimming::LEN_STEP),
        };
        action * len_step / M_IN_KM
    }

    /// Average speed over the whole workout in km/h.
    ///
    /// Swimming measures speed from pool laps rather than strokes.
    pub fn mean_speed_kmh(&self) -> Result<f64> {
        match *self {
            Self::Running { duration, .. } | Self::SportsWalking { duration, .. } => {
                Ok(self.distance_km() / nonzero(duration, "duration")?)
            }
            Self::Swimming {
                duration,
                length_pool,
                count_pool,
                ..
            } => Ok(length_pool * count_pool / M_IN_KM / nonzero(duration, "duration")?),
        }
    }

    /// Calories burned over the whole workout.
    pub fn calories_burned(&self) -> Result<f64> {
        let speed = self.mean_speed_kmh()?;
        let calories = match *self {
            Self::Running {
                duration, weight, ..
            } => {
                (running::SPEED_MULTIPLIER * speed + running::SPEED_SHIFT) * weight / M_IN_KM
                    * duration
                    * MIN_IN_H
            }
            Self::SportsWalking {
                duration,
                weight,
                height,
                ..
            } => {
                let height_m = nonzero(height / CM_IN_M, "height")?;
                (walking::WEIGHT_MULTIPLIER * weight
                    + ((speed * KMH_IN_MSEC).powi(2) / height_m)
                        * walking::SPEED_HEIGHT_MULTIPLIER
                        * weight)
                    * duration
                    * MIN_IN_H
            }
            Self::Swimming {
                duration, weight, ..
            } => (speed + swimming::SPEED_SHIFT) * swimming::WEIGHT_MULTIPLIER * weight * duration,
        };
        Ok(calories)
    }

    /// Compute every statistic and bundle them for display.
    pub fn summarize(&self) -> Result<Summary> {
        let distance = self.distance_km();
        let speed = self.mean_speed_kmh()?;
        let calories = self.calories_burned()?;
        Ok(Summary {
            training_type: self.name().to_string(),
            duration: self.duration(),
            distance,
            speed,
            calories,
        })
    }
}

/// Pass `value` through as a divisor, rejecting zero.
fn nonzero(value: f64, field: &'static str) -> Result<f64> {
    if value == 0.0 {
        return Err(ComputeError::DivisionByZero { field });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn running() -> Workout {
        Workout::Running {
            action: 15000.0,
            duration: 1.0,
            weight: 75.0,
        }
    }

    fn walking() -> Workout {
        Workout::SportsWalking {
            action: 9000.0,
            duration: 1.0,
            weight: 75.0,
            height: 180.0,
        }
    }

    fn swimming() -> Workout {
        Workout::Swimming {
            action: 720.0,
            duration: 1.0,
            weight: 80.0,
            length_pool: 25.0,
            count_pool: 40.0,
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPSILON,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn running_statistics() {
        let workout = running();

        assert_close(workout.distance_km(), 9.75);
        assert_close(workout.mean_speed_kmh().unwrap(), 9.75);
        assert_close(workout.calories_burned().unwrap(), 797.805);
    }

    #[test]
    fn walking_statistics() {
        let workout = walking();

        assert_close(workout.distance_km(), 5.85);
        assert_close(workout.mean_speed_kmh().unwrap(), 5.85);

        let speed_ms = 5.85 * 0.278;
        let expected = (0.035 * 75.0 + (speed_ms * speed_ms / 1.8) * 0.029 * 75.0) * 60.0;
        assert_close(workout.calories_burned().unwrap(), expected);
        assert_eq!(format!("{:.3}", workout.calories_burned().unwrap()), "349.252");
    }

    #[test]
    fn swimming_speed_uses_pool_laps() {
        let workout = swimming();

        assert_close(workout.mean_speed_kmh().unwrap(), 1.0);
        assert_close(workout.calories_burned().unwrap(), 336.0);
    }

    #[test]
    fn swimming_distance_uses_stroke_length() {
        assert_close(swimming().distance_km(), 0.9936);
    }

    #[test]
    fn speed_scales_with_duration() {
        let workout = Workout::Running {
            action: 15000.0,
            duration: 2.0,
            weight: 75.0,
        };

        assert_close(workout.mean_speed_kmh().unwrap(), 4.875);
    }

    #[test]
    fn statistics_are_deterministic() {
        for workout in [running(), walking(), swimming()] {
            assert_eq!(
                workout.distance_km().to_bits(),
                workout.distance_km().to_bits()
            );
            assert_eq!(
                workout.mean_speed_kmh().unwrap().to_bits(),
                workout.mean_speed_kmh().unwrap().to_bits()
            );
        }
    }

    #[test]
    fn zero_duration_is_division_by_zero_for_every_variant() {
        let workouts = [
            Workout::Running {
                action: 100.0,
                duration: 0.0,
                weight: 70.0,
            },
            Workout::SportsWalking {
                action: 100.0,
                duration: 0.0,
                weight: 70.0,
                height: 170.0,
            },
            Workout::Swimming {
                action: 100.0,
                duration: 0.0,
                weight: 70.0,
                length_pool: 25.0,
                count_pool: 4.0,
            },
        ];

        for workout in workouts {
            let expected = ComputeError::DivisionByZero { field: "duration" };
            assert_eq!(workout.mean_speed_kmh().unwrap_err(), expected);
            assert_eq!(workout.calories_burned().unwrap_err(), expected);
            assert_eq!(workout.summarize().unwrap_err(), expected);
        }
    }

    #[test]
    fn zero_duration_still_has_a_distance() {
        let workout = Workout::Running {
            action: 1000.0,
            duration: 0.0,
            weight: 70.0,
        };

        assert_close(workout.distance_km(), 0.65);
    }

    #[test]
    fn zero_height_is_division_by_zero() {
        let workout = Workout::SportsWalking {
            action: 9000.0,
            duration: 1.0,
            weight: 75.0,
            height: 0.0,
        };

        assert_eq!(
            workout.calories_burned().unwrap_err(),
            ComputeError::DivisionByZero { field: "height" }
        );
    }

    #[test]
    fn height_underflowing_to_zero_is_division_by_zero() {
        let workout = Workout::SportsWalking {
            action: 9000.0,
            duration: 1.0,
            weight: 75.0,
            height: 1e-323,
        };

        assert_eq!(
            workout.calories_burned().unwrap_err(),
            ComputeError::DivisionByZero { field: "height" }
        );
    }

    #[test]
    fn summarize_collects_all_statistics() {
        let summary = swimming().summarize().unwrap();

        assert_eq!(summary.training_type, "Swimming");
        assert_close(summary.duration, 1.0);
        assert_close(summary.distance, 0.9936);
        assert_close(summary.speed, 1.0);
        assert_close(summary.calories, 336.0);
    }

    #[test]
    fn names_match_variants() {
        assert_eq!(running().name(), "Running");
        assert_eq!(walking().name(), "SportsWalking");
        assert_eq!(swimming().name(), "Swimming");
    }
}
