//! Sensor packages and batch processing.
//!
//! Packages are handled one at a time in input order. Each one is
//! independent: a failure never changes the result of another package.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dispatch::{self, DispatchError};
use crate::model::{ComputeError, Summary};

/// Errors that can occur while processing one package.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PackageError {
    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    #[error(transparent)]
    Compute(#[from] ComputeError),
}

/// One reading from a sensor: an activity code and its values in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    pub code: String,
    pub values: Vec<f64>,
}

impl Package {
    pub fn new(code: impl Into<String>, values: impl Into<Vec<f64>>) -> Self {
        Self {
            code: code.into(),
            values: values.into(),
        }
    }

    /// Build the workout this package describes and summarize it.
    pub fn summarize(&self) -> Result<Summary, PackageError> {
        let workout = dispatch::read_package(&self.code, &self.values)?;
        Ok(workout.summarize()?)
    }
}

/// The packages the demo feed reports, in order.
pub fn demo_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", [15000.0, 1.0, 75.0]),
        Package::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// What a batch does when one package fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OnError {
    /// Stop at the first failure and return it.
    #[default]
    Abort,

    /// Record the failure and continue with the next package.
    Skip,
}

/// A package that could not be processed.
#[derive(Debug, Clone, PartialEq)]
pub struct Failure {
    /// Zero-based position of the package in the batch.
    pub index: usize,
    pub code: String,
    pub error: PackageError,
}

/// Process `packages` in order, passing each summary to `emit` as soon as
/// it is computed.
///
/// Under [`OnError::Abort`] the first failure is returned as `Err`.
/// Under [`OnError::Skip`] failures are collected and returned.
pub fn process<F>(
    packages: &[Package],
    on_error: OnError,
    mut emit: F,
) -> Result<Vec<Failure>, Failure>
where
    F: FnMut(&Summary),
{
    let mut failures = Vec::new();

    for (index, package) in packages.iter().enumerate() {
        match package.summarize() {
            Ok(summary) => {
                debug!(index, code = %package.code, "summarized package");
                emit(&summary);
            }
            Err(error) => {
                let failure = Failure {
                    index,
                    code: package.code.clone(),
                    error,
                };
                match on_error {
                    OnError::Abort => return Err(failure),
                    OnError::Skip => {
                        debug!(index, code = %failure.code, error = %failure.error, "skipping package");
                        failures.push(failure);
                    }
                }
            }
        }
    }

    Ok(failures)
}
