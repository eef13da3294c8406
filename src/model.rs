//! Core data model for stride.
//!
//! A workout holds the measured inputs of one session; its summary holds
//! the statistics derived from them.

mod summary;
mod workout;

pub use summary::{Labels, Summary};
pub use workout::{ComputeError, Workout};
