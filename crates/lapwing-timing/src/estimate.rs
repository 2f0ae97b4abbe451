//! Finish-time estimation.

use chrono::{NaiveDateTime, TimeDelta};
use thiserror::Error;

/// Errors that can occur while estimating a finish time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EstimateError {
    /// Division by zero: no iteration has completed yet.
    #[error("division by zero: current iteration index must be at least 1")]
    ZeroIteration,
}

/// Projected completion time for an iterating workload.
///
/// Produced by [`LoopTimer::estimate_finish`](crate::LoopTimer::estimate_finish)
/// via linear extrapolation: the observed elapsed time scaled by the ratio
/// of total to completed iterations. The projection assumes uniform
/// per-iteration cost and may land in the past if the iteration index
/// overshoots the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinishEstimate {
    /// Projected finish instant.
    pub finish: NaiveDateTime,
    /// Estimated total duration from the start instant.
    pub total: TimeDelta,
}

impl FinishEstimate {
    /// Creates a new finish estimate.
    #[must_use]
    pub const fn new(finish: NaiveDateTime, total: TimeDelta) -> Self {
        Self { finish, total }
    }

    /// Returns the status line for this estimate.
    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "Estimated time to finish is around {}",
            self.finish.format("%m/%d/%Y, %H:%M")
        )
    }

    /// Prints the status line to stdout.
    pub fn announce(&self) {
        println!("{}", self.message());
    }
}

impl std::fmt::Display for FinishEstimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}
