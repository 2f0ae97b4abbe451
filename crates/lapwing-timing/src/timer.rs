//! Loop timer over an injectable clock.

use chrono::{NaiveDateTime, TimeDelta};
use lapwing_clock::{Clock, SystemClock};

use crate::{ElapsedReport, EstimateError, FinishEstimate};

/// Records the start instant of a workload and measures against a clock.
///
/// The default clock is [`SystemClock`]; tests and reproducible pipelines
/// can supply any other [`Clock`] through [`LoopTimer::with_clock`].
#[derive(Debug, Clone, Copy)]
pub struct LoopTimer<C: Clock = SystemClock> {
    start: NaiveDateTime,
    clock: C,
}

impl LoopTimer<SystemClock> {
    /// Starts a timer at the current instant.
    #[must_use]
    pub fn start() -> Self {
        let clock = SystemClock;
        Self {
            start: clock.now(),
            clock,
        }
    }

    /// Creates a timer for a workload that started at the given instant.
    #[must_use]
    pub const fn from_start(start: NaiveDateTime) -> Self {
        Self {
            start,
            clock: SystemClock,
        }
    }
}

impl<C: Clock> LoopTimer<C> {
    /// Creates a timer with an explicit start instant and clock.
    #[must_use]
    pub const fn with_clock(start: NaiveDateTime, clock: C) -> Self {
        Self { start, clock }
    }

    /// Returns the recorded start instant.
    #[must_use]
    pub const fn started_at(&self) -> NaiveDateTime {
        self.start
    }

    /// Reports the whole seconds elapsed since the start instant.
    ///
    /// Sub-second precision is truncated. A start instant in the future
    /// yields a negative count.
    #[must_use]
    pub fn elapsed(&self) -> ElapsedReport {
        let seconds = (self.clock.now() - self.start).num_seconds();
        ElapsedReport::from_seconds(seconds)
    }

    /// Projects a finish time by linear extrapolation.
    ///
    /// Scales the elapsed time by `total_iterations / current_iteration`
    /// and adds the result to the start instant. Iterations are 1-based;
    /// `current_iteration` greater than `total_iterations` is accepted and
    /// simply projects a finish at or before "now".
    ///
    /// # Errors
    ///
    /// Returns [`EstimateError::ZeroIteration`] if `current_iteration` is 0.
    pub fn estimate_finish(
        &self,
        total_iterations: u64,
        current_iteration: u64,
    ) -> Result<FinishEstimate, EstimateError> {
        if current_iteration == 0 {
            return Err(EstimateError::ZeroIteration);
        }

        let elapsed = (self.clock.now() - self.start).num_seconds();
        let estimated_secs =
            total_iterations as f64 * elapsed as f64 / current_iteration as f64;
        let total = TimeDelta::milliseconds((estimated_secs * 1000.0).round() as i64);

        Ok(FinishEstimate::new(self.start + total, total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use lapwing_clock::FixedClock;

    fn instant(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn test_elapsed_report() {
        let timer = LoopTimer::with_clock(instant(12, 0, 0), FixedClock::new(instant(12, 2, 5)));
        let report = timer.elapsed();

        assert_eq!(report.seconds(), 125);
        assert_eq!(
            report.message(),
            "Elapsed time in minutes from the start: 2.1"
        );
    }

    #[test]
    fn test_elapsed_truncates_subsecond_precision() {
        let now = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_milli_opt(12, 0, 5, 900)
            .unwrap();
        let timer = LoopTimer::with_clock(instant(12, 0, 0), FixedClock::new(now));

        assert_eq!(timer.elapsed().seconds(), 5);
    }

    #[test]
    fn test_elapsed_future_start_is_negative() {
        let timer = LoopTimer::with_clock(instant(12, 0, 30), FixedClock::new(instant(12, 0, 0)));

        assert_eq!(timer.elapsed().seconds(), -30);
    }

    #[test]
    fn test_estimate_finish_linear_extrapolation() {
        // 50 seconds for 5 of 10 iterations: 100 seconds total.
        let timer = LoopTimer::with_clock(instant(12, 0, 0), FixedClock::new(instant(12, 0, 50)));
        let estimate = timer.estimate_finish(10, 5).unwrap();

        assert_eq!(estimate.total, TimeDelta::seconds(100));
        assert_eq!(estimate.finish, instant(12, 1, 40));
        assert_eq!(
            estimate.message(),
            "Estimated time to finish is around 01/15/2024, 12:01"
        );
    }

    #[test]
    fn test_estimate_finish_zero_iteration() {
        let timer = LoopTimer::with_clock(instant(12, 0, 0), FixedClock::new(instant(12, 0, 50)));

        assert_eq!(
            timer.estimate_finish(10, 0),
            Err(EstimateError::ZeroIteration)
        );
    }

    #[test]
    fn test_estimate_finish_overshot_index_lands_in_past() {
        // 120 seconds for 8 of 4 planned iterations: the projection is not
        // clamped and lands before "now".
        let now = instant(12, 2, 0);
        let timer = LoopTimer::with_clock(instant(12, 0, 0), FixedClock::new(now));
        let estimate = timer.estimate_finish(4, 8).unwrap();

        assert_eq!(estimate.total, TimeDelta::seconds(60));
        assert!(estimate.finish < now);
    }

    #[test]
    fn test_estimate_finish_fractional_seconds() {
        // 10 seconds for 3 of 7 iterations: 23.333... seconds total,
        // carried at millisecond precision.
        let timer = LoopTimer::with_clock(instant(9, 0, 0), FixedClock::new(instant(9, 0, 10)));
        let estimate = timer.estimate_finish(7, 3).unwrap();

        assert_eq!(estimate.total, TimeDelta::milliseconds(23333));
    }

    #[test]
    fn test_started_at() {
        let start = instant(8, 30, 0);
        let timer = LoopTimer::from_start(start);

        assert_eq!(timer.started_at(), start);
    }
}
