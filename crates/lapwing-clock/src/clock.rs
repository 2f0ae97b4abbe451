//! Injectable time sources.

use chrono::{Local, NaiveDateTime};

/// Source of the current instant.
///
/// Helpers that need "now" take a `Clock` instead of reading the system
/// clock directly, so their output can be pinned in tests with
/// [`FixedClock`].
pub trait Clock {
    /// Returns the current instant as a naive local datetime.
    fn now(&self) -> NaiveDateTime;
}

/// The wall clock, read in local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock pinned to one instant.
///
/// Primarily a test double, but also useful when a batch of output should
/// carry a single consistent timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: NaiveDateTime,
}

impl FixedClock {
    /// Creates a clock that always reports the given instant.
    #[must_use]
    pub const fn new(instant: NaiveDateTime) -> Self {
        Self { instant }
    }

    /// Returns the pinned instant.
    #[must_use]
    pub const fn instant(&self) -> NaiveDateTime {
        self.instant
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.instant
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_fixed_clock_returns_pinned_instant() {
        let instant = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(9, 15, 0)
            .unwrap();
        let clock = FixedClock::new(instant);

        assert_eq!(clock.now(), instant);
        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.instant(), instant);
    }

    #[test]
    fn test_system_clock_advances() {
        let clock = SystemClock;
        let first = clock.now();
        let second = clock.now();

        assert!(second >= first);
    }
}
