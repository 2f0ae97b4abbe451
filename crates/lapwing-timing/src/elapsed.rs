//! Elapsed-time reporting.

/// Whole seconds elapsed since a recorded start instant.
///
/// Sub-second precision is truncated when the report is taken. A start
/// instant in the future yields a negative count; interpreting that is the
/// caller's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElapsedReport {
    seconds: i64,
}

impl ElapsedReport {
    /// Creates a report from a raw second count.
    #[must_use]
    pub const fn from_seconds(seconds: i64) -> Self {
        Self { seconds }
    }

    /// Returns the elapsed whole seconds.
    #[must_use]
    pub const fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Returns the elapsed time in minutes, rounded to one decimal place.
    #[must_use]
    pub fn minutes(&self) -> f64 {
        (self.seconds as f64 / 60.0 * 10.0).round() / 10.0
    }

    /// Returns the status line for this report.
    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "Elapsed time in minutes from the start: {:.1}",
            self.seconds as f64 / 60.0
        )
    }

    /// Formats the elapsed time in compact form (e.g. "2h 30m", "45m").
    #[must_use]
    pub fn human(&self) -> String {
        let total_secs = self.seconds;
        if total_secs < 0 {
            return format!("{total_secs}s");
        }

        let hours = total_secs / 3600;
        let minutes = (total_secs % 3600) / 60;
        let seconds = total_secs % 60;

        if hours > 0 {
            if minutes > 0 {
                format!("{hours}h {minutes}m")
            } else {
                format!("{hours}h")
            }
        } else if minutes > 0 {
            if seconds > 0 && minutes < 10 {
                format!("{minutes}m {seconds}s")
            } else {
                format!("{minutes}m")
            }
        } else {
            format!("{seconds}s")
        }
    }
}

impl std::fmt::Display for ElapsedReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}
