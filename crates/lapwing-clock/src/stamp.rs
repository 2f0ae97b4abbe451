//! Timestamp rendering.

use std::str::FromStr;

use crate::{Clock, SystemClock};

/// Rendering style for a timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StampStyle {
    /// Calendar date only, dot-separated (`2026.08.06`).
    #[default]
    Date,
    /// Date and time of day, slash-separated with a 24-hour clock
    /// (`2026/08/06 14:30`).
    DateTime,
}

impl StampStyle {
    /// Returns the chrono format pattern for this style.
    #[must_use]
    pub const fn pattern(&self) -> &'static str {
        match self {
            Self::Date => "%Y.%m.%d",
            Self::DateTime => "%Y/%m/%d %H:%M",
        }
    }

    /// Returns the style as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::DateTime => "datetime",
        }
    }

    /// Returns all available styles.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Date, Self::DateTime]
    }
}

impl std::fmt::Display for StampStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StampStyle {
    type Err = StampParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "date" | "day" => Ok(Self::Date),
            "datetime" | "date-time" | "timestamp" => Ok(Self::DateTime),
            _ => Err(StampParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid stamp style string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StampParseError(String);

impl std::fmt::Display for StampParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid stamp style '{}', expected one of: date, datetime",
            self.0
        )
    }
}

impl std::error::Error for StampParseError {}

/// Renders the current instant as a string in the given style.
///
/// Reads the system clock in local time. Use [`stamp_with`] to render
/// against an injected clock instead.
#[must_use]
pub fn now_stamp(style: StampStyle) -> String {
    stamp_with(&SystemClock, style)
}

/// Renders the given clock's current instant in the given style.
#[must_use]
pub fn stamp_with<C: Clock>(clock: &C, style: StampStyle) -> String {
    clock.now().format(style.pattern()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FixedClock;
    use chrono::NaiveDate;

    fn pinned() -> FixedClock {
        let instant = NaiveDate::from_ymd_opt(2024, 1, 5)
            .unwrap()
            .and_hms_opt(7, 8, 9)
            .unwrap();
        FixedClock::new(instant)
    }

    #[test]
    fn test_date_stamp() {
        assert_eq!(stamp_with(&pinned(), StampStyle::Date), "2024.01.05");
    }

    #[test]
    fn test_datetime_stamp() {
        assert_eq!(
            stamp_with(&pinned(), StampStyle::DateTime),
            "2024/01/05 07:08"
        );
    }

    #[test]
    fn test_now_stamp_shape() {
        let date = now_stamp(StampStyle::Date);
        assert_eq!(date.len(), 10);
        assert_eq!(&date[4..5], ".");
        assert_eq!(&date[7..8], ".");
        assert!(date.chars().filter(|c| c.is_ascii_digit()).count() == 8);

        let datetime = now_stamp(StampStyle::DateTime);
        assert_eq!(datetime.len(), 16);
        assert_eq!(&datetime[4..5], "/");
        assert_eq!(&datetime[7..8], "/");
        assert_eq!(&datetime[10..11], " ");
        assert_eq!(&datetime[13..14], ":");
    }

    #[test]
    fn test_style_parse() {
        assert_eq!("date".parse::<StampStyle>().unwrap(), StampStyle::Date);
        assert_eq!(
            "DateTime".parse::<StampStyle>().unwrap(),
            StampStyle::DateTime
        );
        assert_eq!(
            "timestamp".parse::<StampStyle>().unwrap(),
            StampStyle::DateTime
        );
        assert!("iso".parse::<StampStyle>().is_err());
    }

    #[test]
    fn test_style_display() {
        assert_eq!(StampStyle::Date.to_string(), "date");
        assert_eq!(StampStyle::DateTime.to_string(), "datetime");
    }
}
