//! Error types for calendar arithmetic.

use thiserror::Error;

/// Errors from calendar validation, parsing, or Julian Day conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CalendarError {
    /// Month or day outside the proleptic Gregorian calendar.
    #[error("invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Month outside 1..=12 where no day is involved.
    #[error("invalid month: {year:04}-{month:02}")]
    InvalidMonth { year: i32, month: u32 },
    /// Hour outside 0..=23 or minute outside 0..=59.
    #[error("invalid time of day: {hour:02}:{minute:02}")]
    InvalidTime { hour: u32, minute: u32 },
    /// Year outside the range the integer arithmetic is validated for.
    #[error("year {year} is outside the supported range")]
    UnsupportedYearRange { year: i64 },
    /// Text could not be parsed as `YYYY-MM-DD`.
    #[error("date parse error: {0}")]
    Parse(String),
}
