//! Validated Gregorian calendar dates and inclusive date ranges.
//!
//! `CivilDate` is the canonical date representation used throughout the
//! workspace. It can only be built from a valid, in-range date, so every
//! holder can convert it to a Julian Day Number without a fallible step.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::CalendarError;
use crate::julian::{civil_from_jdn, jdn_to_gregorian, jdn_unchecked, validate_date, weekday_from_jdn};
use crate::weekday::Weekday;

/// A proleptic Gregorian calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CivilDate {
    /// Build a date, validating month, day, and the supported year range.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        validate_date(year, month, day)?;
        Ok(Self { year, month, day })
    }

    /// Date for a Julian Day Number.
    pub fn from_jdn(jdn: i64) -> Result<Self, CalendarError> {
        let (year, month, day) = jdn_to_gregorian(jdn)?;
        Ok(Self { year, month, day })
    }

    pub const fn year(self) -> i32 {
        self.year
    }

    pub const fn month(self) -> u32 {
        self.month
    }

    pub const fn day(self) -> u32 {
        self.day
    }

    /// Julian Day Number of this date.
    pub fn jdn(self) -> i64 {
        jdn_unchecked(self.year, self.month, self.day)
    }

    /// Day of the week.
    pub fn weekday(self) -> Weekday {
        weekday_from_jdn(self.jdn())
    }

    /// The date `days` days later (or earlier, for negative `days`).
    ///
    /// # Errors
    /// `UnsupportedYearRange` if the result leaves the supported range.
    pub fn add_days(self, days: i64) -> Result<Self, CalendarError> {
        // A saturated sum is always outside the supported JDN range.
        Self::from_jdn(self.jdn().saturating_add(days))
    }

    /// Signed number of days from `self` to `other`.
    pub fn days_until(self, other: CivilDate) -> i64 {
        other.jdn() - self.jdn()
    }

    /// Iterate every date from `self` through `end`, inclusive.
    ///
    /// The iterator is empty when `end` precedes `self`.
    pub fn range_inclusive(self, end: CivilDate) -> DateRange {
        DateRange {
            next_jdn: self.jdn(),
            end_jdn: end.jdn(),
        }
    }
}

impl Display for CivilDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.year < 0 {
            write!(f, "-{:04}-{:02}-{:02}", -i64::from(self.year), self.month, self.day)
        } else {
            write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
        }
    }
}

impl FromStr for CivilDate {
    type Err = CalendarError;

    /// Parse `YYYY-MM-DD`, with an optional leading `-` for years before 1 BCE.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let parts: Vec<&str> = body.split('-').collect();
        if parts.len() != 3 {
            return Err(CalendarError::Parse(format!("expected YYYY-MM-DD, got {s}")));
        }
        let year: i32 = parts[0]
            .parse()
            .map_err(|e| CalendarError::Parse(format!("year '{}': {e}", parts[0])))?;
        let month: u32 = parts[1]
            .parse()
            .map_err(|e| CalendarError::Parse(format!("month '{}': {e}", parts[1])))?;
        let day: u32 = parts[2]
            .parse()
            .map_err(|e| CalendarError::Parse(format!("day '{}': {e}", parts[2])))?;
        Self::new(if negative { -year } else { year }, month, day)
    }
}

impl Serialize for CivilDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Inclusive iterator over consecutive calendar dates.
#[derive(Debug, Clone)]
pub struct DateRange {
    next_jdn: i64,
    end_jdn: i64,
}

impl DateRange {
    /// Number of dates remaining.
    pub fn len_days(&self) -> u64 {
        if self.next_jdn > self.end_jdn {
            0
        } else {
            (self.end_jdn - self.next_jdn + 1) as u64
        }
    }
}

impl Iterator for DateRange {
    type Item = CivilDate;

    fn next(&mut self) -> Option<CivilDate> {
        if self.next_jdn > self.end_jdn {
            return None;
        }
        // Both endpoints came from valid dates, so every day between them is in range.
        let (year, month, day) = civil_from_jdn(self.next_jdn);
        self.next_jdn += 1;
        Some(CivilDate {
            year: year as i32,
            month,
            day,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len_days() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for DateRange {}

/// A validated time of day (hour and minute).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TimeOfDay {
    hour: u32,
    minute: u32,
}

impl TimeOfDay {
    /// Build a time of day; `hour` must be 0..=23 and `minute` 0..=59.
    pub fn new(hour: u32, minute: u32) -> Result<Self, CalendarError> {
        if hour > 23 || minute > 59 {
            return Err(CalendarError::InvalidTime { hour, minute });
        }
        Ok(Self { hour, minute })
    }

    pub const fn hour(self) -> u32 {
        self.hour
    }

    pub const fn minute(self) -> u32 {
        self.minute
    }
}

impl Display for TimeOfDay {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::{MAX_SUPPORTED_YEAR, MIN_SUPPORTED_YEAR};

    #[test]
    fn parse_and_display() {
        let d: CivilDate = "2024-03-05".parse().unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2024, 3, 5));
        assert_eq!(d.to_string(), "2024-03-05");
    }

    #[test]
    fn parse_negative_year() {
        let d: CivilDate = "-0044-03-15".parse().unwrap();
        assert_eq!(d.year(), -44);
        assert_eq!(d.to_string(), "-0044-03-15");
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!("2024/03/05".parse::<CivilDate>(), Err(CalendarError::Parse(_))));
        assert!(matches!("2024-xx-05".parse::<CivilDate>(), Err(CalendarError::Parse(_))));
        assert!(matches!(
            "2023-02-29".parse::<CivilDate>(),
            Err(CalendarError::InvalidDate { .. })
        ));
    }

    #[test]
    fn jdn_roundtrip() {
        let d = CivilDate::new(1988, 2, 29).unwrap();
        assert_eq!(CivilDate::from_jdn(d.jdn()).unwrap(), d);
    }

    #[test]
    fn add_days_crosses_year() {
        let d = CivilDate::new(2023, 12, 31).unwrap();
        assert_eq!(d.add_days(1).unwrap(), CivilDate::new(2024, 1, 1).unwrap());
        assert_eq!(d.add_days(-365).unwrap(), CivilDate::new(2022, 12, 31).unwrap());
    }

    #[test]
    fn extreme_offsets_are_rejected() {
        let d = CivilDate::new(2024, 1, 1).unwrap();
        for days in [i64::MAX, i64::MIN] {
            assert!(matches!(
                d.add_days(days),
                Err(CalendarError::UnsupportedYearRange { .. })
            ));
        }
        for jdn in [i64::MAX, i64::MIN] {
            assert!(matches!(
                CivilDate::from_jdn(jdn),
                Err(CalendarError::UnsupportedYearRange { .. })
            ));
        }
    }

    #[test]
    fn add_days_stops_at_range_edges() {
        let last = CivilDate::new(MAX_SUPPORTED_YEAR, 12, 31).unwrap();
        assert!(last.add_days(1).is_err());
        assert_eq!(last.add_days(0).unwrap(), last);
        let first = CivilDate::new(MIN_SUPPORTED_YEAR, 1, 1).unwrap();
        assert!(first.add_days(-1).is_err());
        assert_eq!(
            first.add_days(31).unwrap(),
            CivilDate::new(MIN_SUPPORTED_YEAR, 2, 1).unwrap()
        );
    }

    #[test]
    fn range_inclusive_counts() {
        let start = CivilDate::new(2024, 2, 27).unwrap();
        let end = CivilDate::new(2024, 3, 2).unwrap();
        let days: Vec<CivilDate> = start.range_inclusive(end).collect();
        assert_eq!(days.len(), 5);
        assert_eq!(days[2], CivilDate::new(2024, 2, 29).unwrap());
        assert_eq!(*days.last().unwrap(), end);
        assert_eq!(start.days_until(end), 4);
    }

    #[test]
    fn reversed_range_is_empty() {
        let start = CivilDate::new(2024, 3, 2).unwrap();
        let end = CivilDate::new(2024, 3, 1).unwrap();
        assert_eq!(start.range_inclusive(end).count(), 0);
    }

    #[test]
    fn time_of_day_bounds() {
        assert!(TimeOfDay::new(23, 59).is_ok());
        assert_eq!(
            TimeOfDay::new(24, 0),
            Err(CalendarError::InvalidTime { hour: 24, minute: 0 })
        );
        assert!(TimeOfDay::new(12, 60).is_err());
        assert_eq!(TimeOfDay::new(7, 5).unwrap().to_string(), "07:05");
    }
}
