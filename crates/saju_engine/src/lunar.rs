//! Seam to an external lunar-solar calendar converter.
//!
//! The numeric lunisolar conversion is not implemented in this workspace.
//! Callers supply a [`LunarSolarBridge`]; the engine only ever asks it for
//! the solar equivalent of a lunar birth date (or the lunar equivalent of a
//! solar date for annotations) and computes pillars on solar dates.
//!
//! Timeouts and retries around a remote converter belong to the bridge
//! implementation or its caller; the engine calls it once and propagates
//! any failure.

use std::fmt::{Display, Formatter};

use saju_time::{CalendarError, CivilDate, check_year};
use serde::Serialize;
use thiserror::Error;

/// A date in the Korean/Chinese lunisolar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct LunarDate {
    year: i32,
    month: u32,
    day: u32,
    leap_month: bool,
}

impl LunarDate {
    /// Build a lunar date. Lunar months have 29 or 30 days; which one is
    /// known only to the converter, so day 30 is accepted here.
    pub fn new(year: i32, month: u32, day: u32, leap_month: bool) -> Result<Self, CalendarError> {
        check_year(i64::from(year))?;
        if !(1..=12).contains(&month) || !(1..=30).contains(&day) {
            return Err(CalendarError::InvalidDate { year, month, day });
        }
        Ok(Self {
            year,
            month,
            day,
            leap_month,
        })
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

    /// Whether the month is an intercalary (윤달) month.
    pub const fn is_leap_month(self) -> bool {
        self.leap_month
    }
}

impl Display for LunarDate {
    /// `음력 1990년 4월 21일`, with ` (윤달)` for intercalary months.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "음력 {}년 {}월 {}일", self.year, self.month, self.day)?;
        if self.leap_month {
            write!(f, " (윤달)")?;
        }
        Ok(())
    }
}

/// Failure reported by a lunar-solar converter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct BridgeError {
    message: String,
}

impl BridgeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// External solar ↔ lunar date converter.
pub trait LunarSolarBridge: Send + Sync {
    /// Lunar date corresponding to a solar date.
    fn solar_to_lunar(&self, date: CivilDate) -> Result<LunarDate, BridgeError>;

    /// Solar date corresponding to a lunar date.
    fn lunar_to_solar(&self, date: LunarDate) -> Result<CivilDate, BridgeError>;
}

/// Bridge used when no converter is configured; every call fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLunarBridge;

impl LunarSolarBridge for NoLunarBridge {
    fn solar_to_lunar(&self, date: CivilDate) -> Result<LunarDate, BridgeError> {
        Err(BridgeError::new(format!(
            "no lunar calendar converter configured (solar {date})"
        )))
    }

    fn lunar_to_solar(&self, date: LunarDate) -> Result<CivilDate, BridgeError> {
        Err(BridgeError::new(format!(
            "no lunar calendar converter configured ({date})"
        )))
    }
}
