//! Error types for pillar computation and date queries.

use saju_base::{Branch, CycleError, Stem};
use saju_time::{CalendarError, CivilDate};
use thiserror::Error;

use crate::lunar::BridgeError;

/// Errors from the Four Pillars engine and its date queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SajuError {
    /// A calendar field (date, lunar date, hour, or minute) is out of range.
    #[error(transparent)]
    InvalidDate(CalendarError),
    /// A year too far from the epochs for the day-count arithmetic.
    #[error("year {year} is outside the supported range")]
    UnsupportedYearRange { year: i64 },
    /// A stem/branch pair that never occurs in the 60-cycle.
    #[error("invalid pillar combination: {stem} with {branch}")]
    InvalidPillarCombination { stem: Stem, branch: Branch },
    /// The lunar-solar converter failed or returned unusable data.
    #[error("lunar calendar bridge unavailable: {0}")]
    BridgeUnavailable(#[from] BridgeError),
    /// A date range that is reversed or longer than the allowed span.
    #[error("invalid date range {start}..={end} (at most {max_days} days)")]
    InvalidRange {
        start: CivilDate,
        end: CivilDate,
        max_days: u32,
    },
    /// Any other stem/branch table error, such as an unknown name.
    #[error(transparent)]
    Table(CycleError),
}

impl From<CalendarError> for SajuError {
    fn from(e: CalendarError) -> Self {
        match e {
            CalendarError::UnsupportedYearRange { year } => Self::UnsupportedYearRange { year },
            other => Self::InvalidDate(other),
        }
    }
}

impl From<CycleError> for SajuError {
    fn from(e: CycleError) -> Self {
        match e {
            CycleError::InvalidPillarCombination { stem, branch } => {
                Self::InvalidPillarCombination { stem, branch }
            }
            other => Self::Table(other),
        }
    }
}
