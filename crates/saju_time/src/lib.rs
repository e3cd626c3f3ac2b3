//! Calendar arithmetic for the saju workspace.
//!
//! This crate provides:
//! - Proleptic Gregorian ↔ Julian Day Number conversion (integer-exact)
//! - `CivilDate`, a validated date type, and inclusive date ranges
//! - `TimeOfDay` and `Weekday`

pub mod civil_date;
pub mod error;
pub mod julian;
pub mod weekday;

pub use civil_date::{CivilDate, DateRange, TimeOfDay};
pub use error::CalendarError;
pub use julian::{
    J2000_JDN, MAX_SUPPORTED_JDN, MAX_SUPPORTED_YEAR, MIN_SUPPORTED_JDN, MIN_SUPPORTED_YEAR,
    check_year, days_in_month, gregorian_to_jdn, is_leap_year, jdn_to_gregorian, validate_date,
    weekday_from_jdn,
};
pub use weekday::{ALL_WEEKDAYS, Weekday};
