//! Four Pillars (사주팔자) engine and date-to-ganzi queries.
//!
//! This crate provides:
//! - Year, month, day, and hour pillars on the shared 60-cycle
//! - `FourPillarsEngine`, which composes them for a birth record
//! - A `LunarSolarBridge` seam for lunar birth dates (no converter ships)
//! - Date-to-ganzi labels, range annotation, and calendar conversion
//!
//! # Known limitation
//! The month pillar uses calendar months, not solar terms (절기). A date in
//! the first few days of a month, before that month's opening term, gets
//! the following solar month's pillar. The year pillar likewise changes on
//! January 1 rather than at 입춘.

pub mod almanac;
pub mod conversion;
pub mod engine;
pub mod epoch;
pub mod error;
pub mod ganzi;
pub mod lunar;
pub mod pillars;
pub mod pillars_types;

pub use almanac::{DayAnnotation, annotate_range};
pub use conversion::{CalendarConversion, CalendarConversionRequest, convert_calendar};
pub use engine::FourPillarsEngine;
pub use epoch::{DAY_EPOCH_JDN, YEAR_EPOCH};
pub use error::SajuError;
pub use ganzi::{DateGanzi, date_ganzi, pillar_for_date};
pub use lunar::{BridgeError, LunarDate, LunarSolarBridge, NoLunarBridge};
pub use pillars::{
    FIVE_RATS, day_pillar, hour_branch_index, hour_pillar, hour_pillars_for_day, month_pillar,
    year_pillar, zodiac_for_year,
};
pub use pillars_types::{
    BirthRecord, CalendarKind, DEFAULT_MAX_RANGE_DAYS, ElementBalance, EngineOptions, FourPillars,
    HourSlot, ZiHourRule,
};
