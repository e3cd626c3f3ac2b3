//! Per-day annotations over a date range (weekday, day pillar, lunar date).

use saju_base::Pillar;
use saju_time::{CivilDate, Weekday};
use serde::Serialize;
use tracing::{debug, warn};

use crate::engine::FourPillarsEngine;
use crate::error::SajuError;
use crate::lunar::{LunarDate, LunarSolarBridge};
use crate::pillars::day_pillar;

/// One annotated date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DayAnnotation {
    pub date: CivilDate,
    pub weekday: Weekday,
    pub day_pillar: Pillar,
    /// Present only when a bridge was supplied.
    pub lunar: Option<LunarDate>,
}

/// Annotate every date in `start..=end`.
///
/// # Errors
/// - `InvalidRange` when `end < start` or the range spans more than
///   `max_days` days
/// - `BridgeUnavailable` when `lunar` is given and fails for any date
pub fn annotate_range(
    start: CivilDate,
    end: CivilDate,
    max_days: u32,
    lunar: Option<&dyn LunarSolarBridge>,
) -> Result<Vec<DayAnnotation>, SajuError> {
    let range = start.range_inclusive(end);
    let len = range.len_days();
    if len == 0 || len > u64::from(max_days) {
        return Err(SajuError::InvalidRange {
            start,
            end,
            max_days,
        });
    }
    debug!(%start, %end, days = len, with_lunar = lunar.is_some(), "annotating range");

    range
        .map(|date| -> Result<DayAnnotation, SajuError> {
            let lunar = match lunar {
                Some(bridge) => Some(bridge.solar_to_lunar(date).map_err(|e| {
                    warn!(%date, error = %e, "solar to lunar conversion failed");
                    SajuError::BridgeUnavailable(e)
                })?),
                None => None,
            };
            Ok(DayAnnotation {
                date,
                weekday: date.weekday(),
                day_pillar: day_pillar(date),
                lunar,
            })
        })
        .collect()
}

impl FourPillarsEngine {
    /// [`annotate_range`] limited by the engine's `max_range_days`.
    pub fn annotate_range(
        &self,
        start: CivilDate,
        end: CivilDate,
        lunar: Option<&dyn LunarSolarBridge>,
    ) -> Result<Vec<DayAnnotation>, SajuError> {
        annotate_range(start, end, self.options().max_range_days, lunar)
    }
}
