//! Date-to-ganzi lookups.

use std::fmt::{Display, Formatter};

use saju_base::{Pillar, Script};
use saju_time::CivilDate;
use serde::Serialize;

use crate::error::SajuError;
use crate::pillars::{day_pillar, month_pillar, year_pillar};

/// Day pillar of a Gregorian date given as raw fields.
pub fn pillar_for_date(year: i32, month: u32, day: u32) -> Result<Pillar, SajuError> {
    Ok(day_pillar(CivilDate::new(year, month, day)?))
}

/// Year, month, and day pillars of one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateGanzi {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
}

impl DateGanzi {
    /// Label in the requested script, e.g. `경오년 신사월 갑자일`.
    pub fn label(&self, script: Script) -> String {
        format!(
            "{}년 {}월 {}일",
            self.year.label(script),
            self.month.label(script),
            self.day.label(script)
        )
    }
}

impl Display for DateGanzi {
    /// `경오년 신사월 갑자일`.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label(Script::Hangul))
    }
}

/// Year, month, and day pillars of a date.
pub fn date_ganzi(date: CivilDate) -> Result<DateGanzi, SajuError> {
    Ok(DateGanzi {
        year: year_pillar(date.year())?,
        month: month_pillar(date.year(), date.month())?,
        day: day_pillar(date),
    })
}
