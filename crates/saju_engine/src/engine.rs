//! Four Pillars engine: composes the pillar functions for a birth moment.

use saju_time::{CivilDate, TimeOfDay};
use tracing::{debug, warn};

use crate::error::SajuError;
use crate::lunar::{LunarDate, LunarSolarBridge};
use crate::pillars::{day_pillar, hour_pillar, month_pillar, year_pillar};
use crate::pillars_types::{BirthRecord, CalendarKind, EngineOptions, FourPillars, ZiHourRule};

/// Stateless pillar calculator configured by [`EngineOptions`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FourPillarsEngine {
    options: EngineOptions,
}

impl FourPillarsEngine {
    pub fn new(options: EngineOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> EngineOptions {
        self.options
    }

    /// Compute the four pillars of a birth record.
    ///
    /// Lunar records are converted to solar through `bridge` first; solar
    /// records never touch it.
    ///
    /// # Errors
    /// - `InvalidDate` for an out-of-range date, hour, or minute
    /// - `UnsupportedYearRange` for a year outside the supported range
    /// - `BridgeUnavailable` when lunar conversion fails
    pub fn compute_four_pillars(
        &self,
        record: &BirthRecord,
        bridge: &dyn LunarSolarBridge,
    ) -> Result<FourPillars, SajuError> {
        debug!(?record, zi_hour = ?self.options.zi_hour, "computing four pillars");

        let time = TimeOfDay::new(record.hour, record.minute)?;
        let solar_date = self.resolve_solar_date(record, bridge)?;

        let year = year_pillar(solar_date.year())?;
        let month = month_pillar(solar_date.year(), solar_date.month())?;
        let calendar_day = day_pillar(solar_date);
        let day = match self.options.zi_hour {
            ZiHourRule::NextDay if time.hour() == 23 => calendar_day.shifted(1),
            _ => calendar_day,
        };
        let hour = hour_pillar(day, time.hour())?;

        let pillars = FourPillars {
            year,
            month,
            day,
            hour,
            solar_date,
            time,
        };
        debug!(%pillars, "four pillars computed");
        Ok(pillars)
    }

    fn resolve_solar_date(
        &self,
        record: &BirthRecord,
        bridge: &dyn LunarSolarBridge,
    ) -> Result<CivilDate, SajuError> {
        match record.calendar {
            CalendarKind::Solar => Ok(CivilDate::new(record.year, record.month, record.day)?),
            CalendarKind::Lunar => {
                let lunar =
                    LunarDate::new(record.year, record.month, record.day, record.leap_month)?;
                bridge.lunar_to_solar(lunar).map_err(|e| {
                    warn!(%lunar, error = %e, "lunar to solar conversion failed");
                    SajuError::BridgeUnavailable(e)
                })
            }
        }
    }
}
