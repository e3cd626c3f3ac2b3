//! Solar ↔ lunar date conversion annotated with weekday and ganzi.

use saju_time::{CivilDate, Weekday};
use serde::Serialize;
use tracing::warn;

use crate::error::SajuError;
use crate::ganzi::{DateGanzi, date_ganzi};
use crate::lunar::{LunarDate, LunarSolarBridge};

/// Which way to convert, with the known side of the pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarConversionRequest {
    SolarToLunar(CivilDate),
    LunarToSolar(LunarDate),
}

/// Both sides of a conversion plus labels for the solar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CalendarConversion {
    pub solar: CivilDate,
    pub lunar: LunarDate,
    pub weekday: Weekday,
    pub ganzi: DateGanzi,
}

/// Convert a date through `bridge` and label the result.
///
/// # Errors
/// `BridgeUnavailable` when the bridge fails; `UnsupportedYearRange` when the
/// converted solar year has no year pillar.
pub fn convert_calendar(
    request: CalendarConversionRequest,
    bridge: &dyn LunarSolarBridge,
) -> Result<CalendarConversion, SajuError> {
    let (solar, lunar) = match request {
        CalendarConversionRequest::SolarToLunar(solar) => {
            let lunar = bridge.solar_to_lunar(solar).map_err(|e| {
                warn!(%solar, error = %e, "solar to lunar conversion failed");
                SajuError::BridgeUnavailable(e)
            })?;
            (solar, lunar)
        }
        CalendarConversionRequest::LunarToSolar(lunar) => {
            let solar = bridge.lunar_to_solar(lunar).map_err(|e| {
                warn!(%lunar, error = %e, "lunar to solar conversion failed");
                SajuError::BridgeUnavailable(e)
            })?;
            (solar, lunar)
        }
    };
    Ok(CalendarConversion {
        solar,
        lunar,
        weekday: solar.weekday(),
        ganzi: date_ganzi(solar)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lunar::{BridgeError, NoLunarBridge};

    /// Knows a single pair: 2024-02-10 = lunar 2024-01-01 (설날).
    struct SeollalBridge;

    fn seollal() -> (CivilDate, LunarDate) {
        (
            CivilDate::new(2024, 2, 10).unwrap(),
            LunarDate::new(2024, 1, 1, false).unwrap(),
        )
    }

    impl LunarSolarBridge for SeollalBridge {
        fn solar_to_lunar(&self, date: CivilDate) -> Result<LunarDate, BridgeError> {
            let (solar, lunar) = seollal();
            if date == solar {
                Ok(lunar)
            } else {
                Err(BridgeError::new("unmapped"))
            }
        }

        fn lunar_to_solar(&self, date: LunarDate) -> Result<CivilDate, BridgeError> {
            let (solar, lunar) = seollal();
            if date == lunar {
                Ok(solar)
            } else {
                Err(BridgeError::new("unmapped"))
            }
        }
    }

    #[test]
    fn both_directions_agree() {
        let (solar, lunar) = seollal();
        let a = convert_calendar(CalendarConversionRequest::SolarToLunar(solar), &SeollalBridge)
            .unwrap();
        let b = convert_calendar(CalendarConversionRequest::LunarToSolar(lunar), &SeollalBridge)
            .unwrap();
        assert_eq!(a, b);
        assert_eq!(a.weekday, Weekday::Saturday);
        assert_eq!(a.ganzi.year.hangul(), "갑진");
        assert_eq!(a.ganzi.month.hangul(), "병인");
    }

    #[test]
    fn failure_propagates() {
        let (solar, _) = seollal();
        assert!(matches!(
            convert_calendar(CalendarConversionRequest::SolarToLunar(solar), &NoLunarBridge),
            Err(SajuError::BridgeUnavailable(_))
        ));
    }
}
