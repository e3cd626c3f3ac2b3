//! Gregorian calendar ↔ Julian Day Number conversion.
//!
//! The Julian Day Number (JDN) is the integer day count whose noon
//! coincides with the astronomical Julian Date, so 2000-01-01 is JDN
//! 2 451 545. All arithmetic is integer-only with floor division, which
//! keeps the result exact for years before the common era as well.
//!
//! Forward conversion follows the Meeus formulation (January and February
//! counted as months 13 and 14 of the previous year); the inverse is the
//! Richards algorithm. Both are public-domain astronomical formulas.

use crate::error::CalendarError;
use crate::weekday::Weekday;

/// JDN of 2000-01-01 (the J2000.0 day).
pub const J2000_JDN: i64 = 2_451_545;

/// Earliest year accepted by the converters.
pub const MIN_SUPPORTED_YEAR: i32 = -999_999;

/// Latest year accepted by the converters.
pub const MAX_SUPPORTED_YEAR: i32 = 999_999;

/// JDN of the first day of [`MIN_SUPPORTED_YEAR`].
pub const MIN_SUPPORTED_JDN: i64 = -363_521_074;

/// JDN of the last day of [`MAX_SUPPORTED_YEAR`].
pub const MAX_SUPPORTED_JDN: i64 = 366_963_559;

/// Whether `year` is a leap year in the proleptic Gregorian calendar.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`, or `None` if `month` is not 1..=12.
pub const fn days_in_month(year: i32, month: u32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 if is_leap_year(year) => Some(29),
        2 => Some(28),
        _ => None,
    }
}

/// Check that `year` lies within the supported range.
pub fn check_year(year: i64) -> Result<(), CalendarError> {
    if year < i64::from(MIN_SUPPORTED_YEAR) || year > i64::from(MAX_SUPPORTED_YEAR) {
        return Err(CalendarError::UnsupportedYearRange { year });
    }
    Ok(())
}

/// Validate a Gregorian calendar date.
pub fn validate_date(year: i32, month: u32, day: u32) -> Result<(), CalendarError> {
    check_year(i64::from(year))?;
    match days_in_month(year, month) {
        Some(max_day) if (1..=max_day).contains(&day) => Ok(()),
        _ => Err(CalendarError::InvalidDate { year, month, day }),
    }
}

/// Convert a proleptic Gregorian date to its Julian Day Number.
///
/// # Errors
/// `InvalidDate` for an out-of-range month or day,
/// `UnsupportedYearRange` for a year outside
/// [`MIN_SUPPORTED_YEAR`]..=[`MAX_SUPPORTED_YEAR`].
pub fn gregorian_to_jdn(year: i32, month: u32, day: u32) -> Result<i64, CalendarError> {
    validate_date(year, month, day)?;
    Ok(jdn_unchecked(year, month, day))
}

/// Forward conversion for a date already known to be valid.
pub(crate) fn jdn_unchecked(year: i32, month: u32, day: u32) -> i64 {
    let (y, m) = if month <= 2 {
        (i64::from(year) - 1, i64::from(month) + 12)
    } else {
        (i64::from(year), i64::from(month))
    };
    let a = y.div_euclid(100);
    let b = 2 - a + a.div_euclid(4);
    // floor(365.25 * (y + 4716)) and floor(30.6001 * (m + 1)) in integers.
    (1461 * (y + 4716)).div_euclid(4) + (153 * (m + 1)).div_euclid(5) + i64::from(day) + b - 1524
}

/// Convert a Julian Day Number back to a proleptic Gregorian date.
///
/// # Errors
/// `UnsupportedYearRange` if `jdn` is outside
/// [`MIN_SUPPORTED_JDN`]..=[`MAX_SUPPORTED_JDN`]. The reported year is
/// then an estimate, accurate to within one 400-year cycle.
pub fn jdn_to_gregorian(jdn: i64) -> Result<(i32, u32, u32), CalendarError> {
    if !(MIN_SUPPORTED_JDN..=MAX_SUPPORTED_JDN).contains(&jdn) {
        let cycles = jdn.saturating_sub(J2000_JDN).div_euclid(146_097);
        return Err(CalendarError::UnsupportedYearRange {
            year: 2000 + cycles * 400,
        });
    }
    let (year, month, day) = civil_from_jdn(jdn);
    check_year(year)?;
    // Checked above: the year fits the supported i32 range.
    Ok((year as i32, month, day))
}

/// Richards' inverse. `jdn` must lie within the supported range.
pub(crate) fn civil_from_jdn(jdn: i64) -> (i64, u32, u32) {
    let f = jdn + 1401 + ((4 * jdn + 274_277).div_euclid(146_097) * 3).div_euclid(4) - 38;
    let e = 4 * f + 3;
    let g = e.rem_euclid(1461).div_euclid(4);
    let h = 5 * g + 2;
    let day = h.rem_euclid(153).div_euclid(5) + 1;
    let month = (h.div_euclid(153) + 2).rem_euclid(12) + 1;
    let year = e.div_euclid(1461) - 4716 + (12 + 2 - month).div_euclid(12);
    (year, month as u32, day as u32)
}

/// Day of the week for a Julian Day Number.
pub fn weekday_from_jdn(jdn: i64) -> Weekday {
    Weekday::from_sunday_index(((jdn.rem_euclid(7) + 1) % 7) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_reference() {
        assert_eq!(gregorian_to_jdn(2000, 1, 1).unwrap(), J2000_JDN);
    }

    #[test]
    fn gregorian_reform_boundary() {
        // 1582-10-15 (first Gregorian day) is JDN 2 299 161.
        assert_eq!(gregorian_to_jdn(1582, 10, 15).unwrap(), 2_299_161);
    }

    #[test]
    fn unix_epoch() {
        assert_eq!(gregorian_to_jdn(1970, 1, 1).unwrap(), 2_440_588);
    }

    #[test]
    fn february_uses_previous_year() {
        let feb_28 = gregorian_to_jdn(2023, 2, 28).unwrap();
        let mar_1 = gregorian_to_jdn(2023, 3, 1).unwrap();
        assert_eq!(mar_1 - feb_28, 1);
    }

    #[test]
    fn leap_day_accepted_only_in_leap_years() {
        assert!(gregorian_to_jdn(2024, 2, 29).is_ok());
        assert!(gregorian_to_jdn(2000, 2, 29).is_ok());
        assert_eq!(
            gregorian_to_jdn(1900, 2, 29),
            Err(CalendarError::InvalidDate {
                year: 1900,
                month: 2,
                day: 29
            })
        );
    }

    #[test]
    fn invalid_month_and_day() {
        assert!(matches!(
            gregorian_to_jdn(2024, 13, 1),
            Err(CalendarError::InvalidDate { .. })
        ));
        assert!(matches!(
            gregorian_to_jdn(2024, 0, 1),
            Err(CalendarError::InvalidDate { .. })
        ));
        assert!(matches!(
            gregorian_to_jdn(2024, 4, 31),
            Err(CalendarError::InvalidDate { .. })
        ));
        assert!(matches!(
            gregorian_to_jdn(2024, 4, 0),
            Err(CalendarError::InvalidDate { .. })
        ));
    }

    #[test]
    fn year_range_enforced() {
        assert!(gregorian_to_jdn(MAX_SUPPORTED_YEAR, 12, 31).is_ok());
        assert!(gregorian_to_jdn(MIN_SUPPORTED_YEAR, 1, 1).is_ok());
        assert_eq!(
            gregorian_to_jdn(MAX_SUPPORTED_YEAR + 1, 1, 1),
            Err(CalendarError::UnsupportedYearRange {
                year: i64::from(MAX_SUPPORTED_YEAR) + 1
            })
        );
    }

    #[test]
    fn inverse_of_reference_days() {
        assert_eq!(jdn_to_gregorian(J2000_JDN).unwrap(), (2000, 1, 1));
        assert_eq!(jdn_to_gregorian(2_299_161).unwrap(), (1582, 10, 15));
        assert_eq!(jdn_to_gregorian(0).unwrap(), (-4713, 11, 24));
    }

    #[test]
    fn inverse_out_of_range() {
        assert!(matches!(
            jdn_to_gregorian(i64::from(i32::MAX) * 400),
            Err(CalendarError::UnsupportedYearRange { .. })
        ));
    }

    #[test]
    fn inverse_rejects_extreme_jdn() {
        for jdn in [i64::MAX, i64::MIN, MIN_SUPPORTED_JDN - 1, MAX_SUPPORTED_JDN + 1] {
            assert!(
                matches!(
                    jdn_to_gregorian(jdn),
                    Err(CalendarError::UnsupportedYearRange { .. })
                ),
                "{jdn}"
            );
        }
        assert!(matches!(
            jdn_to_gregorian(i64::MIN),
            Err(CalendarError::UnsupportedYearRange { year }) if year < i64::from(MIN_SUPPORTED_YEAR)
        ));
        assert!(matches!(
            jdn_to_gregorian(i64::MAX),
            Err(CalendarError::UnsupportedYearRange { year }) if year > i64::from(MAX_SUPPORTED_YEAR)
        ));
    }

    #[test]
    fn supported_jdn_bounds_match_year_range() {
        assert_eq!(
            gregorian_to_jdn(MIN_SUPPORTED_YEAR, 1, 1).unwrap(),
            MIN_SUPPORTED_JDN
        );
        assert_eq!(
            gregorian_to_jdn(MAX_SUPPORTED_YEAR, 12, 31).unwrap(),
            MAX_SUPPORTED_JDN
        );
        assert_eq!(
            jdn_to_gregorian(MIN_SUPPORTED_JDN).unwrap(),
            (MIN_SUPPORTED_YEAR, 1, 1)
        );
        assert_eq!(
            jdn_to_gregorian(MAX_SUPPORTED_JDN).unwrap(),
            (MAX_SUPPORTED_YEAR, 12, 31)
        );
        let leap = gregorian_to_jdn(-4, 2, 29).unwrap();
        assert_eq!(jdn_to_gregorian(leap).unwrap(), (-4, 2, 29));
    }

    #[test]
    fn weekday_of_j2000_is_saturday() {
        assert_eq!(weekday_from_jdn(J2000_JDN), Weekday::Saturday);
    }

    #[test]
    fn weekday_at_i64_extremes() {
        // 2^63 - 1 is a multiple of 7.
        assert_eq!(weekday_from_jdn(i64::MAX), Weekday::Monday);
        assert_eq!(weekday_from_jdn(i64::MIN), Weekday::Sunday);
    }

    #[test]
    fn century_leap_rules() {
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
        assert!(is_leap_year(-4));
        assert!(is_leap_year(0));
    }
}
