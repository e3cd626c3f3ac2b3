//! Year, month, day, and hour pillars.
//!
//! Every pillar is a position on the shared 60-cycle:
//!
//! | pillar | offset from 갑자 |
//! |--------|------------------|
//! | year   | `year - YEAR_EPOCH` |
//! | month  | `12 * (year - YEAR_EPOCH) + month` |
//! | day    | `jdn - DAY_EPOCH_JDN` |
//! | hour   | five-rats table, by day stem and hour branch |
//!
//! The month pillar is a calendar-month approximation: each Gregorian month
//! is assigned the solar month whose opening term (節) falls in its first
//! week, so February is 寅, December is 子 and January is 丑 of the preceding
//! solar year. Days before the term boundary (roughly the first 3 to 7 days
//! of a month) get the previous solar month in strict practice; this module
//! does not model solar terms.

use saju_base::{ALL_BRANCHES, Branch, Pillar, pillar_from_offset};
use saju_time::{CalendarError, CivilDate, check_year};

use crate::epoch::{DAY_EPOCH_JDN, YEAR_EPOCH};
use crate::error::SajuError;
use crate::pillars_types::HourSlot;

/// Hour-pillar offsets by `(day stem index mod 5, hour branch index)`.
///
/// Row starts: 갑/기 day → 갑자, 을/경 → 병자, 병/신 → 무자, 정/임 → 경자,
/// 무/계 → 임자. The five rows together cover the 60-cycle exactly once.
pub const FIVE_RATS: [[u8; 12]; 5] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
    [12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23],
    [24, 25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35],
    [36, 37, 38, 39, 40, 41, 42, 43, 44, 45, 46, 47],
    [48, 49, 50, 51, 52, 53, 54, 55, 56, 57, 58, 59],
];

/// Year pillar for a Gregorian year (epoch 1984 = 갑자).
///
/// The year boundary is January 1; 입춘 is not modelled.
pub fn year_pillar(year: i32) -> Result<Pillar, SajuError> {
    check_year(i64::from(year))?;
    Ok(pillar_from_offset(i64::from(year) - i64::from(YEAR_EPOCH)))
}

/// Zodiac animal (띠) of a year: the year pillar's branch.
pub fn zodiac_for_year(year: i32) -> Result<Branch, SajuError> {
    Ok(year_pillar(year)?.branch())
}

/// Month pillar for a Gregorian year and month (calendar-month approximation).
///
/// # Errors
/// `InvalidDate` when `month` is not 1..=12, `UnsupportedYearRange` for an
/// out-of-range year.
pub fn month_pillar(year: i32, month: u32) -> Result<Pillar, SajuError> {
    check_year(i64::from(year))?;
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { year, month }.into());
    }
    let offset = 12 * (i64::from(year) - i64::from(YEAR_EPOCH)) + i64::from(month);
    Ok(pillar_from_offset(offset))
}

/// Day pillar of a date.
pub fn day_pillar(date: CivilDate) -> Pillar {
    pillar_from_offset(date.jdn() - DAY_EPOCH_JDN)
}

/// Branch index (0 = 자 .. 11 = 해) of a clock hour.
///
/// 23:00 and 00:00 both fall in 자. Hours above 23 wrap.
pub const fn hour_branch_index(hour: u32) -> u8 {
    (((hour % 24) + 1) / 2 % 12) as u8
}

/// Hour pillar within a day (five-rats rule).
///
/// # Errors
/// `InvalidDate` when `hour > 23`.
pub fn hour_pillar(day: Pillar, hour: u32) -> Result<Pillar, SajuError> {
    if hour > 23 {
        return Err(CalendarError::InvalidTime { hour, minute: 0 }.into());
    }
    Ok(hour_pillar_for_branch(day, hour_branch_index(hour)))
}

fn hour_pillar_for_branch(day: Pillar, branch_index: u8) -> Pillar {
    let row = (day.stem().index() % 5) as usize;
    pillar_from_offset(i64::from(FIVE_RATS[row][branch_index as usize]))
}

/// The twelve hour windows of a day with their pillars, starting at 자시.
pub fn hour_pillars_for_day(day: Pillar) -> [HourSlot; 12] {
    ALL_BRANCHES.map(|branch| HourSlot {
        branch,
        pillar: hour_pillar_for_branch(day, branch.index()),
        start_hour: branch.start_hour(),
        last_hour: branch.last_hour(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use saju_base::{ALL_STEMS, Stem};

    fn date(y: i32, m: u32, d: u32) -> CivilDate {
        CivilDate::new(y, m, d).unwrap()
    }

    #[test]
    fn epoch_year_is_gapja() {
        assert_eq!(year_pillar(1984).unwrap().hangul(), "갑자");
        assert_eq!(year_pillar(1983).unwrap().hangul(), "계해");
    }

    #[test]
    fn year_out_of_range() {
        assert_eq!(
            year_pillar(1_000_000),
            Err(SajuError::UnsupportedYearRange { year: 1_000_000 })
        );
    }

    #[test]
    fn zodiac_is_year_branch() {
        assert_eq!(zodiac_for_year(2024).unwrap(), Branch::Jin);
        assert_eq!(zodiac_for_year(1990).unwrap().animal_hangul(), "말");
    }

    #[test]
    fn month_rejects_bad_month() {
        assert!(matches!(month_pillar(2024, 0), Err(SajuError::InvalidDate(_))));
        assert!(matches!(month_pillar(2024, 13), Err(SajuError::InvalidDate(_))));
    }

    #[test]
    fn february_is_in_month() {
        for year in [1900, 1984, 2000, 2024] {
            assert_eq!(month_pillar(year, 2).unwrap().branch(), Branch::In);
            assert_eq!(month_pillar(year, 12).unwrap().branch(), Branch::Ja);
            assert_eq!(month_pillar(year, 1).unwrap().branch(), Branch::Chuk);
        }
    }

    #[test]
    fn month_stem_follows_five_tigers() {
        // 寅 month stem by year stem: 갑/기 → 병, 을/경 → 무, 병/신 → 경, 정/임 → 임, 무/계 → 갑.
        let expected = [2u8, 4, 6, 8, 0];
        for year in 1984..2044 {
            let ys = year_pillar(year).unwrap().stem().index();
            let ms = month_pillar(year, 2).unwrap().stem().index();
            assert_eq!(ms, expected[(ys % 5) as usize], "year {year}");
        }
    }

    #[test]
    fn day_epoch_is_gapja() {
        assert_eq!(day_pillar(date(1949, 10, 1)).hangul(), "갑자");
        assert_eq!(day_pillar(date(1949, 9, 30)).hangul(), "계해");
    }

    #[test]
    fn hour_branch_boundaries() {
        assert_eq!(hour_branch_index(23), 0);
        assert_eq!(hour_branch_index(0), 0);
        assert_eq!(hour_branch_index(1), 1);
        assert_eq!(hour_branch_index(2), 1);
        assert_eq!(hour_branch_index(11), 6);
        assert_eq!(hour_branch_index(12), 6);
        assert_eq!(hour_branch_index(22), 11);
        for h in 0..24 {
            assert!(hour_branch_index(h) < 12);
        }
    }

    #[test]
    fn five_rats_matches_closed_form() {
        for stem in ALL_STEMS {
            let day = Pillar::new(stem, if stem.is_yang() { Branch::Ja } else { Branch::Chuk })
                .unwrap();
            for branch in ALL_BRANCHES {
                let p = hour_pillar_for_branch(day, branch.index());
                let closed = (stem.index() * 2 + branch.index()) % 10;
                assert_eq!(p.stem().index(), closed, "{stem} {branch}");
                assert_eq!(p.branch(), branch);
            }
        }
    }

    #[test]
    fn five_rats_reference_rows() {
        let gap_day = pillar_from_offset(0);
        assert_eq!(hour_pillar(gap_day, 0).unwrap().hangul(), "갑자");
        assert_eq!(hour_pillar(gap_day, 12).unwrap().hangul(), "경오");
        let gyeong_day = Pillar::new(Stem::Gyeong, Branch::Jin).unwrap();
        assert_eq!(hour_pillar(gyeong_day, 0).unwrap().hangul(), "병자");
        let gye_day = Pillar::new(Stem::Gye, Branch::Hae).unwrap();
        assert_eq!(hour_pillar(gye_day, 22).unwrap().hangul(), "계해");
    }

    #[test]
    fn hour_out_of_range() {
        assert!(matches!(
            hour_pillar(pillar_from_offset(0), 24),
            Err(SajuError::InvalidDate(CalendarError::InvalidTime { hour: 24, .. }))
        ));
    }

    #[test]
    fn twelve_slots_in_order() {
        let slots = hour_pillars_for_day(pillar_from_offset(16)); // 경진
        assert_eq!(slots[0].pillar.hangul(), "병자");
        assert_eq!(slots[0].start_hour, 23);
        assert_eq!(slots[0].last_hour, 0);
        assert_eq!(slots[11].pillar.hangul(), "정해");
        assert_eq!(slots[11].start_hour, 21);
        for (i, s) in slots.iter().enumerate() {
            assert_eq!(s.branch.index() as usize, i);
        }
    }
}
