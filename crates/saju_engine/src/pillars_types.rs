//! Types for Four Pillars inputs, options, and results.

use std::fmt::{Display, Formatter};

use saju_base::{ALL_ELEMENTS, Branch, Element, Pillar};
use saju_time::{CivilDate, TimeOfDay};
use serde::{Deserialize, Serialize};

/// Calendar a birth date is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CalendarKind {
    #[default]
    Solar,
    Lunar,
}

/// Birth moment as supplied by the caller.
///
/// Fields are raw and unvalidated; the engine validates them and reports
/// `InvalidDate` for anything out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BirthRecord {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub calendar: CalendarKind,
    /// Intercalary-month flag; only meaningful for lunar dates.
    #[serde(default)]
    pub leap_month: bool,
}

impl BirthRecord {
    /// A solar (Gregorian) birth record.
    pub fn solar(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            calendar: CalendarKind::Solar,
            leap_month: false,
        }
    }

    /// A lunar birth record.
    pub fn lunar(year: i32, month: u32, day: u32, leap_month: bool, hour: u32, minute: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            calendar: CalendarKind::Lunar,
            leap_month,
        }
    }
}

/// Which day the 23:00-23:59 part of the 자 hour belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ZiHourRule {
    /// 23:00-23:59 keeps the calendar day's day pillar.
    #[default]
    SameDay,
    /// 23:00-23:59 already belongs to the next day (야자시 not used): the
    /// day pillar advances by one and the hour stem follows the new day.
    NextDay,
}

/// Default cap on the number of days a range query may cover.
pub const DEFAULT_MAX_RANGE_DAYS: u32 = 366;

/// Engine behaviour switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EngineOptions {
    pub zi_hour: ZiHourRule,
    pub max_range_days: u32,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            zi_hour: ZiHourRule::SameDay,
            max_range_days: DEFAULT_MAX_RANGE_DAYS,
        }
    }
}

/// The four pillars of a birth moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
    /// Solar date the pillars were computed on (after lunar conversion).
    pub solar_date: CivilDate,
    /// Clock time of birth.
    pub time: TimeOfDay,
}

impl FourPillars {
    /// Pillars in year, month, day, hour order.
    pub fn as_array(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }

    /// Element tally over the four stems and four branches.
    pub fn element_counts(&self) -> ElementBalance {
        let mut balance = ElementBalance::default();
        for p in self.as_array() {
            balance.add(p.stem().element());
            balance.add(p.branch().element());
        }
        balance
    }
}

impl Display for FourPillars {
    /// `년주: 경오(庚午) 금(金), 월주: ..., 일주: ..., 시주: ...`
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let labels = ["년주", "월주", "일주", "시주"];
        for (i, (label, p)) in labels.iter().zip(self.as_array()).enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{label}: {p} {}", p.element())?;
        }
        Ok(())
    }
}

/// Count of each element across a set of stems and branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct ElementBalance {
    pub wood: u8,
    pub fire: u8,
    pub earth: u8,
    pub metal: u8,
    pub water: u8,
}

impl ElementBalance {
    fn add(&mut self, element: Element) {
        *self.slot(element) += 1;
    }

    fn slot(&mut self, element: Element) -> &mut u8 {
        match element {
            Element::Wood => &mut self.wood,
            Element::Fire => &mut self.fire,
            Element::Earth => &mut self.earth,
            Element::Metal => &mut self.metal,
            Element::Water => &mut self.water,
        }
    }

    /// Count for one element.
    pub fn count(&self, element: Element) -> u8 {
        match element {
            Element::Wood => self.wood,
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Metal => self.metal,
            Element::Water => self.water,
        }
    }

    /// Sum over all elements.
    pub fn total(&self) -> u8 {
        ALL_ELEMENTS.iter().map(|e| self.count(*e)).sum()
    }

    /// Elements with a zero count, in generating order.
    pub fn missing(&self) -> Vec<Element> {
        ALL_ELEMENTS
            .iter()
            .copied()
            .filter(|e| self.count(*e) == 0)
            .collect()
    }

    /// Element(s) with the highest count, in generating order.
    pub fn dominant(&self) -> Vec<Element> {
        let max = ALL_ELEMENTS.iter().map(|e| self.count(*e)).max().unwrap_or(0);
        ALL_ELEMENTS
            .iter()
            .copied()
            .filter(|e| max > 0 && self.count(*e) == max)
            .collect()
    }
}

/// One two-hour division of a day with its pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct HourSlot {
    pub branch: Branch,
    pub pillar: Pillar,
    /// First clock hour of the window.
    pub start_hour: u32,
    /// Last clock hour of the window (the window ends at minute 59).
    pub last_hour: u32,
}
