//! Day of the week.

use serde::Serialize;

/// The seven weekdays, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

/// All weekdays in order (index 0 = Sunday).
pub const ALL_WEEKDAYS: [Weekday; 7] = [
    Weekday::Sunday,
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
];

impl Weekday {
    /// Weekday from a 0-based index counted from Sunday, reduced modulo 7.
    pub const fn from_sunday_index(index: u8) -> Self {
        ALL_WEEKDAYS[(index % 7) as usize]
    }

    /// 0-based index (Sunday=0 .. Saturday=6).
    pub const fn index(self) -> u8 {
        match self {
            Self::Sunday => 0,
            Self::Monday => 1,
            Self::Tuesday => 2,
            Self::Wednesday => 3,
            Self::Thursday => 4,
            Self::Friday => 5,
            Self::Saturday => 6,
        }
    }

    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }

    /// Korean name (월요일, 화요일, ...).
    pub const fn korean_name(self) -> &'static str {
        match self {
            Self::Sunday => "일요일",
            Self::Monday => "월요일",
            Self::Tuesday => "화요일",
            Self::Wednesday => "수요일",
            Self::Thursday => "목요일",
            Self::Friday => "금요일",
            Self::Saturday => "토요일",
        }
    }
}
