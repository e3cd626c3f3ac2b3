//! Earthly branches (지지, 地支).
//!
//! Twelve cyclic labels, 자(子) through 해(亥). Each branch also names a
//! zodiac animal and a two-hour division of the day; branch 0 covers
//! 23:00-00:59, branch 1 covers 01:00-02:59, and so on.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::element::Element;
use crate::error::CycleError;

/// The 12 earthly branches, named by Korean romanization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Branch {
    Ja,
    Chuk,
    In,
    Myo,
    Jin,
    Sa,
    O,
    Mi,
    Sin,
    Yu,
    Sul,
    Hae,
}

/// All 12 branches in order (index 0 = 자).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Ja,
    Branch::Chuk,
    Branch::In,
    Branch::Myo,
    Branch::Jin,
    Branch::Sa,
    Branch::O,
    Branch::Mi,
    Branch::Sin,
    Branch::Yu,
    Branch::Sul,
    Branch::Hae,
];

const HANGUL: [&str; 12] = [
    "자", "축", "인", "묘", "진", "사", "오", "미", "신", "유", "술", "해",
];
const HANJA: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];
const ROMANIZED: [&str; 12] = [
    "Ja", "Chuk", "In", "Myo", "Jin", "Sa", "O", "Mi", "Sin", "Yu", "Sul", "Hae",
];
const ANIMAL_HANGUL: [&str; 12] = [
    "쥐", "소", "호랑이", "토끼", "용", "뱀", "말", "양", "원숭이", "닭", "개", "돼지",
];
const ANIMAL_ENGLISH: [&str; 12] = [
    "Rat", "Ox", "Tiger", "Rabbit", "Dragon", "Snake", "Horse", "Goat", "Monkey", "Rooster",
    "Dog", "Pig",
];

/// Branch at `index`.
///
/// # Panics
/// If `index > 11`. Callers reduce offsets through the sexagenary cycle first.
pub const fn branch_at(index: u8) -> Branch {
    ALL_BRANCHES[index as usize]
}

impl Branch {
    /// 0-based index (자=0 .. 해=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ja => 0,
            Self::Chuk => 1,
            Self::In => 2,
            Self::Myo => 3,
            Self::Jin => 4,
            Self::Sa => 5,
            Self::O => 6,
            Self::Mi => 7,
            Self::Sin => 8,
            Self::Yu => 9,
            Self::Sul => 10,
            Self::Hae => 11,
        }
    }

    /// Branch for a 0-based index, or `None` if `index > 11`.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 12 {
            Some(ALL_BRANCHES[index as usize])
        } else {
            None
        }
    }

    /// Korean name (자, 축, ...).
    pub const fn hangul(self) -> &'static str {
        HANGUL[self.index() as usize]
    }

    /// Chinese character (子, 丑, ...).
    pub const fn hanja(self) -> &'static str {
        HANJA[self.index() as usize]
    }

    /// Romanized Korean name.
    pub const fn romanized(self) -> &'static str {
        ROMANIZED[self.index() as usize]
    }

    /// Zodiac animal in Korean (쥐, 소, 호랑이, ...).
    pub const fn animal_hangul(self) -> &'static str {
        ANIMAL_HANGUL[self.index() as usize]
    }

    /// Zodiac animal in English.
    pub const fn animal(self) -> &'static str {
        ANIMAL_ENGLISH[self.index() as usize]
    }

    /// Primary element of the branch.
    pub const fn element(self) -> Element {
        match self {
            Self::In | Self::Myo => Element::Wood,
            Self::Sa | Self::O => Element::Fire,
            Self::Jin | Self::Sul | Self::Chuk | Self::Mi => Element::Earth,
            Self::Sin | Self::Yu => Element::Metal,
            Self::Hae | Self::Ja => Element::Water,
        }
    }

    /// First clock hour of the branch's two-hour window (자 → 23).
    pub const fn start_hour(self) -> u32 {
        (2 * self.index() as u32 + 23) % 24
    }

    /// Last clock hour of the window; the window runs through minute 59 of it.
    pub const fn last_hour(self) -> u32 {
        2 * self.index() as u32
    }

    /// Korean name of the two-hour period (자시, 축시, ...).
    pub fn hour_name(self) -> String {
        format!("{}시", self.hangul())
    }

    /// The window as `HH:00-HH:59` text, e.g. `23:00-00:59`.
    pub fn hour_window(self) -> String {
        format!("{:02}:00-{:02}:59", self.start_hour(), self.last_hour())
    }
}

impl Display for Branch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.hangul(), self.hanja())
    }
}

impl FromStr for Branch {
    type Err = CycleError;

    /// Accepts Hangul, Hanja, romanized (case-insensitive) names, or an index 0-11.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(index) = s.parse::<u8>() {
            if let Some(branch) = Self::from_index(index) {
                return Ok(branch);
            }
        }
        ALL_BRANCHES
            .iter()
            .copied()
            .find(|branch| {
                branch.hangul() == s
                    || branch.hanja() == s
                    || branch.romanized().eq_ignore_ascii_case(s)
            })
            .ok_or_else(|| CycleError::UnknownName {
                kind: "branch",
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
            assert_eq!(branch_at(i as u8), *b);
        }
        assert_eq!(Branch::from_index(12), None);
    }

    #[test]
    fn rat_window_spans_midnight() {
        assert_eq!(Branch::Ja.start_hour(), 23);
        assert_eq!(Branch::Ja.last_hour(), 0);
        assert_eq!(Branch::Ja.hour_window(), "23:00-00:59");
        assert_eq!(Branch::Hae.hour_window(), "21:00-22:59");
        assert_eq!(Branch::O.hour_window(), "11:00-12:59");
    }

    #[test]
    fn windows_tile_the_day() {
        let mut hours = [0u8; 24];
        for b in ALL_BRANCHES {
            hours[b.start_hour() as usize] += 1;
            hours[b.last_hour() as usize] += 1;
        }
        assert!(hours.iter().all(|&n| n == 1));
    }

    #[test]
    fn zodiac_and_hour_names() {
        assert_eq!(Branch::In.animal_hangul(), "호랑이");
        assert_eq!(Branch::Yu.animal(), "Rooster");
        assert_eq!(Branch::Chuk.hour_name(), "축시");
    }

    #[test]
    fn primary_elements() {
        assert_eq!(Branch::Ja.element(), Element::Water);
        assert_eq!(Branch::O.element(), Element::Fire);
        assert_eq!(Branch::Mi.element(), Element::Earth);
        assert_eq!(Branch::Yu.element(), Element::Metal);
    }

    #[test]
    fn parse_branch_names() {
        assert_eq!("해".parse::<Branch>().unwrap(), Branch::Hae);
        assert_eq!("亥".parse::<Branch>().unwrap(), Branch::Hae);
        assert_eq!("HAE".parse::<Branch>().unwrap(), Branch::Hae);
        assert!("갑".parse::<Branch>().is_err());
    }
}
