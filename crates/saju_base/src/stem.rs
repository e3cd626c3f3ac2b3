//! Heavenly stems (천간, 天干).
//!
//! Ten cyclic labels, 갑(甲) through 계(癸). Even-indexed stems are yang,
//! odd-indexed stems are yin.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::element::{Element, element_of};
use crate::error::CycleError;

/// The 10 heavenly stems, named by Korean romanization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Stem {
    Gap,
    Eul,
    Byeong,
    Jeong,
    Mu,
    Gi,
    Gyeong,
    Sin,
    Im,
    Gye,
}

/// All 10 stems in order (index 0 = 갑).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Gap,
    Stem::Eul,
    Stem::Byeong,
    Stem::Jeong,
    Stem::Mu,
    Stem::Gi,
    Stem::Gyeong,
    Stem::Sin,
    Stem::Im,
    Stem::Gye,
];

const HANGUL: [&str; 10] = ["갑", "을", "병", "정", "무", "기", "경", "신", "임", "계"];
const HANJA: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];
const ROMANIZED: [&str; 10] = [
    "Gap", "Eul", "Byeong", "Jeong", "Mu", "Gi", "Gyeong", "Sin", "Im", "Gye",
];

/// Stem at `index`.
///
/// # Panics
/// If `index > 9`. Callers reduce offsets through the sexagenary cycle first.
pub const fn stem_at(index: u8) -> Stem {
    ALL_STEMS[index as usize]
}

impl Stem {
    /// 0-based index (갑=0 .. 계=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Gap => 0,
            Self::Eul => 1,
            Self::Byeong => 2,
            Self::Jeong => 3,
            Self::Mu => 4,
            Self::Gi => 5,
            Self::Gyeong => 6,
            Self::Sin => 7,
            Self::Im => 8,
            Self::Gye => 9,
        }
    }

    /// Stem for a 0-based index, or `None` if `index > 9`.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 10 {
            Some(ALL_STEMS[index as usize])
        } else {
            None
        }
    }

    /// Korean name (갑, 을, ...).
    pub const fn hangul(self) -> &'static str {
        HANGUL[self.index() as usize]
    }

    /// Chinese character (甲, 乙, ...).
    pub const fn hanja(self) -> &'static str {
        HANJA[self.index() as usize]
    }

    /// Romanized Korean name.
    pub const fn romanized(self) -> &'static str {
        ROMANIZED[self.index() as usize]
    }

    /// The stem's element.
    pub const fn element(self) -> Element {
        element_of(self)
    }

    /// Whether this is a yang (even-indexed) stem.
    pub const fn is_yang(self) -> bool {
        self.index() % 2 == 0
    }
}

impl Display for Stem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.hangul(), self.hanja())
    }
}

impl FromStr for Stem {
    type Err = CycleError;

    /// Accepts Hangul, Hanja, romanized (case-insensitive) names, or an index 0-9.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(index) = s.parse::<u8>() {
            if let Some(stem) = Self::from_index(index) {
                return Ok(stem);
            }
        }
        ALL_STEMS
            .iter()
            .copied()
            .find(|stem| {
                stem.hangul() == s || stem.hanja() == s || stem.romanized().eq_ignore_ascii_case(s)
            })
            .ok_or_else(|| CycleError::UnknownName {
                kind: "stem",
                name: s.to_string(),
            })
    }
}
