//! The five elements (Wu-Xing, 오행).

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::stem::Stem;

/// The five elements in generating order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All five elements in generating order (Wood → Fire → Earth → Metal → Water).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// 0-based index in generating order (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// Korean name (목, 화, 토, 금, 수).
    pub const fn hangul(self) -> &'static str {
        match self {
            Self::Wood => "목",
            Self::Fire => "화",
            Self::Earth => "토",
            Self::Metal => "금",
            Self::Water => "수",
        }
    }

    /// Chinese character (木, 火, 土, 金, 水).
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// The element this one generates (Wood generates Fire, ..., Water generates Wood).
    pub const fn generates(self) -> Element {
        ALL_ELEMENTS[((self.index() + 1) % 5) as usize]
    }

    /// The element this one overcomes (Wood overcomes Earth, ..., Water overcomes Fire).
    pub const fn overcomes(self) -> Element {
        ALL_ELEMENTS[((self.index() + 2) % 5) as usize]
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.hangul(), self.hanja())
    }
}

/// Element of a heavenly stem, by direct table lookup.
///
/// Each element owns two consecutive stems: 갑/을 Wood, 병/정 Fire,
/// 무/기 Earth, 경/신 Metal, 임/계 Water.
pub const fn element_of(stem: Stem) -> Element {
    match stem {
        Stem::Gap | Stem::Eul => Element::Wood,
        Stem::Byeong | Stem::Jeong => Element::Fire,
        Stem::Mu | Stem::Gi => Element::Earth,
        Stem::Gyeong | Stem::Sin => Element::Metal,
        Stem::Im | Stem::Gye => Element::Water,
    }
}
