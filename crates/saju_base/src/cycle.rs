//! The sexagenary cycle (육십갑자, 六十甲子).
//!
//! Stems (period 10) and branches (period 12) advance together, so a
//! running offset `o` names the pair `(o mod 10, o mod 12)`. Because
//! lcm(10, 12) = 60 and both moduli are even, only the 60 pairs whose
//! indices share parity ever occur. This module is the single place that
//! maps offsets to pillars and back; every calendar computation in the
//! workspace goes through it.

use std::fmt::{Display, Formatter};

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::branch::{ALL_BRANCHES, Branch, branch_at};
use crate::element::Element;
use crate::error::CycleError;
use crate::stem::{ALL_STEMS, Stem, stem_at};

/// Length of the sexagenary cycle.
pub const CYCLE_LEN: i64 = 60;

/// A stem-branch pair that occurs in the 60-cycle.
///
/// Construction is checked, so every `Pillar` value satisfies
/// `stem.index() % 2 == branch.index() % 2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pillar {
    stem: Stem,
    branch: Branch,
}

/// All 60 pillars in cycle order (index 0 = 갑자, 59 = 계해).
pub const ALL_PILLARS: [Pillar; 60] = build_cycle();

const fn build_cycle() -> [Pillar; 60] {
    let mut out = [Pillar {
        stem: Stem::Gap,
        branch: Branch::Ja,
    }; 60];
    let mut i = 0;
    while i < 60 {
        out[i] = Pillar {
            stem: ALL_STEMS[i % 10],
            branch: ALL_BRANCHES[i % 12],
        };
        i += 1;
    }
    out
}

/// Pillar for an arbitrary (possibly negative) cycle offset.
///
/// The offset is reduced with floor-modulo, so `-1` maps to 계해 (59).
pub const fn pillar_from_offset(offset: i64) -> Pillar {
    let n = offset.rem_euclid(CYCLE_LEN) as u8;
    Pillar {
        stem: stem_at(n % 10),
        branch: branch_at(n % 12),
    }
}

/// Cycle offset in `0..60` of a stem-branch pair.
///
/// Solves `x ≡ stem (mod 10)`, `x ≡ branch (mod 12)`.
///
/// # Errors
/// `InvalidPillarCombination` when the indices differ in parity.
pub fn offset_from_pillar(stem: Stem, branch: Branch) -> Result<u8, CycleError> {
    let s = i64::from(stem.index());
    let b = i64::from(branch.index());
    if (s - b).rem_euclid(2) != 0 {
        return Err(CycleError::InvalidPillarCombination { stem, branch });
    }
    Ok(crt_offset(s, b))
}

/// Offset for same-parity stem and branch indices.
fn crt_offset(s: i64, b: i64) -> u8 {
    // x = s + 10k with 10k ≡ b - s (mod 12), i.e. 5k ≡ (b - s)/2 (mod 6); 5 is its own inverse mod 6.
    let k = (5 * (b - s) / 2).rem_euclid(6);
    (s + 10 * k) as u8
}

impl Pillar {
    /// Checked constructor.
    pub fn new(stem: Stem, branch: Branch) -> Result<Self, CycleError> {
        offset_from_pillar(stem, branch)?;
        Ok(Self { stem, branch })
    }

    /// Pillar at a cycle offset (floor-modulo 60).
    pub const fn from_offset(offset: i64) -> Self {
        pillar_from_offset(offset)
    }

    pub const fn stem(self) -> Stem {
        self.stem
    }

    pub const fn branch(self) -> Branch {
        self.branch
    }

    /// Offset in `0..60` (갑자 = 0).
    pub fn offset(self) -> u8 {
        // Parity was checked at construction.
        crt_offset(i64::from(self.stem.index()), i64::from(self.branch.index()))
    }

    /// The pillar `steps` positions later in the cycle (earlier if negative).
    pub fn shifted(self, steps: i64) -> Self {
        pillar_from_offset(i64::from(self.offset()) + steps)
    }

    /// Element of the stem.
    pub const fn element(self) -> Element {
        self.stem.element()
    }

    /// Korean label, e.g. `갑자`.
    pub fn hangul(self) -> String {
        format!("{}{}", self.stem.hangul(), self.branch.hangul())
    }

    /// Chinese-character label, e.g. `甲子`.
    pub fn hanja(self) -> String {
        format!("{}{}", self.stem.hanja(), self.branch.hanja())
    }

    /// Label in the requested script.
    pub fn label(self, script: Script) -> String {
        match script {
            Script::Hangul => self.hangul(),
            Script::Hanja => self.hanja(),
            Script::Both => self.to_string(),
        }
    }
}

impl Display for Pillar {
    /// `갑자(甲子)`.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}({}{})",
            self.stem.hangul(),
            self.branch.hangul(),
            self.stem.hanja(),
            self.branch.hanja()
        )
    }
}

impl Serialize for Pillar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Pillar", 6)?;
        state.serialize_field("stem", &self.stem)?;
        state.serialize_field("branch", &self.branch)?;
        state.serialize_field("offset", &self.offset())?;
        state.serialize_field("hangul", &self.hangul())?;
        state.serialize_field("hanja", &self.hanja())?;
        state.serialize_field("element", &self.element())?;
        state.end()
    }
}

/// Which script display labels use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Script {
    /// `갑자`
    Hangul,
    /// `甲子`
    Hanja,
    /// `갑자(甲子)`
    #[default]
    Both,
}
