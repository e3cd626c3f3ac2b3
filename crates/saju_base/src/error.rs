//! Error types for stem/branch tables and the sexagenary cycle.

use thiserror::Error;

use crate::branch::Branch;
use crate::stem::Stem;

/// Errors from the stem/branch tables and the sexagenary cycle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CycleError {
    /// Stem and branch indices have different parity; the pair never
    /// occurs in the 60-cycle.
    #[error("invalid pillar combination: {stem} with {branch} (index parity differs)")]
    InvalidPillarCombination { stem: Stem, branch: Branch },
    /// A stem or branch name that matches no table entry.
    #[error("unknown {kind}: {name}")]
    UnknownName { kind: &'static str, name: String },
}
