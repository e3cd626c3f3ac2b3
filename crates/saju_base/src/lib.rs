//! Stem-branch tables and the sexagenary cycle.
//!
//! This crate provides:
//! - The 10 heavenly stems and 12 earthly branches as immutable tables
//! - The five elements and the stem → element lookup
//! - `Pillar`, a stem-branch pair that is valid by construction
//! - Offset ↔ pillar arithmetic on the 60-cycle
//!
//! All tables are `const` data; nothing here allocates state or needs
//! initialization.

pub mod branch;
pub mod cycle;
pub mod element;
pub mod error;
pub mod stem;

pub use branch::{ALL_BRANCHES, Branch, branch_at};
pub use cycle::{ALL_PILLARS, CYCLE_LEN, Pillar, Script, offset_from_pillar, pillar_from_offset};
pub use element::{ALL_ELEMENTS, Element, element_of};
pub use error::CycleError;
pub use stem::{ALL_STEMS, Stem, stem_at};
