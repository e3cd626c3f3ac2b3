//! Epoch anchors for the year and day cycles.
//!
//! These two constants are the only place the cycles are tied to the
//! calendar. Every pillar computation in the workspace reads them from
//! here.

/// A year whose year pillar is 갑자 (offset 0): CE 1984.
pub const YEAR_EPOCH: i32 = 1984;

/// A Julian Day Number whose day pillar is 갑자 (offset 0):
/// 1949-10-01, JDN 2 433 191.
///
/// Equivalently, day-pillar offset = (JDN + 49) mod 60.
pub const DAY_EPOCH_JDN: i64 = 2_433_191;
