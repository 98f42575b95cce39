//! Trim filter.
//!
//! Drops releases whose testing window ends after the last sprint day.
//! Shared by every policy: applied once up front, and by postponable
//! packing again after each round of postponements.

use crate::models::{Day, Release};

/// Splits releases into those that finish in time and those that do not.
///
/// Relative order is preserved within both halves.
pub fn partition_feasible(
    releases: Vec<Release>,
    sprint_duration: Day,
) -> (Vec<Release>, Vec<Release>) {
    releases
        .into_iter()
        .partition(|r| r.fits_within(sprint_duration))
}

/// Removes every release that cannot finish within the sprint.
///
/// Idempotent: trimming an already trimmed list changes nothing.
pub fn trim(releases: &mut Vec<Release>, sprint_duration: Day) {
    releases.retain(|r| r.fits_within(sprint_duration));
}
