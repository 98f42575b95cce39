//! Release model.
//!
//! A release is one delivery handed to QA for testing. It arrives on a
//! delivery day, needs a fixed number of days to test, and is tested over
//! a contiguous window of days starting at its start testing day.
//!
//! # Day Model
//!
//! Days are 1-based indices into the sprint. A window is inclusive on both
//! ends: a release starting on day 4 with 5 days to test occupies days
//! 4..=8. Two releases may run back to back (`next.start == prev.end + 1`).

use serde::{Deserialize, Serialize};

/// A day within the sprint (1-based).
pub type Day = i64;

/// A release delivered for testing.
///
/// The end testing day is derived from the start and the time to test, so
/// `end_testing_day() == start_testing_day() + time_to_test() - 1` holds for
/// every value whose end is representable (see
/// [`Release::has_representable_end`]); longer windows end on `Day::MAX`.
/// Moving a release later produces a new value
/// (see [`Release::postponed_to`]); records are never shifted in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Release {
    id: String,
    delivery_day: Day,
    time_to_test: Day,
    start_testing_day: Day,
}

impl Release {
    /// Creates a release whose testing starts on its delivery day.
    pub fn new(delivery_day: Day, time_to_test: Day) -> Self {
        Self {
            id: String::new(),
            delivery_day,
            time_to_test,
            start_testing_day: delivery_day,
        }
    }

    /// Sets the traceability label.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets an explicit start testing day.
    pub fn with_start_testing_day(mut self, start_testing_day: Day) -> Self {
        self.start_testing_day = start_testing_day;
        self
    }

    /// Label assigned by the reader (empty if none).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Day the release arrives for testing.
    #[inline]
    pub fn delivery_day(&self) -> Day {
        self.delivery_day
    }

    /// Number of days testing consumes.
    #[inline]
    pub fn time_to_test(&self) -> Day {
        self.time_to_test
    }

    /// First day of testing.
    #[inline]
    pub fn start_testing_day(&self) -> Day {
        self.start_testing_day
    }

    /// Last day of testing.
    ///
    /// Saturates at `Day::MAX` instead of overflowing, so a window too long
    /// to represent never ends before any sprint does.
    #[inline]
    pub fn end_testing_day(&self) -> Day {
        self.start_testing_day
            .saturating_add(self.time_to_test.saturating_sub(1))
    }

    /// Whether the end testing day is representable without saturation.
    pub fn has_representable_end(&self) -> bool {
        self.start_testing_day
            .checked_add(self.time_to_test.saturating_sub(1))
            .is_some()
    }

    /// Returns a copy of this release whose testing starts on `day`.
    ///
    /// Testing only ever moves later: a `day` at or before the current
    /// start returns an unchanged copy.
    pub fn postponed_to(&self, day: Day) -> Self {
        Self {
            start_testing_day: self.start_testing_day.max(day),
            ..self.clone()
        }
    }

    /// Days between delivery and the start of testing.
    pub fn postponement(&self) -> Day {
        self.start_testing_day.saturating_sub(self.delivery_day)
    }

    /// Whether the two testing windows share at least one day.
    pub fn overlaps(&self, other: &Release) -> bool {
        self.start_testing_day <= other.end_testing_day()
            && other.start_testing_day <= self.end_testing_day()
    }

    /// Whether testing finishes on or before the last sprint day.
    pub fn fits_within(&self, sprint_duration: Day) -> bool {
        self.end_testing_day() <= sprint_duration
    }
}
