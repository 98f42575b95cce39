//! Schedule (solution) model.
//!
//! A schedule is the ordered list of releases chosen for testing in a
//! sprint, together with the releases that were dropped because they could
//! not finish in time.

use serde::{Deserialize, Serialize};

use super::{Day, Release};

/// A testing schedule produced by a scheduling policy.
///
/// `entries` are in commit order. For every adjacent pair the later entry
/// starts strictly after the earlier one ends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Releases chosen for testing, in commit order.
    pub entries: Vec<Release>,
    /// Releases dropped because they would end after the sprint.
    pub rejected: Vec<Release>,
    /// Name of the policy that produced this schedule.
    pub policy: String,
    /// Outer selection passes performed by the policy.
    ///
    /// Fixed-start scans the trimmed input once, so it reports 1 when
    /// anything survived trimming and 0 otherwise. Postponable packing
    /// reports one pass per committed release.
    pub passes: usize,
}

impl Schedule {
    /// Creates an empty schedule tagged with a policy name.
    pub fn new(policy: impl Into<String>) -> Self {
        Self {
            policy: policy.into(),
            ..Self::default()
        }
    }

    /// Appends a committed release.
    pub fn push(&mut self, release: Release) {
        self.entries.push(release);
    }

    /// Number of scheduled releases.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was scheduled.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over scheduled releases in commit order.
    pub fn iter(&self) -> std::slice::Iter<'_, Release> {
        self.entries.iter()
    }

    /// Last testing day used by the schedule, if any.
    pub fn last_end_day(&self) -> Option<Day> {
        self.entries.iter().map(Release::end_testing_day).max()
    }

    /// Total testing days across scheduled releases.
    pub fn busy_days(&self) -> Day {
        self.entries.iter().map(Release::time_to_test).sum()
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a Release;
    type IntoIter = std::slice::Iter<'a, Release>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
