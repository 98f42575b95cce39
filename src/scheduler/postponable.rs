//! Postponable packing.
//!
//! Testing may start later than delivery. Whenever a release is committed,
//! every pending release that would overlap it is pushed to the day after
//! it ends, and anything pushed past the sprint is dropped.
//!
//! # Algorithm
//!
//! 1. Trim releases that end after the sprint.
//! 2. While releases are pending:
//!    a. Find the pending release with the earliest end testing day.
//!    b. Commit it.
//!    c. Push every pending release starting on or before the committed
//!       end day to `committed_end + 1`.
//!    d. Trim again.
//! 3. The committed releases, in commit order, form the schedule.
//!
//! Each pass commits exactly one release, so the loop runs at most `n`
//! times where `n` is the post-trim input size.
//!
//! # Tie-break
//! The pending list is always kept in input order: it is never sorted,
//! and removing the committed release, postponing and trimming all
//! preserve relative order. Among releases with equal end days the one
//! that came first in the input is committed.
//!
//! # Complexity
//! O(n²): up to `n` passes, each a linear scan of the pending list.

use tracing::{debug, trace};

use super::trim::partition_feasible;
use super::SchedulingPolicy;
use crate::models::{Day, Release, Schedule};

/// Intermediate state of a packing run.
///
/// Each [`step`](PackingState::step) consumes the state and returns the next
/// one, so earlier states are never modified. Every input release ends up in
/// exactly one of the three lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackingState {
    /// Releases committed so far, in commit order.
    pub committed: Vec<Release>,
    /// Releases still waiting, in input order, possibly with a postponed start.
    pub pending: Vec<Release>,
    /// Releases dropped because they no longer finish in time.
    pub rejected: Vec<Release>,
    sprint_duration: Day,
}

impl PackingState {
    /// Starts a packing run from copies of the given releases.
    pub fn new(releases: &[Release], sprint_duration: Day) -> Self {
        let (pending, rejected) = partition_feasible(releases.to_vec(), sprint_duration);
        Self {
            committed: Vec::new(),
            pending,
            rejected,
            sprint_duration,
        }
    }

    /// Whether every release has been committed or rejected.
    pub fn is_done(&self) -> bool {
        self.pending.is_empty()
    }

    /// Commits the earliest-ending pending release and reschedules the rest.
    ///
    /// A finished state is returned unchanged.
    pub fn step(self) -> Self {
        let Self {
            mut committed,
            mut pending,
            mut rejected,
            sprint_duration,
        } = self;

        if pending.is_empty() {
            return Self {
                committed,
                pending,
                rejected,
                sprint_duration,
            };
        }

        // `min_by_key` returns the first of equal minima, i.e. input order.
        let position = pending
            .iter()
            .enumerate()
            .min_by_key(|(_, r)| r.end_testing_day())
            .map_or(0, |(i, _)| i);
        let next = pending.remove(position);
        let committed_end = next.end_testing_day();
        let resume_day = committed_end.saturating_add(1);
        trace!(
            id = next.id(),
            start = next.start_testing_day(),
            end = committed_end,
            "release committed"
        );

        let shifted: Vec<Release> = pending
            .into_iter()
            .map(|r| {
                if r.start_testing_day() <= committed_end {
                    trace!(id = r.id(), to = resume_day, "release postponed");
                    r.postponed_to(resume_day)
                } else {
                    r
                }
            })
            .collect();

        let (pending, dropped) = partition_feasible(shifted, sprint_duration);
        for r in &dropped {
            trace!(id = r.id(), end = r.end_testing_day(), "release no longer fits");
        }
        rejected.extend(dropped);
        committed.push(next);

        Self {
            committed,
            pending,
            rejected,
            sprint_duration,
        }
    }
}

/// Greedy packing that may defer testing to fit more releases.
///
/// # Example
///
/// ```
/// use sprint_qa::models::Release;
/// use sprint_qa::scheduler::{Postponable, SchedulingPolicy};
///
/// let releases = vec![Release::new(1, 2), Release::new(2, 1)];
/// let schedule = Postponable.schedule(&releases, 10);
///
/// // The second release waits until day 3.
/// assert_eq!(schedule.len(), 2);
/// assert_eq!(schedule.entries[1].start_testing_day(), 3);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Postponable;

impl SchedulingPolicy for Postponable {
    fn name(&self) -> &'static str {
        "postponable"
    }

    fn schedule(&self, releases: &[Release], sprint_duration: Day) -> Schedule {
        let mut state = PackingState::new(releases, sprint_duration);
        let bound = state.pending.len();
        let mut passes = 0;

        while !state.is_done() {
            state = state.step();
            passes += 1;
        }
        debug_assert!(passes <= bound);

        debug!(
            policy = self.name(),
            input = releases.len(),
            rejected = state.rejected.len(),
            scheduled = state.committed.len(),
            passes,
            "schedule computed"
        );

        Schedule {
            entries: state.committed,
            rejected: state.rejected,
            policy: self.name().to_string(),
            passes,
        }
    }
}
