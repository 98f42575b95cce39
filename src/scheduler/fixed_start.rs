//! Fixed-start selection.
//!
//! Testing begins on the delivery day and cannot be postponed, so each
//! release is a fixed interval and the problem is unweighted interval
//! scheduling.
//!
//! # Algorithm
//!
//! 1. Trim releases that end after the sprint.
//! 2. Sort by end testing day, ascending. The sort is stable, so releases
//!    with the same end day keep their input order.
//! 3. Scan once, accepting a release whenever it starts after the end of
//!    the last accepted one.
//!
//! Earliest-finish-first is optimal in count: after any prefix of choices
//! the greedy set ends no later than any other feasible set of the same
//! size, so it can always take at least as many releases afterwards.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the scan.
//!
//! # Reference
//! Kleinberg & Tardos (2005), "Algorithm Design", Ch. 4.1: Interval Scheduling

use tracing::debug;

use super::trim::partition_feasible;
use super::SchedulingPolicy;
use crate::models::{Day, Release, Schedule};

/// Earliest-finish-first selection with start pinned to delivery.
///
/// # Example
///
/// ```
/// use sprint_qa::models::Release;
/// use sprint_qa::scheduler::{FixedStart, SchedulingPolicy};
///
/// let releases = vec![Release::new(1, 3), Release::new(2, 1), Release::new(4, 2)];
/// let schedule = FixedStart.schedule(&releases, 10);
///
/// // (2,1) ends first, then (4,2) starts after it; (1,3) overlaps (2,1).
/// assert_eq!(schedule.len(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedStart;

impl SchedulingPolicy for FixedStart {
    fn name(&self) -> &'static str {
        "fixed-start"
    }

    fn schedule(&self, releases: &[Release], sprint_duration: Day) -> Schedule {
        let mut schedule = Schedule::new(self.name());

        let (mut feasible, rejected) = partition_feasible(releases.to_vec(), sprint_duration);
        schedule.rejected = rejected;

        // A single scan over the trimmed input; no scan when nothing survived.
        schedule.passes = usize::from(!feasible.is_empty());
        feasible.sort_by_key(Release::end_testing_day);

        let mut last_end: Option<Day> = None;
        for release in feasible {
            let free = last_end.map_or(true, |end| release.start_testing_day() > end);
            if free {
                last_end = Some(release.end_testing_day());
                schedule.push(release);
            }
        }

        debug!(
            policy = self.name(),
            input = releases.len(),
            rejected = schedule.rejected.len(),
            scheduled = schedule.len(),
            "schedule computed"
        );

        schedule
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_schedule;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    fn pairs(schedule: &Schedule) -> Vec<(Day, Day)> {
        schedule
            .iter()
            .map(|r| (r.delivery_day(), r.time_to_test()))
            .collect()
    }

    fn releases(input: &[(Day, Day)]) -> Vec<Release> {
        input.iter().map(|&(d, t)| Release::new(d, t)).collect()
    }

    /// Largest set of pairwise non-overlapping releases, by exhaustive search.
    fn brute_force_max(releases: &[Release], sprint_duration: Day) -> usize {
        let feasible: Vec<&Release> = releases
            .iter()
            .filter(|r| r.fits_within(sprint_duration))
            .collect();
        let n = feasible.len();
        let mut best = 0;
        for mask in 0u32..(1 << n) {
            let chosen: Vec<&Release> = (0..n)
                .filter(|i| mask & (1 << i) != 0)
                .map(|i| feasible[i])
                .collect();
            let independent = chosen
                .iter()
                .enumerate()
                .all(|(i, a)| chosen[i + 1..].iter().all(|b| !a.overlaps(b)));
            if independent {
                best = best.max(chosen.len());
            }
        }
        best
    }

    #[test]
    fn test_fixed_start_description_example() {
        let input = releases(&[
            (1, 1),
            (2, 1),
            (3, 1),
            (9, 1),
            (10, 4),
            (10, 2),
            (9, 5),
            (10, 3),
            (4, 5),
        ]);
        let schedule = FixedStart.schedule(&input, 10);

        assert_eq!(pairs(&schedule), vec![(1, 1), (2, 1), (3, 1), (4, 5), (9, 1)]);
        assert_eq!(schedule.rejected.len(), 4);
        assert_eq!(schedule.passes, 1);
        assert!(schedule.iter().all(|r| r.postponement() == 0));
    }

    #[test]
    fn test_fixed_start_nothing_fits() {
        let input = releases(&[(10, 4), (10, 2), (9, 5), (10, 3)]);
        let schedule = FixedStart.schedule(&input, 10);
        assert!(schedule.is_empty());
        assert_eq!(schedule.rejected.len(), 4);
        assert_eq!(schedule.passes, 0);
    }

    #[test]
    fn test_fixed_start_single_release() {
        let input = releases(&[(10, 2), (5, 1), (9, 5), (10, 3)]);
        let schedule = FixedStart.schedule(&input, 10);
        assert_eq!(pairs(&schedule), vec![(5, 1)]);
    }

    #[test]
    fn test_fixed_start_many_releases() {
        let input = releases(&[
            (1, 6),
            (2, 3),
            (4, 2),
            (4, 5),
            (6, 4),
            (7, 4),
            (9, 2),
            (5, 3),
        ]);
        let schedule = FixedStart.schedule(&input, 10);
        assert_eq!(pairs(&schedule), vec![(2, 3), (5, 3), (9, 2)]);
    }

    #[test]
    fn test_fixed_start_back_to_back() {
        let input: Vec<Release> = (1..=10).map(|d| Release::new(d, 1)).collect();
        let schedule = FixedStart.schedule(&input, 10);
        assert_eq!(schedule.entries, input);
    }

    #[test]
    fn test_fixed_start_tie_keeps_input_order() {
        // Both end on day 3; the first one in the input wins.
        let input = vec![
            Release::new(1, 3).with_id("A"),
            Release::new(3, 1).with_id("B"),
        ];
        let schedule = FixedStart.schedule(&input, 10);
        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule.entries[0].id(), "A");

        let swapped = vec![input[1].clone(), input[0].clone()];
        let schedule = FixedStart.schedule(&swapped, 10);
        assert_eq!(schedule.entries[0].id(), "B");
    }

    #[test]
    fn test_fixed_start_does_not_touch_input() {
        let input = releases(&[(3, 2), (1, 1), (2, 5)]);
        let before = input.clone();
        let _ = FixedStart.schedule(&input, 10);
        assert_eq!(input, before);
    }

    #[test]
    fn test_fixed_start_empty_input() {
        let schedule = FixedStart.schedule(&[], 10);
        assert!(schedule.is_empty());
        assert!(schedule.rejected.is_empty());
        assert_eq!(schedule.policy, "fixed-start");
    }

    #[test]
    fn test_fixed_start_matches_brute_force() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..200 {
            let n = rng.random_range(0..=10);
            let input: Vec<Release> = (0..n)
                .map(|_| Release::new(rng.random_range(1..=12), rng.random_range(1..=5)))
                .collect();

            let schedule = FixedStart.schedule(&input, 10);
            assert_eq!(schedule.len(), brute_force_max(&input, 10), "input: {input:?}");
            assert!(validate_schedule(&schedule, 10).is_ok());
        }
    }
}
