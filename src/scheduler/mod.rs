//! Greedy scheduling policies and KPI evaluation.
//!
//! Turns a list of deliveries into a conflict-free testing schedule that
//! ends within the sprint.
//!
//! # Policies
//!
//! | Policy | Start day | Strategy |
//! |--------|-----------|----------|
//! | [`FixedStart`] | Pinned to delivery | Earliest-finish-first selection |
//! | [`Postponable`] | May be deferred | Commit earliest end, push overlaps, re-trim |
//!
//! Both policies read the caller's releases through a slice and return a
//! fresh [`Schedule`]; input records are never modified.
//!
//! # KPI
//!
//! [`ScheduleKpi`] summarizes how well a schedule uses the sprint.
//!
//! # References
//!
//! - Kleinberg & Tardos (2005), "Algorithm Design", Ch. 4
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

mod fixed_start;
mod kpi;
mod postponable;
pub mod trim;

pub use fixed_start::FixedStart;
pub use kpi::ScheduleKpi;
pub use postponable::{PackingState, Postponable};
pub use trim::{partition_feasible, trim};

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

use crate::models::{Day, Release, Schedule};

/// A policy that picks and times releases for a sprint.
pub trait SchedulingPolicy: Send + Sync + Debug {
    /// Policy name (e.g., "fixed-start").
    fn name(&self) -> &'static str;

    /// Computes a schedule for the given releases.
    ///
    /// Releases that cannot finish by `sprint_duration` are reported in
    /// [`Schedule::rejected`], never as an error.
    fn schedule(&self, releases: &[Release], sprint_duration: Day) -> Schedule;
}

/// Selects a built-in policy by name.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Policy {
    /// Testing starts on the delivery day.
    FixedStart,
    /// Testing may be postponed to pack more releases.
    #[default]
    Postponable,
}

impl Policy {
    /// Returns the policy implementation.
    pub fn policy(self) -> &'static dyn SchedulingPolicy {
        match self {
            Policy::FixedStart => &FixedStart,
            Policy::Postponable => &Postponable,
        }
    }

    /// Runs the selected policy.
    pub fn schedule(self, releases: &[Release], sprint_duration: Day) -> Schedule {
        self.policy().schedule(releases, sprint_duration)
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.policy().name())
    }
}
