//! Schedule quality metrics (KPIs).
//!
//! Computes sprint-level indicators from a completed schedule.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Scheduled | Releases in the schedule |
//! | Rejected | Releases dropped for not finishing in time |
//! | Busy days | Sum of time to test over scheduled releases |
//! | Idle days | Sprint days with no testing |
//! | Utilization | Busy days / sprint duration |
//! | Postponement | Days between delivery and start of testing |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use serde::Serialize;

use crate::models::{Day, Schedule};

/// Schedule performance indicators.
///
/// All time values are in days.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleKpi {
    /// Number of releases scheduled.
    pub scheduled: usize,
    /// Number of releases rejected.
    pub rejected: usize,
    /// Days spent testing.
    pub busy_days: Day,
    /// Sprint days with no testing.
    pub idle_days: Day,
    /// Fraction of the sprint spent testing (0.0..1.0).
    pub utilization: f64,
    /// Sum of postponements across scheduled releases.
    pub total_postponement_days: Day,
    /// Largest postponement of any scheduled release.
    pub max_postponement_days: Day,
    /// Last testing day used, if anything was scheduled.
    pub last_end_day: Option<Day>,
}

impl ScheduleKpi {
    /// Computes KPIs for a schedule over a sprint.
    pub fn calculate(schedule: &Schedule, sprint_duration: Day) -> Self {
        let busy_days = schedule.busy_days();
        let total_postponement_days = schedule.iter().map(|r| r.postponement()).sum();
        let max_postponement_days = schedule
            .iter()
            .map(|r| r.postponement())
            .max()
            .unwrap_or(0);

        let utilization = if sprint_duration <= 0 {
            0.0
        } else {
            busy_days as f64 / sprint_duration as f64
        };

        Self {
            scheduled: schedule.len(),
            rejected: schedule.rejected.len(),
            busy_days,
            idle_days: (sprint_duration - busy_days).max(0),
            utilization,
            total_postponement_days,
            max_postponement_days,
            last_end_day: schedule.last_end_day(),
        }
    }

    /// Whether the schedule meets the given quality thresholds.
    pub fn meets_thresholds(&self, min_scheduled: usize, min_utilization: f64) -> bool {
        self.scheduled >= min_scheduled && self.utilization >= min_utilization
    }
}
