//! Input validation and schedule audits.
//!
//! The scheduling policies assume well-formed input. This module checks
//! that assumption before scheduling and audits the result afterwards.
//!
//! Input checks:
//! - Delivery day and time to test are at least 1
//! - The end testing day fits in a `Day`
//! - Labels are unique
//!
//! Schedule audits:
//! - Adjacent entries do not overlap
//! - Every entry ends within the sprint
//! - No entry starts testing before it is delivered

use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

use crate::models::{Day, Release, Schedule};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ValidationErrorKind {
    /// Delivery day below 1.
    InvalidDeliveryDay,
    /// Time to test below 1.
    InvalidTimeToTest,
    /// Testing would end past the largest representable day.
    DayOutOfRange,
    /// Two releases share the same label.
    DuplicateId,
    /// Two adjacent schedule entries share a testing day.
    Overlap,
    /// An entry ends after the last sprint day.
    DeadlineMiss,
    /// An entry starts testing before its delivery day.
    StartBeforeDelivery,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

fn label(release: &Release, position: usize) -> String {
    if release.id().is_empty() {
        format!("#{}", position + 1)
    } else {
        format!("'{}'", release.id())
    }
}

/// Validates releases before scheduling.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
pub fn validate_releases(releases: &[Release]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for (i, r) in releases.iter().enumerate() {
        if r.delivery_day() < 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidDeliveryDay,
                format!(
                    "Release {} has delivery day {}, expected at least 1",
                    label(r, i),
                    r.delivery_day()
                ),
            ));
        }

        if r.time_to_test() < 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidTimeToTest,
                format!(
                    "Release {} has time to test {}, expected at least 1",
                    label(r, i),
                    r.time_to_test()
                ),
            ));
        }

        if !r.has_representable_end() {
            errors.push(ValidationError::new(
                ValidationErrorKind::DayOutOfRange,
                format!(
                    "Release {} delivered on day {} with time to test {} ends past day {}",
                    label(r, i),
                    r.delivery_day(),
                    r.time_to_test(),
                    Day::MAX
                ),
            ));
        }

        if !r.id().is_empty() && !ids.insert(r.id()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate release ID: {}", r.id()),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Audits a schedule against the sprint.
pub fn validate_schedule(schedule: &Schedule, sprint_duration: Day) -> ValidationResult {
    let mut errors = Vec::new();

    for (i, r) in schedule.iter().enumerate() {
        if !r.fits_within(sprint_duration) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DeadlineMiss,
                format!(
                    "Release {} ends on day {}, after sprint day {}",
                    label(r, i),
                    r.end_testing_day(),
                    sprint_duration
                ),
            ));
        }

        if r.start_testing_day() < r.delivery_day() {
            errors.push(ValidationError::new(
                ValidationErrorKind::StartBeforeDelivery,
                format!(
                    "Release {} starts on day {} but is delivered on day {}",
                    label(r, i),
                    r.start_testing_day(),
                    r.delivery_day()
                ),
            ));
        }
    }

    for (i, pair) in schedule.entries.windows(2).enumerate() {
        let (prev, next) = (&pair[0], &pair[1]);
        if next.start_testing_day() <= prev.end_testing_day() {
            errors.push(ValidationError::new(
                ValidationErrorKind::Overlap,
                format!(
                    "Release {} starts on day {}, before release {} ends on day {}",
                    label(next, i + 1),
                    next.start_testing_day(),
                    label(prev, i),
                    prev.end_testing_day()
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
