//! Scheduling domain models.
//!
//! Provides the data types for describing a sprint's deliveries and the
//! testing schedule chosen for them.
//!
//! # Domain Mappings
//!
//! | sprint-qa | Interval scheduling | Everyday QA |
//! |-----------|---------------------|-------------|
//! | Release | Interval / job | Build handed to QA |
//! | Delivery day | Release date | Day the build lands |
//! | Time to test | Processing time | Test cycle length |
//! | Schedule | Selected interval set | QA plan for the sprint |

mod release;
mod schedule;

pub use release::{Day, Release};
pub use schedule::Schedule;
