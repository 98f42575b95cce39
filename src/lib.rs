//! Sprint release-testing scheduler.
//!
//! Given the releases delivered to QA during a sprint (delivery day and
//! time to test), computes which of them can be tested one at a time,
//! without overlapping windows, and finished before the sprint ends.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Release`, `Schedule`, `Day`
//! - **`scheduler`**: Trim filter, `FixedStart` selection, `Postponable`
//!   packing, `ScheduleKpi`
//! - **`validation`**: Input checks and schedule audits
//! - **`io`**: Release file reader, labels, schedule writers
//! - **`config`**: Layered runtime configuration
//! - **`error`**: Error type for I/O and configuration
//!
//! # Example
//!
//! ```
//! use sprint_qa::models::Release;
//! use sprint_qa::scheduler::Policy;
//!
//! let releases = vec![Release::new(1, 2), Release::new(2, 1), Release::new(9, 3)];
//!
//! let fixed = Policy::FixedStart.schedule(&releases, 10);
//! assert_eq!(fixed.len(), 1);
//!
//! let packed = Policy::Postponable.schedule(&releases, 10);
//! assert_eq!(packed.len(), 2);
//! assert_eq!(packed.rejected.len(), 1);
//! ```
//!
//! # References
//!
//! - Kleinberg & Tardos (2005), "Algorithm Design", Ch. 4
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod config;
pub mod error;
pub mod io;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{Error, Result};
