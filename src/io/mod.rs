//! Text input and output for release lists and schedules.
//!
//! Thin wrappers around the scheduling core: the reader turns a release
//! file into labelled [`Release`](crate::models::Release) values, the
//! writer renders a [`Schedule`](crate::models::Schedule).

mod label;
mod reader;
mod writer;

pub use label::{label, labels};
pub use reader::{parse_releases, read_releases};
pub use writer::{render, render_release, write_schedule, OutputFormat};
