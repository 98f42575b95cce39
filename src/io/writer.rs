//! Schedule writer.
//!
//! Every format starts with the number of scheduled releases. Text formats
//! follow with one line per release in schedule order.
//!
//! | Format | Line |
//! |--------|------|
//! | Compact | `<start> <end>` |
//! | Detailed | `Release <id> {startTestingDay=<s>, endTestingDay=<e>, deliveryDay=<d>, timeToTest=<t>}` |
//! | Json | `{ "count": n, "releases": [...] }` |

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{Day, Release, Schedule};

/// Output layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Start and end testing day only.
    Compact,
    /// Every field, including the label.
    Detailed,
    /// Pretty-printed JSON document.
    Json,
}

#[derive(Serialize)]
struct RenderedRelease<'a> {
    id: &'a str,
    delivery_day: Day,
    time_to_test: Day,
    start_testing_day: Day,
    end_testing_day: Day,
}

impl<'a> From<&'a Release> for RenderedRelease<'a> {
    fn from(r: &'a Release) -> Self {
        Self {
            id: r.id(),
            delivery_day: r.delivery_day(),
            time_to_test: r.time_to_test(),
            start_testing_day: r.start_testing_day(),
            end_testing_day: r.end_testing_day(),
        }
    }
}

#[derive(Serialize)]
struct RenderedSchedule<'a> {
    count: usize,
    releases: Vec<RenderedRelease<'a>>,
}

/// Renders one release as a single line.
pub fn render_release(release: &Release, detailed: bool) -> String {
    if detailed {
        format!(
            "Release {} {{startTestingDay={}, endTestingDay={}, deliveryDay={}, timeToTest={}}}",
            release.id(),
            release.start_testing_day(),
            release.end_testing_day(),
            release.delivery_day(),
            release.time_to_test()
        )
    } else {
        format!(
            "{} {}",
            release.start_testing_day(),
            release.end_testing_day()
        )
    }
}

/// Renders a schedule in the given format.
pub fn render(schedule: &Schedule, format: OutputFormat) -> Result<String> {
    let detailed = match format {
        OutputFormat::Compact => false,
        OutputFormat::Detailed => true,
        OutputFormat::Json => {
            let doc = RenderedSchedule {
                count: schedule.len(),
                releases: schedule.iter().map(RenderedRelease::from).collect(),
            };
            let mut out = serde_json::to_string_pretty(&doc)?;
            out.push('\n');
            return Ok(out);
        }
    };

    let mut lines = vec![schedule.len().to_string()];
    lines.extend(schedule.iter().map(|r| render_release(r, detailed)));
    let mut out = lines.join("\n");
    out.push('\n');
    Ok(out)
}

/// Writes a rendered schedule to a file, replacing its contents.
pub fn write_schedule(
    path: impl AsRef<Path>,
    schedule: &Schedule,
    format: OutputFormat,
) -> Result<()> {
    let path = path.as_ref();
    let text = render(schedule, format)?;
    fs::write(path, text).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), ?format, count = schedule.len(), "schedule written");
    Ok(())
}
