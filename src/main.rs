use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use sprint_qa::config::{Config, Overrides};
use sprint_qa::io::{read_releases, render, write_schedule, OutputFormat};
use sprint_qa::models::Day;
use sprint_qa::scheduler::{Policy, ScheduleKpi};

/// Pick which delivered releases QA can test, one at a time, within the sprint
#[derive(Parser, Debug)]
#[command(name = "sprint-qa")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Release list, one "<deliveryDay> <timeToTest>" per line
    #[arg(long)]
    releases: Option<PathBuf>,
    /// Compact schedule output ("<start> <end>" per line)
    #[arg(long)]
    output: Option<PathBuf>,
    /// Detailed schedule output (all fields, with labels)
    #[arg(long)]
    detailed_output: Option<PathBuf>,
    /// Days in the sprint
    #[arg(long)]
    sprint_duration: Option<Day>,
    /// Scheduling policy
    #[arg(long, value_enum)]
    policy: Option<Policy>,
    /// Also print the schedule as JSON to stdout
    #[arg(long)]
    json: bool,
    /// Log schedule KPIs
    #[arg(long)]
    summary: bool,
    /// Warn when fewer releases than this are scheduled
    #[arg(long)]
    min_scheduled: Option<usize>,
    /// Warn when busy days cover less than this share of the sprint (0-1)
    #[arg(long)]
    min_utilization: Option<f64>,
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            releases_file: self.releases.clone(),
            output_file: self.output.clone(),
            detailed_output_file: self.detailed_output.clone(),
            sprint_duration: self.sprint_duration,
            policy: self.policy,
        }
    }

    /// Thresholds to check the KPI against, if any were requested.
    fn thresholds(&self) -> Option<(usize, f64)> {
        if self.min_scheduled.is_none() && self.min_utilization.is_none() {
            return None;
        }
        Some((
            self.min_scheduled.unwrap_or(0),
            self.min_utilization.unwrap_or(0.0),
        ))
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "sprint_qa=debug,info" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load_with(&cli.overrides()).context("failed to load configuration")?;
    debug!(?config, "configuration loaded");

    let releases = read_releases(&config.releases_file)
        .with_context(|| format!("failed to read {}", config.releases_file.display()))?;

    let schedule = config.policy.schedule(&releases, config.sprint_duration);
    info!(
        policy = %config.policy,
        sprint_duration = config.sprint_duration,
        releases = releases.len(),
        scheduled = schedule.len(),
        rejected = schedule.rejected.len(),
        "schedule ready"
    );

    write_schedule(&config.output_file, &schedule, OutputFormat::Compact)?;
    write_schedule(&config.detailed_output_file, &schedule, OutputFormat::Detailed)?;

    let thresholds = cli.thresholds();
    if cli.summary || thresholds.is_some() {
        let kpi = ScheduleKpi::calculate(&schedule, config.sprint_duration);
        if cli.summary {
            info!(
                busy_days = kpi.busy_days,
                idle_days = kpi.idle_days,
                utilization = kpi.utilization,
                total_postponement_days = kpi.total_postponement_days,
                max_postponement_days = kpi.max_postponement_days,
                "schedule summary"
            );
        }
        if let Some((min_scheduled, min_utilization)) = thresholds {
            if !kpi.meets_thresholds(min_scheduled, min_utilization) {
                warn!(
                    scheduled = kpi.scheduled,
                    utilization = kpi.utilization,
                    min_scheduled,
                    min_utilization,
                    "schedule below thresholds"
                );
            }
        }
    }

    if cli.json {
        print!("{}", render(&schedule, OutputFormat::Json)?);
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_thresholds_by_default() {
        let cli = Cli::try_parse_from(["sprint-qa", "--summary"]).unwrap();
        assert!(cli.summary);
        assert_eq!(cli.thresholds(), None);
    }

    #[test]
    fn test_thresholds_fill_missing_bound() {
        let cli = Cli::try_parse_from(["sprint-qa", "--min-scheduled", "3"]).unwrap();
        assert_eq!(cli.thresholds(), Some((3, 0.0)));

        let cli = Cli::try_parse_from(["sprint-qa", "--min-utilization", "0.5"]).unwrap();
        assert_eq!(cli.thresholds(), Some((0, 0.5)));
    }

    #[test]
    fn test_overrides_from_flags() {
        let cli = Cli::try_parse_from([
            "sprint-qa",
            "--sprint-duration",
            "14",
            "--policy",
            "fixed-start",
        ])
        .unwrap();
        let overrides = cli.overrides();
        assert_eq!(overrides.sprint_duration, Some(14));
        assert_eq!(overrides.policy, Some(Policy::FixedStart));
        assert!(overrides.releases_file.is_none());
    }
}
