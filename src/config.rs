//! Runtime configuration.
//!
//! Values are layered, later sources winning:
//!
//! 1. Built-in defaults
//! 2. `sprint-qa.toml` in the working directory
//! 3. Environment variables prefixed `SPRINT_QA_` (e.g. `SPRINT_QA_SPRINT_DURATION=14`)
//! 4. Explicit overrides (command-line flags)

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::Day;
use crate::scheduler::Policy;

/// Configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "sprint-qa.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "SPRINT_QA_";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Release list to read.
    pub releases_file: PathBuf,
    /// Compact schedule output.
    pub output_file: PathBuf,
    /// Detailed schedule output.
    pub detailed_output_file: PathBuf,
    /// Days in the sprint.
    pub sprint_duration: Day,
    /// Scheduling policy.
    pub policy: Policy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            releases_file: PathBuf::from("releases.txt"),
            output_file: PathBuf::from("output.txt"),
            detailed_output_file: PathBuf::from("output-advanced.txt"),
            sprint_duration: 10,
            policy: Policy::default(),
        }
    }
}

/// Values that replace configured ones when set.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Overrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub releases_file: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_file: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detailed_output_file: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sprint_duration: Option<Day>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<Policy>,
}

impl Config {
    /// Figment with defaults, config file and environment merged.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    /// Loads configuration without overrides.
    pub fn load() -> Result<Self> {
        Self::load_with(&Overrides::default())
    }

    /// Loads configuration with explicit overrides applied last.
    pub fn load_with(overrides: &Overrides) -> Result<Self> {
        let config: Config = Self::figment()
            .merge(Serialized::defaults(overrides))
            .extract()
            .map_err(Box::new)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.sprint_duration < 1 {
            return Err(Error::InvalidConfig(format!(
                "sprint_duration must be at least 1, got {}",
                self.sprint_duration
            )));
        }
        Ok(())
    }
}
