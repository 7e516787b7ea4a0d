//! CLI configuration

use crate::error::{CliError, CliResult};
use crate::output::OutputFormat;
use drills_core::{Member, Person};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DrillsConfig {
    /// Default output format
    pub output: Option<OutputFormat>,

    /// Sample record for `keys --record person` and `get --record person`
    #[serde(default)]
    pub person: Person,

    /// Sample record for `keys --record member` and `get --record member`
    #[serde(default)]
    pub member: Member,
}

impl DrillsConfig {
    /// Load configuration from file
    pub fn load(path: Option<&str>) -> CliResult<Self> {
        let config_path = match path {
            Some(p) => PathBuf::from(p),
            None => Self::default_config_path()?,
        };

        if config_path.exists() {
            debug!(path = %config_path.display(), "Loading config");
            let contents = std::fs::read_to_string(&config_path)?;
            Self::parse(&contents)
        } else {
            Ok(DrillsConfig::default())
        }
    }

    /// Parse configuration from TOML text
    pub fn parse(contents: &str) -> CliResult<Self> {
        toml::from_str(contents).map_err(|e| CliError::Config(e.to_string()))
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> CliResult<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::Config(e.to_string()))
    }

    /// Get the default configuration file path
    fn default_config_path() -> CliResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CliError::Config("Cannot find config directory".into()))?;
        Ok(config_dir.join("drills").join("config.toml"))
    }
}
