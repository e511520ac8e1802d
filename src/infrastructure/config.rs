//! Configuration management

use crate::domain::{AvailabilitySet, RangeResetPolicy, ReplicationOptions};
use crate::error::{PlanError, Result};
use crate::logging::LogLevel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Directory holding config, plan and catalog
pub const PLAN_DIR: &str = ".trainplan";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Weekdays the client trains on
    #[serde(default)]
    pub availability: AvailabilitySet,
    /// Append at most one copy per replicated day
    #[serde(default)]
    pub deduplicate_replication: bool,
    #[serde(default)]
    pub range_reset: RangeResetPolicy,
    #[serde(default)]
    pub log_level: LogLevel,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default values
    pub fn new(availability: AvailabilitySet) -> Self {
        Config {
            availability,
            deduplicate_replication: false,
            range_reset: RangeResetPolicy::default(),
            log_level: LogLevel::default(),
            created: Utc::now(),
        }
    }

    /// Load config from .trainplan/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(PLAN_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PlanError::NotPlanDirectory(path.to_path_buf())
            } else {
                PlanError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| PlanError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .trainplan/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let plan_dir = path.join(PLAN_DIR);
        let config_path = plan_dir.join("config.toml");

        if !plan_dir.exists() {
            fs::create_dir(&plan_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| PlanError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Availability, with TRAINPLAN_AVAILABILITY taking precedence
    pub fn get_availability(&self) -> Result<AvailabilitySet> {
        match std::env::var("TRAINPLAN_AVAILABILITY") {
            Ok(value) if !value.trim().is_empty() => value.parse(),
            _ => Ok(self.availability.clone()),
        }
    }

    /// Log level, with TRAINPLAN_LOG taking precedence
    pub fn get_log_level(&self) -> LogLevel {
        std::env::var("TRAINPLAN_LOG")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(self.log_level)
    }

    pub fn replication_options(&self) -> ReplicationOptions {
        ReplicationOptions {
            deduplicate_targets: self.deduplicate_replication,
        }
    }
}
