//! Config management use case

use crate::domain::{AvailabilitySet, RangeResetPolicy};
use crate::error::{PlanError, Result};
use crate::infrastructure::{Config, FileSystemRepository, PlanRepository};
use crate::logging::LogLevel;
use std::str::FromStr;

const VALID_KEYS: &str = "availability, deduplicate_replication, range_reset, log_level, created";

/// Service for managing plan configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "availability" => Ok(config.availability.to_string()),
            "deduplicate_replication" => Ok(config.deduplicate_replication.to_string()),
            "range_reset" => Ok(range_reset_name(config.range_reset).to_string()),
            "log_level" => Ok(config.log_level.to_filter().to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(PlanError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}",
                key, VALID_KEYS
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "availability" => {
                config.availability = AvailabilitySet::from_str(value)?;
            }
            "deduplicate_replication" => {
                config.deduplicate_replication = value.parse().map_err(|_| {
                    PlanError::Config(format!(
                        "Invalid value for deduplicate_replication: '{}'. Use true or false",
                        value
                    ))
                })?;
            }
            "range_reset" => {
                config.range_reset = RangeResetPolicy::from_str(value).map_err(PlanError::Config)?;
            }
            "log_level" => {
                config.log_level = LogLevel::from_str(value).map_err(PlanError::Config)?;
            }
            "created" => {
                return Err(PlanError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(PlanError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: {}",
                    key, VALID_KEYS
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

pub fn range_reset_name(policy: RangeResetPolicy) -> &'static str {
    match policy {
        RangeResetPolicy::Discard => "discard",
        RangeResetPolicy::PreserveOverlap => "preserve-overlap",
    }
}
