//! Initialize plan directory use case

use crate::domain::AvailabilitySet;
use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, PlanRepository};
use std::fs;
use std::path::Path;

/// Initialize a new plan directory at the specified path.
pub fn init(path: &Path, availability: AvailabilitySet) -> Result<Config> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;

    let config = Config::new(availability);
    repo.save_config(&config)?;

    Ok(config)
}
