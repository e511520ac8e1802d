//! Save draft / publish use cases

use crate::application::edit_day::load_active_plan;
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, PlanRepository, StoredPlan};
use chrono::Utc;
use tracing::info;

/// Service for changing the plan's publication state
pub struct PublishService {
    repository: FileSystemRepository,
}

impl PublishService {
    pub fn new(repository: FileSystemRepository) -> Self {
        PublishService { repository }
    }

    /// Store the working plan as a draft
    pub fn save_draft(&self) -> Result<StoredPlan> {
        let mut plan = load_active_plan(&self.repository)?;
        plan.mark_edited();
        self.repository.save_plan(&plan)?;
        Ok(plan)
    }

    /// Mark the working plan as published
    pub fn publish(&self) -> Result<StoredPlan> {
        let mut plan = load_active_plan(&self.repository)?;
        plan.publish(Utc::now());
        self.repository.save_plan(&plan)?;
        info!(
            training_days = plan.range.training_days(),
            "published plan"
        );
        Ok(plan)
    }
}
