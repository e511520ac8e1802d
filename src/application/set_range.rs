//! Set plan range use case

use crate::domain::{PlanRange, RangeResetPolicy};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, PlanRepository, StoredPlan};
use chrono::NaiveDate;
use tracing::info;

/// Service for (re)partitioning the plan's date range
pub struct SetRangeService {
    repository: FileSystemRepository,
}

impl SetRangeService {
    pub fn new(repository: FileSystemRepository) -> Self {
        SetRangeService { repository }
    }

    /// Partition `start..=end` and store it as the working plan.
    ///
    /// An existing plan is replaced following the configured reset policy
    /// unless `policy` overrides it. The result is always a draft.
    pub fn execute(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        policy: Option<RangeResetPolicy>,
    ) -> Result<StoredPlan> {
        let config = self.repository.load_config()?;
        let policy = policy.unwrap_or(config.range_reset);

        let range = match self.repository.load_plan()? {
            Some(existing) => existing.range.reset(start, end, policy)?,
            None => PlanRange::partition(start, end)?,
        };

        let plan = StoredPlan::draft(range);
        self.repository.save_plan(&plan)?;

        info!(%start, %end, days = plan.range.len(), ?policy, "set plan range");
        Ok(plan)
    }
}
