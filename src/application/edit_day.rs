//! Day editing use cases: replicate, move, clear, apply model, add exercise
//!
//! Every edit loads the working plan, runs one engine operation and saves the
//! plan only when something changed. Skipped edits are returned to the caller
//! rather than raised.

use crate::domain::{
    self, EditOutcome, Exercise, PlanRange, ReplicationOptions, ReplicationRule,
};
use crate::error::{PlanError, Result};
use crate::infrastructure::{FileSystemRepository, PlanRepository, StoredPlan};
use chrono::NaiveDate;

/// Load the working plan or fail with `NoActivePlan`
pub fn load_active_plan(repository: &FileSystemRepository) -> Result<StoredPlan> {
    repository.load_plan()?.ok_or(PlanError::NoActivePlan)
}

/// Service for single-day and week-level edits of the working plan
pub struct EditDayService {
    repository: FileSystemRepository,
}

impl EditDayService {
    pub fn new(repository: FileSystemRepository) -> Self {
        EditDayService { repository }
    }

    fn edit<F>(&self, op: F) -> Result<EditOutcome>
    where
        F: FnOnce(&mut PlanRange) -> EditOutcome,
    {
        let mut plan = load_active_plan(&self.repository)?;
        let outcome = op(&mut plan.range);

        if outcome.is_applied() {
            plan.mark_edited();
            self.repository.save_plan(&plan)?;
        }
        Ok(outcome)
    }

    /// Append `source`'s exercises to the days matched by `rule`.
    /// `deduplicate` overrides the configured setting when given.
    pub fn replicate(
        &self,
        source: NaiveDate,
        rule: &ReplicationRule,
        deduplicate: Option<bool>,
    ) -> Result<EditOutcome> {
        let config = self.repository.load_config()?;
        let options = match deduplicate {
            Some(deduplicate_targets) => ReplicationOptions {
                deduplicate_targets,
            },
            None => config.replication_options(),
        };
        self.edit(|range| domain::replicate(range, source, rule, options))
    }

    pub fn replicate_week(&self, week_start: NaiveDate, to_end_of_range: bool) -> Result<EditOutcome> {
        self.edit(|range| domain::replicate_week(range, week_start, to_end_of_range))
    }

    pub fn move_day(&self, source: NaiveDate, target: NaiveDate) -> Result<EditOutcome> {
        self.edit(|range| domain::move_day(range, source, target))
    }

    pub fn clear_day(&self, date: NaiveDate) -> Result<EditOutcome> {
        self.edit(|range| range.clear_day(date))
    }

    /// Overwrite a day with the named flat model
    pub fn apply_model(&self, date: NaiveDate, model_name: &str) -> Result<EditOutcome> {
        let model = self.repository.load_model(model_name)?;
        self.edit(|range| domain::apply_model(range, date, &model))
    }

    pub fn add_exercise(&self, date: NaiveDate, exercise: Exercise) -> Result<EditOutcome> {
        self.edit(|range| range.push_exercise(date, exercise))
    }
}
