//! Show plan use case

use crate::application::edit_day::load_active_plan;
use crate::domain::TrainingDaySlot;
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, PlanStatus};
use chrono::NaiveDate;

/// Snapshot of the working plan for display
#[derive(Debug, Clone)]
pub struct PlanView {
    pub status: PlanStatus,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: Vec<TrainingDaySlot>,
}

/// Days of the working plan, optionally limited to `from..=to`.
pub fn show_plan(
    repository: &FileSystemRepository,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Result<PlanView> {
    let plan = load_active_plan(repository)?;
    let days = plan.range.slots_between(from, to).cloned().collect();

    Ok(PlanView {
        status: plan.status,
        start_date: plan.range.start_date(),
        end_date: plan.range.end_date(),
        days,
    })
}
