//! Series auto-assignment use case
//!
//! Resolves the weekly pattern for the working plan and, unless previewing,
//! stamps the series' exercises into every day.

use crate::application::edit_day::load_active_plan;
use crate::domain::{apply_assignment, assign_weekly_pattern, DayAssignment};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, PlanRepository};
use chrono::NaiveDate;
use tracing::info;

/// What the assignment produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentReport {
    pub series_id: String,
    /// One row per day of the range
    pub days: Vec<(NaiveDate, DayAssignment)>,
    /// Days that received exercises; `None` for a preview
    pub stamped: Option<usize>,
}

/// Service for auto-assigning a series template
pub struct AssignSeriesService {
    repository: FileSystemRepository,
}

impl AssignSeriesService {
    pub fn new(repository: FileSystemRepository) -> Self {
        AssignSeriesService { repository }
    }

    pub fn execute(&self, series_id: &str, preview: bool) -> Result<AssignmentReport> {
        let config = self.repository.load_config()?;
        let availability = config.get_availability()?;
        let series = self.repository.load_series(series_id)?;
        let mut plan = load_active_plan(&self.repository)?;

        let table = assign_weekly_pattern(&plan.range, &series, &availability);
        let days = plan
            .range
            .slots()
            .iter()
            .zip(table.entries())
            .map(|(slot, entry)| (slot.date, entry.clone()))
            .collect();

        let stamped = if preview {
            None
        } else {
            let stamped = apply_assignment(&mut plan.range, &table, &series);
            plan.mark_edited();
            self.repository.save_plan(&plan)?;
            info!(series = %series.id, stamped, "assigned series");
            Some(stamped)
        };

        Ok(AssignmentReport {
            series_id: series.id,
            days,
            stamped,
        })
    }
}
