//! Weekly series assignment
//!
//! The first week of the range is resolved against the availability set; every
//! later day reuses the entry seven positions earlier. Because the period is
//! exactly one week, the tiled entries stay aligned with real weekdays.

use crate::domain::availability::AvailabilitySet;
use crate::domain::exercise::SeriesTemplate;
use crate::domain::plan::PlanRange;
use chrono::Datelike;
use std::fmt;
use tracing::debug;

const WEEK: usize = 7;

/// Resolved content for one day of the range
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayAssignment {
    Training(String),
    Rest,
}

impl fmt::Display for DayAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayAssignment::Training(name) => write!(f, "{}", name),
            DayAssignment::Rest => write!(f, "Rest"),
        }
    }
}

/// One assignment per slot of the plan range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayAssignmentTable {
    entries: Vec<DayAssignment>,
}

impl DayAssignmentTable {
    pub fn entries(&self) -> &[DayAssignment] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&DayAssignment> {
        self.entries.get(index)
    }
}

/// Build the assignment table for `plan`.
///
/// Walks the first seven days; an available weekday takes the next unused
/// training while any remain, everything else rests. The training cursor
/// only moves forward, so once the series is exhausted the remaining
/// available days of the week rest too.
pub fn assign_weekly_pattern(
    plan: &PlanRange,
    series: &SeriesTemplate,
    availability: &AvailabilitySet,
) -> DayAssignmentTable {
    let mut trainings = series.trainings.iter();
    let mut week = Vec::with_capacity(WEEK);

    for slot in plan.slots().iter().take(WEEK) {
        let entry = if availability.contains(slot.date.weekday()) {
            trainings
                .next()
                .map(|t| DayAssignment::Training(t.name.clone()))
                .unwrap_or(DayAssignment::Rest)
        } else {
            DayAssignment::Rest
        };
        week.push(entry);
    }

    let entries = (0..plan.len())
        .map(|i| week[i % WEEK].clone())
        .collect::<Vec<_>>();

    debug!(
        series = %series.id,
        assigned = week.iter().filter(|e| **e != DayAssignment::Rest).count(),
        days = entries.len(),
        "built weekly assignment table"
    );

    DayAssignmentTable { entries }
}

/// Stamp the table into the plan.
///
/// Rest days are emptied. Training days receive their own copy of the named
/// training's exercises; a name the series no longer contains is treated as
/// rest. Returns the number of days that received exercises.
pub fn apply_assignment(
    plan: &mut PlanRange,
    table: &DayAssignmentTable,
    series: &SeriesTemplate,
) -> usize {
    let mut stamped = 0usize;

    for (slot, entry) in plan.slots.iter_mut().zip(table.entries.iter()) {
        slot.exercises = match entry {
            DayAssignment::Rest => Vec::new(),
            DayAssignment::Training(name) => match series.training(name) {
                Some(training) => {
                    stamped += 1;
                    training.exercises.clone()
                }
                None => {
                    debug!(training = %name, date = %slot.date, "training not in series, resting");
                    Vec::new()
                }
            },
        };
    }

    debug!(series = %series.id, stamped, "applied assignment table");
    stamped
}
