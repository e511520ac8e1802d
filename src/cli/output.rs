//! Output formatting utilities

use crate::application::{AssignmentReport, PlanView};
use crate::domain::{EditOutcome, FlatExerciseModel, SeriesTemplate, SkipReason};
use crate::infrastructure::PlanStatus;

fn status_name(status: PlanStatus) -> &'static str {
    match status {
        PlanStatus::Draft => "draft",
        PlanStatus::Published => "published",
    }
}

/// Format the plan, one block per day
pub fn format_plan(view: &PlanView) -> String {
    let mut output = format!(
        "Plan {} to {} ({})\n\n",
        view.start_date.format("%Y-%m-%d"),
        view.end_date.format("%Y-%m-%d"),
        status_name(view.status)
    );

    if view.days.is_empty() {
        output.push_str("No days in selection\n");
        return output;
    }

    for day in &view.days {
        let label = day.date.format("%a %Y-%m-%d");
        if day.exercises.is_empty() {
            output.push_str(&format!("{}  Rest\n", label));
            continue;
        }
        output.push_str(&format!("{}\n", label));
        for exercise in &day.exercises {
            output.push_str(&format!("    {}\n", exercise));
            if let Some(notes) = &exercise.notes {
                output.push_str(&format!("      {}\n", notes));
            }
        }
    }
    output
}

/// Format the resolved weekly pattern
pub fn format_assignment(report: &AssignmentReport) -> String {
    let mut output = String::new();
    for (date, entry) in &report.days {
        output.push_str(&format!("{}  {}\n", date.format("%a %Y-%m-%d"), entry));
    }

    match report.stamped {
        Some(n) => output.push_str(&format!(
            "\nAssigned series '{}' to {} training day(s)\n",
            report.series_id, n
        )),
        None => output.push_str("\nPreview only; plan unchanged\n"),
    }
    output
}

/// Describe an edit result for the user
pub fn format_outcome(action: &str, outcome: &EditOutcome) -> String {
    match outcome {
        EditOutcome::Applied { days_changed } => {
            format!("{}: {} day(s) changed", action, days_changed)
        }
        EditOutcome::Skipped(reason) => {
            let why = match reason {
                SkipReason::DateNotInRange(date) => {
                    format!("{} is outside the plan range", date.format("%Y-%m-%d"))
                }
                SkipReason::SameDay => "source and target are the same day".to_string(),
                SkipReason::NothingToReplicate => "no days matched".to_string(),
                SkipReason::IncompleteWeek => {
                    "fewer than seven days remain from the week start".to_string()
                }
                SkipReason::NothingToMove => "both days are empty".to_string(),
            };
            format!("{}: nothing changed ({})", action, why)
        }
    }
}

/// Format the series catalog
pub fn format_series_list(series: &[SeriesTemplate]) -> String {
    if series.is_empty() {
        return "No series found".to_string();
    }

    let mut output = String::new();
    for s in series {
        let names: Vec<&str> = s.trainings.iter().map(|t| t.name.as_str()).collect();
        output.push_str(&format!("{}  [{}]\n", s.id, names.join(", ")));
    }
    output
}

/// Format the model catalog
pub fn format_model_list(models: &[FlatExerciseModel]) -> String {
    if models.is_empty() {
        return "No models found".to_string();
    }

    let mut output = String::new();
    for m in models {
        if m.description.is_empty() {
            output.push_str(&format!("{}  ({} exercises)\n", m.name, m.exercises.len()));
        } else {
            output.push_str(&format!(
                "{}  ({} exercises) - {}\n",
                m.name,
                m.exercises.len(),
                m.description
            ));
        }
    }
    output
}
