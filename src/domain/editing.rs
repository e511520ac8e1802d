//! Single-day edits: moving a day and applying a flat model

use crate::domain::exercise::FlatExerciseModel;
use crate::domain::plan::{EditOutcome, PlanRange, SkipReason};
use chrono::NaiveDate;
use tracing::debug;

/// Move `source`'s exercises onto `target`, leaving `source` empty.
///
/// Whatever `target` held before is dropped, not merged.
pub fn move_day(plan: &mut PlanRange, source: NaiveDate, target: NaiveDate) -> EditOutcome {
    if source == target {
        return EditOutcome::Skipped(SkipReason::SameDay);
    }

    let Some(from) = plan.index_of(source) else {
        debug!(%source, "move skipped: source not in range");
        return EditOutcome::Skipped(SkipReason::DateNotInRange(source));
    };
    let Some(to) = plan.index_of(target) else {
        debug!(%target, "move skipped: target not in range");
        return EditOutcome::Skipped(SkipReason::DateNotInRange(target));
    };

    if plan.slots[from].is_rest() && plan.slots[to].is_rest() {
        debug!(%source, %target, "move skipped: both days are empty");
        return EditOutcome::Skipped(SkipReason::NothingToMove);
    }

    let moved = std::mem::take(&mut plan.slots[from].exercises);
    let dropped = std::mem::replace(&mut plan.slots[to].exercises, moved);

    debug!(%source, %target, dropped = dropped.len(), "moved day");
    EditOutcome::Applied { days_changed: 2 }
}

/// Replace `target`'s exercises with a copy of the model's list
pub fn apply_model(
    plan: &mut PlanRange,
    target: NaiveDate,
    model: &FlatExerciseModel,
) -> EditOutcome {
    let Some(idx) = plan.index_of(target) else {
        debug!(%target, model = %model.name, "model skipped: date not in range");
        return EditOutcome::Skipped(SkipReason::DateNotInRange(target));
    };

    plan.slots[idx].exercises = model.exercises.clone();
    debug!(%target, model = %model.name, "applied model");
    EditOutcome::Applied { days_changed: 1 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::exercise::Exercise;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    fn plan() -> PlanRange {
        PlanRange::partition(date(1), date(14)).unwrap()
    }

    fn model() -> FlatExerciseModel {
        FlatExerciseModel {
            name: "Full body".to_string(),
            description: "One-off session".to_string(),
            exercises: vec![
                Exercise::new("Goblet squat", 3, 12, 60),
                Exercise::new("Push-up", 3, 0, 60).with_notes("to failure"),
            ],
        }
    }

    #[test]
    fn test_move_transfers_and_discards_target() {
        let mut plan = plan();
        plan.push_exercise(date(2), Exercise::new("A1", 3, 8, 90));
        plan.push_exercise(date(2), Exercise::new("A2", 3, 8, 90));
        for name in ["B1", "B2", "B3"] {
            plan.push_exercise(date(5), Exercise::new(name, 3, 8, 90));
        }

        let outcome = move_day(&mut plan, date(2), date(5));

        assert_eq!(outcome, EditOutcome::Applied { days_changed: 2 });
        let moved: Vec<_> = plan
            .exercises(date(5))
            .unwrap()
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(moved, vec!["A1", "A2"]);
        assert!(plan.slot(date(2)).unwrap().is_rest());
    }

    #[test]
    fn test_move_same_day_is_noop() {
        let mut plan = plan();
        plan.push_exercise(date(2), Exercise::new("A1", 3, 8, 90));

        let outcome = move_day(&mut plan, date(2), date(2));
        assert_eq!(outcome, EditOutcome::Skipped(SkipReason::SameDay));
        assert_eq!(plan.exercises(date(2)).unwrap().len(), 1);
    }

    #[test]
    fn test_move_between_empty_days_is_noop() {
        let mut plan = plan();
        let before = plan.clone();

        let outcome = move_day(&mut plan, date(2), date(5));
        assert_eq!(outcome, EditOutcome::Skipped(SkipReason::NothingToMove));
        assert_eq!(plan, before);
    }

    #[test]
    fn test_move_empty_source_clears_target() {
        let mut plan = plan();
        plan.push_exercise(date(5), Exercise::new("B1", 3, 8, 90));

        let outcome = move_day(&mut plan, date(2), date(5));
        assert_eq!(outcome, EditOutcome::Applied { days_changed: 2 });
        assert!(plan.slot(date(5)).unwrap().is_rest());
    }

    #[test]
    fn test_move_outside_range_is_noop() {
        let mut plan = plan();
        plan.push_exercise(date(2), Exercise::new("A1", 3, 8, 90));
        let before = plan.clone();

        let outside = date(20);
        assert_eq!(
            move_day(&mut plan, date(2), outside),
            EditOutcome::Skipped(SkipReason::DateNotInRange(outside))
        );
        assert_eq!(
            move_day(&mut plan, outside, date(2)),
            EditOutcome::Skipped(SkipReason::DateNotInRange(outside))
        );
        assert_eq!(plan, before);
    }

    #[test]
    fn test_apply_model_replaces_with_copy() {
        let mut plan = plan();
        plan.push_exercise(date(3), Exercise::new("Old", 1, 1, 0));
        let model = model();

        let outcome = apply_model(&mut plan, date(3), &model);
        assert_eq!(outcome, EditOutcome::Applied { days_changed: 1 });

        let stored = plan.exercises(date(3)).unwrap();
        assert_eq!(stored, model.exercises.as_slice());
        assert_ne!(stored.as_ptr(), model.exercises.as_ptr());
    }

    #[test]
    fn test_apply_model_outside_range_is_noop() {
        let mut plan = plan();
        let before = plan.clone();
        let outcome = apply_model(&mut plan, date(30), &model());
        assert!(!outcome.is_applied());
        assert_eq!(plan, before);
    }
}
