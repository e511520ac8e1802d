//! Day and week replication
//!
//! Day replication appends; week replication overwrites. Neither touches the
//! source content, and every target receives its own copy of the exercises.

use crate::domain::plan::{days_between, EditOutcome, PlanRange, SkipReason};
use chrono::NaiveDate;
use std::collections::BTreeSet;
use tracing::debug;

const WEEK: usize = 7;

/// Switches for day replication
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplicationOptions {
    /// When a day is matched by both the interval rule and the explicit date
    /// list, append the source content once instead of twice.
    pub deduplicate_targets: bool,
}

/// Which days receive a copy of the source day
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplicationRule {
    /// Dates chosen one by one; the source date itself is ignored
    pub explicit_dates: BTreeSet<NaiveDate>,
    /// Every `n` days after the source; `None` or `Some(0)` disables the rule
    pub interval_days: Option<u32>,
}

impl ReplicationRule {
    pub fn every(interval_days: u32) -> Self {
        ReplicationRule {
            explicit_dates: BTreeSet::new(),
            interval_days: Some(interval_days),
        }
    }

    pub fn on_dates<I: IntoIterator<Item = NaiveDate>>(dates: I) -> Self {
        ReplicationRule {
            explicit_dates: dates.into_iter().collect(),
            interval_days: None,
        }
    }

    fn interval(&self) -> Option<i64> {
        self.interval_days.filter(|n| *n > 0).map(i64::from)
    }

    pub fn is_empty(&self) -> bool {
        self.interval().is_none() && self.explicit_dates.is_empty()
    }

    /// How many copies `target` should receive from `source`.
    ///
    /// The interval rule and the explicit list are independent, so a date that
    /// satisfies both yields two.
    fn copies_for(&self, source: NaiveDate, target: NaiveDate) -> usize {
        if target == source {
            return 0;
        }

        let mut copies = 0;
        if let Some(interval) = self.interval() {
            let offset = days_between(source, target);
            if offset > 0 && offset % interval == 0 {
                copies += 1;
            }
        }
        if self.explicit_dates.contains(&target) {
            copies += 1;
        }
        copies
    }
}

/// Append copies of `source_date`'s exercises to every day matched by `rule`.
///
/// Existing content on the target days is kept; the copies go after it.
pub fn replicate(
    plan: &mut PlanRange,
    source_date: NaiveDate,
    rule: &ReplicationRule,
    options: ReplicationOptions,
) -> EditOutcome {
    let Some(source_idx) = plan.index_of(source_date) else {
        debug!(%source_date, "replicate skipped: source not in range");
        return EditOutcome::Skipped(SkipReason::DateNotInRange(source_date));
    };

    if rule.is_empty() {
        return EditOutcome::Skipped(SkipReason::NothingToReplicate);
    }

    let source = plan.slots[source_idx].exercises.clone();
    if source.is_empty() {
        debug!(%source_date, "replicate skipped: source day is empty");
        return EditOutcome::Skipped(SkipReason::NothingToReplicate);
    }

    let mut days_changed = 0usize;

    for slot in plan.slots.iter_mut() {
        let mut copies = rule.copies_for(source_date, slot.date);
        if options.deduplicate_targets {
            copies = copies.min(1);
        }
        if copies == 0 {
            continue;
        }

        for _ in 0..copies {
            slot.exercises.extend(source.iter().cloned());
        }
        days_changed += 1;
    }

    if days_changed == 0 {
        debug!(%source_date, "replicate matched no days");
        return EditOutcome::Skipped(SkipReason::NothingToReplicate);
    }

    debug!(%source_date, days_changed, "replicated day");
    EditOutcome::Applied { days_changed }
}

/// Overwrite the week(s) after `week_start` with copies of the seven days
/// starting at `week_start`.
///
/// Without `to_end_of_range` exactly one following week is written (fewer days
/// if the range ends sooner). With it, writing continues to the last day of
/// the range, including a trailing partial week.
pub fn replicate_week(
    plan: &mut PlanRange,
    week_start: NaiveDate,
    to_end_of_range: bool,
) -> EditOutcome {
    let Some(start) = plan.index_of(week_start) else {
        debug!(%week_start, "week replicate skipped: start not in range");
        return EditOutcome::Skipped(SkipReason::DateNotInRange(week_start));
    };

    if start + WEEK > plan.len() {
        debug!(%week_start, "week replicate skipped: fewer than seven days left");
        return EditOutcome::Skipped(SkipReason::IncompleteWeek);
    }

    let source_week: Vec<_> = plan.slots[start..start + WEEK]
        .iter()
        .map(|slot| slot.exercises.clone())
        .collect();

    let end = if to_end_of_range {
        plan.len()
    } else {
        (start + 2 * WEEK).min(plan.len())
    };

    if start + WEEK >= end {
        return EditOutcome::Skipped(SkipReason::NothingToReplicate);
    }

    for j in start + WEEK..end {
        plan.slots[j].exercises = source_week[(j - start) % WEEK].clone();
    }

    let days_changed = end - (start + WEEK);
    debug!(%week_start, days_changed, to_end_of_range, "replicated week");
    EditOutcome::Applied { days_changed }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::exercise::Exercise;
    use chrono::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn plan_of(days: i64) -> PlanRange {
        let start = date(2025, 3, 3);
        PlanRange::partition(start, start + Duration::days(days - 1)).unwrap()
    }

    fn day(plan: &PlanRange, offset: i64) -> NaiveDate {
        plan.start_date() + Duration::days(offset)
    }

    fn names(plan: &PlanRange, offset: i64) -> Vec<String> {
        plan.exercises(day(plan, offset))
            .unwrap()
            .iter()
            .map(|e| e.name.clone())
            .collect()
    }

    #[test]
    fn test_interval_hits_positive_multiples_only() {
        let mut plan = plan_of(21);
        let source = day(&plan, 0);
        plan.push_exercise(source, Exercise::new("Squat", 5, 5, 180));
        plan.push_exercise(source, Exercise::new("Press", 5, 5, 120));

        let outcome = replicate(
            &mut plan,
            source,
            &ReplicationRule::every(7),
            ReplicationOptions::default(),
        );

        assert_eq!(outcome, EditOutcome::Applied { days_changed: 2 });
        assert_eq!(names(&plan, 0), vec!["Squat", "Press"]);
        assert_eq!(names(&plan, 7), vec!["Squat", "Press"]);
        assert_eq!(names(&plan, 14), vec!["Squat", "Press"]);
        for offset in (1..21).filter(|o| o % 7 != 0) {
            assert!(names(&plan, offset).is_empty(), "offset {}", offset);
        }
    }

    #[test]
    fn test_interval_ignores_days_before_source() {
        let mut plan = plan_of(21);
        let source = day(&plan, 10);
        plan.push_exercise(source, Exercise::new("Row", 3, 12, 60));

        replicate(
            &mut plan,
            source,
            &ReplicationRule::every(5),
            ReplicationOptions::default(),
        );

        assert!(names(&plan, 5).is_empty());
        assert!(names(&plan, 0).is_empty());
        assert_eq!(names(&plan, 15), vec!["Row"]);
        assert_eq!(names(&plan, 20), vec!["Row"]);
    }

    #[test]
    fn test_explicit_dates_append_after_existing() {
        let mut plan = plan_of(7);
        let source = day(&plan, 1);
        plan.push_exercise(source, Exercise::new("Curl", 3, 12, 45));
        plan.push_exercise(day(&plan, 4), Exercise::new("Lunge", 3, 10, 60));

        let rule = ReplicationRule::on_dates([day(&plan, 4), day(&plan, 6), source]);
        let outcome = replicate(&mut plan, source, &rule, ReplicationOptions::default());

        assert_eq!(outcome, EditOutcome::Applied { days_changed: 2 });
        assert_eq!(names(&plan, 4), vec!["Lunge", "Curl"]);
        assert_eq!(names(&plan, 6), vec!["Curl"]);
        assert_eq!(names(&plan, 1), vec!["Curl"]);
    }

    #[test]
    fn test_both_rules_append_twice() {
        let mut plan = plan_of(14);
        let source = day(&plan, 0);
        plan.push_exercise(source, Exercise::new("Deadlift", 1, 5, 240));

        let rule = ReplicationRule {
            explicit_dates: [day(&plan, 7)].into_iter().collect(),
            interval_days: Some(7),
        };
        replicate(&mut plan, source, &rule, ReplicationOptions::default());

        assert_eq!(names(&plan, 7), vec!["Deadlift", "Deadlift"]);
    }

    #[test]
    fn test_deduplicate_appends_once() {
        let mut plan = plan_of(14);
        let source = day(&plan, 0);
        plan.push_exercise(source, Exercise::new("Deadlift", 1, 5, 240));

        let rule = ReplicationRule {
            explicit_dates: [day(&plan, 7), day(&plan, 3)].into_iter().collect(),
            interval_days: Some(7),
        };
        let options = ReplicationOptions {
            deduplicate_targets: true,
        };
        let outcome = replicate(&mut plan, source, &rule, options);

        assert_eq!(outcome, EditOutcome::Applied { days_changed: 2 });
        assert_eq!(names(&plan, 7), vec!["Deadlift"]);
        assert_eq!(names(&plan, 3), vec!["Deadlift"]);
    }

    #[test]
    fn test_empty_rule_is_noop() {
        let mut plan = plan_of(7);
        let source = day(&plan, 0);
        plan.push_exercise(source, Exercise::new("Squat", 5, 5, 180));
        let before = plan.clone();

        let outcome = replicate(
            &mut plan,
            source,
            &ReplicationRule::default(),
            ReplicationOptions::default(),
        );
        assert_eq!(outcome, EditOutcome::Skipped(SkipReason::NothingToReplicate));

        let outcome = replicate(
            &mut plan,
            source,
            &ReplicationRule::every(0),
            ReplicationOptions::default(),
        );
        assert_eq!(outcome, EditOutcome::Skipped(SkipReason::NothingToReplicate));
        assert_eq!(plan, before);
    }

    #[test]
    fn test_source_outside_range_is_noop() {
        let mut plan = plan_of(7);
        let outside = date(2030, 1, 1);
        let outcome = replicate(
            &mut plan,
            outside,
            &ReplicationRule::every(1),
            ReplicationOptions::default(),
        );
        assert_eq!(
            outcome,
            EditOutcome::Skipped(SkipReason::DateNotInRange(outside))
        );
    }

    #[test]
    fn test_explicit_dates_outside_range_ignored() {
        let mut plan = plan_of(7);
        let source = day(&plan, 0);
        plan.push_exercise(source, Exercise::new("Squat", 5, 5, 180));

        let rule = ReplicationRule::on_dates([date(2030, 1, 1)]);
        let outcome = replicate(&mut plan, source, &rule, ReplicationOptions::default());
        assert_eq!(outcome, EditOutcome::Skipped(SkipReason::NothingToReplicate));
    }

    #[test]
    fn test_empty_source_changes_nothing() {
        let mut plan = plan_of(21);
        let before = plan.clone();
        let source = day(&plan, 0);

        let outcome = replicate(
            &mut plan,
            source,
            &ReplicationRule::every(7),
            ReplicationOptions::default(),
        );
        assert_eq!(outcome, EditOutcome::Skipped(SkipReason::NothingToReplicate));
        assert_eq!(plan, before);
    }

    #[test]
    fn test_explicit_date_before_source_appends() {
        let mut plan = plan_of(14);
        let source = day(&plan, 9);
        plan.push_exercise(source, Exercise::new("Press", 3, 8, 90));

        let rule = ReplicationRule::on_dates([day(&plan, 2)]);
        let outcome = replicate(&mut plan, source, &rule, ReplicationOptions::default());

        assert_eq!(outcome, EditOutcome::Applied { days_changed: 1 });
        assert_eq!(names(&plan, 2), vec!["Press"]);
    }

    fn seed_week(plan: &mut PlanRange, from: i64) {
        for offset in 0..7 {
            let d = day(plan, from + offset);
            plan.push_exercise(d, Exercise::new(format!("W{}", offset), 3, 8, 90));
        }
    }

    #[test]
    fn test_week_replication_single_week() {
        let mut plan = plan_of(28);
        seed_week(&mut plan, 0);
        plan.push_exercise(day(&plan, 8), Exercise::new("Old", 1, 1, 0));
        plan.push_exercise(day(&plan, 20), Exercise::new("Keep", 1, 1, 0));

        let start = day(&plan, 0);
        let outcome = replicate_week(&mut plan, start, false);
        assert_eq!(outcome, EditOutcome::Applied { days_changed: 7 });

        for offset in 7..14 {
            assert_eq!(names(&plan, offset), names(&plan, offset - 7));
        }
        assert_eq!(names(&plan, 20), vec!["Keep"]);
        for offset in (14..28).filter(|o| *o != 20) {
            assert!(names(&plan, offset).is_empty());
        }
    }

    #[test]
    fn test_week_replication_to_end_of_range() {
        let mut plan = plan_of(28);
        seed_week(&mut plan, 0);

        let start = day(&plan, 0);
        let outcome = replicate_week(&mut plan, start, true);
        assert_eq!(outcome, EditOutcome::Applied { days_changed: 21 });

        for offset in 7..28 {
            assert_eq!(names(&plan, offset), vec![format!("W{}", offset % 7)]);
        }
    }

    #[test]
    fn test_week_replication_writes_partial_final_block() {
        let mut plan = plan_of(24);
        seed_week(&mut plan, 0);

        let start = day(&plan, 0);
        let outcome = replicate_week(&mut plan, start, true);
        assert_eq!(outcome, EditOutcome::Applied { days_changed: 17 });
        assert_eq!(names(&plan, 23), vec!["W2"]);
    }

    #[test]
    fn test_week_replication_from_mid_range_start() {
        let mut plan = plan_of(20);
        seed_week(&mut plan, 3);

        let start = day(&plan, 3);
        let outcome = replicate_week(&mut plan, start, false);
        assert_eq!(outcome, EditOutcome::Applied { days_changed: 7 });
        assert_eq!(names(&plan, 10), vec!["W0"]);
        assert_eq!(names(&plan, 16), vec!["W6"]);
        assert!(names(&plan, 17).is_empty());
    }

    #[test]
    fn test_week_replication_single_week_truncated_by_range_end() {
        let mut plan = plan_of(11);
        seed_week(&mut plan, 0);

        let start = day(&plan, 0);
        let outcome = replicate_week(&mut plan, start, false);
        assert_eq!(outcome, EditOutcome::Applied { days_changed: 4 });
        for offset in 7..11 {
            assert_eq!(names(&plan, offset), vec![format!("W{}", offset % 7)]);
        }
    }

    #[test]
    fn test_week_replication_incomplete_source_week() {
        let mut plan = plan_of(10);
        let before = plan.clone();
        let start = day(&plan, 4);
        let outcome = replicate_week(&mut plan, start, true);
        assert_eq!(outcome, EditOutcome::Skipped(SkipReason::IncompleteWeek));
        assert_eq!(plan, before);
    }

    #[test]
    fn test_week_replication_no_following_days() {
        let mut plan = plan_of(7);
        let start = day(&plan, 0);
        let outcome = replicate_week(&mut plan, start, true);
        assert_eq!(outcome, EditOutcome::Skipped(SkipReason::NothingToReplicate));
    }

    #[test]
    fn test_week_replication_copies_are_independent() {
        let mut plan = plan_of(14);
        seed_week(&mut plan, 0);
        let start = day(&plan, 0);
        replicate_week(&mut plan, start, false);

        plan.push_exercise(day(&plan, 7), Exercise::new("Extra", 1, 1, 0));
        assert_eq!(names(&plan, 0), vec!["W0"]);
        assert_eq!(names(&plan, 7), vec!["W0", "Extra"]);
    }
}
