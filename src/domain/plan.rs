//! Plan range: the contiguous run of per-day training slots
//!
//! A `PlanRange` owns one slot per calendar day from `start_date` to `end_date`
//! inclusive. Slots live in a single `Vec` and are addressed by their offset
//! from the start date, so date lookup never needs a search.

use crate::domain::exercise::Exercise;
use crate::error::{PlanError, Result};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One calendar day's exercise content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingDaySlot {
    pub date: NaiveDate,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}

impl TrainingDaySlot {
    pub fn empty(date: NaiveDate) -> Self {
        TrainingDaySlot {
            date,
            exercises: Vec::new(),
        }
    }

    pub fn is_rest(&self) -> bool {
        self.exercises.is_empty()
    }
}

/// What happens to existing day content when the range changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RangeResetPolicy {
    /// Throw away all content and start from empty slots
    #[default]
    Discard,
    /// Keep content for dates present in both the old and the new range
    PreserveOverlap,
}

impl std::str::FromStr for RangeResetPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "discard" => Ok(RangeResetPolicy::Discard),
            "preserve-overlap" | "preserve" => Ok(RangeResetPolicy::PreserveOverlap),
            _ => Err(format!(
                "Invalid range reset policy: '{}'. Valid policies are: discard, preserve-overlap",
                s
            )),
        }
    }
}

/// Why an edit left the plan untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// A referenced date lies outside the plan range
    DateNotInRange(NaiveDate),
    /// Source and target are the same day
    SameDay,
    /// No target matched the replication rules
    NothingToReplicate,
    /// Fewer than seven days remain from the week start
    IncompleteWeek,
    /// Source and target of a move are both empty
    NothingToMove,
}

/// Result of an edit that degrades to a no-op instead of failing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Applied { days_changed: usize },
    Skipped(SkipReason),
}

impl EditOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, EditOutcome::Applied { .. })
    }
}

/// Number of days from `start` to `end` (negative when `end` is earlier)
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

/// Contiguous, ascending sequence of day slots covering `start_date..=end_date`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRange {
    start_date: NaiveDate,
    end_date: NaiveDate,
    pub(crate) slots: Vec<TrainingDaySlot>,
}

impl PlanRange {
    /// Partition `start..=end` into empty day slots.
    ///
    /// Fails with `InvalidRange` when `end` precedes `start`.
    pub fn partition(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        let span = days_between(start, end);
        if span < 0 {
            return Err(PlanError::InvalidRange { start, end });
        }

        let slots = (0..=span)
            .map(|offset| TrainingDaySlot::empty(start + Duration::days(offset)))
            .collect::<Vec<_>>();

        debug!(%start, %end, days = slots.len(), "partitioned plan range");

        Ok(PlanRange {
            start_date: start,
            end_date: end,
            slots,
        })
    }

    /// Rebuild a range from stored slots, re-checking contiguity
    pub fn from_slots(
        start: NaiveDate,
        end: NaiveDate,
        slots: Vec<TrainingDaySlot>,
    ) -> Result<Self> {
        let span = days_between(start, end);
        if span < 0 {
            return Err(PlanError::InvalidRange { start, end });
        }
        if slots.len() as i64 != span + 1 {
            return Err(PlanError::CorruptPlan(format!(
                "expected {} days between {} and {}, found {}",
                span + 1,
                start,
                end,
                slots.len()
            )));
        }
        for (offset, slot) in slots.iter().enumerate() {
            let expected = start + Duration::days(offset as i64);
            if slot.date != expected {
                return Err(PlanError::CorruptPlan(format!(
                    "day {} should be {} but is {}",
                    offset, expected, slot.date
                )));
            }
        }

        Ok(PlanRange {
            start_date: start,
            end_date: end,
            slots,
        })
    }

    /// Replace the range with `start..=end` according to `policy`
    pub fn reset(self, start: NaiveDate, end: NaiveDate, policy: RangeResetPolicy) -> Result<Self> {
        let mut fresh = PlanRange::partition(start, end)?;

        if policy == RangeResetPolicy::PreserveOverlap {
            let mut kept = 0usize;
            for slot in self.slots {
                if let Some(idx) = fresh.index_of(slot.date) {
                    fresh.slots[idx].exercises = slot.exercises;
                    kept += 1;
                }
            }
            debug!(kept, "preserved overlapping days on range reset");
        }

        Ok(fresh)
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[TrainingDaySlot] {
        &self.slots
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.index_of(date).is_some()
    }

    /// Position of `date` within the range
    pub fn index_of(&self, date: NaiveDate) -> Option<usize> {
        let offset = days_between(self.start_date, date);
        if offset < 0 || offset as usize >= self.slots.len() {
            None
        } else {
            Some(offset as usize)
        }
    }

    pub fn slot(&self, date: NaiveDate) -> Option<&TrainingDaySlot> {
        self.index_of(date).map(|idx| &self.slots[idx])
    }

    pub fn exercises(&self, date: NaiveDate) -> Option<&[Exercise]> {
        self.slot(date).map(|s| s.exercises.as_slice())
    }

    /// Slots whose date falls within `from..=to` (either bound optional)
    pub fn slots_between(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> impl Iterator<Item = &TrainingDaySlot> {
        self.slots.iter().filter(move |slot| {
            from.map_or(true, |f| slot.date >= f) && to.map_or(true, |t| slot.date <= t)
        })
    }

    /// Empty one day
    pub fn clear_day(&mut self, date: NaiveDate) -> EditOutcome {
        let Some(idx) = self.index_of(date) else {
            debug!(%date, "clear skipped: date not in range");
            return EditOutcome::Skipped(SkipReason::DateNotInRange(date));
        };

        self.slots[idx].exercises.clear();
        debug!(%date, "cleared day");
        EditOutcome::Applied { days_changed: 1 }
    }

    /// Append one exercise to a day
    pub fn push_exercise(&mut self, date: NaiveDate, exercise: Exercise) -> EditOutcome {
        let Some(idx) = self.index_of(date) else {
            debug!(%date, "add skipped: date not in range");
            return EditOutcome::Skipped(SkipReason::DateNotInRange(date));
        };

        self.slots[idx].exercises.push(exercise);
        EditOutcome::Applied { days_changed: 1 }
    }

    /// Total number of days that carry at least one exercise
    pub fn training_days(&self) -> usize {
        self.slots.iter().filter(|s| !s.is_rest()).count()
    }
}
