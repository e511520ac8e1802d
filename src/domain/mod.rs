//! Domain layer - Plan model and the pure editing engine

pub mod assignment;
pub mod availability;
pub mod date_ref;
pub mod editing;
pub mod exercise;
pub mod plan;
pub mod replication;

pub use assignment::{apply_assignment, assign_weekly_pattern, DayAssignment, DayAssignmentTable};
pub use availability::{parse_weekday, weekday_name, AvailabilitySet};
pub use date_ref::{resolve_date, DateReference};
pub use editing::{apply_model, move_day};
pub use exercise::{Exercise, FlatExerciseModel, SeriesTemplate, Training};
pub use plan::{
    days_between, EditOutcome, PlanRange, RangeResetPolicy, SkipReason, TrainingDaySlot,
};
pub use replication::{replicate, replicate_week, ReplicationOptions, ReplicationRule};
