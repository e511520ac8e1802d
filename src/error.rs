//! Error types for trainplan

use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the trainplan crate
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Not a trainplan directory: {0}")]
    NotPlanDirectory(PathBuf),

    #[error("Invalid range: end date {end} is before start date {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid weekday: {0}")]
    InvalidWeekday(String),

    #[error("Invalid exercise: {0}")]
    InvalidExercise(String),

    #[error("No plan range has been set")]
    NoActivePlan,

    #[error("Series not found: {0}")]
    SeriesNotFound(String),

    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("Corrupt plan file: {0}")]
    CorruptPlan(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl PlanError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            PlanError::NotPlanDirectory(_) => 2,
            PlanError::InvalidRange { .. } | PlanError::InvalidDate(_) => 3,
            PlanError::SeriesNotFound(_) | PlanError::ModelNotFound(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            PlanError::NotPlanDirectory(path) => {
                format!(
                    "Not a trainplan directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'trainplan init' in this directory to create a new plan\n\
                    • Navigate to an existing trainplan directory\n\
                    • Set TRAINPLAN_ROOT environment variable to your plan path",
                    path.display()
                )
            }
            PlanError::InvalidDate(input) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Valid dates:\n\
                    • today, yesterday, tomorrow\n\
                    • monday, tuesday, ..., sunday (today or the next one)\n\
                    • last monday, next friday, etc.\n\
                    • Specific dates: YYYY-MM-DD or DD-MM-YYYY\n\n\
                    Examples:\n\
                    trainplan range today 2025-03-31\n\
                    trainplan move monday next wednesday",
                    input
                )
            }
            PlanError::InvalidRange { start, end } => {
                format!(
                    "{}\n\n\
                    The end date must be on or after the start date.\n\
                    Example: trainplan range {} {}",
                    self,
                    end.format("%Y-%m-%d"),
                    start.format("%Y-%m-%d")
                )
            }
            PlanError::NoActivePlan => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Set a date range first: trainplan range <START> <END>",
                    self
                )
            }
            PlanError::SeriesNotFound(id) => {
                format!(
                    "Series not found: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'trainplan series' to list available series\n\
                    • Series templates live in .trainplan/series/<id>.toml",
                    id
                )
            }
            PlanError::ModelNotFound(name) => {
                format!(
                    "Model not found: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'trainplan models' to list available models\n\
                    • Models live in .trainplan/models/<name>.toml",
                    name
                )
            }
            PlanError::InvalidExercise(input) => {
                format!(
                    "Invalid exercise: '{}'\n\n\
                    Expected format: <name> <sets>x<reps> [rest <secs>s] [@<technique>]\n\
                    Use F as reps for sets taken to failure.\n\
                    Example: trainplan add monday \"Back squat 4x8 rest 120s\"",
                    input
                )
            }
            PlanError::InvalidWeekday(input) => {
                format!(
                    "Invalid weekday: '{}'\n\n\
                    Valid weekdays: monday, tuesday, wednesday, thursday, friday, saturday, sunday\n\
                    Example: trainplan config availability monday,wednesday,friday",
                    input
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using PlanError
pub type Result<T> = std::result::Result<T, PlanError>;
