//! Exercise values and the read-only templates built from them

use crate::error::{PlanError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Shorthand: `<name> <sets>x<reps|F> [rest <secs>s] [@<technique>]`
fn shorthand_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(
            r"(?i)^(?P<name>.+?)\s+(?P<sets>\d+)\s*x\s*(?P<reps>\d+|f)(?:\s+rest\s+(?P<rest>\d+)\s*s?)?(?:\s+@\s*(?P<tech>.+))?$",
        )
        .unwrap()
    })
}

/// A single prescribed exercise.
///
/// Exercises are plain values: every assignment to a day stores its own clone,
/// so editing one day never leaks into a template or another day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub name: String,
    pub sets: u32,
    /// Repetitions per set; 0 means "until failure"
    pub reps: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advanced_technique: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub rest_time_seconds: u32,
}

impl Exercise {
    pub fn new(name: impl Into<String>, sets: u32, reps: u32, rest_time_seconds: u32) -> Self {
        Exercise {
            name: name.into(),
            sets,
            reps,
            advanced_technique: None,
            notes: None,
            rest_time_seconds,
        }
    }

    pub fn with_technique(mut self, technique: impl Into<String>) -> Self {
        self.advanced_technique = Some(technique.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn is_until_failure(&self) -> bool {
        self.reps == 0
    }

    /// Parse the command-line shorthand, e.g. `Back squat 4x8 rest 120s @drop set`.
    /// `F` in place of the rep count means until failure.
    pub fn parse_shorthand(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let caps = shorthand_regex()
            .captures(trimmed)
            .ok_or_else(|| PlanError::InvalidExercise(input.to_string()))?;

        let invalid = || PlanError::InvalidExercise(input.to_string());

        let sets: u32 = caps["sets"].parse().map_err(|_| invalid())?;
        let reps: u32 = if caps["reps"].eq_ignore_ascii_case("f") {
            0
        } else {
            caps["reps"].parse().map_err(|_| invalid())?
        };
        let rest = match caps.name("rest") {
            Some(m) => m.as_str().parse().map_err(|_| invalid())?,
            None => 0,
        };

        let mut exercise = Exercise::new(caps["name"].trim(), sets, reps, rest);
        if let Some(tech) = caps.name("tech") {
            exercise.advanced_technique = Some(tech.as_str().trim().to_string());
        }
        Ok(exercise)
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_until_failure() {
            write!(f, "{} {}xF", self.name, self.sets)?;
        } else {
            write!(f, "{} {}x{}", self.name, self.sets, self.reps)?;
        }
        if self.rest_time_seconds > 0 {
            write!(f, " rest {}s", self.rest_time_seconds)?;
        }
        if let Some(tech) = &self.advanced_technique {
            write!(f, " @{}", tech)?;
        }
        Ok(())
    }
}

/// One named block of exercises inside a series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Training {
    pub name: String,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}

/// Reusable series of trainings used to populate a week
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesTemplate {
    pub id: String,
    #[serde(default)]
    pub trainings: Vec<Training>,
}

impl SeriesTemplate {
    /// Find a training by name. The first match wins when names repeat.
    pub fn training(&self, name: &str) -> Option<&Training> {
        self.trainings.iter().find(|t| t.name == name)
    }
}

/// Non-recurring exercise list applied to a single day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatExerciseModel {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}
