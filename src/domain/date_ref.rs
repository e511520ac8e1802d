//! Date arguments: relative references and calendar dates

use crate::domain::availability::parse_weekday;
use crate::error::{PlanError, Result};
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// A date as typed by the user, resolved against a base date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateReference {
    Today,
    Yesterday,
    Tomorrow,
    /// Today if it matches, otherwise the coming occurrence
    Upcoming(Weekday),
    /// Strictly before the base date
    Last(Weekday),
    /// Strictly after the base date
    Next(Weekday),
    Exact(NaiveDate),
}

impl DateReference {
    /// Parse `today`, `yesterday`, `tomorrow`, `<weekday>`, `last <weekday>`,
    /// `next <weekday>`, `YYYY-MM-DD` or `DD-MM-YYYY`
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();
        let invalid = || PlanError::InvalidDate(input.to_string());

        match normalized.as_str() {
            "today" => return Ok(DateReference::Today),
            "yesterday" => return Ok(DateReference::Yesterday),
            "tomorrow" => return Ok(DateReference::Tomorrow),
            _ => {}
        }

        if let Some(day) = normalized.strip_prefix("last ") {
            return parse_weekday(day)
                .map(DateReference::Last)
                .map_err(|_| invalid());
        }
        if let Some(day) = normalized.strip_prefix("next ") {
            return parse_weekday(day)
                .map(DateReference::Next)
                .map_err(|_| invalid());
        }
        if let Ok(day) = parse_weekday(&normalized) {
            return Ok(DateReference::Upcoming(day));
        }

        NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
            .or_else(|_| NaiveDate::parse_from_str(&normalized, "%d-%m-%Y"))
            .map(DateReference::Exact)
            .map_err(|_| invalid())
    }

    pub fn resolve(&self, base: NaiveDate) -> NaiveDate {
        match *self {
            DateReference::Today => base,
            DateReference::Yesterday => base - Duration::days(1),
            DateReference::Tomorrow => base + Duration::days(1),
            DateReference::Upcoming(day) => base + Duration::days(days_until(base, day)),
            DateReference::Last(day) => {
                let back = days_since(base, day);
                base - Duration::days(if back == 0 { 7 } else { back })
            }
            DateReference::Next(day) => {
                let ahead = days_until(base, day);
                base + Duration::days(if ahead == 0 { 7 } else { ahead })
            }
            DateReference::Exact(date) => date,
        }
    }
}

fn days_until(base: NaiveDate, target: Weekday) -> i64 {
    ((target.num_days_from_monday() + 7 - base.weekday().num_days_from_monday()) % 7) as i64
}

fn days_since(base: NaiveDate, target: Weekday) -> i64 {
    ((base.weekday().num_days_from_monday() + 7 - target.num_days_from_monday()) % 7) as i64
}

/// Parse and resolve in one step
pub fn resolve_date(input: &str, base: NaiveDate) -> Result<NaiveDate> {
    DateReference::parse(input).map(|r| r.resolve(base))
}
