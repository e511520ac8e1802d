//! Weekly availability: the weekdays a client can train on

use crate::error::{PlanError, Result};
use chrono::Weekday;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Parse a weekday name (full English name or three-letter abbreviation, any case)
pub fn parse_weekday(input: &str) -> Result<Weekday> {
    match input.trim().to_lowercase().as_str() {
        "monday" | "mon" => Ok(Weekday::Mon),
        "tuesday" | "tue" => Ok(Weekday::Tue),
        "wednesday" | "wed" => Ok(Weekday::Wed),
        "thursday" | "thu" => Ok(Weekday::Thu),
        "friday" | "fri" => Ok(Weekday::Fri),
        "saturday" | "sat" => Ok(Weekday::Sat),
        "sunday" | "sun" => Ok(Weekday::Sun),
        _ => Err(PlanError::InvalidWeekday(input.to_string())),
    }
}

/// Lowercase English name of a weekday
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}

/// Set of weekdays, kept in Monday..Sunday order without duplicates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailabilitySet {
    days: Vec<Weekday>,
}

impl AvailabilitySet {
    pub fn new<I: IntoIterator<Item = Weekday>>(days: I) -> Self {
        let mut days: Vec<Weekday> = days.into_iter().collect();
        days.sort_by_key(|d| d.num_days_from_monday());
        days.dedup();
        AvailabilitySet { days }
    }

    pub fn contains(&self, day: Weekday) -> bool {
        self.days.contains(&day)
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn days(&self) -> &[Weekday] {
        &self.days
    }
}

impl FromStr for AvailabilitySet {
    type Err = PlanError;

    /// Parse a comma- or whitespace-separated list of weekday names
    fn from_str(s: &str) -> Result<Self> {
        let days = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(parse_weekday)
            .collect::<Result<Vec<_>>>()?;
        Ok(AvailabilitySet::new(days))
    }
}

impl fmt::Display for AvailabilitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.days.iter().map(|d| weekday_name(*d)).collect();
        write!(f, "{}", names.join(","))
    }
}

impl Serialize for AvailabilitySet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let names: Vec<&str> = self.days.iter().map(|d| weekday_name(*d)).collect();
        names.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AvailabilitySet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let names = Vec::<String>::deserialize(deserializer)?;
        let days = names
            .iter()
            .map(|name| parse_weekday(name))
            .collect::<Result<Vec<_>>>()
            .map_err(serde::de::Error::custom)?;
        Ok(AvailabilitySet::new(days))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_weekday_names() {
        assert_eq!(parse_weekday("Monday").unwrap(), Weekday::Mon);
        assert_eq!(parse_weekday("wed").unwrap(), Weekday::Wed);
        assert_eq!(parse_weekday(" SUNDAY ").unwrap(), Weekday::Sun);
        assert!(parse_weekday("funday").is_err());
    }

    #[test]
    fn test_set_sorted_and_deduplicated() {
        let set: AvailabilitySet = "friday, monday,wednesday monday".parse().unwrap();
        assert_eq!(set.days(), &[Weekday::Mon, Weekday::Wed, Weekday::Fri]);
        assert!(set.contains(Weekday::Wed));
        assert!(!set.contains(Weekday::Tue));
        assert_eq!(set.to_string(), "monday,wednesday,friday");
    }

    #[test]
    fn test_empty_set() {
        let set: AvailabilitySet = "".parse().unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_invalid_member_rejected() {
        let err = "monday,someday".parse::<AvailabilitySet>().unwrap_err();
        match err {
            PlanError::InvalidWeekday(s) => assert_eq!(s, "someday"),
            other => panic!("Expected InvalidWeekday, got {:?}", other),
        }
    }

    #[test]
    fn test_serde_as_name_list() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            availability: AvailabilitySet,
        }

        let wrapper = Wrapper {
            availability: AvailabilitySet::new([Weekday::Thu, Weekday::Tue]),
        };
        let text = toml::to_string(&wrapper).unwrap();
        assert!(text.contains(r#"availability = ["tuesday", "thursday"]"#));

        let parsed: Wrapper = toml::from_str(r#"availability = ["Sat", "mon"]"#).unwrap();
        assert_eq!(
            parsed.availability.days(),
            &[Weekday::Mon, Weekday::Sat]
        );
    }
}
