//! Structured recurrence rules.
//!
//! Recurrence crosses the provider boundary field by field (frequency,
//! interval, day/week/month positions, end condition) rather than as RRULE
//! text, so a mirrored copy can be rebuilt in the destination store without
//! either store holding a reference into the other.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How often a series repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

/// Day of the week, Sunday-first as calendar stores number them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

/// A weekday, optionally pinned to one week of the period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekdaySpec {
    pub weekday: Weekday,
    /// 0 = every week; n = the nth week of the month or year, negative
    /// counting from the end (-1 = last).
    #[serde(default)]
    pub week_number: i32,
}

impl WeekdaySpec {
    pub fn every(weekday: Weekday) -> Self {
        WeekdaySpec {
            weekday,
            week_number: 0,
        }
    }
}

/// When a recurring series stops repeating.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecurrenceEnd {
    /// Repeats up to and including this instant.
    Until(DateTime<Utc>),
    /// Repeats for a fixed number of occurrences.
    Count(u32),
}

/// One rule of a recurring event. An event may carry several.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurrenceRule {
    pub frequency: Frequency,
    /// Every `interval` periods; 1 = every day/week/month/year.
    pub interval: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub days_of_week: Vec<WeekdaySpec>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub days_of_month: Vec<i32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub months_of_year: Vec<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub weeks_of_year: Vec<i32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub days_of_year: Vec<i32>,
    /// Filters occurrences within each period (-1 = last match).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub set_positions: Vec<i32>,
    /// `None` repeats forever.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<RecurrenceEnd>,
}

impl RecurrenceRule {
    /// A rule with no positional constraints, repeating forever.
    pub fn new(frequency: Frequency, interval: u32) -> Self {
        RecurrenceRule {
            frequency,
            interval,
            days_of_week: Vec::new(),
            days_of_month: Vec::new(),
            months_of_year: Vec::new(),
            weeks_of_year: Vec::new(),
            days_of_year: Vec::new(),
            set_positions: Vec::new(),
            end: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn new_rule_has_no_constraints() {
        let rule = RecurrenceRule::new(Frequency::Daily, 1);
        assert_eq!(rule.interval, 1);
        assert!(rule.days_of_week.is_empty());
        assert!(rule.end.is_none());
    }

    #[test]
    fn weekly_rule_round_trips() {
        let mut rule = RecurrenceRule::new(Frequency::Weekly, 2);
        rule.days_of_week = vec![
            WeekdaySpec::every(Weekday::Monday),
            WeekdaySpec {
                weekday: Weekday::Friday,
                week_number: -1,
            },
        ];
        rule.end = Some(RecurrenceEnd::Count(10));

        let json = serde_json::to_string(&rule).unwrap();
        let parsed: RecurrenceRule = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, rule);
    }

    #[test]
    fn end_conditions_have_distinct_wire_shapes() {
        let until = RecurrenceEnd::Until(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap());
        let json = serde_json::to_string(&until).unwrap();
        assert!(json.starts_with(r#"{"until":"#));

        let count = RecurrenceEnd::Count(5);
        assert_eq!(serde_json::to_string(&count).unwrap(), r#"{"count":5}"#);
    }

    #[test]
    fn empty_vectors_stay_off_the_wire() {
        let rule = RecurrenceRule::new(Frequency::Monthly, 1);
        let json = serde_json::to_string(&rule).unwrap();
        assert_eq!(json, r#"{"frequency":"monthly","interval":1}"#);
    }
}
