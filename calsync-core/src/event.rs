//! Provider-neutral calendar and event types.
//!
//! These types represent calendars and events in a provider-agnostic way.
//! Providers convert their native objects into them, and the sync engine
//! works exclusively with them. Every field is an owned value, so a copy
//! built from a source event shares no state with the source.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::recurrence::RecurrenceRule;

/// A calendar as reported by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarRef {
    /// Provider-assigned identifier, stable across renames.
    pub identifier: String,
    /// Human-readable title. Goes stale if the user renames the calendar,
    /// so it is never used for lookup.
    pub title: String,
    /// Owning account name (e.g. "iCloud"), for display only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// A calendar event as reported by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub calendar_id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,

    // Descriptive extras
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default)]
    pub all_day: bool,
    #[serde(default)]
    pub availability: Availability,

    // Recurrence & alarms
    /// Recurrence rules of the master event, empty for one-off events.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recurrence_rules: Vec<RecurrenceRule>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alarms: Vec<Alarm>,
}

impl Event {
    pub fn is_recurring(&self) -> bool {
        !self.recurrence_rules.is_empty()
    }
}

/// A new event to be created in a destination calendar.
///
/// Same shape as [`Event`] minus the provider-assigned id. Notes are not
/// optional here: every draft the engine produces is tagged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDraft {
    pub calendar_id: String,
    pub title: String,
    pub notes: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default)]
    pub all_day: bool,
    #[serde(default)]
    pub availability: Availability,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recurrence_rules: Vec<RecurrenceRule>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alarms: Vec<Alarm>,
}

/// Whether an event blocks time on the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    #[default]
    Busy,
    Free,
    Tentative,
    Unavailable,
}

/// A reminder attached to an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Alarm {
    /// Fires at an offset from the event start; negative offsets fire
    /// before the event.
    Relative { offset_minutes: i64 },
    /// Fires at a fixed instant, independent of the event. These cannot
    /// be carried onto a copy, so mirroring drops them.
    Absolute { at: DateTime<Utc> },
}

impl Alarm {
    pub fn is_relative(&self) -> bool {
        matches!(self, Alarm::Relative { .. })
    }
}

/// How a save applies to a recurring series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveSpan {
    /// This occurrence only.
    ThisEvent,
    /// This occurrence and all future ones.
    FutureEvents,
}
