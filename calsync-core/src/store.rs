//! The calendar-store capability the engine runs against.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::CalSyncResult;
use crate::event::{CalendarRef, Event, EventDraft, SaveSpan};

/// Read/write access to a user's calendars.
///
/// The production implementation shells out to a provider binary (see
/// [`crate::provider`]); tests run against an in-memory store. Callers
/// must not issue queries, deletes, or saves until `request_access` has
/// resolved to `true`.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Ask the underlying store for permission to read and write events.
    /// May block on a user-facing permission prompt.
    async fn request_access(&self) -> CalSyncResult<bool>;

    /// All calendars visible to the granted account.
    async fn calendars(&self) -> CalSyncResult<Vec<CalendarRef>>;

    /// Events on one calendar overlapping `[start, end)`, in provider
    /// order. Recurring series are reported as their visible occurrences,
    /// each carrying the master's recurrence rules.
    async fn events(
        &self,
        calendar_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> CalSyncResult<Vec<Event>>;

    /// Delete one event.
    async fn delete_event(&self, calendar_id: &str, event_id: &str) -> CalSyncResult<()>;

    /// Create a new event from a draft.
    async fn save_event(&self, draft: &EventDraft, span: SaveSpan) -> CalSyncResult<()>;
}
