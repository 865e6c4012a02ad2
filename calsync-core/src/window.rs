//! The mirror window and range queries against a calendar.

use chrono::{DateTime, Duration, Local, LocalResult, Utc};

use crate::error::CalSyncResult;
use crate::event::Event;
use crate::marker::is_mirrored;
use crate::store::EventStore;

/// Half-open interval `[start, start + num_days)`.
#[derive(Debug, Clone, Copy)]
pub struct SyncWindow {
    pub start: DateTime<Utc>,
    pub num_days: i64,
}

impl SyncWindow {
    pub fn new(start: DateTime<Utc>, num_days: i64) -> Self {
        SyncWindow { start, num_days }
    }

    /// Concrete `[start, end)` bounds, or `None` for an empty window.
    /// `num_days <= 0` is empty rather than an error, so a misconfigured
    /// sync degrades to a no-op.
    pub fn range(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        if self.num_days <= 0 {
            return None;
        }
        Some((self.start, self.start + Duration::days(self.num_days)))
    }
}

/// Start of the current day in the local timezone, as a UTC instant.
pub fn start_of_today() -> DateTime<Utc> {
    let now = Local::now();
    let midnight = now.date_naive().and_hms_opt(0, 0, 0).unwrap();
    match midnight.and_local_timezone(Local) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
        // A DST gap swallowed local midnight; the day effectively starts now.
        LocalResult::None => now.with_timezone(&Utc),
    }
}

/// All events overlapping the window on one calendar. An empty window
/// never reaches the store.
pub async fn events_in_window(
    store: &dyn EventStore,
    calendar_id: &str,
    window: SyncWindow,
) -> CalSyncResult<Vec<Event>> {
    let Some((start, end)) = window.range() else {
        return Ok(Vec::new());
    };
    store.events(calendar_id, start, end).await
}

/// Window events calsync did not create: the mirroring candidates.
pub async fn authentic_events_in_window(
    store: &dyn EventStore,
    calendar_id: &str,
    window: SyncWindow,
) -> CalSyncResult<Vec<Event>> {
    let mut events = events_in_window(store, calendar_id, window).await?;
    events.retain(|event| !is_mirrored(event));
    Ok(events)
}

/// Window events calsync created earlier: the teardown candidates.
pub async fn mirrored_events_in_window(
    store: &dyn EventStore,
    calendar_id: &str,
    window: SyncWindow,
) -> CalSyncResult<Vec<Event>> {
    let mut events = events_in_window(store, calendar_id, window).await?;
    events.retain(is_mirrored);
    Ok(events)
}
