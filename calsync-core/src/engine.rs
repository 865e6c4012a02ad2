//! One sync definition, end to end.
//!
//! A run has three strictly ordered phases: resolve both calendar
//! references against the live calendar list, tear down every previously
//! mirrored event in the destination window, then recreate a copy of each
//! authentic source event. Teardown finishes before the first save, so a
//! re-run always starts from a clean slate instead of diffing against the
//! last one. A failed delete or save is recorded on the outcome and
//! skipped, never fatal for the rest of the definition.

use chrono::{DateTime, Utc};

use crate::error::{CalSyncError, CalSyncResult};
use crate::event::CalendarRef;
use crate::materialize::{dropped_alarms, materialize, span_for};
use crate::settings::SyncDefinition;
use crate::store::EventStore;
use crate::window::{authentic_events_in_window, mirrored_events_in_window, SyncWindow};

/// Which store operation a contained failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOp {
    Delete,
    Save,
}

/// A per-event failure that was contained rather than aborting the run.
#[derive(Debug, Clone)]
pub struct EventFailure {
    pub op: EventOp,
    pub event_title: String,
    pub message: String,
}

/// What one definition's run did.
#[derive(Debug, Clone)]
pub struct SyncOutcome {
    pub pull_title: String,
    pub push_title: String,
    /// Mirrored events removed by teardown.
    pub deleted: usize,
    /// Fresh copies created.
    pub created: usize,
    /// Absolute-time alarms that could not be carried onto copies.
    pub dropped_alarms: usize,
    pub failures: Vec<EventFailure>,
}

/// Run a single sync definition against the store.
///
/// `calendars` is the live calendar list (fetched once per pass, not per
/// definition) and `today` the start of the mirror window. Fails whole if
/// either calendar reference no longer resolves or a window query errors;
/// individual delete/save failures are contained in the outcome.
pub async fn run_sync(
    store: &dyn EventStore,
    calendars: &[CalendarRef],
    definition: &SyncDefinition,
    today: DateTime<Utc>,
) -> CalSyncResult<SyncOutcome> {
    let pull = find_calendar(calendars, &definition.pull_calendar_identifier)?;
    let push = find_calendar(calendars, &definition.push_calendar_identifier)?;

    let window = SyncWindow::new(today, definition.num_days);
    let mut outcome = SyncOutcome {
        pull_title: pull.title.clone(),
        push_title: push.title.clone(),
        deleted: 0,
        created: 0,
        dropped_alarms: 0,
        failures: Vec::new(),
    };

    // Clear out previously mirrored events over the window.
    let stale = mirrored_events_in_window(store, &push.identifier, window).await?;
    for event in &stale {
        match store.delete_event(&event.calendar_id, &event.id).await {
            Ok(()) => outcome.deleted += 1,
            Err(e) => outcome.failures.push(EventFailure {
                op: EventOp::Delete,
                event_title: event.title.clone(),
                message: e.to_string(),
            }),
        }
    }

    // Recreate a copy of each authentic source event.
    let sources = authentic_events_in_window(store, &pull.identifier, window).await?;
    for event in &sources {
        let draft = materialize(event, push, definition.privacy_title());
        match store.save_event(&draft, span_for(&draft)).await {
            Ok(()) => {
                outcome.created += 1;
                outcome.dropped_alarms += dropped_alarms(event);
            }
            Err(e) => outcome.failures.push(EventFailure {
                op: EventOp::Save,
                event_title: event.title.clone(),
                message: e.to_string(),
            }),
        }
    }

    Ok(outcome)
}

fn find_calendar<'a>(
    calendars: &'a [CalendarRef],
    identifier: &str,
) -> CalSyncResult<&'a CalendarRef> {
    calendars
        .iter()
        .find(|calendar| calendar.identifier == identifier)
        .ok_or_else(|| CalSyncError::CalendarNotFound(identifier.to_string()))
}
