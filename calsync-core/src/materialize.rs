//! Building mirrored copies of source events.

use crate::event::{CalendarRef, Event, EventDraft, SaveSpan};
use crate::marker::tagged_notes;

/// Build the draft for a mirrored copy of `source` in `destination`.
///
/// With an override title the copy is generic (privacy mode): the fixed
/// title plus marker-only notes. Without one it keeps the source title and
/// appends the source notes below the marker. Times, location, URL, the
/// all-day flag, and availability carry over either way, and recurrence
/// rules are cloned outright so the copy never aliases the source series.
/// Absolute-time alarms have no meaning on a rebuilt copy and are dropped;
/// [`dropped_alarms`] counts the loss.
pub fn materialize(
    source: &Event,
    destination: &CalendarRef,
    override_title: Option<&str>,
) -> EventDraft {
    let privacy = override_title.is_some();

    EventDraft {
        calendar_id: destination.identifier.clone(),
        title: override_title.unwrap_or(&source.title).to_string(),
        notes: tagged_notes(source.notes.as_deref(), privacy),
        start: source.start,
        end: source.end,
        location: source.location.clone(),
        url: source.url.clone(),
        all_day: source.all_day,
        availability: source.availability,
        recurrence_rules: source.recurrence_rules.clone(),
        alarms: source
            .alarms
            .iter()
            .filter(|alarm| alarm.is_relative())
            .cloned()
            .collect(),
    }
}

/// Alarms on `source` that a mirrored copy cannot carry.
pub fn dropped_alarms(source: &Event) -> usize {
    source
        .alarms
        .iter()
        .filter(|alarm| !alarm.is_relative())
        .count()
}

/// Span for saving a draft. A recurring draft is a freshly created series,
/// so the save must cover every future occurrence; one-offs save alone.
pub fn span_for(draft: &EventDraft) -> SaveSpan {
    if draft.recurrence_rules.is_empty() {
        SaveSpan::ThisEvent
    } else {
        SaveSpan::FutureEvents
    }
}
