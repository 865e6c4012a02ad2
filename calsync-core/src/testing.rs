//! In-memory event store for engine tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::{CalSyncError, CalSyncResult};
use crate::event::{CalendarRef, Event, EventDraft, SaveSpan};
use crate::store::EventStore;

/// An [`EventStore`] backed by in-memory maps, with injectable failures.
pub struct MemoryStore {
    pub grant_access: bool,
    /// Drafts with these titles fail to save.
    pub fail_saves_titled: Vec<String>,
    /// Events with these ids fail to delete.
    pub fail_deletes: Vec<String>,
    calendars: Vec<CalendarRef>,
    events: Mutex<HashMap<String, Vec<Event>>>,
    next_id: Mutex<u64>,
    saved_spans: Mutex<Vec<SaveSpan>>,
}

impl MemoryStore {
    pub fn new(calendars: Vec<CalendarRef>) -> Self {
        MemoryStore {
            grant_access: true,
            fail_saves_titled: Vec::new(),
            fail_deletes: Vec::new(),
            calendars,
            events: Mutex::new(HashMap::new()),
            next_id: Mutex::new(0),
            saved_spans: Mutex::new(Vec::new()),
        }
    }

    /// Seed an event directly, keeping its id.
    pub fn insert(&self, event: Event) {
        let mut events = self.events.lock().unwrap();
        events
            .entry(event.calendar_id.clone())
            .or_default()
            .push(event);
    }

    /// Snapshot of one calendar's events, in insertion order.
    pub fn events_on(&self, calendar_id: &str) -> Vec<Event> {
        let events = self.events.lock().unwrap();
        events.get(calendar_id).cloned().unwrap_or_default()
    }

    /// Spans passed to `save_event`, in call order.
    pub fn saved_spans(&self) -> Vec<SaveSpan> {
        self.saved_spans.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventStore for MemoryStore {
    async fn request_access(&self) -> CalSyncResult<bool> {
        Ok(self.grant_access)
    }

    async fn calendars(&self) -> CalSyncResult<Vec<CalendarRef>> {
        Ok(self.calendars.clone())
    }

    async fn events(
        &self,
        calendar_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> CalSyncResult<Vec<Event>> {
        let events = self.events.lock().unwrap();
        Ok(events
            .get(calendar_id)
            .map(|list| {
                list.iter()
                    .filter(|event| event.start < end && event.end > start)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn delete_event(&self, calendar_id: &str, event_id: &str) -> CalSyncResult<()> {
        if self.fail_deletes.iter().any(|id| id == event_id) {
            return Err(CalSyncError::Provider(format!(
                "injected delete failure for {event_id}"
            )));
        }
        let mut events = self.events.lock().unwrap();
        let list = events
            .get_mut(calendar_id)
            .ok_or_else(|| CalSyncError::CalendarNotFound(calendar_id.to_string()))?;
        let position = list
            .iter()
            .position(|event| event.id == event_id)
            .ok_or_else(|| CalSyncError::Provider(format!("no event {event_id}")))?;
        list.remove(position);
        Ok(())
    }

    async fn save_event(&self, draft: &EventDraft, span: SaveSpan) -> CalSyncResult<()> {
        if self.fail_saves_titled.contains(&draft.title) {
            return Err(CalSyncError::Provider(format!(
                "injected save failure for '{}'",
                draft.title
            )));
        }
        let id = {
            let mut next_id = self.next_id.lock().unwrap();
            *next_id += 1;
            format!("mirror-{}", *next_id)
        };
        self.saved_spans.lock().unwrap().push(span);
        self.insert(Event {
            id,
            calendar_id: draft.calendar_id.clone(),
            title: draft.title.clone(),
            notes: Some(draft.notes.clone()),
            start: draft.start,
            end: draft.end,
            location: draft.location.clone(),
            url: draft.url.clone(),
            all_day: draft.all_day,
            availability: draft.availability,
            recurrence_rules: draft.recurrence_rules.clone(),
            alarms: draft.alarms.clone(),
        });
        Ok(())
    }
}
