//! Defines the JSON protocol used for communication between calsync
//! and provider binaries over stdin/stdout.

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::event::{CalendarRef, Event, EventDraft, SaveSpan};

pub trait ProviderCommand: Serialize {
    type Response: DeserializeOwned;
    fn command() -> Command;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    RequestAccess,
    ListCalendars,
    ListEvents,
    CreateEvent,
    DeleteEvent,
}

/// Request sent from calsync to the provider.
#[derive(Debug, Serialize, Deserialize)]
pub struct Request {
    pub command: Command,
    #[serde(default)]
    pub params: serde_json::Value,
}

/// Response sent from the provider to calsync.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Response<T> {
    Success { data: T },
    Error { error: String },
}

impl<T: Serialize> Response<T> {
    pub fn success(data: T) -> String {
        serde_json::to_string(&Response::Success { data }).unwrap()
    }
}

impl Response<()> {
    pub fn error(msg: &str) -> String {
        serde_json::to_string(&Response::<()>::Error {
            error: msg.to_string(),
        })
        .unwrap()
    }
}

/// Ensure the provider may read and write the user's calendars. The
/// provider may pop a system permission prompt; the response is whether
/// access ended up granted.
#[derive(Debug, Serialize, Deserialize)]
pub struct RequestAccess {}

impl ProviderCommand for RequestAccess {
    type Response = bool;
    fn command() -> Command {
        Command::RequestAccess
    }
}

/// List all calendars visible to the granted account.
#[derive(Debug, Serialize, Deserialize)]
pub struct ListCalendars {}

impl ProviderCommand for ListCalendars {
    type Response = Vec<CalendarRef>;
    fn command() -> Command {
        Command::ListCalendars
    }
}

/// List events on one calendar overlapping `[from, to)`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ListEvents {
    pub calendar_id: String,
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl ProviderCommand for ListEvents {
    type Response = Vec<Event>;
    fn command() -> Command {
        Command::ListEvents
    }
}

/// Create a new event from a draft.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateEvent {
    pub draft: EventDraft,
    pub span: SaveSpan,
}

impl ProviderCommand for CreateEvent {
    type Response = ();
    fn command() -> Command {
        Command::CreateEvent
    }
}

/// Delete one event.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteEvent {
    pub calendar_id: String,
    pub event_id: String,
}

impl ProviderCommand for DeleteEvent {
    type Response = ();
    fn command() -> Command {
        Command::DeleteEvent
    }
}
