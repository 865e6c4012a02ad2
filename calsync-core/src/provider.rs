//! Provider subprocess protocol.
//!
//! Calendar access goes through external provider binaries (e.g.
//! `calsync-provider-eventkit`) speaking JSON over stdin/stdout, so any
//! executable that implements the protocol can back a sync. Providers own
//! the platform calendar APIs and their permission prompts; calsync only
//! sees provider-neutral types and the granted/denied outcome.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::io::AsyncWriteExt;
use tokio::process::Command as TokioCommand;
use tokio::time::timeout;

use crate::error::{CalSyncError, CalSyncResult};
use crate::event::{CalendarRef, Event, EventDraft, SaveSpan};
use crate::protocol::{
    Command, CreateEvent, DeleteEvent, ListCalendars, ListEvents, ProviderCommand, Request,
    RequestAccess, Response,
};
use crate::store::EventStore;

const PROVIDER_TIMEOUT: Duration = Duration::from_secs(10);
/// Access requests can block on a system permission dialog.
const ACCESS_TIMEOUT: Duration = Duration::from_secs(300);

/// A provider binary, addressed by name.
#[derive(Clone, Debug)]
pub struct Provider(String);

impl Provider {
    pub fn from_name(name: &str) -> Self {
        Provider(name.to_string())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    fn binary_path(&self) -> CalSyncResult<std::path::PathBuf> {
        let binary_name = format!("calsync-provider-{}", self.0);
        let binary_path = which::which(&binary_name).map_err(|_| {
            CalSyncError::ProviderNotInstalled(format!(
                "Provider '{}' not found. Install it with:\n  cargo install {}",
                self.0, binary_name
            ))
        })?;
        Ok(binary_path)
    }

    /// Call a typed provider command and return the result.
    ///
    /// The response type is inferred from the command's associated type,
    /// ensuring compile-time type safety.
    async fn call<C: ProviderCommand>(&self, cmd: C) -> CalSyncResult<C::Response> {
        timeout(PROVIDER_TIMEOUT, self.call_raw(C::command(), cmd))
            .await
            .map_err(|_| CalSyncError::ProviderTimeout(PROVIDER_TIMEOUT.as_secs()))?
    }

    /// Like [`Self::call`], with the long timeout for commands that may
    /// wait on user interaction.
    async fn call_interactive<C: ProviderCommand>(&self, cmd: C) -> CalSyncResult<C::Response> {
        timeout(ACCESS_TIMEOUT, self.call_raw(C::command(), cmd))
            .await
            .map_err(|_| CalSyncError::ProviderTimeout(ACCESS_TIMEOUT.as_secs()))?
    }

    /// Low-level call that sends a command with params and deserializes
    /// the response.
    async fn call_raw<P: Serialize, R: DeserializeOwned>(
        &self,
        command: Command,
        params: P,
    ) -> CalSyncResult<R> {
        let params = serde_json::to_value(params)
            .map_err(|e| CalSyncError::Serialization(e.to_string()))?;
        let request = Request { command, params };
        let request_json = serde_json::to_string(&request)
            .map_err(|e| CalSyncError::Serialization(e.to_string()))?;

        let binary_path = self.binary_path()?;

        let mut child = TokioCommand::new(&binary_path)
            .stdin(std::process::Stdio::piped())
            .stdout(std::process::Stdio::piped())
            .stderr(std::process::Stdio::inherit())
            .spawn()
            .map_err(|e| {
                CalSyncError::Provider(format!("Failed to spawn {}: {}", binary_path.display(), e))
            })?;

        // Write request to stdin (unwrap safe: we piped stdin above)
        let mut stdin = child.stdin.take().unwrap();
        stdin
            .write_all(format!("{request_json}\n").as_bytes())
            .await?;
        drop(stdin);

        let output = child.wait_with_output().await?;

        if !output.status.success() {
            return Err(CalSyncError::Provider(format!(
                "Provider exited with status: {}",
                output.status.code().unwrap_or(-1)
            )));
        }

        let response_str = String::from_utf8_lossy(&output.stdout);
        if response_str.trim().is_empty() {
            return Err(CalSyncError::Provider(
                "Provider returned no response".into(),
            ));
        }

        let response: Response<R> = serde_json::from_str(&response_str)
            .map_err(|e| CalSyncError::Provider(format!("Failed to parse response: {}", e)))?;

        match response {
            Response::Success { data } => Ok(data),
            Response::Error { error } => Err(CalSyncError::Provider(error)),
        }
    }
}

#[async_trait]
impl EventStore for Provider {
    async fn request_access(&self) -> CalSyncResult<bool> {
        self.call_interactive(RequestAccess {}).await
    }

    async fn calendars(&self) -> CalSyncResult<Vec<CalendarRef>> {
        self.call(ListCalendars {}).await
    }

    async fn events(
        &self,
        calendar_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> CalSyncResult<Vec<Event>> {
        self.call(ListEvents {
            calendar_id: calendar_id.to_string(),
            from: start,
            to: end,
        })
        .await
    }

    async fn delete_event(&self, calendar_id: &str, event_id: &str) -> CalSyncResult<()> {
        self.call(DeleteEvent {
            calendar_id: calendar_id.to_string(),
            event_id: event_id.to_string(),
        })
        .await
    }

    async fn save_event(&self, draft: &EventDraft, span: SaveSpan) -> CalSyncResult<()> {
        self.call(CreateEvent {
            draft: draft.clone(),
            span,
        })
        .await
    }
}
