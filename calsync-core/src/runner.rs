//! Running every configured sync in one pass.

use chrono::{DateTime, Utc};

use crate::engine::{run_sync, SyncOutcome};
use crate::error::{CalSyncError, CalSyncResult};
use crate::settings::SyncDefinition;
use crate::store::EventStore;

/// One definition's result within a pass.
#[derive(Debug)]
pub struct DefinitionReport {
    pub definition: SyncDefinition,
    pub result: CalSyncResult<SyncOutcome>,
}

/// Results for a whole pass, in the definitions' persisted order.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub reports: Vec<DefinitionReport>,
}

impl RunSummary {
    pub fn total_deleted(&self) -> usize {
        self.outcomes().map(|outcome| outcome.deleted).sum()
    }

    pub fn total_created(&self) -> usize {
        self.outcomes().map(|outcome| outcome.created).sum()
    }

    /// Definitions that failed outright (as opposed to contained
    /// per-event failures).
    pub fn skipped(&self) -> usize {
        self.reports
            .iter()
            .filter(|report| report.result.is_err())
            .count()
    }

    fn outcomes(&self) -> impl Iterator<Item = &SyncOutcome> {
        self.reports
            .iter()
            .filter_map(|report| report.result.as_ref().ok())
    }
}

/// Run every definition against the store, sequentially.
///
/// Access is requested and awaited before anything else; a denied grant
/// aborts the pass with nothing touched. Definitions may share a
/// destination calendar, so they run one after another rather than
/// interleaved. A definition that fails outright (typically a stale
/// calendar reference) is reported and skipped; the rest still run.
pub async fn run_all(
    store: &dyn EventStore,
    definitions: &[SyncDefinition],
    today: DateTime<Utc>,
) -> CalSyncResult<RunSummary> {
    if !store.request_access().await? {
        return Err(CalSyncError::AccessDenied);
    }

    let calendars = store.calendars().await?;

    let mut summary = RunSummary::default();
    for definition in definitions {
        let result = run_sync(store, &calendars, definition, today).await;
        summary.reports.push(DefinitionReport {
            definition: definition.clone(),
            result,
        });
    }

    Ok(summary)
}
