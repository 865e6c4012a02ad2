//! Persisted sync definitions.
//!
//! The configured syncs live as pretty-printed JSON in the user's config
//! directory. Field names stay camelCase on disk so settings files written
//! by earlier generations of the tool keep loading. A missing file means
//! no syncs yet; an unreadable one is an error, never an empty list, so a
//! later save cannot silently clobber data we failed to read.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CalSyncError, CalSyncResult};
use crate::event::CalendarRef;

/// One configured mirror: events are pulled from a source calendar and
/// pushed into a destination calendar over a rolling window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncDefinition {
    /// Stable identity, only used to address the definition in `remove`.
    pub id: Uuid,
    pub pull_calendar_identifier: String,
    /// Cached for display; the identifier is authoritative.
    pub pull_calendar_title: String,
    pub push_calendar_identifier: String,
    pub push_calendar_title: String,
    /// Width of the mirror window, starting today. Zero or negative means
    /// an empty window.
    pub num_days: i64,
    /// Generic title for every mirrored event (privacy mode). Absent =
    /// mirror source titles and notes faithfully.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,
}

impl SyncDefinition {
    pub fn new(
        pull: &CalendarRef,
        push: &CalendarRef,
        num_days: i64,
        event_name: Option<String>,
    ) -> Self {
        SyncDefinition {
            id: Uuid::new_v4(),
            pull_calendar_identifier: pull.identifier.clone(),
            pull_calendar_title: pull.title.clone(),
            push_calendar_identifier: push.identifier.clone(),
            push_calendar_title: push.title.clone(),
            num_days,
            event_name,
        }
    }

    /// The title override, when privacy mode is on.
    pub fn privacy_title(&self) -> Option<&str> {
        self.event_name.as_deref()
    }
}

/// All configured syncs, in the order they were added.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub syncs: Vec<SyncDefinition>,
}

impl Settings {
    /// Path of the settings file (`<config dir>/calsync/settings.json`).
    pub fn path() -> CalSyncResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CalSyncError::Config("Could not determine config directory".into()))?;
        Ok(config_dir.join("calsync").join("settings.json"))
    }

    pub fn load() -> CalSyncResult<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load from an explicit path. A missing file is an empty list.
    pub fn load_from(path: &Path) -> CalSyncResult<Self> {
        if !path.exists() {
            return Ok(Settings::default());
        }
        let contents = std::fs::read_to_string(path).map_err(|e| {
            CalSyncError::Settings(format!("Could not read {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&contents).map_err(|e| {
            CalSyncError::Settings(format!("Could not parse {}: {}", path.display(), e))
        })
    }

    pub fn save(&self) -> CalSyncResult<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> CalSyncResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CalSyncError::Settings(format!("Could not create {}: {}", parent.display(), e))
            })?;
        }
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| CalSyncError::Serialization(e.to_string()))?;
        std::fs::write(path, contents).map_err(|e| {
            CalSyncError::Settings(format!("Could not write {}: {}", path.display(), e))
        })
    }

    pub fn append(&mut self, definition: SyncDefinition) {
        self.syncs.push(definition);
    }

    /// Remove the definition with this id. Returns whether one existed.
    pub fn remove_by_id(&mut self, id: &Uuid) -> bool {
        let before = self.syncs.len();
        self.syncs.retain(|sync| sync.id != *id);
        self.syncs.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn calendar(identifier: &str, title: &str) -> CalendarRef {
        CalendarRef {
            identifier: identifier.to_string(),
            title: title.to_string(),
            source: None,
        }
    }

    fn sample_definition() -> SyncDefinition {
        SyncDefinition::new(
            &calendar("cal-work", "Work"),
            &calendar("cal-personal", "Personal"),
            30,
            Some("Busy".to_string()),
        )
    }

    #[test]
    fn missing_file_means_no_syncs() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::load_from(&dir.path().join("settings.json")).unwrap();
        assert!(settings.syncs.is_empty());
    }

    #[test]
    fn corrupt_file_is_an_error_not_an_empty_list() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{not json").unwrap();

        let result = Settings::load_from(&path);
        assert!(matches!(result, Err(CalSyncError::Settings(_))));
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let mut settings = Settings::default();
        settings.append(sample_definition());
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded.syncs, settings.syncs);
    }

    #[test]
    fn disk_format_uses_camel_case_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");

        let mut settings = Settings::default();
        settings.append(sample_definition());
        settings.save_to(&path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\"pullCalendarIdentifier\""));
        assert!(contents.contains("\"numDays\""));
        assert!(contents.contains("\"eventName\""));
        assert!(!contents.contains("pull_calendar_identifier"));
    }

    #[test]
    fn loads_files_written_before_event_name_existed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(
            &path,
            r#"{
                "syncs": [{
                    "id": "6ED9EB24-5A34-4312-9205-7F111BD1E1E9",
                    "pullCalendarIdentifier": "cal-work",
                    "pullCalendarTitle": "Work",
                    "pushCalendarIdentifier": "cal-personal",
                    "pushCalendarTitle": "Personal",
                    "numDays": 30
                }]
            }"#,
        )
        .unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.syncs.len(), 1);
        assert_eq!(settings.syncs[0].num_days, 30);
        assert_eq!(settings.syncs[0].event_name, None);
    }

    #[test]
    fn remove_by_id_reports_whether_anything_matched() {
        let mut settings = Settings::default();
        let definition = sample_definition();
        let id = definition.id;
        settings.append(definition);

        assert!(settings.remove_by_id(&id));
        assert!(settings.syncs.is_empty());
        assert!(!settings.remove_by_id(&id));
    }
}
