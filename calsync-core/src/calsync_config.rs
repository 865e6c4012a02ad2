//! Global calsync configuration.

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::Deserialize;

use crate::error::{CalSyncError, CalSyncResult};

static DEFAULT_PROVIDER: &str = "eventkit";

fn default_provider() -> String {
    DEFAULT_PROVIDER.to_string()
}

/// Global configuration at ~/.config/calsync/config.toml
///
/// Sync definitions are stored separately in settings.json; this file only
/// holds machine-level choices.
#[derive(Debug, Clone, Deserialize)]
pub struct CalsyncConfig {
    /// Which provider binary to use (`calsync-provider-<name>`).
    #[serde(default = "default_provider")]
    pub provider: String,
}

impl Default for CalsyncConfig {
    fn default() -> Self {
        CalsyncConfig {
            provider: default_provider(),
        }
    }
}

impl CalsyncConfig {
    pub fn config_path() -> CalSyncResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CalSyncError::Config("Could not determine config directory".into()))?
            .join("calsync");

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> CalSyncResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> CalSyncResult<Self> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .build()
            .map_err(|e| CalSyncError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CalSyncError::Config(e.to_string()))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CalSyncResult<()> {
        let contents = format!(
            "\
# calsync configuration

# Which provider binary to sync through (calsync-provider-<name>):
# provider = \"{}\"
",
            DEFAULT_PROVIDER
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CalSyncError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CalSyncError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
