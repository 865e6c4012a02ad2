pub mod add;
pub mod list;
pub mod remove;
pub mod run;

use anyhow::Result;
use calsync_core::calsync_config::CalsyncConfig;
use calsync_core::provider::Provider;

/// Provider binary to sync through: the `--provider` flag when given,
/// otherwise the configured default.
pub fn resolve_provider(provider_override: Option<&str>) -> Result<Provider> {
    let name = match provider_override {
        Some(name) => name.to_string(),
        None => CalsyncConfig::load()?.provider,
    };
    Ok(Provider::from_name(&name))
}
