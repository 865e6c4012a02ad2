use anyhow::Result;
use calsync_core::settings::Settings;

pub fn run() -> Result<()> {
    let settings = Settings::load()?;
    println!("{}", serde_json::to_string_pretty(&settings.syncs)?);
    Ok(())
}
