use anyhow::{Context, Result};
use calsync_core::settings::Settings;
use uuid::Uuid;

pub fn run(id: &str) -> Result<()> {
    let id = Uuid::parse_str(id).with_context(|| format!("'{id}' is not a valid sync id"))?;

    let mut settings = Settings::load()?;
    if settings.remove_by_id(&id) {
        settings.save()?;
        println!("Removed sync {}", id);
    } else {
        println!("No sync with id {}", id);
    }

    Ok(())
}
