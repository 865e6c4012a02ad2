use anyhow::Result;
use calsync_core::runner::run_all;
use calsync_core::settings::Settings;
use calsync_core::window::start_of_today;

use crate::render::Render;
use crate::utils::tui;

pub async fn run(provider_override: Option<&str>) -> Result<()> {
    let settings = Settings::load()?;

    if settings.syncs.is_empty() {
        println!(
            "No syncs configured.\n\n\
            Add your first one with:\n  \
            calsync add"
        );
        return Ok(());
    }

    let provider = super::resolve_provider(provider_override)?;

    let spinner = tui::create_spinner(format!(
        "Syncing {} {}",
        settings.syncs.len(),
        if settings.syncs.len() == 1 {
            "calendar pair"
        } else {
            "calendar pairs"
        }
    ));
    let summary = run_all(&provider, &settings.syncs, start_of_today()).await;
    spinner.finish_and_clear();

    println!("{}", summary?.render());

    Ok(())
}
