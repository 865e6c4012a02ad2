use anyhow::Result;
use calsync_core::event::CalendarRef;
use calsync_core::settings::{Settings, SyncDefinition};
use calsync_core::store::EventStore;
use dialoguer::{Input, Select};
use owo_colors::OwoColorize;

pub async fn run(provider_override: Option<&str>) -> Result<()> {
    println!("{}", crate::BANNER);

    let provider = super::resolve_provider(provider_override)?;

    if !provider.request_access().await? {
        anyhow::bail!("Access to the calendar data was not granted.");
    }

    let calendars = provider.calendars().await?;
    if calendars.is_empty() {
        anyhow::bail!("No calendars available.");
    }

    let pull = select_calendar("Pull events from", &calendars)?;
    let push = select_calendar("Push events to", &calendars)?;

    let num_days: i64 = Input::new()
        .with_prompt("How many days to sync")
        .default(30)
        .validate_with(|days: &i64| -> Result<(), &str> {
            if *days < 0 {
                Err("enter zero or more days")
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    let event_name: String = Input::new()
        .with_prompt("Generic event title (leave empty to mirror real titles)")
        .default(String::new())
        .show_default(false)
        .interact_text()?;
    let event_name = if event_name.is_empty() {
        None
    } else {
        Some(event_name)
    };

    let definition = SyncDefinition::new(pull, push, num_days, event_name);

    let mut settings = Settings::load()?;
    settings.append(definition.clone());
    settings.save()?;

    println!();
    println!("{}", format!("Added sync {}", definition.id).green());
    println!(
        "  {} → {}, next {} days",
        definition.pull_calendar_title, definition.push_calendar_title, definition.num_days
    );

    Ok(())
}

fn select_calendar<'a>(prompt: &str, calendars: &'a [CalendarRef]) -> Result<&'a CalendarRef> {
    let items: Vec<String> = calendars.iter().map(calendar_label).collect();
    let selection = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact()?;
    Ok(&calendars[selection])
}

/// Menu label for a calendar, with its owning account when known.
fn calendar_label(calendar: &CalendarRef) -> String {
    match &calendar.source {
        Some(source) => format!("{} - {}", calendar.title, source),
        None => calendar.title.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_include_the_account_when_present() {
        let calendar = CalendarRef {
            identifier: "cal-1".to_string(),
            title: "Work".to_string(),
            source: Some("iCloud".to_string()),
        };
        assert_eq!(calendar_label(&calendar), "Work - iCloud");

        let bare = CalendarRef {
            identifier: "cal-2".to_string(),
            title: "Personal".to_string(),
            source: None,
        };
        assert_eq!(calendar_label(&bare), "Personal");
    }
}
