//! TUI rendering for run results.
//!
//! Extension traits that add colored terminal rendering to calsync-core
//! types using owo_colors.

use calsync_core::engine::{EventOp, SyncOutcome};
use calsync_core::runner::{DefinitionReport, RunSummary};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for SyncOutcome {
    fn render(&self) -> String {
        let mut lines = Vec::new();

        if self.deleted > 0 {
            let label = format!(
                "{} stale {} removed",
                self.deleted,
                pluralize("copy", self.deleted)
            );
            lines.push(format!("   {} {}", "-".red(), label.red()));
        }
        if self.created > 0 {
            let label = format!(
                "{} {} mirrored",
                self.created,
                pluralize("event", self.created)
            );
            lines.push(format!("   {} {}", "+".green(), label.green()));
        }

        for failure in &self.failures {
            let verb = match failure.op {
                EventOp::Delete => "delete",
                EventOp::Save => "save",
            };
            let message = format!(
                "could not {} \"{}\": {}",
                verb, failure.event_title, failure.message
            );
            lines.push(format!("   {}", message.red()));
        }

        if self.dropped_alarms > 0 {
            let note = format!(
                "{} absolute-time {} dropped",
                self.dropped_alarms,
                pluralize("alarm", self.dropped_alarms)
            );
            lines.push(format!("   {}", note.dimmed()));
        }

        if lines.is_empty() {
            lines.push(format!("   {}", "Nothing to mirror".dimmed()));
        }

        lines.join("\n")
    }
}

impl Render for DefinitionReport {
    fn render(&self) -> String {
        match &self.result {
            Ok(outcome) => format!(
                "📅 {} → {}\n{}",
                outcome.pull_title,
                outcome.push_title,
                outcome.render()
            ),
            Err(e) => format!(
                "📅 {} → {}\n   {}",
                self.definition.pull_calendar_title,
                self.definition.push_calendar_title,
                e.to_string().red()
            ),
        }
    }
}

impl Render for RunSummary {
    fn render(&self) -> String {
        let blocks: Vec<String> = self.reports.iter().map(|report| report.render()).collect();
        let mut out = blocks.join("\n\n");

        let created = self.total_created();
        let deleted = self.total_deleted();
        if created > 0 || deleted > 0 {
            out.push_str(&format!(
                "\n\nMirrored {} {}, removed {} stale {}",
                created,
                pluralize("event", created),
                deleted,
                pluralize("copy", deleted)
            ));
        }

        let skipped = self.skipped();
        if skipped > 0 {
            let note = format!("{} {} skipped", skipped, pluralize("sync", skipped));
            out.push_str(&format!("\n{}", note.red()));
        }

        out
    }
}

/// Simple pluralization helper
fn pluralize(word: &str, count: usize) -> &str {
    if count == 1 {
        word
    } else {
        match word {
            "event" => "events",
            "copy" => "copies",
            "alarm" => "alarms",
            "sync" => "syncs",
            _ => word,
        }
    }
}
