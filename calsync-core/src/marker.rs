//! Recognizing the engine's own artifacts.
//!
//! Every event calsync creates carries a sentinel line in its notes. The
//! same predicate drives the teardown pass (find previously mirrored
//! copies to delete) and the authenticity filter (never mirror our own
//! output), so a sync whose pull and push calendars coincide cannot feed
//! on itself.

use crate::event::Event;

/// Sentinel embedded in the notes of every mirrored event.
pub const MARKER: &str = "Made by CalSync";

/// Whether calsync created this event.
///
/// Case-sensitive substring match, so users can append their own text to
/// a mirrored event's notes without un-tagging it.
pub fn is_mirrored(event: &Event) -> bool {
    event
        .notes
        .as_deref()
        .is_some_and(|notes| notes.contains(MARKER))
}

/// Notes for a mirrored copy.
///
/// Privacy mode keeps the marker alone. Fidelity mode appends the source
/// notes after a blank line, or nothing when the source had none.
pub fn tagged_notes(source_notes: Option<&str>, privacy: bool) -> String {
    if privacy {
        MARKER.to_string()
    } else {
        format!("{}\n\n{}", MARKER, source_notes.unwrap_or(""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Availability;
    use chrono::{TimeZone, Utc};

    fn event_with_notes(notes: Option<&str>) -> Event {
        Event {
            id: "e1".to_string(),
            calendar_id: "cal-1".to_string(),
            title: "Lunch".to_string(),
            notes: notes.map(str::to_string),
            start: Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2024, 1, 10, 13, 0, 0).unwrap(),
            location: None,
            url: None,
            all_day: false,
            availability: Availability::Busy,
            recurrence_rules: Vec::new(),
            alarms: Vec::new(),
        }
    }

    // --- detection ---

    #[test]
    fn detects_exact_marker() {
        assert!(is_mirrored(&event_with_notes(Some("Made by CalSync"))));
    }

    #[test]
    fn detects_marker_with_surrounding_text() {
        assert!(is_mirrored(&event_with_notes(Some(
            "Made by CalSync\n\nbring the x-rays"
        ))));
        assert!(is_mirrored(&event_with_notes(Some(
            "edited later\nMade by CalSync"
        ))));
    }

    #[test]
    fn ignores_events_without_the_marker() {
        assert!(!is_mirrored(&event_with_notes(None)));
        assert!(!is_mirrored(&event_with_notes(Some(""))));
        assert!(!is_mirrored(&event_with_notes(Some("a normal meeting"))));
    }

    #[test]
    fn marker_match_is_case_sensitive() {
        assert!(!is_mirrored(&event_with_notes(Some("made by calsync"))));
        assert!(!is_mirrored(&event_with_notes(Some("MADE BY CALSYNC"))));
    }

    // --- tagging ---

    #[test]
    fn privacy_notes_are_marker_only() {
        assert_eq!(tagged_notes(Some("secret agenda"), true), MARKER);
        assert_eq!(tagged_notes(None, true), MARKER);
    }

    #[test]
    fn fidelity_notes_keep_source_content_below_the_marker() {
        assert_eq!(
            tagged_notes(Some("bring the x-rays"), false),
            "Made by CalSync\n\nbring the x-rays"
        );
        assert_eq!(tagged_notes(None, false), "Made by CalSync\n\n");
    }

    #[test]
    fn tagged_notes_always_satisfy_the_detector() {
        for (notes, privacy) in [(Some("x"), true), (Some("x"), false), (None, false)] {
            let mut event = event_with_notes(None);
            event.notes = Some(tagged_notes(notes, privacy));
            assert!(is_mirrored(&event));
        }
    }
}
