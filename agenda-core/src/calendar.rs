//! Mapping between wire events and calendar-renderable entries.

use crate::event::Event;

/// Separator transform from the wire form ("YYYY-MM-DD HH:MM") to the
/// T-separated form ("YYYY-MM-DDTHH:MM") calendar widgets and
/// datetime-local inputs expect. Only the first space is replaced;
/// times never contain a second one.
pub fn wire_to_iso(s: &str) -> String {
    s.replacen(' ', "T", 1)
}

/// Inverse transform: only the first 'T' goes back to a space.
pub fn iso_to_wire(s: &str) -> String {
    s.replacen('T', " ", 1)
}

/// Read-only calendar rendering of one event.
///
/// Derived from and owned by its source [`Event`]; never mutated
/// independently of it.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEntry {
    /// Stringified backend id. `None` for unsaved events, which should
    /// never reach the calendar in the first place.
    pub id: Option<String>,
    pub title: String,
    /// Start/end in T-separated form.
    pub start: String,
    pub end: String,
    pub all_day: bool,
    /// The originating event, embedded so an interaction can recover
    /// the full record without re-parsing.
    pub event: Event,
}

/// Map one wire event into its calendar rendering.
pub fn to_calendar_entry(event: &Event) -> CalendarEntry {
    CalendarEntry {
        id: event.id.map(|id| id.to_string()),
        title: event.title.clone(),
        start: wire_to_iso(&event.start_at),
        end: wire_to_iso(&event.end_at),
        all_day: false,
        event: event.clone(),
    }
}

/// What the user did on the calendar.
///
/// Clicking an existing entry hands back the embedded event directly (a
/// lookup, not a data transform). Selecting a blank slot yields only
/// the starting instant used to seed a new draft.
#[derive(Debug, Clone, PartialEq)]
pub enum CalendarInteraction {
    ClickedEntry(Event),
    SelectedSlot(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Participant;

    fn sample_event() -> Event {
        Event {
            id: Some(42),
            title: "Planning".to_string(),
            description: "Q3".to_string(),
            location: "HQ".to_string(),
            start_at: "2024-06-10 09:00".to_string(),
            end_at: "2024-06-10 10:30".to_string(),
            participants: vec![Participant {
                id: Some(1),
                last_name: "Durand".to_string(),
                first_name: "Paul".to_string(),
                email: "paul@example.com".to_string(),
            }],
        }
    }

    #[test]
    fn entry_carries_id_title_and_t_separated_times() {
        let entry = to_calendar_entry(&sample_event());
        assert_eq!(entry.id.as_deref(), Some("42"));
        assert_eq!(entry.title, "Planning");
        assert_eq!(entry.start, "2024-06-10T09:00");
        assert_eq!(entry.end, "2024-06-10T10:30");
        assert!(!entry.all_day);
        assert_eq!(entry.event, sample_event());
    }

    #[test]
    fn unsaved_event_yields_entry_without_id() {
        let mut event = sample_event();
        event.id = None;
        assert_eq!(to_calendar_entry(&event).id, None);
    }

    #[test]
    fn transforms_touch_only_the_first_separator() {
        assert_eq!(wire_to_iso("2024-06-10 09:00"), "2024-06-10T09:00");
        assert_eq!(iso_to_wire("2024-06-10T09:00"), "2024-06-10 09:00");
        // Contrived inputs with a second separator stay untouched past
        // the first occurrence.
        assert_eq!(wire_to_iso("a b c"), "aTb c");
        assert_eq!(iso_to_wire("aTbTc"), "a bTc");
    }

    #[test]
    fn transforms_are_mutually_inverse_on_wire_shapes() {
        let wire = "2024-06-10 09:00";
        assert_eq!(iso_to_wire(&wire_to_iso(wire)), wire);
    }
}
