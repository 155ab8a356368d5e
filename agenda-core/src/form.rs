//! Event form draft model.
//!
//! Holds the editable state of one event plus its variable-length list
//! of participant rows, decoupled from any rendering. Validation is a
//! pure function over the whole draft; serialization produces the wire
//! shape the backend expects.

use crate::calendar::{iso_to_wire, wire_to_iso};
use crate::event::{Event, Participant};

/// Time appended when a bare date ("YYYY-MM-DD") seeds a quick-create
/// draft from a calendar slot selection.
const DEFAULT_SLOT_TIME: &str = "10:00";

/// One editable participant row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParticipantDraft {
    /// Present when the row edits an already-persisted participant.
    pub id: Option<i64>,
    pub last_name: String,
    pub first_name: String,
    pub email: String,
}

impl ParticipantDraft {
    fn from_participant(participant: &Participant) -> Self {
        ParticipantDraft {
            id: participant.id,
            last_name: participant.last_name.clone(),
            first_name: participant.first_name.clone(),
            email: participant.email.clone(),
        }
    }

    fn serialize(&self) -> Participant {
        Participant {
            id: self.id,
            last_name: self.last_name.clone(),
            first_name: self.first_name.clone(),
            email: self.email.clone(),
        }
    }
}

/// A failed validation rule, addressed by a field path usable for
/// visual flagging (e.g. "participants[1].email").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: &'static str,
}

impl FieldError {
    fn new(field: impl Into<String>, message: &'static str) -> Self {
        FieldError {
            field: field.into(),
            message,
        }
    }
}

/// The in-progress, unpersisted edit state of one event.
///
/// Two entry states: create (no backing id) and edit (backing id
/// present, fields populated from an existing event). Datetime fields
/// hold the UI-local T-separated form until [`EventDraft::serialize`]
/// converts them back to the wire shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventDraft {
    id: Option<i64>,
    pub title: String,
    pub description: String,
    pub location: String,
    /// "YYYY-MM-DDTHH:MM"
    pub start_at: String,
    pub end_at: String,
    pub participants: Vec<ParticipantDraft>,
}

impl EventDraft {
    /// Fresh create-mode draft, with the one empty participant row a
    /// freshly opened form always shows.
    pub fn new() -> Self {
        let mut draft = EventDraft::default();
        draft.ensure_participant_row();
        draft
    }

    /// Create-mode draft seeded from a selected calendar slot.
    ///
    /// A bare "YYYY-MM-DD" selection gets a default 10:00 time; start
    /// and end are seeded with the same instant.
    pub fn with_initial_start(initial: &str) -> Self {
        let seeded = if initial.contains('T') {
            initial.to_string()
        } else {
            format!("{initial}T{DEFAULT_SLOT_TIME}")
        };
        let mut draft = EventDraft::new();
        draft.start_at = seeded.clone();
        draft.end_at = seeded;
        draft
    }

    /// Edit-mode draft populated field by field from an existing event,
    /// one row per existing participant with ids preserved.
    pub fn from_event(event: &Event) -> Self {
        let mut draft = EventDraft {
            id: event.id,
            title: event.title.clone(),
            description: event.description.clone(),
            location: event.location.clone(),
            start_at: wire_to_iso(&event.start_at),
            end_at: wire_to_iso(&event.end_at),
            participants: event
                .participants
                .iter()
                .map(ParticipantDraft::from_participant)
                .collect(),
        };
        draft.ensure_participant_row();
        draft
    }

    /// Whether the draft edits a persisted event.
    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    /// Backing id, present only in edit mode.
    pub fn id(&self) -> Option<i64> {
        self.id
    }

    /// Append one empty participant row.
    pub fn add_participant(&mut self) {
        self.participants.push(ParticipantDraft::default());
    }

    /// Remove the row at `index`. Out-of-range indices are ignored.
    /// Nothing stops the list from reaching zero rows mid-session.
    pub fn remove_participant(&mut self, index: usize) {
        if index < self.participants.len() {
            self.participants.remove(index);
        }
    }

    /// A freshly initialized form never shows zero participant rows.
    pub fn ensure_participant_row(&mut self) {
        if self.participants.is_empty() {
            self.add_participant();
        }
    }

    /// Check the whole draft. No request may be issued while this
    /// fails; the errors carry field paths for visual flagging.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.title.is_empty() {
            errors.push(FieldError::new("title", "title is required"));
        }
        if self.start_at.is_empty() {
            errors.push(FieldError::new("start_at", "start is required"));
        }
        if self.end_at.is_empty() {
            errors.push(FieldError::new("end_at", "end is required"));
        }

        for (i, participant) in self.participants.iter().enumerate() {
            if participant.last_name.is_empty() {
                errors.push(FieldError::new(
                    format!("participants[{i}].last_name"),
                    "last name is required",
                ));
            }
            if participant.first_name.is_empty() {
                errors.push(FieldError::new(
                    format!("participants[{i}].first_name"),
                    "first name is required",
                ));
            }
            if !is_valid_email(&participant.email) {
                errors.push(FieldError::new(
                    format!("participants[{i}].email"),
                    "a valid email address is required",
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Produce the wire-format event: datetimes back to the
    /// space-separated form, participant ids passed through (omitted
    /// for new rows), backing id attached only in edit mode.
    pub fn serialize(&self) -> Event {
        Event {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            location: self.location.clone(),
            start_at: iso_to_wire(&self.start_at),
            end_at: iso_to_wire(&self.end_at),
            participants: self.participants.iter().map(|p| p.serialize()).collect(),
        }
    }
}

/// Basic address shape check: non-empty local part, one '@', a dot
/// somewhere inside the domain, no whitespace.
fn is_valid_email(s: &str) -> bool {
    if s.contains(char::is_whitespace) {
        return false;
    }
    match s.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}
