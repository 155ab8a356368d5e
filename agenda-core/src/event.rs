//! Wire-format event types.
//!
//! These are the exact JSON shapes exchanged with the backend. The wire
//! uses the backend's French field names; the Rust structs use English
//! names and rename on (de)serialization. Datetimes travel as plain
//! `"YYYY-MM-DD HH:MM"` strings with no timezone and are only parsed
//! inside the date-window code.

use serde::{Deserialize, Serialize};

/// A scheduled event, the authoritative unit of the data model.
///
/// `id` is absent until the backend has persisted the event and must
/// not be serialized as `null` on create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "titre")]
    pub title: String,
    pub description: String,
    #[serde(rename = "lieu")]
    pub location: String,
    /// Start instant in wire format, e.g. "2024-06-10 09:00".
    #[serde(rename = "dateDebut")]
    pub start_at: String,
    /// End instant in wire format. Not validated against `start_at`.
    #[serde(rename = "dateFin")]
    pub end_at: String,
    /// Ordered for display only; participants have no lifecycle of
    /// their own outside the owning event.
    pub participants: Vec<Participant>,
}

/// A participant embedded in an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "nom")]
    pub last_name: String,
    #[serde(rename = "prenom")]
    pub first_name: String,
    pub email: String,
}

/// One page of the event collection plus pagination metadata.
///
/// Transient: recomputed on every fetch and never merged with a
/// previous page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventPage {
    pub events: Vec<Event>,
    pub total: i64,
    #[serde(rename = "currentPage")]
    pub current_page: u32,
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
}
