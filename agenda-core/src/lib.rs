//! Core types and scheduling logic for the agenda client.
//!
//! This crate holds everything that touches neither the network nor a
//! terminal: the wire data model, date-window arithmetic, dashboard KPI
//! aggregation, calendar-entry mapping, the event form draft model and
//! pagination state. The binary crate wires these into HTTP calls and
//! rendering.

pub mod calendar;
pub mod date_window;
pub mod error;
pub mod event;
pub mod form;
pub mod kpi;
pub mod pagination;

// Re-export the wire types at crate root for convenience
pub use event::{Event, EventPage, Participant};
