//! View orchestrators.
//!
//! One orchestrator per screen, each owning its own independent
//! snapshot of the event collection. A reload fully replaces the
//! snapshot before any dependent computation runs on it; two views
//! never share or synchronize state.

pub mod calendar;
pub mod dashboard;
pub mod list;
