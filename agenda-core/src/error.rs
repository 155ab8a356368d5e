//! Error types for the agenda ecosystem.

use thiserror::Error;

/// Errors that can occur in agenda-core operations.
#[derive(Error, Debug)]
pub enum AgendaError {
    #[error("Invalid date/time '{0}': expected YYYY-MM-DD HH:MM")]
    InvalidDateTime(String),
}

/// Result type alias for agenda-core operations.
pub type AgendaResult<T> = Result<T, AgendaError>;
