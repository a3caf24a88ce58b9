//! Error types for eventclock.

use thiserror::Error;

use crate::event::EventId;

/// Errors that can occur in eventclock operations.
#[derive(Error, Debug)]
pub enum EventClockError {
    #[error("Event name cannot be blank")]
    BlankName,

    #[error("Invalid date '{0}'. Expected YYYY-MM-DDTHH:MM")]
    InvalidDate(String),

    #[error("Invalid image reference: {0}")]
    InvalidImage(String),

    #[error("No events to count down to")]
    NoEvents,

    #[error("Event not found: {0}")]
    EventNotFound(EventId),

    #[error("Cannot {action} while {mode}")]
    InvalidTransition {
        action: &'static str,
        mode: &'static str,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for eventclock operations.
pub type EventClockResult<T> = Result<T, EventClockError>;
