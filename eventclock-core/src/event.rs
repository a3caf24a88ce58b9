//! Event records tracked by the countdown.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::image::ImageRef;

/// Identifier of an event, unique within an [`EventStore`](crate::store::EventStore).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub u32);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named occurrence with a target date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub name: String,
    pub description: String,
    /// The moment the countdown runs to. May be in the past.
    pub date: DateTime<Utc>,
    pub image: ImageRef,
    /// When the event entered the store. Start of its progress span.
    pub created_at: DateTime<Utc>,
}

/// Fields of an event that is about to be added.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEvent {
    pub name: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub image: ImageRef,
}

impl Event {
    pub fn new(id: EventId, fields: NewEvent, created_at: DateTime<Utc>) -> Self {
        Event {
            id,
            name: fields.name,
            description: fields.description,
            date: fields.date,
            image: fields.image,
            created_at,
        }
    }

    /// Whether the event date is at or before `now`.
    pub fn is_live(&self, now: DateTime<Utc>) -> bool {
        self.date <= now
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
