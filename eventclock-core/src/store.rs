//! In-memory event store.
//!
//! Events are kept in insertion order and are never removed. Identifiers come
//! from a counter that only moves forward, so they stay unique even if the
//! store is seeded with non-contiguous ids.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::error::{EventClockError, EventClockResult};
use crate::event::{Event, EventId, NewEvent};

#[derive(Debug, Clone)]
pub struct EventStore {
    events: Vec<Event>,
    next_id: u32,
}

impl EventStore {
    pub fn new() -> Self {
        EventStore {
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Build a store from existing events, keeping their order and ids.
    pub fn with_events(events: Vec<Event>) -> Self {
        let next_id = events.iter().map(|e| e.id.0).max().map_or(1, |max| max + 1);
        EventStore { events, next_id }
    }

    /// Append a new event. Field values are stored as given.
    pub fn add(&mut self, fields: NewEvent, created_at: DateTime<Utc>) -> &Event {
        let id = EventId(self.next_id);
        self.next_id += 1;

        debug!(%id, name = %fields.name, date = %fields.date, "adding event");
        self.events.push(Event::new(id, fields, created_at));
        &self.events[self.events.len() - 1]
    }

    /// Replace the date of an event, leaving its other fields untouched.
    pub fn update_date(&mut self, id: EventId, date: DateTime<Utc>) -> EventClockResult<&Event> {
        let event = self
            .events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(EventClockError::EventNotFound(id))?;

        debug!(%id, from = %event.date, to = %date, "updating event date");
        event.date = date;
        Ok(&*event)
    }

    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub(crate) fn position(&self, id: EventId) -> Option<usize> {
        self.events.iter().position(|e| e.id == id)
    }

    pub fn first(&self) -> Option<&Event> {
        self.events.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    pub fn as_slice(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl Default for EventStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ImageRef;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
    }

    fn fields(name: &str) -> NewEvent {
        NewEvent {
            name: name.to_string(),
            description: format!("{name} description"),
            date: now() + Duration::days(10),
            image: ImageRef::Placeholder,
        }
    }

    #[test]
    fn add_assigns_sequential_ids() {
        let mut store = EventStore::new();
        assert_eq!(store.add(fields("a"), now()).id, EventId(1));
        assert_eq!(store.add(fields("b"), now()).id, EventId(2));
        assert_eq!(store.len(), 2);
        let names: Vec<_> = store.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn add_accepts_any_field_values() {
        let mut store = EventStore::new();
        let past = NewEvent {
            name: String::new(),
            description: String::new(),
            date: now() - Duration::days(400),
            image: ImageRef::Placeholder,
        };
        let added = store.add(past.clone(), now());
        assert_eq!(added.name, "");
        assert_eq!(added.date, past.date);
    }

    #[test]
    fn ids_continue_after_seeded_events() {
        let mut seeded = EventStore::new();
        seeded.add(fields("a"), now());
        seeded.add(fields("b"), now());
        seeded.add(fields("c"), now());

        let mut store = EventStore::with_events(seeded.as_slice().to_vec());
        assert_eq!(store.add(fields("d"), now()).id, EventId(4));
    }

    #[test]
    fn update_date_preserves_identity() {
        let mut store = EventStore::new();
        let original = store.add(fields("a"), now()).clone();
        let new_date = now() + Duration::days(42);

        let updated = store.update_date(original.id, new_date).unwrap().clone();
        assert_eq!(updated.date, new_date);
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.name, original.name);
        assert_eq!(updated.description, original.description);
        assert_eq!(updated.image, original.image);
        assert_eq!(store.get(original.id), Some(&updated));
    }

    #[test]
    fn update_date_unknown_id() {
        let mut store = EventStore::new();
        let err = store.update_date(EventId(9), now()).unwrap_err();
        assert!(matches!(err, EventClockError::EventNotFound(EventId(9))));
    }
}
