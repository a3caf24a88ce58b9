//! Which event is on display.

use tracing::debug;

use crate::error::{EventClockError, EventClockResult};
use crate::event::{Event, EventId};
use crate::store::EventStore;

/// Position of the displayed event in its store.
///
/// Positions are stable because the store never removes events, so a
/// selection keeps pointing at the same logical event across date edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    position: usize,
}

impl Selection {
    /// Select the first event of a store.
    pub fn first() -> Self {
        Selection { position: 0 }
    }

    pub fn select(&mut self, store: &EventStore, id: EventId) -> EventClockResult<()> {
        self.position = store
            .position(id)
            .ok_or(EventClockError::EventNotFound(id))?;
        debug!(%id, "selected event");
        Ok(())
    }

    /// The selected event. `store` must be the non-empty store it was selected from.
    pub fn current<'a>(&self, store: &'a EventStore) -> &'a Event {
        &store.as_slice()[self.position]
    }
}
