//! The countdown widget's state.
//!
//! [`Widget`] owns the event store, the selection and the interaction mode.
//! Every change goes through one of its methods, or through [`Widget::apply`]
//! with an [`Action`]; there is no other write path.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::config::EventClockConfig;
use crate::datetime;
use crate::error::{EventClockError, EventClockResult};
use crate::event::{Event, EventId, NewEvent};
use crate::mode::{DateEdit, EventDraft, Mode};
use crate::selection::Selection;
use crate::store::EventStore;

/// A change to the widget's data, as a value.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Display another event.
    Select(EventId),
    /// Move the displayed event to a new date.
    UpdateDate(DateTime<Utc>),
    Add(NewEvent),
}

#[derive(Debug, Clone)]
pub struct Widget {
    store: EventStore,
    selection: Selection,
    mode: Mode,
}

impl Widget {
    /// Wrap a store, selecting its first event.
    pub fn new(store: EventStore) -> EventClockResult<Self> {
        if store.is_empty() {
            return Err(EventClockError::NoEvents);
        }

        Ok(Widget {
            store,
            selection: Selection::first(),
            mode: Mode::Idle,
        })
    }

    /// A widget over the default events.
    pub fn seeded(now: DateTime<Utc>) -> Self {
        Widget {
            store: EventStore::seeded(now),
            selection: Selection::first(),
            mode: Mode::Idle,
        }
    }

    /// The default events, or an empty store when `seed_events` is off.
    ///
    /// Fails with [`EventClockError::NoEvents`] in the latter case; the caller
    /// has to collect a first event and use [`Widget::new`].
    pub fn from_config(config: &EventClockConfig, now: DateTime<Utc>) -> EventClockResult<Self> {
        if config.seed_events {
            Ok(Widget::seeded(now))
        } else {
            Widget::new(EventStore::new())
        }
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn events(&self) -> &[Event] {
        self.store.as_slice()
    }

    pub fn current(&self) -> &Event {
        self.selection.current(&self.store)
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Display another event. Not allowed while an editor is open.
    pub fn select(&mut self, id: EventId) -> EventClockResult<&Event> {
        if matches!(self.mode, Mode::EditingDate(_) | Mode::AddingEvent(_)) {
            return Err(EventClockError::InvalidTransition {
                action: "select an event",
                mode: self.mode.name(),
            });
        }

        self.selection.select(&self.store, id)?;
        self.mode = Mode::Idle;
        Ok(self.current())
    }

    /// Append an event to the store. The selection is left unchanged.
    pub fn add_event(&mut self, fields: NewEvent, now: DateTime<Utc>) -> &Event {
        self.store.add(fields, now)
    }

    /// Change the date of the displayed event.
    pub fn update_date(&mut self, date: DateTime<Utc>) -> EventClockResult<&Event> {
        let id = self.current().id;
        self.store.update_date(id, date)
    }

    /// Perform `action`, returning the id of the event it touched.
    pub fn apply(&mut self, action: Action, now: DateTime<Utc>) -> EventClockResult<EventId> {
        match action {
            Action::Select(id) => self.select(id).map(|e| e.id),
            Action::UpdateDate(date) => self.update_date(date).map(|e| e.id),
            Action::Add(fields) => Ok(self.add_event(fields, now).id),
        }
    }

    pub fn open_selector(&mut self) -> EventClockResult<()> {
        self.mode.require_idle("open the event list")?;
        self.mode = Mode::Selecting;
        Ok(())
    }

    /// Open the date editor, pre-filled with the displayed event's date.
    pub fn open_date_editor(&mut self) -> EventClockResult<&mut DateEdit> {
        self.mode.require_idle("open the date editor")?;

        let (event, date) = (self.current().id, self.current().date);
        self.mode = Mode::EditingDate(DateEdit {
            event,
            input: datetime::to_input(date),
        });
        debug!(%event, "date editor opened");

        match &mut self.mode {
            Mode::EditingDate(edit) => Ok(edit),
            _ => unreachable!("mode was just set to EditingDate"),
        }
    }

    pub fn date_edit_mut(&mut self) -> Option<&mut DateEdit> {
        match &mut self.mode {
            Mode::EditingDate(edit) => Some(edit),
            _ => None,
        }
    }

    /// Apply the date editor's input and close it.
    ///
    /// On an unparseable date the editor stays open so the input can be fixed.
    pub fn save_date(&mut self) -> EventClockResult<&Event> {
        let date = self.editing("save a date")?.parse()?;
        self.save_date_at(date)
    }

    /// Close the date editor, storing `date` as given instead of its input.
    pub fn save_date_at(&mut self, date: DateTime<Utc>) -> EventClockResult<&Event> {
        let id = self.editing("save a date")?.event;
        let event = self.store.update_date(id, date)?;
        self.mode = Mode::Idle;
        Ok(event)
    }

    fn editing(&self, action: &'static str) -> EventClockResult<&DateEdit> {
        match &self.mode {
            Mode::EditingDate(edit) => Ok(edit),
            _ => Err(EventClockError::InvalidTransition {
                action,
                mode: self.mode.name(),
            }),
        }
    }

    pub fn open_add_form(&mut self) -> EventClockResult<&mut EventDraft> {
        self.mode.require_idle("open the add-event form")?;
        self.mode = Mode::AddingEvent(EventDraft::default());

        match &mut self.mode {
            Mode::AddingEvent(draft) => Ok(draft),
            _ => unreachable!("mode was just set to AddingEvent"),
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut EventDraft> {
        match &mut self.mode {
            Mode::AddingEvent(draft) => Some(draft),
            _ => None,
        }
    }

    /// Validate the add-event form, store the event and close the form.
    ///
    /// On invalid input the form stays open with its buffers intact.
    pub fn submit_event(&mut self, now: DateTime<Utc>) -> EventClockResult<&Event> {
        let Mode::AddingEvent(draft) = &self.mode else {
            return Err(EventClockError::InvalidTransition {
                action: "submit an event",
                mode: self.mode.name(),
            });
        };

        let fields = draft.validate()?;
        self.mode = Mode::Idle;
        Ok(self.store.add(fields, now))
    }

    /// Like [`submit_event`](Self::submit_event), with the date already parsed.
    pub fn submit_event_at(
        &mut self,
        date: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> EventClockResult<&Event> {
        let Mode::AddingEvent(draft) = &self.mode else {
            return Err(EventClockError::InvalidTransition {
                action: "submit an event",
                mode: self.mode.name(),
            });
        };

        let fields = draft.validate_at(date)?;
        self.mode = Mode::Idle;
        Ok(self.store.add(fields, now))
    }

    /// Close whatever is open, discarding its buffers.
    pub fn cancel(&mut self) {
        if !self.mode.is_idle() {
            debug!(mode = self.mode.name(), "cancelled");
        }
        self.mode = Mode::Idle;
    }
}
