//! Interaction modes of the countdown view.
//!
//! A single tagged value instead of independent flags, so the date editor,
//! the add-event form and the selector can never be open at the same time.

use chrono::{DateTime, Utc};

use crate::datetime;
use crate::error::{EventClockError, EventClockResult};
use crate::event::{EventId, NewEvent};
use crate::image::ImageRef;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Mode {
    #[default]
    Idle,
    /// The event list is open.
    Selecting,
    EditingDate(DateEdit),
    AddingEvent(EventDraft),
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Idle => "idle",
            Mode::Selecting => "selecting an event",
            Mode::EditingDate(_) => "editing a date",
            Mode::AddingEvent(_) => "adding an event",
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Mode::Idle)
    }

    pub(crate) fn require_idle(&self, action: &'static str) -> EventClockResult<()> {
        if self.is_idle() {
            Ok(())
        } else {
            Err(EventClockError::InvalidTransition {
                action,
                mode: self.name(),
            })
        }
    }
}

/// Buffer of the date editor.
#[derive(Debug, Clone, PartialEq)]
pub struct DateEdit {
    pub event: EventId,
    /// Pre-filled with the event's current date in [`datetime::INPUT_FORMAT`].
    pub input: String,
}

impl DateEdit {
    pub fn parse(&self) -> EventClockResult<DateTime<Utc>> {
        datetime::parse_input(&self.input)
    }
}

/// Buffers of the add-event form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EventDraft {
    pub name: String,
    pub description: String,
    pub date: String,
    /// URL or local path; empty means no image.
    pub image: String,
}

impl EventDraft {
    /// Check the form and turn it into event fields.
    ///
    /// Rejects a blank name and an unparseable date; a missing image falls
    /// back to the placeholder.
    pub fn validate(&self) -> EventClockResult<NewEvent> {
        self.check_name()?;
        let date = datetime::parse_input(&self.date)?;
        self.validate_at(date)
    }

    /// Like [`validate`](Self::validate), with a date parsed by the caller.
    /// The `date` buffer is ignored.
    pub fn validate_at(&self, date: DateTime<Utc>) -> EventClockResult<NewEvent> {
        let name = self.check_name()?;

        Ok(NewEvent {
            name: name.to_string(),
            description: self.description.trim().to_string(),
            date,
            image: ImageRef::parse(Some(&self.image))?,
        })
    }

    fn check_name(&self) -> EventClockResult<&str> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(EventClockError::BlankName);
        }
        Ok(name)
    }
}
