//! Core of eventclock: an in-memory list of events, the selection of the one
//! on display, and a countdown to its date.
//!
//! - [`Widget`] owns the [`EventStore`], the [`Selection`] and the interaction [`Mode`]
//! - [`Snapshot`] is the days/hours/minutes/seconds left, or live
//! - [`Ticker`] recomputes the snapshot on a fixed interval in a tokio task

pub mod config;
pub mod countdown;
pub mod datetime;
pub mod error;
pub mod event;
pub mod image;
pub mod mode;
pub mod progress;
pub mod seed;
pub mod selection;
pub mod store;
pub mod ticker;
pub mod widget;

pub use config::EventClockConfig;
pub use countdown::{Snapshot, TimeLeft};
pub use error::{EventClockError, EventClockResult};
pub use event::{Event, EventId, NewEvent};
pub use image::ImageRef;
pub use mode::{DateEdit, EventDraft, Mode};
pub use progress::ProgressWindow;
pub use selection::Selection;
pub use store::EventStore;
pub use ticker::{Clock, SystemClock, Tick, Ticker};
pub use widget::{Action, Widget};
