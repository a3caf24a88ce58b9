//! Progress-bar fraction for a countdown.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::event::Event;

/// Reference window used by [`ProgressWindow::Fixed`] unless configured.
pub const DEFAULT_FIXED_WINDOW_DAYS: i64 = 90;

/// Longest fixed window accepted from config, about a century.
pub const MAX_FIXED_WINDOW_DAYS: i64 = 36_500;

/// Which span the progress bar is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProgressWindow {
    /// From when the event was added until its date.
    #[default]
    EventSpan,
    /// A window of fixed length ending at the event date.
    Fixed(TimeDelta),
}

/// Config-facing name of a [`ProgressWindow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressMode {
    #[default]
    EventSpan,
    Fixed,
}

impl ProgressWindow {
    /// Window of `days` days. Lengths beyond what `TimeDelta` holds saturate.
    pub fn fixed_days(days: i64) -> Self {
        ProgressWindow::Fixed(TimeDelta::try_days(days).unwrap_or(TimeDelta::MAX))
    }

    /// Elapsed fraction of the window at `now`, clamped to `0.0..=1.0`.
    pub fn fraction(&self, event: &Event, now: DateTime<Utc>) -> f64 {
        let (start, span) = match *self {
            ProgressWindow::EventSpan => (event.created_at, event.date - event.created_at),
            ProgressWindow::Fixed(window) => (
                event
                    .date
                    .checked_sub_signed(window)
                    .unwrap_or(DateTime::<Utc>::MIN_UTC),
                window,
            ),
        };

        if span <= TimeDelta::zero() {
            return 1.0;
        }

        let elapsed = (now - start).num_milliseconds() as f64;
        (elapsed / span.num_milliseconds() as f64).clamp(0.0, 1.0)
    }
}
