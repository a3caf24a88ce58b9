//! Terminal rendering for eventclock types.
//!
//! Extension traits that add colored output to eventclock-core types
//! using owo_colors.

use chrono::{DateTime, Utc};
use eventclock_core::datetime::{format_long, format_short};
use eventclock_core::{Event, Snapshot, TimeLeft};
use owo_colors::OwoColorize;

pub const LIVE_MESSAGE: &str = "Event is Live!";

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

/// One labelled countdown tile, zero-padded to two digits.
fn tile(value: i64, label: &str) -> String {
    format!("{} {}", format!("{value:02}").bold(), label.dimmed())
}

impl Render for TimeLeft {
    fn render(&self) -> String {
        format!(
            "  {}   {}   {}   {}",
            tile(self.days, "Days"),
            tile(self.hours, "Hours"),
            tile(self.minutes, "Minutes"),
            tile(self.seconds, "Seconds"),
        )
    }
}

impl Render for Snapshot {
    fn render(&self) -> String {
        match self {
            Snapshot::Remaining(left) => left.render(),
            Snapshot::Live => format!("  {}", LIVE_MESSAGE.green().bold()),
        }
    }
}

/// Title block of the displayed event.
pub fn render_header(event: &Event, placeholder_image: &str) -> String {
    let mut lines = vec![format!("⏱  {}", event.name.bold())];

    if !event.description.is_empty() {
        lines.push(format!("   {}", event.description.italic().dimmed()));
    }
    lines.push(format!("📅 {}", format_long(event.date)));
    lines.push(format!(
        "🖼  {}",
        event.image.describe(placeholder_image).dimmed()
    ));

    lines.join("\n")
}

/// One entry of the event list; the selected one is highlighted.
pub fn render_event_line(event: &Event, selected: bool) -> String {
    let date = format_short(event.date);
    if selected {
        format!("{} {}", event.name.blue().bold(), date.dimmed())
    } else {
        format!("{} {}", event.name, date.dimmed())
    }
}

/// Compact countdown used in lists, e.g. "90d 00h 00m 00s" or "live".
pub fn render_compact(event: &Event, now: DateTime<Utc>) -> String {
    match Snapshot::compute(event.date, now) {
        Snapshot::Remaining(left) => left.to_string().yellow().to_string(),
        Snapshot::Live => "live".green().to_string(),
    }
}

/// Static progress line for one-shot output.
pub fn render_progress(fraction: f64) -> String {
    const WIDTH: usize = 40;
    let filled = (fraction.clamp(0.0, 1.0) * WIDTH as f64).round() as usize;

    format!(
        "  {}{} {:>3.0}%",
        "━".repeat(filled).yellow(),
        "╌".repeat(WIDTH - filled).dimmed(),
        fraction.clamp(0.0, 1.0) * 100.0
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drop ANSI color sequences so assertions see plain text.
    fn plain(s: &str) -> String {
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn tiles_are_zero_padded() {
        let left = TimeLeft::from_seconds(5 * 86_400 + 3 * 3_600 + 7);
        assert_eq!(
            plain(&left.render()),
            "  05 Days   03 Hours   00 Minutes   07 Seconds"
        );
    }

    #[test]
    fn live_snapshot_renders_message() {
        assert_eq!(plain(&Snapshot::Live.render()), "  Event is Live!");
    }

    #[test]
    fn progress_line_is_clamped() {
        assert!(plain(&render_progress(1.7)).ends_with("100%"));
        assert!(plain(&render_progress(-0.2)).ends_with("  0%"));
    }
}
