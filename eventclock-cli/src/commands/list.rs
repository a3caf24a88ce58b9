use anyhow::Result;
use chrono::Utc;
use eventclock_core::Widget;
use owo_colors::OwoColorize;

use crate::render::{render_compact, render_event_line};

pub fn run(widget: &Widget) -> Result<()> {
    let now = Utc::now();
    let current = widget.current().id;

    for event in widget.events() {
        let marker = if event.id == current { "›" } else { " " };
        println!(
            "{} {} {}  {}",
            marker.blue(),
            format!("[{}]", event.id).dimmed(),
            render_event_line(event, event.id == current),
            render_compact(event, now)
        );
    }

    Ok(())
}
