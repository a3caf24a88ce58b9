use anyhow::Result;
use chrono::Utc;
use eventclock_core::{EventClockConfig, Snapshot, Widget};

use crate::render::{Render, render_header, render_progress};

pub fn run(widget: &Widget, config: &EventClockConfig) -> Result<()> {
    let now = Utc::now();
    let event = widget.current();
    let snapshot = Snapshot::compute(event.date, now);

    println!("{}", render_header(event, &config.placeholder_image));
    println!();
    println!("{}", snapshot.render());

    if !snapshot.is_live() {
        println!(
            "{}",
            render_progress(config.progress_window().fraction(event, now))
        );
    }

    Ok(())
}
