use std::time::Duration;

use anyhow::Result;
use eventclock_core::{Event, EventClockConfig, ProgressWindow, Snapshot, Tick, Ticker, Widget};
use indicatif::ProgressBar;
use owo_colors::OwoColorize;
use tokio::sync::mpsc;

use crate::render::{Render, render_header};
use crate::utils::tui::{BAR_LENGTH, bar_position, countdown_style, create_countdown_bar, live_style};

/// How the live view is left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// Ctrl-C or `q` (standalone `watch` command).
    Interrupt,
    /// An empty line or `q` (inside a session, back to the menu).
    Enter,
}

enum Key {
    Line(String),
    Eof,
}

/// Read a single line from stdin on a short-lived thread.
///
/// One thread per line, so nothing is left reading stdin once the view is
/// closed and the session's prompts get their input back.
fn read_next_line(tx: &mpsc::UnboundedSender<Key>) {
    let tx = tx.clone();
    std::thread::spawn(move || {
        let mut line = String::new();
        let key = match std::io::stdin().read_line(&mut line) {
            Ok(0) | Err(_) => Key::Eof,
            Ok(_) => Key::Line(line),
        };
        let _ = tx.send(key);
    });
}

pub async fn run(
    widget: &mut Widget,
    config: &EventClockConfig,
    period: Duration,
    exit: Exit,
) -> Result<()> {
    let window = config.progress_window();
    let mut ticker = Ticker::system(period);
    let mut ticks = ticker.subscribe();
    ticker.observe(widget.current());

    println!("{}", render_header(widget.current(), &config.placeholder_image));
    println!("{}", hint(exit).dimmed());
    println!();

    let bar = create_countdown_bar();
    let (key_tx, mut keys) = mpsc::unbounded_channel();
    read_next_line(&key_tx);

    loop {
        tokio::select! {
            changed = ticks.changed() => {
                changed?;
                let Some(tick) = *ticks.borrow_and_update() else {
                    continue;
                };
                if tick.event == widget.current().id {
                    draw(&bar, widget.current(), tick, window);
                }
            }
            Some(key) = keys.recv() => {
                let line = match key {
                    Key::Line(line) => line,
                    // Nothing more to read; keep counting unless stdin was the way out
                    Key::Eof if exit == Exit::Interrupt => continue,
                    Key::Eof => break,
                };

                match line.trim() {
                    "q" => break,
                    "" if exit == Exit::Enter => break,
                    "n" => switch(widget, &mut ticker, &bar, config, 1)?,
                    "p" => switch(widget, &mut ticker, &bar, config, -1)?,
                    _ => {}
                }
                read_next_line(&key_tx);
            }
            _ = tokio::signal::ctrl_c(), if exit == Exit::Interrupt => break,
        }
    }

    ticker.stop();
    bar.finish_and_clear();
    Ok(())
}

fn hint(exit: Exit) -> &'static str {
    match exit {
        Exit::Interrupt => "   n+Enter next · p+Enter previous · q+Enter or Ctrl-C quit",
        Exit::Enter => "   n+Enter next · p+Enter previous · Enter back to menu",
    }
}

fn draw(bar: &ProgressBar, event: &Event, tick: Tick, window: ProgressWindow) {
    match tick.snapshot {
        Snapshot::Live => {
            bar.set_style(live_style());
            bar.set_position(BAR_LENGTH);
        }
        Snapshot::Remaining(_) => {
            bar.set_style(countdown_style());
            bar.set_position(bar_position(window.fraction(event, tick.at)));
        }
    }
    bar.set_message(tick.snapshot.render());
}

/// Show the next (or previous) event and restart the ticker on it.
fn switch(
    widget: &mut Widget,
    ticker: &mut Ticker,
    bar: &ProgressBar,
    config: &EventClockConfig,
    step: isize,
) -> Result<()> {
    let events = widget.events();
    let position = events
        .iter()
        .position(|e| e.id == widget.current().id)
        .unwrap_or(0);
    let next = events[step_index(position, events.len(), step)].id;

    let event = widget.select(next)?;
    bar.suspend(|| {
        println!();
        println!("{}", render_header(event, &config.placeholder_image));
        println!();
    });
    ticker.observe(event);
    Ok(())
}

/// Index `step` places away from `position`, wrapping at both ends.
fn step_index(position: usize, len: usize, step: isize) -> usize {
    (position as isize + step).rem_euclid(len as isize) as usize
}
