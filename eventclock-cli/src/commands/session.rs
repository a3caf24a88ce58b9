use std::time::Duration;

use anyhow::{Result, bail};
use chrono::{DateTime, Utc};
use dialoguer::Select;
use eventclock_core::image::ImageRef;
use eventclock_core::{EventClockConfig, EventDraft, EventStore, Widget, datetime};
use owo_colors::OwoColorize;

use crate::commands::{show, watch};
use crate::input::{parse_date, prompt_text, prompt_with_retry};
use crate::render::render_event_line;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    Watch,
    SelectEvent,
    ChangeDate,
    AddEvent,
    Quit,
}

impl MenuItem {
    fn label(self) -> &'static str {
        match self {
            MenuItem::Watch => "Watch countdown",
            MenuItem::SelectEvent => "Switch event",
            MenuItem::ChangeDate => "Change event date",
            MenuItem::AddEvent => "Add new event",
            MenuItem::Quit => "Quit",
        }
    }
}

/// Menu entries for the current state. Adding events is only offered while
/// the displayed event has not gone live yet.
fn menu_items(live: bool) -> Vec<MenuItem> {
    let mut items = vec![MenuItem::Watch, MenuItem::SelectEvent, MenuItem::ChangeDate];
    if !live {
        items.push(MenuItem::AddEvent);
    }
    items.push(MenuItem::Quit);
    items
}

pub async fn run(widget: &mut Widget, config: &EventClockConfig, period: Duration) -> Result<()> {
    loop {
        println!();
        show::run(widget, config)?;
        println!();

        let items = menu_items(widget.current().is_live(Utc::now()));
        let labels: Vec<_> = items.iter().map(|item| item.label()).collect();
        let choice = Select::new()
            .with_prompt("What next?")
            .items(&labels)
            .default(0)
            .interact()?;

        match items[choice] {
            MenuItem::Watch => watch::run(widget, config, period, watch::Exit::Enter).await?,
            MenuItem::SelectEvent => select_event(widget)?,
            MenuItem::ChangeDate => change_date(widget)?,
            MenuItem::AddEvent => add_event(widget)?,
            MenuItem::Quit => return Ok(()),
        }
    }
}

fn select_event(widget: &mut Widget) -> Result<()> {
    widget.open_selector()?;

    let current = widget.current().id;
    let labels: Vec<_> = widget
        .events()
        .iter()
        .map(|e| render_event_line(e, e.id == current))
        .collect();
    let default = widget
        .events()
        .iter()
        .position(|e| e.id == current)
        .unwrap_or(0);

    let choice = Select::new()
        .with_prompt("  Event (Esc to cancel)")
        .items(&labels)
        .default(default)
        .interact_opt()?;

    match choice {
        Some(index) => {
            let id = widget.events()[index].id;
            widget.select(id)?;
        }
        None => widget.cancel(),
    }

    Ok(())
}

fn change_date(widget: &mut Widget) -> Result<()> {
    let initial = widget.open_date_editor()?.input.clone();

    let date = prompt_with_retry(
        "  New date (empty to cancel)",
        Some(&initial),
        |input| {
            if input.trim().is_empty() {
                Ok(None)
            } else {
                parse_date(input).map(Some)
            }
        },
    )?;

    let Some(date) = date else {
        widget.cancel();
        return Ok(());
    };

    let event = widget.save_date_at(date)?;
    println!(
        "{}",
        format!("  {} now on {}", event.name, datetime::format_long(event.date)).green()
    );

    Ok(())
}

fn add_event(widget: &mut Widget) -> Result<()> {
    widget.open_add_form()?;

    let Some((fields, date)) = prompt_draft()? else {
        widget.cancel();
        return Ok(());
    };
    if let Some(draft) = widget.draft_mut() {
        *draft = fields;
    }

    match widget.submit_event_at(date, Utc::now()) {
        Ok(event) => {
            println!("{}", format!("  Created: {}", event.name).green());
            Ok(())
        }
        Err(e) => {
            widget.cancel();
            Err(e.into())
        }
    }
}

/// Ask for the event to start with when there are no default events.
pub fn first_event() -> Result<Widget> {
    println!("{}", "No events yet. Add one to count down to.".dimmed());

    let Some((draft, date)) = prompt_draft()? else {
        bail!("No events to count down to");
    };

    let mut store = EventStore::new();
    store.add(draft.validate_at(date)?, Utc::now());
    Ok(Widget::new(store)?)
}

/// Fill an add-event form. `None` when the name is left empty.
fn prompt_draft() -> Result<Option<(EventDraft, DateTime<Utc>)>> {
    let name = prompt_text("  Name (empty to cancel)")?;
    if name.trim().is_empty() {
        return Ok(None);
    }
    let description = prompt_text("  Description (skip)")?;
    let date = prompt_with_retry("  When?", None, parse_date)?;
    let image = prompt_with_retry("  Image URL or file (skip)", None, |input| {
        ImageRef::parse(Some(input))?;
        Ok(input.trim().to_string())
    })?;

    let draft = EventDraft {
        name,
        description,
        date: datetime::to_input(date),
        image,
    };
    Ok(Some((draft, date)))
}
