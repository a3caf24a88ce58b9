mod commands;
mod input;
mod render;
mod utils;

use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use eventclock_core::{EventClockConfig, EventClockError, EventId, Widget};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "eventclock")]
#[command(about = "Count down to your upcoming events")]
struct Cli {
    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick events, edit dates and add events interactively (default)
    Session {
        /// Time between countdown updates (e.g. "1s", "500ms")
        #[arg(short, long, value_parser = humantime::parse_duration)]
        interval: Option<Duration>,
    },
    /// List events with the time left until each
    List,
    /// Print the countdown for one event
    Show {
        /// Event id (defaults to the first event)
        #[arg(short, long)]
        event: Option<u32>,
    },
    /// Show a live countdown until interrupted
    Watch {
        /// Event id (defaults to the first event)
        #[arg(short, long)]
        event: Option<u32>,

        /// Time between countdown updates (e.g. "1s", "500ms")
        #[arg(short, long, value_parser = humantime::parse_duration)]
        interval: Option<Duration>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = EventClockConfig::load().context("Failed to load config")?;
    debug!(?config, "config loaded");

    let command = cli.command.unwrap_or(Commands::Session { interval: None });
    let mut widget = match Widget::from_config(&config, Utc::now()) {
        Ok(widget) => widget,
        Err(EventClockError::NoEvents) if matches!(command, Commands::Session { .. }) => {
            commands::session::first_event()?
        }
        Err(EventClockError::NoEvents) => anyhow::bail!(
            "No events: seed_events is off in {}. Start `eventclock session` to add one.",
            EventClockConfig::config_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "the config".into())
        ),
        Err(e) => return Err(e.into()),
    };

    match command {
        Commands::Session { interval } => {
            let period = interval.unwrap_or_else(|| config.tick_interval());
            commands::session::run(&mut widget, &config, period).await
        }
        Commands::List => commands::list::run(&widget),
        Commands::Show { event } => {
            select_event(&mut widget, event)?;
            commands::show::run(&widget, &config)
        }
        Commands::Watch { event, interval } => {
            select_event(&mut widget, event)?;
            let period = interval.unwrap_or_else(|| config.tick_interval());
            commands::watch::run(&mut widget, &config, period, commands::watch::Exit::Interrupt)
                .await
        }
    }
}

/// Logs go to stderr so they never mix with the countdown on stdout.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn select_event(widget: &mut Widget, id: Option<u32>) -> Result<()> {
    let Some(id) = id else {
        return Ok(());
    };

    if widget.select(EventId(id)).is_err() {
        let available: Vec<_> = widget.events().iter().map(|e| e.id.to_string()).collect();
        anyhow::bail!(
            "Event '{}' not found. Available: {}",
            id,
            available.join(", ")
        );
    }

    Ok(())
}
