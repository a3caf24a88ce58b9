//! Configuration at ~/.config/eventclock/config.toml
//!
//! Every key is optional:
//!
//! ```toml
//! tick_interval_ms = 1000
//! progress = "event_span"      # or "fixed"
//! progress_window_days = 90    # used when progress = "fixed"
//! placeholder_image = "https://via.placeholder.com/400"
//! seed_events = true           # start with the default events
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use ::config::{Config, File};
use serde::Deserialize;

use crate::error::{EventClockError, EventClockResult};
use crate::image::PLACEHOLDER_IMAGE_URL;
use crate::progress::{
    DEFAULT_FIXED_WINDOW_DAYS, MAX_FIXED_WINDOW_DAYS, ProgressMode, ProgressWindow,
};
use crate::ticker::{DEFAULT_TICK_INTERVAL, MIN_TICK_INTERVAL};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EventClockConfig {
    pub tick_interval_ms: u64,
    pub progress: ProgressMode,
    pub progress_window_days: i64,
    pub placeholder_image: String,
    /// Start with the default events. When false the first event is entered by hand.
    pub seed_events: bool,
}

impl Default for EventClockConfig {
    fn default() -> Self {
        EventClockConfig {
            tick_interval_ms: DEFAULT_TICK_INTERVAL.as_millis() as u64,
            progress: ProgressMode::default(),
            progress_window_days: DEFAULT_FIXED_WINDOW_DAYS,
            placeholder_image: PLACEHOLDER_IMAGE_URL.to_string(),
            seed_events: true,
        }
    }
}

impl EventClockConfig {
    pub fn config_path() -> EventClockResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| EventClockError::Config("Could not determine config directory".into()))?
            .join("eventclock");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the user's config, falling back to defaults when there is none.
    pub fn load() -> EventClockResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> EventClockResult<Self> {
        let config: EventClockConfig = Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .build()
            .map_err(|e| EventClockError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| EventClockError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> EventClockResult<()> {
        if self.tick_interval() < MIN_TICK_INTERVAL {
            return Err(EventClockError::Config(format!(
                "tick_interval_ms must be at least {}",
                MIN_TICK_INTERVAL.as_millis()
            )));
        }

        if !(1..=MAX_FIXED_WINDOW_DAYS).contains(&self.progress_window_days) {
            return Err(EventClockError::Config(format!(
                "progress_window_days must be between 1 and {MAX_FIXED_WINDOW_DAYS}"
            )));
        }

        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn progress_window(&self) -> ProgressWindow {
        match self.progress {
            ProgressMode::EventSpan => ProgressWindow::EventSpan,
            ProgressMode::Fixed => ProgressWindow::fixed_days(self.progress_window_days),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = EventClockConfig::load_from(&dir.path().join("config.toml")).unwrap();

        assert_eq!(config, EventClockConfig::default());
        assert_eq!(config.tick_interval(), Duration::from_secs(1));
        assert_eq!(config.progress_window(), ProgressWindow::EventSpan);
    }

    #[test]
    fn reads_fixed_progress_window() {
        let (_dir, path) = write_config(
            "progress = \"fixed\"\nprogress_window_days = 30\ntick_interval_ms = 250\n",
        );
        let config = EventClockConfig::load_from(&path).unwrap();

        assert_eq!(config.progress_window(), ProgressWindow::fixed_days(30));
        assert_eq!(config.tick_interval(), Duration::from_millis(250));
        assert_eq!(config.placeholder_image, PLACEHOLDER_IMAGE_URL);
    }

    #[test]
    fn rejects_too_fast_tick() {
        let (_dir, path) = write_config("tick_interval_ms = 10\n");
        let err = EventClockConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, EventClockError::Config(_)));
    }

    #[test]
    fn rejects_window_too_long_to_represent() {
        let (_dir, path) =
            write_config("progress = \"fixed\"\nprogress_window_days = 200000000\n");
        let err = EventClockConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, EventClockError::Config(_)));

        let (_dir, path) = write_config("progress_window_days = 36500\n");
        assert!(EventClockConfig::load_from(&path).is_ok());
    }

    #[test]
    fn seed_events_can_be_turned_off() {
        let (_dir, path) = write_config("seed_events = false\n");
        let config = EventClockConfig::load_from(&path).unwrap();
        assert!(!config.seed_events);
        assert!(EventClockConfig::default().seed_events);
    }

    #[test]
    fn rejects_unknown_progress_mode() {
        let (_dir, path) = write_config("progress = \"sideways\"\n");
        assert!(EventClockConfig::load_from(&path).is_err());
    }
}
