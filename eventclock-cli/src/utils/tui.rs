use indicatif::{ProgressBar, ProgressStyle};

/// Scale of the countdown bar; the fraction is mapped onto 0..=BAR_LENGTH.
pub const BAR_LENGTH: u64 = 1000;

/// Bar that redraws the countdown tiles above a progress line.
pub fn create_countdown_bar() -> ProgressBar {
    let bar = ProgressBar::new(BAR_LENGTH);
    bar.set_style(countdown_style());
    bar
}

pub fn countdown_style() -> ProgressStyle {
    ProgressStyle::with_template("{msg}\n  {wide_bar:.yellow/black} {percent:>3}%")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("━━╌")
}

/// Once live the bar is hidden and only the message remains.
pub fn live_style() -> ProgressStyle {
    ProgressStyle::with_template("{msg}").unwrap_or_else(|_| ProgressStyle::default_bar())
}

pub fn bar_position(fraction: f64) -> u64 {
    (fraction.clamp(0.0, 1.0) * BAR_LENGTH as f64).round() as u64
}
