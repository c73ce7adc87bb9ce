//! Session configuration — timer defaults and loop tuning.
//!
//! Nothing is read from or written to disk. `TimerSettings` holds the four
//! values shown in the parameter table; `SessionConfig` holds the knobs the
//! CLI can override (tick interval, progress step).

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::tui::progress::COMPLETE_EPSILON;

/// Horizontal padding before the progress bar.
pub const PADDING: u16 = 2;

/// Columns subtracted from the viewport width before sizing the bar.
pub const MARGIN: u16 = PADDING * 2 + 4;

/// Hard cap on the progress bar width.
pub const MAX_WIDTH: u16 = 80;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("progress step must be in (0, 1], got {0}")]
    InvalidStep(f64),

    #[error("tick interval must be greater than zero")]
    ZeroTickInterval,

    #[error("cannot open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The pomodoro parameters displayed in the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerSettings {
    pub focus: Duration,
    pub focus_break: Duration,
    pub long_break: Duration,
    pub breaks_until_long: u32,
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            focus: Duration::from_secs(25 * 60),
            focus_break: Duration::from_secs(5 * 60),
            long_break: Duration::from_secs(15 * 60),
            breaks_until_long: 4,
        }
    }
}

impl TimerSettings {
    /// Table rows as (name, value) pairs, in display order.
    pub fn rows(&self) -> [(&'static str, String); 4] {
        [
            ("Focus", format_duration(self.focus)),
            ("Break", format_duration(self.focus_break)),
            ("Long Break", format_duration(self.long_break)),
            ("Breaks Until Long", self.breaks_until_long.to_string()),
        ]
    }
}

/// Tuning for one session run.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Period of the clock source.
    pub tick_interval: Duration,
    /// Fraction added to the progress bar on each tick.
    pub step: f64,
    pub margin: u16,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_secs(1),
            step: 0.25,
            margin: MARGIN,
        }
    }
}

impl SessionConfig {
    /// Reject values that would stall or overshoot the run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.step > 0.0 && self.step <= 1.0) {
            return Err(ConfigError::InvalidStep(self.step));
        }
        if self.tick_interval.is_zero() {
            return Err(ConfigError::ZeroTickInterval);
        }
        Ok(())
    }

    /// Number of ticks needed to fill the bar.
    pub fn ticks_to_complete(&self) -> u32 {
        (1.0 / self.step - COMPLETE_EPSILON).ceil() as u32
    }
}

/// Format a duration compactly: `25m0s`, `1h0m0s`, `1.5s`, `0s`.
pub fn format_duration(d: Duration) -> String {
    let total = d.as_secs();
    let nanos = d.subsec_nanos();
    if total == 0 && nanos == 0 {
        return "0s".into();
    }

    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    let mut seconds = secs.to_string();
    if nanos > 0 {
        let frac = format!("{nanos:09}");
        seconds.push('.');
        seconds.push_str(frac.trim_end_matches('0'));
    }

    if hours > 0 {
        format!("{hours}h{minutes}m{seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m{seconds}s")
    } else {
        format!("{seconds}s")
    }
}
