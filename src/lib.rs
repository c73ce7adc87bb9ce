//! pomotui — a pomodoro dashboard for the terminal.
//!
//! One bounded run: a table of timer parameters and a progress bar that
//! fills on a fixed tick, then exits.

pub mod config;
pub mod tui;
