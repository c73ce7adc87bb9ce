//! PomoApp — the TEA model.
//!
//! All session state lives here. Update receives TuiMessages, mutates state
//! and returns the one follow-up the runner must carry out. View reads state
//! to produce ratatui widgets. No side effects in view.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info};

use crate::config::{SessionConfig, TimerSettings, MAX_WIDTH};

use super::event::TuiMessage;
use super::progress::ProgressTracker;
use super::table::ParameterTable;

/// Lifecycle of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Accepting ticks, keys and resizes.
    Running,
    /// Progress reached 1.0. The clock is stopped.
    Completed,
    /// Quit requested. Every later message is a no-op.
    Quit,
}

/// Follow-up for the runner after one update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    None,
    /// Schedule exactly one more tick.
    ArmClock,
    /// Stop the clock, draw the final frame, exit.
    Finish,
    /// Exit now without drawing.
    Quit,
    /// Print a line once, above the dashboard.
    Announce(String),
}

pub struct PomoApp {
    pub table: ParameterTable,
    pub progress: ProgressTracker,
    state: SessionState,
    config: SessionConfig,
}

impl PomoApp {
    pub fn new(settings: &TimerSettings, config: SessionConfig) -> Self {
        Self {
            table: ParameterTable::new(settings),
            progress: ProgressTracker::new(),
            state: SessionState::Running,
            config,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Handle a TUI message (TEA update).
    pub fn update(&mut self, msg: TuiMessage) -> Command {
        if self.state == SessionState::Quit {
            return Command::None;
        }
        match msg {
            TuiMessage::Tick(_) => self.on_tick(),
            TuiMessage::Input(key) => self.on_key(key),
            TuiMessage::Resize { width, height } => {
                self.on_resize(width);
                debug!(width, height, bar = self.progress.width(), "resized");
                Command::None
            }
        }
    }

    fn on_tick(&mut self) -> Command {
        if self.state != SessionState::Running {
            return Command::None;
        }
        self.progress.advance(self.config.step);
        debug!(fraction = self.progress.fraction(), "tick");
        if self.progress.reached_complete() {
            self.state = SessionState::Completed;
            info!("session completed");
            Command::Finish
        } else {
            Command::ArmClock
        }
    }

    fn on_key(&mut self, key: KeyEvent) -> Command {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit(),
            KeyCode::Char('q') => self.quit(),
            KeyCode::Esc => {
                self.toggle_focus();
                Command::None
            }
            KeyCode::Enter => {
                let (_, value) = self.table.selected_row();
                Command::Announce(format!("Let's go to {value}!"))
            }
            _ => {
                self.table.handle_key(key);
                Command::None
            }
        }
    }

    fn quit(&mut self) -> Command {
        info!(fraction = self.progress.fraction(), "quit requested");
        self.state = SessionState::Quit;
        Command::Quit
    }

    /// Flip whether the table accepts navigation keys.
    pub fn toggle_focus(&mut self) {
        if self.table.is_focused() {
            self.table.blur();
        } else {
            self.table.focus();
        }
        debug!(focused = self.table.is_focused(), "table focus toggled");
    }

    /// Size the progress bar from the viewport width.
    fn on_resize(&mut self, width: u16) {
        let bar = width
            .saturating_sub(self.config.margin)
            .min(MAX_WIDTH);
        self.progress.set_width(bar);
    }
}

impl Default for PomoApp {
    fn default() -> Self {
        Self::new(&TimerSettings::default(), SessionConfig::default())
    }
}
