//! TUI messages — the single ordered stream the session consumes.
//!
//! The runner multiplexes two producers into it:
//! - crossterm keyboard and resize events
//! - the clock source (one tick per arm)

use crossterm::event::{Event, KeyEvent, KeyEventKind};
use tokio::time::Instant;

/// Messages that drive the session update loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiMessage {
    /// Clock tick, carrying the emission time.
    Tick(Instant),
    /// Keyboard input.
    Input(KeyEvent),
    /// Terminal size changed.
    Resize { width: u16, height: u16 },
}

impl TuiMessage {
    /// Translate a raw crossterm event. Key releases and repeats, mouse,
    /// focus and paste events are dropped.
    pub fn from_terminal(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(TuiMessage::Input(key)),
            Event::Resize(width, height) => Some(TuiMessage::Resize { width, height }),
            _ => None,
        }
    }
}
