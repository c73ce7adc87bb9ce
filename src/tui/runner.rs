//! TUI runner — main loop that wires everything together.
//!
//! Creates an inline terminal viewport, multiplexes terminal events and the
//! clock into one stream, runs the TEA loop until quit or completion.

use std::io;

use anyhow::Context;
use crossterm::event::{Event, EventStream};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use futures_util::{Stream, StreamExt};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Widget};
use ratatui::{Terminal, TerminalOptions, Viewport};
use tracing::{info, warn};

use crate::config::{SessionConfig, TimerSettings};

use super::app::{Command, PomoApp};
use super::clock::Clock;
use super::event::TuiMessage;
use super::layout::{self, FRAME_HEIGHT};
use super::theme::DEFAULT_THEME;

/// Run the dashboard on stdout. Blocks until quit or completion.
pub async fn run_tui(settings: TimerSettings, config: SessionConfig) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = match Terminal::with_options(
        backend,
        TerminalOptions {
            viewport: Viewport::Inline(FRAME_HEIGHT),
        },
    ) {
        Ok(t) => t,
        Err(e) => {
            disable_raw_mode()?;
            return Err(e).context("creating inline viewport");
        }
    };

    let mut app = PomoApp::new(&settings, config);
    let result = event_loop(&mut terminal, &mut app, EventStream::new()).await;
    let result = restore(&mut terminal, disable_raw_mode, result);
    println!();
    result
}

/// Restore the terminal, best effort. Restore failures are logged and never
/// replace the loop's own outcome.
fn restore<B, T>(
    terminal: &mut Terminal<B>,
    disable_raw: impl FnOnce() -> io::Result<()>,
    result: anyhow::Result<T>,
) -> anyhow::Result<T>
where
    B: Backend,
    B::Error: std::fmt::Display,
{
    if let Err(e) = disable_raw() {
        warn!(error = %e, "failed to disable raw mode");
    }
    if let Err(e) = terminal.show_cursor() {
        warn!(error = %e, "failed to show cursor");
    }
    result
}

/// Feed terminal events and clock ticks to `app` one at a time, drawing a
/// frame after each. Returns when the app quits or completes, or when the
/// event stream ends.
pub async fn event_loop<B, S>(
    terminal: &mut Terminal<B>,
    app: &mut PomoApp,
    mut events: S,
) -> anyhow::Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
    S: Stream<Item = io::Result<Event>> + Unpin,
{
    let mut clock = Clock::new(app.config().tick_interval);

    let size = terminal.size()?;
    app.update(TuiMessage::Resize {
        width: size.width,
        height: size.height,
    });
    info!(
        tick_ms = clock.period().as_millis() as u64,
        step = app.config().step,
        "session started"
    );

    clock.arm();
    terminal.draw(|f| layout::draw(f, app, &DEFAULT_THEME))?;

    loop {
        let msg = tokio::select! {
            at = clock.tick() => TuiMessage::Tick(at),
            maybe_event = events.next() => match maybe_event {
                Some(Ok(event)) => match TuiMessage::from_terminal(event) {
                    Some(msg) => msg,
                    None => continue,
                },
                Some(Err(e)) => return Err(e).context("reading terminal events"),
                None => break,
            },
        };

        match app.update(msg) {
            Command::None => {}
            Command::ArmClock => clock.arm(),
            Command::Announce(text) => announce(terminal, text)?,
            Command::Quit => {
                clock.stop();
                break;
            }
            Command::Finish => {
                clock.stop();
                terminal.draw(|f| layout::draw(f, app, &DEFAULT_THEME))?;
                break;
            }
        }

        terminal.draw(|f| layout::draw(f, app, &DEFAULT_THEME))?;
    }

    Ok(())
}

/// Print one line above the inline viewport.
fn announce<B: Backend>(terminal: &mut Terminal<B>, text: String) -> Result<(), B::Error> {
    info!(%text, "announce");
    terminal.insert_before(1, |buf| {
        Paragraph::new(Line::raw(text)).render(buf.area, buf);
    })
}
