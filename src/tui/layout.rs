//! Dashboard layout, drawn into an inline viewport.
//!
//! ```text
//! ┌─────────────────────────┐
//! │Name              Value  │
//! │                         │
//! │Focus             25m0s  │
//! │Break             5m0s   │
//! │Long Break        15m0s  │
//! │Breaks Until Long 4      │
//! └─────────────────────────┘
//!   ██████████░░░░░░░░░░░░░░░░░░░░░  25%
//!
//! press 'enter' to edit the value
//! ```

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use super::app::PomoApp;
use super::theme::{self, Theme};
use crate::config::PADDING;

/// Rows taken by the table: borders, header, header gap, four parameters.
const TABLE_HEIGHT: u16 = 8;

const NAME_WIDTH: u16 = 17;
const VALUE_WIDTH: u16 = 7;

/// Columns taken by the table, borders and column gap included.
const TABLE_WIDTH: u16 = NAME_WIDTH + VALUE_WIDTH + 1 + 2;

/// Inline viewport height: table, bar, blank line, help.
pub const FRAME_HEIGHT: u16 = TABLE_HEIGHT + 3;

const HELP: &str = "press 'enter' to edit the value";

/// Draw the full frame. Pure projection of `app`.
pub fn draw(f: &mut Frame, app: &PomoApp, theme: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TABLE_HEIGHT), // parameter table
            Constraint::Length(1),            // progress bar
            Constraint::Length(1),            // gap
            Constraint::Length(1),            // help line
        ])
        .split(f.area());

    let table_area = Rect {
        width: rows[0].width.min(TABLE_WIDTH),
        ..rows[0]
    };
    draw_table(f, app, theme, table_area);
    draw_progress(f, app, theme, rows[1]);

    f.render_widget(
        Paragraph::new(Span::styled(HELP, theme.help)),
        rows[3],
    );
}

fn draw_table(f: &mut Frame, app: &PomoApp, theme: &Theme, area: Rect) {
    let header = Row::new(vec![Cell::from("Name"), Cell::from("Value")])
        .style(theme.header)
        .bottom_margin(1);

    let rows: Vec<Row> = app
        .table
        .rows()
        .iter()
        .map(|p| Row::new(vec![Cell::from(p.name), Cell::from(p.value.clone())]))
        .collect();

    let highlight = if app.table.is_focused() {
        theme.selected
    } else {
        theme::blurred(theme.selected)
    };

    let table = Table::new(
        rows,
        [Constraint::Length(NAME_WIDTH), Constraint::Length(VALUE_WIDTH)],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border),
    )
    .row_highlight_style(highlight);

    let mut state = TableState::default().with_selected(Some(app.table.cursor()));
    f.render_stateful_widget(table, area, &mut state);
}

fn draw_progress(f: &mut Frame, app: &PomoApp, theme: &Theme, area: Rect) {
    let mut line = app.progress.line(theme);
    line.spans
        .insert(0, Span::raw(" ".repeat(usize::from(PADDING))));
    f.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::event::TuiMessage;
    use crate::tui::theme::DEFAULT_THEME;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use tokio::time::Instant;

    fn render(app: &PomoApp, width: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, FRAME_HEIGHT)).unwrap();
        terminal
            .draw(|f| draw(f, app, &DEFAULT_THEME))
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..FRAME_HEIGHT)
            .map(|y| {
                (0..width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn frame_shows_table_rows() {
        let app = PomoApp::default();
        let lines = render(&app, 60);
        let text = lines.join("\n");
        assert!(lines[1].contains("Name"));
        assert!(lines[1].contains("Value"));
        for name in ["Focus", "Break", "Long Break", "Breaks Until Long"] {
            assert!(text.contains(name), "missing {name}");
        }
        assert!(text.contains("25m0s"));
        assert!(lines[0].starts_with('┌'));
    }

    #[test]
    fn frame_shows_padded_progress_and_help() {
        let mut app = PomoApp::default();
        app.update(TuiMessage::Tick(Instant::now()));
        let lines = render(&app, 60);
        let bar = &lines[TABLE_HEIGHT as usize];
        assert!(bar.starts_with("  █"));
        assert!(bar.contains("25%"));
        assert!(lines[FRAME_HEIGHT as usize - 1].starts_with(HELP));
    }

    #[test]
    fn rendering_twice_is_identical() {
        let app = PomoApp::default();
        assert_eq!(render(&app, 50), render(&app, 50));
    }

    #[test]
    fn narrow_terminal_does_not_panic() {
        let mut app = PomoApp::default();
        app.update(TuiMessage::Resize {
            width: 4,
            height: FRAME_HEIGHT,
        });
        let lines = render(&app, 4);
        assert_eq!(lines.len(), FRAME_HEIGHT as usize);
    }
}
