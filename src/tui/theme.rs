//! Static colors and border styles for the dashboard.

use ratatui::style::{Color, Modifier, Style};

/// Immutable style set handed to the render functions.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub border: Style,
    pub header: Style,
    pub selected: Style,
    pub help: Style,
    pub bar_filled: Style,
    pub bar_empty: Style,
}

pub const DEFAULT_THEME: Theme = Theme {
    border: Style::new().fg(Color::Indexed(240)),
    header: Style::new().add_modifier(Modifier::UNDERLINED),
    selected: Style::new().fg(Color::Indexed(229)).bg(Color::Indexed(57)),
    help: Style::new().fg(Color::Indexed(240)),
    bar_filled: Style::new().fg(Color::Rgb(0xFF, 0x7C, 0xCB)),
    bar_empty: Style::new().fg(Color::Indexed(239)),
};

/// Selected-row style with input focus removed.
pub fn blurred(style: Style) -> Style {
    style.fg(Color::Indexed(240)).bg(Color::Reset)
}
