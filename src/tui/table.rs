//! Parameter table — four fixed rows with a cursor and input focus.

use crossterm::event::{KeyCode, KeyEvent};

use crate::config::TimerSettings;

/// One named setting as displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: &'static str,
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct ParameterTable {
    rows: Vec<Parameter>,
    cursor: usize,
    focused: bool,
}

impl ParameterTable {
    /// Build the table from timer settings. Starts focused on the first row.
    pub fn new(settings: &TimerSettings) -> Self {
        let rows = settings
            .rows()
            .into_iter()
            .map(|(name, value)| Parameter { name, value })
            .collect();
        Self {
            rows,
            cursor: 0,
            focused: true,
        }
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn rows(&self) -> &[Parameter] {
        &self.rows
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The highlighted parameter as (name, value).
    pub fn selected_row(&self) -> (&str, &str) {
        let row = &self.rows[self.cursor];
        (row.name, row.value.as_str())
    }

    /// Move selection up.
    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move selection down.
    pub fn move_down(&mut self) {
        let max = self.rows.len().saturating_sub(1);
        if self.cursor < max {
            self.cursor += 1;
        }
    }

    pub fn goto_top(&mut self) {
        self.cursor = 0;
    }

    pub fn goto_bottom(&mut self) {
        self.cursor = self.rows.len().saturating_sub(1);
    }

    /// Navigation keys. Ignored while blurred.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if !self.focused {
            return;
        }
        match key.code {
            KeyCode::Char('k') | KeyCode::Up => self.move_up(),
            KeyCode::Char('j') | KeyCode::Down => self.move_down(),
            // One page spans every row, so page and half-page moves hit the ends.
            KeyCode::Char('g' | 'b' | 'u') | KeyCode::Home | KeyCode::PageUp => self.goto_top(),
            KeyCode::Char('G' | 'f' | 'd') | KeyCode::End | KeyCode::PageDown => {
                self.goto_bottom()
            }
            _ => {}
        }
    }
}
