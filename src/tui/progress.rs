//! Progress tracker — completion fraction and its text bar.

use ratatui::text::{Line, Span};

use super::theme::Theme;
use crate::config::MAX_WIDTH;

/// Bar width before the first resize arrives.
pub const DEFAULT_WIDTH: u16 = 40;

/// Shortfall below 1.0 that still counts as complete, absorbing float
/// accumulation error from steps like 0.1.
pub const COMPLETE_EPSILON: f64 = 1e-9;

const FILLED: char = '█';
const EMPTY: char = '░';

#[derive(Debug, Clone)]
pub struct ProgressTracker {
    fraction: f64,
    width: u16,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self {
            fraction: 0.0,
            width: DEFAULT_WIDTH,
        }
    }

    pub fn fraction(&self) -> f64 {
        self.fraction
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    /// Add `step` to the fraction, clamped to 1.0. Negative steps are ignored.
    /// A sum within `COMPLETE_EPSILON` of 1.0 snaps to 1.0.
    pub fn advance(&mut self, step: f64) {
        if step > 0.0 {
            let next = self.fraction + step;
            self.fraction = if 1.0 - next <= COMPLETE_EPSILON {
                1.0
            } else {
                next
            };
        }
    }

    pub fn reached_complete(&self) -> bool {
        self.fraction >= 1.0
    }

    /// Set the render width, capped at the maximum.
    pub fn set_width(&mut self, width: u16) {
        self.width = width.min(MAX_WIDTH);
    }

    /// Draw the bar at `width` columns (capped), percentage on the right.
    pub fn render(&self, width: u16) -> String {
        let (filled, empty, percent) = self.segments(width);
        let mut out = String::with_capacity(usize::from(width.min(MAX_WIDTH)) * 3);
        out.extend(std::iter::repeat_n(FILLED, filled));
        out.extend(std::iter::repeat_n(EMPTY, empty));
        if let Some(p) = percent {
            out.push_str(&p);
        }
        out
    }

    /// Styled bar at the current width.
    pub fn line(&self, theme: &Theme) -> Line<'static> {
        let (filled, empty, percent) = self.segments(self.width);
        let mut spans = vec![
            Span::styled(FILLED.to_string().repeat(filled), theme.bar_filled),
            Span::styled(EMPTY.to_string().repeat(empty), theme.bar_empty),
        ];
        if let Some(p) = percent {
            spans.push(Span::raw(p));
        }
        Line::from(spans)
    }

    /// Split `width` into filled cells, empty cells and the percentage label.
    fn segments(&self, width: u16) -> (usize, usize, Option<String>) {
        let width = usize::from(width.min(MAX_WIDTH));
        let label = format!(" {:>3.0}%", self.fraction * 100.0);
        let (bar, percent) = if width > label.len() {
            (width - label.len(), Some(label))
        } else {
            (width, None)
        };
        let filled = ((bar as f64) * self.fraction).round() as usize;
        let filled = filled.min(bar);
        (filled, bar - filled, percent)
    }
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(s: &str) -> usize {
        s.chars().count()
    }

    #[test]
    fn advance_clamps_at_one() {
        let mut p = ProgressTracker::new();
        p.advance(0.75);
        p.advance(0.75);
        assert_eq!(p.fraction(), 1.0);
        assert!(p.reached_complete());
        p.advance(0.25);
        assert_eq!(p.fraction(), 1.0);
    }

    #[test]
    fn tenth_steps_complete_in_ten() {
        let mut p = ProgressTracker::new();
        for _ in 0..9 {
            p.advance(0.1);
            assert!(!p.reached_complete());
        }
        p.advance(0.1);
        assert!(p.reached_complete());
        assert_eq!(p.fraction(), 1.0);
    }

    #[test]
    fn negative_step_ignored() {
        let mut p = ProgressTracker::new();
        p.advance(0.25);
        p.advance(-0.5);
        assert_eq!(p.fraction(), 0.25);
    }

    #[test]
    fn quarter_steps_complete_exactly() {
        let mut p = ProgressTracker::new();
        for _ in 0..3 {
            p.advance(0.25);
            assert!(!p.reached_complete());
        }
        p.advance(0.25);
        assert!(p.reached_complete());
    }

    #[test]
    fn render_width_matches_request() {
        let mut p = ProgressTracker::new();
        p.advance(0.5);
        let bar = p.render(42);
        assert_eq!(cells(&bar), 42);
        assert!(bar.ends_with("  50%"));
        assert_eq!(bar.chars().filter(|c| *c == FILLED).count(), 19);
    }

    #[test]
    fn render_capped_at_max() {
        let p = ProgressTracker::new();
        assert_eq!(cells(&p.render(200)), 80);
    }

    #[test]
    fn render_narrow_drops_label() {
        let mut p = ProgressTracker::new();
        p.advance(1.0);
        assert_eq!(p.render(4), "████");
        assert_eq!(p.render(0), "");
    }

    #[test]
    fn render_is_pure() {
        let mut p = ProgressTracker::new();
        p.advance(0.25);
        assert_eq!(p.render(30), p.render(30));
        assert_eq!(p.fraction(), 0.25);
    }

    #[test]
    fn set_width_capped() {
        let mut p = ProgressTracker::new();
        assert_eq!(p.width(), DEFAULT_WIDTH);
        p.set_width(500);
        assert_eq!(p.width(), 80);
    }
}
