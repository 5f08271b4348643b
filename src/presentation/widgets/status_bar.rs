//! Bottom status line.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// What the message on the left reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusLevel {
    /// Current path or a neutral note.
    #[default]
    Info,
    /// A request is in flight.
    Loading,
    /// The last request failed.
    Error,
}

impl StatusLevel {
    const fn style(self) -> (&'static str, Color) {
        match self {
            Self::Info => ("", Color::DarkGray),
            Self::Loading => ("… ", Color::Yellow),
            Self::Error => ("✗ ", Color::Red),
        }
    }
}

/// Message on the left, key hints on the right.
///
/// Hints never take more than half of the line so the message stays readable
/// on narrow terminals.
#[derive(Debug, Clone, Default)]
pub struct StatusBar {
    message: String,
    hints: String,
    level: StatusLevel,
}

impl StatusBar {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    #[must_use]
    pub fn hints(mut self, hints: impl Into<String>) -> Self {
        self.hints = hints.into();
        self
    }

    #[must_use]
    pub const fn level(mut self, level: StatusLevel) -> Self {
        self.level = level;
        self
    }

    /// Shorthand for a failed request.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::new().message(message).level(StatusLevel::Error)
    }
}

impl Widget for &StatusBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (marker, color) = self.level.style();

        let hints_width = u16::try_from(self.hints.width())
            .unwrap_or(u16::MAX)
            .min(area.width / 2);
        let [message_area, hints_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(hints_width)]).areas(area);

        let message = Line::from(vec![
            Span::styled(marker, Style::default().fg(color)),
            Span::styled(
                self.message.as_str(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ]);
        Paragraph::new(message).render(message_area, buf);
        Paragraph::new(self.hints.as_str())
            .style(Style::default().fg(Color::DarkGray))
            .right_aligned()
            .render(hints_area, buf);
    }
}
