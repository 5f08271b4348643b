//! Bordered single-value text field.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Editable text with a character cursor.
///
/// The cursor and the optional limit count `char`s, so multibyte input such
/// as city names with umlauts edits cleanly.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    label: String,
    placeholder: String,
    value: String,
    cursor: usize,
    max_chars: Option<usize>,
    focused: bool,
    masked: bool,
    wrapped: bool,
}

impl TextInput {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Shows bullets instead of the value.
    #[must_use]
    pub const fn password(mut self) -> Self {
        self.masked = true;
        self
    }

    /// Wraps long values over several lines. The cursor is not drawn.
    #[must_use]
    pub const fn wrapped(mut self) -> Self {
        self.wrapped = true;
        self
    }

    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    /// Rejects input beyond `max` characters.
    #[must_use]
    pub const fn max_chars(mut self, max: usize) -> Self {
        self.max_chars = Some(max);
        self
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    /// Replaces the value and puts the cursor after it.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Applies an editing key. Returns `false` for keys that do not edit,
    /// leaving them to the caller.
    pub fn edit(&mut self, key: &KeyEvent) -> bool {
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return false;
        }

        match key.code {
            KeyCode::Char(c) => self.insert(c),
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.remove_at_cursor();
                }
            }
            KeyCode::Delete => self.remove_at_cursor(),
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.char_count()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.char_count(),
            _ => return false,
        }
        true
    }

    fn insert(&mut self, c: char) {
        if self.max_chars.is_some_and(|max| self.char_count() >= max) {
            return;
        }
        let index = self.byte_index();
        self.value.insert(index, c);
        self.cursor += 1;
    }

    fn remove_at_cursor(&mut self) {
        if self.cursor < self.char_count() {
            let index = self.byte_index();
            self.value.remove(index);
        }
    }

    fn byte_index(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.cursor)
            .map_or(self.value.len(), |(index, _)| index)
    }

    fn display_text(&self) -> String {
        if self.value.is_empty() {
            self.placeholder.clone()
        } else if self.masked {
            "•".repeat(self.char_count())
        } else {
            self.value.clone()
        }
    }
}

impl Widget for &TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_color = if self.focused { Color::Cyan } else { Color::Gray };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(self.label.as_str());
        let inner = block.inner(area);
        block.render(area, buf);

        let text_style = if self.value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White)
        };
        let mut paragraph = Paragraph::new(self.display_text()).style(text_style);
        if self.wrapped {
            paragraph = paragraph.wrap(Wrap { trim: false });
        }
        paragraph.render(inner, buf);

        if !self.focused || self.wrapped || inner.is_empty() {
            return;
        }
        let offset = u16::try_from(self.cursor).unwrap_or(u16::MAX);
        if offset < inner.width {
            buf[(inner.x + offset, inner.y)].set_style(Style::default().add_modifier(Modifier::REVERSED));
        }
    }
}
