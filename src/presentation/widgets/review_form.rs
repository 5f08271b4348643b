//! Review form.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::application::dto::{COMMENT_MAX_LENGTH, COMMENT_MIN_LENGTH, ReviewRequest};

const RATING_TITLES: [&str; 5] = ["terribly", "badly", "not bad", "good", "perfect"];

/// Result of a key press in the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewFormAction {
    None,
    Submit,
    Leave,
}

/// Editable state of the review form.
#[derive(Debug, Clone)]
pub struct ReviewFormState {
    rating: Option<u8>,
    comment: super::TextInput,
    submitting: bool,
    error: Option<String>,
}

impl ReviewFormState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rating: None,
            comment: super::TextInput::new(" Your review ")
                .wrapped()
                .max_chars(COMMENT_MAX_LENGTH)
                .placeholder("Tell how was your stay, what you like and what can be improved"),
            submitting: false,
            error: None,
        }
    }

    #[must_use]
    pub const fn rating(&self) -> Option<u8> {
        self.rating
    }

    #[must_use]
    pub fn comment(&self) -> &str {
        self.comment.value()
    }

    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.comment.set_focused(focused);
    }

    /// Builds the request for the given offer.
    #[must_use]
    pub fn request(&self, offer_id: &str) -> ReviewRequest {
        ReviewRequest::new(offer_id, self.rating, self.comment.value())
    }

    /// Disables the form while the review is sent.
    pub fn set_submitting(&mut self) {
        self.submitting = true;
        self.error = None;
    }

    /// Clears the form after a successful submission.
    pub fn reset(&mut self) {
        self.rating = None;
        self.comment.clear();
        self.submitting = false;
        self.error = None;
    }

    /// Re-enables the form, keeping the input.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.submitting = false;
        self.error = Some(message.into());
    }

    pub fn handle_key(&mut self, key: KeyEvent, offer_id: &str) -> ReviewFormAction {
        if self.submitting {
            return ReviewFormAction::None;
        }

        match key.code {
            KeyCode::Esc => return ReviewFormAction::Leave,
            KeyCode::Enter => {
                if self.request(offer_id).is_valid() {
                    return ReviewFormAction::Submit;
                }
            }
            KeyCode::Up => {
                self.rating = Some(self.rating.map_or(1, |r| (r + 1).min(5)));
            }
            KeyCode::Down => {
                self.rating = self.rating.and_then(|r| r.checked_sub(1)).filter(|r| *r > 0);
            }
            _ => {
                self.comment.edit(&key);
            }
        }

        ReviewFormAction::None
    }
}

impl Default for ReviewFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &ReviewFormState {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [rating_area, comment_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(area);

        let selected = usize::from(self.rating.unwrap_or(0));
        let stars: String = (1..=5)
            .map(|i| if i <= selected { '★' } else { '☆' })
            .collect();
        let title = selected
            .checked_sub(1)
            .and_then(|i| RATING_TITLES.get(i))
            .copied()
            .unwrap_or("choose with ↑/↓");
        Paragraph::new(Line::from(vec![
            Span::raw("Rating: "),
            Span::styled(stars, Style::default().fg(Color::LightYellow)),
            Span::styled(format!(" {title}"), Style::default().fg(Color::DarkGray)),
        ]))
        .render(rating_area, buf);

        (&self.comment).render(comment_area, buf);

        let count = self.comment.value().trim().chars().count();
        let footer = if self.submitting {
            Line::styled("Sending...", Style::default().fg(Color::Yellow))
        } else if let Some(error) = &self.error {
            Line::styled(format!("Error: {error}"), Style::default().fg(Color::Red))
        } else {
            let color = if (COMMENT_MIN_LENGTH..=COMMENT_MAX_LENGTH).contains(&count) {
                Color::Green
            } else {
                Color::DarkGray
            };
            Line::from(vec![
                Span::styled(
                    format!("{count}/{COMMENT_MIN_LENGTH}-{COMMENT_MAX_LENGTH} characters"),
                    Style::default().fg(color),
                ),
                Span::styled("  Enter: Submit", Style::default().fg(Color::DarkGray)),
            ])
        };
        Paragraph::new(footer).render(footer_area, buf);
    }
}

/// Renders the form inside a titled block.
pub fn render_review_form(state: &ReviewFormState, focused: bool, area: Rect, buf: &mut Buffer) {
    let border = if focused { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(" Your review ");
    let inner = block.inner(area);
    block.render(area, buf);
    state.render(inner, buf);
}
