use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Paragraph, Widget},
};

use super::ScreenAction;
use crate::domain::AppRoute;

/// Page shown for unknown paths and missing offers.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotFoundScreen;

impl NotFoundScreen {
    pub fn handle_key(key: KeyEvent) -> ScreenAction {
        match key.code {
            KeyCode::Enter => ScreenAction::Navigate(AppRoute::Main.path().to_string()),
            _ => ScreenAction::None,
        }
    }
}

impl Widget for NotFoundScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [_, center, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(3),
            Constraint::Fill(1),
        ])
        .areas(area);

        Paragraph::new(vec![
            Line::styled(
                "404. Page not found",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Line::raw(""),
            Line::styled(
                "Return to the main page [Enter]",
                Style::default().fg(Color::Cyan),
            ),
        ])
        .alignment(Alignment::Center)
        .render(center, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::widgets::testing::render_to_string;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_renders_message() {
        let text = render_to_string(40, 5, |area, buf| NotFoundScreen.render(area, buf));
        assert!(text.contains("404. Page not found"));
    }

    #[test]
    fn test_enter_returns_home() {
        let key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(
            NotFoundScreen::handle_key(key),
            ScreenAction::Navigate("/".to_string())
        );
    }
}
