//! Page header with the logo and the user block.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::domain::entities::UserData;

const LOGO: &str = "six cities";

/// Header shown on every page.
pub struct Header<'a> {
    user: Option<&'a UserData>,
    favorites_count: usize,
}

impl<'a> Header<'a> {
    #[must_use]
    pub const fn new(user: Option<&'a UserData>, favorites_count: usize) -> Self {
        Self {
            user,
            favorites_count,
        }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [logo_area, user_area] =
            Layout::horizontal([Constraint::Length(16), Constraint::Fill(1)]).areas(area);

        Paragraph::new(Line::from(vec![
            Span::styled(
                LOGO,
                Style::default()
                    .fg(Color::LightYellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" [h]", Style::default().fg(Color::DarkGray)),
        ]))
        .render(logo_area, buf);

        let hint = Style::default().fg(Color::DarkGray);
        let line = match self.user {
            Some(user) => Line::from(vec![
                Span::styled(user.email.as_str(), Style::default().fg(Color::White)),
                Span::raw("  "),
                Span::styled(
                    format!("♥ {}", self.favorites_count),
                    Style::default().fg(Color::LightRed),
                ),
                Span::styled(" [f]", hint),
                Span::raw("  "),
                Span::styled("Sign out", Style::default().fg(Color::Cyan)),
                Span::styled(" [o]", hint),
            ]),
            None => Line::from(vec![
                Span::styled("Sign in", Style::default().fg(Color::Cyan)),
                Span::styled(" [l]", hint),
            ]),
        };

        Paragraph::new(line)
            .alignment(Alignment::Right)
            .render(user_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::widgets::testing::render_to_string;

    #[test]
    fn test_guest_sees_sign_in() {
        let text = render_to_string(60, 1, |area, buf| Header::new(None, 0).render(area, buf));

        assert!(text.contains("six cities"));
        assert!(text.contains("Sign in"));
        assert!(!text.contains("Sign out"));
    }

    #[test]
    fn test_signed_in_user_block() {
        let user = UserData::new("Oliver", "oliver@example.com");
        let text = render_to_string(80, 1, |area, buf| {
            Header::new(Some(&user), 3).render(area, buf);
        });

        assert!(text.contains("oliver@example.com"));
        assert!(text.contains("♥ 3"));
        assert!(text.contains("Sign out"));
    }
}
