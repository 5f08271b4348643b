//! Sign-in page.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use super::ScreenAction;
use crate::application::dto::LoginRequest;
use crate::domain::AppRoute;
use crate::presentation::widgets::TextInput;

/// Where the form is in its submit cycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoginState {
    #[default]
    Editing,
    Submitting,
    /// The last attempt failed; cleared by the next key.
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoginField {
    Email,
    Password,
}

/// Email and password form with a "remember me" switch.
pub struct LoginScreen {
    email: TextInput,
    password: TextInput,
    field: LoginField,
    state: LoginState,
    remember: bool,
}

impl LoginScreen {
    #[must_use]
    pub fn new() -> Self {
        let mut email = TextInput::new(" E-mail ").placeholder("Email");
        email.set_focused(true);

        Self {
            email,
            password: TextInput::new(" Password ").password().placeholder("Password"),
            field: LoginField::Email,
            state: LoginState::Editing,
            remember: true,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &LoginState {
        &self.state
    }

    #[must_use]
    pub fn email(&self) -> &str {
        self.email.value()
    }

    /// Whether the session token is kept in the keyring after sign-in.
    #[must_use]
    pub const fn should_persist(&self) -> bool {
        self.remember
    }

    /// Builds the request from the current input.
    #[must_use]
    pub fn request(&self) -> LoginRequest {
        let request = LoginRequest::new(self.email.value(), self.password.value());
        if self.remember {
            request
        } else {
            request.without_persistence()
        }
    }

    pub fn set_validating(&mut self) {
        self.state = LoginState::Submitting;
    }

    /// Re-enables the form, keeping the input.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.state = LoginState::Failed(message.into());
    }

    pub fn reset(&mut self) {
        self.state = LoginState::Editing;
    }

    fn focus(&mut self, field: LoginField) {
        self.field = field;
        self.email.set_focused(field == LoginField::Email);
        self.password.set_focused(field == LoginField::Password);
    }

    const fn other_field(&self) -> LoginField {
        match self.field {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Email,
        }
    }

    /// Enter on the email field moves on; on the password field it submits
    /// once both fields hold something. Checking the values is left to the
    /// login use case.
    pub fn handle_key(&mut self, key: KeyEvent) -> ScreenAction {
        match self.state {
            LoginState::Submitting => return ScreenAction::None,
            LoginState::Failed(_) => self.reset(),
            LoginState::Editing => {}
        }

        match key.code {
            KeyCode::Esc => ScreenAction::Navigate(AppRoute::Main.path().to_string()),
            KeyCode::Enter if self.field == LoginField::Email => {
                self.focus(LoginField::Password);
                ScreenAction::None
            }
            KeyCode::Enter => {
                if self.email.value().is_empty() || self.password.value().is_empty() {
                    ScreenAction::None
                } else {
                    ScreenAction::SubmitLogin(self.request())
                }
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focus(self.other_field());
                ScreenAction::None
            }
            KeyCode::F(2) => {
                self.remember = !self.remember;
                ScreenAction::None
            }
            _ => {
                let input = match self.field {
                    LoginField::Email => &mut self.email,
                    LoginField::Password => &mut self.password,
                };
                input.edit(&key);
                ScreenAction::None
            }
        }
    }

    fn render_form(&self, area: Rect, buf: &mut Buffer) {
        let [title, email, password, remember, _, status] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        Paragraph::new("Sign in")
            .style(Style::default().add_modifier(Modifier::BOLD))
            .render(title, buf);
        (&self.email).render(email, buf);
        (&self.password).render(password, buf);

        let mark = if self.remember { "[x]" } else { "[ ]" };
        Paragraph::new(Line::from(vec![
            Span::styled(mark, Style::default().fg(Color::Yellow)),
            Span::raw(" Remember me "),
            Span::styled("[F2]", Style::default().fg(Color::DarkGray)),
        ]))
        .render(remember, buf);

        let line = match &self.state {
            LoginState::Editing => Line::styled(
                "Enter sign in · Tab next field · Esc back",
                Style::default().fg(Color::DarkGray),
            ),
            LoginState::Submitting => Line::styled(
                "Signing in...",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC),
            ),
            LoginState::Failed(message) => {
                Line::styled(format!("Error: {message}"), Style::default().fg(Color::Red))
            }
        };
        Paragraph::new(line).render(status, buf);
    }
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self::new()
    }
}

/// The sign-in page: the form beside a card with the active city.
pub struct LoginView<'a> {
    screen: &'a LoginScreen,
    city: &'a str,
}

impl<'a> LoginView<'a> {
    #[must_use]
    pub const fn new(screen: &'a LoginScreen, city: &'a str) -> Self {
        Self { screen, city }
    }
}

impl Widget for LoginView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [page] = Layout::vertical([Constraint::Length(11)])
            .flex(Flex::Center)
            .areas(area);
        let [form, city] = Layout::horizontal([Constraint::Max(48), Constraint::Max(28)])
            .flex(Flex::Center)
            .spacing(4)
            .areas(page);

        self.screen.render_form(form, buf);

        let card = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Current city ");
        let [city_line] = Layout::vertical([Constraint::Length(1)])
            .flex(Flex::Center)
            .areas(card.inner(city));
        card.render(city, buf);
        Paragraph::new(self.city)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::LightYellow).add_modifier(Modifier::BOLD))
            .render(city_line, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::widgets::testing::render_to_string;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(screen: &mut LoginScreen, text: &str) {
        for c in text.chars() {
            screen.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_new_form_is_empty() {
        let screen = LoginScreen::new();
        assert_eq!(screen.state(), &LoginState::Editing);
        assert!(screen.email().is_empty());
        assert!(screen.should_persist());
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut screen = LoginScreen::new();
        type_text(&mut screen, "oliver@example.com");
        screen.handle_key(key(KeyCode::Tab));
        type_text(&mut screen, "secret1");

        assert_eq!(screen.email(), "oliver@example.com");
        assert_eq!(screen.request().password, "secret1");
    }

    #[test]
    fn test_enter_submits_from_password_field() {
        let mut screen = LoginScreen::new();
        type_text(&mut screen, "oliver@example.com");
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), ScreenAction::None);

        type_text(&mut screen, "secret1");
        assert_eq!(
            screen.handle_key(key(KeyCode::Enter)),
            ScreenAction::SubmitLogin(LoginRequest::new("oliver@example.com", "secret1"))
        );
    }

    #[test]
    fn test_empty_password_does_not_submit() {
        let mut screen = LoginScreen::new();
        type_text(&mut screen, "oliver@example.com");
        screen.handle_key(key(KeyCode::Enter));

        assert_eq!(screen.handle_key(key(KeyCode::Enter)), ScreenAction::None);
    }

    #[test]
    fn test_escape_returns_home() {
        let mut screen = LoginScreen::new();
        assert_eq!(
            screen.handle_key(key(KeyCode::Esc)),
            ScreenAction::Navigate("/".to_string())
        );
    }

    #[test]
    fn test_remember_me_switch() {
        let mut screen = LoginScreen::new();
        screen.handle_key(key(KeyCode::F(2)));

        assert!(!screen.should_persist());
        assert!(!screen.request().persist_token);
    }

    #[test]
    fn test_submitting_ignores_keys() {
        let mut screen = LoginScreen::new();
        screen.set_validating();
        screen.handle_key(key(KeyCode::Char('x')));

        assert!(screen.email().is_empty());
    }

    #[test]
    fn test_key_after_failure_clears_error() {
        let mut screen = LoginScreen::new();
        screen.set_error("request rejected");
        screen.handle_key(key(KeyCode::Char('o')));

        assert_eq!(screen.state(), &LoginState::Editing);
        assert_eq!(screen.email(), "o");
    }

    #[test]
    fn test_renders_city_and_error() {
        let mut screen = LoginScreen::new();
        screen.set_error("request rejected");

        let text = render_to_string(90, 20, |area, buf| {
            LoginView::new(&screen, "Amsterdam").render(area, buf);
        });

        assert!(text.contains("Current city"));
        assert!(text.contains("Amsterdam"));
        assert!(text.contains("Error: request rejected"));
    }
}
