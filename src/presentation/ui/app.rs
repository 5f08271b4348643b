//! Main application orchestrator.

use std::sync::Arc;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent};
use futures_util::StreamExt;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout, Margin, Rect},
    widgets::{Clear, StatefulWidget, Widget},
};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use super::{
    FavoritesScreen, FavoritesScreenState, LoginScreen, LoginView, MainScreen, MainScreenState,
    NotFoundScreen, OfferScreen, OfferScreenState, ScreenAction,
};
use crate::application::dto::{LoginRequest, LoginResponse, ReviewRequest};
use crate::application::store::{Action, Dispatch, Store, action};
use crate::application::use_cases::{
    CheckAuthUseCase, LoginUseCase, OffersUseCase, ReviewUseCase,
};
use crate::domain::entities::{AuthToken, CITIES};
use crate::domain::errors::ApiError;
use crate::domain::ports::{AuthPort, OffersPort, TokenStoragePort};
use crate::domain::{AppRoute, AuthorizationStatus};
use crate::presentation::events::{EventHandler, EventResult, GlobalKey};
use crate::presentation::routing::{GuardOutcome, PrivateRoute, RouteMatch};
use crate::presentation::widgets::{Header, StatusBar, StatusLevel, TextInput};

/// Results of background work that belong to the UI rather than the store.
#[derive(Debug)]
enum AppEvent {
    SessionChecked(Option<AuthToken>),
    LoginFinished(Result<LoginResponse, String>),
    ReviewFinished {
        offer_id: String,
        result: Result<(), String>,
    },
    /// A store action produced while loading one offer's page. Applied only
    /// while that offer is still on screen.
    OfferPage { offer_id: String, action: Action },
}

/// Tags every action with the offer it was loaded for.
struct OfferPageDispatch {
    offer_id: String,
    events: mpsc::UnboundedSender<AppEvent>,
}

impl OfferPageDispatch {
    fn new(offer_id: impl Into<String>, events: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            offer_id: offer_id.into(),
            events,
        }
    }
}

impl Dispatch for OfferPageDispatch {
    fn dispatch(&self, action: Action) {
        let kind = action.kind();
        let event = AppEvent::OfferPage {
            offer_id: self.offer_id.clone(),
            action,
        };
        if self.events.send(event).is_err() {
            warn!(action = kind, offer_id = %self.offer_id, "Event channel closed, dropping action");
        }
    }
}

enum CurrentScreen {
    Main(MainScreenState),
    Offer(Box<OfferScreenState>),
    Favorites(FavoritesScreenState),
    Login(LoginScreen),
    NotFound,
}

impl CurrentScreen {
    fn for_route(route: &RouteMatch) -> Self {
        match route {
            RouteMatch::Main => Self::Main(MainScreenState::new()),
            RouteMatch::Offer { id } => Self::Offer(Box::new(OfferScreenState::new(id.clone()))),
            RouteMatch::Favorites => Self::Favorites(FavoritesScreenState::new()),
            RouteMatch::Login => Self::Login(LoginScreen::new()),
            RouteMatch::NotFound { .. } => Self::NotFound,
        }
    }

    fn captures_input(&self) -> bool {
        match self {
            Self::Login(_) => true,
            Self::Offer(state) => state.captures_input(),
            Self::Main(_) | Self::Favorites(_) | Self::NotFound => false,
        }
    }

    const fn hints(&self) -> &'static str {
        match self {
            Self::Main(_) => "←/→ city · ↑/↓ select · Enter open · b bookmark · s sort · : go · q quit",
            Self::Offer(_) => "Tab focus · ↑/↓ scroll · b bookmark · ⌫ back",
            Self::Favorites(_) => "↑/↓ select · Enter open · b remove · ⌫ back",
            Self::Login(_) => "Tab field · Enter sign in · Esc back",
            Self::NotFound => "Enter home",
        }
    }
}

/// Terminal application: owns the store, the current route and its screen.
pub struct App {
    store: Store,
    route: RouteMatch,
    history: Vec<RouteMatch>,
    screen: CurrentScreen,
    address_bar: Option<TextInput>,
    running: bool,
    check_auth_use_case: CheckAuthUseCase,
    login_use_case: LoginUseCase,
    offers_use_case: OffersUseCase,
    review_use_case: ReviewUseCase,
    session_token: Option<AuthToken>,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl App {
    /// Creates the application at the given initial path.
    #[must_use]
    pub fn new(
        auth_port: Arc<dyn AuthPort>,
        offers_port: Arc<dyn OffersPort>,
        storage_port: Arc<dyn TokenStoragePort>,
        initial_path: &str,
    ) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let route = RouteMatch::resolve(initial_path);

        Self {
            store: Store::new(),
            screen: CurrentScreen::for_route(&route),
            route,
            history: Vec::new(),
            address_bar: None,
            running: true,
            check_auth_use_case: CheckAuthUseCase::new(auth_port.clone(), storage_port.clone()),
            login_use_case: LoginUseCase::new(auth_port, storage_port),
            offers_use_case: OffersUseCase::new(offers_port.clone()),
            review_use_case: ReviewUseCase::new(offers_port),
            session_token: None,
            action_tx,
            action_rx,
            event_tx,
            event_rx,
        }
    }

    /// Restores the city remembered from the previous run.
    #[must_use]
    pub fn with_city(mut self, city: Option<String>) -> Self {
        match city {
            Some(city) if CITIES.contains(&city.as_str()) => {
                self.store.dispatch(action::set_active_city(city));
            }
            Some(city) => warn!(%city, "Ignoring unknown remembered city"),
            None => {}
        }
        self
    }

    /// Runs the application until the user quits. Returns the active city.
    ///
    /// # Errors
    /// Returns error if drawing to the terminal fails.
    pub async fn run(
        mut self,
        terminal: &mut DefaultTerminal,
        cli_token: Option<String>,
    ) -> color_eyre::Result<String> {
        info!(path = %self.route.path(), "Starting application");
        self.start(cli_token);
        self.run_event_loop(terminal).await?;

        info!("Application exiting normally");
        Ok(self.store.state().city.clone())
    }

    fn start(&mut self, cli_token: Option<String>) {
        let check_auth = self.check_auth_use_case.clone();
        let tx = self.action_tx.clone();
        let events = self.event_tx.clone();
        tokio::spawn(async move {
            let token = check_auth.execute(cli_token, &tx).await;
            let _ = events.send(AppEvent::SessionChecked(token));
        });

        self.spawn_fetch_offers();
        self.load_route_data();
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();

        terminal.draw(|frame| self.render(frame))?;

        while self.running {
            tokio::select! {
                Some(action) = self.action_rx.recv() => {
                    self.apply(action);
                }

                Some(event) = self.event_rx.recv() => {
                    self.handle_app_event(event);
                }

                Some(event) = terminal_events.next() => {
                    match event {
                        Ok(event) => {
                            if self.handle_terminal_event(event) == EventResult::Exit {
                                self.running = false;
                            }
                        }
                        Err(e) => {
                            error!(error = %e, "Terminal event stream failed");
                            self.running = false;
                        }
                    }
                }
            }

            self.sync_route();
            terminal.draw(|frame| self.render(frame))?;
        }

        Ok(())
    }

    /// Applies an action and follows any redirect it requested.
    fn apply(&mut self, action: Action) {
        self.store.dispatch(action);
        if let Some(route) = self.store.take_redirect() {
            self.navigate_to(RouteMatch::from(route));
        }
    }

    fn navigate(&mut self, path: &str) {
        self.navigate_to(RouteMatch::resolve(path));
    }

    fn navigate_to(&mut self, route: RouteMatch) {
        if route == self.route {
            return;
        }
        let previous = std::mem::replace(&mut self.route, route);
        self.history.push(previous);
        self.enter_route();
    }

    fn replace_route(&mut self, route: RouteMatch) {
        self.route = route;
        self.enter_route();
    }

    fn go_back(&mut self) {
        if let Some(previous) = self.history.pop() {
            self.replace_route(previous);
        }
    }

    fn enter_route(&mut self) {
        info!(path = %self.route.path(), "Navigating");
        self.screen = CurrentScreen::for_route(&self.route);
        self.reset_page_data();
        self.load_route_data();
    }

    /// Forgets what the previous page loaded: reviews and nearby offers are
    /// stored without an offer id, and an old failure no longer applies.
    fn reset_page_data(&mut self) {
        self.store.dispatch(action::load_comments(None));
        self.store.dispatch(action::load_nearby_offers(None));
        self.store.dispatch(action::set_details_offer_data_loading_status(false));
        self.store.dispatch(action::set_offer_nearby_loading_status(false));
        self.store.dispatch(action::set_reviews_data_loading_status(false));
        self.store.dispatch(action::set_load_error(None));
    }

    fn load_route_data(&self) {
        match &self.route {
            RouteMatch::Offer { id } => {
                let offers = self.offers_use_case.clone();
                let page = OfferPageDispatch::new(id.as_str(), self.event_tx.clone());
                tokio::spawn(async move { offers.fetch_offer_page(&page.offer_id, &page).await });
            }
            RouteMatch::Favorites if self.is_authorized() => self.spawn_fetch_favorites(),
            _ => {}
        }
    }

    /// Re-evaluates the guard of the current route.
    fn sync_route(&mut self) {
        let status = self.store.state().authorization_status;
        if let Some(GuardOutcome::Redirect(target)) =
            PrivateRoute::for_route(self.route.route()).map(|guard| guard.evaluate(status))
        {
            debug!(from = %self.route.path(), to = %target, "Guard redirect");
            self.replace_route(RouteMatch::from(target));
        }
    }

    fn guard_outcome(&self) -> GuardOutcome {
        PrivateRoute::for_route(self.route.route()).map_or(GuardOutcome::Render, |guard| {
            guard.evaluate(self.store.state().authorization_status)
        })
    }

    fn is_authorized(&self) -> bool {
        self.store.state().authorization_status.is_authorized()
    }

    fn spawn_fetch_offers(&self) {
        let offers = self.offers_use_case.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move { offers.fetch_offers(&tx).await });
    }

    fn spawn_fetch_favorites(&self) {
        let offers = self.offers_use_case.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move { offers.fetch_favorites(&tx).await });
    }

    fn handle_terminal_event(&mut self, event: Event) -> EventResult {
        match event {
            Event::Key(key) if EventHandler::is_press(&key) => self.handle_key(key),
            _ => EventResult::Continue,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if self.address_bar.is_some() {
            self.handle_address_bar_key(key);
            return EventResult::Continue;
        }

        if let Some(global) = EventHandler::global_key(&key, self.screen.captures_input()) {
            return self.handle_global_key(global);
        }

        if self.guard_outcome() != GuardOutcome::Render {
            return EventResult::Continue;
        }

        let state = self.store.state();
        let screen_action = match &mut self.screen {
            CurrentScreen::Main(screen) => screen.handle_key(key, state),
            CurrentScreen::Offer(screen) => screen.handle_key(key, state),
            CurrentScreen::Favorites(screen) => screen.handle_key(key, state),
            CurrentScreen::Login(screen) => screen.handle_key(key),
            CurrentScreen::NotFound => NotFoundScreen::handle_key(key),
        };
        self.handle_screen_action(screen_action);

        EventResult::Continue
    }

    fn handle_global_key(&mut self, key: GlobalKey) -> EventResult {
        match key {
            GlobalKey::Quit => return EventResult::Exit,
            GlobalKey::AddressBar => {
                let mut input = TextInput::new(" Go to ");
                input.set_value(self.route.path());
                input.set_focused(true);
                self.address_bar = Some(input);
            }
            GlobalKey::Home => self.navigate(AppRoute::Main.path()),
            GlobalKey::Favorites => self.navigate(AppRoute::Favorites.path()),
            GlobalKey::SignIn => {
                if !self.is_authorized() {
                    self.navigate(AppRoute::Login.path());
                }
            }
            GlobalKey::SignOut => {
                if self.is_authorized() {
                    self.sign_out();
                }
            }
            GlobalKey::Back => self.go_back(),
        }
        EventResult::Continue
    }

    fn handle_address_bar_key(&mut self, key: KeyEvent) {
        let Some(input) = self.address_bar.as_mut() else {
            return;
        };

        match key.code {
            KeyCode::Esc => self.address_bar = None,
            KeyCode::Enter => {
                let path = input.value().to_string();
                self.address_bar = None;
                self.navigate(&path);
            }
            _ => {
                input.edit(&key);
            }
        }
    }

    fn handle_screen_action(&mut self, screen_action: ScreenAction) {
        match screen_action {
            ScreenAction::None => {}
            ScreenAction::Navigate(path) => self.navigate(&path),
            ScreenAction::Dispatch(action) => self.apply(action),
            ScreenAction::ToggleFavorite {
                offer_id,
                is_favorite,
            } => self.toggle_favorite(offer_id, is_favorite),
            ScreenAction::SubmitLogin(request) => self.submit_login(request),
            ScreenAction::SubmitReview(request) => self.submit_review(request),
        }
    }

    fn toggle_favorite(&self, offer_id: String, is_favorite: bool) {
        let offers = self.offers_use_case.clone();
        let tx = self.action_tx.clone();
        let is_authorized = self.is_authorized();
        tokio::spawn(async move {
            offers
                .toggle_favorite(&offer_id, is_favorite, is_authorized, &tx)
                .await;
        });
    }

    fn submit_login(&mut self, request: LoginRequest) {
        if let CurrentScreen::Login(screen) = &mut self.screen {
            screen.set_validating();
        }

        let login = self.login_use_case.clone();
        let events = self.event_tx.clone();
        tokio::spawn(async move {
            let result = login
                .execute(request)
                .await
                .map_err(|e| login_error_message(&e));
            let _ = events.send(AppEvent::LoginFinished(result));
        });
    }

    fn submit_review(&mut self, request: ReviewRequest) {
        if let CurrentScreen::Offer(screen) = &mut self.screen {
            screen.review_form_mut().set_submitting();
        }

        let reviews = self.review_use_case.clone();
        let page = OfferPageDispatch::new(request.offer_id.as_str(), self.event_tx.clone());
        let events = self.event_tx.clone();
        tokio::spawn(async move {
            let offer_id = request.offer_id.clone();
            let result = reviews
                .submit(request, &page)
                .await
                .map(|_| ())
                .map_err(|e| e.to_string());
            let _ = events.send(AppEvent::ReviewFinished { offer_id, result });
        });
    }

    fn sign_out(&mut self) {
        info!("Signing out");
        self.apply(action::require_authorization(AuthorizationStatus::NoAuth));
        self.apply(action::set_user_info(None));
        self.apply(action::load_favorites(Vec::new()));

        let token = self.session_token.take();
        let login = self.login_use_case.clone();
        let offers = self.offers_use_case.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            if let Some(token) = token
                && let Err(e) = login.logout(&token).await
            {
                warn!(error = %e, "Sign out did not complete cleanly");
            }
            offers.fetch_offers(&tx).await;
        });
    }

    fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::SessionChecked(token) => {
                if token.is_some() {
                    self.spawn_fetch_favorites();
                }
                self.session_token = token;
            }
            AppEvent::LoginFinished(Ok(response)) => {
                info!(
                    email = %response.user.email,
                    persisted = response.token_persisted,
                    "Login successful"
                );
                self.session_token = Some(response.token);
                self.apply(action::require_authorization(AuthorizationStatus::Auth));
                self.apply(action::set_user_info(Some(response.user)));
                self.apply(action::redirect_to_route(AppRoute::Main));
                self.spawn_fetch_offers();
                self.spawn_fetch_favorites();
            }
            AppEvent::LoginFinished(Err(message)) => {
                if let CurrentScreen::Login(screen) = &mut self.screen {
                    screen.set_error(message);
                }
            }
            AppEvent::OfferPage { offer_id, action } => {
                if self.route.offer_id() == Some(offer_id.as_str()) {
                    self.apply(action);
                } else {
                    debug!(
                        %offer_id,
                        action = action.kind(),
                        "Dropping result for a page no longer shown"
                    );
                }
            }
            AppEvent::ReviewFinished { offer_id, result } => {
                let CurrentScreen::Offer(screen) = &mut self.screen else {
                    return;
                };
                if screen.offer_id() != offer_id {
                    return;
                }
                match result {
                    Ok(()) => screen.review_form_mut().reset(),
                    Err(message) => screen.review_form_mut().set_error(message),
                }
            }
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let [header_area, body_area, status_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let state = self.store.state();
        let user = state
            .user_info
            .as_ref()
            .filter(|_| state.authorization_status.is_authorized());
        frame.render_widget(
            Header::new(user, state.favorites.len()),
            header_area.inner(Margin::new(1, 0)),
        );

        if self.guard_outcome() == GuardOutcome::Render {
            let buf = frame.buffer_mut();
            match &mut self.screen {
                CurrentScreen::Main(screen) => {
                    MainScreen::new(state).render(body_area, buf, screen);
                }
                CurrentScreen::Offer(screen) => {
                    OfferScreen::new(state).render(body_area, buf, screen);
                }
                CurrentScreen::Favorites(screen) => {
                    FavoritesScreen::new(state).render(body_area, buf, screen);
                }
                CurrentScreen::Login(screen) => {
                    LoginView::new(screen, &state.city).render(body_area, buf);
                }
                CurrentScreen::NotFound => NotFoundScreen.render(body_area, buf),
            }
        }

        frame.render_widget(&self.status_bar(), status_area);

        if let Some(input) = &self.address_bar {
            let area = Rect {
                y: body_area.bottom().saturating_sub(3),
                height: 3.min(body_area.height),
                ..body_area
            };
            frame.render_widget(Clear, area);
            frame.render_widget(input, area);
        }
    }

    fn status_bar(&self) -> StatusBar {
        let state = self.store.state();
        let hints = self.screen.hints();

        if let Some(message) = &state.load_error {
            return StatusBar::error(message.as_str()).hints(hints);
        }
        if state.authorization_status == AuthorizationStatus::Unknown {
            return StatusBar::new()
                .message("Checking session...")
                .level(StatusLevel::Loading)
                .hints(hints);
        }
        if state.is_loading() {
            return StatusBar::new()
                .message("Loading...")
                .level(StatusLevel::Loading)
                .hints(hints);
        }

        StatusBar::new().message(self.route.path()).hints(hints)
    }
}

fn login_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Validation(e) => e.to_string(),
        ApiError::BadRequest { message } | ApiError::Unauthorized { message } => {
            format!("Sign in rejected: {message}")
        }
        ApiError::Network { message } => format!("Network error: {message}"),
        _ => error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{NewReview, Offer, Review, UserData};
    use crate::domain::ports::mocks::{MOCK_TOKEN, MockAuthPort, MockTokenStorage};
    use crossterm::event::KeyModifiers;
    use ratatui::{Terminal, backend::TestBackend};

    struct StaticOffers {
        offers: Vec<Offer>,
    }

    #[async_trait::async_trait]
    impl OffersPort for StaticOffers {
        async fn fetch_offers(&self) -> Result<Vec<Offer>, ApiError> {
            Ok(self.offers.clone())
        }

        async fn fetch_offer(&self, offer_id: &str) -> Result<Offer, ApiError> {
            self.offers
                .iter()
                .find(|offer| offer.id == offer_id)
                .cloned()
                .ok_or_else(|| ApiError::not_found(format!("offer {offer_id}")))
        }

        async fn fetch_nearby(&self, _offer_id: &str) -> Result<Vec<Offer>, ApiError> {
            Ok(self.offers.clone())
        }

        async fn fetch_comments(&self, _offer_id: &str) -> Result<Vec<Review>, ApiError> {
            Ok(Vec::new())
        }

        async fn post_comment(
            &self,
            _offer_id: &str,
            review: &NewReview,
        ) -> Result<Review, ApiError> {
            Ok(Review {
                comment: review.comment.clone(),
                ..Review::default()
            })
        }

        async fn fetch_favorites(&self) -> Result<Vec<Offer>, ApiError> {
            Ok(Vec::new())
        }

        async fn set_favorite(&self, offer_id: &str, is_favorite: bool) -> Result<Offer, ApiError> {
            self.fetch_offer(offer_id)
                .await
                .map(|offer| offer.with_favorite(is_favorite))
        }
    }

    fn test_app(path: &str) -> App {
        let offers = (1..=3)
            .map(|i| Offer {
                id: i.to_string(),
                title: format!("Offer {i}"),
                ..Offer::default()
            })
            .collect();
        App::new(
            Arc::new(MockAuthPort::new(true)),
            Arc::new(StaticOffers { offers }),
            Arc::new(MockTokenStorage::new()),
            path,
        )
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn set_status(app: &mut App, status: AuthorizationStatus) {
        app.apply(action::require_authorization(status));
    }

    fn render(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[tokio::test]
    async fn test_unknown_initial_path_is_not_found() {
        let mut app = test_app("/nowhere");
        set_status(&mut app, AuthorizationStatus::NoAuth);

        assert_eq!(app.route.route(), AppRoute::NotFound);
        assert!(render(&mut app).contains("404"));
    }

    #[tokio::test]
    async fn test_guest_redirected_from_favorites() {
        let mut app = test_app("/");
        set_status(&mut app, AuthorizationStatus::NoAuth);

        app.navigate("/favorites");
        app.sync_route();

        assert_eq!(app.route, RouteMatch::Login);
    }

    #[tokio::test]
    async fn test_signed_in_user_leaves_login() {
        let mut app = test_app("/login");
        set_status(&mut app, AuthorizationStatus::Auth);

        app.sync_route();

        assert_eq!(app.route, RouteMatch::Main);
    }

    #[tokio::test]
    async fn test_pending_status_renders_nothing() {
        let mut app = test_app("/favorites");

        app.sync_route();

        assert_eq!(app.route, RouteMatch::Favorites);
        let text = render(&mut app);
        assert!(!text.contains("Nothing yet saved."));
        assert!(text.contains("Checking session..."));
    }

    #[tokio::test]
    async fn test_redirect_action_navigates() {
        let mut app = test_app("/");

        app.apply(action::redirect_to_route(AppRoute::Login));

        assert_eq!(app.route, RouteMatch::Login);
        assert_eq!(app.store.state().redirect, None);
    }

    #[tokio::test]
    async fn test_back_returns_to_previous_route() {
        let mut app = test_app("/");
        set_status(&mut app, AuthorizationStatus::NoAuth);
        app.navigate("/offer/2");

        app.handle_key(key(KeyCode::Backspace));

        assert_eq!(app.route, RouteMatch::Main);
    }

    #[tokio::test]
    async fn test_address_bar_navigation() {
        let mut app = test_app("/");
        set_status(&mut app, AuthorizationStatus::NoAuth);

        app.handle_key(key(KeyCode::Char(':')));
        for _ in 0..5 {
            app.handle_key(key(KeyCode::Backspace));
        }
        for c in "/offer/:2".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.route, RouteMatch::offer("2"));
        assert!(app.address_bar.is_none());
    }

    #[tokio::test]
    async fn test_guest_favorite_toggle_redirects_to_login() {
        let mut app = test_app("/");
        set_status(&mut app, AuthorizationStatus::NoAuth);

        app.toggle_favorite("1".to_string(), true);
        let action = app.action_rx.recv().await.unwrap();
        app.apply(action);

        assert_eq!(app.route, RouteMatch::Login);
    }

    #[tokio::test]
    async fn test_login_success_signs_in_and_leaves_login() {
        let mut app = test_app("/login");
        set_status(&mut app, AuthorizationStatus::NoAuth);
        let response = LoginResponse::new(
            UserData::new("Oliver", "oliver@example.com"),
            AuthToken::new_unchecked(MOCK_TOKEN),
            true,
        );

        app.handle_app_event(AppEvent::LoginFinished(Ok(response)));

        assert_eq!(
            app.store.state().authorization_status,
            AuthorizationStatus::Auth
        );
        assert_eq!(app.route, RouteMatch::Main);
        assert!(render(&mut app).contains("oliver@example.com"));
    }

    #[tokio::test]
    async fn test_login_failure_shows_error() {
        let mut app = test_app("/login");
        set_status(&mut app, AuthorizationStatus::NoAuth);

        app.handle_app_event(AppEvent::LoginFinished(Err("Sign in rejected".to_string())));

        assert!(render(&mut app).contains("Error: Sign in rejected"));
    }

    #[tokio::test]
    async fn test_sign_out_resets_session() {
        let mut app = test_app("/");
        set_status(&mut app, AuthorizationStatus::Auth);
        app.apply(action::set_user_info(Some(UserData::new("Oliver", "o@e.com"))));

        app.handle_key(key(KeyCode::Char('o')));

        let state = app.store.state();
        assert_eq!(state.authorization_status, AuthorizationStatus::NoAuth);
        assert!(state.user_info.is_none());
        assert!(render(&mut app).contains("Sign in"));
    }

    fn review(comment: &str) -> Review {
        Review {
            comment: comment.to_string(),
            ..Review::default()
        }
    }

    fn open_second_offer() -> App {
        let mut app = test_app("/offer/1");
        set_status(&mut app, AuthorizationStatus::NoAuth);
        app.apply(action::load_offers(
            (1..=3)
                .map(|i| Offer {
                    id: i.to_string(),
                    title: format!("Offer {i}"),
                    ..Offer::default()
                })
                .collect(),
        ));
        app.navigate("/offer/2");
        app
    }

    #[tokio::test]
    async fn test_late_reviews_of_previous_offer_are_dropped() {
        let mut app = open_second_offer();

        app.handle_app_event(AppEvent::OfferPage {
            offer_id: "1".to_string(),
            action: action::load_comments(Some(vec![review("REVIEW-OF-OFFER-ONE")])),
        });

        assert_eq!(app.store.state().comments, None);
        assert!(!render(&mut app).contains("REVIEW-OF-OFFER-ONE"));

        app.handle_app_event(AppEvent::OfferPage {
            offer_id: "2".to_string(),
            action: action::load_comments(Some(vec![review("Quiet street")])),
        });

        assert_eq!(
            app.store.state().comments,
            Some(vec![review("Quiet street")])
        );
    }

    #[tokio::test]
    async fn test_late_posted_review_of_previous_offer_is_dropped() {
        let mut app = open_second_offer();

        app.handle_app_event(AppEvent::OfferPage {
            offer_id: "1".to_string(),
            action: action::post_comment(review("Posted on offer one")),
        });

        assert_eq!(app.store.state().comments, None);
    }

    #[tokio::test]
    async fn test_entering_offer_forgets_previous_page() {
        let mut app = test_app("/offer/1");
        app.apply(action::load_comments(Some(vec![review("Lovely flat")])));
        app.apply(action::load_nearby_offers(Some(vec![Offer::default()])));

        app.navigate("/offer/2");

        let state = app.store.state();
        assert_eq!(state.comments, None);
        assert_eq!(state.nearby, None);
    }

    #[tokio::test]
    async fn test_navigation_clears_load_error() {
        let mut app = test_app("/offer/9");
        set_status(&mut app, AuthorizationStatus::NoAuth);
        app.apply(action::set_load_error(Some("network error: timed out".to_string())));
        assert!(render(&mut app).contains("network error: timed out"));

        app.navigate("/");

        assert_eq!(app.store.state().load_error, None);
        assert!(!render(&mut app).contains("network error: timed out"));
    }

    #[tokio::test]
    async fn test_remembered_city_is_restored() {
        let app = test_app("/").with_city(Some("Hamburg".to_string()));
        assert_eq!(app.store.state().city, "Hamburg");

        let app = test_app("/").with_city(Some("Atlantis".to_string()));
        assert_eq!(app.store.state().city, "Paris");
    }
}
