//! Offer detail screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, ListState, Paragraph, StatefulWidget, Widget, Wrap},
};

use super::{NotFoundScreen, ScreenAction};
use crate::application::services::{description_paragraphs, latest_reviews, nearby_offers};
use crate::application::store::StoreState;
use crate::domain::AppRoute;
use crate::domain::entities::Offer;
use crate::presentation::widgets::{
    Map, OffersList, ReviewFormAction, ReviewFormState, bookmark, rating_stars,
    render_review_form, review_lines,
};

const GALLERY_SIZE: usize = 6;
const REVIEW_FORM_HEIGHT: u16 = 9;

/// Part of the page receiving keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OfferFocus {
    #[default]
    Details,
    Nearby,
    Review,
}

/// Scroll, nearby selection and review form of one offer page.
#[derive(Debug, Default)]
pub struct OfferScreenState {
    offer_id: String,
    focus: OfferFocus,
    scroll: u16,
    nearby: ListState,
    active_offer_id: Option<String>,
    review_form: ReviewFormState,
}

impl OfferScreenState {
    #[must_use]
    pub fn new(offer_id: impl Into<String>) -> Self {
        Self {
            offer_id: offer_id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn offer_id(&self) -> &str {
        &self.offer_id
    }

    #[must_use]
    pub const fn focus(&self) -> OfferFocus {
        self.focus
    }

    /// Returns the offer highlighted on the map.
    #[must_use]
    pub fn active_offer_id(&self) -> Option<&str> {
        self.active_offer_id.as_deref()
    }

    #[must_use]
    pub const fn review_form(&self) -> &ReviewFormState {
        &self.review_form
    }

    pub const fn review_form_mut(&mut self) -> &mut ReviewFormState {
        &mut self.review_form
    }

    /// Returns whether typed characters go to a text field.
    #[must_use]
    pub fn captures_input(&self) -> bool {
        self.focus == OfferFocus::Review
    }

    /// Records the nearby card under the cursor.
    pub fn handle_card_mouse_enter(&mut self, offer_id: &str) {
        self.active_offer_id = Some(offer_id.to_string());
    }

    /// Clears the highlighted card.
    pub fn handle_card_mouse_leave(&mut self) {
        self.active_offer_id = None;
    }

    fn set_focus(&mut self, focus: OfferFocus) {
        if self.focus == OfferFocus::Nearby && focus != OfferFocus::Nearby {
            self.handle_card_mouse_leave();
        }
        self.review_form.set_focused(focus == OfferFocus::Review);
        self.focus = focus;
    }

    fn select_nearby(&mut self, index: usize, nearby: &[Offer]) {
        if let Some(offer) = nearby.get(index) {
            self.nearby.select(Some(index));
            self.handle_card_mouse_enter(&offer.id);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, store: &StoreState) -> ScreenAction {
        let can_review = store.authorization_status.is_authorized();
        let nearby = nearby_source(store);

        if self.focus == OfferFocus::Review {
            return match self.review_form.handle_key(key, &self.offer_id) {
                ReviewFormAction::Submit => {
                    ScreenAction::SubmitReview(self.review_form.request(&self.offer_id))
                }
                ReviewFormAction::Leave => {
                    self.set_focus(OfferFocus::Details);
                    ScreenAction::None
                }
                ReviewFormAction::None => ScreenAction::None,
            };
        }

        if key.code == KeyCode::Tab {
            let next = match self.focus {
                OfferFocus::Details if !nearby.is_empty() => OfferFocus::Nearby,
                OfferFocus::Details | OfferFocus::Nearby if can_review => OfferFocus::Review,
                _ => OfferFocus::Details,
            };
            self.set_focus(next);
            if next == OfferFocus::Nearby {
                self.select_nearby(self.nearby.selected().unwrap_or(0), nearby);
            }
            return ScreenAction::None;
        }

        match self.focus {
            OfferFocus::Details => self.handle_details_key(key, store),
            OfferFocus::Nearby => self.handle_nearby_key(key, nearby),
            OfferFocus::Review => ScreenAction::None,
        }
    }

    fn handle_details_key(&mut self, key: KeyEvent, store: &StoreState) -> ScreenAction {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.scroll = self.scroll.saturating_add(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::PageDown => self.scroll = self.scroll.saturating_add(10),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(10),
            KeyCode::Home => self.scroll = 0,
            KeyCode::Char('b') => {
                if let Some(offer) = resolve_offer(store, &self.offer_id) {
                    return ScreenAction::ToggleFavorite {
                        offer_id: offer.id.clone(),
                        is_favorite: !offer.is_favorite,
                    };
                }
            }
            _ => {}
        }
        ScreenAction::None
    }

    fn handle_nearby_key(&mut self, key: KeyEvent, nearby: &[Offer]) -> ScreenAction {
        let selected = self.nearby.selected().unwrap_or(0);
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_nearby((selected + 1).min(nearby.len().saturating_sub(1)), nearby);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_nearby(selected.saturating_sub(1), nearby);
            }
            KeyCode::Esc => self.set_focus(OfferFocus::Details),
            KeyCode::Enter => {
                if let Some(offer) = nearby.get(selected) {
                    return ScreenAction::Navigate(AppRoute::offer(&offer.id));
                }
            }
            KeyCode::Char('b') => {
                if let Some(offer) = nearby.get(selected) {
                    return ScreenAction::ToggleFavorite {
                        offer_id: offer.id.clone(),
                        is_favorite: !offer.is_favorite,
                    };
                }
            }
            _ => {}
        }
        ScreenAction::None
    }
}

/// Finds the offer shown for `offer_id`.
///
/// The catalog decides whether the offer exists; the loaded detail record
/// replaces it when the ids match since it carries the full description.
#[must_use]
pub fn resolve_offer<'a>(store: &'a StoreState, offer_id: &str) -> Option<&'a Offer> {
    let listed = store.find_offer(offer_id)?;
    Some(
        store
            .offer
            .as_ref()
            .filter(|offer| offer.id == offer_id)
            .unwrap_or(listed),
    )
}

/// Collection the nearby list is cut from.
fn nearby_source(store: &StoreState) -> &[Offer] {
    nearby_offers(store.nearby.as_deref().unwrap_or(&store.offers))
}

/// Detail page of one offer.
pub struct OfferScreen<'a> {
    store: &'a StoreState,
}

impl<'a> OfferScreen<'a> {
    #[must_use]
    pub const fn new(store: &'a StoreState) -> Self {
        Self { store }
    }
}

impl StatefulWidget for OfferScreen<'_> {
    type State = OfferScreenState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let Some(offer) = resolve_offer(self.store, &state.offer_id) else {
            if self.store.is_offers_data_loading {
                Paragraph::new(Line::styled(
                    "Loading offer...",
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC),
                ))
                .render(area, buf);
            } else {
                NotFoundScreen.render(area, buf);
            }
            return;
        };

        let [details_column, side_column] =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                .areas(area);

        let can_review = self.store.authorization_status.is_authorized();
        let form_height = if can_review { REVIEW_FORM_HEIGHT } else { 0 };
        let [details_area, form_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(form_height)])
                .areas(details_column);

        let border = if state.focus == OfferFocus::Details {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        Paragraph::new(detail_lines(self.store, offer))
            .wrap(Wrap { trim: false })
            .scroll((state.scroll, 0))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border)),
            )
            .render(details_area, buf);

        if can_review {
            render_review_form(
                &state.review_form,
                state.focus == OfferFocus::Review,
                form_area,
                buf,
            );
        }

        let nearby = nearby_source(self.store);
        let [map_area, nearby_area] =
            Layout::vertical([Constraint::Percentage(40), Constraint::Percentage(60)])
                .areas(side_column);

        let active = state.active_offer_id.as_deref().or(Some(offer.id.as_str()));
        Map::new(offer.city.location, std::iter::once(offer).chain(nearby))
            .active(active)
            .render(map_area, buf);

        let nearby_refs: Vec<&Offer> = nearby.iter().collect();
        OffersList::new(&nearby_refs)
            .title(" Other places in the neighbourhood ")
            .focused(state.focus == OfferFocus::Nearby)
            .render(nearby_area, buf, &mut state.nearby);
    }
}

fn detail_lines(store: &StoreState, offer: &Offer) -> Vec<Line<'static>> {
    let heading = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let muted = Style::default().fg(Color::DarkGray);
    let mut lines = Vec::new();

    let gallery: Vec<&str> = offer
        .images
        .iter()
        .take(GALLERY_SIZE)
        .map(|url| url.rsplit('/').next().unwrap_or(url))
        .collect();
    if !gallery.is_empty() {
        lines.push(Line::styled(format!("Photos: {}", gallery.join("  ")), muted));
        lines.push(Line::raw(""));
    }

    if offer.is_premium {
        lines.push(Line::styled(
            "Premium",
            Style::default().fg(Color::Black).bg(Color::LightYellow),
        ));
    }
    lines.push(Line::styled(offer.title.clone(), heading));
    lines.push(Line::from(vec![bookmark(offer.is_favorite), Span::styled(" [b]", muted)]));
    lines.push(Line::from(vec![
        rating_stars(offer.rating),
        Span::raw(format!(" {}", offer.rating)),
    ]));
    lines.push(Line::raw(format!(
        "{}  ·  {} Bedrooms  ·  Max {} adults",
        offer.kind.label(),
        offer.bedrooms,
        offer.max_adults
    )));
    lines.push(Line::from(vec![
        Span::styled(format!("€{}", offer.price), heading),
        Span::styled(" night", muted),
    ]));
    lines.push(Line::raw(""));

    if !offer.goods.is_empty() {
        lines.push(Line::styled("What's inside", heading));
        lines.push(Line::raw(offer.goods.join(" · ")));
        lines.push(Line::raw(""));
    }

    lines.push(Line::styled("Meet the host", heading));
    let mut host = vec![Span::raw(offer.host.name.clone())];
    if offer.host.is_pro {
        host.push(Span::styled(" Pro", Style::default().fg(Color::LightYellow)));
    }
    lines.push(Line::from(host));
    lines.extend(description_paragraphs(&offer.description).into_iter().map(Line::raw));
    lines.push(Line::raw(""));

    let comments = store.comments.as_deref().unwrap_or_default();
    lines.push(Line::from(vec![
        Span::styled("Reviews · ", heading),
        Span::styled(comments.len().to_string(), heading),
    ]));
    if store.is_comments_data_loading {
        lines.push(Line::styled("Loading reviews...", muted));
    }
    for review in latest_reviews(comments) {
        lines.extend(review_lines(review));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AuthorizationStatus;
    use crate::domain::entities::{Host, Review, ReviewUser};
    use crate::presentation::widgets::testing::render_to_string;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn offer(id: &str) -> Offer {
        Offer {
            id: id.to_string(),
            title: format!("Offer {id}"),
            description: "A quiet cozy place.It has a garden. Near the river.".to_string(),
            bedrooms: 3,
            max_adults: 4,
            goods: vec!["Wi-Fi".to_string(), "Heating".to_string()],
            host: Host {
                name: "Angelina".to_string(),
                avatar_url: String::new(),
                is_pro: true,
            },
            ..Offer::default()
        }
    }

    fn store() -> StoreState {
        StoreState {
            offers: (1..=5).map(|i| offer(&i.to_string())).collect(),
            authorization_status: AuthorizationStatus::NoAuth,
            ..StoreState::default()
        }
    }

    fn render(store: &StoreState, state: &mut OfferScreenState) -> String {
        render_to_string(120, 60, |area, buf| {
            OfferScreen::new(store).render(area, buf, state);
        })
    }

    #[test]
    fn test_unknown_id_renders_not_found() {
        let store = store();
        let mut state = OfferScreenState::new("99");

        let text = render(&store, &mut state);

        assert!(text.contains("404"));
    }

    #[test]
    fn test_known_id_renders_details() {
        let store = store();
        let mut state = OfferScreenState::new("2");

        let text = render(&store, &mut state);

        assert!(!text.contains("404"));
        assert!(text.contains("Offer 2"));
        assert!(text.contains("3 Bedrooms"));
        assert!(text.contains("Max 4 adults"));
        assert!(text.contains("Angelina Pro"));
        assert!(text.contains("It has a garden."));
        assert!(text.contains("Other places in the neighbourhood"));
    }

    #[test]
    fn test_not_found_iff_absent_from_catalog() {
        let store = store();
        for id in ["0", "1", "5", "6", "abc"] {
            let text = render(&store, &mut OfferScreenState::new(id));
            let exists = store.offers.iter().any(|offer| offer.id == id);
            assert_eq!(text.contains("404"), !exists, "id {id}");
        }
    }

    #[test]
    fn test_nearby_list_shows_three() {
        let store = store();
        let text = render(&store, &mut OfferScreenState::new("5"));

        assert!(text.contains("Offer 3"));
        assert!(!text.contains("Offer 4"));
    }

    #[test]
    fn test_review_form_only_for_authorized() {
        let guest = store();
        assert!(!render(&guest, &mut OfferScreenState::new("1")).contains("Your review"));

        let member = StoreState {
            authorization_status: AuthorizationStatus::Auth,
            ..store()
        };
        assert!(render(&member, &mut OfferScreenState::new("1")).contains("Your review"));
    }

    #[test]
    fn test_reviews_header_counts_all() {
        let comments = (0..12)
            .map(|i| Review {
                id: i.to_string(),
                date: format!("2024-01-{:02}", i + 1),
                user: ReviewUser::default(),
                comment: format!("comment {i}"),
                rating: 4.0,
            })
            .collect();
        let store = StoreState {
            comments: Some(comments),
            ..store()
        };

        let text = render(&store, &mut OfferScreenState::new("1"));

        assert!(text.contains("Reviews · 12"));
    }

    #[test]
    fn test_nearby_selection_highlights_map() {
        let store = store();
        let mut state = OfferScreenState::new("1");

        state.handle_key(key(KeyCode::Tab), &store);
        assert_eq!(state.focus(), OfferFocus::Nearby);
        assert_eq!(state.active_offer_id(), Some("1"));

        state.handle_key(key(KeyCode::Down), &store);
        assert_eq!(state.active_offer_id(), Some("2"));

        state.handle_key(key(KeyCode::Esc), &store);
        assert_eq!(state.active_offer_id(), None);
    }

    #[test]
    fn test_nearby_enter_navigates() {
        let store = store();
        let mut state = OfferScreenState::new("1");
        state.handle_key(key(KeyCode::Tab), &store);
        state.handle_key(key(KeyCode::Down), &store);

        assert_eq!(
            state.handle_key(key(KeyCode::Enter), &store),
            ScreenAction::Navigate("/offer/2".to_string())
        );
    }

    #[test]
    fn test_review_focus_requires_auth() {
        let store = store();
        let mut state = OfferScreenState::new("1");
        state.handle_key(key(KeyCode::Tab), &store);
        state.handle_key(key(KeyCode::Tab), &store);

        assert_eq!(state.focus(), OfferFocus::Details);
        assert!(!state.captures_input());
    }

    #[test]
    fn test_detail_record_overrides_listing() {
        let mut detailed = offer("1");
        detailed.title = "Detailed".to_string();
        let store = StoreState {
            offer: Some(detailed),
            ..store()
        };

        assert_eq!(
            resolve_offer(&store, "1").map(|o| o.title.as_str()),
            Some("Detailed")
        );
        assert_eq!(
            resolve_offer(&store, "2").map(|o| o.title.as_str()),
            Some("Offer 2")
        );
    }
}
