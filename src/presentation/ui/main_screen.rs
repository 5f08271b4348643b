//! Catalog screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, ListState, Paragraph, StatefulWidget, Widget, Wrap},
};

use super::ScreenAction;
use crate::application::services::offers_in_city;
use crate::application::store::{StoreState, action};
use crate::domain::AppRoute;
use crate::domain::entities::{Location, Offer, SortType};
use crate::presentation::widgets::{Map, OffersList, SortOptions, Tabs};

/// Selection and sort popup state of the catalog.
#[derive(Debug, Default)]
pub struct MainScreenState {
    list: ListState,
    sort_open: bool,
    sort_list: ListState,
}

impl MainScreenState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn is_sort_open(&self) -> bool {
        self.sort_open
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.list.selected()
    }

    /// Returns the offer under the cursor.
    #[must_use]
    pub fn selected_offer<'a>(&self, offers: &[&'a Offer]) -> Option<&'a Offer> {
        self.list.selected().and_then(|i| offers.get(i)).copied()
    }

    pub fn handle_key(&mut self, key: KeyEvent, store: &StoreState) -> ScreenAction {
        if self.sort_open {
            return self.handle_sort_key(key);
        }

        let offers = offers_in_city(&store.offers, &store.city, store.sorting);

        match key.code {
            KeyCode::Left | KeyCode::BackTab | KeyCode::Char('[') => {
                self.list.select(None);
                ScreenAction::Dispatch(Tabs::select_relative(&store.city, -1))
            }
            KeyCode::Right | KeyCode::Tab | KeyCode::Char(']') => {
                self.list.select(None);
                ScreenAction::Dispatch(Tabs::select_relative(&store.city, 1))
            }
            KeyCode::Char(c @ '1'..='6') => {
                let index = c as usize - '1' as usize;
                self.list.select(None);
                Tabs::select(index).map_or(ScreenAction::None, ScreenAction::Dispatch)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if !offers.is_empty() {
                    let next = self.list.selected().map_or(0, |i| (i + 1).min(offers.len() - 1));
                    self.list.select(Some(next));
                }
                ScreenAction::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if !offers.is_empty() {
                    let previous = self.list.selected().map_or(0, |i| i.saturating_sub(1));
                    self.list.select(Some(previous));
                }
                ScreenAction::None
            }
            KeyCode::Enter => self
                .selected_offer(&offers)
                .map_or(ScreenAction::None, |offer| {
                    ScreenAction::Navigate(AppRoute::offer(&offer.id))
                }),
            KeyCode::Char('b') => self
                .selected_offer(&offers)
                .map_or(ScreenAction::None, |offer| ScreenAction::ToggleFavorite {
                    offer_id: offer.id.clone(),
                    is_favorite: !offer.is_favorite,
                }),
            KeyCode::Char('s') => {
                self.sort_open = true;
                let current = SortType::ALL.iter().position(|s| *s == store.sorting);
                self.sort_list.select(current);
                ScreenAction::None
            }
            _ => ScreenAction::None,
        }
    }

    fn handle_sort_key(&mut self, key: KeyEvent) -> ScreenAction {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                let next = self
                    .sort_list
                    .selected()
                    .map_or(0, |i| (i + 1).min(SortType::ALL.len() - 1));
                self.sort_list.select(Some(next));
                ScreenAction::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                let previous = self.sort_list.selected().map_or(0, |i| i.saturating_sub(1));
                self.sort_list.select(Some(previous));
                ScreenAction::None
            }
            KeyCode::Enter => {
                self.sort_open = false;
                self.list.select(None);
                self.sort_list
                    .selected()
                    .and_then(|i| SortType::ALL.get(i))
                    .map_or(ScreenAction::None, |sort| {
                        ScreenAction::Dispatch(action::change_sort(*sort))
                    })
            }
            KeyCode::Esc | KeyCode::Char('s') => {
                self.sort_open = false;
                ScreenAction::None
            }
            _ => ScreenAction::None,
        }
    }
}

/// Catalog of offers in the active city.
pub struct MainScreen<'a> {
    store: &'a StoreState,
}

impl<'a> MainScreen<'a> {
    #[must_use]
    pub const fn new(store: &'a StoreState) -> Self {
        Self { store }
    }
}

impl StatefulWidget for MainScreen<'_> {
    type State = MainScreenState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let [tabs_area, content_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Fill(1)]).areas(area);

        Tabs::new(&self.store.city).render(tabs_area, buf);

        let offers = offers_in_city(&self.store.offers, &self.store.city, self.store.sorting);

        if offers.is_empty() {
            render_empty(self.store, content_area, buf);
            return;
        }

        if state.list.selected().is_some_and(|i| i >= offers.len()) {
            state.list.select(Some(offers.len() - 1));
        }

        let [list_area, map_area] =
            Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
                .areas(content_area);
        let [summary_area, cards_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Fill(1)]).areas(list_area);

        Paragraph::new(vec![
            Line::styled(
                format!("{} places to stay in {}", offers.len(), self.store.city),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::from(vec![
                Span::styled("Sort by ", Style::default().fg(Color::DarkGray)),
                Span::styled(self.store.sorting.label(), Style::default().fg(Color::Cyan)),
                Span::styled(" [s]", Style::default().fg(Color::DarkGray)),
            ]),
        ])
        .render(summary_area, buf);

        OffersList::new(&offers)
            .title(" Places ")
            .render(cards_area, buf, &mut state.list);

        let center = offers
            .first()
            .map_or_else(Location::default, |offer| offer.city.location);
        let active = state.selected_offer(&offers).map(|offer| offer.id.as_str());
        Map::new(center, offers.iter().copied())
            .active(active)
            .render(map_area, buf);

        if state.sort_open {
            let popup = Rect {
                x: cards_area.x + 2,
                y: cards_area.y,
                width: cards_area.width.min(24),
                height: SortOptions::height().min(cards_area.height),
            };
            SortOptions::new(self.store.sorting).render(popup, buf, &mut state.sort_list);
        }
    }
}

fn render_empty(store: &StoreState, area: Rect, buf: &mut Buffer) {
    let lines = if store.is_offers_data_loading {
        vec![Line::styled(
            "Loading offers...",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC),
        )]
    } else {
        vec![
            Line::styled(
                "No places to stay available",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::styled(
                format!(
                    "We could not find any property available at the moment in {}",
                    store.city
                ),
                Style::default().fg(Color::DarkGray),
            ),
        ]
    };

    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::TOP))
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::City;
    use crate::presentation::widgets::testing::render_to_string;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn offer(id: &str, city: &str, price: u32) -> Offer {
        Offer {
            id: id.to_string(),
            title: format!("Offer {id}"),
            city: City::new(city, Location::new(48.85, 2.35, 13)),
            price,
            ..Offer::default()
        }
    }

    fn store() -> StoreState {
        StoreState {
            offers: vec![
                offer("1", "Paris", 300),
                offer("2", "Amsterdam", 100),
                offer("3", "Paris", 100),
            ],
            ..StoreState::default()
        }
    }

    #[test]
    fn test_renders_city_summary() {
        let store = store();
        let mut state = MainScreenState::new();

        let text = render_to_string(100, 30, |area, buf| {
            MainScreen::new(&store).render(area, buf, &mut state);
        });

        assert!(text.contains("2 places to stay in Paris"));
        assert!(text.contains("Offer 1"));
        assert!(!text.contains("Offer 2"));
    }

    #[test]
    fn test_empty_city() {
        let store = StoreState {
            city: "Cologne".to_string(),
            ..store()
        };
        let mut state = MainScreenState::new();

        let text = render_to_string(100, 20, |area, buf| {
            MainScreen::new(&store).render(area, buf, &mut state);
        });

        assert!(text.contains("No places to stay available"));
    }

    #[test]
    fn test_tab_keys_dispatch_city_change() {
        let store = store();
        let mut state = MainScreenState::new();

        assert_eq!(
            state.handle_key(key(KeyCode::Right), &store),
            ScreenAction::Dispatch(action::set_active_city("Cologne".to_string()))
        );
        assert_eq!(
            state.handle_key(key(KeyCode::Char('4')), &store),
            ScreenAction::Dispatch(action::set_active_city("Amsterdam".to_string()))
        );
    }

    #[test]
    fn test_enter_opens_selected_offer() {
        let store = StoreState {
            sorting: SortType::PriceLowToHigh,
            ..store()
        };
        let mut state = MainScreenState::new();

        state.handle_key(key(KeyCode::Down), &store);

        assert_eq!(
            state.handle_key(key(KeyCode::Enter), &store),
            ScreenAction::Navigate("/offer/3".to_string())
        );
    }

    #[test]
    fn test_sort_popup_dispatches_change() {
        let store = store();
        let mut state = MainScreenState::new();

        state.handle_key(key(KeyCode::Char('s')), &store);
        assert!(state.is_sort_open());
        state.handle_key(key(KeyCode::Down), &store);

        assert_eq!(
            state.handle_key(key(KeyCode::Enter), &store),
            ScreenAction::Dispatch(action::change_sort(SortType::PriceLowToHigh))
        );
        assert!(!state.is_sort_open());
    }

    #[test]
    fn test_bookmark_toggles_selected() {
        let store = store();
        let mut state = MainScreenState::new();
        state.handle_key(key(KeyCode::Down), &store);

        assert_eq!(
            state.handle_key(key(KeyCode::Char('b')), &store),
            ScreenAction::ToggleFavorite {
                offer_id: "1".to_string(),
                is_favorite: true,
            }
        );
    }
}
