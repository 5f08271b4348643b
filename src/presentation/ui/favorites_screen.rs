//! Saved offers grouped by city.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use super::ScreenAction;
use crate::application::services::favorites_by_city;
use crate::application::store::StoreState;
use crate::domain::AppRoute;
use crate::domain::entities::Offer;
use crate::presentation::widgets::offer_card;

/// Cursor over the saved offers, counted across all groups.
#[derive(Debug, Default)]
pub struct FavoritesScreenState {
    selected: Option<usize>,
}

impl FavoritesScreenState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn handle_key(&mut self, key: KeyEvent, store: &StoreState) -> ScreenAction {
        let offers = ordered_favorites(&store.favorites);

        match key.code {
            KeyCode::Down | KeyCode::Char('j') if !offers.is_empty() => {
                self.selected = Some(self.selected.map_or(0, |i| (i + 1).min(offers.len() - 1)));
            }
            KeyCode::Up | KeyCode::Char('k') if !offers.is_empty() => {
                self.selected = Some(self.selected.map_or(0, |i| i.saturating_sub(1)));
            }
            KeyCode::Enter => {
                if let Some(offer) = self.selected.and_then(|i| offers.get(i)) {
                    return ScreenAction::Navigate(AppRoute::offer(&offer.id));
                }
            }
            KeyCode::Char('b') => {
                if let Some(offer) = self.selected.and_then(|i| offers.get(i)) {
                    return ScreenAction::ToggleFavorite {
                        offer_id: offer.id.clone(),
                        is_favorite: false,
                    };
                }
            }
            _ => {}
        }
        ScreenAction::None
    }
}

/// Favorites flattened in display order.
fn ordered_favorites(favorites: &[Offer]) -> Vec<&Offer> {
    favorites_by_city(favorites)
        .into_iter()
        .flat_map(|(_, offers)| offers)
        .collect()
}

/// Favorites page.
pub struct FavoritesScreen<'a> {
    store: &'a StoreState,
}

impl<'a> FavoritesScreen<'a> {
    #[must_use]
    pub const fn new(store: &'a StoreState) -> Self {
        Self { store }
    }
}

impl StatefulWidget for FavoritesScreen<'_> {
    type State = FavoritesScreenState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Saved listing ");

        let groups = favorites_by_city(&self.store.favorites);

        if groups.is_empty() {
            let lines = if self.store.is_favorites_data_loading {
                vec![Line::styled("Loading favorites...", Style::default().fg(Color::Yellow))]
            } else {
                vec![
                    Line::styled(
                        "Nothing yet saved.",
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Line::styled(
                        "Save properties to narrow down search or plan your future trips.",
                        Style::default().fg(Color::DarkGray),
                    ),
                ]
            };
            Paragraph::new(lines).block(block).render(area, buf);
            return;
        }

        let total: usize = groups.iter().map(|(_, offers)| offers.len()).sum();
        if state.selected.is_some_and(|i| i >= total) {
            state.selected = Some(total - 1);
        }

        let mut items = Vec::new();
        let mut highlighted = None;
        let mut position = 0;
        for (city, offers) in groups {
            items.push(ListItem::new(Text::from(Line::styled(
                city,
                Style::default()
                    .fg(Color::LightYellow)
                    .add_modifier(Modifier::BOLD),
            ))));
            for offer in offers {
                if state.selected == Some(position) {
                    highlighted = Some(items.len());
                }
                items.push(ListItem::new(offer_card(offer)));
                position += 1;
            }
        }

        let mut list_state = ListState::default().with_selected(highlighted);
        let list = List::new(items)
            .block(block)
            .highlight_symbol("▶ ")
            .highlight_style(Style::default().bg(Color::Rgb(40, 40, 40)));
        StatefulWidget::render(list, area, buf, &mut list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{City, Location};
    use crate::presentation::widgets::testing::render_to_string;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn favorite(id: &str, city: &str) -> Offer {
        Offer {
            id: id.to_string(),
            title: format!("Saved {id}"),
            city: City::new(city, Location::default()),
            is_favorite: true,
            ..Offer::default()
        }
    }

    fn render(store: &StoreState) -> String {
        render_to_string(60, 40, |area, buf| {
            FavoritesScreen::new(store).render(area, buf, &mut FavoritesScreenState::new());
        })
    }

    #[test]
    fn test_empty_state() {
        let text = render(&StoreState::default());
        assert!(text.contains("Nothing yet saved."));
    }

    #[test]
    fn test_groups_in_city_order() {
        let store = StoreState {
            favorites: vec![favorite("1", "Amsterdam"), favorite("2", "Paris")],
            ..StoreState::default()
        };

        let text = render(&store);
        let paris = text.find("Paris").unwrap();
        let amsterdam = text.find("Amsterdam").unwrap();

        assert!(paris < amsterdam);
        assert!(text.contains("Saved 1"));
    }

    #[test]
    fn test_selection_follows_display_order() {
        let store = StoreState {
            favorites: vec![favorite("1", "Amsterdam"), favorite("2", "Paris")],
            ..StoreState::default()
        };
        let mut state = FavoritesScreenState::new();

        state.handle_key(key(KeyCode::Down), &store);

        assert_eq!(
            state.handle_key(key(KeyCode::Enter), &store),
            ScreenAction::Navigate("/offer/2".to_string())
        );
        assert_eq!(
            state.handle_key(key(KeyCode::Char('b')), &store),
            ScreenAction::ToggleFavorite {
                offer_id: "2".to_string(),
                is_favorite: false,
            }
        );
    }
}
