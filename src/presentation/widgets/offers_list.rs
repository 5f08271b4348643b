//! List of offer cards.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, StatefulWidget},
};

use super::rating::rating_stars;
use crate::domain::entities::Offer;

/// Offer cards, one list item per offer.
pub struct OffersList<'a> {
    offers: &'a [&'a Offer],
    title: String,
    focused: bool,
}

impl<'a> OffersList<'a> {
    #[must_use]
    pub fn new(offers: &'a [&'a Offer]) -> Self {
        Self {
            offers,
            title: String::new(),
            focused: true,
        }
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

/// Builds the card lines of one offer.
#[must_use]
pub fn offer_card(offer: &Offer) -> Text<'static> {
    let mut first = Vec::new();
    if offer.is_premium {
        first.push(Span::styled(
            "Premium ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        ));
    }
    first.push(Span::styled(
        format!("€{}", offer.price),
        Style::default().add_modifier(Modifier::BOLD),
    ));
    first.push(Span::styled(" / night ", Style::default().fg(Color::DarkGray)));
    first.push(bookmark(offer.is_favorite));

    Text::from(vec![
        Line::from(first),
        Line::from(vec![rating_stars(offer.rating)]),
        Line::styled(
            offer.title.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Line::styled(offer.kind.label(), Style::default().fg(Color::Gray)),
        Line::raw(""),
    ])
}

/// Bookmark mark shown on cards and the detail page.
#[must_use]
pub fn bookmark(is_favorite: bool) -> Span<'static> {
    if is_favorite {
        Span::styled("♥ In bookmarks", Style::default().fg(Color::LightRed))
    } else {
        Span::styled("♡ To bookmarks", Style::default().fg(Color::DarkGray))
    }
}

impl StatefulWidget for OffersList<'_> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let border_color = if self.focused {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(self.title);

        let items: Vec<ListItem> = self
            .offers
            .iter()
            .map(|offer| ListItem::new(offer_card(offer)))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_symbol("▶ ")
            .highlight_style(Style::default().bg(Color::Rgb(40, 40, 40)));

        StatefulWidget::render(list, area, buf, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::OfferType;
    use crate::presentation::widgets::testing::render_to_string;

    fn offer() -> Offer {
        Offer {
            id: "1".to_string(),
            title: "Beautiful & luxurious studio".to_string(),
            kind: OfferType::Apartment,
            price: 120,
            rating: 4.0,
            is_premium: true,
            ..Offer::default()
        }
    }

    #[test]
    fn test_card_contents() {
        let offer = offer();
        let offers = vec![&offer];
        let mut state = ListState::default();

        let text = render_to_string(50, 8, |area, buf| {
            OffersList::new(&offers).render(area, buf, &mut state);
        });

        assert!(text.contains("Premium"));
        assert!(text.contains("€120"));
        assert!(text.contains("★★★★☆"));
        assert!(text.contains("Beautiful & luxurious studio"));
        assert!(text.contains("Apartment"));
        assert!(text.contains("To bookmarks"));
    }

    #[test]
    fn test_bookmark_state() {
        assert_eq!(bookmark(true).content, "♥ In bookmarks");
        assert_eq!(bookmark(false).content, "♡ To bookmarks");
    }
}
