//! Offer map.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    text::Span,
    widgets::{
        Block, Borders, Widget,
        canvas::{Canvas, Points},
    },
};

use crate::domain::entities::{Location, Offer};

/// Half of the visible span around the city centre, in degrees.
const SPAN_DEGREES: f64 = 0.04;

/// Plots offers around a city centre. The active offer is highlighted.
pub struct Map<'a> {
    center: Location,
    offers: Vec<&'a Offer>,
    active_offer_id: Option<&'a str>,
}

impl<'a> Map<'a> {
    #[must_use]
    pub fn new(center: Location, offers: impl IntoIterator<Item = &'a Offer>) -> Self {
        Self {
            center,
            offers: offers.into_iter().collect(),
            active_offer_id: None,
        }
    }

    #[must_use]
    pub const fn active(mut self, offer_id: Option<&'a str>) -> Self {
        self.active_offer_id = offer_id;
        self
    }

    fn bounds(&self) -> ([f64; 2], [f64; 2]) {
        let x = [
            self.center.longitude - SPAN_DEGREES,
            self.center.longitude + SPAN_DEGREES,
        ];
        let y = [
            self.center.latitude - SPAN_DEGREES,
            self.center.latitude + SPAN_DEGREES,
        ];
        (x, y)
    }

    fn is_active(&self, offer: &Offer) -> bool {
        self.active_offer_id == Some(offer.id.as_str())
    }
}

impl Widget for Map<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (x_bounds, y_bounds) = self.bounds();

        let (active, inactive): (Vec<&Offer>, Vec<&Offer>) =
            self.offers.iter().partition(|offer| self.is_active(offer));
        let coords = |offers: &[&Offer]| -> Vec<(f64, f64)> {
            offers
                .iter()
                .map(|offer| (offer.location.longitude, offer.location.latitude))
                .collect()
        };
        let inactive_coords = coords(&inactive);
        let active_coords = coords(&active);

        Canvas::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(" Map "),
            )
            .marker(Marker::Braille)
            .x_bounds(x_bounds)
            .y_bounds(y_bounds)
            .paint(|ctx| {
                ctx.draw(&Points {
                    coords: &inactive_coords,
                    color: Color::Cyan,
                });
                ctx.layer();
                for &(x, y) in &active_coords {
                    ctx.print(x, y, Span::styled("●", Style::default().fg(Color::LightYellow)));
                }
            })
            .render(area, buf);
    }
}
