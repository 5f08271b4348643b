//! Offer list derivations.

use crate::domain::entities::{CITIES, Offer, SortType};

/// Size of the "other places in the neighbourhood" list.
pub const NEARBY_OFFERS_COUNT: usize = 3;

/// Returns offers located in `city`, ordered by `sorting`.
///
/// `Popular` keeps the collection order; other orders are stable.
#[must_use]
pub fn offers_in_city<'a>(offers: &'a [Offer], city: &str, sorting: SortType) -> Vec<&'a Offer> {
    let mut filtered: Vec<&Offer> = offers
        .iter()
        .filter(|offer| offer.city_name() == city)
        .collect();

    match sorting {
        SortType::Popular => {}
        SortType::PriceLowToHigh => filtered.sort_by_key(|offer| offer.price),
        SortType::PriceHighToLow => filtered.sort_by(|a, b| b.price.cmp(&a.price)),
        SortType::TopRatedFirst => filtered.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
    }

    filtered
}

/// Returns the nearby offers shown under an offer: the first entries of the
/// collection, not a distance-based selection.
#[must_use]
pub fn nearby_offers(offers: &[Offer]) -> &[Offer] {
    &offers[..offers.len().min(NEARBY_OFFERS_COUNT)]
}

/// Groups favorites by city, known cities first in tab order, then any
/// other city in order of first appearance.
#[must_use]
pub fn favorites_by_city(favorites: &[Offer]) -> Vec<(&str, Vec<&Offer>)> {
    let mut groups: Vec<(&str, Vec<&Offer>)> =
        CITIES.iter().map(|city| (*city, Vec::new())).collect();

    for offer in favorites {
        match groups.iter().position(|(city, _)| *city == offer.city_name()) {
            Some(index) => groups[index].1.push(offer),
            None => groups.push((offer.city_name(), vec![offer])),
        }
    }

    groups.retain(|(_, offers)| !offers.is_empty());
    groups
}
