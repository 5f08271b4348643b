//! Rental offer entity.

use serde::{Deserialize, Serialize};

use super::city::{City, Location};

/// Housing category of an offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfferType {
    #[default]
    Apartment,
    Room,
    House,
    Hotel,
}

impl OfferType {
    /// Returns display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Apartment => "Apartment",
            Self::Room => "Private Room",
            Self::House => "House",
            Self::Hotel => "Hotel",
        }
    }
}

impl std::fmt::Display for OfferType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Host of an offer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Host {
    pub name: String,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub is_pro: bool,
}

/// Rental listing.
///
/// List endpoints return a preview without the detail fields, which then
/// deserialize to their defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: OfferType,
    pub price: u32,
    pub city: City,
    #[serde(default)]
    pub location: Location,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub preview_image: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub bedrooms: u32,
    #[serde(default)]
    pub goods: Vec<String>,
    #[serde(default)]
    pub host: Host,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub max_adults: u32,
}

impl Offer {
    /// Returns the city name.
    #[must_use]
    pub fn city_name(&self) -> &str {
        &self.city.name
    }

    /// Returns a copy with the favorite flag replaced.
    #[must_use]
    pub fn with_favorite(&self, is_favorite: bool) -> Self {
        Self {
            is_favorite,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_preview_offer() {
        let json = r#"{
            "id": "6af6f711-c28d-4121-82cd-e0b462a27f00",
            "title": "Beautiful & luxurious studio at great location",
            "type": "apartment",
            "price": 120,
            "city": {
                "name": "Amsterdam",
                "location": { "latitude": 52.35514938496378, "longitude": 4.673877537499948, "zoom": 8 }
            },
            "location": { "latitude": 52.35514938496378, "longitude": 4.673877537499948, "zoom": 8 },
            "isFavorite": false,
            "isPremium": true,
            "rating": 4,
            "previewImage": "https://url-to-image/image.png"
        }"#;

        let offer: Offer = serde_json::from_str(json).expect("valid offer json");

        assert_eq!(offer.city_name(), "Amsterdam");
        assert_eq!(offer.kind, OfferType::Apartment);
        assert!(offer.is_premium);
        assert!(offer.goods.is_empty());
        assert_eq!(offer.host, Host::default());
    }

    #[test]
    fn test_deserialize_full_offer() {
        let json = r#"{
            "id": "1",
            "title": "Canal View Prinsengracht",
            "type": "room",
            "price": 80,
            "city": { "name": "Paris", "location": { "latitude": 48.85, "longitude": 2.35, "zoom": 13 } },
            "location": { "latitude": 48.86, "longitude": 2.34, "zoom": 16 },
            "isFavorite": true,
            "isPremium": false,
            "rating": 3.6,
            "description": "A quiet cozy place.",
            "bedrooms": 2,
            "goods": ["Heating", "Wi-Fi"],
            "host": { "name": "Angelina", "avatarUrl": "img/avatar-angelina.jpg", "isPro": true },
            "images": ["img/1.jpg", "img/2.jpg"],
            "maxAdults": 4
        }"#;

        let offer: Offer = serde_json::from_str(json).expect("valid offer json");

        assert_eq!(offer.kind.label(), "Private Room");
        assert_eq!(offer.goods, vec!["Heating", "Wi-Fi"]);
        assert!(offer.host.is_pro);
        assert_eq!(offer.max_adults, 4);
    }

    #[test]
    fn test_with_favorite() {
        let offer = Offer {
            id: "1".to_string(),
            ..Offer::default()
        };
        assert!(offer.with_favorite(true).is_favorite);
        assert!(!offer.is_favorite);
    }
}
