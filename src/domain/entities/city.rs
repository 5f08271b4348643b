//! Cities and map coordinates.

use serde::{Deserialize, Serialize};

/// Cities the catalog can be browsed by, in tab order.
pub const CITIES: [&str; 6] = [
    "Paris",
    "Cologne",
    "Brussels",
    "Amsterdam",
    "Hamburg",
    "Dusseldorf",
];

/// City selected on startup.
pub const DEFAULT_CITY: &str = CITIES[0];

/// Map point with its preferred zoom level.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub zoom: u8,
}

impl Location {
    /// Creates new location.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64, zoom: u8) -> Self {
        Self {
            latitude,
            longitude,
            zoom,
        }
    }
}

/// City an offer belongs to.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    #[serde(default)]
    pub location: Location,
}

impl City {
    /// Creates new city.
    #[must_use]
    pub fn new(name: impl Into<String>, location: Location) -> Self {
        Self {
            name: name.into(),
            location,
        }
    }
}
