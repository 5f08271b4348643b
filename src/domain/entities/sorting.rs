//! Offer sort orders.

/// Sort order of the offers list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortType {
    /// Order returned by the API.
    #[default]
    Popular,
    PriceLowToHigh,
    PriceHighToLow,
    TopRatedFirst,
}

impl SortType {
    /// All sort orders in menu order.
    pub const ALL: [Self; 4] = [
        Self::Popular,
        Self::PriceLowToHigh,
        Self::PriceHighToLow,
        Self::TopRatedFirst,
    ];

    /// Returns display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Popular => "Popular",
            Self::PriceLowToHigh => "Price: low to high",
            Self::PriceHighToLow => "Price: high to low",
            Self::TopRatedFirst => "Top rated first",
        }
    }

    /// Returns the next order in menu order, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Popular => Self::PriceLowToHigh,
            Self::PriceLowToHigh => Self::PriceHighToLow,
            Self::PriceHighToLow => Self::TopRatedFirst,
            Self::TopRatedFirst => Self::Popular,
        }
    }
}

impl std::fmt::Display for SortType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
