//! Review entity.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// Author of a review.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewUser {
    pub name: String,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub is_pro: bool,
}

/// Published review of an offer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub date: String,
    pub user: ReviewUser,
    pub comment: String,
    pub rating: f64,
}

impl Review {
    /// Returns the review date as "Month YYYY".
    ///
    /// Falls back to the raw value when the date is not ISO-8601.
    #[must_use]
    pub fn formatted_date(&self) -> String {
        if let Ok(date) = DateTime::parse_from_rfc3339(&self.date) {
            return date.format("%B %Y").to_string();
        }
        if let Ok(date) = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d") {
            return date.format("%B %Y").to_string();
        }
        self.date.clone()
    }
}

/// Review submitted from the review form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewReview {
    pub comment: String,
    pub rating: u8,
}

impl NewReview {
    /// Creates new review payload.
    #[must_use]
    pub fn new(comment: impl Into<String>, rating: u8) -> Self {
        Self {
            comment: comment.into(),
            rating,
        }
    }
}
