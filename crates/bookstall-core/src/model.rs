//! Domain types shared between the API and the catalogue page.
//!
//! Field names serialize in camelCase to match the on-disk documents and the
//! wire format (`datePublished`, `reviewCount`, `bookId`, ...).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A catalogue entry.
///
/// `rating` and `review_count` are derived values: once a book has any
/// reviews they always equal the aggregate recomputed from those reviews
/// (see [`aggregate_rating`]); they are never authored independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Publication date as a `YYYY-MM-DD` calendar date string.
    pub date_published: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    pub rating: f64,
    pub review_count: u32,
    pub in_stock: bool,
    pub featured: bool,
}

impl Book {
    /// Parse `date_published` as a calendar date.
    ///
    /// Returns `None` for anything that is not a valid `YYYY-MM-DD` string;
    /// date-range filtering excludes such books rather than comparing
    /// lexically.
    pub fn publish_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date_published, "%Y-%m-%d").ok()
    }

    /// Popularity score used for top-rated ranking: `rating × reviewCount`.
    pub fn popularity_score(&self) -> f64 {
        self.rating * f64::from(self.review_count)
    }
}

/// A reader review of a book.
///
/// `book_id` references a `Book::id` by convention only. Referential
/// integrity is not enforced; orphaned reviews are stored as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub book_id: String,
    /// Reviewer display name.
    pub author: String,
    /// Expected 0–5, not validated.
    pub rating: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub comment: String,
    /// ISO-8601 creation instant.
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
}

/// The JSON wrapper used by every API response:
/// `{success, count?, data?, error?}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    /// Successful response carrying `data`.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            count: None,
            data: Some(data),
            error: None,
        }
    }

    /// Successful response carrying `data` plus an element count.
    pub fn ok_with_count(data: T, count: usize) -> Self {
        Self {
            success: true,
            count: Some(count),
            data: Some(data),
            error: None,
        }
    }

    /// Failed response carrying only an error message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            count: None,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Round to one decimal place, half away from zero.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Compute a book's aggregate `(rating, review_count)` from its reviews.
///
/// The rating is the mean of the review ratings rounded to one decimal
/// place. An empty slice yields `(0.0, 0)`.
pub fn aggregate_rating(reviews: &[Review]) -> (f64, u32) {
    if reviews.is_empty() {
        return (0.0, 0);
    }
    let total: f64 = reviews.iter().map(|r| r.rating).sum();
    let avg = total / reviews.len() as f64;
    (round1(avg), reviews.len() as u32)
}
