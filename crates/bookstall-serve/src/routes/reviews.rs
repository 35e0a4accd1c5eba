//! Review listing and creation, including the derived book statistics.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use chrono::{SecondsFormat, Utc};
use serde::Deserialize;

use bookstall_core::{Envelope, Review, aggregate_rating};

use crate::error::ApiError;
use crate::state::AppState;

// ═══════════════════════════════════════════════════════════════════════════
// Listing
// ═══════════════════════════════════════════════════════════════════════════

/// `GET /books/{id}/reviews`
///
/// Linear filter of the review collection by book id. The book itself is
/// never looked up: an id with no matching book yields an empty (or orphan)
/// list, not a 404.
pub async fn list_reviews(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<Vec<Review>>>, ApiError> {
    let reviews = state
        .store
        .load_reviews()
        .await
        .map_err(ApiError::storage("Failed to fetch reviews"))?;

    let book_reviews: Vec<Review> = reviews
        .into_iter()
        .filter(|review| review.book_id == id)
        .collect();

    let count = book_reviews.len();
    Ok(Json(Envelope::ok_with_count(book_reviews, count)))
}

// ═══════════════════════════════════════════════════════════════════════════
// Creation
// ═══════════════════════════════════════════════════════════════════════════

/// Payload for review creation.
///
/// `id`, `bookId`, `timestamp`, and `verified` are synthesized when absent
/// but overridable when present, like the book-creation defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewPayload {
    /// Reviewer display name.
    pub author: String,
    /// Expected 0–5; stored as given.
    pub rating: f64,
    pub comment: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub book_id: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub verified: Option<bool>,
}

/// `POST /books/{id}/reviews` (auth required)
///
/// Appends the review (time-derived id, path book id, current timestamp,
/// unverified, payload overrides applied), persists the full review
/// collection, then recomputes the addressed book's aggregate rating and
/// review count over every review referencing the path id and persists the
/// full book collection. When no book matches the path id the statistics
/// step is skipped and the review is still stored.
pub async fn create_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<CreateReviewPayload>,
) -> Result<(StatusCode, Json<Envelope<Review>>), ApiError> {
    const PUBLIC: &str = "Failed to add review";

    let mut reviews = state
        .store
        .load_reviews()
        .await
        .map_err(ApiError::storage(PUBLIC))?;
    let mut books = state
        .store
        .load_books()
        .await
        .map_err(ApiError::storage(PUBLIC))?;

    let now = Utc::now();
    let review = Review {
        id: payload
            .id
            .unwrap_or_else(|| format!("review-{}", now.timestamp_millis())),
        book_id: payload.book_id.unwrap_or_else(|| id.clone()),
        author: payload.author,
        rating: payload.rating,
        title: payload.title,
        comment: payload.comment,
        timestamp: payload
            .timestamp
            .unwrap_or_else(|| now.to_rfc3339_opts(SecondsFormat::Millis, true)),
        verified: Some(payload.verified.unwrap_or(false)),
    };

    reviews.push(review.clone());
    state
        .store
        .store_reviews(&reviews)
        .await
        .map_err(ApiError::storage(PUBLIC))?;

    // Derived statistics always follow the path id, not any overridden
    // bookId on the review itself.
    if let Some(index) = books.iter().position(|book| book.id == id) {
        let book_reviews: Vec<Review> = reviews
            .iter()
            .filter(|review| review.book_id == id)
            .cloned()
            .collect();
        let (rating, review_count) = aggregate_rating(&book_reviews);
        books[index].rating = rating;
        books[index].review_count = review_count;

        state
            .store
            .store_books(&books)
            .await
            .map_err(ApiError::storage(PUBLIC))?;
    }

    Ok((StatusCode::CREATED, Json(Envelope::ok(review))))
}
