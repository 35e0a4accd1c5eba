//! Book listing, lookup, creation, and top-rated ranking.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use bookstall_core::{Book, Envelope};

use crate::error::ApiError;
use crate::state::AppState;

/// Maximum number of entries returned by the top-rated ranking.
const TOP_RATED_LIMIT: usize = 10;

// ═══════════════════════════════════════════════════════════════════════════
// Listing
// ═══════════════════════════════════════════════════════════════════════════

/// Query parameters for the book listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ListBooksQuery {
    /// Keep only books whose featured flag equals this value.
    pub featured: Option<bool>,
    /// Start of the inclusive publish-date range (YYYY-MM-DD).
    pub start: Option<NaiveDate>,
    /// End of the inclusive publish-date range (YYYY-MM-DD).
    pub end: Option<NaiveDate>,
}

/// `GET /books`
///
/// Returns the full collection in stored order, narrowed by the optional
/// filters applied in sequence: featured equality first, then the publish
/// date range. The range only applies when both `start` and `end` are
/// present; dates are compared as calendar dates, and a book whose
/// `datePublished` does not parse is excluded by an active range filter.
pub async fn list_books(
    State(state): State<AppState>,
    Query(params): Query<ListBooksQuery>,
) -> Result<Json<Envelope<Vec<Book>>>, ApiError> {
    let mut books = state
        .store
        .load_books()
        .await
        .map_err(ApiError::storage("Failed to fetch books"))?;

    if let Some(featured) = params.featured {
        books.retain(|book| book.featured == featured);
    }

    if let (Some(start), Some(end)) = (params.start, params.end) {
        books.retain(|book| {
            book.publish_date()
                .is_some_and(|date| date >= start && date <= end)
        });
    }

    let count = books.len();
    Ok(Json(Envelope::ok_with_count(books, count)))
}

// ═══════════════════════════════════════════════════════════════════════════
// Single lookup
// ═══════════════════════════════════════════════════════════════════════════

/// `GET /books/{id}`
///
/// Linear scan by id; 404 with `"Book not found"` if absent.
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<Book>>, ApiError> {
    let books = state
        .store
        .load_books()
        .await
        .map_err(ApiError::storage("Failed to fetch books"))?;

    let book = books
        .into_iter()
        .find(|book| book.id == id)
        .ok_or(ApiError::NotFound("Book not found"))?;

    Ok(Json(Envelope::ok(book)))
}

// ═══════════════════════════════════════════════════════════════════════════
// Creation
// ═══════════════════════════════════════════════════════════════════════════

/// Payload for book creation.
///
/// Every field with a synthesized default is optional here and overrides the
/// default when present. That includes the id, which callers may (but should
/// not) pin themselves.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookPayload {
    pub title: String,
    pub author: String,
    pub price: f64,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub isbn: Option<String>,
    #[serde(default)]
    pub genre: Option<Vec<String>>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub date_published: Option<String>,
    #[serde(default)]
    pub pages: Option<u32>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub review_count: Option<u32>,
    #[serde(default)]
    pub in_stock: Option<bool>,
    #[serde(default)]
    pub featured: Option<bool>,
}

/// `POST /books` (auth required)
///
/// Synthesizes an id from the current collection length, fills defaults
/// (zero rating and review count, not featured, in stock, published today),
/// applies payload overrides, appends, and persists the full collection.
/// The length-based id is not robust under concurrent writers; that race is
/// part of this system's accepted contract.
pub async fn create_book(
    State(state): State<AppState>,
    Json(payload): Json<CreateBookPayload>,
) -> Result<(StatusCode, Json<Envelope<Book>>), ApiError> {
    let mut books = state
        .store
        .load_books()
        .await
        .map_err(ApiError::storage("Failed to create book"))?;

    let book = Book {
        id: payload
            .id
            .unwrap_or_else(|| (books.len() + 1).to_string()),
        title: payload.title,
        author: payload.author,
        description: payload.description,
        price: payload.price,
        image: payload.image,
        isbn: payload.isbn,
        genre: payload.genre,
        tags: payload.tags,
        date_published: payload
            .date_published
            .unwrap_or_else(|| Utc::now().date_naive().to_string()),
        pages: payload.pages,
        language: payload.language,
        publisher: payload.publisher,
        rating: payload.rating.unwrap_or(0.0),
        review_count: payload.review_count.unwrap_or(0),
        in_stock: payload.in_stock.unwrap_or(true),
        featured: payload.featured.unwrap_or(false),
    };

    books.push(book.clone());
    state
        .store
        .store_books(&books)
        .await
        .map_err(ApiError::storage("Failed to create book"))?;

    Ok((StatusCode::CREATED, Json(Envelope::ok(book))))
}

// ═══════════════════════════════════════════════════════════════════════════
// Top-rated ranking
// ═══════════════════════════════════════════════════════════════════════════

/// A book plus its computed popularity score, as returned by the ranking.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedBook {
    #[serde(flatten)]
    pub book: Book,
    pub popularity_score: f64,
}

/// `GET /books/top-rated`
///
/// Scores every book as `rating × reviewCount`, sorts descending, and
/// returns at most the top ten with the score included in each record.
/// Tie order is unspecified.
pub async fn top_rated(
    State(state): State<AppState>,
) -> Result<Json<Envelope<Vec<RankedBook>>>, ApiError> {
    let books = state
        .store
        .load_books()
        .await
        .map_err(ApiError::storage("Failed to fetch top books"))?;

    let mut ranked: Vec<RankedBook> = books
        .into_iter()
        .map(|book| {
            let popularity_score = book.popularity_score();
            RankedBook {
                book,
                popularity_score,
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.popularity_score.total_cmp(&a.popularity_score));
    ranked.truncate(TOP_RATED_LIMIT);

    Ok(Json(Envelope::ok(ranked)))
}
