//! API route definitions.

mod books;
mod health;
mod reviews;

use axum::Router;
use axum::middleware;
use axum::routing::{get, post};

use crate::auth::require_api_key;
use crate::state::AppState;

/// Build the complete API router.
///
/// # Route Structure
///
/// ## Public (no auth)
/// - `GET /health` - Health check
/// - `GET /books` - List books (query params `featured`, `start`, `end`)
/// - `GET /books/top-rated` - Top 10 books by rating × review count
/// - `GET /books/{id}` - Fetch a single book
/// - `GET /books/{id}/reviews` - List reviews for a book
///
/// ## Protected (`x-api-key` required)
/// - `POST /books` - Create a book
/// - `POST /books/{id}/reviews` - Create a review and recompute book stats
pub fn router(state: AppState) -> Router {
    // Public read routes (no authentication)
    let public = Router::new()
        .route("/health", get(health::health_check))
        .route("/books", get(books::list_books))
        .route("/books/top-rated", get(books::top_rated))
        .route("/books/{id}", get(books::get_book))
        .route("/books/{id}/reviews", get(reviews::list_reviews));

    // Mutating routes behind the shared-secret check
    let protected = Router::new()
        .route("/books", post(books::create_book))
        .route("/books/{id}/reviews", post(reviews::create_review))
        .layer(middleware::from_fn_with_state(state.clone(), require_api_key));

    Router::new().merge(public).merge(protected).with_state(state)
}
