//! Route definitions for the catalogue page service.
//!
//! ## Routes
//!
//! - `GET /` - Catalogue page
//! - `GET /health` - Health check (JSON)

mod catalogue;
mod health;

use axum::Router;
use axum::routing::get;

use crate::state::AppState;

/// Build the complete catalogue page router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(catalogue::catalogue))
        .route("/health", get(health::health_check))
        .with_state(state)
}
