//! Catalogue page handler.

use axum::extract::State;
use maud::Markup;

use crate::client;
use crate::error::WebError;
use crate::render;
use crate::state::AppState;

/// Render the catalogue.
///
/// Fetches the full book list from the API on every request and renders one
/// card per book. A failed fetch propagates as [`WebError`], which renders
/// the full-page error state.
pub async fn catalogue(State(state): State<AppState>) -> Result<Markup, WebError> {
    let books = client::fetch_books(&state).await?;

    tracing::debug!(count = books.len(), "rendering catalogue");
    Ok(render::catalogue_page(&state.config, &books))
}
