//! HTTP client for the catalogue API.

use bookstall_core::{Book, Envelope};

use crate::error::WebError;
use crate::state::AppState;

/// Fetch the full book list from the API's `/books` endpoint.
///
/// Issued fresh on every page render; nothing is cached between requests.
/// Any failure (connection error, non-2xx status, undecodable body, or a
/// `success: false` envelope) surfaces as a [`WebError`] so the page can
/// render its error state instead of a partial list.
pub async fn fetch_books(state: &AppState) -> Result<Vec<Book>, WebError> {
    let url = format!("{}/books", state.config.api_url);

    let response = state.http.get(&url).send().await?;
    if !response.status().is_success() {
        return Err(WebError::Upstream(format!(
            "catalogue API returned {}",
            response.status()
        )));
    }

    let envelope: Envelope<Vec<Book>> = response.json().await?;
    if !envelope.success {
        return Err(WebError::Upstream(
            envelope
                .error
                .unwrap_or_else(|| "catalogue API reported failure".to_string()),
        ));
    }

    Ok(envelope.data.unwrap_or_default())
}
