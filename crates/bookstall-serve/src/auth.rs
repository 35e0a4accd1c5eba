//! Shared-secret authentication middleware.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::error::ApiError;
use crate::state::AppState;

/// Header carrying the shared write secret.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Middleware that requires the shared API key for mutating requests.
///
/// The key must be provided in the `x-api-key` header and match the
/// configured `BOOKSTALL_API_KEY` exactly. Read endpoints are not routed
/// through this middleware.
pub async fn require_api_key(
    axum::extract::State(state): axum::extract::State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let provided = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok());

    match provided {
        Some(key) if key == state.config.api_key => Ok(next.run(request).await),
        Some(_) => {
            tracing::debug!("invalid api key");
            Err(ApiError::Unauthorized)
        }
        None => {
            tracing::debug!("missing x-api-key header");
            Err(ApiError::Unauthorized)
        }
    }
}
