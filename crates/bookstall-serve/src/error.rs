//! API error types and response formatting.
//!
//! Every failure is converted at the endpoint boundary into the standard
//! envelope `{"success": false, "error": "..."}` with a fixed public
//! message; storage internals are logged, never returned.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bookstall_core::{Envelope, StoreError};

/// API error type that converts to appropriate HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Authentication failed (missing or invalid key).
    #[error("unauthorized")]
    Unauthorized,

    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(&'static str),

    /// Storage failure (missing, unreadable, or malformed document).
    /// `public` is the fixed message the endpoint exposes.
    #[error("{public}: {source}")]
    Storage {
        public: &'static str,
        source: StoreError,
    },
}

impl ApiError {
    /// Map a storage failure to the endpoint's fixed public message.
    ///
    /// ```ignore
    /// let books = state.store.load_books().await
    ///     .map_err(ApiError::storage("Failed to fetch books"))?;
    /// ```
    pub fn storage(public: &'static str) -> impl FnOnce(StoreError) -> Self {
        move |source| Self::Storage { public, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "Unauthorized: Missing or invalid x-api-key".to_string(),
            ),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, (*msg).to_string()),
            Self::Storage { public, source } => {
                tracing::error!(error = %source, "storage failure");
                (StatusCode::INTERNAL_SERVER_ERROR, (*public).to_string())
            }
        };

        (status, Json(Envelope::<()>::error(message))).into_response()
    }
}
