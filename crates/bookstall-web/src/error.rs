//! Error types for the catalogue page.
//!
//! Errors render as a full HTML error page rather than JSON, since this is
//! a user-facing HTML service. Whatever went wrong upstream, the visitor
//! sees a complete error state, never a partial book list.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use maud::{DOCTYPE, html};

/// Catalogue page error type.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    /// The catalogue API answered but with a failure (bad status or a
    /// `success: false` envelope).
    #[error("upstream error: {0}")]
    Upstream(String),

    /// The catalogue API could not be reached or its body not read.
    #[error("fetch error: {0}")]
    Fetch(#[from] reqwest::Error),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match &self {
            Self::Upstream(msg) => {
                tracing::error!(error = %msg, "catalogue API failure");
            }
            Self::Fetch(err) => {
                tracing::error!(error = %err, "catalogue API unreachable");
            }
        }

        let markup = html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { "Catalogue Unavailable" }
                    meta name="robots" content="noindex";
                    style { (maud::PreEscaped(crate::render::components::ERROR_CSS)) }
                }
                body {
                    main class="error-page" {
                        h1 { "Catalogue Unavailable" }
                        p {
                            "The book catalogue could not be loaded. "
                            "Please make sure the catalogue API is running and try again."
                        }
                        a href="/" { "Retry" }
                    }
                }
            }
        };

        (StatusCode::BAD_GATEWAY, markup).into_response()
    }
}
