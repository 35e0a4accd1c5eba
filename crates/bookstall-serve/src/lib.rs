//! Bookstall Serve - HTTP JSON API for the bookstore catalogue
//!
//! This crate provides the REST API over the two flat-file collections:
//! listing and creating books, listing and creating reviews, and the
//! derived top-rated ranking.
//!
//! # Authentication
//!
//! Read endpoints are public. The two mutating endpoints require the shared
//! secret in the `x-api-key` header; the secret is configured via
//! environment variables (typically in a `.env` file).
//!
//! # Architecture
//!
//! - **AppState**: Shared application state (catalogue store, configuration)
//! - **Auth**: `x-api-key` middleware gating the mutating routes
//! - **Routes**: Endpoint handlers grouped by resource

mod auth;
mod error;
mod routes;
mod state;

pub use self::auth::require_api_key;
pub use self::error::ApiError;
pub use self::routes::router;
pub use self::state::{AppState, Config};
