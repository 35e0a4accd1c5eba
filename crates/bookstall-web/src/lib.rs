//! Bookstall Web - server-rendered catalogue page.
//!
//! Serves an HTML listing of the bookstore catalogue. The page is built
//! fresh on every request from the JSON API's `/books` endpoint, with no
//! caching, so a newly created book shows up on the next reload. On any
//! upstream failure the page renders a visible error state instead of a
//! partial list.

mod client;
mod config;
mod error;
pub mod render;
mod routes;
mod state;

pub use self::client::fetch_books;
pub use self::config::Config;
pub use self::error::WebError;
pub use self::routes::router;
pub use self::state::AppState;
