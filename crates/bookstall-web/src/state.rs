//! Application state shared across all request handlers.

use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;

/// Timeout for upstream catalogue API calls.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Shared application state available to all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// HTTP client for catalogue API fetches.
    pub http: reqwest::Client,

    /// Application configuration.
    pub config: Arc<Config>,
}

impl AppState {
    /// Create a new application state from configuration.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            config: Arc::new(config),
        })
    }
}
