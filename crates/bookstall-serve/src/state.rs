//! Application state and configuration.

use std::path::PathBuf;
use std::sync::Arc;

use bookstall_core::{CatalogStore, JsonFileStore};

/// Application configuration loaded from environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8080").
    pub bind_addr: String,

    /// Shared secret expected in the `x-api-key` header on mutating calls.
    pub api_key: String,

    /// Directory holding `books.json` and `reviews.json`.
    pub data_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `BOOKSTALL_API_KEY`: Shared write secret for the `x-api-key` header
    ///
    /// Optional environment variables:
    /// - `BOOKSTALL_BIND_ADDR`: Server bind address (default: "0.0.0.0:8080")
    /// - `BOOKSTALL_DATA_DIR`: Data directory (default: "data")
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr =
            std::env::var("BOOKSTALL_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let api_key = std::env::var("BOOKSTALL_API_KEY")
            .map_err(|_| anyhow::anyhow!("BOOKSTALL_API_KEY environment variable is required"))?;

        if api_key.trim().is_empty() {
            anyhow::bail!("BOOKSTALL_API_KEY must not be empty");
        }

        let data_dir =
            PathBuf::from(std::env::var("BOOKSTALL_DATA_DIR").unwrap_or_else(|_| "data".to_string()));

        tracing::info!(
            bind_addr = %bind_addr,
            data_dir = %data_dir.display(),
            "configuration loaded"
        );

        Ok(Self {
            bind_addr,
            api_key,
            data_dir,
        })
    }
}

/// Shared application state available to all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Catalogue store backing the book and review collections.
    pub store: Arc<dyn CatalogStore>,

    /// Application configuration.
    pub config: Arc<Config>,
}

impl AppState {
    /// Create application state with the flat-file store from configuration.
    pub fn new(config: Config) -> Self {
        let store = JsonFileStore::new(&config.data_dir);
        Self {
            store: Arc::new(store),
            config: Arc::new(config),
        }
    }

    /// Create application state over an explicit store backend.
    pub fn with_store(config: Config, store: Arc<dyn CatalogStore>) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}
