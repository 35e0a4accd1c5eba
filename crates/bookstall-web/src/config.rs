//! Application configuration loaded from environment variables.

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8081").
    pub bind_addr: String,

    /// Base URL of the catalogue API (no trailing slash).
    pub api_url: String,

    /// Site name shown in the page title and header.
    pub site_name: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - None (all have defaults for local development)
    ///
    /// Optional:
    /// - `BOOKSTALL_WEB_BIND_ADDR`: Server bind address (default: "0.0.0.0:8081")
    /// - `BOOKSTALL_API_URL`: Catalogue API base URL (default: "http://localhost:8080")
    /// - `BOOKSTALL_SITE_NAME`: Site name (default: "Bookstall")
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr =
            std::env::var("BOOKSTALL_WEB_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8081".to_string());

        let api_url = std::env::var("BOOKSTALL_API_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string())
            .trim_end_matches('/')
            .to_string();

        let site_name =
            std::env::var("BOOKSTALL_SITE_NAME").unwrap_or_else(|_| "Bookstall".to_string());

        tracing::info!(
            bind_addr = %bind_addr,
            api_url = %api_url,
            site_name = %site_name,
            "web configuration loaded"
        );

        Ok(Self {
            bind_addr,
            api_url,
            site_name,
        })
    }
}
