//! Menu page fetching.
//!
//! The scraping primitive itself is external; this module only wraps a plain
//! HTTP GET behind a trait so the orchestrator and tests can swap it out.

use crate::error::{Result, SpisError};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Trait for fetching rendered menu page markup.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch the page at `url` and return its markup.
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// HTTP-backed fetcher.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher with the given request timeout.
    pub fn new(timeout_seconds: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .user_agent(concat!("spis/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SpisError::Fetch(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let url = Url::parse(url)
            .map_err(|e| SpisError::InvalidInput(format!("Invalid menu URL '{}': {}", url, e)))?;

        debug!("Fetching menu page from {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await?
            .error_for_status()
            .map_err(|e| SpisError::Fetch(format!("Menu page returned an error: {}", e)))?;

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_url_is_rejected() {
        let fetcher = HttpFetcher::new(5).unwrap();
        let result = fetcher.fetch("not a url").await;
        assert!(matches!(result, Err(SpisError::InvalidInput(_))));
    }
}
