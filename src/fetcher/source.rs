// fetcher/source.rs

use crate::fetcher::Fetcher;
use crate::model::FetchError;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

/// Fetches `http(s)://` locations over the network and treats anything else as a local path.
pub struct SourceFetcher {
    client: Client,
}

impl SourceFetcher {
    pub fn new(user_agent: &str, timeout_seconds: u64) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self { client })
    }

    async fn fetch_remote(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("unknown").to_string(),
            });
        }

        info!("🌐 Fetched {} [{}]", url, status);
        response
            .text()
            .await
            .map_err(|e| FetchError::Http(e.to_string()))
    }

    async fn fetch_local(&self, path: &str) -> Result<String, FetchError> {
        debug!("Reading local file {}", path);
        tokio::fs::read_to_string(path)
            .await
            .map_err(|e| FetchError::Io(format!("{}: {}", path, e)))
    }
}

fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

#[async_trait::async_trait]
impl Fetcher for SourceFetcher {
    async fn fetch(&self, location: &str) -> Result<String, FetchError> {
        if is_remote(location) {
            self.fetch_remote(location).await
        } else {
            self.fetch_local(location).await
        }
    }
}
