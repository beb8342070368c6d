use crate::model::FetchError;

/// Retrieves the raw text of a CSV resource.
#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, location: &str) -> Result<String, FetchError>;
}
