use crate::domain::ports::Fetcher;
use crate::utils::error::{BotError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// reqwest-backed fetcher: one GET per call, fixed timeout, no retries.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Value> {
        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(BotError::UpstreamStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let payload = response.json::<Value>().await?;
        Ok(payload)
    }
}
