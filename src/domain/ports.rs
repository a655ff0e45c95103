use crate::domain::model::OutgoingMessage;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// One GET against an upstream endpoint. No retries; the only timeout
/// is the implementation's own network timeout.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Value>;
}

/// Delivery seam for reply messages (chat API, stdout, test recorder).
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, message: &OutgoingMessage) -> Result<()>;
}
