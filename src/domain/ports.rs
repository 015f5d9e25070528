use crate::domain::model::{AnkiRequest, AnkiResponse};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Wire-level access to the flashcard service. One request in, one decoded
/// response out; retry policy lives above this seam.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &AnkiRequest) -> Result<AnkiResponse>;
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn category(&self) -> &str;
    fn month(&self) -> &str;
    fn max_retries(&self) -> u32;
    fn retry_delay(&self) -> Duration;
    fn card_delay(&self) -> Duration;
}
