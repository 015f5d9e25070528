use crate::domain::model::{AnkiRequest, AnkiResponse, Card};
use crate::domain::ports::Transport;
use crate::utils::error::{LoaderError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// Bounded retry with a fixed pause between attempts.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_millis(1000),
        }
    }
}

/// Reqwest-backed transport: POSTs the JSON envelope to the service endpoint
/// and decodes the response body.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &AnkiRequest) -> Result<AnkiResponse> {
        let response = self.http.post(&self.endpoint).json(request).send().await?;
        tracing::debug!("{} response status: {}", request.action, response.status());
        let body = response.json::<AnkiResponse>().await?;
        Ok(body)
    }
}

/// Retry wrapper over a [`Transport`], plus the payload builders for the
/// operations the uploader needs. Payload-agnostic at the `call` level.
pub struct AnkiClient<T: Transport> {
    transport: T,
    retry: RetryPolicy,
}

impl<T: Transport> AnkiClient<T> {
    pub fn new(transport: T, retry: RetryPolicy) -> Self {
        Self { transport, retry }
    }

    /// Sends a request, retrying on transport failures and on responses whose
    /// `error` field is set. Returns the response's `result` field.
    pub async fn call(&self, request: &AnkiRequest) -> Result<Value> {
        let mut last_error = String::new();

        for attempt in 1..=self.retry.max_attempts {
            match self.attempt(request).await {
                Ok(result) => return Ok(result),
                Err(err) => {
                    last_error = err.to_string();
                    if attempt < self.retry.max_attempts {
                        tracing::warn!(
                            "Attempt {} for `{}` failed: {}. Retrying in {:?}...",
                            attempt,
                            request.action,
                            last_error,
                            self.retry.delay
                        );
                        tokio::time::sleep(self.retry.delay).await;
                    }
                }
            }
        }

        Err(LoaderError::RetriesExhausted {
            attempts: self.retry.max_attempts,
            message: last_error,
        })
    }

    async fn attempt(&self, request: &AnkiRequest) -> Result<Value> {
        let response = self.transport.send(request).await?;
        if let Some(error) = response.error.filter(|e| !e.is_empty()) {
            return Err(LoaderError::Service { message: error });
        }
        Ok(response.result.unwrap_or(Value::Null))
    }

    pub async fn deck_names(&self) -> Result<Vec<String>> {
        let result = self.call(&AnkiRequest::deck_names()).await?;
        Ok(serde_json::from_value(result).unwrap_or_default())
    }

    pub async fn create_deck(&self, deck: &str) -> Result<Value> {
        let result = self.call(&AnkiRequest::create_deck(deck)).await?;
        tracing::info!("Created deck \"{}\"", deck);
        Ok(result)
    }

    pub async fn add_note(&self, deck: &str, card: &Card) -> Result<Value> {
        self.call(&AnkiRequest::add_note(deck, card)).await
    }
}
