//! Trigger call to the sender.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

/// Default bound on one trigger call.
pub const DEFAULT_TRIGGER_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TriggerError {
    #[error("Trigger failed: {0}")]
    Unreachable(String),

    #[error("Sender returned {0}")]
    Status(u16),
}

/// Fires one trigger. Made once per accepted press, never retried.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TriggerPort: Send + Sync {
    async fn fire(&self) -> Result<(), TriggerError>;
}

/// Posts an empty form body to the sender's trigger endpoint.
#[derive(Clone)]
pub struct TriggerForwarder {
    client: Client,
    url: String,
    timeout: Duration,
}

impl TriggerForwarder {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
            timeout,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl TriggerPort for TriggerForwarder {
    async fn fire(&self) -> Result<(), TriggerError> {
        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Vec::new())
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| TriggerError::Unreachable(e.to_string()))?;

        if response.status() != reqwest::StatusCode::OK {
            return Err(TriggerError::Status(response.status().as_u16()));
        }
        Ok(())
    }
}
