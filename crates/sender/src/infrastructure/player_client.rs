//! HTTP client for the player's public API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use milkbutton_shared::{announce_url, files_url};

use crate::infrastructure::ports::{PlayerClientError, PlayerClientPort};

/// Client for a player's `/files` and `/announce` endpoints.
///
/// Every call is made once with its own bound; there are no retries.
#[derive(Clone)]
pub struct HttpPlayerClient {
    client: Client,
    files_timeout: Duration,
    announce_timeout: Duration,
}

impl HttpPlayerClient {
    pub fn new(files_timeout: Duration, announce_timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            files_timeout,
            announce_timeout,
        }
    }
}

impl Default for HttpPlayerClient {
    fn default() -> Self {
        Self::new(Duration::from_secs(5), Duration::from_secs(10))
    }
}

fn invalid_address(server: &str, e: url::ParseError) -> PlayerClientError {
    PlayerClientError::InvalidAddress {
        server: server.to_string(),
        message: e.to_string(),
    }
}

#[async_trait]
impl PlayerClientPort for HttpPlayerClient {
    async fn fetch_files(&self, server: &str) -> Result<Vec<String>, PlayerClientError> {
        let url = files_url(server).map_err(|e| invalid_address(server, e))?;

        let response = self
            .client
            .get(url.clone())
            .timeout(self.files_timeout)
            .send()
            .await
            .map_err(|e| PlayerClientError::Unreachable(e.to_string()))?;

        if response.status() != reqwest::StatusCode::OK {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(PlayerClientError::Status { status, body });
        }

        response
            .json::<Vec<String>>()
            .await
            .map_err(|e| PlayerClientError::InvalidResponse(e.to_string()))
    }

    async fn announce(&self, server: &str, files: &[String]) -> Result<(), PlayerClientError> {
        let url = announce_url(server, files).map_err(|e| invalid_address(server, e))?;

        let response = self
            .client
            .get(url)
            .timeout(self.announce_timeout)
            .send()
            .await
            .map_err(|e| PlayerClientError::Unreachable(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(PlayerClientError::Status {
                status,
                body: body.trim().to_string(),
            });
        }

        Ok(())
    }
}
