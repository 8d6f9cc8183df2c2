//! Port traits for infrastructure boundaries.
//!
//! Ports exist for:
//! - Service discovery (tests inject a deterministic result)
//! - The player's HTTP API (file listing and announce)

use async_trait::async_trait;
use milkbutton_shared::DiscoveredServer;

/// Finds a player on the local network.
///
/// One call is one best-effort attempt; `None` is a normal outcome.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ServiceResolverPort: Send + Sync {
    async fn resolve(&self) -> Option<DiscoveredServer>;
}

/// Calls on a player, addressed by base URL.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlayerClientPort: Send + Sync {
    /// The player's file inventory, in the player's order.
    async fn fetch_files(&self, server: &str) -> Result<Vec<String>, PlayerClientError>;

    /// Ask the player to play `files`, in order, duplicates kept.
    async fn announce(&self, server: &str, files: &[String]) -> Result<(), PlayerClientError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlayerClientError {
    #[error("Invalid player address {server}: {message}")]
    InvalidAddress { server: String, message: String },

    #[error("{0}")]
    Unreachable(String),

    #[error("Server returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid response from player: {0}")]
    InvalidResponse(String),
}
