//! Forward one trigger to the configured player.

use std::sync::Arc;

use milkbutton_domain::SenderConfig;
use milkbutton_shared::JsonFileStore;

use crate::infrastructure::ports::{PlayerClientError, PlayerClientPort};

#[derive(Debug, thiserror::Error)]
pub enum SendError {
    #[error("No player configured")]
    NoServer,

    #[error("No audio files to send")]
    NoFiles,

    #[error(transparent)]
    Upstream(#[from] PlayerClientError),
}

/// Reads the sender config fresh and announces its selection on its player.
///
/// Preconditions are checked before any network call; the announce itself
/// is made exactly once.
pub struct SendAnnounce {
    store: JsonFileStore<SenderConfig>,
    client: Arc<dyn PlayerClientPort>,
}

impl SendAnnounce {
    pub fn new(store: JsonFileStore<SenderConfig>, client: Arc<dyn PlayerClientPort>) -> Self {
        Self { store, client }
    }

    /// Returns the files that were announced.
    pub async fn execute(&self) -> Result<Vec<String>, SendError> {
        let config = self.store.load();

        let Some(server) = config.server() else {
            tracing::warn!("Send failed: no player configured");
            return Err(SendError::NoServer);
        };
        let files = config.sendable_files();
        if files.is_empty() {
            tracing::warn!(server = %server, "Send failed: no audio files to send");
            return Err(SendError::NoFiles);
        }

        if let Err(e) = self.client.announce(&server, &files).await {
            tracing::warn!(server = %server, error = %e, "Send failed");
            return Err(e.into());
        }

        tracing::info!(server = %server, files = ?files, "Announce sent");
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockPlayerClientPort;
    use mockall::predicate::*;
    use tempfile::TempDir;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn store_with(dir: &TempDir, config: &SenderConfig) -> JsonFileStore<SenderConfig> {
        let store = JsonFileStore::new(dir.path().join("config.json"));
        store.save(config).unwrap();
        store
    }

    #[tokio::test]
    async fn announces_selection_on_normalised_server() {
        let dir = TempDir::new().unwrap();
        let store = store_with(
            &dir,
            &SenderConfig {
                server_address: Some(" http://player:8000/ ".into()),
                available_files: names(&["bell.mp3", "horn.mp3"]),
                files_to_send: names(&["horn.mp3", "", "bell.mp3", "horn.mp3"]),
            },
        );

        let mut client = MockPlayerClientPort::new();
        client
            .expect_announce()
            .with(
                eq("http://player:8000"),
                eq(names(&["horn.mp3", "bell.mp3", "horn.mp3"])),
            )
            .times(1)
            .returning(|_, _| Ok(()));

        let sent = SendAnnounce::new(store, Arc::new(client))
            .execute()
            .await
            .unwrap();
        assert_eq!(sent, names(&["horn.mp3", "bell.mp3", "horn.mp3"]));
    }

    #[tokio::test]
    async fn missing_server_makes_no_call() {
        let dir = TempDir::new().unwrap();
        let store = store_with(
            &dir,
            &SenderConfig {
                server_address: Some("   ".into()),
                available_files: names(&["bell.mp3"]),
                files_to_send: names(&["bell.mp3"]),
            },
        );
        let mut client = MockPlayerClientPort::new();
        client.expect_announce().never();

        let result = SendAnnounce::new(store, Arc::new(client)).execute().await;
        assert!(matches!(result, Err(SendError::NoServer)));
    }

    #[tokio::test]
    async fn blank_selection_makes_no_call() {
        let dir = TempDir::new().unwrap();
        let store = store_with(
            &dir,
            &SenderConfig {
                server_address: Some("http://player:8000".into()),
                available_files: names(&["bell.mp3"]),
                files_to_send: names(&["", " "]),
            },
        );
        let mut client = MockPlayerClientPort::new();
        client.expect_announce().never();

        let result = SendAnnounce::new(store, Arc::new(client)).execute().await;
        assert!(matches!(result, Err(SendError::NoFiles)));
    }

    #[tokio::test]
    async fn upstream_failure_is_reported() {
        let dir = TempDir::new().unwrap();
        let store = store_with(
            &dir,
            &SenderConfig {
                server_address: Some("http://player:8000".into()),
                available_files: names(&["bell.mp3"]),
                files_to_send: names(&["bell.mp3"]),
            },
        );
        let mut client = MockPlayerClientPort::new();
        client.expect_announce().times(1).returning(|_, _| {
            Err(PlayerClientError::Status {
                status: 400,
                body: "Unknown file: bell.mp3".into(),
            })
        });

        let err = SendAnnounce::new(store, Arc::new(client))
            .execute()
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Server returned 400: Unknown file: bell.mp3");
    }
}
