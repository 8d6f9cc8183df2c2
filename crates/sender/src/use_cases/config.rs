//! Sender config mutations: explicit server changes, selection edits and
//! on-demand rediscovery.

use std::sync::Arc;

use milkbutton_domain::SenderConfig;
use milkbutton_shared::{JsonFileStore, SenderConfigPatch, StoreError};

use crate::infrastructure::ports::{PlayerClientPort, ServiceResolverPort};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not reach player or invalid response from /files")]
    Unreachable,

    #[error("No audio files found on player")]
    NoFilesOnPlayer,

    #[error("No player found")]
    NotFound,

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub struct SenderConfigService {
    store: JsonFileStore<SenderConfig>,
    client: Arc<dyn PlayerClientPort>,
    resolver: Arc<dyn ServiceResolverPort>,
}

impl SenderConfigService {
    pub fn new(
        store: JsonFileStore<SenderConfig>,
        client: Arc<dyn PlayerClientPort>,
        resolver: Arc<dyn ServiceResolverPort>,
    ) -> Self {
        Self {
            store,
            client,
            resolver,
        }
    }

    pub fn get(&self) -> SenderConfig {
        self.store.load()
    }

    /// Apply a partial update and persist the whole record.
    ///
    /// A server change is validated against the player's inventory before
    /// anything is written; a failed check leaves the stored record untouched.
    pub async fn update(&self, patch: SenderConfigPatch) -> Result<SenderConfig, ConfigError> {
        let mut config = self.store.load();
        let before = config.clone();

        if let Some(server) = patch.server {
            match server.as_deref().and_then(SenderConfig::normalize_server) {
                Some(server) => self.attach(&mut config, server).await?,
                None => {
                    tracing::info!("Player cleared");
                    config.clear_server();
                }
            }
        }

        if let Some(requested) = patch.audio_files_to_send {
            config.select_files(requested);
        }

        if config != before {
            self.store.save(&config)?;
        }
        Ok(config)
    }

    /// Run one discovery attempt and attach to whatever answers first.
    pub async fn rediscover(&self) -> Result<SenderConfig, ConfigError> {
        let Some(found) = self.resolver.resolve().await else {
            return Err(ConfigError::NotFound);
        };
        self.update(SenderConfigPatch {
            server: Some(Some(found.base_url())),
            audio_files_to_send: None,
        })
        .await
    }

    async fn attach(&self, config: &mut SenderConfig, server: String) -> Result<(), ConfigError> {
        let files = match self.client.fetch_files(&server).await {
            Ok(files) => files,
            Err(e) => {
                tracing::warn!(server = %server, error = %e, "Player rejected as server");
                return Err(ConfigError::Unreachable);
            }
        };
        if files.is_empty() {
            tracing::warn!(server = %server, "Player has no audio files");
            return Err(ConfigError::NoFilesOnPlayer);
        }

        tracing::info!(server = %server, files = files.len(), "Player set");
        config.set_server(server);
        config.replace_available_files(files);
        Ok(())
    }
}
