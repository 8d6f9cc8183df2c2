//! One-shot reconciliation run before the sender serves requests.
//!
//! Finds a player when none is configured and refreshes the mirrored file
//! inventory. Discovery runs at most twice and only when the first attempt
//! was not already spent on finding the initial address.

use std::sync::Arc;

use milkbutton_domain::SenderConfig;
use milkbutton_shared::{JsonFileStore, StoreError};

use crate::infrastructure::ports::{PlayerClientPort, ServiceResolverPort};

/// What a reconciliation run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartupReport {
    pub server: Option<String>,
    pub discovery_attempts: u32,
    pub inventory_refreshed: bool,
}

pub struct StartupReconciliation {
    store: JsonFileStore<SenderConfig>,
    client: Arc<dyn PlayerClientPort>,
    resolver: Arc<dyn ServiceResolverPort>,
}

impl StartupReconciliation {
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

    /// Never fails on network conditions; only a config write error surfaces.
    pub async fn run(&self) -> Result<StartupReport, StoreError> {
        let mut config = self.store.load();
        let mut report = StartupReport::default();

        if config.server().is_none() {
            report.discovery_attempts += 1;
            if let Some(found) = self.resolver.resolve().await {
                config.set_server(found.base_url());
                self.persist(&config)?;
            }
        }

        if let Some(server) = config.server() {
            if self.refresh(&mut config, &server).await? {
                report.inventory_refreshed = true;
            } else if report.discovery_attempts == 0 {
                report.discovery_attempts += 1;
                if let Some(found) = self.resolver.resolve().await {
                    let server = found.base_url();
                    config.set_server(server.clone());
                    self.persist(&config)?;
                    report.inventory_refreshed = self.refresh(&mut config, &server).await?;
                }
            }
        }

        report.server = config.server();
        tracing::info!(
            server = report.server.as_deref().unwrap_or("<none>"),
            discovery_attempts = report.discovery_attempts,
            inventory_refreshed = report.inventory_refreshed,
            "Startup complete"
        );
        Ok(report)
    }

    /// Fetch and store the player's inventory. `Ok(false)` means the player
    /// could not be read.
    async fn refresh(&self, config: &mut SenderConfig, server: &str) -> Result<bool, StoreError> {
        match self.client.fetch_files(server).await {
            Ok(files) => {
                tracing::debug!(server = %server, files = files.len(), "Fetched player inventory");
                config.replace_available_files(files);
                self.persist(config)?;
                Ok(true)
            }
            Err(e) => {
                tracing::warn!(server = %server, error = %e, "Failed to fetch player inventory");
                Ok(false)
            }
        }
    }

    fn persist(&self, config: &SenderConfig) -> Result<(), StoreError> {
        if self.store.load() == *config {
            return Ok(());
        }
        self.store.save(config)
    }
}
