//! Application state and composition.

use std::sync::Arc;

use milkbutton_domain::SenderConfig;
use milkbutton_shared::JsonFileStore;

use crate::infrastructure::{
    mdns::MdnsResolver,
    player_client::HttpPlayerClient,
    ports::{PlayerClientPort, ServiceResolverPort},
};
use crate::settings::Settings;
use crate::use_cases::{SendAnnounce, SenderConfigService, StartupReconciliation};

/// Main application state, passed to HTTP handlers via Axum state.
pub struct App {
    pub send: SendAnnounce,
    pub config: SenderConfigService,
    pub startup: StartupReconciliation,
}

impl App {
    /// Create a new App with explicit dependencies.
    pub fn new(
        store: JsonFileStore<SenderConfig>,
        client: Arc<dyn PlayerClientPort>,
        resolver: Arc<dyn ServiceResolverPort>,
    ) -> Self {
        Self {
            send: SendAnnounce::new(store.clone(), client.clone()),
            config: SenderConfigService::new(store.clone(), client.clone(), resolver.clone()),
            startup: StartupReconciliation::new(store, client, resolver),
        }
    }

    /// Production wiring: mDNS discovery and the reqwest player client.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            JsonFileStore::new(&settings.config_path),
            Arc::new(HttpPlayerClient::new(
                settings.files_timeout,
                settings.announce_timeout,
            )),
            Arc::new(MdnsResolver::new(settings.discovery_timeout)),
        )
    }
}
