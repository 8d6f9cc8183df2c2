//! Multicast DNS advertisement of the player.

use mdns_sd::{ServiceDaemon, ServiceInfo};
use milkbutton_shared::routes::ANNOUNCE_PATH;
use milkbutton_shared::SERVICE_TYPE;

/// Keeps the player registered for as long as it is alive.
pub struct Advertisement {
    daemon: ServiceDaemon,
    fullname: String,
}

impl Advertisement {
    /// Register `instance` under the player service type on `port`, on every
    /// local interface address.
    pub fn register(instance: &str, port: u16) -> Result<Self, mdns_sd::Error> {
        let daemon = ServiceDaemon::new()?;
        let host_name = format!("{instance}.local.");
        let properties = [("announce", ANNOUNCE_PATH)];
        let info = ServiceInfo::new(
            SERVICE_TYPE,
            instance,
            &host_name,
            "",
            port,
            &properties[..],
        )?
        .enable_addr_auto();
        let fullname = info.get_fullname().to_string();

        daemon.register(info)?;
        tracing::info!(service = %fullname, port, "Advertising player");

        Ok(Self { daemon, fullname })
    }
}

impl Drop for Advertisement {
    fn drop(&mut self) {
        if let Err(e) = self.daemon.unregister(&self.fullname) {
            tracing::debug!(error = %e, "Failed to unregister player service");
        }
        if let Err(e) = self.daemon.shutdown() {
            tracing::debug!(error = %e, "Failed to stop mDNS daemon");
        }
    }
}
