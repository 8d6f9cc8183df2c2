//! Multicast DNS player discovery.

use std::collections::HashSet;
use std::net::IpAddr;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use mdns_sd::{ServiceDaemon, ServiceEvent};
use milkbutton_shared::{DiscoveredServer, SERVICE_TYPE};

use crate::infrastructure::ports::ServiceResolverPort;

/// Default time one discovery attempt listens.
pub const DEFAULT_DISCOVERY_TIMEOUT: Duration = Duration::from_secs(5);

/// Browses for the player service type and reports the first player resolved.
///
/// Each attempt listens for the full timeout, so it must only run at startup
/// or on an explicit rediscovery request.
#[derive(Debug, Clone)]
pub struct MdnsResolver {
    timeout: Duration,
}

impl MdnsResolver {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for MdnsResolver {
    fn default() -> Self {
        Self::new(DEFAULT_DISCOVERY_TIMEOUT)
    }
}

#[async_trait]
impl ServiceResolverPort for MdnsResolver {
    async fn resolve(&self) -> Option<DiscoveredServer> {
        let timeout = self.timeout;
        match tokio::task::spawn_blocking(move || browse(timeout)).await {
            Ok(found) => found,
            Err(e) => {
                tracing::warn!(error = %e, "Discovery task failed");
                None
            }
        }
    }
}

fn browse(timeout: Duration) -> Option<DiscoveredServer> {
    let daemon = match ServiceDaemon::new() {
        Ok(daemon) => daemon,
        Err(e) => {
            tracing::warn!(error = %e, "mDNS unavailable, skipping discovery");
            return None;
        }
    };
    let receiver = match daemon.browse(SERVICE_TYPE) {
        Ok(receiver) => receiver,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to browse for player");
            let _ = daemon.shutdown();
            return None;
        }
    };

    let mut attempt = FirstResponder::default();
    let deadline = Instant::now() + timeout;
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            break;
        }
        match receiver.recv_timeout(remaining) {
            Ok(ServiceEvent::ServiceResolved(info)) => {
                let Some(ip) = preferred_address(info.get_addresses()) else {
                    continue;
                };
                let server = DiscoveredServer::new(ip, info.get_port());
                if attempt.observe(server) {
                    tracing::info!(server = %server, name = %info.get_fullname(), "Found player");
                } else {
                    tracing::debug!(server = %server, "Ignoring later responder");
                }
            }
            Ok(event) => tracing::trace!(?event, "mDNS event"),
            // timed out or daemon gone
            Err(_) => break,
        }
    }

    let _ = daemon.stop_browse(SERVICE_TYPE);
    let _ = daemon.shutdown();

    if attempt.found().is_none() {
        tracing::warn!(timeout_secs = timeout.as_secs(), "No player found");
    }
    attempt.found()
}

/// Candidate for one discovery attempt; only the first observation counts.
#[derive(Debug, Default)]
pub struct FirstResponder {
    found: Option<DiscoveredServer>,
}

impl FirstResponder {
    /// Returns `true` if `server` became the candidate.
    pub fn observe(&mut self, server: DiscoveredServer) -> bool {
        if self.found.is_some() {
            return false;
        }
        self.found = Some(server);
        true
    }

    pub fn found(&self) -> Option<DiscoveredServer> {
        self.found
    }
}

/// IPv4 before IPv6, lowest address first, so the choice is stable.
fn preferred_address(addresses: &HashSet<IpAddr>) -> Option<IpAddr> {
    addresses
        .iter()
        .filter(|ip| ip.is_ipv4())
        .min()
        .or_else(|| addresses.iter().min())
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{Ipv4Addr, Ipv6Addr};

    fn v4(last: u8) -> IpAddr {
        IpAddr::V4(Ipv4Addr::new(192, 168, 1, last))
    }

    #[test]
    fn first_responder_wins() {
        let mut attempt = FirstResponder::default();
        assert!(attempt.observe(DiscoveredServer::new(v4(2), 8000)));
        assert!(!attempt.observe(DiscoveredServer::new(v4(3), 9000)));
        assert_eq!(attempt.found(), Some(DiscoveredServer::new(v4(2), 8000)));
    }

    #[test]
    fn empty_attempt_finds_nothing() {
        assert_eq!(FirstResponder::default().found(), None);
    }

    #[test]
    fn prefers_ipv4() {
        let addresses: HashSet<IpAddr> = [IpAddr::V6(Ipv6Addr::LOCALHOST), v4(9), v4(4)]
            .into_iter()
            .collect();
        assert_eq!(preferred_address(&addresses), Some(v4(4)));
    }

    #[test]
    fn falls_back_to_ipv6() {
        let addresses: HashSet<IpAddr> = [IpAddr::V6(Ipv6Addr::LOCALHOST)].into_iter().collect();
        assert_eq!(
            preferred_address(&addresses),
            Some(IpAddr::V6(Ipv6Addr::LOCALHOST))
        );
        assert_eq!(preferred_address(&HashSet::new()), None);
    }
}
