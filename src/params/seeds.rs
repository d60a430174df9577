//! Seed node configuration
//!
//! Hardcoded bootstrap hosts for initial peer discovery. Resolving and
//! connecting to them is the networking layer's job.

use serde::Serialize;
use std::net::{IpAddr, SocketAddr};

/// A DNS seed entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DnsSeed {
    /// Display name of the seed operator
    pub name: &'static str,
    /// Host name or literal IP address
    pub host: &'static str,
}

impl DnsSeed {
    pub const fn new(name: &'static str, host: &'static str) -> Self {
        Self { name, host }
    }

    /// Socket address for seeds given as literal IPs.
    ///
    /// Host names need DNS resolution and return `None`.
    pub fn socket_addr(&self, port: u16) -> Option<SocketAddr> {
        self.host
            .parse::<IpAddr>()
            .ok()
            .map(|ip| SocketAddr::new(ip, port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_ip_seed() {
        let seed = DnsSeed::new("167.179.94.218", "167.179.94.218");
        assert_eq!(
            seed.socket_addr(5982).map(|addr| addr.to_string()),
            Some("167.179.94.218:5982".to_string())
        );
    }

    #[test]
    fn test_host_name_seed_needs_resolution() {
        let seed = DnsSeed::new("mano.org", "tseed.mano.org");
        assert!(seed.socket_addr(15982).is_none());
    }
}
