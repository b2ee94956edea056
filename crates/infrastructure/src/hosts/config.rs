use super::rules::HostRule;
use std::net::{Ipv4Addr, SocketAddr};

/// Port queries are forwarded to when a proxy line names no port.
pub const DEFAULT_DNS_PORT: u16 = 53;

/// One parsed hosts definition: an immutable snapshot, replaced wholesale on
/// reload and never mutated in place.
#[derive(Debug)]
pub struct HostsConfig {
    /// None listens on all interfaces; the wildcard `0.0.0.0` maps here too.
    pub bind_address: Option<Ipv4Addr>,
    pub bind_port: u16,
    /// Ordered upstream resolvers; only the first is consulted.
    pub proxies: Vec<SocketAddr>,
    /// Ordered override rules; first match wins.
    pub rules: Vec<HostRule>,
}

impl Default for HostsConfig {
    fn default() -> Self {
        Self {
            bind_address: None,
            bind_port: DEFAULT_DNS_PORT,
            proxies: Vec::new(),
            rules: Vec::new(),
        }
    }
}

impl HostsConfig {
    /// The socket address the dispatcher should listen on.
    pub fn bind_addr(&self) -> SocketAddr {
        let ip = self.bind_address.unwrap_or(Ipv4Addr::UNSPECIFIED);
        SocketAddr::from((ip, self.bind_port))
    }

    /// The first matching rule's resolution for `domain`.
    pub fn lookup(&self, domain: &str) -> Option<String> {
        self.rules.iter().find_map(|rule| rule.resolve(domain))
    }

    pub fn first_proxy(&self) -> Option<SocketAddr> {
        self.proxies.first().copied()
    }
}
