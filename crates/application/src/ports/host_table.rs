use rewire_dns_domain::DomainError;
use std::net::SocketAddr;
use std::sync::Arc;

/// Outcome of consulting the override table for one queried domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// A rule matched; answer locally with this resolved value: a dotted
    /// IPv4 string, or the queried domain itself for echo-only pattern
    /// rules.
    Local(Arc<str>),
    /// No rule matched; forward the raw query verbatim to this upstream.
    Forward(SocketAddr),
}

/// Port over the hosts override table.
///
/// `route` must read one consistent snapshot of the table: a concurrent
/// reload may never leak a mix of old rules and new proxies into a single
/// decision. `reload` replaces the whole table atomically; on failure the
/// previous table stays active.
pub trait HostTablePort: Send + Sync {
    fn route(&self, domain: &str) -> Result<RouteDecision, DomainError>;
    fn reload(&self, definition: &str) -> Result<(), DomainError>;
}
