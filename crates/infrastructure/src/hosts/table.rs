use super::config::HostsConfig;
use super::parser::parse_hosts;
use arc_swap::ArcSwap;
use rewire_dns_application::ports::{HostTablePort, RouteDecision};
use rewire_dns_domain::DomainError;
use std::sync::Arc;

/// The live override table.
///
/// The active config sits behind an atomically swapped reference: reloads
/// replace it wholesale, so a lookup in progress always reads one
/// fully-formed snapshot and never a mix of two versions.
pub struct HostTable {
    active: ArcSwap<HostsConfig>,
}

impl HostTable {
    /// Wraps an initial config. A config without proxies is refused; with
    /// no upstream, every unmatched query would be unanswerable.
    pub fn new(config: HostsConfig) -> Result<Self, DomainError> {
        if config.proxies.is_empty() {
            return Err(DomainError::MissingProxy);
        }
        Ok(Self {
            active: ArcSwap::from_pointee(config),
        })
    }

    /// The active snapshot, for startup wiring and tests.
    pub fn snapshot(&self) -> Arc<HostsConfig> {
        self.active.load_full()
    }
}

impl HostTablePort for HostTable {
    fn route(&self, domain: &str) -> Result<RouteDecision, DomainError> {
        let config = self.active.load();
        match config.lookup(domain) {
            Some(resolved) => Ok(RouteDecision::Local(resolved.into())),
            None => config
                .first_proxy()
                .map(RouteDecision::Forward)
                .ok_or(DomainError::MissingProxy),
        }
    }

    fn reload(&self, definition: &str) -> Result<(), DomainError> {
        let config = parse_hosts(definition);
        if config.proxies.is_empty() {
            return Err(DomainError::MissingProxy);
        }
        self.active.store(Arc::new(config));
        Ok(())
    }
}
