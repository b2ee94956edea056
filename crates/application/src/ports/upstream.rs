use async_trait::async_trait;
use rewire_dns_domain::DomainError;
use std::net::SocketAddr;

/// Port over the one-shot upstream relay.
///
/// An implementation sends `raw_query` unmodified to `upstream` from a fresh
/// ephemeral socket and resolves with the first reply datagram, also
/// unmodified. There is no deadline: if the upstream stays silent the future
/// never resolves, and concurrent forwards are kept apart purely by each
/// owning its own socket.
#[async_trait]
pub trait UpstreamForwarder: Send + Sync {
    async fn forward(
        &self,
        raw_query: &[u8],
        upstream: SocketAddr,
    ) -> Result<Vec<u8>, DomainError>;
}
