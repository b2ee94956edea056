use async_trait::async_trait;
use rewire_dns_application::ports::UpstreamForwarder;
use rewire_dns_domain::DomainError;
use std::net::SocketAddr;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

/// Largest reply accepted from an upstream: plain DNS over UDP without
/// EDNS(0) caps messages at 512 bytes (RFC 1035 §4.2.1).
const MAX_REPLY_SIZE: usize = 512;

/// Relays one raw query over a fresh ephemeral UDP socket.
///
/// Deadline-free on purpose: an upstream that never answers parks this
/// future, and its socket, indefinitely. Concurrent forwards stay
/// independent because each call owns its own socket; no transaction-id
/// table is kept.
pub struct UdpForwarder;

#[async_trait]
impl UpstreamForwarder for UdpForwarder {
    async fn forward(
        &self,
        raw_query: &[u8],
        upstream: SocketAddr,
    ) -> Result<Vec<u8>, DomainError> {
        let socket = UdpSocket::bind("0.0.0.0:0")
            .await
            .map_err(|e| DomainError::IoError(format!("binding outbound socket: {e}")))?;

        socket
            .send_to(raw_query, upstream)
            .await
            .map_err(|e| DomainError::IoError(format!("forwarding to {upstream}: {e}")))?;

        debug!(%upstream, bytes = raw_query.len(), "Query forwarded");

        let mut reply = vec![0u8; MAX_REPLY_SIZE];
        let (len, from) = socket
            .recv_from(&mut reply)
            .await
            .map_err(|e| DomainError::IoError(format!("receiving from {upstream}: {e}")))?;

        if from.ip() != upstream.ip() {
            warn!(
                expected = %upstream,
                received_from = %from,
                "Upstream reply from unexpected source"
            );
        }

        reply.truncate(len);
        Ok(reply)
    }
}
