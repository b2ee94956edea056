use rewire_dns_application::use_cases::HandleQueryUseCase;
use rewire_dns_domain::DomainError;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info, warn};

/// Largest datagram accepted from a client (plain DNS over UDP).
const MAX_QUERY_SIZE: usize = 512;

/// Lifecycle notifications for whoever supervises the dispatcher.
#[derive(Debug)]
pub enum ServerEvent {
    /// The listening socket is bound and serving.
    Listening(SocketAddr),
    /// A socket-level failure; fatal for this socket.
    SocketError(String),
}

/// The UDP dispatcher.
///
/// Owns the listening socket and hands every datagram to the query use case
/// on its own task, so a slow or silent upstream never stalls the receive
/// loop. Per-datagram failures are contained in their task; only
/// socket-level failures end the server.
pub struct DnsServer {
    handler: Arc<HandleQueryUseCase>,
    events: UnboundedSender<ServerEvent>,
}

impl DnsServer {
    pub fn new(handler: Arc<HandleQueryUseCase>, events: UnboundedSender<ServerEvent>) -> Self {
        Self { handler, events }
    }

    /// Binds `addr` and serves until a socket-level failure. A bind failure
    /// is surfaced both as an event and as the returned error.
    pub async fn run(self, addr: SocketAddr) -> Result<(), DomainError> {
        let socket = match bind_socket(addr) {
            Ok(socket) => socket,
            Err(e) => {
                let reason = format!("binding '{addr}': {e}");
                let _ = self.events.send(ServerEvent::SocketError(reason.clone()));
                return Err(DomainError::IoError(reason));
            }
        };

        let local_addr = socket
            .local_addr()
            .map_err(|e| DomainError::IoError(e.to_string()))?;
        let socket = Arc::new(socket);

        let _ = self.events.send(ServerEvent::Listening(local_addr));
        info!(bind_address = %local_addr, "DNS server listening");

        let mut buf = [0u8; MAX_QUERY_SIZE];
        loop {
            let (len, peer) = match socket.recv_from(&mut buf).await {
                Ok(received) => received,
                Err(e) => {
                    let reason = format!("receive failed: {e}");
                    let _ = self.events.send(ServerEvent::SocketError(reason.clone()));
                    return Err(DomainError::IoError(reason));
                }
            };

            let datagram = buf[..len].to_vec();
            let handler = self.handler.clone();
            let socket = socket.clone();
            tokio::spawn(async move {
                match handler.execute(&datagram).await {
                    Ok(response) => {
                        if let Err(e) = socket.send_to(&response, peer).await {
                            warn!(%peer, error = %e, "Failed to send response");
                        }
                    }
                    Err(DomainError::MalformedQuery(reason)) => {
                        debug!(%peer, %reason, "Dropped undecodable datagram");
                    }
                    Err(e) => {
                        warn!(%peer, error = %e, "Dropped query");
                    }
                }
            });
        }
    }
}

fn bind_socket(addr: SocketAddr) -> std::io::Result<UdpSocket> {
    let socket = Socket::new(Domain::IPV4, Type::DGRAM, Some(Protocol::UDP))?;
    socket.set_reuse_address(true)?;
    socket.set_recv_buffer_size(512 * 1024)?;
    socket.set_send_buffer_size(512 * 1024)?;
    socket.bind(&addr.into())?;
    socket.set_nonblocking(true)?;
    UdpSocket::from_std(socket.into())
}
