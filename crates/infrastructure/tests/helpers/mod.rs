#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// Encodes a dotted domain as length-prefixed labels, terminating zero
/// included.
pub fn encode_qname(domain: &str) -> Vec<u8> {
    let mut qname = Vec::with_capacity(domain.len() + 2);
    for label in domain.split('.') {
        qname.push(label.len() as u8);
        qname.extend_from_slice(label.as_bytes());
    }
    qname.push(0);
    qname
}

/// Builds the raw wire form of a recursion-desired A/IN query for `domain`.
pub fn build_query(id: [u8; 2], domain: &str) -> Vec<u8> {
    let mut buf = Vec::with_capacity(16 + domain.len() + 2);
    buf.extend_from_slice(&id);
    buf.push(0x01);
    buf.push(0x00);
    buf.extend_from_slice(&1u16.to_be_bytes());
    buf.extend_from_slice(&0u16.to_be_bytes());
    buf.extend_from_slice(&0u16.to_be_bytes());
    buf.extend_from_slice(&0u16.to_be_bytes());
    buf.extend_from_slice(&encode_qname(domain));
    buf.extend_from_slice(&1u16.to_be_bytes());
    buf.extend_from_slice(&1u16.to_be_bytes());
    buf
}

/// Canned upstream resolver on an ephemeral localhost port: records every
/// datagram it receives and answers each with the same fixed reply.
pub struct MockUpstream {
    addr: SocketAddr,
    received: Arc<Mutex<Vec<Vec<u8>>>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockUpstream {
    pub async fn start(reply: Vec<u8>) -> std::io::Result<Self> {
        let socket = UdpSocket::bind("127.0.0.1:0").await?;
        let addr = socket.local_addr()?;
        let received = Arc::new(Mutex::new(Vec::new()));

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();
        let seen = received.clone();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            seen.lock().unwrap().push(buf[..len].to_vec());
                            let _ = socket.send_to(&reply, peer).await;
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            received,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn received(&self) -> Vec<Vec<u8>> {
        self.received.lock().unwrap().clone()
    }
}

impl Drop for MockUpstream {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
