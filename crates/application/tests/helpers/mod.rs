#![allow(dead_code)]

use async_trait::async_trait;
use rewire_dns_application::ports::{
    HostTablePort, QueryLogger, RouteDecision, UpstreamForwarder,
};
use rewire_dns_domain::DomainError;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

pub const UPSTREAM: &str = "8.8.8.8:53";

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

pub struct MockHostTable {
    locals: Mutex<HashMap<String, String>>,
    upstream: SocketAddr,
    reloads: Mutex<Vec<String>>,
}

impl MockHostTable {
    pub fn new() -> Self {
        Self {
            locals: Mutex::new(HashMap::new()),
            upstream: UPSTREAM.parse().unwrap(),
            reloads: Mutex::new(Vec::new()),
        }
    }

    pub fn set_local(&self, domain: &str, resolved: &str) {
        self.locals
            .lock()
            .unwrap()
            .insert(domain.to_string(), resolved.to_string());
    }

    pub fn reload_count(&self) -> usize {
        self.reloads.lock().unwrap().len()
    }
}

impl HostTablePort for MockHostTable {
    fn route(&self, domain: &str) -> Result<RouteDecision, DomainError> {
        match self.locals.lock().unwrap().get(domain) {
            Some(resolved) => Ok(RouteDecision::Local(resolved.as_str().into())),
            None => Ok(RouteDecision::Forward(self.upstream)),
        }
    }

    fn reload(&self, definition: &str) -> Result<(), DomainError> {
        self.reloads.lock().unwrap().push(definition.to_string());
        Ok(())
    }
}

pub struct MockForwarder {
    reply: Vec<u8>,
    should_fail: AtomicBool,
    calls: Mutex<Vec<(Vec<u8>, SocketAddr)>>,
}

impl MockForwarder {
    pub fn new(reply: Vec<u8>) -> Self {
        Self {
            reply,
            should_fail: AtomicBool::new(false),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<(Vec<u8>, SocketAddr)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl UpstreamForwarder for MockForwarder {
    async fn forward(
        &self,
        raw_query: &[u8],
        upstream: SocketAddr,
    ) -> Result<Vec<u8>, DomainError> {
        self.calls
            .lock()
            .unwrap()
            .push((raw_query.to_vec(), upstream));

        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::IoError("upstream unreachable".to_string()));
        }

        Ok(self.reply.clone())
    }
}

pub struct MockQueryLogger {
    logged: Mutex<Vec<String>>,
    should_fail: AtomicBool,
}

impl MockQueryLogger {
    pub fn new() -> Self {
        Self {
            logged: Mutex::new(Vec::new()),
            should_fail: AtomicBool::new(false),
        }
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::SeqCst);
    }

    pub fn logged(&self) -> Vec<String> {
        self.logged.lock().unwrap().clone()
    }
}

#[async_trait]
impl QueryLogger for MockQueryLogger {
    async fn log_query(&self, domain: &str) -> Result<(), DomainError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::IoError("log sink closed".to_string()));
        }
        self.logged.lock().unwrap().push(domain.to_string());
        Ok(())
    }
}
