use crate::ports::{HostTablePort, QueryLogger, RouteDecision, UpstreamForwarder};
use rewire_dns_domain::{
    decode_query, domainify, encode_response, numify, DomainError, DEFAULT_TTL,
};
use std::sync::Arc;
use tracing::warn;

/// Decides the fate of one raw datagram: answer it from the override table
/// or forward it verbatim upstream.
pub struct HandleQueryUseCase {
    table: Arc<dyn HostTablePort>,
    forwarder: Arc<dyn UpstreamForwarder>,
    query_log: Arc<dyn QueryLogger>,
    ttl: u32,
}

impl HandleQueryUseCase {
    pub fn new(
        table: Arc<dyn HostTablePort>,
        forwarder: Arc<dyn UpstreamForwarder>,
        query_log: Arc<dyn QueryLogger>,
    ) -> Self {
        Self {
            table,
            forwarder,
            query_log,
            ttl: DEFAULT_TTL,
        }
    }

    /// Returns the datagram to send back to the client. An error means the
    /// datagram is dropped; it never affects other in-flight queries.
    pub async fn execute(&self, raw: &[u8]) -> Result<Vec<u8>, DomainError> {
        let query = decode_query(raw)?;
        let domain = domainify(&query.question.qname);

        let response = match self.table.route(&domain)? {
            RouteDecision::Local(resolved) => {
                // Echo-only pattern rules can resolve to the domain itself;
                // a value that is not a dotted quad drops the datagram here.
                let rdata = numify(&resolved)?;
                encode_response(&query, self.ttl, rdata)
            }
            RouteDecision::Forward(upstream) => self.forwarder.forward(raw, upstream).await?,
        };

        if let Err(e) = self.query_log.log_query(&domain).await {
            warn!(error = %e, %domain, "Failed to log query");
        }

        Ok(response)
    }
}
