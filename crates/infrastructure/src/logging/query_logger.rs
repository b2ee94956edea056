use async_trait::async_trait;
use rewire_dns_application::ports::QueryLogger;
use rewire_dns_domain::DomainError;
use tracing::info;

/// Query logger backed by the tracing pipeline: one line per resolved or
/// forwarded query.
pub struct TracingQueryLogger;

#[async_trait]
impl QueryLogger for TracingQueryLogger {
    async fn log_query(&self, domain: &str) -> Result<(), DomainError> {
        info!(%domain, "Query handled");
        Ok(())
    }
}
