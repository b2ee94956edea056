use async_trait::async_trait;
use rewire_dns_domain::DomainError;

/// Logger collaborator: receives one domain string per resolved or forwarded
/// query. Notification is best-effort; a failure here must never affect the
/// resolution path.
#[async_trait]
pub trait QueryLogger: Send + Sync {
    async fn log_query(&self, domain: &str) -> Result<(), DomainError>;
}
