use crate::ports::HostTablePort;
use rewire_dns_domain::DomainError;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Re-reads the hosts definition file and swaps the override table.
pub struct ReloadHostsUseCase {
    table: Arc<dyn HostTablePort>,
}

impl ReloadHostsUseCase {
    pub fn new(table: Arc<dyn HostTablePort>) -> Self {
        Self { table }
    }

    pub async fn execute(&self, path: &Path) -> Result<(), DomainError> {
        let definition = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| DomainError::IoError(format!("{}: {}", path.display(), e)))?;

        self.table.reload(&definition)?;

        info!(path = %path.display(), "Hosts table reloaded");
        Ok(())
    }
}
