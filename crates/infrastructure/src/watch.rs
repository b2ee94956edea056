use rewire_dns_application::use_cases::ReloadHostsUseCase;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

/// Default delay between hosts-file change checks.
pub const DEFAULT_WATCH_INTERVAL: Duration = Duration::from_secs(3);

/// Polls the hosts file's modification time and reloads the table when it
/// changes.
///
/// Watch errors (the file briefly missing during an editor save, say) are
/// retried on the next tick and never affect serving.
pub struct HostsWatcher {
    path: PathBuf,
    interval: Duration,
}

impl HostsWatcher {
    pub fn new(path: PathBuf, interval: Duration) -> Self {
        Self { path, interval }
    }

    pub async fn run(self, reload: Arc<ReloadHostsUseCase>) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut last_seen = self.modified().await;

        loop {
            ticker.tick().await;

            let current = self.modified().await;
            if current == last_seen {
                continue;
            }
            last_seen = current;

            info!(path = %self.path.display(), "Hosts file changed, reloading");
            if let Err(e) = reload.execute(&self.path).await {
                warn!(error = %e, "Hosts reload failed, keeping the previous table");
            }
        }
    }

    async fn modified(&self) -> Option<SystemTime> {
        match tokio::fs::metadata(&self.path).await {
            Ok(meta) => meta.modified().ok(),
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "Hosts file not readable");
                None
            }
        }
    }
}
