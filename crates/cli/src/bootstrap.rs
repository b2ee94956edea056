use anyhow::Context;
use rewire_dns_infrastructure::hosts::{parse_hosts, HostsConfig};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub fn init_logging(level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Reads and parses the hosts definition. A missing `proxy` directive is a
/// fatal misconfiguration: the process must report it and exit before any
/// socket is bound.
pub fn load_hosts(path: &str) -> anyhow::Result<HostsConfig> {
    let definition = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read hosts file: {path}"))?;

    let config = parse_hosts(&definition);
    if config.proxies.is_empty() {
        anyhow::bail!(
            "No proxy directive found.\nPlease find this document: {path}\nAdd a correct proxy address: \"proxy 8.8.8.8\""
        );
    }

    Ok(config)
}
