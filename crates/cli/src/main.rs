use clap::Parser;
use rewire_dns_application::use_cases::{HandleQueryUseCase, ReloadHostsUseCase};
use rewire_dns_infrastructure::dns::{DnsServer, ServerEvent, UdpForwarder};
use rewire_dns_infrastructure::hosts::HostTable;
use rewire_dns_infrastructure::logging::TracingQueryLogger;
use rewire_dns_infrastructure::watch::{HostsWatcher, DEFAULT_WATCH_INTERVAL};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info};

mod bootstrap;

#[derive(Parser)]
#[command(name = "rewire-dns")]
#[command(version)]
#[command(about = "Local DNS proxy with hosts-file overrides")]
struct Cli {
    /// Hosts definition file path
    #[arg(short = 'c', long, value_name = "FILE", default_value = "/etc/rewire-dns/hosts")]
    config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Seconds between hosts-file change checks
    #[arg(long, default_value_t = DEFAULT_WATCH_INTERVAL.as_secs())]
    watch_interval: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    bootstrap::init_logging(&cli.log_level);

    info!("Starting rewire-dns v{}", env!("CARGO_PKG_VERSION"));

    let hosts = bootstrap::load_hosts(&cli.config)?;
    let bind_addr = hosts.bind_addr();

    let table = Arc::new(HostTable::new(hosts)?);

    let handler = Arc::new(HandleQueryUseCase::new(
        table.clone(),
        Arc::new(UdpForwarder),
        Arc::new(TracingQueryLogger),
    ));

    let reload = Arc::new(ReloadHostsUseCase::new(table));
    let watcher = HostsWatcher::new(
        PathBuf::from(&cli.config),
        Duration::from_secs(cli.watch_interval),
    );
    tokio::spawn(watcher.run(reload));

    let (events_tx, mut events_rx) = mpsc::unbounded_channel();
    tokio::spawn(async move {
        while let Some(event) = events_rx.recv().await {
            match event {
                ServerEvent::Listening(addr) => {
                    info!(bind_address = %addr, "Service has been started");
                }
                ServerEvent::SocketError(reason) => {
                    error!(%reason, "DNS socket failure");
                }
            }
        }
    });

    let server = DnsServer::new(handler, events_tx);
    server.run(bind_addr).await?;

    Ok(())
}
