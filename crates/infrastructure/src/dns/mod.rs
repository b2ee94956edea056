mod forwarder;
mod server;

pub use forwarder::UdpForwarder;
pub use server::{DnsServer, ServerEvent};
