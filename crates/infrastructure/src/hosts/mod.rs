mod config;
mod parser;
mod rules;
mod table;

pub use config::{HostsConfig, DEFAULT_DNS_PORT};
pub use parser::parse_hosts;
pub use rules::HostRule;
pub use table::HostTable;
