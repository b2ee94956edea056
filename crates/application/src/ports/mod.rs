mod host_table;
mod query_logger;
mod upstream;

pub use host_table::{HostTablePort, RouteDecision};
pub use query_logger::QueryLogger;
pub use upstream::UpstreamForwarder;
