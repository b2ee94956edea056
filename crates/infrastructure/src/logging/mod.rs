mod query_logger;

pub use query_logger::TracingQueryLogger;
