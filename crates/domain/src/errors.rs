use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Malformed DNS query: {0}")]
    MalformedQuery(String),

    #[error("Invalid IPv4 address: {0}")]
    InvalidIpAddress(String),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid host pattern: {0}")]
    InvalidHostPattern(String),

    #[error("No upstream proxy configured")]
    MissingProxy,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    IoError(String),
}
