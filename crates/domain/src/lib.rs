//! rewire-dns Domain Layer
pub mod errors;
pub mod hostname;
pub mod wire;

pub use errors::DomainError;
pub use hostname::is_valid_hostname;
pub use wire::{
    decode_query, denumify, domainify, encode_response, numify, DnsHeader, DnsQuestion, Query,
    DEFAULT_TTL,
};
