//! DNS wire codec (RFC 1035 §4).
//!
//! Deliberately restricted to what this proxy speaks: one question per
//! message, A records in the IN class, no name compression, no EDNS0. The
//! question bytes of a query are kept verbatim so the response can echo them
//! byte-for-byte.

mod addr;
mod message;
mod response;

pub use addr::{denumify, numify};
pub use message::{decode_query, domainify, DnsHeader, DnsQuestion, Query};
pub use response::{encode_response, DEFAULT_TTL};
