//! rewire-dns Infrastructure Layer
pub mod dns;
pub mod hosts;
pub mod logging;
pub mod watch;
