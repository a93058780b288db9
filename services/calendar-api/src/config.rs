//! Server configuration.

use std::net::{Ipv4Addr, SocketAddr};

/// Port the calendar service listens on unless told otherwise.
pub const DEFAULT_PORT: u16 = 45678;

/// Listener configuration for [`crate::CalendarServer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind; loopback by default since the only consumer is local
    pub listen: SocketAddr,
}

impl ServerConfig {
    pub fn new(listen: SocketAddr) -> Self {
        Self { listen }
    }

    /// Listen on the loopback interface at `port`. Port 0 picks a free port.
    pub fn loopback(port: u16) -> Self {
        Self::new(SocketAddr::from((Ipv4Addr::LOCALHOST, port)))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::loopback(DEFAULT_PORT)
    }
}
