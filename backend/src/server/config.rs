//! HTTP server configuration object.

use std::net::{Ipv4Addr, SocketAddr};

use ecoscholar_backend::inbound::http::state::HttpState;

/// Everything needed to start the listener.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) http_state: HttpState,
}

impl ServerConfig {
    /// Bind on all interfaces at `port`, serving handlers backed by `http_state`.
    #[must_use]
    pub fn new(port: u16, http_state: HttpState) -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)),
            http_state,
        }
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
