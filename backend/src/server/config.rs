//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use catalog::outbound::persistence::DbPool;
use catalog::outbound::storage::PictureDirectory;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) pictures: PictureDirectory,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Construct a configuration serving pictures from `pictures`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, pictures: PictureDirectory) -> Self {
        Self {
            bind_addr,
            pictures,
            db_pool: None,
        }
    }

    /// Attach a database connection pool for persistence adapters.
    ///
    /// Without a pool the server falls back to fixture ports that serve an
    /// empty catalog.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Return the socket address the server will bind to.
    #[cfg_attr(
        not(any(test, doctest)),
        expect(dead_code, reason = "Exercised by server tests")
    )]
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
