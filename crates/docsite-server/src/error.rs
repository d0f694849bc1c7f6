//! Error types for the HTTP server.

/// Server startup error.
///
/// Request handling itself cannot fail: unresolvable routes degrade to the
/// not-found page, whose presence the content table enforces at load time.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The configured listen address could not be parsed.
    #[error("Invalid listen address {addr}: {source}")]
    Address {
        /// The offending `host:port` string.
        addr: String,
        /// Underlying parse error.
        source: std::net::AddrParseError,
    },

    /// I/O error binding or serving.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
