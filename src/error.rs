//! Unified error type.

use thiserror::Error;

/// The error type returned by kingraph's fallible operations.
///
/// Request-level failures (404, 405, 500) are expressed as HTTP
/// [`Response`](crate::Response) values, not as `Error`s. This type surfaces
/// infrastructure failures: loading configuration, parsing the bind address,
/// binding the listener.
#[derive(Debug, Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid socket address `{addr}`: {source}")]
    InvalidAddress {
        addr: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("configuration: {0}")]
    Config(#[from] envy::Error),
}
