//! A transport abstraction layer for the SDK's network operations
//!
//! The SDK performs at most one blocking HTTPS round trip per operation and
//! reaches the network exclusively through the traits in this module. The
//! caller supplies an implementation of [`TlsConnect`] for the target
//! platform; the SDK never opens sockets or loads certificates itself.

#![allow(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod http;

pub use error::Error;

use crate::config::TlsCredentials;

/// Re-exports of common traits
pub mod prelude {
    pub use super::{Close, Connection, Read, TlsConnect, Write};
}

// Core synchronous traits. Errors are the shared transport [`Error`] so the
// SDK can attach a distinct diagnostic to each failure class.
pub trait Read {
    /// Read data from the connection
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Error>;
}

pub trait Write {
    /// Write data to the connection
    fn write(&mut self, buf: &[u8]) -> Result<usize, Error>;
    /// Flush the write buffer
    fn flush(&mut self) -> Result<(), Error>;
}

pub trait Close {
    /// Close the connection
    fn close(self) -> Result<(), Error>;
}

/// A synchronous connection
pub trait Connection: Read + Write + Close {}

/// A synchronous HTTPS connector.
///
/// Implementations open a TLS connection to `remote` (a `host:port` string).
/// When `identity` is provided, the device certificate and private key must
/// be loaded as the client identity for mutual TLS, and the optional server
/// CA certificate replaces the system trust store for peer verification.
///
/// # Contract
///
/// Hostname verification and peer-certificate verification are mandatory and
/// must never be disabled, with or without a client identity. A failed
/// handshake or rejected peer must map to [`Error::TlsError`].
pub trait TlsConnect {
    /// Associated connection type
    type Connection: Connection;
    /// Open a connection, optionally presenting a client identity
    fn connect(
        &mut self,
        remote: &str,
        identity: Option<&TlsCredentials<'_>>,
    ) -> Result<Self::Connection, Error>;
}
