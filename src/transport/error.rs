//! Common error types for transport operations

/// A common error type for transport operations.
///
/// This enum defines a set of common errors that can occur when working with
/// network connections. It is designed to be simple and portable for
/// `no_std` environments.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// An operation was attempted on a connection that is not open.
    NotOpen,
    /// An error occurred during a write operation.
    WriteError,
    /// An error occurred during a read operation.
    ReadError,
    /// A connection attempt was refused.
    ConnectionRefused,
    /// A timeout occurred.
    Timeout,
    /// The connection was closed.
    ConnectionClosed,
    /// An invalid address was provided.
    InvalidAddress,
    /// The TLS handshake failed or the peer certificate was rejected.
    TlsError,
    /// A protocol-specific error occurred.
    ProtocolError,
}

impl Error {
    /// A short, user-displayable diagnostic for this failure class.
    ///
    /// Keeps TLS handshake failures, HTTP protocol failures and generic
    /// connection failures distinguishable in composed error messages.
    pub fn diagnostic(&self) -> &'static str {
        match self {
            Error::NotOpen => "connection is not open",
            Error::WriteError => "failed to write to the connection",
            Error::ReadError => "failed to read from the connection",
            Error::ConnectionRefused => "connection refused by the remote endpoint",
            Error::Timeout => "connection timed out",
            Error::ConnectionClosed => "connection closed by the remote endpoint",
            Error::InvalidAddress => "invalid remote address",
            Error::TlsError => "TLS handshake with the remote endpoint failed",
            Error::ProtocolError => "malformed HTTP response from the remote endpoint",
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.diagnostic())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::NotOpen => defmt::write!(f, "NotOpen"),
            Error::WriteError => defmt::write!(f, "WriteError"),
            Error::ReadError => defmt::write!(f, "ReadError"),
            Error::ConnectionRefused => defmt::write!(f, "ConnectionRefused"),
            Error::Timeout => defmt::write!(f, "Timeout"),
            Error::ConnectionClosed => defmt::write!(f, "ConnectionClosed"),
            Error::InvalidAddress => defmt::write!(f, "InvalidAddress"),
            Error::TlsError => defmt::write!(f, "TlsError"),
            Error::ProtocolError => defmt::write!(f, "ProtocolError"),
        }
    }
}
