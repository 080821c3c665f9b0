//! Common error types for SDK operations

use core::fmt;
use core::fmt::Write as _;

use heapless::String;

/// Maximum length of a composed error message.
///
/// Sized to hold the operation name, the mapped platform error-code text and
/// a server-provided message without truncation in practice.
pub const MAX_ERROR_LEN: usize = 384;

/// Owned, fixed-capacity error message text.
pub type ErrorMessage = String<MAX_ERROR_LEN>;

/// An error raised by the SDK.
///
/// Every failure carries a human-readable, user-displayable message composed
/// from the operation name, the HTTP status, the server message and the
/// mapped platform error-code text where applicable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SdkError {
    /// Malformed configuration, a protocol-level failure reported by the
    /// platform, or a transport/TLS failure. Generally caller-actionable.
    Config(ErrorMessage),
    /// A local parsing or logic failure: malformed JSON in the credentials
    /// exchange, an unparseable expiration timestamp or an incomplete
    /// credential payload.
    Client(ErrorMessage),
}

impl SdkError {
    /// Creates a configuration error from a literal message.
    pub fn config(msg: &str) -> Self {
        SdkError::Config(truncated(msg))
    }

    /// Creates a client error from a literal message.
    pub fn client(msg: &str) -> Self {
        SdkError::Client(truncated(msg))
    }

    /// Creates a configuration error from format arguments.
    ///
    /// Output beyond [`MAX_ERROR_LEN`] is dropped rather than failing.
    pub fn config_fmt(args: fmt::Arguments<'_>) -> Self {
        let mut msg = ErrorMessage::new();
        let _ = msg.write_fmt(args);
        SdkError::Config(msg)
    }

    /// Creates a client error from format arguments.
    pub fn client_fmt(args: fmt::Arguments<'_>) -> Self {
        let mut msg = ErrorMessage::new();
        let _ = msg.write_fmt(args);
        SdkError::Client(msg)
    }

    /// The composed error message.
    pub fn message(&self) -> &str {
        match self {
            SdkError::Config(msg) | SdkError::Client(msg) => msg.as_str(),
        }
    }

    /// Returns `true` for the configuration/protocol error kind.
    pub fn is_config(&self) -> bool {
        matches!(self, SdkError::Config(_))
    }

    /// Returns `true` for the local parsing/logic error kind.
    pub fn is_client(&self) -> bool {
        matches!(self, SdkError::Client(_))
    }
}

fn truncated(msg: &str) -> ErrorMessage {
    let mut out = ErrorMessage::new();
    for c in msg.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

impl fmt::Display for SdkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SdkError::Config(msg) => write!(f, "configuration error: {}", msg),
            SdkError::Client(msg) => write!(f, "client error: {}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SdkError {}

#[cfg(feature = "defmt")]
impl defmt::Format for SdkError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            SdkError::Config(msg) => defmt::write!(f, "Config({=str})", msg.as_str()),
            SdkError::Client(msg) => defmt::write!(f, "Client({=str})", msg.as_str()),
        }
    }
}
