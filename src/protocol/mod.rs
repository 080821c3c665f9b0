//! Typed mirrors of the /IOTCONNECT wire responses.
//!
//! The platform emits abbreviated JSON keys (`d`, `ec`, `bu`, `vs`, ...).
//! The structs here mirror that schema one-to-one, with serde renames where
//! a wire key is a Rust keyword (`as`, `pub`). Unknown fields are tolerated
//! so schema additions on the platform side do not break older devices.
//!
//! All strings are owned `heapless` strings with the capacities below, so
//! parsed responses can outlive the receive buffer without allocation.

#![deny(unsafe_code)]

pub mod credentials;
pub mod discovery;
pub mod identity;

/// Maximum length of a server-provided URL (base URL, broker host,
/// credential endpoint).
pub const MAX_URL_LEN: usize = 256;

/// Maximum length of a broker hostname.
pub const MAX_HOST_LEN: usize = 128;

/// Maximum length of an MQTT topic string.
pub const MAX_TOPIC_LEN: usize = 256;

/// Maximum length of a client ID (thing name).
pub const MAX_CLIENT_ID_LEN: usize = 128;

/// Maximum length of a broker username.
pub const MAX_USERNAME_LEN: usize = 256;

/// Maximum length of a device or bucket name.
pub const MAX_NAME_LEN: usize = 64;

/// Maximum length of a server-provided status or error message.
pub const MAX_MESSAGE_LEN: usize = 128;

/// Maximum length of an STS access key ID or secret access key.
pub const MAX_ACCESS_KEY_LEN: usize = 128;

/// Maximum length of an STS session token.
pub const MAX_SESSION_TOKEN_LEN: usize = 2048;

/// Maximum length of an ISO-8601 timestamp string.
pub const MAX_TIMESTAMP_LEN: usize = 40;

/// Maximum length of an IAM role ARN.
pub const MAX_ROLE_ARN_LEN: usize = 256;

/// Maximum number of storage buckets in a file-storage block.
pub const MAX_BUCKETS: usize = 8;

/// Maximum length of a hardware/software version string.
pub const MAX_VERSION_LEN: usize = 32;
