//! Response decoding and validation for the discovery, identity and
//! credentials stages.
//!
//! Discovery and identity share an envelope: an outer `status` (expected
//! `200`) and an inner `d.ec` application error code (`0` is success). Both
//! are validated identically before any payload field is trusted.

use core::fmt::Write as _;

use heapless::String;

use crate::error::SdkError;
use crate::protocol::MAX_URL_LEN;
use crate::protocol::credentials::{CredentialsData, CredentialsResponse};
use crate::protocol::discovery::DiscoveryResponse;
use crate::protocol::identity::IdentityResponse;
use crate::rest::DeviceIdentityData;

/// Platform error-code descriptions, indexed by `ec`.
///
/// `ec` values at or beyond the table length are reported as unmapped.
pub const EC_RESPONSE_MAPPING: [&str; 11] = [
    "OK - No Error",
    "Device not found. Device is not whitelisted to platform.",
    "Device is not active.",
    "Un-Associated. Device has not any template associated with it.",
    "Device is not acquired. Device is created but it is in release state.",
    "Device is disabled. It's disabled from broker by Platform Admin",
    "Company not found as SID is not valid",
    "Subscription is expired.",
    "Connection Not Allowed.",
    "Invalid Bootstrap Certificate.",
    "Invalid Operational Certificate.",
];

/// The envelope fields shared by discovery and identity responses.
struct Envelope<'a> {
    data_present: bool,
    ec: i32,
    status: u16,
    message: Option<&'a str>,
}

/// Applies the shared error-code/status validation to either response kind.
fn validate_envelope(what: &str, envelope: &Envelope<'_>) -> Result<(), SdkError> {
    let mut ec_message: String<96> = String::new();
    let mut has_error = false;

    if envelope.data_present {
        if envelope.ec != 0 {
            has_error = true;
            let description = usize::try_from(envelope.ec)
                .ok()
                .and_then(|index| EC_RESPONSE_MAPPING.get(index));
            match description {
                Some(description) => {
                    let _ = write!(ec_message, "ec={} ({})", envelope.ec, description);
                }
                None => {
                    let _ = write!(ec_message, "ec=={}", envelope.ec);
                }
            }
        }
    } else {
        has_error = true;
        let _ = ec_message.push_str("not available");
    }

    if envelope.status != 200 {
        has_error = true;
        if ec_message.is_empty() {
            let _ = ec_message.push_str("not available");
        }
    }

    if has_error {
        return Err(SdkError::config_fmt(format_args!(
            "{} failed. Error: \"{}\" status={} message={}",
            what,
            ec_message,
            envelope.status,
            envelope.message.unwrap_or("(message not available)"),
        )));
    }
    Ok(())
}

/// Parses a discovery response and returns the account base URL.
///
/// Fails with a configuration error on malformed JSON, a non-200 status, a
/// non-zero `ec`, or a successful response that nevertheless omits the base
/// URL.
pub fn parse_discovery_response(raw: &[u8]) -> Result<String<MAX_URL_LEN>, SdkError> {
    let (response, _): (DiscoveryResponse, usize) = serde_json_core::from_slice(raw)
        .map_err(|e| SdkError::config_fmt(format_args!("Discovery JSON Parsing Error: {}", e)))?;

    validate_envelope(
        "Discovery",
        &Envelope {
            data_present: response.d.is_some(),
            ec: response
                .d
                .as_ref()
                .and_then(|d| d.ec)
                .unwrap_or(0),
            status: response.status.unwrap_or(0),
            message: response.message.as_deref(),
        },
    )?;

    response
        .d
        .and_then(|d| d.bu)
        .ok_or_else(|| SdkError::config("Discovery response is missing base URL"))
}

/// Parses an identity response into [`DeviceIdentityData`].
///
/// Applies the shared envelope validation, then maps the broker (`p`) and
/// metadata (`meta`) blocks. The optional `vs` and `fs` blocks are carried
/// through without further validation at this layer.
pub fn parse_identity_response(raw: &[u8]) -> Result<DeviceIdentityData, SdkError> {
    let (response, _): (IdentityResponse, usize) = serde_json_core::from_slice(raw)
        .map_err(|e| SdkError::config_fmt(format_args!("Identity JSON Parsing Error: {}", e)))?;

    validate_envelope(
        "Identity",
        &Envelope {
            data_present: response.d.is_some(),
            ec: response.d.as_ref().map(|d| d.ec).unwrap_or(0),
            status: response.status.unwrap_or(0),
            message: response.message.as_deref(),
        },
    )?;

    response
        .d
        .map(DeviceIdentityData::from_response)
        .ok_or_else(|| SdkError::config("Identity response is missing device data"))
}

/// Parses a credentials response, enforcing that the credential triple is
/// complete.
///
/// Malformed JSON is a client error. A structurally valid but incomplete
/// response (any of access key ID, secret access key or session token
/// missing or empty) is also a client error: the server-provided `message`
/// is surfaced when present, with the literal `Access Denied` extended by a
/// hint about the template feature that must be enabled.
pub fn parse_credentials_response(raw: &[u8]) -> Result<CredentialsData, SdkError> {
    let (response, _): (CredentialsResponse, usize) = serde_json_core::from_slice(raw)
        .map_err(|e| SdkError::client_fmt(format_args!("Credentials JSON Parsing Error: {}", e)))?;

    let credentials = &response.credentials;
    let complete = [
        credentials.access_key_id.as_deref(),
        credentials.secret_access_key.as_deref(),
        credentials.session_token.as_deref(),
    ]
    .iter()
    .all(|field| field.is_some_and(|value| !value.is_empty()));

    if !complete {
        return Err(match response.message.as_deref() {
            Some("Access Denied") => SdkError::client(
                "Error obtaining credentials: Access Denied. \
                 Ensure that the Video Streaming or File Storage feature \
                 is enabled in the device's template",
            ),
            Some(message) => SdkError::client_fmt(format_args!(
                "Error obtaining credentials: {}",
                message
            )),
            None => SdkError::client(
                "Credentials response is missing required fields \
                 (accessKeyId, secretAccessKey or sessionToken)",
            ),
        });
    }

    Ok(response.credentials)
}
