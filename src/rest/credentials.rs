//! Mutual-TLS credential exchange.
//!
//! Exchanges the device certificate for temporary STS credentials by issuing
//! a single mutually authenticated `GET` against a credential endpoint from
//! the identity data, with the device's client ID (thing name) in the
//! `x-amzn-iot-thingname` header.

use chrono::{DateTime, Utc};
use heapless::String;

use crate::config::TlsCredentials;
use crate::error::SdkError;
use crate::protocol::{MAX_ACCESS_KEY_LEN, MAX_SESSION_TOKEN_LEN};
use crate::rest::{parser, urls};
use crate::transport::TlsConnect;
use crate::transport::http::{Client, Header};

/// Temporary STS cloud-storage credentials.
///
/// Ephemeral: the SDK neither persists nor refreshes these. The caller is
/// responsible for re-running the exchange before `expiration`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloudCredentials {
    /// STS access key ID.
    pub access_key_id: String<MAX_ACCESS_KEY_LEN>,
    /// STS secret access key.
    pub secret_access_key: String<MAX_ACCESS_KEY_LEN>,
    /// STS session token.
    pub session_token: String<MAX_SESSION_TOKEN_LEN>,
    /// Expiration instant in UTC. Absent for long-lived credentials.
    pub expiration: Option<DateTime<Utc>>,
}

/// Parses an ISO-8601/RFC 3339 expiration string into a UTC instant.
///
/// A malformed string is a fatal client error, never silently ignored.
pub fn parse_expiration(raw: &str) -> Result<DateTime<Utc>, SdkError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|instant| instant.with_timezone(&Utc))
        .map_err(|e| {
            SdkError::client_fmt(format_args!(
                "Unable to parse credentials expiration \"{}\": {}",
                raw, e
            ))
        })
}

/// Performs the credential exchange against `endpoint`.
///
/// Establishes a mutually authenticated TLS connection through `connector`
/// (device certificate and key as the client identity, optional custom CA
/// for server verification), issues the `GET`, and parses the response.
/// Transport and TLS failures become configuration errors with distinct
/// diagnostics; no retry is attempted.
pub(crate) fn exchange<C: TlsConnect>(
    connector: &mut C,
    endpoint: &str,
    client_id: &str,
    tls: &TlsCredentials<'_>,
) -> Result<CloudCredentials, SdkError> {
    let split = urls::split_https_url(endpoint)?;

    let connection = connector.connect(&split.remote, Some(tls)).map_err(|e| {
        SdkError::config_fmt(format_args!(
            "Unable to connect to credential endpoint {}: {}",
            endpoint,
            e.diagnostic()
        ))
    })?;

    let mut client = Client::new(connection);
    let headers = [
        Header {
            name: "Host",
            value: split.host,
        },
        Header {
            name: "x-amzn-iot-thingname",
            value: client_id,
        },
    ];
    let response = client.get(split.path, &headers).map_err(|e| {
        SdkError::config_fmt(format_args!(
            "Error obtaining credentials: {}",
            e.diagnostic()
        ))
    })?;
    let _ = client.close();

    if response.status_code != 200 {
        return Err(SdkError::config_fmt(format_args!(
            "HTTP error obtaining credentials: status {}",
            response.status_code
        )));
    }

    let data = parser::parse_credentials_response(&response.body)?;

    // The parser guarantees the triple is present and non-empty.
    let (Some(access_key_id), Some(secret_access_key), Some(session_token)) = (
        data.access_key_id,
        data.secret_access_key,
        data.session_token,
    ) else {
        return Err(SdkError::client(
            "Credentials response is missing required fields \
             (accessKeyId, secretAccessKey or sessionToken)",
        ));
    };

    let expiration = match data.expiration.as_deref() {
        Some(raw) => Some(parse_expiration(raw)?),
        None => None,
    };

    Ok(CloudCredentials {
        access_key_id,
        secret_access_key,
        session_token,
        expiration,
    })
}
