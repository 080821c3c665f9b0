//! Credentials response schema.
//!
//! A mutually authenticated `GET` to a `/credentials` endpoint returns
//! temporary STS credentials. On failure the `credentials` block is empty
//! and `message` describes the error.

use heapless::String;
use serde::Deserialize;

use super::{MAX_ACCESS_KEY_LEN, MAX_MESSAGE_LEN, MAX_SESSION_TOKEN_LEN, MAX_TIMESTAMP_LEN};

/// The STS credential set.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct CredentialsData {
    /// STS access key ID.
    #[serde(rename = "accessKeyId")]
    pub access_key_id: Option<String<MAX_ACCESS_KEY_LEN>>,
    /// STS secret access key.
    #[serde(rename = "secretAccessKey")]
    pub secret_access_key: Option<String<MAX_ACCESS_KEY_LEN>>,
    /// STS session token.
    #[serde(rename = "sessionToken")]
    pub session_token: Option<String<MAX_SESSION_TOKEN_LEN>>,
    /// ISO-8601 UTC expiration like `2026-01-20T22:54:09Z`. Absence is
    /// legal for long-lived credentials.
    pub expiration: Option<String<MAX_TIMESTAMP_LEN>>,
}

/// Top-level credentials response.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct CredentialsResponse {
    /// The credential set; fields are empty on failure.
    pub credentials: CredentialsData,
    /// Error description, populated when the exchange was refused.
    pub message: Option<String<MAX_MESSAGE_LEN>>,
}
