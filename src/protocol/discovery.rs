//! Discovery response schema.
//!
//! `GET https://discovery.iotconnect.io/api/v2.1/dsdk/cpId/{cpid}/env/{env}?pf={platform}`
//! returns the regional base URL for the account.

use heapless::String;
use serde::Deserialize;

use super::{MAX_MESSAGE_LEN, MAX_URL_LEN};

/// Inner `d` block of the discovery response.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct DiscoveryData {
    /// Application error code; `0` means success.
    pub ec: Option<i32>,
    /// Base URL for the identity request.
    pub bu: Option<String<MAX_URL_LEN>>,
    /// Platform echo.
    pub pf: Option<String<8>>,
    /// Discovery IP version.
    pub dip: Option<i32>,
    /// Server-side error description, when present.
    #[serde(rename = "errorMsg")]
    pub error_msg: Option<String<MAX_MESSAGE_LEN>>,
}

/// Top-level discovery response envelope.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct DiscoveryResponse {
    /// Inner data block; absence is a protocol error.
    pub d: Option<DiscoveryData>,
    /// Outer HTTP-like status; expected `200`.
    pub status: Option<u16>,
    /// Server-provided message.
    pub message: Option<String<MAX_MESSAGE_LEN>>,
}
