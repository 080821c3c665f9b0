//! Discovery and identity endpoint URL builders.
//!
//! Pure string composition: every account/device field is percent-encoded
//! independently, treating nothing as already safe.

use core::fmt::Write as _;

use heapless::String;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, PercentEncode, utf8_percent_encode};

use crate::config::DeviceProperties;
use crate::error::SdkError;

/// Maximum length of a fully composed request URL.
pub const MAX_API_URL_LEN: usize = 512;

/// Maximum length of a `host:port` remote string.
pub const MAX_REMOTE_LEN: usize = 140;

/// A fully composed request URL.
pub type ApiUrl = String<MAX_API_URL_LEN>;

/// A `host:port` string for the transport connector.
pub type Remote = String<MAX_REMOTE_LEN>;

/// Base endpoint of the global discovery service.
pub const DISCOVERY_ENDPOINT: &str = "https://discovery.iotconnect.io";

/// Encode everything except RFC 3986 unreserved characters.
const URL_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

fn component(value: &str) -> PercentEncode<'_> {
    utf8_percent_encode(value, URL_COMPONENT)
}

/// Builds the discovery request URL for the given account properties.
pub fn discovery_url(properties: &DeviceProperties<'_>) -> ApiUrl {
    let mut url = ApiUrl::new();
    let _ = write!(
        url,
        "{}/api/v2.1/dsdk/cpId/{}/env/{}?pf={}",
        DISCOVERY_ENDPOINT,
        component(properties.cpid),
        component(properties.env),
        component(properties.platform),
    );
    url
}

/// Builds the identity request URL from a discovered base URL.
pub fn identity_url(base_url: &str, properties: &DeviceProperties<'_>) -> ApiUrl {
    let mut url = ApiUrl::new();
    let _ = write!(url, "{}/uid/{}", base_url, component(properties.duid));
    url
}

/// An `https` URL split into the pieces the transport layer needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitUrl<'a> {
    /// The authority as it appears in the URL, for the `Host` header.
    pub host: &'a str,
    /// `host:port` for the connector; `:443` appended when no port given.
    pub remote: Remote,
    /// Absolute path including the query string; at least `/`.
    pub path: &'a str,
}

/// Splits an `https` URL into host, connector remote and path.
///
/// Every endpoint this SDK talks to is HTTPS; any other scheme is a
/// configuration error.
pub fn split_https_url(url: &str) -> Result<SplitUrl<'_>, SdkError> {
    let Some(rest) = url.strip_prefix("https://") else {
        return Err(SdkError::config_fmt(format_args!(
            "Bad URL: {}. URL must use HTTPS",
            url
        )));
    };

    let (host, path) = match rest.find('/') {
        Some(pos) => (&rest[..pos], &rest[pos..]),
        None => (rest, "/"),
    };

    if host.is_empty() {
        return Err(SdkError::config_fmt(format_args!(
            "Invalid URL format: {}. Missing domain name",
            url
        )));
    }

    let mut remote = Remote::new();
    if host.contains(':') {
        let _ = write!(remote, "{}", host);
    } else {
        let _ = write!(remote, "{}:443", host);
    }

    Ok(SplitUrl { host, remote, path })
}
