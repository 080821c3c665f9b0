//! The device REST pipeline: discovery, identity and credential exchange.
//!
//! [`DeviceRestApi`] sequences the two resolution stages and caches the
//! resulting identity for the lifetime of the session. Each public
//! operation performs at most one blocking network round trip; there is no
//! internal retry, caching beyond the session identity, or background work.

#![deny(unsafe_code)]

pub mod credentials;
pub mod parser;
pub mod urls;

pub use credentials::CloudCredentials;

use core::fmt::Write as _;

use heapless::{String, Vec};

use crate::config::{DeviceProperties, TlsCredentials};
use crate::error::SdkError;
use crate::protocol::identity::{IdentityData, IdentityTopics};
use crate::protocol::{
    MAX_BUCKETS, MAX_CLIENT_ID_LEN, MAX_HOST_LEN, MAX_NAME_LEN, MAX_ROLE_ARN_LEN, MAX_URL_LEN,
    MAX_USERNAME_LEN,
};
use crate::transport::TlsConnect;
use crate::transport::http::{Client, Header, MAX_BODY_LEN};

/// Kinesis Video Streaming configuration from the identity `vs` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoStreamingConfig {
    /// Credential endpoint for the video-streaming exchange.
    pub credential_endpoint: Option<String<MAX_URL_LEN>>,
    /// Whether streaming should start automatically.
    pub auto_start: bool,
}

/// A storage bucket from the identity `fs` block.
///
/// When `is_cross_account` is set, S3 access additionally requires assuming
/// `role_arn` in the bucket's account via STS AssumeRole. That exchange is
/// the caller's responsibility; the SDK only carries the fields through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageBucket {
    /// Bucket name.
    pub name: Option<String<MAX_NAME_LEN>>,
    /// Whether the bucket lives in a different cloud account.
    pub is_cross_account: bool,
    /// Role ARN for the cross-account AssumeRole step.
    pub role_arn: Option<String<MAX_ROLE_ARN_LEN>>,
}

/// File/object storage configuration from the identity `fs` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStorageConfig {
    /// Credential endpoint for the file-storage exchange.
    pub credential_endpoint: Option<String<MAX_URL_LEN>>,
    /// Buckets accessible with the exchanged credentials.
    pub buckets: Vec<StorageBucket, MAX_BUCKETS>,
}

/// Template capability flags from the identity `has` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceCapabilities {
    /// Device-to-cloud data.
    pub data: bool,
    /// Attributes.
    pub attributes: bool,
    /// Settings (shadow/twin).
    pub settings: bool,
    /// Rules.
    pub rules: bool,
    /// Over-the-air update support.
    pub ota: bool,
}

/// Parsed per-device identity: broker parameters and feature flags.
///
/// Owned by [`DeviceRestApi`] for the lifetime of a session. Re-running
/// discovery replaces it wholesale.
#[derive(Debug, Clone)]
pub struct DeviceIdentityData {
    /// Broker host.
    pub host: Option<String<MAX_HOST_LEN>>,
    /// Broker port.
    pub port: u16,
    /// Client ID (thing name).
    pub client_id: Option<String<MAX_CLIENT_ID_LEN>>,
    /// Broker username.
    pub username: Option<String<MAX_USERNAME_LEN>>,
    /// MQTT topic set for the device.
    pub topics: IdentityTopics,
    /// Platform flag from the metadata block.
    pub platform_flag: Option<i32>,
    /// Whether this is an edge device.
    pub is_edge_device: bool,
    /// Whether this is a gateway device.
    pub is_gateway_device: bool,
    /// Protocol version, e.g. `2.1`.
    pub protocol_version: String<16>,
    /// Template capability flags.
    pub capabilities: DeviceCapabilities,
    /// Video-streaming configuration, present iff the identity response
    /// included a non-null `vs` block.
    pub video_streaming: Option<VideoStreamingConfig>,
    /// File-storage configuration, present iff the identity response
    /// included a non-null `fs` block.
    pub file_storage: Option<FileStorageConfig>,
}

impl DeviceIdentityData {
    pub(crate) fn from_response(data: IdentityData) -> Self {
        let meta = data.meta;
        let mqtt = data.p;

        let mut protocol_version: String<16> = String::new();
        let _ = write!(protocol_version, "{}", meta.v);

        let video_streaming = mqtt.vs.map(|vs| VideoStreamingConfig {
            credential_endpoint: vs.url,
            auto_start: vs.auto_start.unwrap_or(false),
        });

        let file_storage = mqtt.fs.map(|fs| {
            let mut buckets = Vec::new();
            for entry in fs.buckets.unwrap_or_default() {
                let _ = buckets.push(StorageBucket {
                    name: entry.bn,
                    is_cross_account: entry.ca.unwrap_or(false),
                    role_arn: entry.rarn,
                });
            }
            FileStorageConfig {
                credential_endpoint: fs.url,
                buckets,
            }
        });

        Self {
            host: mqtt.h,
            port: mqtt.p,
            client_id: mqtt.id,
            username: mqtt.un,
            topics: mqtt.topics,
            platform_flag: meta.pf,
            is_edge_device: meta.edge.unwrap_or(0) != 0,
            is_gateway_device: meta.gtw.unwrap_or(0) != 0,
            protocol_version,
            capabilities: DeviceCapabilities {
                data: data.has.d != 0,
                attributes: data.has.attr != 0,
                settings: data.has.set != 0,
                rules: data.has.r != 0,
                ota: data.has.ota != 0,
            },
            video_streaming,
            file_storage,
        }
    }
}

/// Resolution state of a [`DeviceRestApi`] session.
#[derive(Debug, Clone, Default)]
pub enum Session {
    /// No identity has been fetched yet.
    #[default]
    Unresolved,
    /// Identity data is cached and credential exchanges may run.
    Resolved(DeviceIdentityData),
}

/// The device-facing REST client for the /IOTCONNECT platform.
///
/// Sequences discovery and identity resolution, caches the identity result,
/// and exposes the credential-exchange operations against that cached
/// state. Not safe for concurrent use without external synchronization;
/// the cached identity is mutated in place.
#[derive(Debug)]
pub struct DeviceRestApi<'a, C: TlsConnect> {
    properties: DeviceProperties<'a>,
    tls_credentials: Option<TlsCredentials<'a>>,
    connector: C,
    trace: bool,
    session: Session,
}

impl<'a, C: TlsConnect> DeviceRestApi<'a, C> {
    /// Creates a client for the given device properties and connector.
    pub fn new(properties: DeviceProperties<'a>, connector: C) -> Self {
        Self {
            properties,
            tls_credentials: None,
            connector,
            trace: false,
            session: Session::Unresolved,
        }
    }

    /// Sets the default TLS materials for credential exchanges.
    pub fn with_tls_credentials(mut self, tls_credentials: TlsCredentials<'a>) -> Self {
        self.tls_credentials = Some(tls_credentials);
        self
    }

    /// Enables advisory request tracing (defmt builds only).
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// The device properties this client was created with.
    pub fn properties(&self) -> &DeviceProperties<'a> {
        &self.properties
    }

    /// The cached identity data, if resolution has succeeded.
    pub fn identity(&self) -> Option<&DeviceIdentityData> {
        match &self.session {
            Session::Resolved(identity) => Some(identity),
            Session::Unresolved => None,
        }
    }

    /// Runs discovery followed by the identity fetch and caches the result.
    ///
    /// The two calls are sequential; a discovery failure short-circuits
    /// before the identity request is attempted. On success the session
    /// becomes resolved (replacing any previously cached identity) and the
    /// cached data is returned.
    pub fn get_identity_data(&mut self) -> Result<&DeviceIdentityData, SdkError> {
        let url = urls::discovery_url(&self.properties);
        self.trace_request("Requesting discovery data", &url);
        let body = self.https_get("Discovery", &url)?;
        let base_url = parser::parse_discovery_response(&body)?;

        let url = urls::identity_url(&base_url, &self.properties);
        self.trace_request("Requesting identity data", &url);
        let body = self.https_get("Identity", &url)?;
        let identity = parser::parse_identity_response(&body)?;

        self.session = Session::Resolved(identity);
        match &self.session {
            Session::Resolved(identity) => Ok(identity),
            Session::Unresolved => Err(SdkError::config(
                "No identity data available: call get_identity_data() first",
            )),
        }
    }

    /// Exchanges the device certificate for STS credentials at `endpoint`.
    ///
    /// `client_id` falls back to the cached identity's client ID; the TLS
    /// materials fall back to the bundle set via
    /// [`with_tls_credentials`](Self::with_tls_credentials). Each missing
    /// piece is a distinct configuration error.
    pub fn aws_credentials(
        &mut self,
        endpoint: &str,
        client_id: Option<&str>,
        tls_credentials: Option<&TlsCredentials<'_>>,
    ) -> Result<CloudCredentials, SdkError> {
        if endpoint.is_empty() {
            return Err(SdkError::config("AWS credential endpoint is required"));
        }

        let cached_id = match &self.session {
            Session::Resolved(identity) => identity.client_id.as_deref(),
            Session::Unresolved => None,
        };
        let Some(client_id) = client_id.or(cached_id) else {
            return Err(SdkError::config(
                "Client ID (thing name) is required for the credential exchange",
            ));
        };

        let Some(tls) = tls_credentials.or(self.tls_credentials.as_ref()) else {
            return Err(SdkError::config(
                "Device certificate and private key are required for the credential exchange",
            ));
        };

        #[cfg(feature = "defmt")]
        if self.trace {
            defmt::debug!(
                "Requesting AWS credentials: {=str} (thing name {=str})",
                endpoint,
                client_id
            );
        }

        credentials::exchange(&mut self.connector, endpoint, client_id, tls)
    }

    /// Exchanges credentials for Kinesis Video Streaming.
    ///
    /// Requires a resolved session whose identity carries a `vs` block.
    pub fn video_streaming_credentials(&mut self) -> Result<CloudCredentials, SdkError> {
        let identity = self.resolved_identity()?;
        let Some(vs) = &identity.video_streaming else {
            return Err(SdkError::config(
                "Video streaming is not available for this device. \
                 Enable the Video Streaming feature in the device's template",
            ));
        };
        let Some(endpoint) = vs.credential_endpoint.clone() else {
            return Err(SdkError::config(
                "Video streaming credential endpoint is missing from the identity data",
            ));
        };
        self.aws_credentials(&endpoint, None, None)
    }

    /// Exchanges credentials for S3 file storage.
    ///
    /// Requires a resolved session whose identity carries an `fs` block.
    /// Cross-account buckets additionally need an AssumeRole step that the
    /// caller performs with [`StorageBucket::role_arn`].
    pub fn file_storage_credentials(&mut self) -> Result<CloudCredentials, SdkError> {
        let identity = self.resolved_identity()?;
        let Some(fs) = &identity.file_storage else {
            return Err(SdkError::config(
                "File storage is not available for this device. \
                 Enable the File Storage feature in the device's template",
            ));
        };
        let Some(endpoint) = fs.credential_endpoint.clone() else {
            return Err(SdkError::config(
                "File storage credential endpoint is missing from the identity data",
            ));
        };
        self.aws_credentials(&endpoint, None, None)
    }

    fn resolved_identity(&self) -> Result<&DeviceIdentityData, SdkError> {
        match &self.session {
            Session::Resolved(identity) => Ok(identity),
            Session::Unresolved => Err(SdkError::config(
                "No identity data available: call get_identity_data() first",
            )),
        }
    }

    /// One plain HTTPS `GET`; body returned for the stage parser.
    fn https_get(&mut self, what: &str, url: &str) -> Result<Vec<u8, MAX_BODY_LEN>, SdkError> {
        let split = urls::split_https_url(url)?;
        let connection = self.connector.connect(&split.remote, None).map_err(|e| {
            SdkError::config_fmt(format_args!("{} request failed: {}", what, e.diagnostic()))
        })?;

        let mut client = Client::new(connection);
        let headers = [Header {
            name: "Host",
            value: split.host,
        }];
        let response = client.get(split.path, &headers).map_err(|e| {
            SdkError::config_fmt(format_args!("{} request failed: {}", what, e.diagnostic()))
        })?;
        let _ = client.close();

        // Server-reported protocol errors arrive as 200 with a non-zero ec,
        // handled by the stage parsers. Hard HTTP failures stop here.
        if response.status_code >= 400 {
            return Err(SdkError::config_fmt(format_args!(
                "{} request failed with HTTP status {}",
                what, response.status_code
            )));
        }
        Ok(response.body)
    }

    fn trace_request(&self, what: &str, url: &str) {
        #[cfg(feature = "defmt")]
        if self.trace {
            defmt::debug!("{=str}: {=str}", what, url);
        }
        #[cfg(not(feature = "defmt"))]
        let _ = (self.trace, what, url);
    }
}
