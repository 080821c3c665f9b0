//! Identity response schema.
//!
//! `GET {base_url}/uid/{duid}` returns the per-device broker connection
//! parameters, device metadata, capability flags and the optional
//! video-streaming (`vs`) and file-storage (`fs`) blocks.

use heapless::{String, Vec};
use serde::Deserialize;

use super::{
    MAX_BUCKETS, MAX_CLIENT_ID_LEN, MAX_HOST_LEN, MAX_MESSAGE_LEN, MAX_NAME_LEN, MAX_ROLE_ARN_LEN,
    MAX_TIMESTAMP_LEN, MAX_TOPIC_LEN, MAX_URL_LEN, MAX_USERNAME_LEN, MAX_VERSION_LEN,
};

/// Device metadata (`meta` block).
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct IdentityMeta {
    /// Authentication type.
    pub at: Option<i32>,
    /// Data frequency.
    pub df: Option<i32>,
    /// Short device code.
    pub cd: Option<String<16>>,
    /// Non-zero when the device is a gateway.
    pub gtw: Option<i32>,
    /// Non-zero when the device is an edge device.
    pub edge: Option<i32>,
    /// Platform flag.
    pub pf: Option<i32>,
    /// Hardware version.
    pub hwv: String<MAX_VERSION_LEN>,
    /// Software version.
    pub swv: String<MAX_VERSION_LEN>,
    /// Protocol version, e.g. `2.1`.
    pub v: f32,
}

/// Capability flags (`has` block): which features the device template has.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct IdentityFlags {
    /// Device-to-cloud data.
    pub d: i32,
    /// Attributes.
    pub attr: i32,
    /// Settings (shadow/twin).
    pub set: i32,
    /// Rules.
    pub r: i32,
    /// Over-the-air update support.
    pub ota: i32,
}

/// Settings topics (`topics.set` block).
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct IdentityTopicSet {
    /// Publish topic for this device's settings.
    #[serde(rename = "pub")]
    pub publish: Option<String<MAX_TOPIC_LEN>>,
    /// Subscribe topic for this device's settings.
    pub sub: Option<String<MAX_TOPIC_LEN>>,
    /// Publish topic covering all child devices.
    #[serde(rename = "pubForAll")]
    pub pub_for_all: Option<String<MAX_TOPIC_LEN>>,
    /// Subscribe topic covering all child devices.
    #[serde(rename = "subForAll")]
    pub sub_for_all: Option<String<MAX_TOPIC_LEN>>,
}

/// MQTT topic set for the device (`topics` block).
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct IdentityTopics {
    /// Telemetry reporting.
    pub rpt: Option<String<MAX_TOPIC_LEN>>,
    /// Fault telemetry.
    pub flt: Option<String<MAX_TOPIC_LEN>>,
    /// Offline data.
    pub od: Option<String<MAX_TOPIC_LEN>>,
    /// Heartbeat.
    pub hb: Option<String<MAX_TOPIC_LEN>>,
    /// Command acknowledgements.
    pub ack: Option<String<MAX_TOPIC_LEN>>,
    /// Device logs.
    pub dl: Option<String<MAX_TOPIC_LEN>>,
    /// Device info.
    pub di: Option<String<MAX_TOPIC_LEN>>,
    /// Firmware update.
    pub fu: Option<String<MAX_TOPIC_LEN>>,
    /// Cloud-to-device messages.
    pub c2d: Option<String<MAX_TOPIC_LEN>>,
    /// Settings topics.
    pub set: IdentityTopicSet,
}

/// Video-streaming block (`vs`): Kinesis Video Streaming configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct IdentityVideoStreaming {
    /// AWS IoT credentials endpoint for KVS.
    pub url: Option<String<MAX_URL_LEN>>,
    /// Whether streaming should start automatically. The wire key `as` is a
    /// Rust keyword, hence the rename.
    #[serde(rename = "as")]
    pub auto_start: Option<bool>,
}

/// A single storage bucket entry in the file-storage block.
///
/// When `ca` is true, the bucket lives in a different cloud account and
/// S3 access requires an additional AssumeRole exchange against the role in
/// `rarn`; the SDK surfaces these fields but does not perform that exchange.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct IdentityBucket {
    /// Bucket name.
    pub bn: Option<String<MAX_NAME_LEN>>,
    /// Cross-account flag.
    pub ca: Option<bool>,
    /// Role ARN to assume for cross-account access.
    pub rarn: Option<String<MAX_ROLE_ARN_LEN>>,
}

/// File-storage block (`fs`): S3 storage access configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct IdentityFileStorage {
    /// AWS IoT credentials endpoint for S3 access.
    pub url: Option<String<MAX_URL_LEN>>,
    /// Buckets accessible with the exchanged credentials.
    pub buckets: Option<Vec<IdentityBucket, MAX_BUCKETS>>,
}

/// Broker connection parameters (`p` block).
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct IdentityMqtt {
    /// Device name.
    pub n: Option<String<MAX_NAME_LEN>>,
    /// Broker host.
    pub h: Option<String<MAX_HOST_LEN>>,
    /// Broker port.
    pub p: u16,
    /// Client ID (thing name).
    pub id: Option<String<MAX_CLIENT_ID_LEN>>,
    /// Broker username.
    pub un: Option<String<MAX_USERNAME_LEN>>,
    /// MQTT topic set.
    pub topics: IdentityTopics,
    /// Optional video-streaming configuration.
    pub vs: Option<IdentityVideoStreaming>,
    /// Optional file-storage configuration.
    pub fs: Option<IdentityFileStorage>,
}

/// Inner `d` block of the identity response.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct IdentityData {
    /// Application error code; `0` means success.
    pub ec: i32,
    /// Connection type.
    pub ct: i32,
    /// Device metadata.
    pub meta: IdentityMeta,
    /// Capability flags.
    pub has: IdentityFlags,
    /// Broker connection parameters.
    pub p: IdentityMqtt,
    /// Server timestamp.
    pub dt: Option<String<MAX_TIMESTAMP_LEN>>,
}

/// Top-level identity response envelope.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct IdentityResponse {
    /// Inner data block; absence is a protocol error.
    pub d: Option<IdentityData>,
    /// Outer HTTP-like status; expected `200`.
    pub status: Option<u16>,
    /// Server-provided message.
    pub message: Option<String<MAX_MESSAGE_LEN>>,
}
