//! Device and account configuration for the /IOTCONNECT platform.

use crate::error::SdkError;

/// Platform value for AWS IoT Core backed accounts.
pub const PLATFORM_AWS: &str = "aws";

/// Platform value for Azure IoT Hub backed accounts.
pub const PLATFORM_AZURE: &str = "az";

/// The /IOTCONNECT device properties: the Device Unique ID (DUID) and
/// account properties like CPID, environment and platform.
///
/// Created by the caller before any network operation and immutable after
/// construction. Validation is on demand via [`DeviceProperties::validate`];
/// it is not enforced implicitly by other operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceProperties<'a> {
    /// Your Device Unique ID.
    pub duid: &'a str,
    /// Your account CPID (Company ID). You can locate this in the
    /// /IOTCONNECT web UI at Settings -> Key Vault.
    pub cpid: &'a str,
    /// Your account environment. You can locate this in the /IOTCONNECT
    /// web UI at Settings -> Key Vault.
    pub env: &'a str,
    /// The IoT platform backing the account: either [`PLATFORM_AWS`] for
    /// AWS IoT Core or [`PLATFORM_AZURE`] for Azure IoT Hub.
    pub platform: &'a str,
}

impl DeviceProperties<'_> {
    /// Format validation for cases where custom topic configuration may be
    /// needed.
    ///
    /// Fails with a configuration error when any of duid/cpid/env is shorter
    /// than two characters or the platform is not in the supported set. Pure
    /// precondition check with no network or file-system side effects.
    pub fn validate(&self) -> Result<(), SdkError> {
        if self.duid.len() < 2 {
            return Err(SdkError::config(
                "DeviceProperties: Device Unique ID (DUID) is missing",
            ));
        }
        if self.cpid.len() < 2 {
            return Err(SdkError::config("DeviceProperties: CPID value is missing"));
        }
        if self.env.len() < 2 {
            return Err(SdkError::config(
                "DeviceProperties: Environment value is missing",
            ));
        }
        if self.platform != PLATFORM_AWS && self.platform != PLATFORM_AZURE {
            return Err(SdkError::config(
                "DeviceProperties: Platform must be \"aws\" or \"az\"",
            ));
        }
        Ok(())
    }
}

/// Mutual-TLS materials for the "credentials" endpoints used by Kinesis
/// Video Streaming and the S3 storage access API.
///
/// Carries file paths only. The SDK never validates file existence or parses
/// certificate contents; that is delegated to the TLS connector at
/// connection time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TlsCredentials<'a> {
    /// Path to the device certificate file.
    pub device_cert_path: &'a str,
    /// Path to the device private key file.
    pub device_pkey_path: &'a str,
    /// Path to the server CA certificate file. If not specified, the
    /// connector's system CA certificates are used.
    pub server_ca_cert_path: Option<&'a str>,
}
