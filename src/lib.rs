//! # libiotconnect - Rust device SDK for /IOTCONNECT
//!
//! A device-side SDK for the /IOTCONNECT platform. It resolves the broker
//! endpoint assigned to an account via the discovery service, fetches the
//! device identity (broker host, client ID, topics and feature flags) and can
//! exchange mutual-TLS device credentials for short-lived cloud storage
//! credentials used for Kinesis Video Streaming or S3 file storage.
//!
//! The library is transport-agnostic and designed for embedded systems: the
//! caller supplies a TLS-capable connector implementing the
//! [`transport::TlsConnect`] trait and the SDK drives the protocol over it.
//! This library supports `no_std` environments.
//!
//! ## Protocol flow
//!
//! 1. **Discovery** - `GET` to the global discovery endpoint resolves the
//!    regional base URL for the account.
//! 2. **Identity** - `GET {base_url}/uid/{duid}` resolves the per-device
//!    broker parameters and optional video-streaming / file-storage blocks.
//! 3. **Credentials** (optional) - a mutually authenticated `GET` against a
//!    credential endpoint from the identity data exchanges the device
//!    certificate for temporary STS credentials.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use libiotconnect::config::DeviceProperties;
//! use libiotconnect::rest::DeviceRestApi;
//! # use libiotconnect::config::TlsCredentials;
//! # use libiotconnect::transport::{Connection, TlsConnect, Error};
//! # struct MockConnection;
//! # impl libiotconnect::transport::Read for MockConnection {
//! #     fn read(&mut self, _buf: &mut [u8]) -> Result<usize, Error> { Ok(0) }
//! # }
//! # impl libiotconnect::transport::Write for MockConnection {
//! #     fn write(&mut self, _buf: &[u8]) -> Result<usize, Error> { Ok(0) }
//! #     fn flush(&mut self) -> Result<(), Error> { Ok(()) }
//! # }
//! # impl libiotconnect::transport::Close for MockConnection {
//! #     fn close(self) -> Result<(), Error> { Ok(()) }
//! # }
//! # impl Connection for MockConnection {}
//! # struct MockConnector;
//! # impl TlsConnect for MockConnector {
//! #     type Connection = MockConnection;
//! #     fn connect(
//! #         &mut self,
//! #         _remote: &str,
//! #         _identity: Option<&TlsCredentials<'_>>,
//! #     ) -> Result<Self::Connection, Error> { Ok(MockConnection) }
//! # }
//!
//! let properties = DeviceProperties {
//!     duid: "my-device-01",
//!     cpid: "MYCPID",
//!     env: "poc",
//!     platform: "aws",
//! };
//! properties.validate().unwrap();
//!
//! let connector = MockConnector;
//! let mut api = DeviceRestApi::new(properties, connector);
//!
//! // let identity = api.get_identity_data()?;
//! // let credentials = api.video_streaming_credentials()?;
//! ```
//!
//! ## Optional Features
//!
//! - `std`: Enable standard library support (default: disabled)
//! - `defmt`: Enable defmt logging support for embedded debugging

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

/// Device and account configuration: identity properties and TLS materials.
///
/// Contains [`config::DeviceProperties`] (DUID, CPID, environment, platform)
/// validated before any network operation, and [`config::TlsCredentials`]
/// carrying certificate/key paths for the mutual-TLS credential exchange.
pub mod config;

/// SDK error types.
///
/// Two kinds of failure: [`error::SdkError::Config`] for configuration and
/// platform-reported protocol errors, and [`error::SdkError::Client`] for
/// local parsing and logic failures.
pub mod error;

/// Typed mirrors of the /IOTCONNECT wire responses.
///
/// The discovery, identity and credentials response schemas, field names
/// matching the abbreviated JSON keys the platform emits.
pub mod protocol;

/// REST pipeline: URL building, response validation and the device facade.
///
/// The main entry point is [`rest::DeviceRestApi`], which sequences the
/// discovery and identity stages and exposes the credential-exchange
/// operations against the cached identity.
pub mod rest;

/// Transport abstraction layer: connection traits and a minimal HTTP client.
///
/// The SDK performs all network I/O through these traits; the caller
/// supplies TLS-capable implementations for the target platform.
pub mod transport;
