//! Minimal HTTP/1.1 client used for the discovery, identity and credential
//! requests.
//!
//! The SDK only ever issues `GET` requests with a handful of headers and
//! reads a single JSON body, so this client is deliberately small: one
//! request per connection, `Connection: close` semantics and a fixed-size
//! response buffer.

use crate::transport::{Connection, Error};
use heapless::Vec;

/// Maximum size of a serialized request.
pub const MAX_REQUEST_LEN: usize = 1024;

/// Maximum size of a response body.
///
/// Identity responses carry the full topic set and credential responses
/// carry an STS session token, either of which can exceed 2 KiB.
pub const MAX_BODY_LEN: usize = 4096;

/// A request header.
#[derive(Debug, Clone, Copy)]
pub struct Header<'a> {
    pub name: &'a str,
    pub value: &'a str,
}

/// A parsed HTTP response: the status code and the raw body bytes.
#[derive(Debug)]
pub struct Response {
    pub status_code: u16,
    pub body: Vec<u8, MAX_BODY_LEN>,
}

/// HTTP client over any [`Connection`].
pub struct Client<C: Connection> {
    connection: C,
}

impl<C: Connection> Client<C> {
    pub fn new(connection: C) -> Self {
        Self { connection }
    }

    /// Issues a single `GET` request and reads the response to completion.
    pub fn get(&mut self, path: &str, headers: &[Header<'_>]) -> Result<Response, Error> {
        // --- Build Request ---
        let mut request_buf: Vec<u8, MAX_REQUEST_LEN> = Vec::new();

        request_buf
            .extend_from_slice(b"GET ")
            .map_err(|_| Error::WriteError)?;
        request_buf
            .extend_from_slice(path.as_bytes())
            .map_err(|_| Error::WriteError)?;
        request_buf
            .extend_from_slice(b" HTTP/1.1\r\n")
            .map_err(|_| Error::WriteError)?;

        for header in headers {
            request_buf
                .extend_from_slice(header.name.as_bytes())
                .map_err(|_| Error::WriteError)?;
            request_buf
                .extend_from_slice(b": ")
                .map_err(|_| Error::WriteError)?;
            request_buf
                .extend_from_slice(header.value.as_bytes())
                .map_err(|_| Error::WriteError)?;
            request_buf
                .extend_from_slice(b"\r\n")
                .map_err(|_| Error::WriteError)?;
        }

        request_buf
            .extend_from_slice(b"Connection: close\r\n\r\n")
            .map_err(|_| Error::WriteError)?;

        // --- Send Request ---
        self.connection
            .write(&request_buf)
            .map_err(|_| Error::WriteError)?;
        self.connection.flush().map_err(|_| Error::WriteError)?;

        // --- Receive Response ---
        let mut response_buf = [0u8; MAX_BODY_LEN];
        let mut total_read = 0;
        loop {
            match self.connection.read(&mut response_buf[total_read..]) {
                Ok(0) if total_read > 0 => break, // Connection closed, but we have data
                Ok(0) => return Err(Error::ConnectionClosed),
                Ok(n) => {
                    total_read += n;
                    if total_read >= response_buf.len() {
                        break;
                    }
                    if find_slice(&response_buf[..total_read], b"\r\n\r\n").is_some() {
                        // All headers received; the body is completed below
                        // once Content-Length is known.
                        break;
                    }
                }
                Err(_) => return Err(Error::ReadError),
            }
        }

        // --- Parse Response ---
        let response_data = &response_buf[..total_read];

        let header_end_pos = find_slice(response_data, b"\r\n\r\n").ok_or(Error::ProtocolError)?;
        let header_data = &response_data[..header_end_pos];
        let body_data = &response_data[header_end_pos + 4..];

        let header_str = core::str::from_utf8(header_data).map_err(|_| Error::ProtocolError)?;
        let mut lines = header_str.lines();

        // Status line
        let status_line = lines.next().ok_or(Error::ProtocolError)?;
        let mut status_parts = status_line.splitn(3, ' ');
        status_parts.next(); // Skip HTTP version
        let status_code_str = status_parts.next().ok_or(Error::ProtocolError)?;
        let status_code = status_code_str
            .parse::<u16>()
            .map_err(|_| Error::ProtocolError)?;

        // The only response header the SDK needs is Content-Length.
        let mut content_length: Option<usize> = None;
        for line in lines {
            if line.is_empty() {
                continue;
            }
            let mut parts = line.splitn(2, ':');
            let name = parts.next().ok_or(Error::ProtocolError)?.trim();
            let value = parts.next().ok_or(Error::ProtocolError)?.trim();
            if name.eq_ignore_ascii_case("Content-Length") {
                content_length = value.parse::<usize>().ok();
            }
        }

        let mut body = Vec::from_slice(body_data).map_err(|_| Error::ProtocolError)?;
        match content_length {
            Some(len) => {
                if len > body.capacity() {
                    return Err(Error::ProtocolError);
                }
                while body.len() < len {
                    let mut temp_buf = [0; 256];
                    let remaining_len = len - body.len();
                    let read_len = core::cmp::min(remaining_len, temp_buf.len());

                    match self.connection.read(&mut temp_buf[..read_len]) {
                        Ok(0) => return Err(Error::ConnectionClosed), // Prematurely closed
                        Ok(n) => {
                            if body.extend_from_slice(&temp_buf[..n]).is_err() {
                                return Err(Error::ProtocolError);
                            }
                        }
                        Err(_) => return Err(Error::ReadError),
                    }
                }
                if body.len() > len {
                    body.truncate(len);
                }
            }
            None => {
                // No Content-Length: read until the server closes.
                loop {
                    let mut temp_buf = [0; 256];
                    match self.connection.read(&mut temp_buf) {
                        Ok(0) => break,
                        Ok(n) => {
                            if body.extend_from_slice(&temp_buf[..n]).is_err() {
                                return Err(Error::ProtocolError);
                            }
                        }
                        Err(_) => break,
                    }
                }
            }
        }

        Ok(Response { status_code, body })
    }

    /// Consumes the client, closing the underlying connection.
    pub fn close(self) -> Result<(), Error> {
        self.connection.close()
    }
}

impl<C: Connection> core::fmt::Debug for Client<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Client").finish_non_exhaustive()
    }
}

/// Finds the first occurrence of a slice in another slice and returns its starting position.
fn find_slice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
