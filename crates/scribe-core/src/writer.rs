//! The outbound response-writer abstraction.
//!
//! Handlers produce responses by writing into a [`ResponseWriter`]:
//! mutate headers, set the status code at most once, then stream body
//! bytes. [`ResponseBuffer`] is the in-memory terminal implementation,
//! convertible into an `http::Response` once the handler is done.
//!
//! Write operations return `io::Result` so that transport failures from a
//! real connection-backed writer reach the handler exactly as `io::Write`
//! would surface them.

use bytes::{Bytes, BytesMut};
use http::{HeaderMap, Response, StatusCode};
use http_body_util::Full;
use std::io;

/// Destination for one outbound HTTP response.
///
/// The contract follows standard HTTP semantics: headers may be mutated
/// until the status is written, `write_status` is effective at most once,
/// and body bytes are appended in write order. Implementations report
/// transport failures through the `io::Result` of [`write`](Self::write).
pub trait ResponseWriter {
    /// Returns the response header collection.
    fn headers(&self) -> &HeaderMap;

    /// Returns the response header collection for mutation.
    fn headers_mut(&mut self) -> &mut HeaderMap;

    /// Sets the response status code.
    fn write_status(&mut self, status: StatusCode);

    /// Writes body bytes, returning how many were accepted.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize>;
}

/// In-memory terminal [`ResponseWriter`].
///
/// Accumulates status, headers and body for a single response, then
/// converts into an `http::Response<Full<Bytes>>`. Created at the start of
/// request handling and consumed at the end; never shared between
/// requests.
///
/// # Example
///
/// ```rust
/// use scribe_core::{ResponseBuffer, ResponseWriter};
/// use http::StatusCode;
///
/// let mut buffer = ResponseBuffer::new();
/// buffer.write_status(StatusCode::NOT_FOUND);
/// buffer.write(b"not found").unwrap();
///
/// let response = buffer.into_response();
/// assert_eq!(response.status(), StatusCode::NOT_FOUND);
/// ```
#[derive(Debug, Default)]
pub struct ResponseBuffer {
    status: Option<StatusCode>,
    headers: HeaderMap,
    body: BytesMut,
}

impl ResponseBuffer {
    /// Creates an empty response buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the effective status: the explicitly written one, or the
    /// implicit `200 OK` default.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status.unwrap_or(StatusCode::OK)
    }

    /// Returns the explicitly written status, if any.
    #[must_use]
    pub fn explicit_status(&self) -> Option<StatusCode> {
        self.status
    }

    /// Returns the accumulated body bytes.
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Consumes the buffer into an `http::Response`.
    #[must_use]
    pub fn into_response(self) -> Response<Full<Bytes>> {
        let mut response = Response::new(Full::new(self.body.freeze()));
        *response.status_mut() = self.status.unwrap_or(StatusCode::OK);
        *response.headers_mut() = self.headers;
        response
    }
}

impl ResponseWriter for ResponseBuffer {
    fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    fn write_status(&mut self, status: StatusCode) {
        // First write wins; a status line can only be sent once.
        if self.status.is_none() {
            self.status = Some(status);
        }
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.body.extend_from_slice(buf);
        Ok(buf.len())
    }
}
