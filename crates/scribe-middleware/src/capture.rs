//! The capturing response-writer decorator.
//!
//! [`CaptureWriter`] sits between the inner handler and the real response
//! writer. Every operation is forwarded unchanged; the only addition is an
//! in-memory copy of the status code and body bytes, scoped to the single
//! request, for the logger to inspect afterwards.

use bytes::BytesMut;
use http::{HeaderMap, StatusCode};
use scribe_core::ResponseWriter;
use std::io;

/// Decorator that records what a handler writes while forwarding it.
///
/// Header access delegates to the real writer's collection directly, so
/// handler mutations are visible downstream as normal. Writes append to an
/// internal buffer and then return whatever the real writer returns — a
/// failed write propagates to the handler exactly as it would without the
/// wrapper. The status code is recorded and forwarded unchanged; whether
/// repeated status writes take effect is the real writer's business.
///
/// Created at the start of request handling, discarded at the end. Never
/// shared or reused across requests.
///
/// # Example
///
/// ```rust
/// use scribe_core::{ResponseBuffer, ResponseWriter};
/// use scribe_middleware::CaptureWriter;
/// use http::StatusCode;
///
/// let mut real = ResponseBuffer::new();
/// let mut capture = CaptureWriter::new(&mut real);
///
/// capture.write_status(StatusCode::NOT_FOUND);
/// capture.write(b"not found").unwrap();
///
/// assert_eq!(capture.status(), StatusCode::NOT_FOUND);
/// assert_eq!(capture.body(), b"not found");
/// // The real writer saw everything too.
/// assert_eq!(real.status(), StatusCode::NOT_FOUND);
/// assert_eq!(real.body(), b"not found");
/// ```
#[derive(Debug)]
pub struct CaptureWriter<'a, W: ResponseWriter + ?Sized> {
    inner: &'a mut W,
    buf: BytesMut,
    status: Option<StatusCode>,
}

impl<'a, W: ResponseWriter + ?Sized> CaptureWriter<'a, W> {
    /// Wraps the real writer for one request.
    pub fn new(inner: &'a mut W) -> Self {
        Self {
            inner,
            buf: BytesMut::new(),
            status: None,
        }
    }

    /// Returns the recorded status code, or the implicit `200 OK` default
    /// if the handler never set one.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status.unwrap_or(StatusCode::OK)
    }

    /// Returns the buffered copy of everything written so far.
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.buf
    }
}

impl<W: ResponseWriter + ?Sized> ResponseWriter for CaptureWriter<'_, W> {
    fn headers(&self) -> &HeaderMap {
        self.inner.headers()
    }

    fn headers_mut(&mut self) -> &mut HeaderMap {
        self.inner.headers_mut()
    }

    fn write_status(&mut self, status: StatusCode) {
        self.status = Some(status);
        self.inner.write_status(status);
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        // Buffer the whole slice before forwarding: the captured body is
        // the concatenation of what the handler wrote, even if the real
        // writer reports a short write.
        self.buf.extend_from_slice(buf);
        self.inner.write(buf)
    }
}
